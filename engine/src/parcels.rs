//! Parcel list screen: free-text search plus a date-range filter.

use chrono::NaiveDate;

use waybill_api::ParcelFilter;
use waybill_types::ParcelSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFocus {
    Query,
    FromDate,
    ToDate,
}

impl FilterFocus {
    pub const ORDER: [FilterFocus; 3] =
        [FilterFocus::Query, FilterFocus::FromDate, FilterFocus::ToDate];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FilterFocus::Query => "Search",
            FilterFocus::FromDate => "From (YYYY-MM-DD)",
            FilterFocus::ToDate => "To (YYYY-MM-DD)",
        }
    }
}

#[derive(Debug)]
pub struct ParcelList {
    pub filter: ParcelFilter,
    pub focus: usize,
    pub records: Vec<ParcelSummary>,
    pub selected: usize,
    pub loading: bool,
}

impl Default for ParcelList {
    fn default() -> Self {
        Self {
            filter: ParcelFilter::default(),
            focus: 0,
            records: Vec::new(),
            selected: 0,
            loading: false,
        }
    }
}

impl ParcelList {
    /// The non-empty date filters must parse as `YYYY-MM-DD` before a
    /// fetch goes out. Returns the offending label on failure.
    pub fn validate_filter(&self) -> Result<(), &'static str> {
        if !date_ok(&self.filter.from_date) {
            return Err("From date must be YYYY-MM-DD");
        }
        if !date_ok(&self.filter.to_date) {
            return Err("To date must be YYYY-MM-DD");
        }
        Ok(())
    }

    pub fn focused_value_mut(&mut self) -> &mut String {
        match FilterFocus::ORDER[self.focus] {
            FilterFocus::Query => &mut self.filter.query,
            FilterFocus::FromDate => &mut self.filter.from_date,
            FilterFocus::ToDate => &mut self.filter.to_date,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FilterFocus::ORDER.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FilterFocus::ORDER.len() - 1) % FilterFocus::ORDER.len();
    }

    pub fn set_records(&mut self, records: Vec<ParcelSummary>) {
        self.records = records;
        if self.selected >= self.records.len() {
            self.selected = self.records.len().saturating_sub(1);
        }
        self.loading = false;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.records.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    #[must_use]
    pub fn selected_parcel(&self) -> Option<&ParcelSummary> {
        self.records.get(self.selected)
    }
}

fn date_ok(value: &str) -> bool {
    value.is_empty() || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::ParcelList;
    use waybill_types::ParcelSummary;

    fn summary(id: u64) -> ParcelSummary {
        serde_json::from_value(serde_json::json!({ "id": id })).unwrap()
    }

    #[test]
    fn empty_date_filters_are_valid() {
        let list = ParcelList::default();
        assert!(list.validate_filter().is_ok());
    }

    #[test]
    fn malformed_dates_are_rejected_with_the_field_named() {
        let mut list = ParcelList::default();
        list.filter.from_date = "2025-13-40".into();
        assert_eq!(
            list.validate_filter().unwrap_err(),
            "From date must be YYYY-MM-DD"
        );

        list.filter.from_date = "2025-01-15".into();
        list.filter.to_date = "not-a-date".into();
        assert_eq!(
            list.validate_filter().unwrap_err(),
            "To date must be YYYY-MM-DD"
        );

        list.filter.to_date = "2025-01-31".into();
        assert!(list.validate_filter().is_ok());
    }

    #[test]
    fn refresh_clamps_the_selection() {
        let mut list = ParcelList::default();
        list.set_records(vec![summary(1), summary(2), summary(3)]);
        list.select_next();
        list.select_next();
        assert_eq!(list.selected, 2);

        list.set_records(vec![summary(1)]);
        assert_eq!(list.selected, 0);
        assert_eq!(list.selected_parcel().unwrap().id, 1);

        list.set_records(Vec::new());
        assert!(list.selected_parcel().is_none());
    }
}
