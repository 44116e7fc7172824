//! Dashboard screen state: shipment totals plus recent shipments.

use waybill_types::DashboardData;

#[derive(Debug, Default)]
pub struct DashboardState {
    pub data: Option<DashboardData>,
    pub loading: bool,
}

impl DashboardState {
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// A fetch finished; stale data is replaced wholesale.
    pub fn apply(&mut self, data: DashboardData) {
        self.data = Some(data);
        self.loading = false;
    }

    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }
}
