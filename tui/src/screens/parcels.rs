//! Parcel list: filter bar plus the result table.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Row, Table, TableState};

use waybill_engine::{App, FilterFocus};

use crate::{Palette, field_line, panel, status_style};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, pointer: &'static str) {
    let [filter_area, list_area] =
        Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);

    let list = &app.parcels;
    let lines: Vec<Line> = FilterFocus::ORDER
        .iter()
        .enumerate()
        .map(|(i, focus)| {
            let value = match focus {
                FilterFocus::Query => &list.filter.query,
                FilterFocus::FromDate => &list.filter.from_date,
                FilterFocus::ToDate => &list.filter.to_date,
            };
            field_line(focus.label(), value, list.focus == i, palette)
        })
        .collect();
    frame.render_widget(
        ratatui::widgets::Paragraph::new(lines).block(panel(" Filters ", palette)),
        filter_area,
    );

    let title = if list.loading {
        " Parcels (loading...) "
    } else {
        " Parcels "
    };
    let rows: Vec<Row> = list
        .records
        .iter()
        .map(|parcel| {
            let status = parcel.parcel_status.as_deref().unwrap_or("");
            Row::new(vec![
                Line::raw(parcel.air_way_bill.as_deref().unwrap_or("-")),
                Line::raw(parcel.sender_company_name.as_deref().unwrap_or("-")),
                Line::raw(parcel.receiver_company_name.as_deref().unwrap_or("-")),
                Line::raw(format!(
                    "{} {}",
                    parcel.price.as_deref().unwrap_or("-"),
                    parcel.currency.as_deref().unwrap_or("")
                )),
                Line::styled(status.to_string(), status_style(palette, status)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Min(14),
            Constraint::Min(14),
            Constraint::Length(12),
            Constraint::Length(26),
        ],
    )
    .header(
        Row::new(vec!["AWB", "Sender", "Receiver", "Price", "Status"]).style(
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(panel(title, palette))
    .style(Style::default().fg(palette.text_primary))
    .row_highlight_style(
        Style::default()
            .bg(palette.bg_highlight)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol(pointer);

    let mut state = TableState::default();
    if !list.records.is_empty() {
        state.select(Some(list.selected));
    }
    frame.render_stateful_widget(table, list_area, &mut state);
}
