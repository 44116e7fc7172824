//! Dashboard: shipment totals and the most recent shipments.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Row, Table};

use waybill_engine::App;

use crate::{Palette, panel, status_style};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [stats, recent] = Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).areas(area);

    let cells = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(stats);

    let data = app.dashboard.data.as_ref();
    let totals = [
        ("Total", data.map_or(0, |d| d.total_shipments)),
        ("Pending", data.map_or(0, |d| d.pending_shipments)),
        ("Delivered", data.map_or(0, |d| d.delivered_shipments)),
    ];
    for (rect, (label, count)) in cells.iter().zip(totals) {
        let lines = vec![
            Line::styled(
                count.to_string(),
                Style::default()
                    .fg(palette.primary_light)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(label, Style::default().fg(palette.text_secondary)),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(panel(" Shipments ", palette)),
            *rect,
        );
    }

    let title = if app.dashboard.loading {
        " Recent shipments (loading...) "
    } else {
        " Recent shipments "
    };
    let rows: Vec<Row> = data
        .map(|d| d.recent_shipments.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|parcel| {
            let status = parcel.parcel_status.as_deref().unwrap_or("");
            Row::new(vec![
                Line::raw(parcel.air_way_bill.as_deref().unwrap_or("-")),
                Line::raw(parcel.receiver_company_name.as_deref().unwrap_or("-")),
                Line::raw(parcel.weight.as_deref().unwrap_or("-")),
                Line::styled(status.to_string(), status_style(palette, status)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(18),
            Constraint::Min(16),
            Constraint::Length(8),
            Constraint::Length(26),
        ],
    )
    .header(
        Row::new(vec!["AWB", "Receiver", "Weight", "Status"]).style(
            Style::default()
                .fg(palette.text_muted)
                .add_modifier(Modifier::BOLD),
        ),
    )
    .block(panel(title, palette))
    .style(Style::default().fg(palette.text_primary));

    frame.render_widget(table, recent);
}
