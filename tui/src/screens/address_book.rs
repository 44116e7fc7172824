//! Address book: filtered list, the entry form, or a delete confirmation.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph, Row, Table, TableState};

use waybill_engine::{AddressBookView, AddressForm, App};

use crate::{Palette, field_line, field_style, panel};

pub fn draw(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    palette: &Palette,
    pointer: &'static str,
) {
    draw_list(frame, area, app, palette, pointer);
    match &app.address_book.view {
        AddressBookView::List => {}
        AddressBookView::Form(form) => draw_form(frame, area, form, app, palette),
        AddressBookView::ConfirmDelete { .. } => draw_confirm(frame, area, palette),
    }
}

fn draw_list(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, pointer: &'static str) {
    let [search_area, list_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let book = &app.address_book;
    let in_list = matches!(book.view, AddressBookView::List);
    frame.render_widget(
        Paragraph::new(field_line("Search", &book.query, in_list, palette))
            .block(panel(" Filter ", palette)),
        search_area,
    );

    let title = if book.loading {
        " Addresses (loading...) "
    } else {
        " Addresses "
    };
    let rows: Vec<Row> = book
        .entries
        .iter()
        .map(|entry| {
            Row::new(vec![
                Line::raw(entry.kind.as_str()),
                Line::raw(entry.name.as_deref().unwrap_or("-")),
                Line::raw(entry.company_name.as_deref().unwrap_or("-")),
                Line::raw(entry.city.as_deref().unwrap_or("-")),
                Line::raw(entry.contact.as_deref().unwrap_or("-")),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Min(12),
            Constraint::Min(14),
            Constraint::Length(14),
            Constraint::Length(16),
        ],
    )
    .header(
        Row::new(vec!["Kind", "Name", "Company", "City", "Contact"]).style(
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
    if !book.entries.is_empty() {
        state.select(Some(book.selected));
    }
    frame.render_stateful_widget(table, list_area, &mut state);
}

fn draw_form(frame: &mut Frame, area: Rect, form: &AddressForm, app: &App, palette: &Palette) {
    let [card] = Layout::horizontal([Constraint::Length(56)])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::vertical([Constraint::Length(14)])
        .flex(Flex::Center)
        .areas(card);

    let title = if form.entry_id.is_some() {
        " Edit address "
    } else {
        " New address "
    };

    let mut lines = vec![field_line(
        "Kind",
        form.draft.kind.as_str(),
        form.focus == 0,
        palette,
    )];
    for (i, field) in AddressForm::FIELDS.iter().enumerate() {
        lines.push(field_line(
            field.label(),
            form.draft.get(*field),
            form.focus == i + 1,
            palette,
        ));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        if app.address_book.saving {
            "Saving..."
        } else {
            "Enter save  Esc cancel"
        },
        Style::default().fg(palette.text_muted),
    ));

    frame.render_widget(Clear, card);
    frame.render_widget(Paragraph::new(lines).block(panel(title, palette)), card);
}

fn draw_confirm(frame: &mut Frame, area: Rect, palette: &Palette) {
    let [card] = Layout::horizontal([Constraint::Length(44)])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::vertical([Constraint::Length(5)])
        .flex(Flex::Center)
        .areas(card);

    let lines = vec![
        Line::styled("Delete this address?", field_style(palette, true)),
        Line::raw(""),
        Line::styled(
            "y delete  n keep",
            Style::default().fg(palette.text_muted),
        ),
    ];
    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(lines).block(panel(" Confirm ", palette)),
        card,
    );
}
