//! The parcel form wizard: stepper header plus the active step's fields.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use waybill_engine::{App, FormMode, FormStep, ItemFocus, ParcelForm, SenderFocus};
use waybill_types::PartyField;

use crate::{Palette, field_line, panel};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(form) = app.parcel_form.as_ref() else {
        return;
    };

    let [stepper_area, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    draw_stepper(frame, stepper_area, form, palette);

    if form.loading {
        frame.render_widget(
            Paragraph::new("Loading parcel...")
                .style(Style::default().fg(palette.text_muted))
                .block(panel(" Edit parcel ", palette)),
            body,
        );
        return;
    }

    match form.step {
        FormStep::Sender => draw_sender(frame, body, form, palette),
        FormStep::Receiver => draw_receiver(frame, body, form, palette),
        FormStep::Items => draw_items(frame, body, form, palette),
    }
}

fn draw_stepper(frame: &mut Frame, area: Rect, form: &ParcelForm, palette: &Palette) {
    let mut spans = vec![Span::styled(
        match form.mode {
            FormMode::Create => " New parcel ",
            FormMode::Edit { .. } => " Edit parcel ",
        },
        Style::default().fg(palette.text_muted),
    )];
    for step in [FormStep::Sender, FormStep::Receiver, FormStep::Items] {
        spans.push(Span::raw("  "));
        let style = if step == form.step {
            Style::default()
                .fg(palette.primary_light)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else if step.index() < form.step.index() {
            Style::default().fg(palette.success)
        } else {
            Style::default().fg(palette.text_muted)
        };
        spans.push(Span::styled(
            format!("{}. {}", step.index() + 1, step.title()),
            style,
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_sender(frame: &mut Frame, area: Rect, form: &ParcelForm, palette: &Palette) {
    let mut lines: Vec<Line> = SenderFocus::ORDER
        .iter()
        .enumerate()
        .map(|(i, focus)| {
            let value = match focus {
                SenderFocus::Contact(field) => form.draft.sender.get(*field),
                SenderFocus::PickupDate => form.draft.sender.pickup_request_date.as_str(),
                SenderFocus::PickupTime => form.draft.sender.pickup_request_time.as_str(),
            };
            field_line(focus.label(), value, form.sender_focus == i, palette)
        })
        .collect();

    lines.push(Line::raw(""));
    if !form.pickup_schedule_valid() {
        lines.push(Line::styled(
            "Pickup schedule must be YYYY-MM-DD and HH:MM",
            Style::default().fg(palette.warning),
        ));
    } else if !form.can_advance() {
        lines.push(Line::styled(
            "All sender fields are required before continuing",
            Style::default().fg(palette.text_muted),
        ));
    }

    frame.render_widget(
        Paragraph::new(lines).block(panel(" Sender ", palette)),
        area,
    );
}

fn draw_receiver(frame: &mut Frame, area: Rect, form: &ParcelForm, palette: &Palette) {
    let lines: Vec<Line> = PartyField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            field_line(
                field.label(),
                form.draft.receiver.get(*field),
                form.receiver_focus == i,
                palette,
            )
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).block(panel(" Receiver ", palette)),
        area,
    );
}

fn draw_items(frame: &mut Frame, area: Rect, form: &ParcelForm, palette: &Palette) {
    // A hydrated parcel can have no items; ^T adds one.
    let Some(item) = form.draft.items.get(form.active_item) else {
        frame.render_widget(
            Paragraph::new("No items. Press ^T to add one.")
                .style(Style::default().fg(palette.text_muted))
                .block(panel(" Items ", palette)),
            area,
        );
        return;
    };
    let title = format!(
        " Item {}/{} ",
        form.active_item + 1,
        form.draft.items.len()
    );

    let mut lines: Vec<Line> = Vec::with_capacity(ItemFocus::ORDER.len() + 3);
    for (i, focus) in ItemFocus::ORDER.iter().enumerate() {
        let value = match focus {
            ItemFocus::Text(field) => item.get(*field),
            ItemFocus::ItemType => item.item_type.as_str(),
            ItemFocus::PaidBy => item.paid_by.map_or("-", |p| p.as_str()),
            ItemFocus::Account => item.ac.as_str(),
        };
        lines.push(field_line(focus.label(), value, form.item_focus == i, palette));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("Dimension", Style::default().fg(palette.text_muted)),
        Span::raw("          "),
        Span::styled(
            item.dimension.as_str(),
            Style::default()
                .fg(palette.primary_light)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    if form.submitting {
        lines.push(Line::styled(
            "Submitting...",
            Style::default().fg(palette.text_muted),
        ));
    }

    frame.render_widget(Paragraph::new(lines).block(panel(&title, palette)), area);
}
