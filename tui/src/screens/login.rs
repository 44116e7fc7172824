//! Login screen: a centered card with email and password.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use waybill_engine::{App, LoginField};

use crate::{Palette, field_line, masked, panel};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [card] = Layout::horizontal([Constraint::Length(54)])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::vertical([Constraint::Length(9)])
        .flex(Flex::Center)
        .areas(card);

    let form = &app.login;
    let password = masked(&form.password);
    let status = if form.submitting { "Signing in..." } else { "" };

    let lines = vec![
        Line::styled(
            "Sign in to continue",
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        field_line("Email", &form.email, form.focus == LoginField::Email, palette),
        field_line(
            "Password",
            &password,
            form.focus == LoginField::Password,
            palette,
        ),
        Line::raw(""),
        Line::styled(status, Style::default().fg(palette.text_muted)),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(panel(" Waybill ", palette)),
        card,
    );
}
