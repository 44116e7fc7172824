//! Profile settings: account and security tabs.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Tabs};

use waybill_engine::{AccountFocus, App, ProfileTab};
use waybill_types::{PasswordField, ProfileField};

use crate::{Palette, field_line, masked, panel};

pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let [tabs_area, body] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let screen = &app.profile;
    let tabs = Tabs::new(vec![ProfileTab::Account.title(), ProfileTab::Security.title()])
        .select(match screen.tab {
            ProfileTab::Account => 0,
            ProfileTab::Security => 1,
        })
        .style(Style::default().fg(palette.text_secondary))
        .highlight_style(
            Style::default()
                .fg(palette.primary_light)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    frame.render_widget(tabs, tabs_area);

    match screen.tab {
        ProfileTab::Account => draw_account(frame, body, app, palette),
        ProfileTab::Security => draw_security(frame, body, app, palette),
    }
}

fn draw_account(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let screen = &app.profile;
    let title = if screen.loading {
        " Account (loading...) "
    } else {
        " Account "
    };

    let mut lines: Vec<Line> = ProfileField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            field_line(field.label(), screen.draft.get(*field), screen.account_focus == i, palette)
        })
        .collect();

    lines.push(Line::raw(""));
    lines.push(field_line(
        "Photo file",
        &screen.photo_path,
        screen.account_focus() == AccountFocus::PhotoPath,
        palette,
    ));
    if let Some(url) = app
        .session
        .as_ref()
        .and_then(|s| s.profile().profile_photo.as_deref())
    {
        lines.push(Line::styled(
            format!("Current photo: {url}"),
            Style::default().fg(palette.text_muted),
        ));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        if screen.saving { "Saving..." } else { "Enter on a field saves; Enter on Photo file uploads" },
        Style::default().fg(palette.text_muted),
    ));

    frame.render_widget(Paragraph::new(lines).block(panel(title, palette)), area);
}

fn draw_security(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let screen = &app.profile;
    let values: Vec<String> = PasswordField::ALL
        .iter()
        .map(|field| masked(screen.password.get(*field)))
        .collect();
    let mut lines: Vec<Line> = Vec::with_capacity(values.len() + 2);
    for (i, field) in PasswordField::ALL.iter().enumerate() {
        lines.push(field_line(
            field.label(),
            &values[i],
            screen.security_focus == i,
            palette,
        ));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        if screen.saving {
            "Saving..."
        } else {
            "Enter change password"
        },
        Style::default().fg(palette.text_muted),
    ));

    frame.render_widget(
        Paragraph::new(lines).block(panel(" Security ", palette)),
        area,
    );
}
