//! TUI rendering for Waybill using ratatui.

mod input;
mod screens;
mod theme;

pub use input::handle_key;
pub use theme::{Palette, UiOptions, field_style, palette, status_style};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use waybill_engine::{App, NoticeKind, Screen};

/// Label column width for form rows; labels wider than this are not padded.
const LABEL_WIDTH: usize = 18;

/// Marker in front of the selected table row.
const fn pointer(options: UiOptions) -> &'static str {
    if options.ascii_only { "> " } else { "▸ " }
}

/// Main draw function, called once per frame.
pub fn draw(frame: &mut Frame, app: &App, options: UiOptions) {
    let palette = palette(options);
    let bg = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg, frame.area());

    if app.screen == Screen::Login {
        screens::login::draw(frame, frame.area(), app, &palette);
        draw_notices(frame, app, &palette);
        return;
    }

    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, header, app, &palette);
    match app.screen {
        Screen::Login => unreachable!("handled above"),
        Screen::Dashboard => screens::dashboard::draw(frame, body, app, &palette),
        Screen::Parcels => screens::parcels::draw(frame, body, app, &palette, pointer(options)),
        Screen::ParcelForm => screens::parcel_form::draw(frame, body, app, &palette),
        Screen::AddressBook => {
            screens::address_book::draw(frame, body, app, &palette, pointer(options));
        }
        Screen::Profile => screens::profile::draw(frame, body, app, &palette),
    }
    draw_footer(frame, footer, app, &palette);
    draw_notices(frame, app, &palette);
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let tabs = [
        (Screen::Dashboard, "Dashboard"),
        (Screen::Parcels, "Parcels"),
        (Screen::AddressBook, "Address Book"),
        (Screen::Profile, "Profile"),
    ];

    let mut spans = vec![Span::styled(
        " Waybill ",
        Style::default()
            .fg(palette.text_primary)
            .bg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )];
    for (screen, title) in tabs {
        spans.push(Span::raw("  "));
        let active = app.screen == screen
            || (screen == Screen::Parcels && app.screen == Screen::ParcelForm);
        let style = if active {
            Style::default()
                .fg(palette.primary_light)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.text_secondary)
        };
        spans.push(Span::styled(title, style));
    }
    if let Some(name) = app
        .session
        .as_ref()
        .and_then(|s| s.profile().name.as_deref())
    {
        let width = usize::from(area.width);
        let used: usize = spans.iter().map(|s| s.content.width()).sum();
        let pad = width.saturating_sub(used + name.width() + 1);
        spans.push(Span::raw(" ".repeat(pad)));
        spans.push(Span::styled(name, Style::default().fg(palette.text_muted)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let hints = match app.screen {
        Screen::Login => "Tab switch field  Enter sign in  Esc quit",
        Screen::Dashboard => {
            "^R refresh  ^N new parcel  ^P parcels  ^B addresses  ^O profile  ^L logout  ^C quit"
        }
        Screen::Parcels => {
            "type to filter  Enter search  Up/Down select  ^E edit  ^N new  ^D dashboard  ^C quit"
        }
        Screen::ParcelForm => {
            "Tab next field  Space cycle  Enter next step/submit  Esc back  ^T add item  ^X remove  PgUp/PgDn item"
        }
        Screen::AddressBook => {
            "type to filter  Enter search  ^N new  ^E edit  Del delete  ^D dashboard  ^C quit"
        }
        Screen::Profile => "Tab next field  Left/Right tab  Enter save  ^D dashboard  ^C quit",
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(palette.text_muted)),
        area,
    );
}

/// Notices stack in the bottom-right corner, newest last.
fn draw_notices(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    for (i, notice) in app.notices.iter().enumerate() {
        let width = u16::try_from(notice.text.width() + 4).unwrap_or(u16::MAX).min(area.width);
        let y_offset = u16::try_from(3 * (i + 1)).unwrap_or(u16::MAX);
        if y_offset + 1 > area.height {
            break;
        }
        let rect = Rect {
            x: area.width.saturating_sub(width + 1),
            y: area.height.saturating_sub(y_offset + 1),
            width,
            height: 3,
        };
        let color = match notice.kind {
            NoticeKind::Success => palette.success,
            NoticeKind::Error => palette.error,
        };
        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(notice.text.as_str())
                .alignment(Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .style(Style::default().fg(color).bg(palette.bg_panel)),
            rect,
        );
    }
}

/// One labelled form row, the label padded to a fixed column.
pub(crate) fn field_line<'a>(
    label: &'a str,
    value: &'a str,
    focused: bool,
    palette: &Palette,
) -> Line<'a> {
    let pad = LABEL_WIDTH.saturating_sub(label.width());
    Line::from(vec![
        Span::styled(label, Style::default().fg(palette.text_muted)),
        Span::raw(" ".repeat(pad + 1)),
        Span::styled(value, field_style(palette, focused)),
    ])
}

/// A bordered panel with a title in the brand color.
pub(crate) fn panel<'a>(title: &'a str, palette: &Palette) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.primary_light))
        .title(Span::styled(
            title,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(palette.bg_panel))
}

/// Mask a secret for display.
pub(crate) fn masked(value: &str) -> String {
    "*".repeat(value.chars().count())
}
