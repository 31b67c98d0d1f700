//! Screen layout for the selector

use super::notifications::NotificationManager;
use super::theme::Palette;
use super::widgets::{EntryList, ErrorLine, InputBox, StatusBar};
use crate::icons::icons;
use crate::session::Session;
use crate::types::DisplayMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub const APP_TITLE: &str = "Social Media Icon Selector";

const KEY_HINTS: &str = "Enter add | Ctrl+T theme | Esc quit";

/// Draw the whole selector for the session's current state
pub fn draw(frame: &mut Frame, session: &Session, notices: &NotificationManager) {
    let palette = Palette::for_mode(session.mode());
    let area = frame.area();

    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input
            Constraint::Length(2), // Error
            Constraint::Min(3),    // Entries
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(APP_TITLE, palette.title())).alignment(Alignment::Center),
        chunks[0],
    );

    let input_box = InputBox::new(session.input(), session.is_resolving(), palette);
    frame.render_widget(input_box, chunks[1]);
    if !session.is_resolving() {
        set_input_cursor(frame, chunks[1], session.input());
    }

    frame.render_widget(ErrorLine::new(session.error(), palette), chunks[2]);
    frame.render_widget(EntryList::new(session.collection(), palette), chunks[3]);

    let mode_icon = match session.mode() {
        DisplayMode::Light => icons().light,
        DisplayMode::Dark => icons().dark,
    };
    let mut status = StatusBar::new(palette)
        .left_item("Entries", session.collection().len().to_string())
        .left_item("Mode", format!("{} {}", mode_icon, session.mode()));

    let notice = notices
        .current()
        .map(|notice| (format!("{} {}", notice.kind.icon(), notice.message), notice.kind));
    status = match &notice {
        Some((text, _)) => status.right(text.clone()),
        None => status.right(KEY_HINTS),
    };
    frame.render_widget(status, chunks[4]);

    if let Some((text, kind)) = notice {
        // Recolor only the notice text; StatusBar ends the line with one pad cell
        let width = Line::from(text.as_str()).width();
        let bar = chunks[4];
        if width < usize::from(bar.width) {
            let x = bar.right() - width as u16 - 1;
            let notice_area = Rect::new(x, bar.y, width as u16, 1);
            frame.buffer_mut().set_style(
                notice_area.intersection(bar),
                Style::default().fg(kind.color(palette)),
            );
        }
    }
}

/// Place the terminal cursor after the typed text, clamped inside the box
fn set_input_cursor(frame: &mut Frame, input_area: Rect, text: &str) {
    // Border + prompt glyph + space
    let offset = 2 + Line::from(icons().prompt).width();
    let x = usize::from(input_area.x)
        .saturating_add(offset)
        .saturating_add(Line::from(text).width());
    let max_x = input_area.right().saturating_sub(2);
    let x = u16::try_from(x).unwrap_or(u16::MAX).min(max_x);
    frame.set_cursor_position((x, input_area.y.saturating_add(1)));
}
