//! Selector widgets
//!
//! Each widget borrows the piece of session state it shows plus the active
//! [`Palette`]; none of them hold state of their own.

use super::theme::Palette;
use crate::collection::Collection;
use crate::error::IconNotResolvable;
use crate::icons::icons;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget, Wrap},
};

pub const INPUT_TITLE: &str = "Add Social Media";
pub const INPUT_PLACEHOLDER: &str = "Type a social media name...";

/// Status bar widget
pub struct StatusBar<'a> {
    /// Left-aligned items
    left_items: Vec<(&'a str, String)>,

    /// Right-aligned text
    right_text: String,

    /// Style
    style: Style,
}

impl<'a> StatusBar<'a> {
    pub fn new(palette: &Palette) -> Self {
        Self {
            left_items: Vec::new(),
            right_text: String::new(),
            style: palette.status(),
        }
    }

    /// Add left-aligned item
    pub fn left_item(mut self, label: &'a str, value: impl Into<String>) -> Self {
        self.left_items.push((label, value.into()));
        self
    }

    /// Set right-aligned text
    pub fn right(mut self, text: impl Into<String>) -> Self {
        self.right_text = text.into();
        self
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (label, value)) in self.left_items.iter().enumerate() {
            spans.push(Span::raw(if i == 0 { " " } else { " | " }));
            spans.push(Span::styled(
                *label,
                Style::default().add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(value.clone()));
        }

        let left_width: usize = spans.iter().map(|s| s.width()).sum();
        let right_width = Line::from(self.right_text.as_str()).width() + 1;
        let padding = (area.width as usize).saturating_sub(left_width + right_width);
        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::raw(self.right_text));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .style(self.style)
            .render(area, buf);
    }
}

/// Text field for the platform name
pub struct InputBox<'a> {
    text: &'a str,
    busy: bool,
    palette: &'a Palette,
}

impl<'a> InputBox<'a> {
    pub fn new(text: &'a str, busy: bool, palette: &'a Palette) -> Self {
        Self {
            text,
            busy,
            palette,
        }
    }
}

impl Widget for InputBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.accent))
            .title(Span::styled(format!(" {} ", INPUT_TITLE), self.palette.title()))
            .title_bottom(Line::from(" [Enter] Add ").right_aligned());

        let prompt = Span::styled(
            format!("{} ", icons().prompt),
            Style::default().fg(self.palette.accent),
        );
        let body = if self.text.is_empty() && !self.busy {
            Span::styled(INPUT_PLACEHOLDER, Style::default().fg(self.palette.muted))
        } else {
            Span::styled(self.text, Style::default().fg(self.palette.text))
        };

        let mut spans = vec![prompt, body];
        if self.busy {
            spans.push(Span::styled(
                format!("  {} checking...", icons().pending),
                Style::default().fg(self.palette.warning),
            ));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}

/// The session's resolution error, when there is one
pub struct ErrorLine<'a> {
    error: Option<&'a IconNotResolvable>,
    palette: &'a Palette,
}

impl<'a> ErrorLine<'a> {
    pub fn new(error: Option<&'a IconNotResolvable>, palette: &'a Palette) -> Self {
        Self { error, palette }
    }
}

impl Widget for ErrorLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(error) = self.error else {
            return;
        };

        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::raw(icons().error),
            Span::raw(" "),
            Span::raw(error.to_string()),
        ]))
        .style(Style::default().fg(self.palette.error))
        .wrap(Wrap { trim: true })
        .render(area, buf);
    }
}

/// Confirmed entries in insertion order
pub struct EntryList<'a> {
    collection: &'a Collection,
    palette: &'a Palette,
}

impl<'a> EntryList<'a> {
    pub fn new(collection: &'a Collection, palette: &'a Palette) -> Self {
        Self {
            collection,
            palette,
        }
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.border))
            .title(Span::styled(
                format!(" Selected ({}) ", self.collection.len()),
                self.palette.title(),
            ));

        if self.collection.is_empty() {
            Paragraph::new(Span::styled(
                " Nothing added yet",
                Style::default().fg(self.palette.muted),
            ))
            .block(block)
            .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .collection
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", icons().entry),
                        Style::default().fg(self.palette.success),
                    ),
                    Span::styled(
                        entry.name.clone(),
                        Style::default()
                            .fg(self.palette.text)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        entry.icon_ref.to_string(),
                        Style::default().fg(self.palette.muted),
                    ),
                ]))
            })
            .collect();

        List::new(items).block(block).render(area, buf);
    }
}
