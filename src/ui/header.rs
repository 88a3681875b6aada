use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Host part of a catalog location; locations that are not URLs are shown
/// as given.
pub fn catalog_host(location: &str) -> String {
    reqwest::Url::parse(location)
        .ok()
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_else(|| location.to_string())
}

/// Title bar: app name, catalog host and fetch state.
pub struct Header<'a> {
    source: &'a str,
    state: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(source: &'a str, state: &'a str) -> Self {
        Self { source, state }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Country Search",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.source, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(self.state, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
