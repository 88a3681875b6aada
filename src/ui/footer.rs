use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &str = " ↑/↓: Select │ Ctrl+U: Clear │ Ctrl+R: Retry │ Esc: Quit";

/// Key hints on the left, `shown/total` on the right.
pub struct Footer {
    shown: usize,
    total: usize,
}

impl Footer {
    pub fn new(shown: usize, total: usize) -> Self {
        Self { shown, total }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let counter = format!("{}/{} ", self.shown, self.total);

        // Char count, not byte count: the hints contain box-drawing glyphs.
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(HINTS.chars().count())
            .saturating_sub(counter.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(counter, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
