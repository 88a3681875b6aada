use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen split: header, search line, result list, footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub search: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    Regions {
        header: chunks[0],
        search: chunks[1],
        body: chunks[2],
        footer: chunks[3],
    }
}
