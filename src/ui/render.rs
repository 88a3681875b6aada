use crate::catalog::{CatalogSource, CountryRecord};
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::{catalog_host, Header};
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};
use crate::view_model::ViewModel;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const SEARCH_PLACEHOLDER: &str = "Search for countries...";
const NO_RESULTS: &str = "No countries found";

pub fn draw<S: CatalogSource>(frame: &mut Frame<'_>, app: &App<S>) {
    let regions = layout_regions(frame.area());
    let session = app.session();
    let view_model = app.view_model();

    let host = catalog_host(&session.source().describe());
    let header = Header::new(&host, session.fetch_state().label());
    frame.render_widget(header.widget(), regions.header);

    draw_search(frame, app.search_term(), regions.search);
    draw_body(frame, view_model, app.selection(), regions.body);

    let footer = Footer::new(view_model.items().len(), session.catalog_len());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}

fn draw_search(frame: &mut Frame<'_>, term: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(" Search ");

    let line = if term.is_empty() {
        Line::from(Span::styled(
            SEARCH_PLACEHOLDER,
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(term.to_string(), Style::default().fg(HEADER_TEXT)))
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if area.width > 2 && area.height > 2 {
        let offset = term.chars().count().min(area.width.saturating_sub(3) as usize) as u16;
        frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

fn draw_body(frame: &mut Frame<'_>, view_model: &ViewModel, selection: usize, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
        .title(" Countries ");

    match view_model {
        ViewModel::Idle => {
            frame.render_widget(Paragraph::new("").block(block), area);
        }
        ViewModel::Loading => {
            let text = Line::from(Span::styled(
                "Loading countries...",
                Style::default().fg(MUTED_TEXT),
            ));
            frame.render_widget(Paragraph::new(text).block(block), area);
        }
        ViewModel::Error { message } => {
            let lines = vec![
                Line::from(Span::styled(
                    format!("Failed to load countries: {}", message),
                    Style::default().fg(STATUS_ERROR),
                )),
                Line::from(Span::styled(
                    "Press Ctrl+R to try again.",
                    Style::default().fg(MUTED_TEXT),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).block(block), area);
        }
        ViewModel::Ready { items } if items.is_empty() => {
            let text = Line::from(Span::styled(NO_RESULTS, Style::default().fg(MUTED_TEXT)));
            frame.render_widget(Paragraph::new(text).block(block), area);
        }
        ViewModel::Ready { items } => {
            let list = List::new(items.iter().map(list_item).collect::<Vec<_>>())
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(ACTIVE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▸ ");
            let mut state = ListState::default().with_selected(Some(selection));
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn list_item(record: &CountryRecord) -> ListItem<'static> {
    let mut spans = vec![Span::styled(
        record.display_name.clone(),
        Style::default().fg(HEADER_TEXT),
    )];
    if record.has_flag() {
        spans.push(Span::styled(
            format!("  {}", record.flag_image_url),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ));
    }
    ListItem::new(Line::from(spans))
}
