//! UI rendering and layout module

use crate::constants::APP_NAME;
use crate::highlight::PatternStatus;
use crate::tui::app::{App, InputFocus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Information about the match list area for mouse click handling
#[derive(Debug, Clone)]
pub struct MatchListArea {
    pub top: u16,
    pub height: u16,
    pub left: u16,
    pub width: u16,
    /// Index of the match drawn on the first row
    pub first_visible: usize,
}

const KEY_HELP: &str = "Tab focus  ↑/↓ match  Home/End first/last  ^O open  ^R run  Esc quit";

/// Draw the whole interface
pub fn draw(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_input(frame, app, rows[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rows[1]);

    draw_text(frame, app, panes[0]);
    draw_match_list(frame, app, panes[1]);
    draw_status(frame, app, rows[2]);
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Pattern input, or the path prompt while a file is being opened
fn draw_input(frame: &mut Frame, app: &App, area: Rect) {
    let (title, content, focused) = match app.focus {
        InputFocus::OpenFile => (
            "Open file (Enter load, Esc cancel)".to_string(),
            app.path_input.as_str(),
            true,
        ),
        focus => (
            format!("{} - Pattern", APP_NAME),
            app.highlighter.pattern(),
            focus == InputFocus::Pattern,
        ),
    };

    let invalid = app.focus != InputFocus::OpenFile && app.highlighter.status().is_invalid();
    let text_style = if invalid {
        Style::default().fg(Color::Red)
    } else {
        Style::default()
    };

    let input = Paragraph::new(Span::styled(content.to_string(), text_style)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(title),
    );
    frame.render_widget(input, area);

    if focused {
        let width = u16::try_from(content.chars().count()).unwrap_or(u16::MAX);
        let x = area.x.saturating_add(1).saturating_add(width);
        let max_x = area.x + area.width.saturating_sub(2);
        frame.set_cursor_position(Position::new(x.min(max_x), area.y + 1));
    }
}

fn draw_text(frame: &mut Frame, app: &mut App, area: Rect) {
    app.view.set_viewport_height(area.height.saturating_sub(2));

    // The view only builds the visible lines, so no paragraph scroll
    let paragraph = Paragraph::new(app.view.to_text()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(app.focus == InputFocus::Text))
            .title(app.text_title()),
    );
    frame.render_widget(paragraph, area);
}

fn draw_match_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let matches = app.highlighter.matches();
    let items: Vec<ListItem> = matches
        .iter()
        .map(|record| ListItem::new(app.match_label(record)))
        .collect();

    let title = format!("Matches ({})", matches.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(false))
                .title(title),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Red)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !matches.is_empty() {
        state.select(Some(app.highlighter.current_index()));
    }
    frame.render_stateful_widget(list, area, &mut state);

    app.match_list_area = Some(MatchListArea {
        top: area.y + 1,
        height: area.height.saturating_sub(2),
        left: area.x + 1,
        width: area.width.saturating_sub(2),
        first_visible: state.offset(),
    });
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let summary_style = match app.highlighter.status() {
        PatternStatus::Invalid { .. } => Style::default().fg(Color::Red),
        PatternStatus::Valid { matches: 0 } => Style::default().fg(Color::Yellow),
        PatternStatus::Valid { .. } => Style::default().fg(Color::Green),
        PatternStatus::Empty => Style::default().fg(Color::DarkGray),
    };

    let mut spans = vec![Span::styled(app.status_summary(), summary_style)];
    if let Some(message) = &app.message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(message.clone(), Style::default().fg(Color::Red)));
    }
    spans.push(Span::styled(
        format!("  {}", KEY_HELP),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        app.sync_view();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_draw_shows_pattern_text_and_matches() {
        let mut app = App::default();
        app.highlighter.set_text("abc\ndef\nabc");
        app.highlighter.set_pattern("abc");

        let screen = render(&mut app, 100, 12);
        assert!(screen.contains("RegExplorer - Pattern"));
        assert!(screen.contains("   2| def"));
        assert!(screen.contains("Matches (2)"));
        assert!(screen.contains("3:1  abc"));
        assert!(screen.contains("Match 1/2"));
    }

    #[test]
    fn test_draw_records_match_list_area() {
        let mut app = App::default();
        app.highlighter.set_text("a a a");
        app.highlighter.set_pattern("a");
        render(&mut app, 100, 12);

        let area = app.match_list_area.clone().unwrap();
        assert_eq!(area.top, 4);
        assert_eq!(area.height, 6);
        assert_eq!(area.first_visible, 0);
        assert!(app.handle_match_list_click(area.left, area.top + 1));
        assert_eq!(app.highlighter.current_index(), 1);
    }

    #[test]
    fn test_draw_open_file_prompt() {
        let mut app = App::default();
        app.open_file_prompt();
        app.path_input.push_str("notes.txt");

        let screen = render(&mut app, 100, 12);
        assert!(screen.contains("Open file"));
        assert!(screen.contains("notes.txt"));
    }

    #[test]
    fn test_draw_scrolls_to_match_past_u16_lines() {
        let mut text = "x\n".repeat(70_000);
        text.push_str("target");
        let mut app = App::default();
        app.highlighter.set_text(&text);
        app.highlighter.set_pattern("target");

        render(&mut app, 100, 14);
        assert!(app.flush_scrolls());
        let screen = render(&mut app, 100, 14);
        assert!(screen.contains("70001| target"));
        assert!(!screen.contains("   1| x"));
    }

    #[test]
    fn test_draw_invalid_pattern_status() {
        let mut app = App::default();
        app.highlighter.set_text("abc");
        app.highlighter.set_pattern("(abc");

        let screen = render(&mut app, 120, 12);
        assert!(screen.contains("invalid pattern: unclosed group"));
    }
}
