mod card;
pub mod plain;

use std::sync::OnceLock;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Popup};
use crate::theme::Theme;
use card::{draw_card, CARD_HEIGHT};

// Load theme colors once at startup
static THEME: OnceLock<Theme> = OnceLock::new();

fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::load)
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + tagline
            Constraint::Min(4),    // Cards
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_cards(f, app, chunks[1]);
    draw_status_line(f, app, chunks[2]);
    draw_footer(f, app, chunks[3]);

    if let Some(idx) = app.expanded_card() {
        draw_review_overlay(f, app, idx);
    }
    if app.popup == Popup::Help {
        draw_help_popup(f);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            app.title.as_str(),
            Style::default().fg(theme().title).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.tagline.as_str(),
            Style::default().fg(theme().text_dim).add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// First card to draw so the selection stays on screen
fn first_visible(selected: usize, fits: usize) -> usize {
    selected.saturating_sub(fits.saturating_sub(1))
}

fn draw_cards(f: &mut Frame, app: &App, area: Rect) {
    if app.cards.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(Span::styled("No venues yet", Style::default().fg(theme().text_dim))),
            Line::from(Span::styled(
                "Run `tikihit --init` and edit the showcase file",
                Style::default().fg(theme().link),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    let fits = (area.height / CARD_HEIGHT).max(1) as usize;
    let start = first_visible(app.selected, fits);
    let end = (start + fits).min(app.cards.len());

    let mut y = area.y;
    for idx in start..end {
        let height = CARD_HEIGHT.min(area.bottom().saturating_sub(y));
        if height == 0 {
            break;
        }
        let card_area = Rect::new(area.x, y, area.width, height);
        draw_card(f, &app.cards[idx], &app.states[idx], idx == app.selected, card_area);
        y += height;
    }
}

fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(ref status) = app.status_message {
        Line::from(Span::styled(status.as_str(), Style::default().fg(theme().status)))
    } else if let Some((view, state)) = app.selected_card() {
        Line::from(Span::styled(
            format!(
                "{} of {} │ photo {} of {}",
                app.selected + 1,
                app.cards.len(),
                state.current_image_index() + 1,
                view.resolved_images.len()
            ),
            Style::default().fg(theme().text_dim),
        ))
    } else {
        Line::from("")
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let hints: Vec<(&str, &str)> = if app.expanded_card().is_some() {
        vec![("j/k", "Scroll"), ("Esc", "Close")]
    } else {
        vec![
            ("↑↓", "Card"),
            ("←→", "Photo"),
            ("Enter", "Read more"),
            ("m", "Map"),
            ("w", "Website"),
            ("?", "Help"),
            ("q", "Quit"),
        ]
    };

    // Responsive: show fewer hints on narrow terminals
    let max_hints = if area.width < 60 { 4 } else if area.width < 80 { 5 } else { hints.len() };

    let hint_spans: Vec<Span> = hints
        .iter()
        .take(max_hints)
        .flat_map(|(key, action)| {
            vec![
                Span::styled(*key, Style::default().fg(theme().title)),
                Span::styled(format!(" {} │ ", action), Style::default().fg(theme().text_dim)),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center), area);
}

fn draw_review_overlay(f: &mut Frame, app: &App, idx: usize) {
    let Some(view) = app.cards.get(idx) else {
        return;
    };

    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 100 { 95 } else { 75 },
        if area.height < 35 { 90 } else { 80 },
        area,
    );
    f.render_widget(Clear, popup_area);

    let heading = Style::default().fg(theme().title).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(theme().text);

    let mut lines = vec![
        Line::from(Span::styled(view.description.as_str(), body)),
        Line::from(""),
    ];
    for section in &view.review {
        lines.push(Line::from(Span::styled(section.heading.as_str(), heading)));
        lines.push(Line::from(Span::styled(section.body.as_str(), body)));
        lines.push(Line::from(""));
    }
    if let Some(bartender) = &view.best_served_by {
        lines.push(Line::from(vec![
            Span::styled("Best served by ", Style::default().fg(theme().text_dim)),
            Span::styled(bartender.as_str(), body),
        ]));
    }

    let title = if view.review.is_empty() {
        format!(" {} ", view.name)
    } else {
        format!(" Our Review: {} ", view.name)
    };

    let review = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.review_scroll, 0))
        .block(
            Block::default()
                .title(Span::styled(title, heading))
                .title_bottom(Line::from(Span::styled(
                    " Esc close ",
                    Style::default().fg(theme().text_dim),
                )).right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme().border)),
        );

    f.render_widget(review, popup_area);
}

fn draw_help_popup(f: &mut Frame) {
    let area = f.area();
    let popup_area = centered_rect(
        if area.width < 80 { 95 } else { 60 },
        if area.height < 30 { 95 } else { 70 },
        area,
    );

    f.render_widget(Clear, popup_area);

    let section = |name: &'static str| {
        Line::from(Span::styled(
            name,
            Style::default().fg(theme().title).add_modifier(Modifier::BOLD),
        ))
    };
    let binding = |keys: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(keys, Style::default().fg(theme().link)),
            Span::raw(what),
        ])
    };

    let help_text = vec![
        section("═══ Browsing ═══"),
        binding("  ↑/↓ j/k   ", "Previous/next card"),
        binding("  g/G       ", "First/last card"),
        binding("  ←/→ h/l   ", "Previous/next photo"),
        Line::from(""),
        section("═══ Cards ═══"),
        binding("  Enter/Space/r ", "Read more / full review"),
        binding("  m         ", "Open location in maps"),
        binding("  w         ", "Open the bar's website"),
        Line::from(""),
        section("═══ General ═══"),
        binding("  ?         ", "This help"),
        binding("  q/Ctrl-C  ", "Quit"),
        Line::from(""),
        section("═══ Showcase file ═══"),
        binding("  tikihit --init    ", "Write an editable copy"),
        binding("  tikihit --print   ", "Print cards as text"),
        binding("  tikihit --json    ", "Print cards as JSON"),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Press ", Style::default().fg(theme().text_dim)),
            Span::styled("?", Style::default().fg(theme().link)),
            Span::styled("/", Style::default().fg(theme().text_dim)),
            Span::styled("Esc", Style::default().fg(theme().link)),
            Span::styled(" to close", Style::default().fg(theme().text_dim)),
        ]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(" 🌴 tikihit Help ", Style::default().fg(theme().title)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme().border)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShowcaseConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_first_visible_keeps_selection_on_screen() {
        assert_eq!(first_visible(0, 3), 0);
        assert_eq!(first_visible(2, 3), 0);
        assert_eq!(first_visible(5, 3), 3);
        assert_eq!(first_visible(4, 1), 4);
    }

    #[test]
    fn test_draw_showcase() {
        let app = App::new(&ShowcaseConfig::bundled());
        let screen = render(&app, 120, 40);

        assert!(screen.contains("Tiki Hit"));
        assert!(screen.contains("The Blue Palm"));
        assert!(screen.contains("June 15, 2025"));
    }

    #[test]
    fn test_draw_review_overlay() {
        let mut app = App::new(&ShowcaseConfig::bundled());
        app.select_next();
        app.toggle_review();
        assert!(app.expanded_card().is_some());

        let screen = render(&app, 120, 40);
        assert!(screen.contains("Our Review: Three Dots and a Dash"));
    }

    #[test]
    fn test_draw_help_lists_all_keys() {
        let mut app = App::new(&ShowcaseConfig::bundled());
        app.popup = Popup::Help;

        let screen = render(&app, 120, 50);
        assert!(screen.contains("tikihit Help"));
        assert!(screen.contains("Enter/Space/r"));
        assert!(screen.contains("q/Ctrl-C"));
    }

    #[test]
    fn test_draw_empty_and_tiny() {
        let app = App::new(&ShowcaseConfig::default());
        assert!(render(&app, 80, 20).contains("No venues yet"));

        // Must not panic on cramped terminals
        let app = App::new(&ShowcaseConfig::bundled());
        render(&app, 20, 6);
    }
}
