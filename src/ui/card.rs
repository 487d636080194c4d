//! One venue card: photo panel on the left, details on the right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme;
use crate::venue::{DisplayState, VenueView};

/// Rows a card takes, borders included
pub const CARD_HEIGHT: u16 = 14;

pub fn draw_card(f: &mut Frame, view: &VenueView, state: &DisplayState, selected: bool, area: Rect) {
    let border_color = if selected { theme().border } else { theme().inactive };
    let title_style = Style::default().fg(theme().title).add_modifier(Modifier::BOLD);

    let block = Block::default()
        .title_top(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(view.name.as_str(), title_style),
            Span::styled(" ", Style::default()),
        ]))
        .title_top(
            Line::from(Span::styled(
                format!(" #{} ", view.rank),
                Style::default().fg(theme().rank).add_modifier(Modifier::BOLD),
            ))
            .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_type(if selected { BorderType::Thick } else { BorderType::Rounded })
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    f.render_widget(block, area);

    // Narrow terminals drop the photo panel
    let (photo_area, body_area) = if inner.width >= 70 {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
            .split(inner);
        (Some(chunks[0]), chunks[1])
    } else {
        (None, inner)
    };

    if let Some(photo_area) = photo_area {
        draw_photo(f, view, state, selected, photo_area);
    }
    draw_details(f, view, selected, body_area);
}

fn draw_photo(f: &mut Frame, view: &VenueView, state: &DisplayState, selected: bool, area: Rect) {
    let carousel = state.carousel;
    let image = state.current_image(view).unwrap_or_default();
    let file_name = image.rsplit('/').next().unwrap_or(image);

    let dots: Vec<Span> = (0..carousel.count())
        .map(|i| {
            if i == carousel.index() {
                Span::styled("● ", Style::default().fg(theme().title))
            } else {
                Span::styled("○ ", Style::default().fg(theme().text_dim))
            }
        })
        .collect();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("📷", Style::default())),
        Line::from(Span::styled(file_name, Style::default().fg(theme().text))),
        Line::from(Span::styled(image, Style::default().fg(theme().text_dim))),
        Line::from(""),
        Line::from(dots),
    ];

    if carousel.has_controls() {
        let key_style = Style::default().fg(if selected { theme().title } else { theme().inactive });
        lines.push(Line::from(vec![
            Span::styled("❮ h", key_style),
            Span::styled(
                format!("  {}/{}  ", carousel.index() + 1, carousel.count()),
                Style::default().fg(theme().text_dim),
            ),
            Span::styled("l ❯", key_style),
        ]));
    }

    let photo = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(theme().inactive)),
        );
    f.render_widget(photo, area);
}

fn draw_details(f: &mut Frame, view: &VenueView, selected: bool, area: Rect) {
    let label = Style::default().fg(theme().text).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(theme().text_dim);
    let key_style = Style::default().fg(if selected { theme().title } else { theme().inactive });

    let mut lines = vec![Line::from(Span::styled(
        view.truncated_description.as_str(),
        Style::default().fg(theme().text),
    ))];

    if view.has_disclosure() {
        let prompt = if view.review.is_empty() { "Read more" } else { "Read our review" };
        lines.push(Line::from(vec![
            Span::styled("⏎ ", key_style),
            Span::styled(prompt, Style::default().fg(theme().link).add_modifier(Modifier::UNDERLINED)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("🗺  Location  ", label),
        Span::styled(view.location.as_str(), Style::default().fg(theme().text)),
        Span::styled("  (m) map", key_style),
    ]));
    lines.push(Line::from(vec![
        Span::styled("🌐 Website   ", label),
        Span::styled(view.website_url.as_str(), Style::default().fg(theme().link)),
        Span::styled("  (w)", key_style),
    ]));
    lines.push(Line::from(vec![
        Span::styled("📅 Last Visit ", label),
        Span::styled(view.formatted_last_visit.as_str(), Style::default().fg(theme().text)),
    ]));

    let mut drinks = vec![Span::styled("🍹 Our Favorite Drinks ", label)];
    for drink in &view.normalized_drinks {
        drinks.push(Span::styled(
            format!("[{}]", drink.name),
            Style::default().fg(theme().badge(drink.color)),
        ));
        drinks.push(Span::raw(" "));
    }
    lines.push(Line::from(drinks));

    if let Some(bartender) = &view.best_served_by {
        lines.push(Line::from(vec![
            Span::styled("   best served by ", dim),
            Span::styled(bartender.as_str(), Style::default().fg(theme().text)),
        ]));
    }

    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::NONE));
    f.render_widget(details, area.inner(ratatui::layout::Margin::new(1, 0)));
}
