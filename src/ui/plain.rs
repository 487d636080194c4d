//! Text rendering of the cards for `--print`.

use std::fmt::Write;

use crate::venue::VenueView;

pub fn render_showcase(title: &str, tagline: &str, cards: &[VenueView]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", tagline);

    for card in cards {
        let _ = writeln!(out);
        out.push_str(&render_card(card));
    }
    out
}

pub fn render_card(view: &VenueView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "#{} {}", view.rank, view.name);
    if !view.truncated_description.is_empty() {
        let _ = writeln!(out, "  {}", view.truncated_description);
    }
    let _ = writeln!(out, "  Photos:     {}", view.resolved_images.join(", "));
    let _ = writeln!(out, "  Location:   {}", view.location);
    if !view.google_maps_url.is_empty() {
        let _ = writeln!(out, "  Map:        {}", view.google_maps_url);
    }
    let _ = writeln!(out, "  Website:    {}", view.website_url);
    let _ = writeln!(out, "  Last Visit: {}", view.formatted_last_visit);

    let drinks: Vec<String> = view
        .normalized_drinks
        .iter()
        .map(|d| format!("{} ({})", d.name, d.color.as_str()))
        .collect();
    let _ = writeln!(out, "  Favorites:  {}", drinks.join(", "));

    if let Some(bartender) = &view.best_served_by {
        let _ = writeln!(out, "  Best served by {}", bartender);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venue::{derive_view, VenueRecord};

    #[test]
    fn test_render_card() {
        let record: VenueRecord = toml::from_str(
            r#"
            rank = 2
            name = "Three Dots and a Dash"
            location = "Chicago, IL"
            favorite_drinks = ["Zombie", { name = "Cobra Fang", color = "error" }]
            last_visit = "2025-08-01"
            best_served_by = "Tattoo Guy"
            "#,
        )
        .unwrap();
        let text = render_card(&derive_view(&record, "/x.webp"));

        assert!(text.starts_with("#2 Three Dots and a Dash\n"));
        assert!(text.contains("Photos:     /x.webp\n"));
        assert!(text.contains("Last Visit: August 1, 2025\n"));
        assert!(text.contains("Favorites:  Zombie (accent), Cobra Fang (error)\n"));
        assert!(text.contains("Best served by Tattoo Guy"));
        assert!(!text.contains("Map:"));
    }
}
