//! Terminal colors for the showcase.
//! Follows the user's kitty palette when one is present, otherwise a
//! dark orange-and-purple default.

use ratatui::style::Color;
use std::collections::HashMap;
use std::fs;

use crate::venue::BadgeColor;

#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Color,         // Page heading and card names
    pub rank: Color,          // Rank medallion
    pub text: Color,
    pub text_dim: Color,
    pub link: Color,
    pub border: Color,        // Selected card border
    pub inactive: Color,      // Other card borders
    pub status: Color,
    badges: [Color; 8],       // Indexed by BadgeColor::ALL order
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Color::Rgb(242, 143, 22),
            rank: Color::Rgb(250, 190, 40),
            text: Color::Rgb(230, 226, 220),
            text_dim: Color::Rgb(150, 146, 140),
            link: Color::Rgb(242, 143, 22),
            border: Color::Rgb(242, 143, 22),
            inactive: Color::Rgb(88, 84, 80),
            status: Color::Rgb(250, 190, 40),
            badges: [
                Color::Rgb(242, 143, 22),  // primary
                Color::Rgb(180, 110, 235), // secondary
                Color::Rgb(120, 200, 40),  // accent
                Color::Rgb(150, 150, 150), // neutral
                Color::Rgb(60, 175, 235),  // info
                Color::Rgb(40, 200, 130),  // success
                Color::Rgb(255, 200, 0),   // warning
                Color::Rgb(255, 95, 95),   // error
            ],
        }
    }
}

impl Theme {
    pub fn load() -> Self {
        Self::load_kitty_theme().unwrap_or_default()
    }

    pub fn badge(&self, color: BadgeColor) -> Color {
        let idx = BadgeColor::ALL
            .iter()
            .position(|c| *c == color)
            .unwrap_or(2);
        self.badges[idx]
    }

    fn load_kitty_theme() -> Option<Self> {
        let path = dirs::config_dir()?.join("kitty/current-theme.conf");
        let content = fs::read_to_string(&path).ok()?;
        let theme = Self::from_palette(&Self::parse_palette(&content));
        if theme.is_some() {
            tracing::debug!("Using kitty palette from {}", path.display());
        }
        theme
    }

    /// Map a kitty palette onto our roles; ANSI slots pick the badge colors
    fn from_palette(colors: &HashMap<String, Color>) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }

        let base = Self::default();
        let pick = |keys: &[&str], fallback: Color| {
            keys.iter()
                .find_map(|k| colors.get(*k).copied())
                .unwrap_or(fallback)
        };

        let primary = pick(&["color3", "color11"], base.badges[0]);
        Some(Self {
            title: primary,
            rank: pick(&["color11", "color3"], base.rank),
            text: pick(&["foreground"], base.text),
            text_dim: pick(&["color8"], base.text_dim),
            link: pick(&["color4", "color12"], base.link),
            border: primary,
            inactive: pick(&["inactive_border_color", "color8"], base.inactive),
            status: pick(&["color11", "color3"], base.status),
            badges: [
                primary,
                pick(&["color5", "color13"], base.badges[1]),
                pick(&["color2", "color10"], base.badges[2]),
                pick(&["color7", "color8"], base.badges[3]),
                pick(&["color6", "color14"], base.badges[4]),
                pick(&["color10", "color2"], base.badges[5]),
                pick(&["color11", "color3"], base.badges[6]),
                pick(&["color1", "color9"], base.badges[7]),
            ],
        })
    }

    /// `key value` lines; only hex colors are kept
    fn parse_palette(content: &str) -> HashMap<String, Color> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(|line| {
                let (key, value) = line.split_once(char::is_whitespace)?;
                Some((key.to_string(), Self::parse_hex_color(value)?))
            })
            .collect()
    }

    /// `#RRGGBB` or `#RGB`
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(s.get(range)?, 16).ok();

        match s.len() {
            6 => Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            3 => Some(Color::Rgb(channel(0..1)? * 17, channel(1..2)? * 17, channel(2..3)? * 17)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_palette() {
        let colors = Theme::parse_palette(
            "# comment\nforeground #bebebe\ncolor1   #D35F5F\ncolor2 #fc0\nfont_family Iosevka\n",
        );
        assert_eq!(colors.get("foreground"), Some(&Color::Rgb(190, 190, 190)));
        assert_eq!(colors.get("color1"), Some(&Color::Rgb(211, 95, 95)));
        assert_eq!(colors.get("color2"), Some(&Color::Rgb(255, 204, 0)));
        assert!(!colors.contains_key("font_family"));
    }

    #[test]
    fn test_palette_drives_badges() {
        let colors = Theme::parse_palette("color1 #ff0000\ncolor6 #00ffff\n");
        let theme = Theme::from_palette(&colors).unwrap();

        assert_eq!(theme.badge(BadgeColor::Error), Color::Rgb(255, 0, 0));
        assert_eq!(theme.badge(BadgeColor::Info), Color::Rgb(0, 255, 255));
        // Unset slots keep the defaults
        assert_eq!(theme.badge(BadgeColor::Accent), Theme::default().badge(BadgeColor::Accent));
        assert!(Theme::from_palette(&HashMap::new()).is_none());
    }

    #[test]
    fn test_every_badge_color_distinct_by_default() {
        let theme = Theme::default();
        for (i, a) in BadgeColor::ALL.iter().enumerate() {
            for b in &BadgeColor::ALL[i + 1..] {
                assert_ne!(theme.badge(*a), theme.badge(*b), "{a:?} vs {b:?}");
            }
        }
    }
}
