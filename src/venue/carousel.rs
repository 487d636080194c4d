use super::VenueView;

/// Circular photo position. Never empty: a zero length is clamped to one,
/// matching the fallback-image guarantee of a derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len: len.max(1),
            index: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.len
    }

    /// Single-photo cards get no prev/next controls
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) -> usize {
        self.index = (self.index + 1) % self.len;
        self.index
    }

    pub fn previous(&mut self) -> usize {
        self.index = (self.index + self.len - 1) % self.len;
        self.index
    }
}

/// Per-card interaction state. Lives as long as the card is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub is_description_expanded: bool,
    pub carousel: Carousel,
}

impl DisplayState {
    pub fn for_view(view: &VenueView) -> Self {
        Self {
            is_description_expanded: false,
            carousel: Carousel::new(view.resolved_images.len()),
        }
    }

    pub fn toggle_expansion(&mut self) -> bool {
        self.is_description_expanded = !self.is_description_expanded;
        self.is_description_expanded
    }

    pub fn current_image_index(&self) -> usize {
        self.carousel.index()
    }

    /// Image reference currently in front
    pub fn current_image<'a>(&self, view: &'a VenueView) -> Option<&'a str> {
        view.resolved_images
            .get(self.carousel.index())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venue::{derive_view, VenueRecord};

    #[test]
    fn test_full_cycle_returns_home() {
        for n in 1..=6 {
            for start in 0..n {
                let mut carousel = Carousel::new(n);
                for _ in 0..start {
                    carousel.next();
                }
                assert_eq!(carousel.index(), start);

                for _ in 0..n {
                    carousel.next();
                }
                assert_eq!(carousel.index(), start, "next x{n}");

                for _ in 0..n {
                    carousel.previous();
                }
                assert_eq!(carousel.index(), start, "previous x{n}");
            }
        }
    }

    #[test]
    fn test_wraps_both_directions() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.previous(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.next(), 1);
    }

    #[test]
    fn test_single_image_has_no_controls() {
        let mut carousel = Carousel::new(1);
        assert!(!carousel.has_controls());
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.previous(), 0);

        assert!(Carousel::new(2).has_controls());
        assert_eq!(Carousel::new(0).count(), 1);
    }

    #[test]
    fn test_display_state_starts_collapsed_on_first_image() {
        let record: VenueRecord = toml::from_str(
            r#"
            rank = 3
            name = "Wusong Road"
            images = ["/w0.webp", "/w1.webp"]
            "#,
        )
        .unwrap();
        let view = derive_view(&record, "/fallback.webp");
        let mut state = DisplayState::for_view(&view);

        assert!(!state.is_description_expanded);
        assert_eq!(state.current_image_index(), 0);
        assert_eq!(state.current_image(&view), Some("/w0.webp"));

        state.carousel.previous();
        assert_eq!(state.current_image(&view), Some("/w1.webp"));

        assert!(state.toggle_expansion());
        assert!(!state.toggle_expansion());
    }
}
