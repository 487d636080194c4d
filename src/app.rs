use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

use crate::config::ShowcaseConfig;
use crate::venue::{DisplayState, VenueView};

/// Seconds a status message stays on screen
const STATUS_SECONDS: u64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Map,
    Website,
}

pub struct App {
    pub title: String,
    pub tagline: String,

    // Cards in rank order, each with its own interaction state
    pub cards: Vec<VenueView>,
    pub states: Vec<DisplayState>,
    pub selected: usize,

    pub popup: Popup,
    pub review_scroll: u16,

    // Status message (shown in info line, auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,
}

impl App {
    pub fn new(config: &ShowcaseConfig) -> Self {
        let cards = config.ranked_views();
        let states = cards.iter().map(DisplayState::for_view).collect();

        tracing::info!("Showing {} venues", cards.len());

        Self {
            title: config.title.clone(),
            tagline: config.tagline.clone(),
            cards,
            states,
            selected: 0,
            popup: Popup::None,
            review_scroll: 0,
            status_message: None,
            status_message_time: None,
        }
    }

    /// Set a status message (auto-clears after 3 seconds)
    fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
    }

    pub fn selected_card(&self) -> Option<(&VenueView, &DisplayState)> {
        Some((self.cards.get(self.selected)?, self.states.get(self.selected)?))
    }

    /// Index of the card whose review overlay is open
    pub fn expanded_card(&self) -> Option<usize> {
        self.states.iter().position(|s| s.is_description_expanded)
    }

    /// Whether a key press should be taken by an overlay rather than quit
    pub fn overlay_open(&self) -> bool {
        self.popup != Popup::None || self.expanded_card().is_some()
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.popup == Popup::Help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q')) {
                self.popup = Popup::None;
            }
            return Ok(());
        }

        if self.expanded_card().is_some() {
            self.handle_review_key(key);
            return Ok(());
        }

        self.handle_normal_key(key).await
    }

    async fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => self.select_previous(),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.cards.len().saturating_sub(1);
            }

            // Carousel
            KeyCode::Char('l') | KeyCode::Right => self.next_image(),
            KeyCode::Char('h') | KeyCode::Left => self.previous_image(),

            // Read more
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => self.toggle_review(),

            KeyCode::Char('m') => self.open_link(LinkKind::Map).await,
            KeyCode::Char('w') => self.open_link(LinkKind::Website).await,

            KeyCode::Char('?') => self.popup = Popup::Help,

            _ => {}
        }
        Ok(())
    }

    fn handle_review_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('q') => {
                self.toggle_review();
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.review_scroll = self.review_scroll.saturating_add(1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.review_scroll = self.review_scroll.saturating_sub(1);
            }
            KeyCode::PageDown => self.review_scroll = self.review_scroll.saturating_add(10),
            KeyCode::PageUp => self.review_scroll = self.review_scroll.saturating_sub(10),
            _ => {}
        }
    }

    pub fn select_next(&mut self) {
        if !self.cards.is_empty() {
            self.selected = (self.selected + 1) % self.cards.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.cards.is_empty() {
            self.selected = (self.selected + self.cards.len() - 1) % self.cards.len();
        }
    }

    pub fn next_image(&mut self) {
        if let Some(state) = self.states.get_mut(self.selected) {
            if state.carousel.has_controls() {
                state.carousel.next();
            }
        }
    }

    pub fn previous_image(&mut self) {
        if let Some(state) = self.states.get_mut(self.selected) {
            if state.carousel.has_controls() {
                state.carousel.previous();
            }
        }
    }

    /// Open or close the review overlay of the selected card.
    /// Cards without anything more to show ignore this.
    pub fn toggle_review(&mut self) {
        let Some(view) = self.cards.get(self.selected) else {
            return;
        };
        if !view.has_disclosure() {
            return;
        }
        if let Some(state) = self.states.get_mut(self.selected) {
            state.toggle_expansion();
            self.review_scroll = 0;
        }
    }

    async fn open_link(&mut self, kind: LinkKind) {
        let Some(view) = self.cards.get(self.selected) else {
            return;
        };
        let (url, what) = match kind {
            LinkKind::Map => (view.google_maps_url.clone(), "map"),
            LinkKind::Website => (view.website_url.clone(), "website"),
        };
        let name = view.name.clone();

        match crate::links::open_url(&url).await {
            Ok(()) => {
                tracing::info!("Opened {} for {}: {}", what, name, url);
                self.set_status(format!("Opened {} for {}", what, name));
            }
            Err(e) => {
                tracing::warn!("Opening {} for {} failed: {}", what, name, e);
                self.set_status(format!("{} ({})", e, what));
            }
        }
    }

    pub async fn tick(&mut self) -> Result<()> {
        if let Some(time) = self.status_message_time {
            if time.elapsed().as_secs() >= STATUS_SECONDS {
                self.status_message = None;
                self.status_message_time = None;
            }
        }
        Ok(())
    }
}
