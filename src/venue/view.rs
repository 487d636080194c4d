use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::{BadgeColor, DrinkEntry, ReviewSection, VenueRecord};

/// Descriptions longer than this many characters get cut and a "read more"
pub const DESCRIPTION_LIMIT: usize = 150;

pub const ELLIPSIS: &str = "...";

/// Shown when the last visit is missing or not a real date
pub const DATE_PLACEHOLDER: &str = "—";

/// A drink badge with its color resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrinkBadge {
    pub name: String,
    pub color: BadgeColor,
}

/// Everything a card needs to draw, derived once from a [`VenueRecord`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueView {
    pub rank: u32,
    pub name: String,
    pub description: String,
    pub truncated_description: String,
    pub needs_expansion: bool,
    pub location: String,
    pub resolved_images: Vec<String>,
    pub formatted_last_visit: String,
    pub normalized_drinks: Vec<DrinkBadge>,
    pub google_maps_url: String,
    pub website_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_served_by: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub review: Vec<ReviewSection>,
}

impl VenueView {
    /// Whether the card offers a "read more" at all
    pub fn has_disclosure(&self) -> bool {
        self.needs_expansion || !self.review.is_empty()
    }
}

pub fn derive_view(record: &VenueRecord, fallback_image: &str) -> VenueView {
    VenueView {
        rank: record.rank,
        name: record.name.clone(),
        description: record.description.clone(),
        truncated_description: truncate_description(&record.description).into_owned(),
        needs_expansion: needs_expansion(&record.description),
        location: record.location.clone(),
        resolved_images: resolve_images(&record.images, fallback_image),
        formatted_last_visit: format_last_visit(&record.last_visit),
        normalized_drinks: record.favorite_drinks.iter().map(normalize_drink).collect(),
        google_maps_url: record.google_maps_url.clone(),
        website_url: record.website_url.clone(),
        best_served_by: record
            .best_served_by
            .as_ref()
            .filter(|s| !s.trim().is_empty())
            .cloned(),
        review: record.review.clone(),
    }
}

pub fn needs_expansion(description: &str) -> bool {
    description.chars().count() > DESCRIPTION_LIMIT
}

/// Plain character cut, may land mid-word
pub fn truncate_description(description: &str) -> Cow<'_, str> {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &description[..cut], ELLIPSIS)),
        None => Cow::Borrowed(description),
    }
}

pub fn resolve_images(images: &[String], fallback_image: &str) -> Vec<String> {
    if images.is_empty() {
        vec![fallback_image.to_string()]
    } else {
        images.to_vec()
    }
}

pub fn normalize_drink(entry: &DrinkEntry) -> DrinkBadge {
    let color = match entry {
        DrinkEntry::Plain(_) => BadgeColor::Accent,
        DrinkEntry::Tagged { color, .. } => color
            .as_deref()
            .and_then(BadgeColor::from_tag)
            .unwrap_or_default(),
    };
    DrinkBadge {
        name: entry.name().to_string(),
        color,
    }
}

/// "June 15, 2025", or the placeholder when the text is not a date
pub fn format_last_visit(last_visit: &str) -> String {
    match parse_visit_date(last_visit) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => DATE_PLACEHOLDER.to_string(),
    }
}

/// Accepts the ISO-8601 shapes: full date, year-month, year, local
/// date-time and date-time with `Z` or an offset, to the minute or finer.
/// Date-times keep their written date.
pub fn parse_visit_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M%:z") {
        return Some(dt.date_naive());
    }

    // A trailing Z is UTC, and the date is kept as written either way
    let local = text.strip_suffix(['Z', 'z']).unwrap_or(text);
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(local, fmt) {
            return Some(dt.date());
        }
    }

    let bytes = text.as_bytes();
    let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
    match bytes.len() {
        7 if bytes[4] == b'-' && digits(0..4) && digits(5..7) => {
            let year = text[0..4].parse().ok()?;
            let month = text[5..7].parse().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1)
        }
        4 if digits(0..4) => NaiveDate::from_ymd_opt(text.parse().ok()?, 1, 1),
        _ => None,
    }
}
