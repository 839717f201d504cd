use crate::models;
use serde::Serialize;

/// At most this many genres are shown on a card
pub const CARD_GENRES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    Play,
    Watchlist,
    Upgrade,
}

/// A movie as shown in the browsing grid for one viewer.
#[derive(Debug, Clone, Serialize)]
pub struct MovieCard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub release_year: i32,
    pub runtime: String,
    pub rating: String,
    pub genres: Vec<String>,
    pub poster_url: String,
    pub required_tier: Option<String>,
    pub locked: bool,
    pub in_watchlist: bool,
    pub actions: Vec<CardAction>,
}

impl MovieCard {
    pub fn new(movie: models::Movie, can_access: bool, in_watchlist: bool, signed_in: bool) -> Self {
        let actions = match (can_access, signed_in) {
            (true, true) => vec![CardAction::Play, CardAction::Watchlist],
            (true, false) => vec![CardAction::Play],
            (false, _) => vec![CardAction::Upgrade],
        };

        Self {
            runtime: format_runtime(movie.duration_minutes),
            rating: format!("{:.1}", movie.rating),
            genres: movie.genres.into_iter().take(CARD_GENRES).collect(),
            id: movie.id,
            title: movie.title,
            description: movie.description,
            release_year: movie.release_year,
            poster_url: movie.poster_url,
            required_tier: movie.required_tier,
            locked: !can_access,
            in_watchlist,
            actions,
        }
    }
}

/// `112` → `"1h 52m"`
pub fn format_runtime(minutes: u32) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}
