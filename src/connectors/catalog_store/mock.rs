use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::connectors::errors::ConnectorError;
use crate::models::{Movie, Profile, Subscription, Tier, User, WatchlistEntry, STATUS_ACTIVE};

use super::CatalogStore;

#[derive(Debug, Default)]
struct MockState {
    tiers: Vec<Tier>,
    movies: Vec<Movie>,
    subscriptions: Vec<Subscription>,
    watchlist: Vec<WatchlistEntry>,
    profiles: Vec<Profile>,
}

fn new_row_id() -> String {
    Uuid::new_v4().to_string()
}

/// In-memory store used when the backend is disabled and in tests
#[derive(Debug, Default)]
pub struct MockCatalogStore {
    state: RwLock<MockState>,
    fail_user_reads: bool,
    fail_writes: bool,
}

impl MockCatalogStore {
    pub fn new(tiers: Vec<Tier>, movies: Vec<Movie>) -> Self {
        Self {
            state: RwLock::new(MockState {
                tiers,
                movies,
                ..MockState::default()
            }),
            ..Self::default()
        }
    }

    /// Free/basic/premium tiers and a handful of movies across them
    pub fn seeded() -> Self {
        Self::new(
            vec![
                tier("free", "Free", 0.0),
                tier("basic", "Basic", 9.99),
                tier("premium", "Premium", 19.99),
            ],
            vec![
                movie("m-night-drive", "Night Drive", 7.4, None, true),
                movie("m-long-winter", "The Long Winter", 8.6, Some("basic"), true),
                movie("m-glass-harbor", "Glass Harbor", 9.1, Some("premium"), false),
                movie("m-paper-moons", "Paper Moons", 6.8, None, false),
            ],
        )
    }

    /// Subscription, watchlist and profile reads fail with `ServiceUnavailable`
    pub fn with_failing_user_reads(mut self) -> Self {
        self.fail_user_reads = true;
        self
    }

    /// Every insert/update/delete fails with `ServiceUnavailable`
    pub fn with_failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub async fn put_subscription(&self, user_id: &str, tier_id: &str, status: &str) -> Subscription {
        let mut state = self.state.write().await;
        let id = new_row_id();
        let now = Utc::now();
        let subscription = Subscription {
            id,
            user_id: user_id.to_string(),
            tier_id: tier_id.to_string(),
            status: status.to_string(),
            started_at: Some(now),
            expires_at: None,
            created_at: Some(now),
            updated_at: Some(now),
        };
        state.subscriptions.push(subscription.clone());
        subscription
    }

    pub async fn put_profile(&self, profile: Profile) {
        self.state.write().await.profiles.push(profile);
    }

    pub async fn subscriptions_of(&self, user_id: &str) -> Vec<Subscription> {
        self.state
            .read()
            .await
            .subscriptions
            .iter()
            .filter(|sub| sub.user_id == user_id)
            .cloned()
            .collect()
    }

    fn check_user_read(&self) -> Result<(), ConnectorError> {
        if self.fail_user_reads {
            return Err(ConnectorError::ServiceUnavailable("mock user read".to_string()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), ConnectorError> {
        if self.fail_writes {
            return Err(ConnectorError::ServiceUnavailable("mock write".to_string()));
        }
        Ok(())
    }
}

pub fn tier(id: &str, name: &str, price: f64) -> Tier {
    Tier {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{} plan", name),
        price,
        features: vec![format!("{} catalog", name)],
        max_quality: if price == 0.0 { "SD" } else { "HD" }.to_string(),
        max_devices: 1,
        created_at: None,
    }
}

pub fn movie(
    id: &str,
    title: &str,
    rating: f64,
    required_tier: Option<&str>,
    is_featured: bool,
) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        release_year: 2021,
        duration_minutes: 112,
        rating,
        poster_url: format!("https://img.example.com/{}.jpg", id),
        backdrop_url: format!("https://img.example.com/{}-backdrop.jpg", id),
        trailer_url: None,
        genres: vec!["Drama".to_string(), "Thriller".to_string()],
        required_tier: required_tier.map(str::to_string),
        is_featured,
        created_at: None,
        updated_at: None,
    }
}

#[async_trait::async_trait]
impl CatalogStore for MockCatalogStore {
    async fn list_tiers(&self) -> Result<Vec<Tier>, ConnectorError> {
        let mut tiers = self.state.read().await.tiers.clone();
        // stable: equal prices keep insertion order
        tiers.sort_by(|a, b| a.price.total_cmp(&b.price));
        Ok(tiers)
    }

    async fn list_movies(&self, featured_only: bool) -> Result<Vec<Movie>, ConnectorError> {
        let mut movies: Vec<Movie> = self
            .state
            .read()
            .await
            .movies
            .iter()
            .filter(|movie| !featured_only || movie.is_featured)
            .cloned()
            .collect();
        movies.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        Ok(movies)
    }

    async fn get_active_subscription(
        &self,
        user: &User,
    ) -> Result<Option<Subscription>, ConnectorError> {
        self.check_user_read()?;
        Ok(self
            .state
            .read()
            .await
            .subscriptions
            .iter()
            .find(|sub| sub.user_id == user.id && sub.status == STATUS_ACTIVE)
            .cloned())
    }

    async fn create_subscription(
        &self,
        user: &User,
        tier_id: &str,
    ) -> Result<Subscription, ConnectorError> {
        self.check_write()?;
        Ok(self.put_subscription(&user.id, tier_id, STATUS_ACTIVE).await)
    }

    async fn update_subscription_tier(
        &self,
        _user: &User,
        subscription_id: &str,
        tier_id: &str,
    ) -> Result<Subscription, ConnectorError> {
        self.check_write()?;
        let mut state = self.state.write().await;
        let subscription = state
            .subscriptions
            .iter_mut()
            .find(|sub| sub.id == subscription_id)
            .ok_or_else(|| {
                ConnectorError::NotFound(format!("Subscription {} not found", subscription_id))
            })?;

        subscription.tier_id = tier_id.to_string();
        subscription.updated_at = Some(Utc::now());
        Ok(subscription.clone())
    }

    async fn list_watchlist(&self, user: &User) -> Result<Vec<WatchlistEntry>, ConnectorError> {
        self.check_user_read()?;
        Ok(self
            .state
            .read()
            .await
            .watchlist
            .iter()
            .filter(|entry| entry.user_id == user.id)
            .cloned()
            .collect())
    }

    async fn add_to_watchlist(&self, user: &User, movie_id: &str) -> Result<(), ConnectorError> {
        self.check_write()?;
        let mut state = self.state.write().await;
        if state
            .watchlist
            .iter()
            .any(|entry| entry.user_id == user.id && entry.movie_id == movie_id)
        {
            return Err(ConnectorError::Conflict(format!(
                "{} is already in the watchlist",
                movie_id
            )));
        }

        let mut entry = WatchlistEntry::new(&user.id, movie_id);
        entry.id = Some(new_row_id());
        entry.added_at = Some(Utc::now());
        state.watchlist.push(entry);
        Ok(())
    }

    async fn remove_from_watchlist(
        &self,
        user: &User,
        movie_id: &str,
    ) -> Result<(), ConnectorError> {
        self.check_write()?;
        self.state
            .write()
            .await
            .watchlist
            .retain(|entry| !(entry.user_id == user.id && entry.movie_id == movie_id));
        Ok(())
    }

    async fn get_profile(&self, user: &User) -> Result<Option<Profile>, ConnectorError> {
        self.check_user_read()?;
        Ok(self
            .state
            .read()
            .await
            .profiles
            .iter()
            .find(|profile| profile.id == user.id)
            .cloned())
    }
}
