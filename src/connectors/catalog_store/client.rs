use crate::connectors::config::BackendConfig;
use crate::connectors::errors::ConnectorError;
use crate::models::{
    Movie, NewSubscription, Profile, Subscription, SubscriptionTierChange, Tier, User,
    WatchlistEntry, STATUS_ACTIVE,
};

use chrono::Utc;
use futures::FutureExt;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::Instrument;

use super::connector::CatalogStore;
use super::{MOVIES_TABLE, PROFILES_TABLE, SUBSCRIPTIONS_TABLE, TIERS_TABLE, WATCHLIST_TABLE};

type Query = Vec<(&'static str, String)>;

/// HTTP client for the backend's PostgREST table API
pub struct CatalogStoreClient {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
    pub(crate) api_key: String,
    pub(crate) retry_attempts: usize,
}

impl CatalogStoreClient {
    pub fn new(config: BackendConfig) -> Result<Self, ConnectorError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ConnectorError::Internal("backend api key is not set".to_string()))?;
        let timeout = std::time::Duration::from_secs(config.timeout_secs);
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ConnectorError::Internal(format!("http client: {}", err)))?;

        Ok(Self {
            base_url: config.rest_url(),
            http_client,
            api_key,
            retry_attempts: config.retry_attempts,
        })
    }

    /// Request against `{base_url}/{table}`. Anonymous calls authenticate
    /// with the project key, user calls with the user's token.
    pub(crate) fn request(&self, method: Method, table: &str, user: Option<&User>) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, table);
        let token = user
            .and_then(|user| user.access_token.as_deref())
            .unwrap_or(self.api_key.as_str());

        self.http_client
            .request(method, url)
            .header("apikey", self.api_key.as_str())
            .bearer_auth(token)
    }

    /// Retry helper with exponential backoff, transient failures only
    pub(crate) async fn retry_request<F, T>(&self, mut f: F) -> Result<T, ConnectorError>
    where
        F: FnMut() -> futures::future::BoxFuture<'static, Result<T, ConnectorError>>,
    {
        let mut attempt = 0;
        loop {
            match f().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    attempt += 1;
                    if attempt >= self.retry_attempts || !err.is_transient() {
                        return Err(err);
                    }
                    // Exponential backoff: 200ms, 400ms, 800ms, etc.
                    let backoff =
                        std::time::Duration::from_millis(100 * 2_u64.pow(attempt as u32));
                    tracing::warn!("retrying after {:?}: {}", backoff, err);
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }

    async fn fetch_rows<T>(
        &self,
        table: &str,
        query: Query,
        user: Option<&User>,
    ) -> Result<Vec<T>, ConnectorError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.retry_request(|| {
            let request = self.request(Method::GET, table, user).query(&query);
            async move {
                let resp = request.send().await?;
                read_rows::<T>(resp).await
            }
            .boxed()
        })
        .await
    }

    async fn send_once(&self, request: RequestBuilder) -> Result<Response, ConnectorError> {
        let resp = request.send().await?;
        check_status(resp).await
    }
}

async fn check_status(resp: Response) -> Result<Response, ConnectorError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    tracing::error!("backend responded {}: {}", status, body);
    Err(ConnectorError::from_status(status.as_u16(), body))
}

async fn read_rows<T: DeserializeOwned>(resp: Response) -> Result<Vec<T>, ConnectorError> {
    let resp = check_status(resp).await?;
    let text = resp.text().await?;
    serde_json::from_str::<Vec<T>>(&text).map_err(|_| ConnectorError::InvalidResponse(text))
}

fn eq(value: &str) -> String {
    format!("eq.{}", value)
}

#[async_trait::async_trait]
impl CatalogStore for CatalogStoreClient {
    async fn list_tiers(&self) -> Result<Vec<Tier>, ConnectorError> {
        let span = tracing::info_span!("catalog_store_list_tiers");
        let query = vec![("select", "*".to_string()), ("order", "price.asc".to_string())];

        self.fetch_rows(TIERS_TABLE, query, None)
            .instrument(span)
            .await
    }

    async fn list_movies(&self, featured_only: bool) -> Result<Vec<Movie>, ConnectorError> {
        let span = tracing::info_span!("catalog_store_list_movies", featured_only);
        let mut query = vec![("select", "*".to_string()), ("order", "rating.desc".to_string())];
        if featured_only {
            query.push(("is_featured", "eq.true".to_string()));
        }

        self.fetch_rows(MOVIES_TABLE, query, None)
            .instrument(span)
            .await
    }

    async fn get_active_subscription(
        &self,
        user: &User,
    ) -> Result<Option<Subscription>, ConnectorError> {
        let span = tracing::info_span!("catalog_store_active_subscription", user_id = %user.id);
        let query = vec![
            ("select", "*".to_string()),
            ("user_id", eq(&user.id)),
            ("status", eq(STATUS_ACTIVE)),
        ];

        let mut rows: Vec<Subscription> = self
            .fetch_rows(SUBSCRIPTIONS_TABLE, query, Some(user))
            .instrument(span)
            .await?;

        match rows.len() {
            0 | 1 => Ok(rows.pop()),
            n => Err(ConnectorError::InvalidResponse(format!(
                "{} active subscriptions for user {}",
                n, user.id
            ))),
        }
    }

    async fn create_subscription(
        &self,
        user: &User,
        tier_id: &str,
    ) -> Result<Subscription, ConnectorError> {
        let span = tracing::info_span!(
            "catalog_store_create_subscription",
            user_id = %user.id,
            tier_id = %tier_id
        );
        let request = self
            .request(Method::POST, SUBSCRIPTIONS_TABLE, Some(user))
            .header("Prefer", "return=representation")
            .json(&NewSubscription::active(&user.id, tier_id));

        let resp = self.send_once(request).instrument(span).await?;
        read_rows::<Subscription>(resp)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| ConnectorError::InvalidResponse("insert returned no row".to_string()))
    }

    async fn update_subscription_tier(
        &self,
        user: &User,
        subscription_id: &str,
        tier_id: &str,
    ) -> Result<Subscription, ConnectorError> {
        let span = tracing::info_span!(
            "catalog_store_update_subscription",
            subscription_id = %subscription_id,
            tier_id = %tier_id
        );
        let change = SubscriptionTierChange {
            tier_id: tier_id.to_string(),
            updated_at: Utc::now(),
        };
        let request = self
            .request(Method::PATCH, SUBSCRIPTIONS_TABLE, Some(user))
            .query(&[("id", eq(subscription_id))])
            .header("Prefer", "return=representation")
            .json(&change);

        let resp = self.send_once(request).instrument(span).await?;
        read_rows::<Subscription>(resp)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                ConnectorError::NotFound(format!("Subscription {} not found", subscription_id))
            })
    }

    async fn list_watchlist(&self, user: &User) -> Result<Vec<WatchlistEntry>, ConnectorError> {
        let span = tracing::info_span!("catalog_store_list_watchlist", user_id = %user.id);
        let query = vec![("select", "*".to_string()), ("user_id", eq(&user.id))];

        self.fetch_rows(WATCHLIST_TABLE, query, Some(user))
            .instrument(span)
            .await
    }

    async fn add_to_watchlist(&self, user: &User, movie_id: &str) -> Result<(), ConnectorError> {
        let span = tracing::info_span!(
            "catalog_store_add_watchlist",
            user_id = %user.id,
            movie_id = %movie_id
        );
        let request = self
            .request(Method::POST, WATCHLIST_TABLE, Some(user))
            .header("Prefer", "return=minimal")
            .json(&WatchlistEntry::new(&user.id, movie_id));

        self.send_once(request).instrument(span).await.map(|_| ())
    }

    async fn remove_from_watchlist(
        &self,
        user: &User,
        movie_id: &str,
    ) -> Result<(), ConnectorError> {
        let span = tracing::info_span!(
            "catalog_store_remove_watchlist",
            user_id = %user.id,
            movie_id = %movie_id
        );
        let request = self
            .request(Method::DELETE, WATCHLIST_TABLE, Some(user))
            .query(&[("user_id", eq(&user.id)), ("movie_id", eq(movie_id))]);

        self.send_once(request).instrument(span).await.map(|_| ())
    }

    async fn get_profile(&self, user: &User) -> Result<Option<Profile>, ConnectorError> {
        let span = tracing::info_span!("catalog_store_get_profile", user_id = %user.id);
        let query = vec![("select", "*".to_string()), ("id", eq(&user.id))];

        let rows: Vec<Profile> = self
            .fetch_rows(PROFILES_TABLE, query, Some(user))
            .instrument(span)
            .await?;
        Ok(rows.into_iter().next())
    }
}
