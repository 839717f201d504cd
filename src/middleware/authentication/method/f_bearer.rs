use crate::connectors::AuthConnector;
use crate::helpers::JsonResponse;
use crate::middleware::authentication::get_header;
use crate::models::{User, Viewer};
use actix_web::{dev::ServiceRequest, web, Error, HttpMessage};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Users resolved from bearer tokens, kept for a fixed TTL
pub struct TokenCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CachedUser>>,
}

struct CachedUser {
    user: Arc<User>,
    expires_at: Instant,
}

impl TokenCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn get(&self, token: &str) -> Option<Arc<User>> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.get(token) {
                Some(entry) if entry.expires_at > now => return Some(entry.user.clone()),
                Some(_) => {}
                None => return None,
            }
        }

        // expired: drop it unless another request refreshed it meanwhile
        let mut entries = self.entries.write().await;
        if let Some(entry) = entries.get(token) {
            if entry.expires_at > now {
                return Some(entry.user.clone());
            }
            entries.remove(token);
        }

        None
    }

    /// Stores `user` under `token` and drops every expired entry.
    pub async fn insert(&self, token: String, user: Arc<User>) {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            token,
            CachedUser {
                user,
                expires_at: now + self.ttl,
            },
        );
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

fn try_extract_token(authorization: &str) -> Result<String, Error> {
    let mut parts = authorization.splitn(2, ' ');
    match parts.next() {
        Some(scheme) if scheme.eq_ignore_ascii_case("bearer") => {}
        _ => {
            return Err(JsonResponse::<()>::build().bad_request("Bearer missing scheme"));
        }
    }

    match parts.next().map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(JsonResponse::<()>::build().bad_request("Bearer token is missing")),
    }
}

#[tracing::instrument(name = "Authenticate with bearer token", skip(req))]
pub async fn try_bearer(req: &mut ServiceRequest) -> Result<bool, Error> {
    let authorization = get_header::<String>(req, "authorization")
        .map_err(|msg| JsonResponse::<()>::build().bad_request(msg))?;
    let Some(authorization) = authorization else {
        return Ok(false);
    };
    let token = try_extract_token(&authorization)?;

    let cache = req.app_data::<web::Data<TokenCache>>().ok_or_else(|| {
        tracing::error!("token cache is not registered");
        JsonResponse::<()>::build().internal_server_error("")
    })?;
    let user = match cache.get(&token).await {
        Some(user) => user,
        None => {
            let auth = req
                .app_data::<web::Data<Arc<dyn AuthConnector>>>()
                .ok_or_else(|| {
                    tracing::error!("auth connector is not registered");
                    JsonResponse::<()>::build().internal_server_error("")
                })?;
            let user = auth.fetch_user(&token).await.map_err(|err| {
                tracing::info!("bearer token rejected: {}", err);
                Error::from(err)
            })?;
            let user = Arc::new(user);
            cache.insert(token, user.clone()).await;
            user
        }
    };

    tracing::debug!("authenticated user {}", user.id);
    req.extensions_mut().insert(Viewer::User(user));

    Ok(true)
}
