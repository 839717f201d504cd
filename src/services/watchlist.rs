use std::collections::HashSet;

use crate::connectors::{CatalogStore, ConnectorError};
use crate::models::User;

/// Flip one (user, movie) membership in the store.
///
/// Deletes the row when `current_membership` is true, inserts it otherwise,
/// and returns the membership the store now holds. Nothing guards against
/// two toggles racing; the store keeps whichever write lands last.
#[tracing::instrument(name = "Toggle watchlist membership.", skip(store, user), fields(user_id = %user.id))]
pub async fn toggle_membership(
    store: &dyn CatalogStore,
    user: &User,
    movie_id: &str,
    current_membership: bool,
) -> Result<bool, ConnectorError> {
    if current_membership {
        store.remove_from_watchlist(user, movie_id).await?;
        return Ok(false);
    }

    match store.add_to_watchlist(user, movie_id).await {
        Ok(()) => Ok(true),
        // the row is there already, which is the state we wanted
        Err(ConnectorError::Conflict(msg)) => {
            tracing::debug!("watchlist row already present: {}", msg);
            Ok(true)
        }
        Err(err) => Err(err),
    }
}

/// Request-scoped copy of one user's watchlist.
#[derive(Debug, Clone, Default)]
pub struct Watchlist {
    movie_ids: HashSet<String>,
}

impl Watchlist {
    pub async fn load(store: &dyn CatalogStore, user: &User) -> Result<Self, ConnectorError> {
        let entries = store.list_watchlist(user).await?;
        Ok(entries.into_iter().map(|entry| entry.movie_id).collect())
    }

    pub fn contains(&self, movie_id: &str) -> bool {
        self.movie_ids.contains(movie_id)
    }

    pub fn len(&self) -> usize {
        self.movie_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movie_ids.is_empty()
    }

    /// Movie ids in a stable order
    pub fn movie_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.movie_ids.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Toggle `movie_id` remotely; the local set changes only once the store
    /// call succeeded.
    pub async fn toggle(
        &mut self,
        store: &dyn CatalogStore,
        user: &User,
        movie_id: &str,
    ) -> Result<bool, ConnectorError> {
        let member = toggle_membership(store, user, movie_id, self.contains(movie_id)).await?;
        if member {
            self.movie_ids.insert(movie_id.to_string());
        } else {
            self.movie_ids.remove(movie_id);
        }
        Ok(member)
    }
}

impl FromIterator<String> for Watchlist {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            movie_ids: iter.into_iter().collect(),
        }
    }
}
