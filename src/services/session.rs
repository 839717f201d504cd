use crate::connectors::CatalogStore;
use crate::models::User;
use crate::services::catalog::active_tier;
use crate::views::SessionView;

/// Summary of the signed-in user. Profile and tier lookups that fail are
/// logged and left empty.
#[tracing::instrument(name = "Build session view.", skip(store, user), fields(user_id = %user.id))]
pub async fn session(store: &dyn CatalogStore, user: &User) -> SessionView {
    let profile = store.get_profile(user).await.unwrap_or_else(|err| {
        tracing::warn!("profile lookup failed: {}", err);
        None
    });
    let tier_id = active_tier(store, user).await.unwrap_or_else(|err| {
        tracing::warn!("subscription lookup failed: {}", err);
        None
    });

    SessionView {
        authenticated: true,
        user_id: user.id.clone(),
        email: user.email.clone(),
        profile,
        tier_id,
    }
}
