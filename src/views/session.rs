use crate::models;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub authenticated: bool,
    pub user_id: String,
    pub email: Option<String>,
    pub profile: Option<models::Profile>,
    pub tier_id: Option<String>,
}
