use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Serialize, Deserialize, Debug, Validate)]
pub struct SubscribeForm {
    #[validate(pattern = r"\S")]
    #[validate(max_length = 128)]
    pub tier_id: String,
}

impl SubscribeForm {
    pub fn tier_id(&self) -> &str {
        self.tier_id.trim()
    }
}
