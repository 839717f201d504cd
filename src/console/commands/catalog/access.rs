use crate::services::build_rank;
use actix_web::rt;

/// Evaluates one access decision against the live tier list
pub struct AccessCommand {
    required: String,
    user: Option<String>,
}

impl AccessCommand {
    pub fn new(required: String, user: Option<String>) -> Self {
        Self { required, user }
    }
}

impl crate::console::commands::CallableTrait for AccessCommand {
    fn call(&self) -> anyhow::Result<()> {
        rt::System::new().block_on(async {
            let store = super::open_store()?;
            let rank = build_rank(&store.list_tiers().await?);

            let allowed = rank.can_access(Some(self.required.as_str()), self.user.as_deref());
            println!(
                "required={} (rank {}) user={} (rank {}): {}",
                self.required,
                rank.get(&self.required).map_or("-".to_string(), |r| r.to_string()),
                self.user.as_deref().unwrap_or("none"),
                self.user
                    .as_deref()
                    .and_then(|user| rank.get(user))
                    .map_or("-".to_string(), |r| r.to_string()),
                if allowed { "allowed" } else { "denied" }
            );

            Ok(())
        })
    }
}
