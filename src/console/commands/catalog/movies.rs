use crate::services::{build_rank, can_access};
use crate::views::format_runtime;
use actix_web::rt;

/// Prints the catalog with the lock state a viewer on `tier` would see
pub struct MoviesCommand {
    featured: bool,
    tier: Option<String>,
}

impl MoviesCommand {
    pub fn new(featured: bool, tier: Option<String>) -> Self {
        Self { featured, tier }
    }
}

impl crate::console::commands::CallableTrait for MoviesCommand {
    fn call(&self) -> anyhow::Result<()> {
        rt::System::new().block_on(async {
            let store = super::open_store()?;
            let rank = build_rank(&store.list_tiers().await?);
            let movies = store.list_movies(self.featured).await?;

            for movie in movies {
                let open = can_access(movie.required_tier.as_deref(), self.tier.as_deref(), &rank);
                println!(
                    "{:<8} {:>4.1}  {:<32} {:>7}  {}",
                    if open { "open" } else { "locked" },
                    movie.rating,
                    movie.title,
                    format_runtime(movie.duration_minutes),
                    movie.required_tier.as_deref().unwrap_or("-")
                );
            }

            Ok(())
        })
    }
}
