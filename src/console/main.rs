use clap::{Parser, Subcommand};
use cinemastream::console::commands::{catalog, CallableTrait};

#[derive(Parser, Debug)]
#[command(name = "console", about = "Operator tools for the catalog service")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List tiers in rank order
    Tiers,
    /// List the catalog with lock state for a tier
    Movies {
        #[arg(long)]
        featured: bool,
        /// Tier id of the viewer; omitted means no active subscription
        #[arg(long)]
        tier: Option<String>,
    },
    /// Evaluate one access decision
    Access {
        #[arg(long)]
        required: String,
        #[arg(long)]
        user: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    get_command(cli).call()
}

fn get_command(cli: Cli) -> Box<dyn CallableTrait> {
    match cli.command {
        Commands::Tiers => Box::new(catalog::TiersCommand::new()),
        Commands::Movies { featured, tier } => Box::new(catalog::MoviesCommand::new(featured, tier)),
        Commands::Access { required, user } => Box::new(catalog::AccessCommand::new(required, user)),
    }
}
