//! Vestibule server binary
//!
//! ```text
//! vestibule [--config <path>]
//! ```

use clap::Parser;
use vestibule_server::run;

/// Command line interface for Vestibule
#[derive(Parser, Debug)]
#[command(name = "vestibule")]
#[command(about = "Vestibule - registration, login and bearer-token authentication server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await?;
    Ok(())
}
