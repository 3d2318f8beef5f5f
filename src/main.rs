use anyhow::Result;
use linguist::{config::Config, embed};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (optional)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("linguist=info".parse()?)
                .add_directive("linguist_embed=info".parse()?),
        )
        .init();

    // Positional arguments: <input.json> <output.rs>
    let config = Config::from_args(std::env::args().skip(1))?;

    info!(
        "Embedding {} into {}",
        config.input.display(),
        config.output.display()
    );
    let summary = embed::embed_file(&config)?;

    info!(
        "Embed finished with {} coverage warning(s)",
        summary.warnings
    );

    Ok(())
}
