use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resume_parser::{ParserConfig, ResumeParser};

fn main() -> Result<()> {
    let config = ParserConfig::from_env()?;

    // Logs go to stderr so stdout stays pure JSON
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: resume-parser <resume.docx|resume.pdf>")?;

    info!("Starting resume-parser v{}", env!("CARGO_PKG_VERSION"));

    let parser = ResumeParser::new(config);
    let document = parser
        .parse_file(&path)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    info!(session = %document.session_id(), "Parsed {}", path.display());
    println!("{}", document.to_json_pretty()?);
    Ok(())
}
