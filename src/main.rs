use anyhow::{Context, Result};
use demographic_analyzer::{config::DEFAULT_SOURCE_PATH, calculate_demographic_data};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // logs go to stderr; stdout carries the report
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
    info!("startup");

    calculate_demographic_data(true)
        .with_context(|| format!("analyzing {}", DEFAULT_SOURCE_PATH))?;

    info!("all done");
    Ok(())
}
