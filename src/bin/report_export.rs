use anyhow::{Context, Result};
use demographic_analyzer::{analyze, config::DEFAULT_SOURCE_PATH, report, AnalyzerConfig};
use std::{env, io::Write, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// report_export [CSV_PATH] [OUT_PATH]
///
/// Without OUT_PATH the report goes to stdout as JSON.
fn main() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut args = env::args().skip(1);
    let source = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_PATH));
    let out_path = args.next().map(PathBuf::from);

    let config = AnalyzerConfig::default()
        .with_source_path(&source)
        .with_print_data(false);
    let stats = analyze(&config).with_context(|| format!("analyzing {}", source.display()))?;

    match out_path {
        Some(path) => {
            report::write_report(&stats, &path)?;
            info!(path = %path.display(), "wrote report");
        }
        None => {
            let text = report::serialize_report(&stats, report::ExportFormat::Json)?;
            std::io::stdout()
                .write_all(text.as_bytes())
                .context("writing report to stdout")?;
        }
    }
    Ok(())
}
