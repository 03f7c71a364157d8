//! OpenSASE Catalog - dashboard driver
//!
//! Reads one JSON intent per line on stdin and writes the resulting dashboard
//! snapshot as one JSON line on stdout.

use anyhow::{Context, Result};
use opensase_catalog::{Dashboard, DashboardConfig, Intent, JsonCatalog, RecordProvider, SeedCatalog};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = DashboardConfig::from_env().context("loading configuration")?;
    let provider: Box<dyn RecordProvider> = match &config.data_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading catalog from file");
            Box::new(JsonCatalog::new(path.clone()))
        }
        None => Box::new(SeedCatalog),
    };
    let mut dashboard = Dashboard::from_provider(provider.as_ref(), &config).context("loading catalog")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    emit(&mut out, &dashboard)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let intent: Intent = match serde_json::from_str(&line) {
            Ok(intent) => intent,
            Err(e) => {
                tracing::warn!(error = %e, input = %line, "ignoring malformed intent");
                continue;
            }
        };
        if let Err(e) = dashboard.dispatch(intent) {
            tracing::warn!(error = %e, "intent rejected");
        }
        for event in dashboard.take_events() {
            tracing::debug!(?event, "dashboard event");
        }
        emit(&mut out, &dashboard)?;
    }
    Ok(())
}

fn emit(out: &mut impl Write, dashboard: &Dashboard) -> Result<()> {
    serde_json::to_writer(&mut *out, &dashboard.snapshot())?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
