//! Lists candidate exporter/importer pairs from `data.csv`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tradle_shared::country::iso3_lower;
use tradle_shared::oec::trade_embed_url_for_codes;
use tradle_shared::selector::{DateCountry, parse_country_csv};

#[derive(Parser, Debug)]
#[command(name = "tradle-pairings")]
#[command(about = "Enumerate country pairs for the daily trade puzzle")]
struct Args {
    /// Country list with a `country,date` header
    #[arg(long, default_value = "client/public/data.csv")]
    csv: PathBuf,

    /// Keep only pairs whose trade visualization renders
    #[arg(long)]
    verify: bool,

    /// Stop after this many pairs
    #[arg(long)]
    limit: Option<usize>,

    /// Per-request timeout for --verify
    #[arg(long, default_value_t = 20)]
    timeout_secs: u64,
}

/// Every unordered pair `(i < j)` of rows, skipping codes without an alpha-3 mapping.
fn candidate_pairs(rows: &[DateCountry]) -> Vec<(String, String)> {
    let codes: Vec<String> = rows
        .iter()
        .map(|row| row.country.trim().to_ascii_lowercase())
        .filter(|code| iso3_lower(code).is_some())
        .collect();

    let mut pairs = Vec::new();
    for (i, from) in codes.iter().enumerate() {
        for to in &codes[i + 1..] {
            if from != to {
                pairs.push((from.clone(), to.clone()));
            }
        }
    }
    pairs
}

fn embed_url(from: &str, to: &str) -> Option<String> {
    Some(trade_embed_url_for_codes(&iso3_lower(from)?, &iso3_lower(to)?))
}

async fn renders(client: &reqwest::Client, url: &str) -> Result<bool, reqwest::Error> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body.contains("svg"))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let text = match std::fs::read_to_string(&args.csv) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(error = %e, path = %args.csv.display(), "failed to read country list");
            std::process::exit(1);
        }
    };
    let rows = match parse_country_csv(&text) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, path = %args.csv.display(), "failed to parse country list");
            std::process::exit(1);
        }
    };

    let pairs = candidate_pairs(&rows);
    let limit = args.limit.unwrap_or(usize::MAX);
    info!(rows = rows.len(), candidates = pairs.len(), verify = args.verify, "enumerating pairs");

    let client = if args.verify {
        match reqwest::Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .build()
        {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::error!(error = %e, "failed to build HTTP client");
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let mut emitted = 0usize;
    for (from, to) in pairs {
        if emitted >= limit {
            break;
        }

        if let Some(client) = client.as_ref() {
            let Some(url) = embed_url(&from, &to) else {
                continue;
            };
            match renders(client, &url).await {
                Ok(true) => {}
                Ok(false) => {
                    info!(%from, %to, "no visualization, skipping");
                    continue;
                }
                Err(e) => {
                    warn!(error = %e, %from, %to, "probe failed, skipping");
                    continue;
                }
            }
        }

        println!("{from},{to}");
        emitted += 1;
    }

    info!(emitted, "done");
}
