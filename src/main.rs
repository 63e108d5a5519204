//! `repo-listr`: list an organization's public repositories, with an
//! optional license filter.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`repo_listr::config::load_config`]).
//! 3. Build the HTTP transport ([`repo_listr::fetch::HttpFetcher`]).
//! 4. Fetch every requested organization ([`repo_listr::client::OrgClient`]).
//! 5. Render the requested report ([`repo_listr::report`]).
//! 6. Exit `0` (all orgs listed) or `1` (at least one failed).

mod cli;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use futures::future::join_all;
use indicatif::ProgressBar;

use repo_listr::client::OrgClient;
use repo_listr::config::load_config;
use repo_listr::fetch::{HttpFetcher, JsonFetcher};
use repo_listr::models::{OrgListing, RepoEntry};
use repo_listr::report;

use cli::{Cli, ReportFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let fetcher: Arc<dyn JsonFetcher> =
        Arc::new(HttpFetcher::new(Duration::from_secs(config.timeout_secs))?);

    let spinner = if !cli.quiet {
        let pb = ProgressBar::new_spinner();
        pb.set_message(format!("Fetching {} organization(s)", cli.orgs.len()));
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let fetches: Vec<_> = cli
        .orgs
        .iter()
        .map(|org| {
            let client = OrgClient::new(org, &config.api_root, fetcher.clone());
            let license = cli.license.clone();
            async move {
                let listing = fetch_listing(&client, license.as_deref()).await;
                (client.org_name().to_string(), listing)
            }
        })
        .collect();

    let results = join_all(fetches).await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let mut listings = Vec::new();
    let mut failures = Vec::new();
    for (org, result) in results {
        match result {
            Ok(listing) => listings.push(listing),
            Err(err) => failures.push((org, err)),
        }
    }

    match cli.report {
        ReportFormat::Terminal => {
            for listing in &listings {
                report::render(listing, cli.quiet);
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&listings)?);
        }
    }

    for (org, err) in &failures {
        eprintln!(" {} {}: {:#}", "✗".red(), org.bold(), err);
    }

    if !failures.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

/// Fetch one organization's listing, applying the license filter if any.
async fn fetch_listing(client: &OrgClient, license: Option<&str>) -> Result<OrgListing> {
    let payload = client.repos_payload().await?;

    let filtered: Vec<_> = payload
        .iter()
        .filter(|repo| license.map_or(true, |key| OrgClient::has_license(repo, key)))
        .cloned()
        .collect();

    Ok(OrgListing {
        org: client.org_name().to_string(),
        repos: RepoEntry::from_payload(&filtered),
    })
}
