use std::collections::HashMap;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{OrgListing, RepoEntry};

/// Render a colored terminal listing for one organization.
pub fn render(listing: &OrgListing, quiet: bool) {
    let total = listing.repos.len();

    if quiet {
        println!("{}: {} repositories", listing.org, total);
        return;
    }

    println!("\n {} {}", listing.org.bold(), format!("({} repositories)", total).dimmed());

    if listing.repos.is_empty() {
        println!(" {}\n", "No repositories matched.".yellow());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Repository").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
        ]);

    for repo in &listing.repos {
        let license_cell = match repo.license.as_deref() {
            Some(key) => Cell::new(key),
            None => Cell::new("unlicensed").fg(Color::DarkGrey),
        };
        table.add_row(vec![Cell::new(&repo.name), license_cell]);
    }

    println!("{}", table);
    println!(" Licenses: {}\n", summarize_licenses(&listing.repos));
}

/// Top license keys by repository count, e.g. `apache-2.0 (4), mit (2)`.
fn summarize_licenses(repos: &[RepoEntry]) -> String {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for repo in repos {
        let key = repo.license.as_deref().unwrap_or("unlicensed");
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    pairs
        .iter()
        .take(4)
        .map(|(key, count)| format!("{} ({})", key, count))
        .collect::<Vec<String>>()
        .join(", ")
}
