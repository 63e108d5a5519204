use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "repo-listr",
    about = "List an organization's public repositories and filter them by license",
    version
)]
pub struct Cli {
    /// Organization name(s) to list
    #[arg(required = true)]
    pub orgs: Vec<String>,

    /// Only include repositories with this exact license key (e.g. apache-2.0)
    #[arg(short, long, value_name = "KEY")]
    pub license: Option<String>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Config file [default: ./.repo-listr/config.toml, fallback ~/.config/repo-listr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Only print one summary line per organization
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
