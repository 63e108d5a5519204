//! Thin client for the organization/repository listing endpoints.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::fetch::JsonFetcher;

/// Client for one organization's public repository listing.
///
/// Each remote payload is fetched at most once per instance; repeated accessor
/// calls return the memoized value. A fresh instance re-fetches.
pub struct OrgClient {
    org_name: String,
    api_root: String,
    fetcher: Arc<dyn JsonFetcher>,
    org: OnceCell<Value>,
    repos: OnceCell<Vec<Value>>,
}

impl OrgClient {
    pub fn new(org_name: &str, api_root: &str, fetcher: Arc<dyn JsonFetcher>) -> Self {
        Self {
            org_name: org_name.to_string(),
            api_root: api_root.trim_end_matches('/').to_string(),
            fetcher,
            org: OnceCell::new(),
            repos: OnceCell::new(),
        }
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    /// Organization metadata from `<api_root>/orgs/<org_name>`.
    ///
    /// Fetched once; transport errors propagate unchanged and are not cached,
    /// so a later call retries.
    pub async fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_init(|| async {
                let url = format!("{}/orgs/{}", self.api_root, self.org_name);
                self.fetcher.get_json(&url).await
            })
            .await
    }

    /// Listing URL taken from the organization payload's `repos_url` field.
    ///
    /// Always derived from the fetched metadata, never fetched on its own.
    pub async fn repos_url(&self) -> Result<String> {
        let org = self.org().await?;
        org.get("repos_url")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("organization {} has no repos_url", self.org_name))
    }

    /// Raw repository records from the listing URL. Fetched once.
    pub async fn repos_payload(&self) -> Result<&[Value]> {
        let payload = self
            .repos
            .get_or_try_init(|| async {
                let url = self.repos_url().await?;
                match self.fetcher.get_json(&url).await? {
                    Value::Array(repos) => Ok(repos),
                    _ => Err(anyhow!(
                        "repository listing for {} is not a JSON array",
                        self.org_name
                    )),
                }
            })
            .await?;
        Ok(payload)
    }

    /// Names of the organization's public repositories.
    ///
    /// With `license` set, only repositories whose license key matches exactly
    /// (case-sensitive) are included. Records without a string `name` are
    /// skipped.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let repos = self.repos_payload().await?;

        let names = repos
            .iter()
            .filter(|repo| license.map_or(true, |key| Self::has_license(repo, key)))
            .filter_map(|repo| repo.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect();

        Ok(names)
    }

    /// True iff `repo` carries a `license` mapping whose `key` equals
    /// `license_key`. Missing or malformed fields are a non-match, not an
    /// error.
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        repo.get("license")
            .and_then(|license| license.get("key"))
            .and_then(Value::as_str)
            .map(|key| key == license_key)
            .unwrap_or(false)
    }
}
