use serde::Serialize;
use serde_json::Value;

/// One repository row as rendered in reports.
#[derive(Debug, Clone, Serialize)]
pub struct RepoEntry {
    pub name: String,
    /// License key (e.g. `apache-2.0`), absent for unlicensed repositories.
    pub license: Option<String>,
}

/// A fully fetched listing for one organization.
#[derive(Debug, Clone, Serialize)]
pub struct OrgListing {
    pub org: String,
    pub repos: Vec<RepoEntry>,
}

impl RepoEntry {
    /// Extract report rows from raw repository records.
    ///
    /// Records without a string `name` are dropped; a missing license
    /// sub-mapping becomes `None`.
    pub fn from_payload(payload: &[Value]) -> Vec<RepoEntry> {
        payload
            .iter()
            .filter_map(|repo| {
                let name = repo.get("name").and_then(Value::as_str)?.to_string();
                let license = repo
                    .get("license")
                    .and_then(|license| license.get("key"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Some(RepoEntry { name, license })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_from_payload_extracts_name_and_license_key() {
        let payload = [
            json!({"name": "dagger", "license": {"key": "apache-2.0", "name": "Apache License 2.0"}}),
            json!({"name": "kratu", "license": null}),
            json!({"name": "episodes.dart"}),
            json!({"full_name": "google/nameless"}),
        ];

        let entries = RepoEntry::from_payload(&payload);

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].name, "dagger");
        assert_eq!(entries[0].license.as_deref(), Some("apache-2.0"));
        assert_eq!(entries[1].license, None);
        assert_eq!(entries[2].license, None);
    }
}
