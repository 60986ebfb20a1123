use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

const WORKSPACE_TEAM_URL: &str = "https://debuggingdisciples.slack.com/team/";

/// One resolved workspace identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub first_name: String,
    pub last_name: String,
    pub user_id: String,
}

impl DirectoryEntry {
    /// Deep link to the member's workspace profile.
    pub fn profile_url(&self) -> String {
        format!("{WORKSPACE_TEAM_URL}{}", self.user_id)
    }
}

/// Error raised while ingesting a workspace directory export.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryImportError {
    #[error("failed to read directory export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid directory CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Case-insensitive name lookup built from a workspace directory CSV export
/// (`fullname` and `userid` columns). The first whitespace-separated token of
/// the full name is the first name, the remainder the last name. Rows missing
/// either field are skipped.
#[derive(Debug, Default, Clone)]
pub struct MemberDirectory {
    entries: HashMap<(String, String), DirectoryEntry>,
}

impl MemberDirectory {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DirectoryImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DirectoryImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut entries = HashMap::new();

        for record in csv_reader.deserialize::<DirectoryRow>() {
            let row = record?;
            if let Some(entry) = row.into_entry() {
                entries.insert(lookup_key(&entry.first_name, &entry.last_name), entry);
            }
        }

        Ok(Self { entries })
    }

    pub fn lookup(&self, first_name: &str, last_name: &str) -> Option<&DirectoryEntry> {
        self.entries.get(&lookup_key(first_name, last_name))
    }

    /// Workspace profile URL for a member name, when the directory knows it.
    pub fn profile_url(&self, first_name: &str, last_name: &str) -> Option<String> {
        self.lookup(first_name, last_name)
            .map(DirectoryEntry::profile_url)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn lookup_key(first_name: &str, last_name: &str) -> (String, String) {
    (
        first_name.trim().to_lowercase(),
        last_name.trim().to_lowercase(),
    )
}

#[derive(Debug, Deserialize)]
struct DirectoryRow {
    #[serde(rename = "fullname", default)]
    fullname: String,
    #[serde(rename = "userid", default)]
    user_id: String,
}

impl DirectoryRow {
    fn into_entry(self) -> Option<DirectoryEntry> {
        let user_id = self.user_id.trim();
        if user_id.is_empty() {
            return None;
        }

        let mut parts = self.fullname.split_whitespace();
        let first_name = parts.next()?.to_string();
        let last_name = parts.collect::<Vec<_>>().join(" ");

        Some(DirectoryEntry {
            first_name,
            last_name,
            user_id: user_id.to_string(),
        })
    }
}
