mod normalizer;
mod parser;

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use super::domain::{Member, MemberId};

/// Error raised while ingesting a roster export.
#[derive(Debug, thiserror::Error)]
pub enum RosterImportError {
    #[error("failed to read roster export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid roster CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads onboarding roster exports (one CSV row per member) into scoring
/// inputs. Rows without a member id are skipped; when several rows share an
/// id the first wins. Multi-value cells are semicolon-separated.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Member>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Member>, RosterImportError> {
        let mut seen: HashSet<MemberId> = HashSet::new();
        let mut members = Vec::new();

        for member in parser::parse_members(reader)? {
            if seen.insert(member.id.clone()) {
                members.push(member);
            }
        }

        Ok(members)
    }
}
