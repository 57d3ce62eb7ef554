use std::collections::BTreeSet;

use tracing::{debug, warn};

use super::{ScheduleStore, StoreError};
use crate::schedule::{OwnerId, ScheduleDefinition};
use crate::utils::validation::validation_errors;

impl ScheduleStore {
    /// Load all schedule definitions, in file order
    pub async fn load_all(&self) -> Result<Vec<ScheduleDefinition>, StoreError> {
        let contents = tokio::fs::read_to_string(self.path())
            .await
            .map_err(|source| StoreError::Read {
                path: self.path().to_path_buf(),
                source,
            })?;

        let definitions = parse_definitions(&contents).map_err(|source| StoreError::Parse {
            path: self.path().to_path_buf(),
            source,
        })?;

        debug!("Loaded {} schedule definitions", definitions.len());
        Ok(definitions)
    }

    /// Load the definitions belonging to one owner
    pub async fn load_for_owner(&self, owner: OwnerId) -> Result<Vec<ScheduleDefinition>, StoreError> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .filter(|d| d.owner == owner)
            .collect())
    }
}

/// Parse a JSON array of definitions, warning about any that look malformed.
///
/// Malformed definitions are kept; the resolver skips what it can't use.
pub fn parse_definitions(json: &str) -> Result<Vec<ScheduleDefinition>, serde_json::Error> {
    let definitions: Vec<ScheduleDefinition> = serde_json::from_str(json)?;

    for definition in &definitions {
        for error in validation_errors(definition) {
            warn!("Schedule '{}' (owner {}): {}", definition.title, definition.owner, error);
        }
    }

    Ok(definitions)
}

/// Distinct owners present in a set of definitions, ascending
pub fn owners(definitions: &[ScheduleDefinition]) -> BTreeSet<OwnerId> {
    definitions.iter().map(|d| d.owner).collect()
}
