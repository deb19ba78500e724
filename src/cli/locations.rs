//! Location directory listing command.

use clap::Args;
use serde::Serialize;
use std::path::Path;

use crate::cli::common::{CliError, CliResult};
use crate::constants::CONTEXT_FILE_NAME;
use crate::context::{ContextStore, FileContextStore};
use crate::services::locations::LocationDirectory;

/// List the location directory with context roles
#[derive(Args, Debug)]
pub struct LocationsArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// JSON response for the directory listing
#[derive(Debug, Serialize)]
struct LocationsResponse {
    count: usize,
    locations: Vec<LocationItem>,
}

/// One directory row for JSON output
#[derive(Debug, Serialize)]
struct LocationItem {
    id: String,
    city: String,
    country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    role: String,
    favorite: bool,
    temp_c: i16,
    condition: String,
}

impl LocationsArgs {
    /// Execute the locations command against the given config directory
    pub fn execute(&self, config_dir: &Path) -> CliResult<()> {
        let mut directory = LocationDirectory::with_defaults();

        // Stamp roles from the persisted context when a snapshot exists
        let store = FileContextStore::new(config_dir.join(CONTEXT_FILE_NAME));
        let snapshot = store
            .load()
            .map_err(|e| CliError::io(format!("Failed to read context snapshot: {e}")))?;
        if let Some(context) = &snapshot {
            directory.sync_roles(context);
        }

        let locations: Vec<LocationItem> = directory
            .sorted()
            .into_iter()
            .map(|location| LocationItem {
                id: location.id.clone(),
                city: location.city.clone(),
                country: location.country.clone(),
                label: location.label.clone(),
                role: location.context_role.to_string(),
                favorite: location.is_favorite,
                temp_c: location.temp_c,
                condition: location.condition.display_name().to_string(),
            })
            .collect();

        let response = LocationsResponse {
            count: locations.len(),
            locations,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if response.count == 0 {
            println!("No locations in the directory.");
        } else {
            println!("Locations ({}):", response.count);
            println!();
            println!(
                "  {:<8} {:<26} {:<12} {:>6}  {}",
                "ROLE", "LOCATION", "LABEL", "TEMP", "CONDITION"
            );
            for item in response.locations {
                let star = if item.favorite { " ★" } else { "" };
                println!(
                    "  {:<8} {:<26} {:<12} {:>5}°  {}",
                    item.role,
                    format!("{}, {}{}", item.city, item.country, star),
                    item.label.unwrap_or_default(),
                    item.temp_c,
                    item.condition
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_listing_succeeds_without_snapshot() {
        let dir = TempDir::new().unwrap();
        let args = LocationsArgs { json: false };
        assert!(args.execute(dir.path()).is_ok());
    }

    #[test]
    fn test_json_listing_succeeds() {
        let dir = TempDir::new().unwrap();
        let args = LocationsArgs { json: true };
        assert!(args.execute(dir.path()).is_ok());
    }
}
