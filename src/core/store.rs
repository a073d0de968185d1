//! Load and save the catalog JSON file.
//!
//! The on-disk format is a top-level object with a `states` array of
//! `{ name, cities }` records, as in `indian_states_cities.json`.
//! Output is pretty-printed with 2-space indentation so edits stay diffable.

use anyhow::{Context, Result};
use std::path::Path;

use super::catalog::Catalog;

/// Default catalog file, looked up relative to the working directory.
pub const DEFAULT_FILE: &str = "indian_states_cities.json";

/// Read and parse the catalog. Fails with context if the file is missing,
/// unreadable, or not valid JSON.
pub fn load(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let catalog = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(catalog)
}

/// Write the catalog back, pretty-printed with a trailing newline.
pub fn save(path: &Path, catalog: &Catalog) -> Result<()> {
    let mut content = serde_json::to_string_pretty(catalog)?;
    content.push('\n');
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Region;

    fn sample() -> Catalog {
        Catalog {
            states: vec![
                Region {
                    name: "Karnataka".to_string(),
                    cities: vec!["Bangalore".to_string(), "Mysore".to_string()],
                },
                Region {
                    name: "Kerala".to_string(),
                    cities: vec!["Kochi".to_string()],
                },
            ],
        }
    }

    #[test]
    fn save_load_roundtrip_preserves_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.json");

        let catalog = sample();
        save(&path, &catalog).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn load_parses_compact_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.json");
        std::fs::write(
            &path,
            r#"{"states": [{"name": "Karnataka", "cities": ["Mysore"]}]}"#,
        )
        .unwrap();

        let catalog = load(&path).unwrap();
        assert_eq!(catalog.states.len(), 1);
        assert_eq!(catalog.states[0].name, "Karnataka");
        assert_eq!(catalog.states[0].cities, vec!["Mysore"]);
    }

    #[test]
    fn saved_file_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("states.json");
        save(&path, &sample()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("  \"states\""), "content: {}", content);
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn load_missing_file_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn load_malformed_json_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
