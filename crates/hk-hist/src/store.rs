//! JSON store for saving named histograms and reloading them later.

use std::path::Path;

use serde::{Deserialize, Serialize};

use hk_core::{Error, Result};

use crate::histogram::{Hist1D, Hist2D};

const SCHEMA_VERSION: &str = "histkit_store_v0";

/// A collection of named histograms persisted as one JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistStore {
    /// Store schema identifier.
    pub schema_version: String,
    /// Tool version that wrote the store.
    pub tool_version: String,
    /// 1D histograms, in insertion order.
    pub histograms: Vec<Hist1D>,
    /// 2D histograms, in insertion order.
    pub histograms_2d: Vec<Hist2D>,
}

impl Default for HistStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistStore {
    /// Empty store.
    pub fn new() -> Self {
        Self {
            schema_version: SCHEMA_VERSION.to_string(),
            tool_version: hk_core::VERSION.to_string(),
            histograms: Vec::new(),
            histograms_2d: Vec::new(),
        }
    }

    /// Add a 1D histogram.
    pub fn insert(&mut self, h: Hist1D) {
        self.histograms.push(h);
    }

    /// Add a 2D histogram.
    pub fn insert_2d(&mut self, h: Hist2D) {
        self.histograms_2d.push(h);
    }

    /// Look up a 1D histogram by name.
    pub fn get(&self, name: &str) -> Result<&Hist1D> {
        self.histograms
            .iter()
            .find(|h| h.name == name)
            .ok_or_else(|| Error::MissingHistogram(name.to_string()))
    }

    /// Look up a 2D histogram by name.
    pub fn get_2d(&self, name: &str) -> Result<&Hist2D> {
        self.histograms_2d
            .iter()
            .find(|h| h.name == name)
            .ok_or_else(|| Error::MissingHistogram(name.to_string()))
    }

    /// Names of all 1D histograms, in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.histograms.iter().map(|h| h.name.as_str()).collect()
    }

    /// Write the store as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a store from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tmp_path(name: &str) -> std::path::PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("hk_store_{}_{}_{}", std::process::id(), nanos, name))
    }

    #[test]
    fn save_load_roundtrip() {
        let mut store = HistStore::new();
        let mut h = Hist1D::with_bins("signal", "", 0.0, 4.0, 4);
        h.fill(1.5);
        h.fill(2.5);
        store.insert(h);
        store.insert_2d(Hist2D::with_bins("matrix", "", 0.0, 1.0, 2, 0.0, 1.0, 2));

        let path = tmp_path("roundtrip.json");
        store.save(&path).unwrap();
        let loaded = HistStore::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.schema_version, SCHEMA_VERSION);
        let h = loaded.get("signal").unwrap();
        assert_eq!(h.bin_content, vec![0.0, 1.0, 1.0, 0.0]);
        assert!(loaded.get_2d("matrix").is_ok());
    }

    #[test]
    fn missing_name_is_an_error() {
        let store = HistStore::new();
        let err = store.get("nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }
}
