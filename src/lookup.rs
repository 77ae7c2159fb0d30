use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::Result;

/// Class id to display name tables for units and cargo.
///
/// Supplied by the caller before decoding and only read by the decoder.
#[derive(Debug, Clone, Default)]
pub struct ClassMappings {
    pub units: HashMap<i32, String>,
    pub cargo: HashMap<i32, String>,
}

impl ClassMappings {
    pub fn new(units: HashMap<i32, String>, cargo: HashMap<i32, String>) -> Self {
        Self { units, cargo }
    }

    pub fn unit_class_name(&self, id: i32) -> Option<&str> {
        self.units.get(&id).map(String::as_str)
    }

    pub fn cargo_class_name(&self, id: i32) -> Option<&str> {
        self.cargo.get(&id).map(String::as_str)
    }

    /// Build the tables from the game id dumps.
    ///
    /// Each dump is a JSON object of display name to class id. When two names
    /// share an id the alphabetically first name wins.
    pub fn from_json(units_json: &str, cargo_json: &str) -> Result<Self> {
        Ok(Self {
            units: invert_name_table(units_json)?,
            cargo: invert_name_table(cargo_json)?,
        })
    }

    /// Load tables from disk; a missing path leaves that table empty
    pub fn load(units_path: Option<&Path>, cargo_path: Option<&Path>) -> Result<Self> {
        let read = |path: Option<&Path>| -> Result<HashMap<i32, String>> {
            match path {
                Some(path) => invert_name_table(&std::fs::read_to_string(path)?),
                None => Ok(HashMap::new()),
            }
        };
        Ok(Self {
            units: read(units_path)?,
            cargo: read(cargo_path)?,
        })
    }
}

fn invert_name_table(json: &str) -> Result<HashMap<i32, String>> {
    let by_name: BTreeMap<String, i32> = serde_json::from_str(json)?;
    let mut by_id = HashMap::with_capacity(by_name.len());
    for (name, id) in by_name {
        by_id.entry(id).or_insert(name);
    }
    Ok(by_id)
}
