use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Logo keys that are already deployed under their raw name and must not
/// be split for display.
const VERBATIM_KEYS: [&str; 1] = ["RSAv"];

/// The meal catalog served by the backend: meal name to sandwich logo key.
///
/// A `BTreeMap` keeps the picker lists in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealCatalog(pub BTreeMap<String, String>);

impl MealCatalog {
    pub fn from_json(payload: &str) -> Result<MealCatalog> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Logo key attached to a catalog meal, if the meal is known.
    pub fn logo_for(&self, meal: &str) -> Option<&str> {
        self.0.get(meal).map(String::as_str)
    }

    pub fn meal_names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Split a PascalCase logo key into space-separated words for display,
/// so "PouletCurry" reads "Poulet Curry".
pub fn display_name(key: &str) -> String {
    if VERBATIM_KEYS.contains(&key) {
        return key.to_string();
    }
    let mut words: Vec<String> = Vec::new();
    for (i, ch) in key.chars().enumerate() {
        if words.is_empty() || (ch.is_uppercase() && i != 0) {
            words.push(String::new());
        }
        if let Some(word) = words.last_mut() {
            word.push(ch);
        }
    }
    words
        .iter()
        .map(|word| word.trim())
        .collect::<Vec<_>>()
        .join(" ")
}
