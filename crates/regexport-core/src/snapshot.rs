//! Read-only view of the export page's checkboxes, captured by the caller.
//!
//! The builder never reaches into page state itself; it is handed a
//! snapshot. A snapshot answers `None` for an element that does not exist.

use anyhow::{Context, Result};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::field::ExportField;

pub trait CheckboxSnapshot {
    /// Checked state of the element with `checkbox_id`, or `None` if absent.
    fn checked(&self, checkbox_id: &str) -> Option<bool>;
}

impl CheckboxSnapshot for HashMap<String, bool> {
    fn checked(&self, checkbox_id: &str) -> Option<bool> {
        self.get(checkbox_id).copied()
    }
}

impl CheckboxSnapshot for BTreeMap<String, bool> {
    fn checked(&self, checkbox_id: &str) -> Option<bool> {
        self.get(checkbox_id).copied()
    }
}

impl<S: CheckboxSnapshot + ?Sized> CheckboxSnapshot for &S {
    fn checked(&self, checkbox_id: &str) -> Option<bool> {
        (**self).checked(checkbox_id)
    }
}

/// A page on which all six checkboxes exist and only the given fields are checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedSet {
    checked: [bool; 6],
}

impl CheckedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: ExportField) -> Self {
        self.checked[field.index()] = true;
        self
    }

    pub fn all() -> Self {
        Self { checked: [true; 6] }
    }
}

impl FromIterator<ExportField> for CheckedSet {
    fn from_iter<I: IntoIterator<Item = ExportField>>(iter: I) -> Self {
        iter.into_iter().fold(CheckedSet::new(), CheckedSet::with)
    }
}

impl CheckboxSnapshot for CheckedSet {
    fn checked(&self, checkbox_id: &str) -> Option<bool> {
        ExportField::ALL
            .into_iter()
            .find(|f| f.checkbox_id() == checkbox_id)
            .map(|f| self.checked[f.index()])
    }
}

/// Load a snapshot from a JSON object mapping checkbox ids to booleans.
///
/// Ids missing from the file are treated as absent elements.
pub fn load_snapshot(path: &Path) -> Result<BTreeMap<String, bool>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read snapshot {}", path.display()))?;
    let snapshot: BTreeMap<String, bool> = serde_json::from_str(&data)
        .with_context(|| format!("parse snapshot {}", path.display()))?;
    tracing::debug!("loaded {} checkbox states from {}", snapshot.len(), path.display());
    Ok(snapshot)
}
