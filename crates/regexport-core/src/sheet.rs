//! Worksheet names for a spreadsheet export: one sheet per job, valid and unique.

use std::collections::HashSet;

/// Worksheet names are capped well below the 31-character limit so a
/// collision suffix still fits.
const SHEET_NAME_LEN: usize = 20;

/// Removes `[ ] : * ? / \` from a worksheet name. Spreadsheet applications
/// reject all seven, backslash included.
pub fn clean_sheet_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .collect()
}

/// Hands out unique worksheet names for one workbook.
#[derive(Debug, Default)]
pub struct SheetNames {
    used: HashSet<String>,
}

impl SheetNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean and truncate `name`, then append 2, 3, ... until unused.
    pub fn allocate(&mut self, name: &str) -> String {
        let base: String = clean_sheet_name(name).chars().take(SHEET_NAME_LEN).collect();
        let mut candidate = base.clone();
        let mut counter = 2u32;
        while self.used.contains(&candidate) {
            candidate = format!("{base}{counter}");
            counter += 1;
        }
        self.used.insert(candidate.clone());
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_name_cleaning() {
        assert_eq!(clean_sheet_name("Bar [evening]: 18/19?"), "Bar evening 1819");
        assert_eq!(clean_sheet_name("a\\b*c"), "abc");
    }

    #[test]
    fn unique_sheet_names() {
        let mut names = SheetNames::new();
        assert_eq!(names.allocate("Kitchen"), "Kitchen");
        assert_eq!(names.allocate("Kitchen"), "Kitchen2");
        assert_eq!(names.allocate("Kitchen"), "Kitchen3");
        assert_eq!(names.allocate("Bar"), "Bar");
    }

    #[test]
    fn long_names_truncated_before_suffix() {
        let mut names = SheetNames::new();
        let long = "Construction and teardown crew";
        assert_eq!(names.allocate(long), "Construction and tea");
        assert_eq!(names.allocate(long), "Construction and tea2");
    }
}
