// property-types-rs/src/locality.rs
// Fixed list of localities the prediction service accepts

use serde::{Deserialize, Serialize};

/// Localities supported by the service when nothing else is configured
pub const DEFAULT_LOCALITIES: [&str; 14] = [
    "Kharghar",
    "Vashi",
    "Panvel",
    "Nerul",
    "Belapur",
    "Airoli",
    "Ulwe",
    "Dronagiri",
    "CBD Belapur",
    "Seawoods",
    "Koparkhairane",
    "Ghansoli",
    "Kamothe",
    "Taloje",
];

/// Ordered set of locality names. Lookups are exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalityCatalog {
    names: Vec<String>,
}

impl Default for LocalityCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALITIES)
    }
}

impl LocalityCatalog {
    /// Build a catalog from names, dropping blanks and duplicates while
    /// keeping the first occurrence order
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if name.is_empty() || unique.contains(&name) {
                continue;
            }
            unique.push(name);
        }
        Self { names: unique }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog() {
        let catalog = LocalityCatalog::default();
        assert_eq!(catalog.len(), 14);
        assert!(catalog.contains("Vashi"));
        assert!(catalog.contains("CBD Belapur"));
        assert!(!catalog.contains("vashi"));
        assert!(!catalog.contains("Andheri"));
        assert_eq!(catalog.iter().next(), Some("Kharghar"));
    }

    #[test]
    fn test_catalog_dedupes_and_skips_blanks() {
        let catalog = LocalityCatalog::new(vec!["Ulwe", "", "Nerul", "Ulwe"]);
        assert_eq!(catalog.names(), &["Ulwe".to_string(), "Nerul".to_string()]);
    }
}
