use crate::license_report::domain::License;
use std::collections::BTreeSet;

/// Sentinel identifiers IQ Server uses when it could not determine a license.
pub const DEFAULT_NOISE_LICENSE_IDS: [&str; 6] = [
    "Not-Supported",
    "No-Source-License",
    "Not-Declared",
    "No-Sources",
    "See-License-Clause",
    "UNKNOWN",
];

/// NoiseBlocklist policy for dropping non-informative license records
///
/// Matching is exact and case-sensitive on `license_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseBlocklist {
    license_ids: BTreeSet<String>,
}

impl NoiseBlocklist {
    pub fn new<I, S>(license_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            license_ids: license_ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Only `Not-Supported`, the narrowest filter that still hides IQ's
    /// unsupported-ecosystem marker.
    pub fn minimal() -> Self {
        Self::new(["Not-Supported"])
    }

    /// A blocklist that keeps every record
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    pub fn is_blocked(&self, license: &License) -> bool {
        self.license_ids.contains(license.license_id())
    }

    pub fn filter(&self, licenses: Vec<License>) -> Vec<License> {
        licenses
            .into_iter()
            .filter(|license| !self.is_blocked(license))
            .collect()
    }

    pub fn license_ids(&self) -> impl Iterator<Item = &str> {
        self.license_ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.license_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.license_ids.is_empty()
    }
}

impl Default for NoiseBlocklist {
    fn default() -> Self {
        Self::new(DEFAULT_NOISE_LICENSE_IDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_blocks_all_sentinels() {
        let blocklist = NoiseBlocklist::default();
        assert_eq!(blocklist.len(), 6);
        for id in DEFAULT_NOISE_LICENSE_IDS {
            assert!(blocklist.is_blocked(&License::new(id, id)));
        }
        assert!(!blocklist.is_blocked(&License::new("MIT", "MIT License")));
    }

    #[test]
    fn test_minimal_blocks_only_not_supported() {
        let blocklist = NoiseBlocklist::minimal();
        assert!(blocklist.is_blocked(&License::new("Not-Supported", "Not Supported")));
        assert!(!blocklist.is_blocked(&License::new("UNKNOWN", "Unknown")));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let blocklist = NoiseBlocklist::default();
        assert!(!blocklist.is_blocked(&License::new("unknown", "Unknown")));
    }

    #[test]
    fn test_match_ignores_license_name() {
        let blocklist = NoiseBlocklist::default();
        assert!(blocklist.is_blocked(&License::new("UNKNOWN", "MIT License")));
        assert!(!blocklist.is_blocked(&License::new("MIT", "UNKNOWN")));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let blocklist = NoiseBlocklist::default();
        let licenses = vec![
            License::new("MIT", "MIT License"),
            License::new("No-Sources", "No Sources"),
            License::new("Apache-2.0", "Apache License 2.0"),
            License::new("UNKNOWN", "Unknown"),
        ];

        let once = blocklist.filter(licenses);
        let twice = blocklist.filter(once.clone());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 2);
    }

    #[test]
    fn test_empty_keeps_everything() {
        let blocklist = NoiseBlocklist::empty();
        assert!(blocklist.is_empty());
        let licenses = vec![License::new("Not-Supported", "Not Supported")];
        assert_eq!(blocklist.filter(licenses.clone()), licenses);
    }

    #[test]
    fn test_custom_license_ids_sorted() {
        let blocklist = NoiseBlocklist::new(["UNKNOWN", "GPL-3.0", "UNKNOWN"]);
        let ids: Vec<&str> = blocklist.license_ids().collect();
        assert_eq!(ids, vec!["GPL-3.0", "UNKNOWN"]);
    }
}
