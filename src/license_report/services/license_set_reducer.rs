use crate::license_report::domain::{License, Report};
use crate::license_report::policies::{LicenseIdentity, NoiseBlocklist};
use std::collections::HashSet;

/// LicenseSetReducer - Reduces a report to the distinct, informative licenses
///
/// Every component contributes its declared licenses, then its observed
/// licenses. Records are uniqued according to the [`LicenseIdentity`]
/// policy (first record seen wins), sentinel records are dropped by the
/// [`NoiseBlocklist`], and the result is sorted by license identifier so the
/// same report always yields the same sequence.
#[derive(Debug, Clone, Default)]
pub struct LicenseSetReducer {
    identity: LicenseIdentity,
    blocklist: NoiseBlocklist,
}

impl LicenseSetReducer {
    pub fn new(identity: LicenseIdentity, blocklist: NoiseBlocklist) -> Self {
        Self {
            identity,
            blocklist,
        }
    }

    pub fn identity(&self) -> LicenseIdentity {
        self.identity
    }

    pub fn blocklist(&self) -> &NoiseBlocklist {
        &self.blocklist
    }

    pub fn reduce(&self, report: &Report) -> Vec<License> {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();

        for license in report
            .components()
            .iter()
            .flat_map(|component| component.licenses())
        {
            if seen.insert(self.identity.key(license)) {
                unique.push(license.clone());
            }
        }

        let mut licenses = self.blocklist.filter(unique);
        licenses.sort_by(|a, b| {
            a.license_id()
                .cmp(b.license_id())
                .then_with(|| a.license_name().cmp(b.license_name()))
        });
        licenses
    }
}
