use crate::license_report::domain::License;

/// LicenseIdentity policy deciding when two license records are the same
///
/// IQ Server normally reports one display name per license identifier, but
/// reports have been seen where the same identifier carries different names
/// on different components. `LicenseId` collapses those into one entry;
/// `LicenseIdAndName` keeps every distinct pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LicenseIdentity {
    #[default]
    LicenseId,
    LicenseIdAndName,
}

/// Uniqueness key produced by a [`LicenseIdentity`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IdentityKey<'a> {
    Id(&'a str),
    IdAndName(&'a str, &'a str),
}

impl LicenseIdentity {
    pub fn key<'a>(&self, license: &'a License) -> IdentityKey<'a> {
        match self {
            LicenseIdentity::LicenseId => IdentityKey::Id(license.license_id()),
            LicenseIdentity::LicenseIdAndName => {
                IdentityKey::IdAndName(license.license_id(), license.license_name())
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseIdentity::LicenseId => "license-id",
            LicenseIdentity::LicenseIdAndName => "license-id-and-name",
        }
    }
}

impl std::str::FromStr for LicenseIdentity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "license-id" | "id" => Ok(LicenseIdentity::LicenseId),
            "license-id-and-name" | "id-and-name" => Ok(LicenseIdentity::LicenseIdAndName),
            _ => Err(format!(
                "Invalid license identity: {}. Please specify 'license-id' or 'license-id-and-name'",
                s
            )),
        }
    }
}

impl std::fmt::Display for LicenseIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
