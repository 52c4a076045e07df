use std::fmt;

/// License value object as reported by IQ Server
///
/// `license_id` is the stable machine identifier (e.g. `MIT`,
/// `Not-Supported`); `license_name` is the display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct License {
    license_id: String,
    license_name: String,
}

impl License {
    pub fn new(license_id: impl Into<String>, license_name: impl Into<String>) -> Self {
        Self {
            license_id: license_id.into(),
            license_name: license_name.into(),
        }
    }

    pub fn license_id(&self) -> &str {
        &self.license_id
    }

    pub fn license_name(&self) -> &str {
        &self.license_name
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.license_name, self.license_id)
    }
}
