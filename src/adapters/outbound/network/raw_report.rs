//! Wire format of the IQ Server raw report
//! (`api/v2/applications/{publicId}/reports/{reportId}/raw`).
//!
//! Only the fields the license report needs are modelled; everything else in
//! the payload is ignored.

use crate::license_report::domain::{Component, License, Report};
use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub(crate) struct RawReport {
    #[serde(default)]
    components: Vec<RawComponent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawComponent {
    #[serde(default)]
    hash: Option<String>,
    #[serde(default)]
    package_url: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    license_data: Option<RawLicenseData>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawLicenseData {
    #[serde(default)]
    declared_licenses: Vec<RawLicense>,
    #[serde(default)]
    observed_licenses: Vec<RawLicense>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLicense {
    license_id: String,
    #[serde(default)]
    license_name: String,
}

impl From<RawLicense> for License {
    fn from(raw: RawLicense) -> Self {
        License::new(raw.license_id, raw.license_name)
    }
}

impl From<RawComponent> for Component {
    fn from(raw: RawComponent) -> Self {
        let display_name = raw.display_name.or(raw.package_url).or(raw.hash);
        let license_data = raw.license_data.unwrap_or_default();

        Component::new(
            display_name,
            license_data
                .declared_licenses
                .into_iter()
                .map(License::from)
                .collect(),
            license_data
                .observed_licenses
                .into_iter()
                .map(License::from)
                .collect(),
        )
    }
}

impl From<RawReport> for Report {
    fn from(raw: RawReport) -> Self {
        Report::new(raw.components.into_iter().map(Component::from).collect())
    }
}

/// Parses a raw report JSON document into the domain report
pub(crate) fn parse_raw_report(json: &str) -> serde_json::Result<Report> {
    let raw: RawReport = serde_json::from_str(json)?;
    Ok(raw.into())
}
