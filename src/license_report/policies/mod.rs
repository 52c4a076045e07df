pub mod license_identity;
pub mod noise_blocklist;

pub use license_identity::LicenseIdentity;
pub use noise_blocklist::NoiseBlocklist;
