pub mod license_set_reducer;

pub use license_set_reducer::LicenseSetReducer;
