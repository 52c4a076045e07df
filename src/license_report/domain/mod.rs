pub mod license;
pub mod report;

pub use license::License;
pub use report::{Component, Report};
