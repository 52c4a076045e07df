/// Network adapters for the IQ Server REST API
mod iq_client;
pub(crate) mod raw_report;

pub use iq_client::{IqCredentials, IqServerClient};
