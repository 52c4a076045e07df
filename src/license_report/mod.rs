/// Domain layer - licenses, reports and the rules for reducing them
pub mod domain;
pub mod policies;
pub mod services;
