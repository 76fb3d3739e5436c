mod builder;
mod narrative;
pub mod views;

pub use builder::build_report;
pub use views::{Report, TierSection, SCHEMA_VERSION};
