//! Output generation for the dashboard artifacts.
//!
//! The pipeline's presentation layer is its output schema: an ordered view of
//! news records plus a no-results flag. These submodules render that view:
//!
//! - [`markdown`]: the human-readable dashboard (summary table + story list)
//! - [`json`]: the machine-readable record dump for downstream consumers

pub mod json;
pub mod markdown;
