//! Milestone tracking core for the Icon Bay Torres construction project.
//!
//! [`MilestoneStore`] owns the catalogue, [`metrics`] turns it into dashboard
//! figures, [`view`] builds the filtered table and [`encode_csv`] exports it.

mod domain;
mod error;
mod export;
pub mod metrics;
mod seed;
mod store;
pub mod view;

pub use domain::*;
pub use error::*;
pub use export::*;
pub use seed::*;
pub use store::*;
