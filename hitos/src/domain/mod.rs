mod ids;
mod milestone;
mod project_info;
mod risk;

pub use ids::*;
pub use milestone::*;
pub use project_info::*;
pub use risk::*;
