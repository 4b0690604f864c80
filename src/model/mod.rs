mod ids;
mod types;

pub use ids::*;
pub use types::*;
