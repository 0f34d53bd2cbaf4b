//! Data types owned by the data layer and read by the views.

mod ids;
mod location;

pub use ids::LocationId;
pub use location::{Latest, Location, Metric};
