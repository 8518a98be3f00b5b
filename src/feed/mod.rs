//! Vehicle-location feed client: raw document model and cursor-based fetch.

mod fetch;
mod types;

pub use fetch::fetch;
pub use types::{FeedDocument, FeedFault, LastTime, RawVehicle};
