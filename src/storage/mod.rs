//! Store access: pool management, schema bootstrap, location upserts, the
//! geo-containment query, and hit-set replacement.
//!
//! The rest of the crate depends only on the operations exposed here, not on
//! SQLite specifics. The two loops coordinate exclusively through this store;
//! per-statement atomicity is the only consistency guarantee between them.

mod geo_query;
mod hits;
mod locations;
mod pool;
mod schema;

pub use geo_query::locations_in_fences;
pub use hits::{delete_all_hits, insert_hits, load_hits, replace_hits};
pub use locations::{load_location, upsert_locations};
pub use pool::init_db_pool_with_path;
pub use schema::{ensure_schema, table_exists};
