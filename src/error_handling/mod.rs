//! Error types for the application.

mod types;

pub use types::{
    DatabaseError, FenceError, FetchError, InitializationError, RegisterError, ValidationError,
    WriteError,
};
