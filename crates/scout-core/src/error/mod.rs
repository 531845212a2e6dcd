//! Error types for Scout
//!
//! Every fallible operation in the core returns [`ScoutResult`]. Errors carry a
//! stable `error_code()` for programmatic handling and an optional context
//! string describing where the failure happened.

mod constructors;
mod conversions;
mod types;

pub use types::{ScoutError, ScoutResult};
