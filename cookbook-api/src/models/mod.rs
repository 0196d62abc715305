//! Wire-facing models (create / overview / details) and the internal
//! domain models the services work with.
//!
//! Wire structs use camelCase field names; durations travel as `HH:MM:SS`
//! strings and are parsed into `chrono::Duration` at the domain boundary.

pub mod domain;
pub mod ingredient;
pub mod patch;
pub mod recipe;
pub mod step;
pub mod sub_step;
