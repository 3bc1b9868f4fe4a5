//! Request handlers, one module per deployment variant.
//!
//! Each handler decodes input, validates the payload, and performs exactly
//! one service call on the blocking pool.

pub mod directory;
pub mod skills;
