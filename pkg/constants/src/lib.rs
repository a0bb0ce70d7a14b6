//! Centralized constants for the calico upgrade tooling.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod endpoint;
pub mod labels;
pub mod paths;
pub mod state;
