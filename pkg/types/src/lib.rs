//! Value types for the three generations of the workload endpoint resource:
//! the legacy client API ([`apiv1`]), the v1 key/value backend ([`model`]) and
//! the v3 client API ([`apiv3`]).

pub mod apiv1;
pub mod apiv3;
pub mod config;
pub mod model;
pub mod net;
pub mod validate;
