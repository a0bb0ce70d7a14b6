//! Backend datastore key constants.

/// Root of every v1 backend key.
pub const V1_KEY_ROOT: &str = "/calico/v1";

/// Path segment preceding the hostname.
pub const HOST_SEGMENT: &str = "host";

/// Path segment preceding the orchestrator id.
pub const WORKLOAD_SEGMENT: &str = "workload";

/// Path segment preceding the endpoint id.
pub const ENDPOINT_SEGMENT: &str = "endpoint";
