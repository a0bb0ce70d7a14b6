//! Workload endpoint constants.

/// Orchestrator id used by the Kubernetes CNI integration.
pub const ORCHESTRATOR_K8S: &str = "k8s";

/// Separator between namespace and pod name in a k8s workload id
/// (`<namespace>.<pod-name>`).
pub const K8S_WORKLOAD_ID_SEPARATOR: char = '.';

/// Lifecycle state written for every endpoint converted from the legacy API.
pub const STATE_ACTIVE: &str = "active";

/// Separator between the components of a generated v3 endpoint name.
pub const NAME_SEPARATOR: char = '-';

/// Escaped form of a hyphen that is part of a name component.
pub const NAME_ESCAPED_SEPARATOR: &str = "--";

/// Number of components in a generated v3 endpoint name
/// (node, orchestrator, workload/pod, endpoint).
pub const NAME_COMPONENTS: usize = 4;

// ─── API type info ────────────────────────────────────────────────────────

/// `apiVersion` of legacy client resources.
pub const API_VERSION_V1: &str = "v1";

/// `kind` of a legacy workload endpoint.
pub const KIND_V1_WORKLOAD_ENDPOINT: &str = "workloadEndpoint";

/// `apiVersion` of v3 client resources.
pub const API_VERSION_V3: &str = "projectcalico.org/v3";

/// `kind` of a v3 workload endpoint.
pub const KIND_V3_WORKLOAD_ENDPOINT: &str = "WorkloadEndpoint";
