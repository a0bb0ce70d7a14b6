//! Reserved label keys and profile prefixes.

/// Legacy label carrying the Kubernetes namespace of a workload.
pub const LEGACY_NAMESPACE_LABEL: &str = "calico/k8s_ns";

/// v3 label carrying the Kubernetes namespace of a workload.
pub const NAMESPACE_LABEL: &str = "projectcalico.org/namespace";

/// Legacy prefix for profiles generated from Kubernetes namespaces.
pub const LEGACY_K8S_NAMESPACE_PROFILE_PREFIX: &str = "k8s_ns.";

/// v3 prefix for profiles generated from Kubernetes namespaces.
pub const K8S_NAMESPACE_PROFILE_PREFIX: &str = "kns.";
