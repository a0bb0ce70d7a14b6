//! Workload endpoint name codec.
//!
//! A v3 endpoint name is the four legacy identity components joined by single
//! hyphens: `<node>-<orchestrator>-<pod or workload>-<endpoint>`. Hyphens inside
//! a component are doubled, so every single hyphen in the name is a separator
//! and the components can be recovered with [`parse_name`]. Components must be
//! non-empty and must not start with a hyphen.

use pkg_constants::endpoint::{
    K8S_WORKLOAD_ID_SEPARATOR, NAME_COMPONENTS, NAME_ESCAPED_SEPARATOR, NAME_SEPARATOR,
    ORCHESTRATOR_K8S,
};
use pkg_types::model::WorkloadEndpointKey;

use crate::error::{ConversionError, ConversionResult};

/// Decoded identity of a workload endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkloadEndpointIdentifiers {
    /// Lower-cased host name.
    pub node: String,
    pub orchestrator: String,
    pub endpoint: String,
    /// Workload name; empty for k8s.
    pub workload: String,
    /// Pod name (unescaped); only set for k8s.
    pub pod: String,
    /// Kubernetes namespace; only set for k8s.
    pub namespace: String,
}

impl WorkloadEndpointIdentifiers {
    /// Decodes the identity carried by a backend key.
    pub fn from_key(key: &WorkloadEndpointKey) -> ConversionResult<Self> {
        Self::new(
            &key.hostname,
            &key.orchestrator_id,
            &key.workload_id,
            &key.endpoint_id,
        )
    }

    pub fn new(
        host: &str,
        orchestrator: &str,
        workload_id: &str,
        endpoint_id: &str,
    ) -> ConversionResult<Self> {
        let mut ids = Self {
            node: host.to_lowercase(),
            orchestrator: orchestrator.to_string(),
            endpoint: endpoint_id.to_string(),
            ..Default::default()
        };
        if orchestrator == ORCHESTRATOR_K8S {
            let (namespace, pod) = split_k8s_workload_id(workload_id)?;
            ids.namespace = namespace.to_string();
            ids.pod = pod.to_string();
        } else {
            ids.workload = workload_id.to_string();
        }

        let workload_field = if ids.orchestrator == ORCHESTRATOR_K8S {
            ("pod", &ids.pod)
        } else {
            ("workload", &ids.workload)
        };
        for (field, value) in [
            ("node", &ids.node),
            ("orchestrator", &ids.orchestrator),
            workload_field,
            ("endpoint", &ids.endpoint),
        ] {
            if value.is_empty() {
                return Err(ConversionError::InsufficientIdentifiers { field });
            }
            if value.starts_with(NAME_SEPARATOR) {
                return Err(ConversionError::InvalidIdentifier {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(ids)
    }

    /// Workload id in its legacy form (`<namespace>.<pod>` for k8s).
    pub fn workload_id(&self) -> String {
        if self.orchestrator == ORCHESTRATOR_K8S {
            format!("{}{}{}", self.namespace, K8S_WORKLOAD_ID_SEPARATOR, self.pod)
        } else {
            self.workload.clone()
        }
    }

    /// Generated v3 resource name.
    pub fn name(&self) -> String {
        let workload = if self.orchestrator == ORCHESTRATOR_K8S {
            &self.pod
        } else {
            &self.workload
        };
        let separator = NAME_SEPARATOR.to_string();
        [&self.node, &self.orchestrator, workload, &self.endpoint]
            .iter()
            .map(|c| escape(c))
            .collect::<Vec<_>>()
            .join(separator.as_str())
    }
}

/// Derives the v3 resource name from the four legacy identity fields.
pub fn encode(
    host: &str,
    orchestrator: &str,
    workload_id: &str,
    endpoint_id: &str,
) -> ConversionResult<String> {
    WorkloadEndpointIdentifiers::new(host, orchestrator, workload_id, endpoint_id).map(|ids| ids.name())
}

/// Recovers the identity from a generated name. For k8s endpoints the
/// namespace is not part of the name and must be supplied separately.
pub fn parse_name(name: &str, namespace: &str) -> ConversionResult<WorkloadEndpointIdentifiers> {
    let malformed = |reason: String| ConversionError::MalformedName {
        name: name.to_string(),
        reason,
    };

    let parts = split_name(name);
    if parts.len() != NAME_COMPONENTS {
        return Err(malformed(format!(
            "expected {} components, found {}",
            NAME_COMPONENTS,
            parts.len()
        )));
    }
    if parts.iter().any(String::is_empty) {
        return Err(malformed("empty component".to_string()));
    }

    let [node, orchestrator, workload, endpoint]: [String; NAME_COMPONENTS] = parts
        .try_into()
        .map_err(|_| malformed("unexpected component count".to_string()))?;

    let mut ids = WorkloadEndpointIdentifiers {
        node,
        orchestrator,
        endpoint,
        ..Default::default()
    };
    if ids.orchestrator == ORCHESTRATOR_K8S {
        if namespace.is_empty() {
            return Err(malformed("k8s endpoint requires a namespace".to_string()));
        }
        ids.namespace = namespace.to_string();
        ids.pod = workload;
    } else {
        ids.workload = workload;
    }
    Ok(ids)
}

/// Splits a k8s workload id on its first '.' into `(namespace, pod)`.
/// Both halves must be non-empty.
pub fn split_k8s_workload_id(workload_id: &str) -> ConversionResult<(&str, &str)> {
    match workload_id.split_once(K8S_WORKLOAD_ID_SEPARATOR) {
        Some((namespace, pod)) if !namespace.is_empty() && !pod.is_empty() => Ok((namespace, pod)),
        _ => Err(ConversionError::MalformedWorkloadId {
            workload_id: workload_id.to_string(),
        }),
    }
}

/// Doubles every hyphen in a name component.
pub fn escape(component: &str) -> String {
    component.replace(NAME_SEPARATOR, NAME_ESCAPED_SEPARATOR)
}

// Single hyphens separate components, double hyphens decode to one.
fn split_name(name: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c != NAME_SEPARATOR {
            current.push(c);
        } else if chars.peek() == Some(&NAME_SEPARATOR) {
            chars.next();
            current.push(c);
        } else {
            parts.push(std::mem::take(&mut current));
        }
    }
    parts.push(current);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_k8s() {
        let name = encode("TestNode", "k8s", "default.frontend-5gs43", "eth0").unwrap();
        assert_eq!(name, "testnode-k8s-frontend--5gs43-eth0");
    }

    #[test]
    fn test_encode_is_deterministic_and_case_insensitive_on_host() {
        let a = encode("TestNode", "k8s", "default.frontend-5gs43", "eth0").unwrap();
        let b = encode("testnode", "k8s", "default.frontend-5gs43", "eth0").unwrap();
        let c = encode("TESTNODE", "k8s", "default.frontend-5gs43", "eth0").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_encode_splits_on_first_dot_only() {
        let ids = WorkloadEndpointIdentifiers::new("node1", "k8s", "kube-system.dns.v2", "eth0")
            .unwrap();
        assert_eq!(ids.namespace, "kube-system");
        assert_eq!(ids.pod, "dns.v2");
        assert_eq!(ids.name(), "node1-k8s-dns.v2-eth0");
    }

    #[test]
    fn test_escaping_doubles_pod_hyphens() {
        let pod = "my-web-app-7d9f";
        let escaped = escape(pod);
        assert_eq!(
            escaped.matches('-').count(),
            2 * pod.matches('-').count()
        );

        let name = encode("node1", "k8s", &format!("default.{}", pod), "eth0").unwrap();
        assert_eq!(name, "node1-k8s-my--web--app--7d9f-eth0");
        // Exactly three separators remain once escaped pairs are removed.
        assert_eq!(name.replace("--", "").matches('-').count(), 3);
    }

    #[test]
    fn test_malformed_k8s_workload_id() {
        let err = encode("TestNode", "k8s", "default/frontend-5gs43", "eth0").unwrap_err();
        assert_eq!(
            err,
            ConversionError::MalformedWorkloadId {
                workload_id: "default/frontend-5gs43".to_string()
            }
        );
        assert!(err.to_string().contains("'default/frontend-5gs43'"));
    }

    #[test]
    fn test_empty_namespace_or_pod_is_malformed() {
        for workload_id in ["default.", ".frontend-5gs43", "."] {
            let err = encode("node1", "k8s", workload_id, "eth0").unwrap_err();
            assert_eq!(
                err,
                ConversionError::MalformedWorkloadId {
                    workload_id: workload_id.to_string()
                }
            );
        }
    }

    #[test]
    fn test_empty_components_are_rejected() {
        assert_eq!(
            encode("node1", "k8s", "default.pod", "").unwrap_err(),
            ConversionError::InsufficientIdentifiers { field: "endpoint" }
        );
        assert_eq!(
            encode("", "k8s", "default.pod", "eth0").unwrap_err(),
            ConversionError::InsufficientIdentifiers { field: "node" }
        );
        assert_eq!(
            encode("node1", "", "wl", "eth0").unwrap_err(),
            ConversionError::InsufficientIdentifiers { field: "orchestrator" }
        );
        assert_eq!(
            encode("node1", "openstack", "", "tap1").unwrap_err(),
            ConversionError::InsufficientIdentifiers { field: "workload" }
        );
    }

    #[test]
    fn test_leading_hyphen_is_rejected() {
        assert_eq!(
            encode("node1", "k8s", "default.pod", "-x").unwrap_err(),
            ConversionError::InvalidIdentifier {
                field: "endpoint",
                value: "-x".to_string()
            }
        );
        assert!(matches!(
            encode("node1", "k8s", "default.-pod", "eth0"),
            Err(ConversionError::InvalidIdentifier { field: "pod", .. })
        ));
    }

    #[test]
    fn test_trailing_hyphen_round_trips() {
        let ids = WorkloadEndpointIdentifiers::new("node1", "k8s", "default.pod-", "x").unwrap();
        assert_eq!(ids.name(), "node1-k8s-pod---x");
        assert_eq!(parse_name(&ids.name(), "default").unwrap(), ids);
    }

    #[test]
    fn test_non_k8s_workload_is_kept_whole() {
        let ids =
            WorkloadEndpointIdentifiers::new("Host-A", "openstack", "instance-0001", "tap1").unwrap();
        assert_eq!(ids.workload, "instance-0001");
        assert!(ids.pod.is_empty());
        assert!(ids.namespace.is_empty());
        assert_eq!(ids.name(), "host--a-openstack-instance--0001-tap1");
    }

    #[test]
    fn test_parse_recovers_identity() {
        let ids = WorkloadEndpointIdentifiers::new(
            "Node-1",
            "k8s",
            "default.frontend-5gs43",
            "eth0",
        )
        .unwrap();
        let parsed = parse_name(&ids.name(), "default").unwrap();
        assert_eq!(parsed, ids);
        assert_eq!(parsed.workload_id(), "default.frontend-5gs43");
        assert_eq!(parsed.node, "node-1");
    }

    #[test]
    fn test_parse_non_k8s() {
        let parsed = parse_name("host--a-openstack-instance--0001-tap1", "").unwrap();
        assert_eq!(parsed.node, "host-a");
        assert_eq!(parsed.workload_id(), "instance-0001");
        assert_eq!(parsed.endpoint, "tap1");
    }

    #[test]
    fn test_parse_rejects_malformed_names() {
        assert!(matches!(
            parse_name("node1-k8s-eth0", "default"),
            Err(ConversionError::MalformedName { .. })
        ));
        assert!(parse_name("node1-k8s-pod-eth0-extra", "default").is_err());
        assert!(parse_name("node1-k8s--eth0", "default").is_err());
        assert!(parse_name("node1-k8s-pod-eth0", "").is_err());
    }
}
