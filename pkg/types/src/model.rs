use pkg_constants::state::{ENDPOINT_SEGMENT, HOST_SEGMENT, V1_KEY_ROOT, WORKLOAD_SEGMENT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::net::{IpAddress, IpNetwork, IpVersion, MacAddress, Protocol, Versioned};

// --- Key ---

/// Four-part identity of a workload endpoint in the v1 backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct WorkloadEndpointKey {
    pub hostname: String,
    pub orchestrator_id: String,
    pub workload_id: String,
    pub endpoint_id: String,
}

impl WorkloadEndpointKey {
    /// Datastore path the endpoint is stored under, e.g.
    /// `/calico/v1/host/node1/workload/k8s/default.pod/endpoint/eth0`.
    pub fn path(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}/{}/{}",
            V1_KEY_ROOT,
            HOST_SEGMENT,
            self.hostname,
            WORKLOAD_SEGMENT,
            self.orchestrator_id,
            self.workload_id,
            ENDPOINT_SEGMENT,
            self.endpoint_id
        )
    }

    /// Inverse of [`WorkloadEndpointKey::path`]. Returns `None` for any other key.
    pub fn from_path(path: &str) -> Option<Self> {
        let rest = path.strip_prefix(V1_KEY_ROOT)?.strip_prefix('/')?;
        let parts: Vec<&str> = rest.split('/').collect();
        match parts.as_slice() {
            [host_seg, hostname, wl_seg, orchestrator, workload, ep_seg, endpoint]
                if *host_seg == HOST_SEGMENT
                    && *wl_seg == WORKLOAD_SEGMENT
                    && *ep_seg == ENDPOINT_SEGMENT
                    && [hostname, orchestrator, workload, endpoint]
                        .iter()
                        .all(|p| !p.is_empty()) =>
            {
                Some(Self {
                    hostname: hostname.to_string(),
                    orchestrator_id: orchestrator.to_string(),
                    workload_id: workload.to_string(),
                    endpoint_id: endpoint.to_string(),
                })
            }
            _ => None,
        }
    }
}

impl fmt::Display for WorkloadEndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

// --- Value ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IpNat {
    pub int_ip: IpAddress,
    pub ext_ip: IpAddress,
}

impl Versioned for IpNat {
    fn ip_version(&self) -> IpVersion {
        self.int_ip.ip_version()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointPort {
    pub name: String,
    pub protocol: Protocol,
    pub port: u16,
}

/// Stored form of a workload endpoint. Networks and NATs are kept per family.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkloadEndpoint {
    /// Free-text lifecycle state (`active` for everything converted here).
    pub state: String,
    /// Host-side interface name.
    pub name: String,
    #[serde(default)]
    pub active_instance_id: String,
    #[serde(default)]
    pub mac: Option<MacAddress>,
    #[serde(default)]
    pub profile_ids: Vec<String>,
    #[serde(default)]
    pub ipv4_nets: Vec<IpNetwork>,
    #[serde(default)]
    pub ipv6_nets: Vec<IpNetwork>,
    #[serde(default)]
    pub ipv4_nat: Vec<IpNat>,
    #[serde(default)]
    pub ipv6_nat: Vec<IpNat>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_gateway: Option<IpAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_gateway: Option<IpAddress>,
    #[serde(default)]
    pub ports: Vec<EndpointPort>,
}

/// A backend key together with its stored value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KvPair {
    pub key: WorkloadEndpointKey,
    pub value: WorkloadEndpoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> WorkloadEndpointKey {
        WorkloadEndpointKey {
            hostname: "TestNode".to_string(),
            orchestrator_id: "k8s".to_string(),
            workload_id: "default.frontend-5gs43".to_string(),
            endpoint_id: "eth0".to_string(),
        }
    }

    #[test]
    fn test_key_path() {
        assert_eq!(
            key().path(),
            "/calico/v1/host/TestNode/workload/k8s/default.frontend-5gs43/endpoint/eth0"
        );
    }

    #[test]
    fn test_key_from_path() {
        let parsed = WorkloadEndpointKey::from_path(&key().path());
        assert_eq!(parsed, Some(key()));
    }

    #[test]
    fn test_key_from_foreign_path() {
        assert!(WorkloadEndpointKey::from_path("/calico/v1/host/TestNode/workload/k8s").is_none());
        assert!(WorkloadEndpointKey::from_path("/calico/v1/policy/tier/default/policy/p1").is_none());
        assert!(
            WorkloadEndpointKey::from_path("/calico/v1/host//workload/k8s/wl/endpoint/eth0")
                .is_none()
        );
    }

    #[test]
    fn test_value_json_field_names() {
        let value = WorkloadEndpoint {
            state: "active".to_string(),
            name: "cali1234".to_string(),
            ipv4_nat: vec![IpNat {
                int_ip: "10.0.0.1".parse().unwrap(),
                ext_ip: "172.0.0.1".parse().unwrap(),
            }],
            ..Default::default()
        };
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["state"], "active");
        assert_eq!(json["ipv4_nat"][0]["int_ip"], "10.0.0.1");
        assert_eq!(json["ipv6_nets"], serde_json::json!([]));
        assert!(json.get("ipv4_gateway").is_none());
    }
}
