use pkg_constants::endpoint::{API_VERSION_V1, KIND_V1_WORKLOAD_ENDPOINT};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::net::{IpAddress, IpNetwork, IpVersion, MacAddress, Protocol, Versioned};

// --- Type info ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_kind")]
    pub kind: String,
}

impl Default for TypeMeta {
    fn default() -> Self {
        Self {
            api_version: default_api_version(),
            kind: default_kind(),
        }
    }
}

fn default_api_version() -> String {
    API_VERSION_V1.to_string()
}

fn default_kind() -> String {
    KIND_V1_WORKLOAD_ENDPOINT.to_string()
}

// --- Metadata ---

/// Identity of a legacy workload endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadEndpointMetadata {
    /// Endpoint id (e.g. `eth0`).
    #[serde(default)]
    pub name: String,
    /// Workload id; `<namespace>.<pod-name>` for the k8s orchestrator.
    #[serde(default)]
    pub workload: String,
    #[serde(default)]
    pub orchestrator: String,
    /// Host the endpoint lives on.
    #[serde(default)]
    pub node: String,
    #[serde(default, rename = "activeInstanceID")]
    pub active_instance_id: String,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

// --- Spec ---

/// One internal/external NAT mapping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IpNat {
    #[serde(rename = "internalIP")]
    pub internal_ip: IpAddress,
    #[serde(rename = "externalIP")]
    pub external_ip: IpAddress,
}

impl Versioned for IpNat {
    fn ip_version(&self) -> IpVersion {
        self.internal_ip.ip_version()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EndpointPort {
    pub name: String,
    pub protocol: Protocol,
    pub port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadEndpointSpec {
    /// Networks assigned to the endpoint, both families in one list.
    #[serde(default)]
    pub ip_networks: Vec<IpNetwork>,
    #[serde(default, rename = "ipNATs")]
    pub ip_nats: Vec<IpNat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv4_gateway: Option<IpAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_gateway: Option<IpAddress>,
    #[serde(default)]
    pub profiles: Vec<String>,
    #[serde(default)]
    pub interface_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<MacAddress>,
    #[serde(default)]
    pub ports: Vec<EndpointPort>,
}

// --- WorkloadEndpoint ---

/// Legacy client-facing workload endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkloadEndpoint {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    pub metadata: WorkloadEndpointMetadata,
    #[serde(default)]
    pub spec: WorkloadEndpointSpec,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_legacy_yaml() {
        let yaml = r#"
apiVersion: v1
kind: workloadEndpoint
metadata:
  name: eth0
  workload: default.frontend-5gs43
  orchestrator: k8s
  node: TestNode
  activeInstanceID: "1337495556942031415926535"
  labels:
    calico/k8s_ns: default
spec:
  ipNetworks: ["10.0.0.1/32", "2001::/128"]
  ipNATs:
    - internalIP: 10.0.0.1
      externalIP: 172.0.0.1
  ipv4Gateway: 10.0.0.254
  profiles: ["k8s_ns.default"]
  interfaceName: cali1234
  mac: "02:42:7d:c6:f0:80"
  ports:
    - name: http
      protocol: tcp
      port: 80
"#;
        let wep: WorkloadEndpoint = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(wep.type_meta, TypeMeta::default());
        assert_eq!(wep.metadata.workload, "default.frontend-5gs43");
        assert_eq!(wep.metadata.active_instance_id, "1337495556942031415926535");
        assert_eq!(wep.spec.ip_networks.len(), 2);
        assert_eq!(wep.spec.ip_nats[0].ip_version(), IpVersion::V4);
        assert!(wep.spec.ipv6_gateway.is_none());
        assert_eq!(wep.spec.ports[0].protocol, Protocol::from_name("tcp"));
    }

    #[test]
    fn test_rejects_bad_network_text() {
        let yaml = r#"
metadata:
  name: eth0
spec:
  ipNetworks: ["10.0.0.300/32"]
"#;
        assert!(serde_yaml::from_str::<WorkloadEndpoint>(yaml).is_err());
    }
}
