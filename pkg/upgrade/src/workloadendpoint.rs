use pkg_constants::endpoint::STATE_ACTIVE;
use pkg_types::{apiv1, apiv3, model};
use tracing::debug;

use crate::Converter;
use crate::error::ConversionResult;
use crate::family::{merge, partition};
use crate::labels::convert_labels;
use crate::names::WorkloadEndpointIdentifiers;
use crate::profiles::convert_profiles;

/// Converts workload endpoints between the legacy API, the v1 backend and v3.
///
/// Stateless; a single instance may be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkloadEndpointConverter;

impl WorkloadEndpointConverter {
    pub fn new() -> Self {
        Self
    }
}

impl Converter for WorkloadEndpointConverter {
    type ApiV1 = apiv1::WorkloadEndpoint;
    type BackendV1 = model::KvPair;
    type ApiV3 = apiv3::WorkloadEndpoint;

    // Total over well-typed input: addresses and networks were already parsed
    // when the legacy resource was deserialized, so nothing here can fail.
    fn api_v1_to_backend_v1(&self, wep: &apiv1::WorkloadEndpoint) -> ConversionResult<model::KvPair> {
        let meta = &wep.metadata;
        let spec = &wep.spec;

        let key = model::WorkloadEndpointKey {
            hostname: meta.node.clone(),
            orchestrator_id: meta.orchestrator.clone(),
            workload_id: meta.workload.clone(),
            endpoint_id: meta.name.clone(),
        };

        let (ipv4_nets, ipv6_nets) = partition(&spec.ip_networks);
        let nats: Vec<model::IpNat> = spec
            .ip_nats
            .iter()
            .map(|nat| model::IpNat {
                int_ip: nat.internal_ip,
                ext_ip: nat.external_ip,
            })
            .collect();
        let (ipv4_nat, ipv6_nat) = partition(&nats);

        let value = model::WorkloadEndpoint {
            state: STATE_ACTIVE.to_string(),
            name: spec.interface_name.clone(),
            active_instance_id: meta.active_instance_id.clone(),
            mac: spec.mac,
            // Profile ids and labels keep their legacy form in the backend.
            profile_ids: spec.profiles.clone(),
            ipv4_nets,
            ipv6_nets,
            ipv4_nat,
            ipv6_nat,
            labels: meta.labels.clone(),
            ipv4_gateway: spec.ipv4_gateway,
            ipv6_gateway: spec.ipv6_gateway,
            ports: spec
                .ports
                .iter()
                .map(|p| model::EndpointPort {
                    name: p.name.clone(),
                    protocol: p.protocol.clone(),
                    port: p.port,
                })
                .collect(),
        };

        debug!("Converted v1 workload endpoint to backend key {}", key);
        Ok(model::KvPair { key, value })
    }

    fn backend_v1_to_api_v3(&self, kvp: &model::KvPair) -> ConversionResult<apiv3::WorkloadEndpoint> {
        let ids = WorkloadEndpointIdentifiers::from_key(&kvp.key)?;
        let value = &kvp.value;

        let ip_networks = merge(&value.ipv4_nets, &value.ipv6_nets)
            .iter()
            .map(ToString::to_string)
            .collect();
        let ip_nats = merge(&value.ipv4_nat, &value.ipv6_nat)
            .iter()
            .map(|nat| apiv3::IpNat {
                internal_ip: nat.int_ip.to_string(),
                external_ip: nat.ext_ip.to_string(),
            })
            .collect();

        let name = ids.name();
        debug!("Converted backend key {} to v3 workload endpoint {}", kvp.key, name);

        Ok(apiv3::WorkloadEndpoint {
            type_meta: apiv3::TypeMeta::default(),
            metadata: apiv3::ObjectMeta {
                name,
                namespace: ids.namespace,
                labels: convert_labels(&value.labels),
            },
            spec: apiv3::WorkloadEndpointSpec {
                orchestrator: ids.orchestrator,
                workload: ids.workload,
                node: ids.node,
                container_id: value.active_instance_id.clone(),
                pod: ids.pod,
                endpoint: ids.endpoint,
                ip_networks,
                ip_nats,
                ipv4_gateway: value.ipv4_gateway.map(|gw| gw.to_string()),
                ipv6_gateway: value.ipv6_gateway.map(|gw| gw.to_string()),
                profiles: convert_profiles(&value.profile_ids),
                interface_name: value.name.clone(),
                mac: value.mac.map(|mac| mac.to_string()).unwrap_or_default(),
                ports: value
                    .ports
                    .iter()
                    .map(|p| apiv3::EndpointPort {
                        name: p.name.clone(),
                        protocol: p.protocol.clone(),
                        port: p.port,
                    })
                    .collect(),
            },
        })
    }
}
