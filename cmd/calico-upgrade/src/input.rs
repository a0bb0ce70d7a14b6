use anyhow::Context;
use pkg_types::apiv1::WorkloadEndpoint;
use serde::Deserialize;

/// A YAML document holding one legacy endpoint or a list of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    List(Vec<WorkloadEndpoint>),
    Single(Box<WorkloadEndpoint>),
}

/// Read every legacy workload endpoint from a (possibly multi-document) YAML file.
pub fn read_endpoints(path: &str) -> anyhow::Result<Vec<WorkloadEndpoint>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    parse_endpoints(&content).with_context(|| format!("Failed to parse {}", path))
}

pub fn parse_endpoints(content: &str) -> anyhow::Result<Vec<WorkloadEndpoint>> {
    let mut endpoints = Vec::new();
    for (idx, doc) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let value = serde_yaml::Value::deserialize(doc)?;
        if value.is_null() {
            continue;
        }
        match serde_yaml::from_value::<Document>(value)
            .with_context(|| format!("document {} is not a workload endpoint", idx + 1))?
        {
            Document::List(list) => endpoints.extend(list),
            Document::Single(wep) => endpoints.push(*wep),
        }
    }
    Ok(endpoints)
}
