//! Label key rewriting between the legacy and v3 reserved namespaces.

use pkg_constants::labels::{LEGACY_NAMESPACE_LABEL, NAMESPACE_LABEL};
use std::collections::HashMap;

/// Renames the legacy namespace label to its v3 key. Every other label is
/// copied unchanged.
pub fn convert_labels(labels: &HashMap<String, String>) -> HashMap<String, String> {
    labels
        .iter()
        .map(|(key, value)| (convert_label_key(key).to_string(), value.clone()))
        .collect()
}

fn convert_label_key(key: &str) -> &str {
    if key == LEGACY_NAMESPACE_LABEL {
        NAMESPACE_LABEL
    } else {
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_namespace_label_is_renamed() {
        let v1 = HashMap::from([
            ("calico/k8s_ns".to_string(), "default".to_string()),
            ("test".to_string(), "someValue".to_string()),
        ]);
        let expected = HashMap::from([
            ("projectcalico.org/namespace".to_string(), "default".to_string()),
            ("test".to_string(), "someValue".to_string()),
        ]);
        assert_eq!(convert_labels(&v1), expected);
    }

    #[test]
    fn test_empty_labels() {
        assert_eq!(convert_labels(&HashMap::new()), HashMap::new());
    }

    #[test]
    fn test_similar_keys_pass_through() {
        let v1 = HashMap::from([
            ("calico/k8s_ns_extra".to_string(), "x".to_string()),
            ("app".to_string(), "web".to_string()),
        ]);
        assert_eq!(convert_labels(&v1), v1);
    }
}
