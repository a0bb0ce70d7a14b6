//! Profile id rewriting.

use pkg_constants::labels::{K8S_NAMESPACE_PROFILE_PREFIX, LEGACY_K8S_NAMESPACE_PROFILE_PREFIX};

/// Rewrites legacy namespace profile ids (`k8s_ns.<ns>`) to their v3 form
/// (`kns.<ns>`). Order is preserved.
pub fn convert_profiles(profiles: &[String]) -> Vec<String> {
    profiles.iter().map(|p| convert_profile(p)).collect()
}

pub fn convert_profile(profile: &str) -> String {
    match profile.strip_prefix(LEGACY_K8S_NAMESPACE_PROFILE_PREFIX) {
        Some(namespace) => format!("{}{}", K8S_NAMESPACE_PROFILE_PREFIX, namespace),
        None => profile.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_namespace_profiles_are_shortened() {
        let v1 = vec!["k8s_ns.profile1".to_string(), "profile2".to_string()];
        assert_eq!(
            convert_profiles(&v1),
            vec!["kns.profile1".to_string(), "profile2".to_string()]
        );
    }

    #[test]
    fn test_order_is_preserved() {
        let v1 = vec![
            "zeta".to_string(),
            "k8s_ns.beta".to_string(),
            "alpha".to_string(),
        ];
        assert_eq!(convert_profiles(&v1), vec!["zeta", "kns.beta", "alpha"]);
    }

    #[test]
    fn test_marker_only_at_start() {
        assert_eq!(convert_profile("team.k8s_ns.x"), "team.k8s_ns.x");
        assert_eq!(convert_profile("kns.already"), "kns.already");
    }
}
