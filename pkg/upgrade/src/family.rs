//! Splitting and recombining address lists by IP family.

use pkg_types::net::{IpVersion, Versioned};

/// Splits `items` into `(ipv4, ipv6)`, keeping relative order within each family.
pub fn partition<T: Versioned + Clone>(items: &[T]) -> (Vec<T>, Vec<T>) {
    items
        .iter()
        .cloned()
        .partition(|item| item.ip_version() == IpVersion::V4)
}

/// Joins per-family lists back into one, IPv4 entries first.
pub fn merge<T: Clone>(ipv4: &[T], ipv6: &[T]) -> Vec<T> {
    ipv4.iter().chain(ipv6).cloned().collect()
}
