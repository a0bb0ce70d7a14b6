//! Filesystem path constants.

/// Default config file path for the upgrade driver.
pub const DEFAULT_UPGRADE_CONFIG: &str = "/etc/calico/upgrade.yaml";
