use anyhow::{Result, bail};

/// Maximum length of a v3 resource name (DNS-1123 subdomain).
const MAX_NAME_LEN: usize = 253;

/// Validate a v3 resource name.
/// Rules: lowercase `[a-z0-9.-]`, max 253 chars, alphanumeric at both ends.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        bail!("name must not be empty");
    }
    if name.len() > MAX_NAME_LEN {
        bail!(
            "name '{}' exceeds {} characters (got {})",
            name,
            MAX_NAME_LEN,
            name.len()
        );
    }
    let edge_ok = |c: Option<char>| c.is_some_and(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if !edge_ok(name.chars().next()) || !edge_ok(name.chars().last()) {
        bail!(
            "name '{}' must start and end with a lowercase letter or digit",
            name
        );
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '.')
    {
        bail!(
            "name '{}' must contain only lowercase letters, digits, hyphens and dots [a-z0-9.-]",
            name
        );
    }
    Ok(())
}
