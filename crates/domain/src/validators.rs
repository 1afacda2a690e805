const MAX_NAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Checks the textual shape of a domain name before it is put on the wire.
///
/// Accepts an optional trailing root dot. Underscore-prefixed labels such as
/// `_dmarc` and `_25` are allowed since the lookups rely on them.
pub fn validate_domain_name(name: &str) -> Result<(), String> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    if trimmed.is_empty() {
        return Err("domain name cannot be empty".to_string());
    }
    if trimmed.len() > MAX_NAME_LEN {
        return Err(format!(
            "domain name cannot exceed {MAX_NAME_LEN} characters"
        ));
    }
    for label in trimmed.split('.') {
        if label.is_empty() {
            return Err(format!("'{name}' contains an empty label"));
        }
        if label.len() > MAX_LABEL_LEN {
            return Err(format!(
                "label '{label}' exceeds {MAX_LABEL_LEN} characters"
            ));
        }
        if label.chars().any(|c| c.is_whitespace()) {
            return Err(format!("label '{label}' contains whitespace"));
        }
    }
    Ok(())
}

/// Appends the root dot when missing.
pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}
