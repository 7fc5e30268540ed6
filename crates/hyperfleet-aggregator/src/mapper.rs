use std::collections::HashMap;

/// Translate an adapter name into its PascalCase condition type (§4.5).
///
/// Splits on `-`, capitalizes the first rune of each part, concatenates,
/// then appends the configured suffix override or `"Successful"`.
pub fn adapter_condition_type(adapter: &str, suffix_overrides: &HashMap<String, String>) -> String {
    let mut out = String::new();
    for part in adapter.split('-') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    let suffix = suffix_overrides
        .get(adapter)
        .map(String::as_str)
        .unwrap_or("Successful");
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_name_default_suffix() {
        let overrides = HashMap::new();
        assert_eq!(adapter_condition_type("validator", &overrides), "ValidatorSuccessful");
    }

    #[test]
    fn hyphenated_name_default_suffix() {
        let overrides = HashMap::new();
        assert_eq!(adapter_condition_type("gcp-provisioner", &overrides), "GcpProvisionerSuccessful");
    }

    #[test]
    fn override_suffix_applied() {
        let mut overrides = HashMap::new();
        overrides.insert("gcp-provisioner".to_string(), "Ready".to_string());
        assert_eq!(adapter_condition_type("gcp-provisioner", &overrides), "GcpProvisionerReady");
    }
}
