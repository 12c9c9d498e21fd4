//! `%NAME%` placeholder expansion.
//!
//! Follows the Windows `ExpandEnvironmentStrings` rules: defined variables are
//! substituted, anything else is copied verbatim, values are not re-expanded.

use examguard_core::{EnvProvider, ProbeError};

/// Expand every `%NAME%` placeholder in `raw` against `env`.
///
/// An undefined name keeps its leading `%` and the scan resumes at the closing
/// `%`, which may open the next placeholder (`%UNDEFINED%%PATH%` still expands
/// `PATH`). Fails only when a variable's value is not valid Unicode.
pub fn expand_placeholders(raw: &str, env: &dyn EnvProvider) -> Result<String, ProbeError> {
    let mut expanded = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(start) = rest.find('%') {
        expanded.push_str(&rest[..start]);
        let after = &rest[start + 1..];

        let Some(end) = after.find('%') else {
            expanded.push_str(&rest[start..]);
            return Ok(expanded);
        };

        let name = &after[..end];
        let value = if name.is_empty() { None } else { env.get(name) };

        match value {
            Some(value) => {
                let value = value.into_string().map_err(|_| ProbeError::InvalidPath {
                    path: raw.to_string(),
                    reason: format!("environment variable {name} is not valid Unicode"),
                })?;
                expanded.push_str(&value);
                rest = &after[end + 1..];
            }
            None => {
                expanded.push('%');
                expanded.push_str(name);
                rest = &after[end..];
            }
        }
    }

    expanded.push_str(rest);
    Ok(expanded)
}
