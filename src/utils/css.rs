//! Inline `style` attribute utilities.
//!
//! The enhancement passes read and write individual declarations inside an
//! element's `style` attribute (`position`, `opacity`, ...). Declarations
//! are kept in source order; property names compare case-insensitively.

/// Get the value of a declaration in an inline style string.
pub fn get_prop(style: &str, prop: &str) -> Option<String> {
    declarations(style)
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(prop))
        .map(|(_, value)| value)
}

/// Set (replace or append) a declaration in an inline style string.
pub fn set_prop(style: &str, prop: &str, value: &str) -> String {
    let mut decls = declarations(style);
    match decls
        .iter_mut()
        .find(|(name, _)| name.eq_ignore_ascii_case(prop))
    {
        Some((_, existing)) => *existing = value.to_string(),
        None => decls.push((prop.to_string(), value.to_string())),
    }
    compose(&decls)
}

/// Serialize declarations back into a `style` attribute value.
fn compose(decls: &[(String, String)]) -> String {
    let parts: Vec<String> = decls
        .iter()
        .map(|(name, value)| format!("{name}: {value}"))
        .collect();
    parts.join("; ")
}

/// Parse an inline style string into (property, value) pairs.
///
/// Malformed declarations (no colon) are dropped rather than surfaced;
/// the attribute is author input, not ours.
fn declarations(style: &str) -> Vec<(String, String)> {
    style
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim();
            let value = value.trim();
            if name.is_empty() || value.is_empty() {
                return None;
            }
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}
