//! Node data for the synthetic document tree.

use crate::utils::css;

/// Handle to a node in a [`super::Document`] arena.
///
/// Ids are only meaningful for the document that allocated them and stay
/// valid for the document's lifetime (the arena never frees slots).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// A node's payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Element(ElementData),
    Text(String),
    Comment(String),
}

/// An element: tag plus attributes in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    pub tag: String,
    attrs: Vec<(String, String)>,
}

impl ElementData {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
        }
    }

    /// Get an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Attributes in source order.
    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    // -------------------------------------------------------------------------
    // Class list
    // -------------------------------------------------------------------------

    /// Check class membership (whitespace-separated `class` attribute).
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_whitespace().any(|existing| existing == class))
    }

    /// Add a class; already-present classes are not duplicated.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let next = match self.attr("class") {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class.to_string(),
        };
        self.set_attr("class", next);
    }

    // -------------------------------------------------------------------------
    // Inline style
    // -------------------------------------------------------------------------

    /// Get a declaration from the inline `style` attribute.
    pub fn style(&self, prop: &str) -> Option<String> {
        css::get_prop(self.attr("style").unwrap_or_default(), prop)
    }

    /// Set a declaration in the inline `style` attribute.
    pub fn set_style(&mut self, prop: &str, value: &str) {
        let next = css::set_prop(self.attr("style").unwrap_or_default(), prop, value);
        self.set_attr("style", next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_set_and_replace() {
        let mut el = ElementData::new("a");
        assert_eq!(el.attr("href"), None);

        el.set_attr("href", "#intro");
        assert_eq!(el.attr("href"), Some("#intro"));

        el.set_attr("href", "#usage");
        assert_eq!(el.attr("href"), Some("#usage"));
        assert_eq!(el.attrs().len(), 1);
    }

    #[test]
    fn test_class_list() {
        let mut el = ElementData::new("h2");
        assert!(!el.has_class("architecture-layer"));

        el.add_class("architecture-layer");
        el.add_class("domain-layer");
        assert!(el.has_class("architecture-layer"));
        assert!(el.has_class("domain-layer"));
        assert_eq!(el.attr("class"), Some("architecture-layer domain-layer"));

        // add_class is idempotent
        el.add_class("domain-layer");
        assert_eq!(el.attr("class"), Some("architecture-layer domain-layer"));
    }

    #[test]
    fn test_class_membership_is_exact() {
        let mut el = ElementData::new("h2");
        el.set_attr("class", "domain-layered");
        assert!(!el.has_class("domain-layer"));
    }

    #[test]
    fn test_inline_style() {
        let mut el = ElementData::new("button");
        assert_eq!(el.style("opacity"), None);

        el.set_style("opacity", "0.7");
        el.set_style("cursor", "pointer");
        assert_eq!(el.style("opacity"), Some("0.7".to_string()));

        el.set_style("opacity", "1");
        assert_eq!(el.style("opacity"), Some("1".to_string()));
        assert_eq!(el.style("cursor"), Some("pointer".to_string()));
    }
}
