//! Architecture-layer tags on headings.
//!
//! Eligible headings are classified by their visible text against the
//! ordered keyword families in [`Layer`]; a match adds the family's class
//! plus the shared [`GENERIC_LAYER_CLASS`] marker. Unmatched headings are
//! left untouched - there is no fallback tag. Classification is derived
//! from the text on every run, never cached, and re-running the pass adds
//! no duplicate classes.

use crate::core::{GENERIC_LAYER_CLASS, Layer};
use crate::page::Page;

/// Tag eligible headings; returns how many were tagged.
pub fn install(page: &mut Page) -> usize {
    let levels = page.config().layers.heading_levels.clone();
    let headings = page
        .doc()
        .find_all(|el| levels.iter().any(|level| el.tag == *level));

    let mut tagged = 0;
    for heading in headings {
        let text = page.doc().text_content(heading);
        if let Some(layer) = Layer::classify(&text) {
            page.doc_mut().add_class(heading, GENERIC_LAYER_CLASS);
            page.doc_mut().add_class(heading, layer.class_name());
            tagged += 1;
        }
    }
    tagged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnhanceConfig;
    use crate::dom::parse;

    fn page_with(html: &str) -> Page {
        Page::new(parse(html).unwrap(), EnhanceConfig::default())
    }

    fn classes_of(page: &Page, tag: &str, index: usize) -> String {
        let id = page.doc().find_all(|el| el.tag == tag)[index];
        page.doc()
            .element(id)
            .and_then(|el| el.attr("class"))
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_tags_matching_headings() {
        let mut page = page_with(
            "<h2>Infrastructure Stack</h2><h3>Lambda Handlers</h3><h2>Getting Started</h2>",
        );
        assert_eq!(install(&mut page), 2);

        assert_eq!(
            classes_of(&page, "h2", 0),
            "architecture-layer infrastructure-layer"
        );
        assert_eq!(
            classes_of(&page, "h3", 0),
            "architecture-layer functions-layer"
        );
        // No keyword match: untouched, no generic marker either
        assert_eq!(classes_of(&page, "h2", 1), "");
    }

    #[test]
    fn test_first_match_priority() {
        let mut page = page_with("<h2>Domain Adapter Service</h2>");
        install(&mut page);
        let classes = classes_of(&page, "h2", 0);
        assert!(classes.contains("domain-layer"));
        assert!(!classes.contains("adapters-layer"));
    }

    #[test]
    fn test_only_eligible_levels() {
        let mut page = page_with("<h1>Domain</h1><h4>Domain</h4><h2>Domain</h2>");
        assert_eq!(install(&mut page), 1);
        assert_eq!(classes_of(&page, "h1", 0), "");
        assert_eq!(classes_of(&page, "h4", 0), "");
    }

    #[test]
    fn test_nested_markup_text_considered() {
        let mut page = page_with("<h2><em>Storage</em> Adapter</h2>");
        assert_eq!(install(&mut page), 1);
        assert!(classes_of(&page, "h2", 0).contains("adapters-layer"));
    }

    #[test]
    fn test_rerun_adds_no_duplicates() {
        let mut page = page_with("<h2>Domain Model</h2>");
        install(&mut page);
        install(&mut page);
        assert_eq!(
            classes_of(&page, "h2", 0),
            "architecture-layer domain-layer"
        );
    }

    #[test]
    fn test_existing_classes_preserved() {
        let mut page = page_with(r#"<h2 class="toc-entry">Port Interfaces</h2>"#);
        install(&mut page);
        assert_eq!(
            classes_of(&page, "h2", 0),
            "toc-entry architecture-layer ports-layer"
        );
    }
}
