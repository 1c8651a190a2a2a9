//! Architecture-layer classification.
//!
//! Headings and search queries are classified against six keyword families,
//! one per documented architecture layer. Checks run as an ordered list of
//! (keyword set, layer) pairs and the first match wins, so a text matching
//! several families always lands in the earliest one.

/// Marker class shared by every tagged heading, independent of category.
pub const GENERIC_LAYER_CLASS: &str = "architecture-layer";

/// Documented architecture layers, in match-priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Infrastructure,
    Functions,
    Domain,
    Ports,
    Adapters,
    Tests,
}

impl Layer {
    /// All layers in match-priority order. Classification walks this list
    /// and returns early on the first hit.
    pub const ORDERED: [Layer; 6] = [
        Layer::Infrastructure,
        Layer::Functions,
        Layer::Domain,
        Layer::Ports,
        Layer::Adapters,
        Layer::Tests,
    ];

    /// Full keywords matched against heading text (substring, lower-case).
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Layer::Infrastructure => &["infrastructure", "stack", "script"],
            Layer::Functions => &["function", "handler"],
            Layer::Domain => &["domain", "model", "service"],
            Layer::Ports => &["port", "interface"],
            Layer::Adapters => &["adapter", "integration"],
            Layer::Tests => &["test"],
        }
    }

    /// Short-form keyword matched against search queries.
    pub fn short_keyword(self) -> &'static str {
        match self {
            Layer::Infrastructure => "infra",
            Layer::Functions => "func",
            Layer::Domain => "domain",
            Layer::Ports => "port",
            Layer::Adapters => "adapter",
            Layer::Tests => "test",
        }
    }

    /// Class applied to a tagged heading alongside [`GENERIC_LAYER_CLASS`].
    pub fn class_name(self) -> &'static str {
        match self {
            Layer::Infrastructure => "infrastructure-layer",
            Layer::Functions => "functions-layer",
            Layer::Domain => "domain-layer",
            Layer::Ports => "ports-layer",
            Layer::Adapters => "adapters-layer",
            Layer::Tests => "tests-layer",
        }
    }

    /// Human-readable layer name, used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Layer::Infrastructure => "infrastructure",
            Layer::Functions => "functions",
            Layer::Domain => "domain",
            Layer::Ports => "ports",
            Layer::Adapters => "adapters",
            Layer::Tests => "tests",
        }
    }

    /// Classify heading text. First matching family wins.
    pub fn classify(text: &str) -> Option<Layer> {
        let text = text.to_lowercase();
        Self::ORDERED
            .into_iter()
            .find(|layer| layer.keywords().iter().any(|kw| text.contains(kw)))
    }

    /// Classify a search query against short-form keywords, same priority
    /// order as [`Layer::classify`].
    pub fn classify_intent(query: &str) -> Option<Layer> {
        let query = query.to_lowercase();
        Self::ORDERED
            .into_iter()
            .find(|layer| query.contains(layer.short_keyword()))
    }
}
