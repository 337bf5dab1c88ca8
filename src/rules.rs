//! Declarative rules for picking an article on a listing page and locating
//! its body text on the detail page.
//!
//! Rules are plain data: CSS selector strings plus a couple of scalars.
//! They are immutable once built, carry no site-specific defaults beyond
//! generic article markup, and deserialize with per-field defaults so
//! callers can keep them in configuration files:
//!
//! ```
//! use lede_scraper::SelectionRule;
//!
//! let rule: SelectionRule = serde_json::from_str(r#"{ "item": "article.story" }"#).unwrap();
//! assert_eq!(rule.link_attr, "href");
//! ```
//!
//! Selector strings are validated when a rule is applied; an invalid
//! selector surfaces as a selection or extraction error for the page it
//! was applied to.

use serde::{Deserialize, Serialize};

/// How to pick one article link out of a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRule {
    /// CSS selector matching the listing's item containers.
    #[serde(default = "default_item")]
    pub item: String,
    /// Zero-based index of the item to follow, in document order.
    #[serde(default)]
    pub index: usize,
    /// CSS selector for the link element inside the chosen item.
    #[serde(default = "default_link")]
    pub link: String,
    /// Attribute on the link element holding the detail URL.
    #[serde(default = "default_link_attr")]
    pub link_attr: String,
}

impl Default for SelectionRule {
    fn default() -> Self {
        Self {
            item: default_item(),
            index: 0,
            link: default_link(),
            link_attr: default_link_attr(),
        }
    }
}

/// How to locate the body text on a detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionRule {
    /// CSS selector for the single content container.
    #[serde(default = "default_container")]
    pub container: String,
    /// CSS selector for the text-bearing elements inside the container.
    #[serde(default = "default_text_elements")]
    pub text_elements: String,
}

impl Default for ExtractionRule {
    fn default() -> Self {
        Self {
            container: default_container(),
            text_elements: default_text_elements(),
        }
    }
}

fn default_item() -> String {
    "article".to_string()
}

fn default_link() -> String {
    "a".to_string()
}

fn default_link_attr() -> String {
    "href".to_string()
}

fn default_container() -> String {
    "article".to_string()
}

fn default_text_elements() -> String {
    "p".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_rule_defaults() {
        let rule = SelectionRule::default();
        assert_eq!(rule.item, "article");
        assert_eq!(rule.index, 0);
        assert_eq!(rule.link, "a");
        assert_eq!(rule.link_attr, "href");
    }

    #[test]
    fn test_selection_rule_from_empty_json() {
        let rule: SelectionRule = serde_json::from_str("{}").unwrap();
        assert_eq!(rule, SelectionRule::default());
    }

    #[test]
    fn test_selection_rule_partial_json() {
        let rule: SelectionRule = serde_json::from_str(
            r#"{ "item": "div.card", "link": "a.headline-link", "index": 2 }"#,
        )
        .unwrap();
        assert_eq!(rule.item, "div.card");
        assert_eq!(rule.link, "a.headline-link");
        assert_eq!(rule.index, 2);
        assert_eq!(rule.link_attr, "href");
    }

    #[test]
    fn test_extraction_rule_from_empty_json() {
        let rule: ExtractionRule = serde_json::from_str("{}").unwrap();
        assert_eq!(rule, ExtractionRule::default());
    }

    #[test]
    fn test_extraction_rule_round_trip() {
        let rule = ExtractionRule {
            container: "div.entry-content".to_string(),
            text_elements: "p, li".to_string(),
        };
        let json = serde_json::to_string(&rule).unwrap();
        let back: ExtractionRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }
}
