//! Output type of the scrape pipeline.

/// The text of one article, as extracted and normalized.
///
/// Ownership transfers to the caller; the pipeline keeps nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent {
    /// The detail page URL the text was extracted from, after redirects.
    pub source: String,
    /// The article body: trimmed element texts joined by single spaces,
    /// with bracketed and parenthetical annotations removed. May be empty
    /// when the content container held no text-bearing elements.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_content_creation() {
        let article = ArticleContent {
            source: "https://example.com/news/1".to_string(),
            text: "First paragraph. Second paragraph. ".to_string(),
        };
        assert_eq!(article.source, "https://example.com/news/1");
        assert!(article.text.ends_with(' '));
    }
}
