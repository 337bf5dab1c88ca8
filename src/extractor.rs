//! The two-hop extraction pipeline.
//!
//! A scrape is one strictly sequential pass: fetch the listing page, pick
//! an article link with the [`SelectionRule`], fetch that article, pull its
//! body text with the [`ExtractionRule`], and strip annotations. The second
//! fetch depends on data from the first, so there is nothing to run
//! concurrently.
//!
//! The HTML-facing steps are pure functions over an already-fetched body,
//! which keeps them testable without a server.

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{FetchFailure, ScrapeError};
use crate::fetch::{FetchSettings, build_client, fetch_page};
use crate::models::ArticleContent;
use crate::normalize::strip_annotations;
use crate::rules::{ExtractionRule, SelectionRule};

/// A reusable two-hop scraper holding the HTTP client.
///
/// Construction builds a [`reqwest::Client`] once; every call to
/// [`extract`](LedeScraper::extract) reuses it, so connection pools and
/// TLS state are shared across scrapes.
pub struct LedeScraper {
    client: reqwest::Client,
    settings: FetchSettings,
}

impl LedeScraper {
    /// Create a scraper with default [`FetchSettings`].
    pub fn new() -> Result<Self, ScrapeError> {
        Self::with_settings(FetchSettings::default())
    }

    /// Create a scraper with explicit transport settings.
    pub fn with_settings(settings: FetchSettings) -> Result<Self, ScrapeError> {
        let client = build_client(&settings)?;
        Ok(Self { client, settings })
    }

    /// The transport settings this scraper was built with.
    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    /// Fetch `listing_url`, follow the article link chosen by `selection`,
    /// and return that article's normalized body text.
    ///
    /// The two fetches happen in order; a failure on the listing hop means
    /// the detail hop is never attempted.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::Fetch`] when either hop fails (malformed URL,
    ///   non-2xx status, timeout, transport failure)
    /// - [`ScrapeError::Selection`] when the listing page does not match
    ///   `selection`
    /// - [`ScrapeError::Extraction`] when the detail page does not match
    ///   `extraction`
    ///
    /// An article whose container holds no text-bearing elements is not an
    /// error; it yields [`ArticleContent`] with empty text.
    #[instrument(level = "info", skip_all, fields(%listing_url))]
    pub async fn extract(
        &self,
        listing_url: &str,
        selection: &SelectionRule,
        extraction: &ExtractionRule,
    ) -> Result<ArticleContent, ScrapeError> {
        let listing_url = Url::parse(listing_url)
            .map_err(|e| ScrapeError::fetch(listing_url, FetchFailure::InvalidUrl(e.to_string())))?;

        let listing = fetch_page(&self.client, &listing_url).await?;
        let article_url = select_detail_link(&listing.body, &listing.final_url, selection)?;
        debug!(listing_status = listing.status, %article_url, "Selected article link");

        let detail = fetch_page(&self.client, &article_url).await?;
        let raw = collect_body_text(&detail.body, &detail.final_url, extraction)?;
        let text = strip_annotations(&raw);

        info!(
            source = %detail.final_url,
            bytes = text.len(),
            "Extracted article text"
        );

        Ok(ArticleContent {
            source: detail.final_url.to_string(),
            text,
        })
    }
}

/// One-shot convenience: build a scraper with default settings and run a
/// single extraction.
pub async fn extract(
    listing_url: &str,
    selection: &SelectionRule,
    extraction: &ExtractionRule,
) -> Result<ArticleContent, ScrapeError> {
    LedeScraper::new()?
        .extract(listing_url, selection, extraction)
        .await
}

/// Apply a selection rule to a listing page and resolve the chosen link.
///
/// Relative hrefs resolve against `base`, the URL the listing was actually
/// served from.
fn select_detail_link(html: &str, base: &Url, rule: &SelectionRule) -> Result<Url, ScrapeError> {
    let document = Html::parse_document(html);

    let item_selector = Selector::parse(&rule.item).map_err(|e| {
        ScrapeError::selection(
            base.as_str(),
            format!("invalid item selector `{}`: {e}", rule.item),
        )
    })?;
    let items: Vec<ElementRef> = document.select(&item_selector).collect();
    if items.is_empty() {
        return Err(ScrapeError::selection(
            base.as_str(),
            format!("no listing items matched `{}`", rule.item),
        ));
    }
    let item = items.get(rule.index).ok_or_else(|| {
        ScrapeError::selection(
            base.as_str(),
            format!(
                "listing has {} items matching `{}`, index {} requested",
                items.len(),
                rule.item,
                rule.index
            ),
        )
    })?;

    let link_selector = Selector::parse(&rule.link).map_err(|e| {
        ScrapeError::selection(
            base.as_str(),
            format!("invalid link selector `{}`: {e}", rule.link),
        )
    })?;
    let anchor = item.select(&link_selector).next().ok_or_else(|| {
        ScrapeError::selection(
            base.as_str(),
            format!("no link matched `{}` inside the selected item", rule.link),
        )
    })?;
    let href = anchor.value().attr(&rule.link_attr).ok_or_else(|| {
        ScrapeError::selection(
            base.as_str(),
            format!("link element has no `{}` attribute", rule.link_attr),
        )
    })?;

    base.join(href).map_err(|e| {
        ScrapeError::selection(base.as_str(), format!("cannot resolve link `{href}`: {e}"))
    })
}

/// Apply an extraction rule to a detail page.
///
/// Text-bearing elements are visited in document order; each element's
/// trimmed text is appended followed by a single space. Elements whose
/// trimmed text is empty are skipped. Zero text-bearing elements is a
/// valid, empty result; a missing container is not.
fn collect_body_text(html: &str, url: &Url, rule: &ExtractionRule) -> Result<String, ScrapeError> {
    let document = Html::parse_document(html);

    let container_selector = Selector::parse(&rule.container).map_err(|e| {
        ScrapeError::extraction(
            url.as_str(),
            format!("invalid container selector `{}`: {e}", rule.container),
        )
    })?;
    let container = document.select(&container_selector).next().ok_or_else(|| {
        ScrapeError::extraction(
            url.as_str(),
            format!("no content container matched `{}`", rule.container),
        )
    })?;

    let text_selector = Selector::parse(&rule.text_elements).map_err(|e| {
        ScrapeError::extraction(
            url.as_str(),
            format!("invalid text selector `{}`: {e}", rule.text_elements),
        )
    })?;

    let mut text = String::new();
    for element in container.select(&text_selector) {
        let piece = element.text().collect::<String>();
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        text.push_str(piece);
        text.push(' ');
    }

    Ok(text)
}
