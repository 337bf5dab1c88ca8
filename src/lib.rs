//! # Lede Scraper
//!
//! Fetches a news listing page, follows one article link, and returns the
//! article's body text with bracketed and parenthetical annotations
//! (photo credits, editorial notes) stripped out.
//!
//! ## Pipeline
//!
//! Every call runs the same strictly sequential, two-hop pass:
//!
//! 1. **Listing fetch**: GET the listing URL; any non-2xx status fails the
//!    call before parsing
//! 2. **Selection**: apply a [`SelectionRule`] to pick one item and pull
//!    the detail link out of it, resolving relative hrefs against the page
//!    that was actually served
//! 3. **Detail fetch**: GET the article, same status contract
//! 4. **Extraction**: apply an [`ExtractionRule`] to locate the content
//!    container and join the trimmed text of its text-bearing elements
//! 5. **Normalization**: strip every `(...)` and `[...]` span in one pass
//!
//! ## Usage
//!
//! ```no_run
//! use lede_scraper::{extract, ExtractionRule, SelectionRule};
//!
//! # async fn run() -> Result<(), lede_scraper::ScrapeError> {
//! let selection = SelectionRule {
//!     link: "a.entry-image-link".to_string(),
//!     ..SelectionRule::default()
//! };
//! let extraction = ExtractionRule {
//!     container: "div.entry-content".to_string(),
//!     ..ExtractionRule::default()
//! };
//!
//! let article = extract("https://example.com/category/world/", &selection, &extraction).await?;
//! println!("{}", article.text);
//! # Ok(())
//! # }
//! ```
//!
//! Reusing a [`LedeScraper`] across calls shares one HTTP client; both
//! hops run with bounded connect and request timeouts (see
//! [`FetchSettings`]).
//!
//! Failures are typed by pipeline stage: [`ScrapeError::Fetch`],
//! [`ScrapeError::Selection`], and [`ScrapeError::Extraction`]. A call
//! either returns one [`ArticleContent`] or one error, never both.

mod error;
mod extractor;
mod fetch;
mod models;
mod normalize;
mod rules;

pub use error::{FetchFailure, ScrapeError};
pub use extractor::{LedeScraper, extract};
pub use fetch::FetchSettings;
pub use models::ArticleContent;
pub use normalize::strip_annotations;
pub use rules::{ExtractionRule, SelectionRule};
