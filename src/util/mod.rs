//! Shared helpers for text normalization and URL validation.
//!
//! - **Text processing**: HTML-to-plain-text stripping and character-bounded
//!   truncation for feed summaries
//! - **URL validation**: scheme allow-listing for every URL the pipeline
//!   fetches

mod text;
mod urls;

pub use text::{strip_html, truncate_chars};
pub use urls::{validate_feed_url, UrlError};
