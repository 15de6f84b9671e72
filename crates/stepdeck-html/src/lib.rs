//! Stepdeck HTML Loader
//!
//! Parses presentation pages with html5ever and converts them into the
//! arena DOM from `stepdeck-dom`.

mod parser;

use std::path::PathBuf;

pub use parser::HtmlParser;
pub use stepdeck_dom::Document;

/// Errors raised while loading a page
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
