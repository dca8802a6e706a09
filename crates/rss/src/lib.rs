//! RSS 2.0 / Atom feed retrieval.
//!
//! Only the fields the briefing pipeline reads are extracted: title, summary
//! (description) and link.

mod client;
mod error;
pub mod models;
mod parser;

pub use client::{FeedFetcher, RssClient};
pub use error::RssError;
pub use models::FeedEntry;
pub use parser::parse_feed;

pub type Result<T> = std::result::Result<T, RssError>;
