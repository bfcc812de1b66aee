//! Scan pipeline services.

pub mod discovery;
pub mod extractor;
pub mod fetcher;
pub mod scanner;
pub mod summarizer;
