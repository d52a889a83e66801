//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `FrontierItem`: a URL waiting to be fetched, with its link depth
//! - `VisitedSet`: every URL ever scheduled (or aliased) during one run
//! - `PageRecord`: one sitemap entry, with its scored metadata

mod frontier;
mod page_record;

// Re-export main types
pub use frontier::{FrontierItem, VisitedSet};
pub use page_record::{priority_for_depth, ChangeFreq, PageRecord};
