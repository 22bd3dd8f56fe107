//! Article parsing and keyword ranking.
//!
//! # Submodules
//!
//! - [`reader`]: Parses tagged article files into [`ArticleRecord`](crate::models::ArticleRecord)
//! - [`keywords`]: Ranks the most frequent qualifying words in article text

pub mod keywords;
pub mod reader;
