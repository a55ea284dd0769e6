//! Reusable reactive hooks.

mod use_media_query;

pub use use_media_query::{MediaQueryWatch, use_media_query};
