//! Value formatting utilities for console records.
//!
//! Provides the text renderings the output formatter relies on:
//! - timestamps (`%Y-%m-%d %H:%M:%S`, UTC)
//! - nested values as compact JSON
//! - the boxed online-model record

mod record;

pub use record::{format_datetime, format_online_model, to_compact_json, RECORD_BORDER};
