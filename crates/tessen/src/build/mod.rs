//! vCard serialization (RFC 6350).
//!
//! This module provides the serializers for vCard content:
//! - Escape: value and parameter escaping
//! - Fold: content line folding at 75 characters
//! - Serializer: full card emission with VERSION-first ordering

mod escape;
mod fold;
mod serializer;

pub use escape::{escape_param_value, escape_text};
pub use fold::fold_line;
pub use serializer::{serialize, serialize_card};
