//! Expand a compiled template.
//!
//! The values are percent-encoded once up front, then every expansion is
//! evaluated against the encoded values and stitched together with the raw
//! template text.

mod encode;
mod eval;

use crate::types::ast::{Item, Template};
use crate::Values;

/// Expand the template to a string.
pub fn template(template: &Template<'_>, values: &Values) -> String {
    let values = encode::values(values);
    let mut s = String::with_capacity(template.source.len());
    for item in &template.items {
        match item {
            Item::Raw(span) => s.push_str(&template.source[*span]),
            Item::Expansion(exp) => s.push_str(&eval::expansion(exp, &values)),
        }
    }
    s
}
