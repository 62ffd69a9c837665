//! Percent-encoding of values before they are substituted.

use crate::{Value, Values};

/// Percent-encode every string and every list element in the values.
///
/// Characters in the RFC 3986 unreserved set (`A-Z a-z 0-9 - . _ ~`) are
/// passed through, everything else is percent-encoded as UTF-8 bytes.
pub fn values(values: &Values) -> Values {
    values
        .iter()
        .map(|(name, value)| (name.as_str(), value.map(encode)))
        .collect()
}

fn encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}
