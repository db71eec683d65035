use std::sync::LazyLock;

use regex::Regex;

use super::VendorPrefix;
use crate::style::{self, ComputedStyle};

/// Name of the style object field only Presto exposes.
pub const LEGACY_PRESTO_FIELD: &str = "OLink";

static DASHED_VENDOR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(moz|webkit|ms)-").expect("valid regex"));

/// Concatenates property identifiers without a separator, in the order given.
pub fn join_property_names<I, S>(names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names.into_iter().fold(String::new(), |mut blob, name| {
        blob.push_str(name.as_ref());
        blob
    })
}

/// Returns the vendor of the first `-moz-`, `-webkit-` or `-ms-` marker in `blob`.
///
/// # Returns
///
/// * `Some(prefix)` for the leftmost marker.
/// * `None` if no marker occurs.
pub fn find_dashed_vendor_token(blob: &str) -> Option<VendorPrefix> {
    let captures = DASHED_VENDOR_TOKEN.captures(blob)?;
    captures[1].parse().ok()
}

/// Returns true if the style object carries the Presto marker field set to the empty string.
///
/// An undefined field, or one holding any other value, does not count.
///
/// # Errors
///
/// Returns the capability's error if the field cannot be read.
pub fn has_legacy_presto_marker(style: &impl ComputedStyle) -> style::Result<bool> {
    Ok(style
        .field(LEGACY_PRESTO_FIELD)?
        .is_some_and(|value| value.is_empty()))
}
