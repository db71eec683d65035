use super::checks::{find_dashed_vendor_token, has_legacy_presto_marker, join_property_names};
use super::{PrefixInfo, VendorPrefix};
use crate::error::ResultOkLogExt;
use crate::style::ComputedStyle;

/// Detects the vendor prefix of the environment behind `style`.
///
/// The checks run in order:
///
/// 1. The enumerable property identifiers are concatenated and searched for the first
///    `-moz-`, `-webkit-` or `-ms-` marker.
/// 2. Failing that, a Presto engine is recognized by its `OLink` field being the empty string.
///
/// Errors from `style` are logged as warnings and do **not** cause this function to fail;
/// a check that cannot be performed simply does not match.
///
/// # Arguments
///
/// * `style` - The computed style declarations of the document root.
///
/// # Returns
///
/// The detected [`VendorPrefix`], or `None` if no check matched.
///
/// # Example
///
/// ```
/// use vendor_prefix::prefix::{VendorPrefix, detect_vendor_prefix};
/// use vendor_prefix::style::StyleSnapshot;
///
/// let style = StyleSnapshot::new(["-webkit-transform", "-webkit-transition"]);
/// assert_eq!(detect_vendor_prefix(&style), Some(VendorPrefix::Webkit));
/// ```
pub fn detect_vendor_prefix(style: &impl ComputedStyle) -> Option<VendorPrefix> {
    if let Some(names) = style
        .property_names()
        .ok_or_warn("Reading computed style properties failed during prefix detection")
    {
        let blob = join_property_names(&names);
        log::trace!(
            "Searching {} bytes of {} property names for a vendor marker",
            blob.len(),
            names.len()
        );
        if let Some(prefix) = find_dashed_vendor_token(&blob) {
            log::debug!("Found dashed vendor marker: {prefix}");
            return Some(prefix);
        }
    }

    if has_legacy_presto_marker(style)
        .ok_or_warn("Legacy marker check failed during prefix detection")
        .unwrap_or(false)
    {
        log::debug!("No dashed vendor marker, but legacy Presto marker present");
        return Some(VendorPrefix::O);
    }

    log::debug!("No vendor prefix detected");
    None
}

/// Like [`detect_vendor_prefix`], wrapped in the [`PrefixInfo`] result record.
pub fn detect_prefix_info(style: &impl ComputedStyle) -> PrefixInfo {
    PrefixInfo::new(detect_vendor_prefix(style))
}
