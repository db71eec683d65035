//! Vendor prefix detection module.
//!
//! Determines which CSS vendor prefix the browser behind a set of computed style
//! declarations uses.
mod cache;
mod checks;
mod detect;
mod error;
mod vendor;

pub use cache::PrefixCache;
pub use checks::LEGACY_PRESTO_FIELD;
pub use detect::{detect_prefix_info, detect_vendor_prefix};
pub use error::{Error, Result};
pub use vendor::{PrefixInfo, VendorPrefix};
