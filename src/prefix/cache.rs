use std::sync::OnceLock;

use super::{PrefixInfo, detect_prefix_info};
use crate::style::ComputedStyle;

/// Holds the result of a single detection for reuse.
///
/// Browser identity does not change during a session, so the first detection is kept and
/// every later lookup returns it without touching the style declarations again. The cache
/// belongs to whatever component composes the detector.
#[derive(Debug, Default)]
pub struct PrefixCache {
    info: OnceLock<PrefixInfo>,
}

impl PrefixCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached result, detecting it from `style` on first use.
    pub fn get_or_detect(&self, style: &impl ComputedStyle) -> PrefixInfo {
        *self.info.get_or_init(|| {
            log::trace!("Prefix cache empty, running detection");
            detect_prefix_info(style)
        })
    }

    /// Returns the cached result, if detection already ran.
    pub fn get(&self) -> Option<PrefixInfo> {
        self.info.get().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::VendorPrefix;
    use crate::style::{Result, StyleSnapshot};
    use std::cell::Cell;

    struct CountingStyle {
        snapshot: StyleSnapshot,
        reads: Cell<usize>,
    }

    impl ComputedStyle for CountingStyle {
        fn property_names(&self) -> Result<Vec<String>> {
            self.reads.set(self.reads.get() + 1);
            self.snapshot.property_names()
        }

        fn field(&self, name: &str) -> Result<Option<String>> {
            self.reads.set(self.reads.get() + 1);
            self.snapshot.field(name)
        }
    }

    #[test]
    fn test_cache_starts_empty() {
        assert_eq!(PrefixCache::new().get(), None);
    }

    #[test]
    fn test_cache_detects_once() {
        let style = CountingStyle {
            snapshot: StyleSnapshot::new(["-webkit-transform"]),
            reads: Cell::new(0),
        };
        let cache = PrefixCache::new();

        let first = cache.get_or_detect(&style);
        let reads_after_first = style.reads.get();
        let second = cache.get_or_detect(&style);

        assert_eq!(first, PrefixInfo::new(Some(VendorPrefix::Webkit)));
        assert_eq!(first, second);
        assert_eq!(style.reads.get(), reads_after_first);
        assert_eq!(cache.get(), Some(first));
    }

    #[test]
    fn test_cache_keeps_first_result() {
        let cache = PrefixCache::new();
        cache.get_or_detect(&StyleSnapshot::new(["-moz-appearance"]));

        let info = cache.get_or_detect(&StyleSnapshot::new(["-ms-grid"]));
        assert_eq!(info.prefix, Some(VendorPrefix::Moz));
    }

    #[test]
    fn test_cache_stores_absent_result() {
        let cache = PrefixCache::new();
        assert_eq!(
            cache.get_or_detect(&StyleSnapshot::new(["color"])),
            PrefixInfo::default()
        );
        assert_eq!(cache.get(), Some(PrefixInfo::default()));
    }
}
