//! Vendor Prefix: detects the CSS vendor prefix (`moz`, `webkit`, `ms` or `o`) of a browser
//! from the computed style declarations of its document root.
//!
//! The declarations are supplied through the [`style::ComputedStyle`] capability, either bound
//! to a live document by the caller or loaded from a captured [`style::StyleSnapshot`].
use std::ffi::OsString;
use std::path::PathBuf;

pub mod error;
pub mod prefix;
pub mod style;

/// Environment variable naming the snapshot file used when no path argument is given.
pub const SNAPSHOT_ENV_VAR: &str = "VENDOR_PREFIX_SNAPSHOT";

/// Where [`run`] reads the style snapshot from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotSource {
    /// A JSON snapshot file.
    Path(PathBuf),
    /// JSON piped into the process.
    Stdin,
}

impl SnapshotSource {
    /// Picks the snapshot source from an optional path argument, then [`SNAPSHOT_ENV_VAR`],
    /// falling back to stdin.
    pub fn resolve(arg: Option<PathBuf>) -> Self {
        Self::resolve_from(arg, std::env::var_os(SNAPSHOT_ENV_VAR))
    }

    /// Like [`SnapshotSource::resolve`], with the environment variable's value passed in.
    pub fn resolve_from(arg: Option<PathBuf>, env: Option<OsString>) -> Self {
        arg.or_else(|| env.map(PathBuf::from))
            .map(SnapshotSource::Path)
            .unwrap_or(SnapshotSource::Stdin)
    }

    /// Loads the snapshot from this source.
    ///
    /// # Errors
    ///
    /// Returns a [`style::Error`] if the snapshot cannot be read or parsed.
    pub fn load(&self) -> style::Result<style::StyleSnapshot> {
        match self {
            SnapshotSource::Path(path) => style::StyleSnapshot::from_path(path),
            SnapshotSource::Stdin => {
                style::StyleSnapshot::from_reader(std::io::stdin().lock(), "<stdin>")
            }
        }
    }
}

/// Runs vendor prefix detection against the snapshot at `source`.
///
/// # Returns
///
/// The [`prefix::PrefixInfo`] record for the snapshot. Detection itself never fails.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be loaded.
pub fn run(source: &SnapshotSource) -> Result<prefix::PrefixInfo, Box<dyn std::error::Error>> {
    log::debug!("Snapshot source: {:?}", source);
    let snapshot = source.load()?;
    let info = prefix::detect_prefix_info(&snapshot);
    log::info!(
        "Detected vendor prefix: {}",
        info.prefix.map_or("<none>", |p| p.as_str())
    );

    Ok(info)
}
