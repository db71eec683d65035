//! Access to the computed style declarations of the document root.
//!
//! The detector never reaches for a global environment. Callers hand it something that
//! implements [`ComputedStyle`]: a binding to a live document, or a captured
//! [`StyleSnapshot`].
mod error;
mod snapshot;

pub use error::{Error, Result};
pub use snapshot::StyleSnapshot;

/// Read-only view of the computed style declarations of one element.
pub trait ComputedStyle {
    /// Returns the enumerable property identifiers, in the order the environment reports them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unavailable`] if the environment does not expose a declaration list.
    fn property_names(&self) -> Result<Vec<String>>;

    /// Returns a named property of the style object.
    ///
    /// `Ok(None)` means the property is undefined, which is distinct from `Ok(Some(""))`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unavailable`] if the style object cannot be queried.
    fn field(&self, name: &str) -> Result<Option<String>>;
}
