use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{ComputedStyle, Error, Result};

/// A captured copy of an element's computed style declarations.
///
/// The JSON form is
///
/// ```json
/// { "properties": ["-webkit-transform", "color"], "fields": { "OLink": null } }
/// ```
///
/// A field that is missing or `null` is undefined.
///
/// # Example
///
/// ```
/// use vendor_prefix::style::{ComputedStyle, StyleSnapshot};
///
/// let snapshot = StyleSnapshot::new(["color", "background"]).with_field("OLink", "");
/// assert_eq!(snapshot.field("OLink").unwrap(), Some(String::new()));
/// assert_eq!(snapshot.field("MozLink").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct StyleSnapshot {
    #[serde(default)]
    properties: Vec<String>,
    #[serde(default)]
    fields: HashMap<String, Option<String>>,
}

impl StyleSnapshot {
    /// Creates a snapshot from the enumerable property identifiers, with no named fields.
    pub fn new<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: properties.into_iter().map(Into::into).collect(),
            fields: HashMap::new(),
        }
    }

    /// Sets a named field of the style object.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), Some(value.into()));
        self
    }

    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// - [`Error::FileOpen`] if the file can't be opened.
    /// - [`Error::Deserialize`] if the contents are not a valid snapshot.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_reader(BufReader::new(file), path)
    }

    /// Loads a snapshot from JSON read from `reader`.
    ///
    /// `origin` names the source in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialize`] if the contents are not a valid snapshot.
    pub fn from_reader<R: Read>(reader: R, origin: impl AsRef<Path>) -> Result<Self> {
        let snapshot: Self =
            serde_json::from_reader(reader).map_err(|source| Error::Deserialize {
                path: origin.as_ref().to_path_buf(),
                source,
            })?;
        log::debug!(
            "Loaded style snapshot from `{}` with {} properties",
            origin.as_ref().display(),
            snapshot.properties.len()
        );

        Ok(snapshot)
    }

    pub fn properties(&self) -> &[String] {
        &self.properties
    }
}

impl ComputedStyle for StyleSnapshot {
    fn property_names(&self) -> Result<Vec<String>> {
        Ok(self.properties.clone())
    }

    fn field(&self, name: &str) -> Result<Option<String>> {
        Ok(self.fields.get(name).cloned().flatten())
    }
}
