use std::fmt;
use std::str::FromStr;

use super::{Error, Result};

/// A browser engine's CSS vendor prefix.
///
/// # Examples
///
/// ```
/// # use vendor_prefix::prefix::VendorPrefix;
/// let prefix: VendorPrefix = "webkit".parse().unwrap();
/// assert_eq!(prefix, VendorPrefix::Webkit);
/// assert_eq!(prefix.to_string(), "webkit");
/// ```
///
/// Deserialization goes through [`FromStr`], so it accepts any case as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum VendorPrefix {
    /// Gecko.
    Moz,
    /// WebKit and Blink.
    Webkit,
    /// Trident and legacy EdgeHTML.
    Ms,
    /// Presto.
    O,
}

impl VendorPrefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorPrefix::Moz => "moz",
            VendorPrefix::Webkit => "webkit",
            VendorPrefix::Ms => "ms",
            VendorPrefix::O => "o",
        }
    }
}

impl FromStr for VendorPrefix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "moz" => Ok(VendorPrefix::Moz),
            "webkit" => Ok(VendorPrefix::Webkit),
            "ms" => Ok(VendorPrefix::Ms),
            "o" => Ok(VendorPrefix::O),
            _ => Err(Error::UnknownVendorPrefix(s.to_owned())),
        }
    }
}

impl TryFrom<String> for VendorPrefix {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for VendorPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The detection result handed to callers, serialized as `{"prefix": "webkit"}`.
///
/// `prefix` is `None` when no vendor prefix was recognized. Callers that need a prefixed
/// property name should fall back to the unprefixed one in that case, which is what
/// [`PrefixInfo::dom_property`] and [`PrefixInfo::css_property`] do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PrefixInfo {
    pub prefix: Option<VendorPrefix>,
}

impl PrefixInfo {
    pub fn new(prefix: Option<VendorPrefix>) -> Self {
        Self { prefix }
    }

    /// Builds the prefixed property name as used on a DOM style object.
    ///
    /// ```
    /// # use vendor_prefix::prefix::{PrefixInfo, VendorPrefix};
    /// let info = PrefixInfo::new(Some(VendorPrefix::Webkit));
    /// assert_eq!(info.dom_property("transform"), "webkitTransform");
    /// assert_eq!(PrefixInfo::default().dom_property("transform"), "transform");
    /// ```
    pub fn dom_property(&self, base: &str) -> String {
        let Some(prefix) = self.prefix else {
            return base.to_owned();
        };

        let mut out = String::with_capacity(prefix.as_str().len() + base.len());
        out.push_str(prefix.as_str());
        let mut chars = base.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
        out
    }

    /// Builds the prefixed property name as written in a stylesheet.
    ///
    /// ```
    /// # use vendor_prefix::prefix::{PrefixInfo, VendorPrefix};
    /// let info = PrefixInfo::new(Some(VendorPrefix::Moz));
    /// assert_eq!(info.css_property("transform"), "-moz-transform");
    /// ```
    pub fn css_property(&self, base: &str) -> String {
        match self.prefix {
            Some(prefix) => format!("-{prefix}-{base}"),
            None => base.to_owned(),
        }
    }
}

impl From<Option<VendorPrefix>> for PrefixInfo {
    fn from(prefix: Option<VendorPrefix>) -> Self {
        Self::new(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("MOZ".parse::<VendorPrefix>().unwrap(), VendorPrefix::Moz);
        assert_eq!("Ms".parse::<VendorPrefix>().unwrap(), VendorPrefix::Ms);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "khtml".parse::<VendorPrefix>().unwrap_err();
        assert!(matches!(err, Error::UnknownVendorPrefix(ref s) if s == "khtml"));
    }

    #[test]
    fn test_dom_property() {
        let info = PrefixInfo::new(Some(VendorPrefix::Ms));
        assert_eq!(info.dom_property("transitionDuration"), "msTransitionDuration");
        assert_eq!(info.dom_property(""), "ms");

        let info = PrefixInfo::new(Some(VendorPrefix::O));
        assert_eq!(info.dom_property("transform"), "oTransform");
    }

    #[test]
    fn test_css_property_without_prefix() {
        assert_eq!(PrefixInfo::default().css_property("transform"), "transform");
    }

    #[test]
    fn test_serialize_result_record() {
        let info = PrefixInfo::new(Some(VendorPrefix::Webkit));
        assert_eq!(
            serde_json::to_string(&info).unwrap(),
            r#"{"prefix":"webkit"}"#
        );
        assert_eq!(
            serde_json::to_string(&PrefixInfo::default()).unwrap(),
            r#"{"prefix":null}"#
        );
    }

    #[test]
    fn test_deserialize_is_case_insensitive() {
        let prefix: VendorPrefix = serde_json::from_str(r#""WEBKIT""#).unwrap();
        assert_eq!(prefix, VendorPrefix::Webkit);

        let info: PrefixInfo = serde_json::from_str(r#"{"prefix":"Moz"}"#).unwrap();
        assert_eq!(info.prefix, Some(VendorPrefix::Moz));
    }

    #[test]
    fn test_deserialize_unknown_prefix() {
        assert!(serde_json::from_str::<VendorPrefix>(r#""khtml""#).is_err());
    }

    #[test]
    fn test_deserialize_result_record() {
        let info: PrefixInfo = serde_json::from_str(r#"{"prefix":"o"}"#).unwrap();
        assert_eq!(info.prefix, Some(VendorPrefix::O));
    }
}
