//! Host identity input: brand claims and the user-agent string.

use crate::detection::parse_client_hints;
use crate::IdentityError;
use serde::{Deserialize, Deserializer, Serialize};

/// One brand claim exposed by the host.
///
/// Chromium-based browsers usually expose several, for example
/// `"Not A(Brand"`, `"Chromium"` and `"Google Chrome"`. Only `brand` takes
/// part in detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandEntry {
    /// The brand name as reported by the host.
    pub brand: String,

    /// Significant version reported alongside the brand, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BrandEntry {
    /// A brand claim without a version.
    ///
    /// ```rust
    /// use browser_detect::BrandEntry;
    ///
    /// let entry = BrandEntry::new("Chromium");
    /// assert_eq!(entry.brand, "Chromium");
    /// assert!(entry.version.is_none());
    /// ```
    pub fn new(brand: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            version: None,
        }
    }
}

/// Structured identity record, shaped like `navigator.userAgentData`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserAgentData {
    /// Brand claims in the order the host lists them. `null` reads as empty.
    #[serde(deserialize_with = "null_as_empty")]
    pub brands: Vec<BrandEntry>,

    /// Whether the host reports a mobile device.
    pub mobile: bool,

    /// Platform name, e.g. `"Windows"` or `"macOS"`.
    pub platform: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<BrandEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// A source of browser identity data.
///
/// Implemented by [`HostIdentity`]; implement it for other host adapters.
pub trait IdentitySource {
    /// Brand claims, or `None` when the host has no structured identity.
    fn brands(&self) -> Option<&[BrandEntry]>;

    /// The free-form user-agent string.
    fn user_agent(&self) -> &str;
}

/// A snapshot of the host's identity capability, shaped like `navigator`.
///
/// # Example
///
/// ```rust
/// use browser_detect::{detect_identity, BrowserName, HostIdentity};
///
/// let host = HostIdentity::from_json(r#"{
///     "userAgent": "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36",
///     "userAgentData": {
///         "brands": [
///             {"brand": "Not A(Brand", "version": "99"},
///             {"brand": "Microsoft Edge", "version": "121"},
///             {"brand": "Chromium", "version": "121"}
///         ],
///         "mobile": false,
///         "platform": "Windows"
///     }
/// }"#).unwrap();
///
/// assert_eq!(detect_identity(&host), BrowserName::Edge);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostIdentity {
    /// The free-form user-agent string.
    #[serde(default)]
    pub user_agent: String,

    /// Structured identity, absent on hosts without client hints support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent_data: Option<UserAgentData>,
}

impl HostIdentity {
    /// A host that only exposes a user-agent string.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            user_agent_data: None,
        }
    }

    /// Attach structured brand claims, keeping any mobile/platform data
    /// already present.
    pub fn with_brands(mut self, brands: Vec<BrandEntry>) -> Self {
        self.user_agent_data.get_or_insert_with(Default::default).brands = brands;
        self
    }

    /// Parse a JSON snapshot of `navigator` (`userAgent` plus optional
    /// `userAgentData`). Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// `IdentityError::InvalidSnapshot` when the input is not valid JSON or
    /// a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, IdentityError> {
        let identity: Self = serde_json::from_str(json)?;
        tracing::trace!(
            has_brands = identity.user_agent_data.is_some(),
            "loaded identity snapshot"
        );
        Ok(identity)
    }

    /// Build a snapshot from HTTP request headers: `User-Agent` and, when the
    /// client sent it, `Sec-CH-UA`.
    ///
    /// # Errors
    ///
    /// `IdentityError::MalformedClientHints` when `Sec-CH-UA` is present but
    /// unparseable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use browser_detect::{detect_identity, BrowserName, HostIdentity};
    ///
    /// let host = HostIdentity::from_headers(
    ///     "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36",
    ///     Some(r#""Chromium";v="120", "Google Chrome";v="120""#),
    /// ).unwrap();
    /// assert_eq!(detect_identity(&host), BrowserName::Chrome);
    /// ```
    pub fn from_headers(
        user_agent: &str,
        sec_ch_ua: Option<&str>,
    ) -> Result<Self, IdentityError> {
        let identity = Self::new(user_agent);
        match sec_ch_ua {
            Some(header) => Ok(identity.with_brands(parse_client_hints(header)?)),
            None => Ok(identity),
        }
    }
}

impl IdentitySource for HostIdentity {
    fn brands(&self) -> Option<&[BrandEntry]> {
        self.user_agent_data.as_ref().map(|data| data.brands.as_slice())
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

impl<T: IdentitySource + ?Sized> IdentitySource for &T {
    fn brands(&self) -> Option<&[BrandEntry]> {
        (**self).brands()
    }

    fn user_agent(&self) -> &str {
        (**self).user_agent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_full_snapshot() {
        let host = HostIdentity::from_json(
            r#"{
                "userAgent": "Mozilla/5.0",
                "userAgentData": {
                    "brands": [{"brand": "Chromium", "version": "120"}],
                    "mobile": true,
                    "platform": "Android"
                },
                "language": "en-US"
            }"#,
        )
        .unwrap();

        assert_eq!(host.user_agent(), "Mozilla/5.0");
        let data = host.user_agent_data.as_ref().unwrap();
        assert!(data.mobile);
        assert_eq!(data.platform, "Android");
        assert_eq!(host.brands().unwrap()[0].brand, "Chromium");
        assert_eq!(host.brands().unwrap()[0].version.as_deref(), Some("120"));
    }

    #[test]
    fn test_from_json_without_user_agent_data() {
        let host =
            HostIdentity::from_json(r#"{"userAgent": "Mozilla/5.0 Firefox/121.0"}"#).unwrap();
        assert!(host.brands().is_none());
    }

    #[test]
    fn test_from_json_partial_user_agent_data() {
        let host = HostIdentity::from_json(r#"{"userAgentData": {"brands": []}}"#).unwrap();
        assert_eq!(host.user_agent(), "");
        assert_eq!(host.brands(), Some(&[][..]));
        assert_eq!(host.user_agent_data.unwrap().platform, "");
    }

    #[test]
    fn test_from_json_null_brands() {
        let host = HostIdentity::from_json(
            r#"{"userAgent": "Mozilla/5.0", "userAgentData": {"brands": null}}"#,
        )
        .unwrap();
        assert_eq!(host.brands(), Some(&[][..]));
        assert_eq!(crate::detect_identity(&host), crate::BrowserName::Undetected);
    }

    #[test]
    fn test_reference_is_identity_source() {
        let host = HostIdentity::new("Mozilla/5.0 Firefox/121.0")
            .with_brands(vec![BrandEntry::new("Chromium")]);
        let by_ref: &HostIdentity = &host;
        assert_eq!(IdentitySource::brands(&by_ref), host.brands());
        assert_eq!(IdentitySource::user_agent(&by_ref), "Mozilla/5.0 Firefox/121.0");
        assert_eq!(
            crate::detect_all(&[&host, &HostIdentity::new("")]),
            vec![crate::BrowserName::Chrome, crate::BrowserName::Undetected]
        );
    }

    #[test]
    fn test_from_json_invalid() {
        let err = HostIdentity::from_json("{\"userAgent\": 42}").unwrap_err();
        assert!(matches!(err, IdentityError::InvalidSnapshot { .. }));
    }

    #[test]
    fn test_with_brands_keeps_platform() {
        let mut host = HostIdentity::new("ua");
        host.user_agent_data = Some(UserAgentData {
            platform: "macOS".to_string(),
            ..Default::default()
        });
        let host = host.with_brands(vec![BrandEntry::new("Safari")]);
        let data = host.user_agent_data.unwrap();
        assert_eq!(data.platform, "macOS");
        assert_eq!(data.brands, vec![BrandEntry::new("Safari")]);
    }

    #[test]
    fn test_from_headers_without_client_hints() {
        let host = HostIdentity::from_headers("Mozilla/5.0", None).unwrap();
        assert_eq!(host, HostIdentity::new("Mozilla/5.0"));
    }

    #[test]
    fn test_from_headers_malformed() {
        let err = HostIdentity::from_headers("Mozilla/5.0", Some("Chromium")).unwrap_err();
        assert!(matches!(err, IdentityError::MalformedClientHints { .. }));
    }

    #[test]
    fn test_serialize_skips_missing_data() {
        let json = serde_json::to_string(&HostIdentity::new("ua")).unwrap();
        assert_eq!(json, r#"{"userAgent":"ua"}"#);
    }
}
