//! Browser name enum identifying detectable browsers.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

/// The canonical name of a detected browser.
///
/// `Undetected` is a regular value, not an error: callers should expect it
/// for bots, embedded webviews, empty input and anything else the rule table
/// does not recognise.
///
/// # Example
///
/// ```rust
/// use browser_detect::BrowserName;
///
/// for name in BrowserName::all() {
///     println!("{}", name.display_name());
/// }
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum BrowserName {
    /// Opera (`OPR/` token).
    Opera,
    /// Microsoft Edge (`Edg` token).
    Edge,
    /// Google Chrome or any Chromium build (`Chrome`, `Chromium`, `CriOS`).
    Chrome,
    /// Apple Safari.
    Safari,
    /// Mozilla Firefox (`Firefox`, `FxiOS`).
    Firefox,
    /// No rule matched.
    #[default]
    Undetected,
}

impl BrowserName {
    /// Human-readable display name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use browser_detect::BrowserName;
    ///
    /// assert_eq!(BrowserName::Edge.display_name(), "Edge");
    /// assert_eq!(BrowserName::Undetected.display_name(), "not detected");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Opera => "Opera",
            Self::Edge => "Edge",
            Self::Chrome => "Chrome",
            Self::Safari => "Safari",
            Self::Firefox => "Firefox",
            Self::Undetected => "not detected",
        }
    }

    /// Whether this is a real browser rather than the `Undetected` sentinel.
    pub fn is_detected(&self) -> bool {
        !matches!(self, Self::Undetected)
    }

    /// Iterator over every value, `Undetected` last.
    ///
    /// ```rust
    /// use browser_detect::BrowserName;
    ///
    /// assert_eq!(BrowserName::all().count(), 6);
    /// ```
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

impl fmt::Display for BrowserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(BrowserName::Opera.display_name(), "Opera");
        assert_eq!(BrowserName::Edge.display_name(), "Edge");
        assert_eq!(BrowserName::Chrome.display_name(), "Chrome");
        assert_eq!(BrowserName::Safari.display_name(), "Safari");
        assert_eq!(BrowserName::Firefox.display_name(), "Firefox");
        assert_eq!(BrowserName::Undetected.display_name(), "not detected");
    }

    #[test]
    fn test_display_matches_display_name() {
        for name in BrowserName::all() {
            assert_eq!(name.to_string(), name.display_name());
        }
    }

    #[test]
    fn test_is_detected() {
        assert!(!BrowserName::Undetected.is_detected());
        assert_eq!(BrowserName::all().filter(|n| n.is_detected()).count(), 5);
    }

    #[test]
    fn test_default_is_undetected() {
        assert_eq!(BrowserName::default(), BrowserName::Undetected);
    }

    #[test]
    fn test_derives() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(BrowserName::Chrome);
        set.insert(BrowserName::Chrome);
        set.insert(BrowserName::Safari);
        assert_eq!(set.len(), 2);

        let json = serde_json::to_string(&BrowserName::Firefox).unwrap();
        assert_eq!(json, "\"Firefox\"");
        let back: BrowserName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BrowserName::Firefox);
    }
}
