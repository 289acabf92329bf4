//! Detection options configuration.
//!
//! This module provides the [`DetectOptions`] struct for choosing which host
//! identity inputs take part in detection.

/// Configuration options for browser detection.
///
/// # Default Behavior
///
/// Brand claims are preferred whenever the host exposes them, and the
/// user-agent string is only consulted when no brand list is present. A brand
/// list that matches nothing yields `Undetected` without looking at the
/// user-agent string.
///
/// # Example
///
/// ```rust
/// use browser_detect::DetectOptions;
///
/// // Defaults: brands first, no user-agent retry
/// let opts = DetectOptions::default();
///
/// // Retry with the user-agent string when brands match nothing
/// let opts = DetectOptions {
///     fallback_to_user_agent: true,
///     ..Default::default()
/// };
///
/// // Ignore brand claims entirely
/// let opts = DetectOptions {
///     prefer_brands: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectOptions {
    /// Use the brand list when the host provides one.
    ///
    /// When `false`, only the user-agent string is matched.
    ///
    /// Default: `true`
    pub prefer_brands: bool,

    /// Match the user-agent string when the brand list yields nothing.
    ///
    /// Has no effect when `prefer_brands` is `false` or no brand list is
    /// present, since the user-agent string is matched anyway.
    ///
    /// Default: `false`
    pub fallback_to_user_agent: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            prefer_brands: true,
            fallback_to_user_agent: false,
        }
    }
}
