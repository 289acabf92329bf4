//! Browser detection functions.

use crate::detection::match_candidate;
use crate::{BrandEntry, BrowserName, DetectOptions, IdentitySource};

/// Detect the browser from brand claims or a user-agent string.
///
/// When `brands` is `Some`, each brand is matched against the rule table in
/// the order given and the first match wins. Otherwise the user-agent string
/// is matched once.
///
/// # Detection Process
///
/// 1. Opera (`opr/`)
/// 2. Edge (`edg`)
/// 3. Chrome (`chrome`, `chromium`, `crios`)
/// 4. Safari (`safari`)
/// 5. Firefox (`firefox`, `fxios`)
///
/// All patterns are case-insensitive substring matches.
///
/// # Returns
///
/// The detected [`BrowserName`], or [`BrowserName::Undetected`] when nothing
/// matched. This function never fails.
///
/// # Example
///
/// ```rust
/// use browser_detect::{detect, BrandEntry, BrowserName};
///
/// let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:121.0) Gecko/20100101 Firefox/121.0";
/// assert_eq!(detect(None, ua), BrowserName::Firefox);
///
/// let brands = [
///     BrandEntry::new("Not A Brand"),
///     BrandEntry::new("Chromium"),
///     BrandEntry::new("Google Chrome"),
/// ];
/// assert_eq!(detect(Some(&brands), ua), BrowserName::Chrome);
/// ```
pub fn detect(brands: Option<&[BrandEntry]>, user_agent: &str) -> BrowserName {
    detect_with_options(brands, user_agent, &DetectOptions::default())
}

/// Detect the browser with custom options.
///
/// See [`DetectOptions`] for how `prefer_brands` and
/// `fallback_to_user_agent` change input selection. The matching rules are
/// the same as [`detect`].
///
/// # Example
///
/// ```rust
/// use browser_detect::{detect_with_options, BrandEntry, BrowserName, DetectOptions};
///
/// let brands = [BrandEntry::new("Not A(Brand")];
/// let ua = "Mozilla/5.0 (Macintosh) AppleWebKit/605.1.15 Version/17.0 Safari/605.1.15";
///
/// let strict = DetectOptions::default();
/// assert_eq!(detect_with_options(Some(&brands), ua, &strict), BrowserName::Undetected);
///
/// let lenient = DetectOptions { fallback_to_user_agent: true, ..Default::default() };
/// assert_eq!(detect_with_options(Some(&brands), ua, &lenient), BrowserName::Safari);
/// ```
pub fn detect_with_options(
    brands: Option<&[BrandEntry]>,
    user_agent: &str,
    options: &DetectOptions,
) -> BrowserName {
    let brands = brands.filter(|_| options.prefer_brands);

    let detected = match brands {
        Some(brands) => match_brands(brands).or_else(|| {
            if options.fallback_to_user_agent {
                tracing::trace!("no brand matched, retrying with user-agent");
                match_candidate(user_agent)
            } else {
                None
            }
        }),
        None => match_candidate(user_agent),
    };

    let browser = detected.unwrap_or(BrowserName::Undetected);
    let mode = if brands.is_some() { "brands" } else { "user-agent" };
    tracing::debug!(
        mode,
        browser = browser.display_name(),
        "browser detection finished"
    );
    browser
}

/// First brand in list order that matches any rule.
fn match_brands(brands: &[BrandEntry]) -> Option<BrowserName> {
    brands.iter().find_map(|entry| {
        let matched = match_candidate(&entry.brand);
        tracing::trace!(brand = %entry.brand, ?matched, "evaluated brand claim");
        matched
    })
}

/// Detect the browser from an injected identity source.
///
/// # Example
///
/// ```rust
/// use browser_detect::{detect_identity, BrowserName, HostIdentity};
///
/// let host = HostIdentity::new("Mozilla/5.0 (iPhone) AppleWebKit/605.1.15 CriOS/120.0 Mobile Safari/604.1");
/// assert_eq!(detect_identity(&host), BrowserName::Chrome);
/// ```
pub fn detect_identity(source: &impl IdentitySource) -> BrowserName {
    detect_identity_with_options(source, &DetectOptions::default())
}

/// Detect the browser from an injected identity source with custom options.
pub fn detect_identity_with_options(
    source: &impl IdentitySource,
    options: &DetectOptions,
) -> BrowserName {
    detect_with_options(source.brands(), source.user_agent(), options)
}

/// Detect the browser for each source, preserving input order.
///
/// # Example
///
/// ```rust
/// use browser_detect::{detect_all, BrowserName, HostIdentity};
///
/// let hosts = [
///     HostIdentity::new("Mozilla/5.0 Chrome/120.0 Safari/537.36 OPR/106.0"),
///     HostIdentity::new("curl/8.5.0"),
/// ];
/// assert_eq!(detect_all(&hosts), vec![BrowserName::Opera, BrowserName::Undetected]);
/// ```
pub fn detect_all<S: IdentitySource>(sources: &[S]) -> Vec<BrowserName> {
    sources.iter().map(detect_identity).collect()
}
