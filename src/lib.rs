//! # browser-detect
//!
//! Browser detection from host identity data.
//!
//! Hosts expose who they are in one of two ways: an ordered list of brand
//! claims (User-Agent Client Hints, `navigator.userAgentData.brands` or the
//! `Sec-CH-UA` header) or a single free-form user-agent string. This crate
//! maps either one to a canonical [`BrowserName`], falling back to
//! [`BrowserName::Undetected`] when nothing is recognised.
//!
//! ## Features
//!
//! - `BrowserName` enum of detectable browsers plus the `Undetected` sentinel
//! - `detect()` for brand lists and user-agent strings passed in directly
//! - `detect_identity()` for any [`IdentitySource`], such as a [`HostIdentity`]
//!   loaded from a JSON snapshot or built from request headers
//! - `DetectOptions` to ignore brands or retry with the user-agent string
//!
//! ## Example
//!
//! ```rust
//! use browser_detect::{detect, detect_identity, BrowserName, HostIdentity};
//!
//! let ua = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
//!           (KHTML, like Gecko) Chrome/100.0.4896.60 Safari/537.36";
//! assert_eq!(detect(None, ua), BrowserName::Chrome);
//!
//! let host = HostIdentity::from_headers(ua, Some(r#""Microsoft Edge";v="121""#)).unwrap();
//! println!("This page is loaded on {} browser.", detect_identity(&host));
//! ```

mod browser_name;
mod detect;
mod detection;
mod error;
mod identity;
mod options;

pub use browser_name::BrowserName;
pub use detect::{
    detect, detect_all, detect_identity, detect_identity_with_options, detect_with_options,
};
pub use detection::{match_candidate, parse_client_hints, rules, Rule};
pub use error::IdentityError;
pub use identity::{BrandEntry, HostIdentity, IdentitySource, UserAgentData};
pub use options::DetectOptions;
