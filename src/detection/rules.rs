//! Ordered rule table mapping identity tokens to browser names.

use crate::BrowserName;
use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns in priority order. Opera and Edge user-agents also contain
/// `Chrome/`, and Chrome user-agents contain `Safari/`. Case folding is
/// ASCII-only, so non-ASCII look-alikes such as `ſ` never match.
const RULE_PATTERNS: &[(&str, BrowserName)] = &[
    (r"(?i-u)opr/", BrowserName::Opera),
    (r"(?i-u)edg", BrowserName::Edge),
    (r"(?i-u)chrome|chromium|crios", BrowserName::Chrome),
    (r"(?i-u)safari", BrowserName::Safari),
    (r"(?i-u)firefox|fxios", BrowserName::Firefox),
];

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    RULE_PATTERNS
        .iter()
        .map(|(pattern, browser)| Rule {
            pattern: Regex::new(pattern).expect("Invalid rule pattern"),
            browser: *browser,
        })
        .collect()
});

/// A single detection rule: a case-insensitive pattern and the browser it
/// identifies.
#[derive(Debug)]
pub struct Rule {
    pattern: Regex,
    browser: BrowserName,
}

impl Rule {
    /// The regular expression source, including its `(?i-u)` flags.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The browser this rule reports.
    pub fn browser(&self) -> BrowserName {
        self.browser
    }

    /// Whether the pattern occurs anywhere in `candidate`.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.pattern.is_match(candidate)
    }
}

/// The rule table, highest priority first.
///
/// # Example
///
/// ```rust
/// use browser_detect::{rules, BrowserName};
///
/// let order: Vec<_> = rules().iter().map(|r| r.browser()).collect();
/// assert_eq!(order.first(), Some(&BrowserName::Opera));
/// assert_eq!(order.last(), Some(&BrowserName::Firefox));
/// ```
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Apply the rule table to one candidate string.
///
/// Returns the browser of the first rule whose pattern occurs in
/// `candidate`, or `None` when no rule matches.
///
/// # Example
///
/// ```rust
/// use browser_detect::{match_candidate, BrowserName};
///
/// assert_eq!(match_candidate("Microsoft Edge"), Some(BrowserName::Edge));
/// assert_eq!(match_candidate("Not A(Brand"), None);
/// ```
pub fn match_candidate(candidate: &str) -> Option<BrowserName> {
    rules()
        .iter()
        .find(|rule| rule.is_match(candidate))
        .map(Rule::browser)
}
