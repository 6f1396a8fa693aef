//! Policy input validation
//!
//! Two formats are accepted from users:
//!
//! - **Policy ID**: `Policy_` followed by exactly four digits
//! - **Combined input**: a policy ID, optionally followed by `>` and the
//!   policy document URL
//!
//! Both checks match the whole string. The URL after `>` may contain any
//! text, line breaks included.

use once_cell::sync::Lazy;
use regex::Regex;

/// Pattern for a bare policy identifier
pub const CHECK_POLICY_ID_REGEX: &str = "Policy_[0-9]{4}";

/// Pattern for a policy identifier with an optional `>`-separated URL
pub const CHECK_POLICY_INPUT_REGEX: &str = "Policy_[0-9]{4}(>.*)?";

/// Separator between the policy ID and URL in combined input
pub const URL_SEPARATOR: char = '>';

/// Message shown to users whose input violates either format
pub const MESSAGE_CONSTRAINTS: &str =
    "PolicyIDs should be of the form 'Policy_****'. URLs should be preceded by '>' after the PolicyID.";

static POLICY_ID: Lazy<Regex> = Lazy::new(|| anchored(CHECK_POLICY_ID_REGEX));

static POLICY_INPUT: Lazy<Regex> = Lazy::new(|| anchored(CHECK_POLICY_INPUT_REGEX));

fn anchored(pattern: &str) -> Regex {
    Regex::new(&format!("(?s)^(?:{pattern})$")).expect("invalid policy pattern")
}

/// Checks if `test` is a policy ID of the form `Policy_NNNN`
///
/// # Examples
///
/// ```rust
/// use domain_insurance::is_policy_id;
///
/// assert!(is_policy_id("Policy_0001"));
/// assert!(!is_policy_id("Policy_123"));
/// assert!(!is_policy_id("policy_0001"));
/// ```
pub fn is_policy_id(test: &str) -> bool {
    POLICY_ID.is_match(test)
}

/// Checks if `test` is a policy ID optionally followed by `>` and a URL
///
/// The trailing URL may be empty and may contain any characters.
pub fn is_valid_policy_input(test: &str) -> bool {
    POLICY_INPUT.is_match(test)
}
