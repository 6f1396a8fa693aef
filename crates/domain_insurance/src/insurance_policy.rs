//! Insurance policy value object
//!
//! An [`InsurancePolicy`] pairs a policy identifier with an optional link to
//! the policy document. The identifier is fixed once created; the URL can be
//! replaced or cleared at any time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::PolicyError;
use crate::validation::{is_valid_policy_input, MESSAGE_CONSTRAINTS, URL_SEPARATOR};

/// A reference to an insurance policy held by a contact
///
/// Equality and hashing cover both the identifier and the URL. An absent URL
/// only equals another absent URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawInsurancePolicy")]
pub struct InsurancePolicy {
    policy_id: String,
    policy_url: Option<String>,
}

impl InsurancePolicy {
    /// Creates a policy reference without a URL
    ///
    /// The identifier format is not checked here; use
    /// [`is_policy_id`](crate::is_policy_id) on untrusted input first.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::MissingPolicyId`] if `policy_id` is empty.
    pub fn new(policy_id: impl Into<String>) -> Result<Self, PolicyError> {
        Self::with_url(policy_id, None)
    }

    /// Creates a policy reference with an optional URL
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::MissingPolicyId`] if `policy_id` is empty.
    pub fn with_url(
        policy_id: impl Into<String>,
        policy_url: Option<String>,
    ) -> Result<Self, PolicyError> {
        let policy_id = policy_id.into();
        if policy_id.is_empty() {
            return Err(PolicyError::MissingPolicyId);
        }

        Ok(Self {
            policy_id,
            policy_url,
        })
    }

    /// Returns the policy identifier
    pub fn policy_id(&self) -> &str {
        &self.policy_id
    }

    /// Returns the policy document URL, if one has been set
    pub fn policy_url(&self) -> Option<&str> {
        self.policy_url.as_deref()
    }

    /// Replaces the policy document URL
    ///
    /// Passing `None` clears it. The URL is stored as given.
    pub fn set_policy_url(&mut self, policy_url: Option<String>) {
        debug!(
            policy_id = %self.policy_id,
            previous = ?self.policy_url,
            current = ?policy_url,
            "Updating policy URL"
        );
        self.policy_url = policy_url;
    }

    /// Removes the policy document URL
    pub fn clear_policy_url(&mut self) {
        self.set_policy_url(None);
    }

    /// Compares identifiers only, ignoring the URL
    pub fn same_policy_id(&self, other: &InsurancePolicy) -> bool {
        self.policy_id == other.policy_id
    }
}

impl fmt::Display for InsurancePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.policy_url {
            Some(url) => write!(f, "{}: {}", self.policy_id, url),
            None => write!(f, "{}: No URL!", self.policy_id),
        }
    }
}

impl FromStr for InsurancePolicy {
    type Err = PolicyError;

    /// Parses combined input of the form `Policy_NNNN` or `Policy_NNNN>url`
    ///
    /// An empty URL after the separator is treated as no URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_policy_input(s) {
            trace!(input = s, "Rejected policy input");
            return Err(PolicyError::invalid_format(MESSAGE_CONSTRAINTS));
        }

        let (policy_id, policy_url) = match s.split_once(URL_SEPARATOR) {
            Some((id, url)) if !url.is_empty() => (id, Some(url.to_string())),
            Some((id, _)) => (id, None),
            None => (s, None),
        };

        Self::with_url(policy_id, policy_url)
    }
}

/// Wire form checked on the way in so decoded values keep a non-empty ID
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInsurancePolicy {
    policy_id: String,
    #[serde(default)]
    policy_url: Option<String>,
}

impl TryFrom<RawInsurancePolicy> for InsurancePolicy {
    type Error = PolicyError;

    fn try_from(raw: RawInsurancePolicy) -> Result<Self, Self::Error> {
        InsurancePolicy::with_url(raw.policy_id, raw.policy_url)
    }
}
