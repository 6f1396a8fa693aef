//! Insurance Policy References
//!
//! This crate models the insurance policies attached to contacts in the
//! address book. A policy reference is a small value object:
//!
//! - **Policy ID**: canonical identifier of the form `Policy_NNNN`
//! - **Policy URL**: optional link to the policy document
//!
//! Format checks are opt-in. Constructors only require a non-empty
//! identifier; callers validate user input with [`is_policy_id`] and
//! [`is_valid_policy_input`], or parse the combined `id>url` form directly.
//!
//! # Example
//!
//! ```rust
//! use domain_insurance::InsurancePolicy;
//!
//! let mut policy: InsurancePolicy = "Policy_0001>https://example.com/doc".parse()?;
//! assert_eq!(policy.policy_id(), "Policy_0001");
//! assert_eq!(policy.policy_url(), Some("https://example.com/doc"));
//!
//! policy.clear_policy_url();
//! assert_eq!(policy.to_string(), "Policy_0001: No URL!");
//! # Ok::<(), domain_insurance::PolicyError>(())
//! ```

pub mod error;
pub mod insurance_policy;
pub mod validation;

pub use error::PolicyError;
pub use insurance_policy::InsurancePolicy;
pub use validation::{
    is_policy_id, is_valid_policy_input, CHECK_POLICY_ID_REGEX, CHECK_POLICY_INPUT_REGEX,
    MESSAGE_CONSTRAINTS, URL_SEPARATOR,
};
