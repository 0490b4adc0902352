//! Quote reference generation
//!
//! References are unique, sortable, human-legible identifiers of the form
//! `QTE-HOME-0LKJH3X2P-7F4A`: a policy-type-aware prefix, the current UTC
//! timestamp in milliseconds encoded base-36 (zero-padded so references
//! sort lexicographically), and a short random suffix so two quotes in the
//! same millisecond still differ. Uniqueness under normal load is the only
//! requirement; this is not a cryptographic token.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::rates::PolicyType;

const BASE36_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Width of the encoded timestamp; 9 base-36 digits cover timestamps
/// until the year 5188
const TIMESTAMP_WIDTH: usize = 9;

/// Length of the random suffix
const SUFFIX_WIDTH: usize = 4;

/// A generated quote reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteReference(String);

impl QuoteReference {
    /// Generates a new reference for the given policy type
    ///
    /// The sole place the engine reads the wall clock.
    pub fn generate(policy_type: PolicyType) -> Self {
        let millis = Utc::now().timestamp_millis().max(0) as u128;
        let entropy = Uuid::new_v4().as_u128();

        Self(format!(
            "QTE-{}-{}-{}",
            policy_type.code(),
            encode_base36(millis, TIMESTAMP_WIDTH),
            encode_base36(entropy, SUFFIX_WIDTH),
        ))
    }

    /// Returns the reference string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuoteReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Encodes the low-order base-36 digits of `value`, zero-padded to `width`
fn encode_base36(mut value: u128, width: usize) -> String {
    let mut digits = vec![b'0'; width];
    for slot in digits.iter_mut().rev() {
        *slot = BASE36_ALPHABET[(value % 36) as usize];
        value /= 36;
    }
    String::from_utf8(digits).expect("base36 alphabet is ASCII")
}
