//! Wildcarded Identity-Based Encryption (WIBE) on the [BLS12-381 pairing-friendly elliptic curve](https://github.com/zkcrypto/bls12_381) in Rust.
//!
//! In a WIBE scheme the sender encrypts to a *pattern*: an identity vector in
//! which any position may be replaced by a wildcard. Every user whose identity
//! vector matches the pattern at the fixed positions can decrypt. This crate
//! implements the hierarchical Boneh-Boyen-Goh construction (see [the bbg
//! module](`crate::bbg`)), in which user keys are delegated level by level
//! from a level-zero master secret key.
//!
//! # Examples
//!
//! ```
//! use group::Group;
//! use wibe::bbg::{BonehBoyenGoh, Msg};
//! use wibe::{Derive, Identity, Params, Pattern, Slot};
//!
//! let mut rng = rand::thread_rng();
//!
//! // Fix the maximum hierarchy depth.
//! let params = Params::new(2).unwrap();
//!
//! // Generate a master key pair for a trusted third party.
//! let (pk, msk) = BonehBoyenGoh::setup(&params, &mut rng);
//!
//! // Delegate a level-2 key for the identity vector (finance, alice).
//! let dept = Identity::derive(b"finance").to_scalar();
//! let user = Identity::derive(b"alice").to_scalar();
//! let sk_dept = BonehBoyenGoh::derive(&pk, &msk, &dept, &mut rng).unwrap();
//! let sk_user = BonehBoyenGoh::derive(&pk, &sk_dept, &user, &mut rng).unwrap();
//!
//! // Encrypt a random message to every user of the finance department.
//! let m = Msg::random(&mut rng);
//! let pattern = Pattern::from(vec![Slot::Fixed(dept), Slot::Wildcard]);
//! let ct = BonehBoyenGoh::encrypt(&pk, pattern, &m, &mut rng).unwrap();
//!
//! // Decrypt the ciphertext with the private key of the user.
//! let m2 = BonehBoyenGoh::decrypt(&sk_user, &ct).unwrap();
//!
//! assert_eq!(m, m2);
//! ```

#![no_std]
#![deny(missing_debug_implementations, rust_2018_idioms, missing_docs)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
#[cfg(test)]
mod macros;

#[allow(unused)]
mod util;

mod pattern;

pub mod bbg;

pub use crate::pattern::{Params, Pattern, Slot};
pub use crate::util::Identity;

use alloc::vec::Vec;
use core::fmt;

/// Failure cases surfaced by the scheme's entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A serialized artifact was rejected, or artifacts of two different
    /// systems were mixed in one operation.
    Params,
    /// The hierarchy bound is zero, or a key at the bound was asked to
    /// delegate further.
    Hierarchy,
    /// A pattern length is out of bounds, or does not equal the level of the
    /// key it is used with.
    Pattern,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Params => write!(f, "malformed system artifact"),
            Error::Hierarchy => write!(f, "hierarchy bound exhausted"),
            Error::Pattern => write!(f, "pattern incompatible with this operation"),
        }
    }
}

/// Artifacts of the system that can be serialized should implement this trait.
///
/// Secret artifacts such as the master secret key and delegated user keys
/// decode their group elements in constant time.
pub trait Compress: fmt::Debug + Sized + Clone {
    /// Serializes this artifact to a byte representation.
    fn to_bytes(&self) -> Vec<u8>;

    /// Deserializes an artifact. The expected length depends on the hierarchy
    /// bound the artifact was created under.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>;
}

/// Artifacts that are derived from byte-level representations, such as
/// identities.
pub trait Derive {
    /// Hash a byte slice to an artifact.
    fn derive(b: &[u8]) -> Self;

    /// Hash a string slice to an artifact.
    fn derive_str(s: &str) -> Self;
}
