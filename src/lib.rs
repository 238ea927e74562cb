#![doc(html_root_url = "https://docs.rs/prime-shamir/0.1.0")]
#![warn(rust_2018_idioms)]

//! # Introduction
//!
//! Shamir's Secret Sharing over the integers modulo a large prime, such as
//! the order of the secp256k1 group. A secret scalar (e.g. a private key)
//! is split into `n` shares such that any `t` of them recover it exactly
//! and any `t - 1` reveal nothing about it.
//!
//! The modulus is an explicit `PrimeField` value passed to every
//! operation; there is no global state.
//!
//! # Getting Started
//!
//! ```toml
//! [dependencies]
//! prime-shamir = "0.1.0"
//! ```
//!
//! # Usage
//!
//! ```
//! use bc_rand::SecureRandomNumberGenerator;
//! use prime_shamir::{PrimeField, recover_secret, split_secret};
//!
//! let field = PrimeField::secp256k1();
//! let mut rng = SecureRandomNumberGenerator;
//! let secret = field.random(&mut rng);
//!
//! let shares = split_secret(&field, 3, 5, &secret, &mut rng).unwrap();
//! let recovered = recover_secret(&field, 3, &shares[1..4]).unwrap();
//! assert_eq!(recovered, secret);
//! ```

mod constants;
pub use constants::{CURVE25519_PRIME, MAX_SHARE_COUNT, SECP256K1_ORDER};

mod hazmat;
mod interpolate;

mod shamir_error;
pub use shamir_error::{ErrorKind, ShamirError};

mod field;
pub use field::{FieldElement, PrimeField};

mod polynomial;
pub use polynomial::Polynomial;

mod shamir;
pub use shamir::{Share, recover_secret, split_secret};

mod transport;
pub use transport::{ShareEncoding, construct, reconstruct};

mod blob;
pub use blob::{recover_bytes, split_bytes};

pub use num_bigint::BigUint;
