use std::fmt;

use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

use crate::{
    ShamirError,
    constants::{CURVE25519_PRIME, MIN_MODULUS, SECP256K1_ORDER},
    hazmat::{mod_pow, random_below},
};

/// An integer in `[0, N)` for the modulus `N` of the `PrimeField` that
/// produced it.
///
/// Field elements carry secret material, so `Debug` does not print the
/// value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FieldElement(BigUint);

impl FieldElement {
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    pub fn into_value(self) -> BigUint {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FieldElement(..)")
    }
}

/// The integers modulo a prime `N`.
///
/// All arithmetic goes through a `PrimeField` so the modulus is always
/// explicit. Fields over different moduli can be used side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,
    byte_len: usize,
}

impl PrimeField {
    /// Creates a field over `modulus`. The caller vouches that it is prime.
    pub fn new(modulus: BigUint) -> Result<Self, ShamirError> {
        if modulus < BigUint::from(MIN_MODULUS) {
            return Err(ShamirError::InvalidModulus);
        }
        let byte_len = modulus.bits().div_ceil(8) as usize;
        Ok(Self { modulus, byte_len })
    }

    /// The field of scalars of the secp256k1 group.
    pub fn secp256k1() -> Self {
        Self { modulus: BigUint::from_bytes_be(&SECP256K1_ORDER), byte_len: SECP256K1_ORDER.len() }
    }

    /// The field modulo 2^255 - 19.
    pub fn curve25519() -> Self {
        Self { modulus: BigUint::from_bytes_be(&CURVE25519_PRIME), byte_len: CURVE25519_PRIME.len() }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Width in bytes of a fixed-width encoded element.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    pub fn zero(&self) -> FieldElement {
        FieldElement(BigUint::zero())
    }

    pub fn one(&self) -> FieldElement {
        FieldElement(BigUint::one())
    }

    /// Wraps `value`, which must already be below the modulus.
    pub fn element(&self, value: BigUint) -> Result<FieldElement, ShamirError> {
        if value >= self.modulus {
            return Err(ShamirError::ValueOutOfRange);
        }
        Ok(FieldElement(value))
    }

    /// Whether `e` is a canonical element of this field. Elements made by
    /// another field may not be.
    pub fn contains(&self, e: &FieldElement) -> bool {
        e.0 < self.modulus
    }

    fn reduce(&self, e: &FieldElement) -> BigUint {
        &e.0 % &self.modulus
    }

    /// Maps a small integer into the field, reducing it.
    pub fn from_u64(&self, value: u64) -> FieldElement {
        FieldElement(BigUint::from(value) % &self.modulus)
    }

    /// Returns `e` as a `u32` if it fits.
    pub fn to_u32(&self, e: &FieldElement) -> Option<u32> {
        e.0.to_u32()
    }

    /// Draws a uniformly random element.
    pub fn random(&self, rng: &mut impl RandomNumberGenerator) -> FieldElement {
        FieldElement(random_below(rng, &self.modulus))
    }

    pub fn add(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement((&a.0 + &b.0) % &self.modulus)
    }

    pub fn sub(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let (a, b) = (self.reduce(a), self.reduce(b));
        if a >= b {
            FieldElement(a - b)
        } else {
            FieldElement(a + &self.modulus - b)
        }
    }

    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        FieldElement((&a.0 * &b.0) % &self.modulus)
    }

    /// `a^(N-2)`, the multiplicative inverse by Fermat's little theorem.
    pub fn inverse(&self, a: &FieldElement) -> Result<FieldElement, ShamirError> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(ShamirError::DivisionByZero);
        }
        let exponent = &self.modulus - 2u32;
        Ok(FieldElement(mod_pow(&a, &exponent, &self.modulus)))
    }

    pub fn div(&self, a: &FieldElement, b: &FieldElement) -> Result<FieldElement, ShamirError> {
        let inv = self.inverse(b)?;
        Ok(self.mul(a, &inv))
    }

    /// Minimal big-endian encoding. Zero encodes as the empty string.
    pub fn to_bytes(&self, e: &FieldElement) -> Vec<u8> {
        let value = self.reduce(e);
        if value.is_zero() {
            return Vec::new();
        }
        value.to_bytes_be()
    }

    /// Big-endian encoding left-padded to `byte_len()` bytes.
    pub fn to_fixed_bytes(&self, e: &FieldElement) -> Vec<u8> {
        let mut out = vec![0u8; self.byte_len];
        let raw = self.to_bytes(e);
        out[self.byte_len - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Decodes a big-endian integer of any length. Leading zero bytes are
    /// ignored.
    pub fn from_bytes(&self, data: &[u8]) -> Result<FieldElement, ShamirError> {
        self.element(BigUint::from_bytes_be(data))
    }

    /// Decodes exactly `byte_len()` big-endian bytes.
    pub fn from_fixed_bytes(&self, data: &[u8]) -> Result<FieldElement, ShamirError> {
        if data.len() != self.byte_len {
            return Err(ShamirError::InvalidEncoding { expected: self.byte_len, actual: data.len() });
        }
        self.from_bytes(data)
    }
}
