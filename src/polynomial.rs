use bc_rand::RandomNumberGenerator;

use crate::{FieldElement, PrimeField, ShamirError};

/// A polynomial over a prime field
///     f(x) = a[0] + a[1]x + a[2]x^2 + ... + a[t-1]x^(t-1)
/// whose constant term `a[0]` is the secret and whose remaining
/// coefficients are uniformly random.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coefficients: Vec<FieldElement>,
}

impl Polynomial {
    /// Builds a polynomial with `threshold` coefficients, i.e. of degree
    /// `threshold - 1`.
    pub fn new(
        field: &PrimeField,
        threshold: usize,
        secret: FieldElement,
        rng: &mut impl RandomNumberGenerator,
    ) -> Result<Self, ShamirError> {
        if threshold < 1 {
            return Err(ShamirError::InvalidThreshold { threshold, share_count: 0 });
        }
        if !field.contains(&secret) {
            return Err(ShamirError::ValueOutOfRange);
        }
        let mut coefficients = Vec::with_capacity(threshold);
        coefficients.push(secret);
        for _ in 1..threshold {
            coefficients.push(field.random(rng));
        }
        Ok(Self { coefficients })
    }

    #[cfg(test)]
    pub(crate) fn from_coefficients(coefficients: Vec<FieldElement>) -> Self {
        Self { coefficients }
    }

    /// Number of shares needed to recover the constant term.
    pub fn threshold(&self) -> usize {
        self.coefficients.len()
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn evaluate(&self, field: &PrimeField, x: &FieldElement) -> FieldElement {
        let mut coefficients = self.coefficients.iter().rev();
        let Some(leading) = coefficients.next() else {
            return field.zero();
        };
        coefficients.fold(leading.clone(), |acc, c| field.add(&field.mul(&acc, x), c))
    }
}
