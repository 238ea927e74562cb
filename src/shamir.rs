use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use tracing::debug;

use crate::{
    FieldElement, Polynomial, PrimeField, ShamirError,
    constants::MAX_SHARE_COUNT,
    interpolate::interpolate,
};

/// One point `(x, f(x))` on the sharing polynomial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    pub x: u32,
    pub y: FieldElement,
}

pub(crate) fn validate_parameters(
    field: &PrimeField,
    threshold: usize,
    share_count: usize,
) -> Result<(), ShamirError> {
    // x = share_count must not wrap around to 0.
    if share_count > MAX_SHARE_COUNT || &BigUint::from(share_count) >= field.modulus() {
        return Err(ShamirError::TooManyShares { share_count });
    } else if threshold < 1 || threshold > share_count {
        return Err(ShamirError::InvalidThreshold { threshold, share_count });
    }
    Ok(())
}

/// Splits `secret` into `share_count` shares, any `threshold` of which
/// recover it. Shares are issued at x = 1, 2, ..., share_count.
pub fn split_secret(
    field: &PrimeField,
    threshold: usize,
    share_count: usize,
    secret: &FieldElement,
    random_generator: &mut impl RandomNumberGenerator,
) -> Result<Vec<Share>, ShamirError> {
    validate_parameters(field, threshold, share_count)?;
    debug!(threshold, share_count, "splitting secret");

    let polynomial = Polynomial::new(field, threshold, secret.clone(), random_generator)?;
    let shares = (1..=share_count as u32)
        .map(|x| Share { x, y: polynomial.evaluate(field, &field.from_u64(x.into())) })
        .collect();
    Ok(shares)
}

/// Recovers the secret from exactly `threshold` shares.
///
/// The shares are trusted: nothing checks that they come from the same
/// split. Two shares with the same x coordinate fail with
/// `DivisionByZero`.
pub fn recover_secret(
    field: &PrimeField,
    threshold: usize,
    shares: &[Share],
) -> Result<FieldElement, ShamirError> {
    if threshold < 1 {
        return Err(ShamirError::InvalidThreshold { threshold, share_count: shares.len() });
    }
    if shares.len() != threshold {
        return Err(ShamirError::ShareCountMismatch { expected: threshold, actual: shares.len() });
    }
    debug!(threshold, "recovering secret");

    let xs: Vec<FieldElement> = shares.iter().map(|s| field.from_u64(s.x.into())).collect();
    let ys: Vec<FieldElement> = shares.iter().map(|s| s.y.clone()).collect();
    interpolate(field, &xs, &ys, &field.zero())
}
