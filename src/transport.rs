use std::io::{Read, Write};

use bc_crypto::memzero;
use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use tracing::debug;

use crate::{
    FieldElement, PrimeField, ShamirError,
    shamir::{Share, recover_secret, split_secret},
};

/// How field elements are laid out on a byte sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareEncoding {
    /// Minimal big-endian bytes. Leading zeros are dropped, so the width
    /// of a value leaks its magnitude.
    Unpadded,
    /// Big-endian bytes left-padded to the byte length of the modulus.
    #[default]
    FixedWidth,
}

impl ShareEncoding {
    pub fn encode(self, field: &PrimeField, e: &FieldElement) -> Vec<u8> {
        match self {
            ShareEncoding::Unpadded => field.to_bytes(e),
            ShareEncoding::FixedWidth => field.to_fixed_bytes(e),
        }
    }

    pub fn decode(self, field: &PrimeField, data: &[u8]) -> Result<FieldElement, ShamirError> {
        match self {
            ShareEncoding::Unpadded => field.from_bytes(data),
            ShareEncoding::FixedWidth => field.from_fixed_bytes(data),
        }
    }
}

/// Splits `secret` and writes share `i` to `value_sinks[i - 1]` (its
/// y value) and `x_sinks[i - 1]` (its x coordinate), for i = 1..=share_count.
///
/// Every share is computed before the first write, so a parameter or
/// arithmetic error leaves all sinks untouched. A write error aborts the
/// remaining writes.
#[allow(clippy::too_many_arguments)]
pub fn construct<V: Write, X: Write>(
    field: &PrimeField,
    secret: &BigUint,
    share_count: usize,
    threshold: usize,
    value_sinks: &mut [V],
    x_sinks: &mut [X],
    encoding: ShareEncoding,
    random_generator: &mut impl RandomNumberGenerator,
) -> Result<(), ShamirError> {
    for actual in [value_sinks.len(), x_sinks.len()] {
        if actual != share_count {
            return Err(ShamirError::ShareCountMismatch { expected: share_count, actual });
        }
    }
    let secret = field.element(secret.clone())?;
    let shares = split_secret(field, threshold, share_count, &secret, random_generator)?;
    debug!(share_count, threshold, ?encoding, "writing shares");

    for ((share, value_sink), x_sink) in shares.iter().zip(value_sinks).zip(x_sinks) {
        let mut value = encoding.encode(field, &share.y);
        let written = value_sink.write_all(&value).and_then(|_| value_sink.flush());
        memzero(&mut value);
        written?;

        let x = encoding.encode(field, &field.from_u64(share.x.into()));
        x_sink.write_all(&x)?;
        x_sink.flush()?;
    }
    Ok(())
}

/// Reads `threshold` shares, pairing `value_sources[i]` with
/// `x_sources[i]`, recovers the secret and writes it to `out`.
pub fn reconstruct<V: Read, X: Read, W: Write>(
    field: &PrimeField,
    threshold: usize,
    value_sources: &mut [V],
    x_sources: &mut [X],
    out: &mut W,
    encoding: ShareEncoding,
) -> Result<(), ShamirError> {
    if threshold < 1 {
        return Err(ShamirError::InvalidThreshold { threshold, share_count: value_sources.len() });
    }
    for actual in [value_sources.len(), x_sources.len()] {
        if actual != threshold {
            return Err(ShamirError::ShareCountMismatch { expected: threshold, actual });
        }
    }
    debug!(threshold, ?encoding, "reading shares");

    let mut shares = Vec::with_capacity(threshold);
    for (value_source, x_source) in value_sources.iter_mut().zip(x_sources.iter_mut()) {
        let mut value = Vec::new();
        value_source.read_to_end(&mut value)?;
        let y = encoding.decode(field, &value);
        memzero(&mut value);
        let y = y?;

        let mut x = Vec::new();
        x_source.read_to_end(&mut x)?;
        let x = encoding.decode(field, &x)?;
        let x = field.to_u32(&x).ok_or(ShamirError::ValueOutOfRange)?;
        shares.push(Share { x, y });
    }

    let secret = recover_secret(field, threshold, &shares)?;
    let mut bytes = encoding.encode(field, &secret);
    let written = out.write_all(&bytes).and_then(|_| out.flush());
    memzero(&mut bytes);
    Ok(written?)
}
