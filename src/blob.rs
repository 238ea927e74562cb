use bc_crypto::memzero;
use bc_rand::RandomNumberGenerator;
use tracing::debug;

use crate::{
    PrimeField, ShamirError,
    constants::{BLOB_HEADER_FIELD_LEN, BLOB_HEADER_LEN},
    shamir::{Share, recover_secret, split_secret, validate_parameters},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BlobHeader {
    length: u64,
    padded_length: u64,
    x: u64,
    threshold: u64,
}

impl BlobHeader {
    fn write(&self, out: &mut Vec<u8>) {
        for field in [self.length, self.padded_length, self.x, self.threshold] {
            out.extend_from_slice(&field.to_be_bytes());
        }
    }

    fn read(blob: &[u8]) -> Result<Self, ShamirError> {
        if blob.len() < BLOB_HEADER_LEN {
            return Err(ShamirError::MalformedShare("blob shorter than its header".to_string()));
        }
        let word = |i: usize| {
            let mut word = [0u8; BLOB_HEADER_FIELD_LEN];
            word.copy_from_slice(&blob[i * BLOB_HEADER_FIELD_LEN..(i + 1) * BLOB_HEADER_FIELD_LEN]);
            u64::from_be_bytes(word)
        };
        Ok(Self { length: word(0), padded_length: word(1), x: word(2), threshold: word(3) })
    }
}

/// Bytes of payload carried by one field element. Any integer of this
/// width is below the modulus.
fn payload_chunk_len(field: &PrimeField) -> Result<usize, ShamirError> {
    match field.byte_len() - 1 {
        0 => Err(ShamirError::InvalidModulus),
        n => Ok(n),
    }
}

/// Splits an arbitrary byte payload into `share_count` self-describing
/// blobs, any `threshold` of which recover it with `recover_bytes`.
///
/// The payload is zero-padded to whole chunks and each chunk is shared
/// with its own polynomial. Blob `i` holds a header followed by the
/// fixed-width share values at x = i + 1.
pub fn split_bytes(
    field: &PrimeField,
    data: &[u8],
    share_count: usize,
    threshold: usize,
    random_generator: &mut impl RandomNumberGenerator,
) -> Result<Vec<Vec<u8>>, ShamirError> {
    validate_parameters(field, threshold, share_count)?;
    let chunk_len = payload_chunk_len(field)?;
    let mut padded = data.to_vec();
    padded.resize(data.len().div_ceil(chunk_len) * chunk_len, 0);
    let chunk_count = padded.len() / chunk_len;
    debug!(length = data.len(), chunk_count, share_count, threshold, "splitting payload");

    let mut blobs: Vec<Vec<u8>> = (1..=share_count as u64)
        .map(|x| {
            let mut blob = Vec::with_capacity(BLOB_HEADER_LEN + chunk_count * field.byte_len());
            BlobHeader {
                length: data.len() as u64,
                padded_length: padded.len() as u64,
                x,
                threshold: threshold as u64,
            }
            .write(&mut blob);
            blob
        })
        .collect();

    let result: Result<(), ShamirError> = padded.chunks(chunk_len).try_for_each(|chunk| {
        let secret = field.from_bytes(chunk)?;
        let shares = split_secret(field, threshold, share_count, &secret, random_generator)?;
        for (blob, share) in blobs.iter_mut().zip(&shares) {
            blob.extend_from_slice(&field.to_fixed_bytes(&share.y));
        }
        Ok(())
    });
    memzero(&mut padded);
    result.map(|_| blobs)
}

/// Recovers a payload produced by `split_bytes` from at least `threshold`
/// of its blobs. Only the first `threshold` blobs are used.
pub fn recover_bytes(
    field: &PrimeField,
    blobs: &[impl AsRef<[u8]>],
) -> Result<Vec<u8>, ShamirError> {
    let first = blobs.first().ok_or(ShamirError::ShareCountMismatch { expected: 1, actual: 0 })?;
    let header = BlobHeader::read(first.as_ref())?;
    let threshold = usize::try_from(header.threshold)
        .ok()
        .filter(|t| *t >= 1)
        .ok_or_else(|| ShamirError::MalformedShare("bad threshold".to_string()))?;
    if blobs.len() < threshold {
        return Err(ShamirError::ShareCountMismatch { expected: threshold, actual: blobs.len() });
    }
    let chunk_len = payload_chunk_len(field)?;
    if header.length > header.padded_length || header.padded_length % chunk_len as u64 != 0 {
        return Err(ShamirError::MalformedShare("bad payload length".to_string()));
    }
    let width = field.byte_len();
    let chunk_count = usize::try_from(header.padded_length / chunk_len as u64).ok();
    let (chunk_count, blob_len) = chunk_count
        .and_then(|n| Some((n, n.checked_mul(width)?.checked_add(BLOB_HEADER_LEN)?)))
        .filter(|(_, blob_len)| *blob_len == first.as_ref().len())
        .ok_or_else(|| ShamirError::MalformedShare("bad payload length".to_string()))?;
    debug!(threshold, chunk_count, "recovering payload");

    let mut xs = Vec::with_capacity(threshold);
    for blob in &blobs[..threshold] {
        let blob = blob.as_ref();
        let other = BlobHeader::read(blob)?;
        if (other.length, other.padded_length, other.threshold)
            != (header.length, header.padded_length, header.threshold)
        {
            return Err(ShamirError::MalformedShare("blob headers disagree".to_string()));
        }
        if blob.len() != blob_len {
            return Err(ShamirError::MalformedShare("bad blob length".to_string()));
        }
        let x = u32::try_from(other.x)
            .map_err(|_| ShamirError::MalformedShare("x coordinate too large".to_string()))?;
        xs.push(x);
    }

    let mut out = Vec::with_capacity(blob_len - BLOB_HEADER_LEN);
    for chunk in 0..chunk_count {
        let start = BLOB_HEADER_LEN + chunk * width;
        let shares = blobs[..threshold]
            .iter()
            .zip(&xs)
            .map(|(blob, &x)| -> Result<Share, ShamirError> {
                let y = field.from_fixed_bytes(&blob.as_ref()[start..start + width])?;
                Ok(Share { x, y })
            })
            .collect::<Result<Vec<_>, ShamirError>>()?;
        let secret = recover_secret(field, threshold, &shares)?;
        let mut bytes = field.to_fixed_bytes(&secret);
        if bytes[0] != 0 {
            memzero(&mut bytes);
            memzero(&mut out);
            return Err(ShamirError::MalformedShare("chunk exceeds its width".to_string()));
        }
        out.extend_from_slice(&bytes[1..]);
        memzero(&mut bytes);
    }
    out.truncate(header.length as usize);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bc_rand::SecureRandomNumberGenerator;
    use num_bigint::BigUint;
    use rand::seq::SliceRandom;

    const PAYLOAD: &[u8] = b"Remember what the dormouse said. Feed your head, feed your head.";

    #[test]
    fn test_split_and_recover_bytes() {
        let field = PrimeField::curve25519();
        let mut rng = SecureRandomNumberGenerator;
        let blobs = split_bytes(&field, PAYLOAD, 5, 3, &mut rng).unwrap();
        assert_eq!(blobs.len(), 5);

        // 64 bytes in 31-byte chunks pad to 93 bytes, three chunks.
        for blob in &blobs {
            assert_eq!(blob.len(), BLOB_HEADER_LEN + 3 * 32);
        }
        assert_eq!(BlobHeader::read(&blobs[4]).unwrap(), BlobHeader {
            length: PAYLOAD.len() as u64,
            padded_length: 93,
            x: 5,
            threshold: 3,
        });

        assert_eq!(recover_bytes(&field, &blobs).unwrap(), PAYLOAD);
        let mut shuffled = blobs.clone();
        shuffled.shuffle(&mut rand::thread_rng());
        assert_eq!(recover_bytes(&field, &shuffled[..3]).unwrap(), PAYLOAD);
    }

    #[test]
    fn test_empty_payload() {
        let field = PrimeField::secp256k1();
        let mut rng = SecureRandomNumberGenerator;
        let blobs = split_bytes(&field, &[], 3, 2, &mut rng).unwrap();
        assert!(blobs.iter().all(|b| b.len() == BLOB_HEADER_LEN));
        assert!(recover_bytes(&field, &blobs[1..]).unwrap().is_empty());
    }

    #[test]
    fn test_payload_with_leading_zeros() {
        let field = PrimeField::secp256k1();
        let mut rng = SecureRandomNumberGenerator;
        let payload = hex::decode("000000ff00").unwrap();
        let blobs = split_bytes(&field, &payload, 2, 2, &mut rng).unwrap();
        assert_eq!(recover_bytes(&field, &blobs).unwrap(), payload);
    }

    #[test]
    fn test_not_enough_blobs() {
        let field = PrimeField::secp256k1();
        let mut rng = SecureRandomNumberGenerator;
        let blobs = split_bytes(&field, PAYLOAD, 4, 3, &mut rng).unwrap();
        assert!(matches!(
            recover_bytes(&field, &blobs[..2]),
            Err(ShamirError::ShareCountMismatch { expected: 3, actual: 2 })
        ));
        let none: [Vec<u8>; 0] = [];
        assert!(recover_bytes(&field, &none).is_err());
    }

    #[test]
    fn test_malformed_blobs() {
        let field = PrimeField::secp256k1();
        let mut rng = SecureRandomNumberGenerator;
        let mut blobs = split_bytes(&field, PAYLOAD, 3, 2, &mut rng).unwrap();

        assert!(matches!(
            recover_bytes(&field, &[vec![0u8; 4]]),
            Err(ShamirError::MalformedShare(_))
        ));

        blobs[1].pop();
        assert!(matches!(recover_bytes(&field, &blobs), Err(ShamirError::MalformedShare(_))));

        blobs[1] = blobs[0].clone();
        assert!(matches!(recover_bytes(&field, &blobs), Err(ShamirError::DivisionByZero)));
    }

    fn crafted_blob(length: u64, padded_length: u64, x: u64, threshold: u64, body: usize) -> Vec<u8> {
        let mut blob = Vec::new();
        BlobHeader { length, padded_length, x, threshold }.write(&mut blob);
        blob.resize(BLOB_HEADER_LEN + body, 0);
        blob
    }

    #[test]
    fn test_oversized_padded_length() {
        let field = PrimeField::curve25519();
        let blob = crafted_blob(1, ((1u64 << 59) + 1) * 31, 1, 1, 32);
        assert!(matches!(
            recover_bytes(&field, &[blob]),
            Err(ShamirError::MalformedShare(_))
        ));
        let blob = crafted_blob(1, 31 * 2, 1, 1, 32);
        assert!(matches!(
            recover_bytes(&field, &[blob]),
            Err(ShamirError::MalformedShare(_))
        ));
        let blob = crafted_blob(1, 31, 1, 1, 32);
        assert_eq!(recover_bytes(&field, &[blob]).unwrap(), vec![0]);
    }

    #[test]
    fn test_disagreeing_headers() {
        let field = PrimeField::secp256k1();
        let mut rng = SecureRandomNumberGenerator;
        let mut blobs = split_bytes(&field, PAYLOAD, 3, 2, &mut rng).unwrap();
        blobs[1][..BLOB_HEADER_FIELD_LEN].copy_from_slice(&3u64.to_be_bytes());
        let err = recover_bytes(&field, &blobs).unwrap_err();
        assert!(matches!(err, ShamirError::MalformedShare(ref m) if m == "blob headers disagree"));
    }

    #[test]
    fn test_x_coordinate_beyond_u32() {
        let field = PrimeField::secp256k1();
        let mut rng = SecureRandomNumberGenerator;
        let mut blobs = split_bytes(&field, PAYLOAD, 3, 2, &mut rng).unwrap();
        let x = 2 * BLOB_HEADER_FIELD_LEN;
        blobs[0][x..x + BLOB_HEADER_FIELD_LEN].copy_from_slice(&(1u64 << 32).to_be_bytes());
        let err = recover_bytes(&field, &blobs).unwrap_err();
        assert!(matches!(err, ShamirError::MalformedShare(ref m) if m == "x coordinate too large"));
    }

    #[test]
    fn test_invalid_parameters() {
        let field = PrimeField::secp256k1();
        let mut rng = SecureRandomNumberGenerator;
        assert!(matches!(
            split_bytes(&field, PAYLOAD, 2, 3, &mut rng),
            Err(ShamirError::InvalidThreshold { threshold: 3, share_count: 2 })
        ));
        let tiny = PrimeField::new(BigUint::from(251u32)).unwrap();
        assert!(matches!(
            split_bytes(&tiny, PAYLOAD, 3, 2, &mut rng),
            Err(ShamirError::InvalidModulus)
        ));
    }
}
