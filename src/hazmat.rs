use bc_crypto::memzero;
use bc_rand::RandomNumberGenerator;
use num_bigint::BigUint;
use num_traits::One;

/// Computes `base^exponent mod modulus` by square-and-multiply, scanning
/// the exponent from its least significant bit.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    let mut result = BigUint::one() % modulus;
    let mut square = base % modulus;
    for bit in 0..exponent.bits() {
        if exponent.bit(bit) {
            result = (&result * &square) % modulus;
        }
        square = (&square * &square) % modulus;
    }
    result
}

/// Draws an integer uniformly from `[0, modulus)`.
///
/// Random bytes are drawn at the width of the modulus, the bits above its
/// bit length are masked off, and draws that land at or above the modulus
/// are rejected. At least half of all draws are accepted.
pub fn random_below(rng: &mut impl RandomNumberGenerator, modulus: &BigUint) -> BigUint {
    let bits = modulus.bits();
    let byte_len = bits.div_ceil(8) as usize;
    let excess = byte_len as u64 * 8 - bits;
    let mask = 0xffu8 >> excess;

    let mut buf = vec![0u8; byte_len];
    loop {
        rng.fill_random_data(&mut buf);
        buf[0] &= mask;
        let candidate = BigUint::from_bytes_be(&buf);
        if &candidate < modulus {
            memzero(&mut buf);
            return candidate;
        }
    }
}
