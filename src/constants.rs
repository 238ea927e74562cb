/// Order of the secp256k1 group, big-endian.
pub const SECP256K1_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b,
    0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// 2^255 - 19, big-endian.
pub const CURVE25519_PRIME: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xed,
];

pub const MIN_MODULUS: u32 = 3;
pub const MAX_SHARE_COUNT: usize = u32::MAX as usize;

// Blob header: length, padded length, x, threshold. Each a big-endian u64.
pub const BLOB_HEADER_FIELD_LEN: usize = 8;
pub const BLOB_HEADER_LEN: usize = 4 * BLOB_HEADER_FIELD_LEN;
