//! Stable per-field seed derivation.
//!
//! Every field owns an isolated generator whose seed combines the run's base
//! seed with an offset derived from the field name. The offset hash must be
//! identical across runs and platforms, otherwise corpus and query generation
//! silently diverge, so this module uses FNV-1a over the field name's UTF-8
//! bytes rather than any process-local hasher.

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// 64-bit FNV-1a hash.
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Derive the sampler seed for a field: `base_seed + (fnv1a(name) mod 2^31)`.
///
/// Both the document generator and the query generator derive field seeds
/// through this function, which is what makes their per-field samplers
/// bit-identical for a shared catalog and base seed.
pub fn field_seed(base_seed: u64, field_name: &str) -> u64 {
    base_seed.wrapping_add(fnv1a_64(field_name.as_bytes()) % (1 << 31))
}
