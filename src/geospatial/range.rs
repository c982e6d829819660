//! Turns a geohash bit prefix into a contiguous key range.

use super::geohash::{char_index, validate_geohash, BASE32};
use super::precision::{BITS_PER_CHAR, MAX_BITS_PRECISION};
use crate::error::{Error, Result};
use crate::key::{KeyRange, RANGE_SENTINEL};

/// Characters needed to hold `bits` bits.
#[inline]
pub fn precision_for_bits(bits: u32) -> usize {
    bits.div_ceil(BITS_PER_CHAR) as usize
}

/// Range of every geohash that shares the first `bits` bits of `geohash`.
///
/// A geohash shorter than the bit count covers is treated as a plain prefix.
/// When the masked last character is already the top of the alphabet the
/// upper bound becomes `base + '~'`.
pub fn geohash_range(geohash: &str, bits: u32) -> Result<KeyRange> {
    validate_geohash(geohash)?;
    if bits == 0 || bits > MAX_BITS_PRECISION {
        return Err(Error::InvalidBits(bits));
    }
    Ok(range_unchecked(geohash, bits))
}

/// [`geohash_range`] for inputs already known to be well formed: a non-empty
/// ASCII geohash drawn from the alphabet and `bits >= 1`.
pub(crate) fn range_unchecked(geohash: &str, bits: u32) -> KeyRange {
    let precision = precision_for_bits(bits);
    if geohash.len() < precision {
        return KeyRange::prefix(geohash);
    }

    let hash = &geohash[..precision];
    let (base, last) = hash.split_at(precision - 1);
    let last_value = last.bytes().next().and_then(char_index).unwrap_or(0);

    let significant_bits = bits - base.len() as u32 * BITS_PER_CHAR;
    let unused_bits = BITS_PER_CHAR - significant_bits;

    let start_value = (last_value >> unused_bits) << unused_bits;
    let end_value = start_value + (1 << unused_bits);

    let mut start = String::with_capacity(precision);
    start.push_str(base);
    start.push(BASE32[start_value] as char);

    let mut end = String::with_capacity(precision);
    end.push_str(base);
    if end_value > 31 {
        end.push(RANGE_SENTINEL);
    } else {
        end.push(BASE32[end_value] as char);
    }

    KeyRange { start, end }
}
