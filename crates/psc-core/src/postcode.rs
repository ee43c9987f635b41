//! Postcode normalization for cache keys and file names.

/// Strip all whitespace from a postcode.
///
/// No case folding or format validation happens here: the geocoder accepts
/// free-text postcodes, and keys built from the normalized form must stay
/// byte-compatible with cache files written by earlier sweeps.
#[must_use]
pub fn normalize_postcode(postcode: &str) -> String {
    postcode.chars().filter(|c| !c.is_whitespace()).collect()
}
