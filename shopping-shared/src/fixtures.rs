/// Random test data
///
/// Every generator takes the random source explicitly, so tests can use a
/// seeded RNG and reproduce a failing run.

use rand::Rng;

use crate::models::product::PRODUCT_SIZES;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Random integer in `min..=max`
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

/// Random lowercase ASCII string of length `n`
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, n: usize) -> String {
    (0..n)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}

/// Random 8 letter name
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use shopping_shared::fixtures;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let name = fixtures::random_name(&mut rng);
/// assert_eq!(name.len(), 8);
/// ```
pub fn random_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    random_string(rng, 8)
}

/// Random `@example.com` address
pub fn random_email<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}@example.com", random_string(rng, 6))
}

/// One of S, M, L, XL
pub fn random_product_size<R: Rng + ?Sized>(rng: &mut R) -> String {
    PRODUCT_SIZES[rng.gen_range(0..PRODUCT_SIZES.len())].to_string()
}

/// Weight in grams, 500..=2500
pub fn random_product_weight<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    random_int(rng, 500, 2500)
}

/// Price in minor units, 5000..=250000
pub fn random_product_price<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    random_int(rng, 5000, 250_000)
}

/// Category ID in 1..=10; assumes ten categories have been seeded
pub fn random_category_id<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    random_int(rng, 1, 10)
}
