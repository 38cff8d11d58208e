//! Uniform sampling of big integers. All functions take the random number generator explicitly, so callers decide
//! whether they want a reproducible seeded generator or one seeded from system entropy.

use num::{BigUint, One, Zero};
use num_bigint::RandBigInt;
use rand::{CryptoRng, RngCore};

/// Generate a uniformly random integer with exactly `bits` bits, that is a value in `[2^(bits-1), 2^bits)`. For
/// `bits == 0` the only such value is zero.
///
/// # Parameters
/// - `rng` a cryptographically secure random number generator
/// - `bits` the exact bit length of the generated number
pub fn random_of_bit_length<R>(rng: &mut R, bits: u64) -> BigUint
where
    R: RngCore + CryptoRng,
{
    if bits == 0 {
        return BigUint::zero();
    }

    let candidate = rng.gen_biguint(bits - 1);
    candidate | (BigUint::one() << (bits - 1))
}

/// Generate a uniformly random integer in `[0, bound)`. Returns zero if `bound` is zero.
pub fn random_below<R>(rng: &mut R, bound: &BigUint) -> BigUint
where
    R: RngCore + CryptoRng,
{
    if bound.is_zero() {
        return BigUint::zero();
    }
    rng.gen_biguint_below(bound)
}

/// Generate a uniformly random integer in `[1, upper]`. Returns one if `upper` is zero.
pub fn random_in_one_to<R>(rng: &mut R, upper: &BigUint) -> BigUint
where
    R: RngCore + CryptoRng,
{
    random_below(rng, upper) + BigUint::one()
}
