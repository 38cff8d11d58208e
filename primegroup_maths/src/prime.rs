//! This module defines the trait `PrimeGenerator` for randomly generating primes of a given size and a default
//! implementation backed by `num_bigint_dig::RandPrime`.

use num::BigUint;
use num_bigint_dig::RandPrime;
use rand::{CryptoRng, RngCore};

use crate::prime_test::{from_dig, MillerRabin, PrimeTest};

/// This trait defines a function to randomly generate a prime number of a given size
pub trait PrimeGenerator {
    /// Generate a random prime with exactly `bit_size` bits. Returns `None` if no prime of that size exists, which
    /// is the case for `bit_size < 2`.
    fn generate_random_prime<R>(&self, rng: &mut R, bit_size: u64) -> Option<BigUint>
    where
        R: RngCore + CryptoRng;
}

/// Draws primes of the requested size with `RandPrime::gen_prime` and accepts the first one that also passes the
/// primality test `T`, so the configured test strength applies to generated primes as well.
#[derive(Clone, Debug, Default)]
pub struct ProbablePrimeGenerator<T = MillerRabin> {
    test: T,
}

impl<T> ProbablePrimeGenerator<T>
where
    T: PrimeTest,
{
    pub fn new(test: T) -> Self {
        ProbablePrimeGenerator { test }
    }

    pub fn prime_test(&self) -> &T {
        &self.test
    }
}

impl<T> PrimeGenerator for ProbablePrimeGenerator<T>
where
    T: PrimeTest,
{
    fn generate_random_prime<R>(&self, rng: &mut R, bit_size: u64) -> Option<BigUint>
    where
        R: RngCore + CryptoRng,
    {
        if bit_size < 2 {
            return None;
        }

        loop {
            let candidate = from_dig(&rng.gen_prime(bit_size as usize));
            if candidate.bits() == bit_size && self.test.is_prime(&candidate) {
                return Some(candidate);
            }
        }
    }
}
