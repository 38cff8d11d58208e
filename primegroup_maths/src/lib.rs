//! A crate containing the number-theoretic building blocks used to construct prime-order groups: probabilistic
//! primality testing, random prime generation of an exact bit length and uniform big integer sampling.

pub mod prime;
pub mod sampling;

pub use num_bigint;
