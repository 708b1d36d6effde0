//! PIN hashing.

pub mod hasher;

pub use hasher::PinHasher;
