//! Key recovery searches
//!
//! Both searches are pure functions of (ciphertext, alphabet, reference
//! tables) returning ranked candidate sequences; any per-trial failure drops
//! that trial and the enumeration continues.

pub mod affine;
pub mod substitution;
