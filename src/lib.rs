#![no_std]

extern crate alloc;

pub mod affine;
pub mod alphabet;
pub mod modular;
pub mod ngram;
pub mod recover;
pub mod score;
pub mod substitution;

#[cfg(test)]
mod tests {}
