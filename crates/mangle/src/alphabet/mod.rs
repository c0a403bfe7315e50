//! Named token alphabets for template substitution.
//!
//! A sibling catalog to the fuzzer prototypes: short named alphabets of
//! literal elements, loaded from a second flat-text resource with the same
//! defensive scanning rules but a different header shape.

mod generator;
mod parser;

pub use generator::{Alphabet, Alphabets};
