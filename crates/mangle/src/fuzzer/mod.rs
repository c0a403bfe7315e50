//! Combination iterators that expand a prototype into payloads.

mod iterator;
mod odometer;

pub use iterator::{BigIntFuzzer, Fuzzer};
