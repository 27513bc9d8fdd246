#![deny(warnings)]
#![no_std]

mod interest;

pub use interest::*;

/// Percent representation, 1 bp - 1, 100% - 10_000
pub const PERCENTAGE_FACTOR: u32 = 10_000;

/// Seconds in year. Equal 365 * 24 * 60 * 60
pub const ONE_YEAR: u64 = 31_536_000;
