use soroban_fixed_point_math::FixedPoint;

use crate::{ONE_YEAR, PERCENTAGE_FACTOR};

/// Denominator of the annual simple interest formula: 10_000 bps * one year
pub const INTEREST_DENOMINATOR: u64 = PERCENTAGE_FACTOR as u64 * ONE_YEAR;

/// Simple (non-compounding) interest accrued on `principal` over `elapsed_secs`
/// at an annual rate of `rate_bps` basis points.
///
/// `floor(principal * rate_bps * elapsed_secs / (10_000 * ONE_YEAR))`
///
/// Every product is taken in i128, so None means the result doesn't fit u64.
pub fn calc_interest(principal: u64, rate_bps: u32, elapsed_secs: u64) -> Option<u64> {
    if principal == 0 || rate_bps == 0 || elapsed_secs == 0 {
        return Some(0);
    }

    // u32 * u64 stays below 2^96
    let rate_time = i128::from(rate_bps) * i128::from(elapsed_secs);

    let interest = i128::from(principal).fixed_mul_floor(
        rate_time,
        i128::from(INTEREST_DENOMINATOR),
    )?;

    u64::try_from(interest).ok()
}

/// Share of `total_deposits` currently lent out, in basis points.
/// Zero for an empty pool.
pub fn calc_utilization(total_borrowed: u64, total_deposits: u64) -> Option<u32> {
    if total_deposits == 0 {
        return Some(0);
    }

    let utilization = i128::from(total_borrowed).fixed_mul_floor(
        i128::from(PERCENTAGE_FACTOR),
        i128::from(total_deposits),
    )?;

    u32::try_from(utilization).ok()
}
