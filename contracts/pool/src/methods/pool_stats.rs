use common::calc_utilization;
use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::pool_stats::PoolStats;
use soroban_sdk::Env;

use crate::storage::read_pool_state;

pub fn pool_stats(env: &Env) -> Result<PoolStats, Error> {
    let pool_state = read_pool_state(env)?;

    let utilization_bps = calc_utilization(pool_state.total_borrowed, pool_state.total_deposits)
        .ok_or(Error::ArithmeticOverflow)?;

    Ok(PoolStats {
        total_deposits: pool_state.total_deposits,
        total_borrowed: pool_state.total_borrowed,
        interest_rate_bps: pool_state.interest_rate_bps,
        utilization_bps,
    })
}
