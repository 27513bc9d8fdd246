use common::calc_interest;
use lending_pool_interface::types::error::Error;
use soroban_sdk::Env;

use crate::storage::read_pool_state;

pub fn calculate_interest(env: &Env, principal: u64, elapsed_secs: u64) -> Result<u64, Error> {
    let pool_state = read_pool_state(env)?;

    calc_interest(principal, pool_state.interest_rate_bps, elapsed_secs)
        .ok_or(Error::ArithmeticOverflow)
}
