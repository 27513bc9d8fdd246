use lending_pool_interface::types::error::Error;
use soroban_sdk::Env;

use crate::event;
use crate::storage::write_pool_state;

use super::utils::validation::require_owner;

/// Applies to every accrual computed from now on, including periods
/// already elapsed since an account's last checkpoint.
pub fn set_interest_rate(env: &Env, rate_bps: u32) -> Result<(), Error> {
    let mut pool_state = require_owner(env)?;

    pool_state.interest_rate_bps = rate_bps;
    write_pool_state(env, &pool_state);

    event::interest_rate_set(env, rate_bps);

    Ok(())
}
