use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::pool_state::PoolState;
use soroban_sdk::{Address, Env};

use crate::event;
use crate::storage::{write_pause, write_pool_state};

use super::utils::validation::require_not_initialized;

pub fn initialize(env: &Env, owner: &Address, asset: &Address, rate_bps: u32) -> Result<(), Error> {
    require_not_initialized(env);
    owner.require_auth();

    write_pool_state(env, &PoolState::new(owner.clone(), asset.clone(), rate_bps));
    write_pause(env, false);

    event::initialized(env, owner, asset, rate_bps);

    Ok(())
}
