#![deny(warnings)]
#![no_std]

use lending_pool_interface::types::{
    account_record::AccountRecord, error::Error, pool_state::PoolState, pool_stats::PoolStats,
};
use lending_pool_interface::LendingPoolTrait;
use methods::{
    borrow::borrow, calculate_interest::calculate_interest, deposit::deposit,
    fund_reserve::fund_reserve, initialize::initialize, pool_stats::pool_stats, repay::repay,
    set_interest_rate::set_interest_rate, set_pause::set_pause, withdraw::withdraw,
};
use soroban_sdk::{contract, contractimpl, Address, Env};

use crate::storage::*;

mod event;
mod methods;
mod storage;
#[cfg(test)]
mod tests;

#[contract]
pub struct LendingPool;

#[contractimpl]
impl LendingPoolTrait for LendingPool {
    fn initialize(env: Env, owner: Address, asset: Address, rate_bps: u32) -> Result<(), Error> {
        initialize(&env, &owner, &asset, rate_bps)
    }

    fn version() -> u32 {
        1
    }

    fn set_interest_rate(env: Env, rate_bps: u32) -> Result<(), Error> {
        set_interest_rate(&env, rate_bps)
    }

    fn set_pause(env: Env, value: bool) -> Result<(), Error> {
        set_pause(&env, value)
    }

    fn paused(env: Env) -> bool {
        paused(&env)
    }

    fn deposit(env: Env, who: Address, amount: u64) -> Result<(), Error> {
        deposit(&env, &who, amount)
    }

    fn withdraw(env: Env, who: Address, amount: u64) -> Result<u64, Error> {
        withdraw(&env, &who, amount)
    }

    fn borrow(env: Env, who: Address, amount: u64) -> Result<(), Error> {
        borrow(&env, &who, amount)
    }

    fn repay(env: Env, who: Address) -> Result<u64, Error> {
        repay(&env, &who)
    }

    fn fund_reserve(env: Env, who: Address, amount: u64) -> Result<(), Error> {
        fund_reserve(&env, &who, amount)
    }

    fn calculate_interest(env: Env, principal: u64, elapsed_secs: u64) -> Result<u64, Error> {
        calculate_interest(&env, principal, elapsed_secs)
    }

    fn pool_stats(env: Env) -> Result<PoolStats, Error> {
        pool_stats(&env)
    }

    fn pool_state(env: Env) -> Result<PoolState, Error> {
        read_pool_state(&env)
    }

    fn user_position(env: Env, who: Address) -> AccountRecord {
        read_account(&env, &who)
    }
}
