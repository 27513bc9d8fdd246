#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Address, Env};
use types::account_record::AccountRecord;
use types::error::Error;
use types::pool_state::PoolState;
use types::pool_stats::PoolStats;

pub mod types;

pub struct Spec;

/// Interface for LendingPool
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "LendingPoolClient")]
pub trait LendingPoolTrait {
    fn initialize(env: Env, owner: Address, asset: Address, rate_bps: u32) -> Result<(), Error>;

    fn version() -> u32;

    fn set_interest_rate(env: Env, rate_bps: u32) -> Result<(), Error>;

    fn set_pause(env: Env, value: bool) -> Result<(), Error>;

    fn paused(env: Env) -> bool;

    fn deposit(env: Env, who: Address, amount: u64) -> Result<(), Error>;

    fn withdraw(env: Env, who: Address, amount: u64) -> Result<u64, Error>;

    fn borrow(env: Env, who: Address, amount: u64) -> Result<(), Error>;

    fn repay(env: Env, who: Address) -> Result<u64, Error>;

    fn fund_reserve(env: Env, who: Address, amount: u64) -> Result<(), Error>;

    fn calculate_interest(env: Env, principal: u64, elapsed_secs: u64) -> Result<u64, Error>;

    fn pool_stats(env: Env) -> Result<PoolStats, Error>;

    fn pool_state(env: Env) -> Result<PoolState, Error>;

    fn user_position(env: Env, who: Address) -> AccountRecord;
}
