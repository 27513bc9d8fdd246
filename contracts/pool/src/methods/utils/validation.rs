use lending_pool_interface::types::account_record::AccountRecord;
use lending_pool_interface::types::error::Error;
use lending_pool_interface::types::pool_state::PoolState;
use soroban_sdk::{assert_with_error, panic_with_error, Env};

use crate::storage::{has_pool_state, paused, read_pool_state};

pub fn require_not_initialized(env: &Env) {
    if has_pool_state(env) {
        panic_with_error!(env, Error::AlreadyInitialized);
    }
}

pub fn require_owner(env: &Env) -> Result<PoolState, Error> {
    let pool_state = read_pool_state(env)?;
    pool_state.owner.require_auth();
    Ok(pool_state)
}

pub fn require_not_paused(env: &Env) {
    assert_with_error!(env, !paused(env), Error::Paused);
}

pub fn require_positive_amount(env: &Env, amount: u64) {
    assert_with_error!(env, amount > 0, Error::InvalidAmount);
}

pub fn require_enough_deposit(env: &Env, account: &AccountRecord, amount: u64) {
    assert_with_error!(
        env,
        account.deposit >= amount,
        Error::InsufficientBalance
    );
}

/// Check that total_borrowed + amount <= total_deposits
pub fn require_liquidity_for_borrow(
    env: &Env,
    pool_state: &PoolState,
    amount: u64,
) -> Result<(), Error> {
    let borrowed_after = pool_state
        .total_borrowed
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    assert_with_error!(
        env,
        borrowed_after <= pool_state.total_deposits,
        Error::InsufficientLiquidity
    );

    Ok(())
}

/// Check that total_borrowed <= total_deposits - amount
pub fn require_liquidity_for_withdraw(env: &Env, pool_state: &PoolState, amount: u64) {
    let available = pool_state.available_liquidity().unwrap_or(0);

    assert_with_error!(env, amount <= available, Error::InsufficientLiquidity);
}

pub fn require_interest_reserve(env: &Env, pool_state: &PoolState, interest: u64) {
    assert_with_error!(
        env,
        interest <= pool_state.interest_reserve,
        Error::InsufficientInterestReserve
    );
}

pub fn require_debt(env: &Env, account: &AccountRecord) {
    assert_with_error!(env, account.borrowed > 0, Error::NoOutstandingDebt);
}
