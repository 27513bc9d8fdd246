use common::calc_interest;
use lending_pool_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::{read_account, read_pool_state, write_account, write_pool_state};

use super::utils::get_elapsed_time::get_elapsed_time;
use super::utils::validation::{
    require_enough_deposit, require_interest_reserve, require_liquidity_for_withdraw,
    require_not_paused, require_positive_amount,
};

/// Returns the amount paid out: withdrawn principal plus interest earned
/// on the whole deposit since the last checkpoint.
pub fn withdraw(env: &Env, who: &Address, amount: u64) -> Result<u64, Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let mut pool_state = read_pool_state(env)?;
    let mut account = read_account(env, who);
    require_enough_deposit(env, &account, amount);
    require_liquidity_for_withdraw(env, &pool_state, amount);

    let (current_time, elapsed_time) = get_elapsed_time(env, account.last_update_time);
    let interest_earned = calc_interest(
        account.deposit,
        pool_state.interest_rate_bps,
        elapsed_time,
    )
    .ok_or(Error::ArithmeticOverflow)?;
    require_interest_reserve(env, &pool_state, interest_earned);

    let payout = amount
        .checked_add(interest_earned)
        .ok_or(Error::ArithmeticOverflow)?;

    account.deposit = account
        .deposit
        .checked_sub(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    account.last_update_time = current_time;
    pool_state.total_deposits = pool_state
        .total_deposits
        .checked_sub(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    pool_state.interest_reserve = pool_state
        .interest_reserve
        .checked_sub(interest_earned)
        .ok_or(Error::ArithmeticOverflow)?;

    write_account(env, who, &account);
    write_pool_state(env, &pool_state);

    token::Client::new(env, &pool_state.asset).transfer(
        &env.current_contract_address(),
        who,
        &i128::from(payout),
    );

    event::withdraw(env, who, amount, interest_earned);

    Ok(payout)
}
