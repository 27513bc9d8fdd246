use common::calc_interest;
use lending_pool_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::{read_account, read_pool_state, write_account, write_pool_state};

use super::utils::get_elapsed_time::get_elapsed_time;
use super::utils::validation::require_debt;

/// Full repayment of principal plus interest owed since the last checkpoint.
/// Principal leaves `total_borrowed`, interest goes to the interest reserve.
/// Returns the amount collected from `who`.
pub fn repay(env: &Env, who: &Address) -> Result<u64, Error> {
    who.require_auth();

    let mut pool_state = read_pool_state(env)?;
    let mut account = read_account(env, who);
    require_debt(env, &account);

    let (current_time, elapsed_time) = get_elapsed_time(env, account.last_update_time);
    let principal = account.borrowed;
    let interest_owed = calc_interest(principal, pool_state.interest_rate_bps, elapsed_time)
        .ok_or(Error::ArithmeticOverflow)?;
    let total_owed = principal
        .checked_add(interest_owed)
        .ok_or(Error::ArithmeticOverflow)?;

    account.borrowed = 0;
    account.last_update_time = current_time;
    pool_state.total_borrowed = pool_state
        .total_borrowed
        .checked_sub(principal)
        .ok_or(Error::ArithmeticOverflow)?;
    pool_state.interest_reserve = pool_state
        .interest_reserve
        .checked_add(interest_owed)
        .ok_or(Error::ArithmeticOverflow)?;

    token::Client::new(env, &pool_state.asset).transfer(
        who,
        &env.current_contract_address(),
        &i128::from(total_owed),
    );

    write_account(env, who, &account);
    write_pool_state(env, &pool_state);

    event::repay(env, who, principal, interest_owed);

    Ok(total_owed)
}
