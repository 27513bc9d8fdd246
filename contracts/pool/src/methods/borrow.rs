use lending_pool_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::{read_account, read_pool_state, write_account, write_pool_state};

use super::utils::validation::{
    require_liquidity_for_borrow, require_not_paused, require_positive_amount,
};

/// Uncollateralized: the pool only checks that it holds enough idle deposits.
pub fn borrow(env: &Env, who: &Address, amount: u64) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let mut pool_state = read_pool_state(env)?;
    require_liquidity_for_borrow(env, &pool_state, amount)?;

    let mut account = read_account(env, who);
    account.borrowed = account
        .borrowed
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    account.last_update_time = env.ledger().timestamp();
    pool_state.total_borrowed = pool_state
        .total_borrowed
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    write_account(env, who, &account);
    write_pool_state(env, &pool_state);

    token::Client::new(env, &pool_state.asset).transfer(
        &env.current_contract_address(),
        who,
        &i128::from(amount),
    );

    event::borrow(env, who, amount);

    Ok(())
}
