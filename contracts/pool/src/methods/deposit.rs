use lending_pool_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::{read_account, read_pool_state, write_account, write_pool_state};

use super::utils::validation::{require_not_paused, require_positive_amount};

pub fn deposit(env: &Env, who: &Address, amount: u64) -> Result<(), Error> {
    who.require_auth();

    require_not_paused(env);
    require_positive_amount(env, amount);

    let mut pool_state = read_pool_state(env)?;
    let mut account = read_account(env, who);

    account.deposit = account
        .deposit
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    account.last_update_time = env.ledger().timestamp();
    pool_state.total_deposits = pool_state
        .total_deposits
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    token::Client::new(env, &pool_state.asset).transfer(
        who,
        &env.current_contract_address(),
        &i128::from(amount),
    );

    write_account(env, who, &account);
    write_pool_state(env, &pool_state);

    event::deposit(env, who, amount);

    Ok(())
}
