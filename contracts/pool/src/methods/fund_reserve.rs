use lending_pool_interface::types::error::Error;
use soroban_sdk::{token, Address, Env};

use crate::event;
use crate::storage::{read_pool_state, write_pool_state};

use super::utils::validation::require_positive_amount;

pub fn fund_reserve(env: &Env, who: &Address, amount: u64) -> Result<(), Error> {
    who.require_auth();

    require_positive_amount(env, amount);

    let mut pool_state = read_pool_state(env)?;
    pool_state.interest_reserve = pool_state
        .interest_reserve
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;

    token::Client::new(env, &pool_state.asset).transfer(
        who,
        &env.current_contract_address(),
        &i128::from(amount),
    );

    write_pool_state(env, &pool_state);

    event::reserve_funded(env, who, amount);

    Ok(())
}
