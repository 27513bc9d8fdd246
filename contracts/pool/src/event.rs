use soroban_sdk::{symbol_short, Address, Env, Symbol};

pub(crate) fn initialized(e: &Env, owner: &Address, asset: &Address, rate_bps: u32) {
    let topics = (Symbol::new(e, "initialize"), owner, asset);
    e.events().publish(topics, rate_bps);
}

pub(crate) fn interest_rate_set(e: &Env, rate_bps: u32) {
    let topics = (Symbol::new(e, "interest_rate_set"),);
    e.events().publish(topics, rate_bps);
}

pub(crate) fn pause(e: &Env, value: bool) {
    let topics = (symbol_short!("pause"),);
    e.events().publish(topics, value);
}

pub(crate) fn deposit(e: &Env, who: &Address, amount: u64) {
    let topics = (symbol_short!("deposit"), who.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn withdraw(e: &Env, who: &Address, amount: u64, interest: u64) {
    let topics = (symbol_short!("withdraw"), who.clone());
    e.events().publish(topics, (amount, interest));
}

pub(crate) fn borrow(e: &Env, who: &Address, amount: u64) {
    let topics = (symbol_short!("borrow"), who.clone());
    e.events().publish(topics, amount);
}

pub(crate) fn repay(e: &Env, who: &Address, principal: u64, interest: u64) {
    let topics = (symbol_short!("repay"), who.clone());
    e.events().publish(topics, (principal, interest));
}

pub(crate) fn reserve_funded(e: &Env, who: &Address, amount: u64) {
    let topics = (Symbol::new(e, "reserve_funded"), who.clone());
    e.events().publish(topics, amount);
}
