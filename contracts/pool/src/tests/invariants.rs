#![cfg(test)]
extern crate std;

use crate::tests::sut::{assert_invariants, init_pool, set_time, DAY, YEAR};
use crate::*;
use soroban_sdk::testutils::Address as _;

#[test]
fn should_hold_across_accounts() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let carol = Address::generate(&env);
    let accounts = [alice.clone(), bob.clone(), carol.clone()];

    sut.fund_reserve(10_000);
    assert_invariants(&sut, &accounts);

    set_time(&env, DAY);
    sut.deposit(&alice, 5_000);
    assert_invariants(&sut, &accounts);

    sut.deposit(&bob, 3_000);
    assert_invariants(&sut, &accounts);

    set_time(&env, 10 * DAY);
    sut.pool.borrow(&carol, &6_000);
    assert_invariants(&sut, &accounts);

    sut.pool.borrow(&alice, &1_500);
    assert_invariants(&sut, &accounts);

    assert!(sut.pool.try_borrow(&bob, &501).is_err());
    assert_invariants(&sut, &accounts);

    set_time(&env, 40 * DAY);
    assert!(sut.pool.try_withdraw(&bob, &3_000).is_err());
    sut.pool.withdraw(&bob, &500);
    assert_invariants(&sut, &accounts);

    set_time(&env, 100 * DAY);
    sut.mint(&carol, 1_000);
    sut.pool.repay(&carol);
    assert_invariants(&sut, &accounts);

    sut.pool.withdraw(&bob, &2_500);
    assert_invariants(&sut, &accounts);

    set_time(&env, 200 * DAY);
    sut.mint(&alice, 1_000);
    sut.pool.repay(&alice);
    sut.pool.withdraw(&alice, &5_000);
    assert_invariants(&sut, &accounts);

    let state = sut.pool.pool_state();
    assert_eq!(state.total_deposits, 0);
    assert_eq!(state.total_borrowed, 0);
    assert_eq!(sut.pool_balance(), i128::from(state.interest_reserve));
}

#[test]
fn should_fund_depositor_interest_from_borrower_interest() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let lender = Address::generate(&env);
    let borrower = Address::generate(&env);

    sut.deposit(&lender, 1_000);
    sut.pool.borrow(&borrower, &1_000);
    assert_eq!(sut.pool.pool_stats().utilization_bps, 10_000);

    set_time(&env, YEAR);
    sut.mint(&borrower, 50);
    assert_eq!(sut.pool.repay(&borrower), 1_050);
    assert_eq!(sut.pool.pool_state().interest_reserve, 50);

    assert_eq!(sut.pool.withdraw(&lender, &1_000), 1_050);
    assert_eq!(sut.token.balance(&lender), 1_050);
    assert_eq!(sut.pool_balance(), 0);
    assert_invariants(&sut, &[lender, borrower]);
}

#[test]
fn should_cycle_account_states() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);
    let lender = Address::generate(&env);
    let user = Address::generate(&env);

    sut.deposit(&lender, 10_000);

    for round in 1..=3u64 {
        set_time(&env, round * DAY);

        sut.deposit(&user, 100);
        sut.pool.borrow(&user, &50);
        sut.pool.withdraw(&user, &100);
        sut.pool.repay(&user);

        assert!(sut.pool.user_position(&user).is_empty());
        assert_invariants(&sut, &[lender.clone(), user.clone()]);
    }
}
