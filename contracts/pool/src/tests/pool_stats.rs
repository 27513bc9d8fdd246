#![cfg(test)]
extern crate std;

use crate::tests::sut::{init_pool, RATE_BPS};
use crate::*;
use soroban_sdk::testutils::Address as _;

#[test]
fn should_be_zero_for_empty_pool() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_pool(&env);

    assert_eq!(
        sut.pool.pool_stats(),
        PoolStats {
            total_deposits: 0,
            total_borrowed: 0,
            interest_rate_bps: RATE_BPS,
            utilization_bps: 0,
        }
    );
}

#[test]
fn should_track_utilization() {
    let env = Env::default();
    env.mock_all_auths();

    let lender = Address::generate(&env);
    let borrower = Address::generate(&env);
    let sut = init_pool(&env);

    sut.deposit(&lender, 4_000);
    assert_eq!(sut.pool.pool_stats().utilization_bps, 0);

    sut.pool.borrow(&borrower, &1_000);
    let stats = sut.pool.pool_stats();
    assert_eq!(stats.total_deposits, 4_000);
    assert_eq!(stats.total_borrowed, 1_000);
    assert_eq!(stats.utilization_bps, 2_500);

    sut.pool.borrow(&borrower, &3_000);
    assert_eq!(sut.pool.pool_stats().utilization_bps, 10_000);

    sut.pool.repay(&borrower);
    assert_eq!(sut.pool.pool_stats().utilization_bps, 0);
}

#[test]
fn should_round_utilization_down() {
    let env = Env::default();
    env.mock_all_auths();

    let lender = Address::generate(&env);
    let borrower = Address::generate(&env);
    let sut = init_pool(&env);

    sut.deposit(&lender, 3);
    sut.pool.borrow(&borrower, &2);

    assert_eq!(sut.pool.pool_stats().utilization_bps, 6_666);
}
