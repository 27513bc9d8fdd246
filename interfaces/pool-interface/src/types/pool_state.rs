use soroban_sdk::{contracttype, Address};

#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct PoolState {
    pub owner: Address,
    /// Token lent out and paid back by the pool
    pub asset: Address,
    pub interest_rate_bps: u32,
    pub total_deposits: u64,
    pub total_borrowed: u64,
    /// Funds set aside for depositor interest payouts
    pub interest_reserve: u64,
}

impl PoolState {
    pub fn new(owner: Address, asset: Address, interest_rate_bps: u32) -> Self {
        Self {
            owner,
            asset,
            interest_rate_bps,
            total_deposits: 0,
            total_borrowed: 0,
            interest_reserve: 0,
        }
    }

    /// Deposits not lent out
    pub fn available_liquidity(&self) -> Option<u64> {
        self.total_deposits.checked_sub(self.total_borrowed)
    }
}
