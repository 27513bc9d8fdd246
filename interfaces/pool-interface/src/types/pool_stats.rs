use soroban_sdk::contracttype;

#[derive(Debug, Clone, PartialEq, Eq)]
#[contracttype]
pub struct PoolStats {
    pub total_deposits: u64,
    pub total_borrowed: u64,
    pub interest_rate_bps: u32,
    pub utilization_bps: u32,
}
