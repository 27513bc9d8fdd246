use soroban_sdk::contracttype;

/// Per-account position. A zeroed record means "no position".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[contracttype]
pub struct AccountRecord {
    pub deposit: u64,
    pub borrowed: u64,
    /// Accrual checkpoint, ledger timestamp of the last balance-affecting call
    pub last_update_time: u64,
}

impl AccountRecord {
    pub fn is_empty(&self) -> bool {
        self.deposit == 0 && self.borrowed == 0
    }
}
