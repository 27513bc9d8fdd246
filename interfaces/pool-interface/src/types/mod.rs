pub mod account_record;
pub mod error;
pub mod pool_state;
pub mod pool_stats;
