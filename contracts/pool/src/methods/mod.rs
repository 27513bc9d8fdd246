pub mod borrow;
pub mod calculate_interest;
pub mod deposit;
pub mod fund_reserve;
pub mod initialize;
pub mod pool_stats;
pub mod repay;
pub mod set_interest_rate;
pub mod set_pause;
pub mod withdraw;

mod utils;
