use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 0,
    Uninitialized = 1,
    Paused = 2,

    InvalidAmount = 100,
    InsufficientBalance = 101,
    InsufficientLiquidity = 102,
    NoOutstandingDebt = 103,
    InsufficientInterestReserve = 104,

    ArithmeticOverflow = 400,
}
