use soroban_sdk::Env;

/// Returns (current_time, elapsed_time)
pub fn get_elapsed_time(env: &Env, last_update_time: u64) -> (u64, u64) {
    let current_time = env.ledger().timestamp();

    current_time
        .checked_sub(last_update_time)
        .map_or((current_time, 0), |el| (current_time, el))
}
