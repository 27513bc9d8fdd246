mod invariants;
mod pool_stats;
