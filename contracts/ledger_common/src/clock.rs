use soroban_sdk::Env;

pub const DAY: u64 = 24 * 60 * 60;
pub const WEEK: u64 = 7 * DAY;

/// Current ledger time in seconds.
pub fn now(env: &Env) -> u64 {
    env.ledger().timestamp()
}

/// Seconds elapsed since `since`, saturating at zero.
pub fn elapsed_since(env: &Env, since: u64) -> u64 {
    now(env).saturating_sub(since)
}
