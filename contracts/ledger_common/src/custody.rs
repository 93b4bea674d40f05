//! Moves the ledger's asset in and out of the contract's own account.
//!
//! The asset is any SEP-41 token. A failed transfer (missing balance or
//! authorization) panics inside the token contract, which aborts the whole
//! invocation and rolls back every write the caller made before it.

use soroban_sdk::{token, Address, Env};

/// Pull `amount` from `from` into the contract's custody account.
pub fn transfer_in(env: &Env, token: &Address, from: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    token::Client::new(env, token).transfer(from, &env.current_contract_address(), &amount);
}

/// Pay `amount` out of custody to `to`.
pub fn transfer_out(env: &Env, token: &Address, to: &Address, amount: i128) {
    if amount == 0 {
        return;
    }
    token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
}

/// Balance held by the contract's custody account.
pub fn custody_balance(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}

