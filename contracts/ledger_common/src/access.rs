use soroban_sdk::{Address, Env};

/// Strkey of the account whose public key is all zero bytes. Nothing can
/// sign for it, so it is never a valid grantee.
pub const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

/// The single privileged administrator of a contract.
///
/// Contracts load it from their own storage and ask it whether a caller may
/// perform a privileged operation; nothing about the administrator lives in
/// global state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminCapability {
    admin: Address,
}

impl AdminCapability {
    pub fn new(admin: Address) -> Self {
        Self { admin }
    }

    pub fn admin(&self) -> &Address {
        &self.admin
    }

    pub fn is_admin(&self, caller: &Address) -> bool {
        &self.admin == caller
    }

    /// Checks identity first and only then demands the caller's signature,
    /// so an impostor is rejected without an auth prompt.
    pub fn authorize(&self, caller: &Address) -> bool {
        if !self.is_admin(caller) {
            return false;
        }
        caller.require_auth();
        true
    }
}

/// Returns `true` for the all-zero account.
pub fn is_zero_account(env: &Env, account: &Address) -> bool {
    *account == Address::from_str(env, ZERO_ACCOUNT)
}
