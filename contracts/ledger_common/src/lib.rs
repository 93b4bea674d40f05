//! Building blocks shared by the campaign and staking contracts.
//!
//! Neither ledger talks to the other. What they share is the way they read
//! ledger time ([`clock`]), move the custodied asset ([`custody`]), gate
//! privileged calls ([`access`]) and keep their storage alive ([`ttl`]).

#![no_std]

pub mod access;
pub mod clock;
pub mod custody;
pub mod ttl;

pub use access::AdminCapability;
