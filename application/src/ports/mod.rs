//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.
//! The poll repository itself is a domain trait
//! ([`PollRepository`](polls_domain::PollRepository)).

pub mod authenticator;
pub mod clock;
