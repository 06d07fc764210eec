//! Access control domain.
//!
//! - [`actor::Actor`]: privilege class of the requester
//! - [`actor::Principal`]: an authenticated username with its actor

pub mod actor;
