//! Task management for Taskhub.
//!
//! This module owns the persisted task collection and everything derived
//! from it: creating, patching, and deleting task records through an
//! asynchronous store with simulated latency, and deriving the filtered,
//! grouped view a board renders. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
