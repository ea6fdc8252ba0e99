//! Key-value persistence shared by the task and session contexts.
//!
//! The store mirrors browser local storage: string keys map to string
//! values and every `set` replaces the whole value. Higher layers encode
//! their state as JSON under a single key so that one write always leaves a
//! complete, well-formed document behind.
//!
//! - Port contract in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod ports;

pub use ports::{KeyValueError, KeyValueResult, KeyValueStore};
