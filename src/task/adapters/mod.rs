//! Adapter implementations for task ports.

pub mod key_value;

pub use key_value::KeyValueTaskStore;
