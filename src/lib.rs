//! Taskhub: personal task management backed by a local key-value store.
//!
//! This crate provides the task store, view derivation, and session
//! bookkeeping behind a single-user task board. All persistence goes
//! through a small key-value port so the same code runs against an
//! in-process map or a directory of files.
//!
//! # Architecture
//!
//! Taskhub follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (memory, files)
//!
//! # Modules
//!
//! - [`storage`]: Key-value persistence port and adapters
//! - [`task`]: Task records, the asynchronous task store, and view derivation
//! - [`session`]: Mocked sign-in state and theme preference
//! - [`config`]: Storage keys and simulated latency settings

pub mod config;
pub mod session;
pub mod storage;
pub mod task;
