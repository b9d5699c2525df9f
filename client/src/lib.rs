//! Client side of the anchor-fundamental workspace.
//!
//! [`provider`] builds an `anchor-client` context from the environment and hands
//! out program handles, [`runner`] performs the `initialize` smoke check, and
//! [`wallet`] plus [`transactions`] back the RPC scripts under `src/bin`.

pub mod config;
pub mod error;
pub mod logging;
pub mod provider;
pub mod runner;
pub mod transactions;
pub mod wallet;

pub use error::{QuestError, Result};
