//! Storage gateway for the Nego backend.
//!
//! This crate provides:
//! - The [`Store`] trait: an abstract document-collection interface keyed by
//!   application-assigned string ids
//! - [`MemoryStore`], an in-memory reference implementation used by the
//!   server binary and the test suite
//!
//! A production deployment swaps in a driver for a real document database
//! behind the same trait; services are constructed against `Arc<dyn Store>`
//! and never hold ambient global state.

pub mod error;
pub mod gateway;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use gateway::{Store, TalentFilter, TalentPage, UnlockOutcome};
pub use memory::MemoryStore;
