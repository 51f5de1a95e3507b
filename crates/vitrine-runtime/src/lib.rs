#![forbid(unsafe_code)]

//! Cooperative timing for Vitrine.
//!
//! A single-threaded, deterministic replacement for the environment's timer
//! facility. All timers live in one [`Scheduler`] driven by explicit
//! [`advance`] calls; callbacks never run between turns, so there is no
//! preemption and no locking.
//!
//! The crate's one discipline worth naming: a component that auto-advances
//! holds its repeating timer in an [`AutoAdvance`] slot, which guarantees at
//! most one live timer per owner by cancelling before every re-arm. The
//! reference behavior allowed re-arm without cancellation on some paths;
//! that leak class is structurally impossible here.
//!
//! [`advance`]: Scheduler::advance

pub mod debounce;
pub mod scheduler;
pub mod slot;

pub use debounce::Debouncer;
pub use scheduler::{Scheduler, TimerId};
pub use slot::AutoAdvance;
