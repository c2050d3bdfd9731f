//! Composition framework for simulated avionics line-replaceable units
//! (LRUs) inside a single cooperatively scheduled partition.
//!
//! Units are modelled as [`prelude::Component`]s that exchange copyable
//! data records through statically typed ports instead of referencing
//! each other directly. A composite owns its children by value and runs
//! them in a fixed declared order; cross-component references are wired
//! once, after construction, as nullable capability handles.
//!
//! ## Lifecycle
//!
//! The whole tree goes through two phases:
//!
//! 1. *Wiring*: composites resolve the port connections between their
//!    own children and expose forwarding accessors for everything that
//!    has to cross their boundary. The root composite pairs up the
//!    remaining unwired ports.
//! 2. *Execution*: `initialize` propagates down the tree once, then
//!    `periodic_run` propagates down the tree on every tick, children
//!    in declared order.
//!
//! A tick runs to completion on a single thread. Sends are synchronous
//! calls into the receiver's mailbox; an unconnected outbound port skips
//! its send silently. The receiver latches delivered records at the
//! start of its own tick, so the declared tick order alone decides
//! whether a record is observed on the tick it was produced or on the
//! next one.
//!
//! ## Driving a partition
//!
//! Wrap the root component in a [`prelude::Ticker`] and call
//! [`prelude::Ticker::tick`] once per scheduling period. The cadence
//! itself (timer, hypervisor schedule, test loop) is up to the caller.

#![no_std]
#![warn(
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications
)]

extern crate alloc;

#[macro_use]
mod macros;

mod component;
mod error;
mod port;
mod record;
mod run;
mod source;
mod types;

/// Standard prelude for LRU simulation crates.
pub mod prelude {
    pub use crate::component::{Component, Composite};
    pub use crate::error::Error;
    pub use crate::port::{Handle, InPort, OutPort};
    pub use crate::record::Record;
    pub use crate::run::Ticker;
    pub use crate::source::{Fixed, Source};
    pub use crate::types::{ComponentName, NameError};
}
