//! Simulated avionics partition built on [`lru_sim`].
//!
//! Three manager composites share the partition: the embedded GPS/INS
//! (EGI) manager, the radar altimeter manager and the VOR/ILS manager.
//! Each manager simulates one LRU and its helpers; the managers never
//! see each other's internals. All cross-manager data flow goes through
//! capability ports wired once by [`Partition`]:
//!
//! ```text
//! EgiLruMgr --EgiExtData--> RadaltLruMgr --RadaltExtData--> EgiCmp
//! EgiCmp --EgiVorExtData--> VorIlsLruMgr
//! ```
//!
//! The payload values are stand-ins, configured through
//! [`PartitionConfig`]; no real sensor model is attached.

#![no_std]
#![warn(missing_debug_implementations, trivial_casts, unused_qualifications)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod config;
mod egi_cmp;
mod egi_mgr;
mod ifc;
mod partition;
mod radalt;
mod records;
mod vor_ils;

pub use crate::config::{EgiMgrConfig, PartitionConfig, RadaltMgrConfig};
pub use crate::egi_cmp::{EgiCmp, EgiFormatter};
pub use crate::egi_mgr::{EgiLruMgr, EgiMgr, EgiModController};
pub use crate::ifc::{
    Ans611ControlIfc, EgiCommandIfc, EgiExtDataIfc, EgiVorExtDataIfc, RadaltExtDataIfc,
};
pub use crate::partition::Partition;
pub use crate::radalt::{RadaltLruMgr, RadaltMgr};
pub use crate::records::{Ans611Control, EgiCommand, EgiExtData, EgiVorExtData, RadaltExtData};
pub use crate::vor_ils::{VorIlsLruMgr, VorIlsMgr};
