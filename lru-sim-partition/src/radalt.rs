//! The radar altimeter manager.

use alloc::rc::Rc;
use core::str::FromStr;

use lru_sim::composite_children;
use lru_sim::prelude::{Component, ComponentName, Error, Fixed, Handle, InPort, OutPort, Source};

use crate::config::RadaltMgrConfig;
use crate::ifc::{EgiExtDataIfc, RadaltExtDataIfc};
use crate::records::{EgiExtData, RadaltExtData};

/// Manages the simulated radar altimeter LRU.
///
/// Consumes EGI navigation data and publishes an altitude record once
/// per tick.
#[derive(Debug)]
pub struct RadaltLruMgr {
    name: ComponentName,
    egi_in: InPort<EgiExtData>,
    ext_data: Fixed<RadaltExtData>,
    data_out: OutPort<dyn RadaltExtDataIfc>,
}

impl EgiExtDataIfc for InPort<EgiExtData> {
    fn set_egi_ext_data(&self, data: EgiExtData) {
        self.deliver(data);
    }
}

impl RadaltLruMgr {
    /// Creates the LRU manager.
    pub fn new(cfg: &RadaltMgrConfig) -> Result<Self, Error> {
        Ok(Self {
            name: ComponentName::from_str("RadaltLruMgr")?,
            egi_in: InPort::new("EgiDataIn"),
            ext_data: Fixed(cfg.ext_data),
            data_out: OutPort::new("DataOut"),
        })
    }

    /// In-port handle for the EGI navigation data capability.
    pub fn egi_in_port(&self) -> Handle<dyn EgiExtDataIfc> {
        Rc::new(self.egi_in.clone())
    }

    /// Connects the altitude data output.
    pub fn set_data_out(&mut self, port: Handle<dyn RadaltExtDataIfc>) {
        self.data_out.bind(port);
    }

    /// Last latched navigation record.
    pub fn last_received_egi_data(&self) -> EgiExtData {
        self.egi_in.last_received()
    }

    /// Number of navigation records latched so far.
    pub fn received_egi_data_count(&self) -> u32 {
        self.egi_in.received_count()
    }
}

impl Component for RadaltLruMgr {
    fn initialize(&mut self) {}

    fn periodic_run(&mut self) {
        let egi = self.egi_in.sample();
        sim_trace!("{}: navigation data {:?}", self.name, egi);

        let data = self.ext_data.next_record();
        self.data_out.send(|port| port.set_radalt_ext_data(data));
    }
}

/// The radar altimeter manager composite.
pub struct RadaltMgr {
    radalt_lru_mgr: RadaltLruMgr,
    // Pass-through handle resolved from the LRU manager.
    egi_in: Handle<dyn EgiExtDataIfc>,
}

composite_children!(RadaltMgr { radalt_lru_mgr });

impl RadaltMgr {
    /// Creates the manager with its relations resolved.
    pub fn new(cfg: &RadaltMgrConfig) -> Result<Self, Error> {
        let radalt_lru_mgr = RadaltLruMgr::new(cfg)?;
        let egi_in = radalt_lru_mgr.egi_in_port();
        Ok(Self {
            radalt_lru_mgr,
            egi_in,
        })
    }

    /// Re-resolves the pass-through relations. Safe to call again.
    pub fn init_relations(&mut self) {
        self.egi_in = self.radalt_lru_mgr.egi_in_port();
    }

    /// Forwarded in-port handle for the EGI navigation data capability.
    pub fn egi_in_port(&self) -> Handle<dyn EgiExtDataIfc> {
        Rc::clone(&self.egi_in)
    }

    /// Forwards the altitude data output to the LRU manager.
    pub fn set_radalt_data_out(&mut self, port: Handle<dyn RadaltExtDataIfc>) {
        self.radalt_lru_mgr.set_data_out(port);
    }

    /// Last navigation record latched by the LRU manager.
    pub fn last_received_egi_data(&self) -> EgiExtData {
        self.radalt_lru_mgr.last_received_egi_data()
    }

    /// Number of navigation records latched by the LRU manager.
    pub fn received_egi_data_count(&self) -> u32 {
        self.radalt_lru_mgr.received_egi_data_count()
    }
}

impl core::fmt::Debug for RadaltMgr {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RadaltMgr")
            .field("radalt_lru_mgr", &self.radalt_lru_mgr)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receives_nothing_until_wired() {
        let mut mgr = RadaltMgr::new(&RadaltMgrConfig::default()).unwrap();
        mgr.initialize();
        for _ in 0..5 {
            mgr.periodic_run();
        }
        assert_eq!(0, mgr.received_egi_data_count());
        assert_eq!(EgiExtData::default(), mgr.last_received_egi_data());
    }

    #[test]
    fn forwarded_in_port_reaches_the_lru_manager() {
        let mut mgr = RadaltMgr::new(&RadaltMgrConfig::default()).unwrap();
        let port = mgr.egi_in_port();
        port.set_egi_ext_data(EgiExtData { example_field: 42 });
        mgr.periodic_run();
        assert_eq!(1, mgr.received_egi_data_count());
        assert_eq!(
            EgiExtData { example_field: 42 },
            mgr.last_received_egi_data()
        );
    }
}
