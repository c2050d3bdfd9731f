//! The VOR/ILS manager.

use alloc::rc::Rc;
use core::str::FromStr;

use lru_sim::composite_children;
use lru_sim::prelude::{Component, ComponentName, Error, Handle, InPort};

use crate::ifc::EgiVorExtDataIfc;
use crate::records::EgiVorExtData;

/// Manages the simulated VOR/ILS LRU. Pure sink: it stores the VOR/ILS
/// data the EGI computer publishes.
#[derive(Debug)]
pub struct VorIlsLruMgr {
    name: ComponentName,
    vor_in: InPort<EgiVorExtData>,
}

impl EgiVorExtDataIfc for InPort<EgiVorExtData> {
    fn set_egi_vor_ext_data(&self, data: EgiVorExtData) {
        self.deliver(data);
    }
}

impl VorIlsLruMgr {
    /// Creates the LRU manager.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            name: ComponentName::from_str("VorIlsLruMgr")?,
            vor_in: InPort::new("VorIlsDataIn"),
        })
    }

    /// In-port handle for the VOR/ILS data capability.
    pub fn vor_ils_in_port(&self) -> Handle<dyn EgiVorExtDataIfc> {
        Rc::new(self.vor_in.clone())
    }

    /// Last latched VOR/ILS record.
    pub fn last_received_vor_ils_data(&self) -> EgiVorExtData {
        self.vor_in.last_received()
    }

    /// Number of VOR/ILS records latched so far.
    pub fn received_vor_ils_data_count(&self) -> u32 {
        self.vor_in.received_count()
    }
}

impl Component for VorIlsLruMgr {
    fn initialize(&mut self) {}

    fn periodic_run(&mut self) {
        let data = self.vor_in.sample();
        sim_trace!("{}: VOR/ILS data {:?}", self.name, data);
    }
}

/// The VOR/ILS manager composite.
#[derive(Debug)]
pub struct VorIlsMgr {
    vor_ils_lru_mgr: VorIlsLruMgr,
}

composite_children!(VorIlsMgr { vor_ils_lru_mgr });

impl VorIlsMgr {
    /// Creates the manager.
    pub fn new() -> Result<Self, Error> {
        Ok(Self {
            vor_ils_lru_mgr: VorIlsLruMgr::new()?,
        })
    }

    /// Forwarded in-port handle for the VOR/ILS data capability.
    pub fn vor_ils_in_port(&self) -> Handle<dyn EgiVorExtDataIfc> {
        self.vor_ils_lru_mgr.vor_ils_in_port()
    }

    /// Last VOR/ILS record latched by the LRU manager.
    pub fn last_received_vor_ils_data(&self) -> EgiVorExtData {
        self.vor_ils_lru_mgr.last_received_vor_ils_data()
    }

    /// Number of VOR/ILS records latched by the LRU manager.
    pub fn received_vor_ils_data_count(&self) -> u32 {
        self.vor_ils_lru_mgr.received_vor_ils_data_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_is_observable_after_the_next_tick() {
        let mut mgr = VorIlsMgr::new().unwrap();
        let port = mgr.vor_ils_in_port();
        port.set_egi_vor_ext_data(EgiVorExtData { bearing_field: 7 });
        assert_eq!(0, mgr.received_vor_ils_data_count());
        mgr.periodic_run();
        assert_eq!(1, mgr.received_vor_ils_data_count());
        assert_eq!(
            EgiVorExtData { bearing_field: 7 },
            mgr.last_received_vor_ils_data()
        );
    }
}
