//! The root composite owning the whole manager topology.

use lru_sim::composite_children;
use lru_sim::prelude::{Component, Error};

use crate::config::PartitionConfig;
use crate::egi_mgr::EgiMgr;
use crate::radalt::RadaltMgr;
use crate::records::{EgiExtData, EgiVorExtData, RadaltExtData};
use crate::vor_ils::VorIlsMgr;

/// The partition: the one entity that knows the full topology.
///
/// Owns the three managers in their declared tick order and performs all
/// cross-manager wiring through the managers' forwarding accessors; no
/// manager ever sees another manager's internals. The surrounding system
/// only calls [`Component::initialize`] once and
/// [`Component::periodic_run`] once per tick.
#[derive(Debug)]
pub struct Partition {
    egi_mgr: EgiMgr,
    radalt_mgr: RadaltMgr,
    vor_ils_mgr: VorIlsMgr,
}

composite_children!(Partition {
    egi_mgr,
    radalt_mgr,
    vor_ils_mgr,
});

impl Partition {
    /// Builds the full component tree and wires it.
    pub fn new(cfg: &PartitionConfig) -> Result<Self, Error> {
        let mut partition = Self {
            egi_mgr: EgiMgr::new(&cfg.egi)?,
            radalt_mgr: RadaltMgr::new(&cfg.radalt)?,
            vor_ils_mgr: VorIlsMgr::new()?,
        };
        partition.init_relations();
        Ok(partition)
    }

    /// The cross-manager wiring table. Runs once at construction;
    /// re-running it is safe and re-resolves the same handles.
    pub fn init_relations(&mut self) {
        self.egi_mgr.init_relations();
        self.radalt_mgr.init_relations();

        // EgiLruMgr sends EGI navigation data to RadaltLruMgr.
        self.egi_mgr
            .set_egi_data_out(self.radalt_mgr.egi_in_port());

        // RadaltLruMgr sends altitude data to the EGI computer.
        self.radalt_mgr
            .set_radalt_data_out(self.egi_mgr.radalt_in_port());

        // The EGI computer sends VOR/ILS navigation data to VorIlsLruMgr.
        self.egi_mgr
            .set_vor_ils_out(self.vor_ils_mgr.vor_ils_in_port());
    }

    /// Last EGI navigation record received by the radar altimeter side.
    pub fn last_received_egi_data(&self) -> EgiExtData {
        self.radalt_mgr.last_received_egi_data()
    }

    /// Number of EGI navigation records received by the radar altimeter
    /// side.
    pub fn received_egi_data_count(&self) -> u32 {
        self.radalt_mgr.received_egi_data_count()
    }

    /// Last altitude record received by the EGI side.
    pub fn last_received_radalt_data(&self) -> RadaltExtData {
        self.egi_mgr.last_received_radalt_data()
    }

    /// Number of altitude records received by the EGI side.
    pub fn received_radalt_data_count(&self) -> u32 {
        self.egi_mgr.received_radalt_data_count()
    }

    /// Last VOR/ILS record received by the VOR/ILS side.
    pub fn last_received_vor_ils_data(&self) -> EgiVorExtData {
        self.vor_ils_mgr.last_received_vor_ils_data()
    }

    /// Number of VOR/ILS records received by the VOR/ILS side.
    pub fn received_vor_ils_data_count(&self) -> u32 {
        self.vor_ils_mgr.received_vor_ils_data_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_wires_the_topology() {
        let mut partition = Partition::new(&PartitionConfig::default()).unwrap();
        partition.initialize();
        partition.periodic_run();

        // EGI ticks before Radalt, so the first navigation record is
        // latched on the first tick.
        assert_eq!(1, partition.received_egi_data_count());
        assert_eq!(
            EgiExtData { example_field: 42 },
            partition.last_received_egi_data()
        );
    }

    #[test]
    fn radalt_data_lags_one_tick_behind_declared_order() {
        let mut partition = Partition::new(&PartitionConfig::default()).unwrap();
        partition.initialize();

        // The EGI computer ticks before the radar altimeter manager, so
        // the altitude record published on tick N is latched on tick N+1.
        partition.periodic_run();
        assert_eq!(0, partition.received_radalt_data_count());

        partition.periodic_run();
        assert_eq!(1, partition.received_radalt_data_count());
        assert_eq!(
            RadaltExtData { altitude_field: 100 },
            partition.last_received_radalt_data()
        );
    }

    #[test]
    fn vor_ils_data_arrives_every_tick() {
        let mut partition = Partition::new(&PartitionConfig::default()).unwrap();
        partition.initialize();
        for _ in 0..4 {
            partition.periodic_run();
        }
        assert_eq!(4, partition.received_vor_ils_data_count());
        assert_eq!(
            EgiVorExtData { bearing_field: 7 },
            partition.last_received_vor_ils_data()
        );
    }
}
