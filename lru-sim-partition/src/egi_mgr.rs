//! The EGI manager: LRU manager, module controllers and EGI computer.

use core::str::FromStr;

use lru_sim::composite_children;
use lru_sim::prelude::{Component, ComponentName, Error, Fixed, Handle, OutPort, Source};

use crate::config::EgiMgrConfig;
use crate::egi_cmp::EgiCmp;
use crate::ifc::{
    Ans611ControlIfc, EgiCommandIfc, EgiExtDataIfc, EgiVorExtDataIfc, RadaltExtDataIfc,
};
use crate::records::{Ans611Control, EgiCommand, EgiExtData, RadaltExtData};

/// Controls one of the two EGI modules.
///
/// Publishes a fixed ANS-611 control word once per tick.
#[derive(Debug)]
pub struct EgiModController {
    name: ComponentName,
    control: Fixed<Ans611Control>,
    control_out: OutPort<dyn Ans611ControlIfc>,
}

impl EgiModController {
    /// Creates a controller under the given instance name.
    pub fn new(name: &str, control: Ans611Control) -> Result<Self, Error> {
        Ok(Self {
            name: ComponentName::from_str(name)?,
            control: Fixed(control),
            control_out: OutPort::new("ControlOut"),
        })
    }

    /// Connects the control word output.
    pub fn set_control_out(&mut self, port: Handle<dyn Ans611ControlIfc>) {
        self.control_out.bind(port);
    }
}

impl Component for EgiModController {
    fn initialize(&mut self) {}

    fn periodic_run(&mut self) {
        let word = self.control.next_record();
        sim_trace!("{}: publishing {:?}", self.name, word);
        self.control_out
            .send(|port| port.set_ans611_control_data(word));
    }
}

/// Manages the simulated EGI LRU.
///
/// Runs its two module controllers, then publishes the per-tick control
/// words, the command word and the external navigation data record.
#[derive(Debug)]
pub struct EgiLruMgr {
    name: ComponentName,
    egi1_mod_controller: EgiModController,
    egi2_mod_controller: EgiModController,
    ext_data: Fixed<EgiExtData>,
    control: Fixed<Ans611Control>,
    command: Fixed<EgiCommand>,
    data_out: OutPort<dyn EgiExtDataIfc>,
    egi1_control_out: OutPort<dyn Ans611ControlIfc>,
    egi2_control_out: OutPort<dyn Ans611ControlIfc>,
    command_out: OutPort<dyn EgiCommandIfc>,
}

impl EgiLruMgr {
    /// Creates the LRU manager and both module controllers.
    pub fn new(cfg: &EgiMgrConfig) -> Result<Self, Error> {
        Ok(Self {
            name: ComponentName::from_str("EgiLruMgr")?,
            egi1_mod_controller: EgiModController::new("Egi1ModController", cfg.mod_control)?,
            egi2_mod_controller: EgiModController::new("Egi2ModController", cfg.mod_control)?,
            ext_data: Fixed(cfg.ext_data),
            control: Fixed(cfg.control),
            command: Fixed(cfg.command),
            data_out: OutPort::new("DataOut"),
            egi1_control_out: OutPort::new("Egi1ControlOut"),
            egi2_control_out: OutPort::new("Egi2ControlOut"),
            command_out: OutPort::new("CommandOut"),
        })
    }

    /// Connects the navigation data output.
    pub fn set_data_out(&mut self, port: Handle<dyn EgiExtDataIfc>) {
        self.data_out.bind(port);
    }

    /// Connects module 1's control output, forwarding the handle to the
    /// module controller as well.
    pub fn set_egi1_control_out(&mut self, port: Handle<dyn Ans611ControlIfc>) {
        self.egi1_control_out.bind(port.clone());
        self.egi1_mod_controller.set_control_out(port);
    }

    /// Connects module 2's control output, forwarding the handle to the
    /// module controller as well.
    pub fn set_egi2_control_out(&mut self, port: Handle<dyn Ans611ControlIfc>) {
        self.egi2_control_out.bind(port.clone());
        self.egi2_mod_controller.set_control_out(port);
    }

    /// Connects the command output.
    pub fn set_command_out(&mut self, port: Handle<dyn EgiCommandIfc>) {
        self.command_out.bind(port);
    }
}

impl Component for EgiLruMgr {
    fn initialize(&mut self) {
        self.egi1_mod_controller.initialize();
        self.egi2_mod_controller.initialize();
    }

    fn periodic_run(&mut self) {
        self.egi1_mod_controller.periodic_run();
        self.egi2_mod_controller.periodic_run();

        let word = self.control.next_record();
        self.egi1_control_out
            .send(|port| port.set_ans611_control_data(word));
        self.egi2_control_out
            .send(|port| port.set_ans611_control_data(word));

        let cmd = self.command.next_record();
        self.command_out.send(|port| port.set_egi_command(cmd));

        let data = self.ext_data.next_record();
        sim_trace!("{}: publishing {:?}", self.name, data);
        self.data_out.send(|port| port.set_egi_ext_data(data));
    }
}

/// The EGI manager composite.
///
/// Owns the LRU manager and the EGI computer, wires the control and
/// command paths between them and forwards the remaining ports across
/// its boundary.
#[derive(Debug)]
pub struct EgiMgr {
    egi_lru_mgr: EgiLruMgr,
    egi_cmp: EgiCmp,
}

composite_children!(EgiMgr { egi_lru_mgr, egi_cmp });

impl EgiMgr {
    /// Creates the EGI manager with its internal relations resolved.
    pub fn new(cfg: &EgiMgrConfig) -> Result<Self, Error> {
        let mut mgr = Self {
            egi_lru_mgr: EgiLruMgr::new(cfg)?,
            egi_cmp: EgiCmp::new(cfg)?,
        };
        mgr.init_relations();
        Ok(mgr)
    }

    /// Wires the relations internal to this manager. Idempotent.
    pub fn init_relations(&mut self) {
        self.egi_cmp.init_relations();

        // Both module control paths end at the EGI computer's formatter.
        let ans611 = self.egi_cmp.ans611_in_port();
        self.egi_lru_mgr.set_egi1_control_out(ans611.clone());
        self.egi_lru_mgr.set_egi2_control_out(ans611);

        // The LRU manager commands the EGI computer.
        self.egi_lru_mgr
            .set_command_out(self.egi_cmp.command_in_port());
    }

    /// Forwards the navigation data output to the LRU manager.
    pub fn set_egi_data_out(&mut self, port: Handle<dyn EgiExtDataIfc>) {
        self.egi_lru_mgr.set_data_out(port);
    }

    /// Forwards the EGI computer's radar altimeter in-port.
    pub fn radalt_in_port(&self) -> Handle<dyn RadaltExtDataIfc> {
        self.egi_cmp.radalt_in_port()
    }

    /// Forwards the VOR/ILS output to the EGI computer.
    pub fn set_vor_ils_out(&mut self, port: Handle<dyn EgiVorExtDataIfc>) {
        self.egi_cmp.set_vor_ils_out(port);
    }

    /// Last altitude record latched by the EGI computer.
    pub fn last_received_radalt_data(&self) -> RadaltExtData {
        self.egi_cmp.last_received_radalt_data()
    }

    /// Number of altitude records latched by the EGI computer.
    pub fn received_radalt_data_count(&self) -> u32 {
        self.egi_cmp.received_radalt_data_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_control_and_command_paths_are_wired_at_construction() {
        let mut mgr = EgiMgr::new(&EgiMgrConfig::default()).unwrap();
        mgr.initialize();
        mgr.periodic_run();

        // Two controllers plus two LRU-manager words per tick, all into
        // the formatter's control mailbox; latched by the EGI computer's
        // tick, which runs after the LRU manager.
        assert_eq!(4, mgr.egi_cmp.formatter().received_control_data_count());
        assert_eq!(1, mgr.egi_cmp.received_command_count());
        assert_eq!(
            EgiCommand { command_field: 42 },
            mgr.egi_cmp.last_received_command()
        );
    }

    #[test]
    fn init_relations_can_be_re_run() {
        let mut mgr = EgiMgr::new(&EgiMgrConfig::default()).unwrap();
        mgr.init_relations();
        mgr.initialize();
        mgr.periodic_run();
        assert_eq!(4, mgr.egi_cmp.formatter().received_control_data_count());
    }

    #[test]
    fn unwired_data_output_skips_silently() {
        let mut mgr = EgiMgr::new(&EgiMgrConfig::default()).unwrap();
        mgr.initialize();
        for _ in 0..3 {
            mgr.periodic_run();
        }
    }
}
