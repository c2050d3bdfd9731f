//! The EGI computer component and its formatter.

use alloc::rc::Rc;
use core::str::FromStr;

use lru_sim::prelude::{Component, ComponentName, Error, Fixed, Handle, InPort, OutPort, Source};

use crate::config::EgiMgrConfig;
use crate::ifc::{Ans611ControlIfc, EgiCommandIfc, EgiVorExtDataIfc, RadaltExtDataIfc};
use crate::records::{Ans611Control, EgiCommand, EgiVorExtData, RadaltExtData};

/// Mailboxes behind the two ANS-611 operations of the formatter.
#[derive(Debug, Clone)]
struct Ans611Inbox {
    mode_in: InPort<Ans611Control>,
    control_in: InPort<Ans611Control>,
}

impl Ans611ControlIfc for Ans611Inbox {
    fn set_egi_mode(&self, data: Ans611Control) {
        self.mode_in.deliver(data);
    }

    fn set_ans611_control_data(&self, data: Ans611Control) {
        self.control_in.deliver(data);
    }
}

/// Formats incoming ANS-611 words for the EGI computer.
///
/// Pure sink in this simulation: it stores the latest mode and control
/// words and exposes them for observation.
#[derive(Debug)]
pub struct EgiFormatter {
    name: ComponentName,
    inbox: Ans611Inbox,
}

impl EgiFormatter {
    /// Creates the formatter under the given instance name.
    pub fn new(name: &str) -> Result<Self, Error> {
        Ok(Self {
            name: ComponentName::from_str(name)?,
            inbox: Ans611Inbox {
                mode_in: InPort::new("Ans611ModeIn"),
                control_in: InPort::new("Ans611ControlIn"),
            },
        })
    }

    /// In-port handle for the ANS-611 capability.
    pub fn ans611_in_port(&self) -> Handle<dyn Ans611ControlIfc> {
        Rc::new(self.inbox.clone())
    }

    /// Last latched mode word.
    pub fn last_received_mode(&self) -> Ans611Control {
        self.inbox.mode_in.last_received()
    }

    /// Number of mode words latched so far.
    pub fn received_mode_count(&self) -> u32 {
        self.inbox.mode_in.received_count()
    }

    /// Last latched control word.
    pub fn last_received_control_data(&self) -> Ans611Control {
        self.inbox.control_in.last_received()
    }

    /// Number of control words latched so far.
    pub fn received_control_data_count(&self) -> u32 {
        self.inbox.control_in.received_count()
    }
}

impl Component for EgiFormatter {
    fn initialize(&mut self) {}

    fn periodic_run(&mut self) {
        let mode = self.inbox.mode_in.sample();
        let control = self.inbox.control_in.sample();
        sim_trace!("{}: mode {:?}, control {:?}", self.name, mode, control);
    }
}

/// The EGI computer.
///
/// Owns the formatter, receives altitude data from the radar altimeter
/// manager and commands from the EGI LRU manager, and publishes VOR/ILS
/// navigation data once per tick.
pub struct EgiCmp {
    name: ComponentName,
    formatter: EgiFormatter,
    radalt_in: InPort<RadaltExtData>,
    command_in: InPort<EgiCommand>,
    vor_ils: Fixed<EgiVorExtData>,
    vor_ils_out: OutPort<dyn EgiVorExtDataIfc>,
    // Pass-through handle resolved from the formatter, kept so ancestors
    // can wire across this boundary without seeing the formatter.
    ans611_in: Handle<dyn Ans611ControlIfc>,
}

impl RadaltExtDataIfc for InPort<RadaltExtData> {
    fn set_radalt_ext_data(&self, data: RadaltExtData) {
        self.deliver(data);
    }
}

impl EgiCommandIfc for InPort<EgiCommand> {
    fn set_egi_command(&self, cmd: EgiCommand) {
        self.deliver(cmd);
    }
}

impl EgiCmp {
    /// Creates the EGI computer and resolves its internal relations.
    pub fn new(cfg: &EgiMgrConfig) -> Result<Self, Error> {
        let formatter = EgiFormatter::new("EgiFormatter")?;
        let ans611_in = formatter.ans611_in_port();
        Ok(Self {
            name: ComponentName::from_str("EgiCmp")?,
            formatter,
            radalt_in: InPort::new("RadaltIn"),
            command_in: InPort::new("EgiCommandIn"),
            vor_ils: Fixed(cfg.vor_ils),
            vor_ils_out: OutPort::new("VorIlsOut"),
            ans611_in,
        })
    }

    /// Re-resolves the pass-through relations. Safe to call again; the
    /// same handles come back.
    pub fn init_relations(&mut self) {
        self.ans611_in = self.formatter.ans611_in_port();
    }

    /// In-port handle for the radar altimeter data capability.
    pub fn radalt_in_port(&self) -> Handle<dyn RadaltExtDataIfc> {
        Rc::new(self.radalt_in.clone())
    }

    /// In-port handle for the command capability.
    pub fn command_in_port(&self) -> Handle<dyn EgiCommandIfc> {
        Rc::new(self.command_in.clone())
    }

    /// Forwarded in-port handle for the formatter's ANS-611 capability.
    pub fn ans611_in_port(&self) -> Handle<dyn Ans611ControlIfc> {
        Rc::clone(&self.ans611_in)
    }

    /// Connects the VOR/ILS data output.
    pub fn set_vor_ils_out(&mut self, port: Handle<dyn EgiVorExtDataIfc>) {
        self.vor_ils_out.bind(port);
    }

    /// Read access to the formatter, for observation.
    pub fn formatter(&self) -> &EgiFormatter {
        &self.formatter
    }

    /// Last latched altitude record.
    pub fn last_received_radalt_data(&self) -> RadaltExtData {
        self.radalt_in.last_received()
    }

    /// Number of altitude records latched so far.
    pub fn received_radalt_data_count(&self) -> u32 {
        self.radalt_in.received_count()
    }

    /// Last latched command word.
    pub fn last_received_command(&self) -> EgiCommand {
        self.command_in.last_received()
    }

    /// Number of command words latched so far.
    pub fn received_command_count(&self) -> u32 {
        self.command_in.received_count()
    }
}

impl core::fmt::Debug for EgiCmp {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EgiCmp")
            .field("name", &self.name)
            .field("formatter", &self.formatter)
            .field("radalt_in", &self.radalt_in)
            .field("command_in", &self.command_in)
            .field("vor_ils_out", &self.vor_ils_out)
            .finish()
    }
}

impl Component for EgiCmp {
    fn initialize(&mut self) {
        self.formatter.initialize();
    }

    fn periodic_run(&mut self) {
        self.formatter.periodic_run();

        let _ = self.radalt_in.sample();
        let _ = self.command_in.sample();

        let data = self.vor_ils.next_record();
        sim_trace!("{}: publishing {:?}", self.name, data);
        self.vor_ils_out.send(|port| port.set_egi_vor_ext_data(data));
    }
}
