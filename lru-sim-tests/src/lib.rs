//! Test doubles for exercising the framework without the avionics
//! payload.

use std::rc::Rc;

use lru_sim::prelude::{Component, Fixed, Handle, InPort, OutPort, Source};

/// Minimal record for the doubles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Telemetry {
    pub value: i32,
}

/// Capability the doubles exchange.
pub trait TelemetryIfc {
    fn set_telemetry(&self, data: Telemetry);
}

impl TelemetryIfc for InPort<Telemetry> {
    fn set_telemetry(&self, data: Telemetry) {
        self.deliver(data);
    }
}

/// Leaf that publishes a fixed telemetry value every tick.
#[derive(Debug)]
pub struct Emitter {
    source: Fixed<Telemetry>,
    out: OutPort<dyn TelemetryIfc>,
}

impl Emitter {
    pub fn new(value: i32) -> Self {
        Self {
            source: Fixed(Telemetry { value }),
            out: OutPort::new("TelemetryOut"),
        }
    }

    pub fn set_telemetry_out(&mut self, port: Handle<dyn TelemetryIfc>) {
        self.out.bind(port);
    }
}

impl Component for Emitter {
    fn initialize(&mut self) {}

    fn periodic_run(&mut self) {
        let data = self.source.next_record();
        self.out.send(|port| port.set_telemetry(data));
    }
}

/// Leaf that stores received telemetry.
#[derive(Debug)]
pub struct Collector {
    telemetry_in: InPort<Telemetry>,
}

impl Collector {
    pub fn new() -> Self {
        Self {
            telemetry_in: InPort::new("TelemetryIn"),
        }
    }

    pub fn telemetry_in_port(&self) -> Handle<dyn TelemetryIfc> {
        Rc::new(self.telemetry_in.clone())
    }

    pub fn last_received_data(&self) -> Telemetry {
        self.telemetry_in.last_received()
    }

    pub fn received_data_count(&self) -> u32 {
        self.telemetry_in.received_count()
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Collector {
    fn initialize(&mut self) {}

    fn periodic_run(&mut self) {
        let _ = self.telemetry_in.sample();
    }
}

/// Leaf that both receives and publishes telemetry, for cyclic
/// topologies.
#[derive(Debug)]
pub struct Echo {
    source: Fixed<Telemetry>,
    telemetry_in: InPort<Telemetry>,
    out: OutPort<dyn TelemetryIfc>,
}

impl Echo {
    pub fn new(value: i32) -> Self {
        Self {
            source: Fixed(Telemetry { value }),
            telemetry_in: InPort::new("TelemetryIn"),
            out: OutPort::new("TelemetryOut"),
        }
    }

    pub fn telemetry_in_port(&self) -> Handle<dyn TelemetryIfc> {
        Rc::new(self.telemetry_in.clone())
    }

    pub fn set_telemetry_out(&mut self, port: Handle<dyn TelemetryIfc>) {
        self.out.bind(port);
    }

    pub fn last_received_data(&self) -> Telemetry {
        self.telemetry_in.last_received()
    }

    pub fn received_data_count(&self) -> u32 {
        self.telemetry_in.received_count()
    }
}

impl Component for Echo {
    fn initialize(&mut self) {}

    fn periodic_run(&mut self) {
        let _ = self.telemetry_in.sample();
        let data = self.source.next_record();
        self.out.send(|port| port.set_telemetry(data));
    }
}
