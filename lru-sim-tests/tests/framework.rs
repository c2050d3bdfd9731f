//! Framework-level properties, exercised with the test doubles.

use lru_sim::composite_children;
use lru_sim::prelude::{Component, Ticker};
use lru_sim_tests::{Collector, Echo, Emitter, Telemetry};

struct SenderFirst {
    emitter: Emitter,
    collector: Collector,
}

composite_children!(SenderFirst { emitter, collector });

impl SenderFirst {
    fn new(value: i32) -> Self {
        let mut tree = Self {
            emitter: Emitter::new(value),
            collector: Collector::new(),
        };
        tree.init_relations();
        tree
    }

    fn init_relations(&mut self) {
        self.emitter
            .set_telemetry_out(self.collector.telemetry_in_port());
    }
}

struct ReceiverFirst {
    collector: Collector,
    emitter: Emitter,
}

composite_children!(ReceiverFirst { collector, emitter });

struct Ring {
    alpha: Echo,
    beta: Echo,
}

composite_children!(Ring { alpha, beta });

#[test]
fn wired_receiver_counts_one_record_per_tick() {
    let mut ticker = Ticker::new(SenderFirst::new(42));
    ticker.initialize();
    assert_eq!(0, ticker.root().collector.received_data_count());

    for n in 1..=10 {
        ticker.tick();
        assert_eq!(n, ticker.root().collector.received_data_count());
        assert_eq!(
            Telemetry { value: 42 },
            ticker.root().collector.last_received_data()
        );
    }
}

#[test]
fn unwired_sender_leaves_the_receiver_untouched() {
    let mut tree = SenderFirst {
        emitter: Emitter::new(42),
        collector: Collector::new(),
    };
    tree.initialize();
    for _ in 0..10 {
        tree.periodic_run();
    }
    assert_eq!(0, tree.collector.received_data_count());
    assert_eq!(Telemetry::default(), tree.collector.last_received_data());
}

#[test]
fn rewiring_twice_changes_nothing() {
    let mut tree = SenderFirst::new(42);
    tree.init_relations();
    tree.initialize();
    tree.periodic_run();
    assert_eq!(1, tree.collector.received_data_count());
    assert_eq!(Telemetry { value: 42 }, tree.collector.last_received_data());
}

#[test]
fn receiver_ticked_before_sender_lags_one_tick() {
    let mut tree = ReceiverFirst {
        collector: Collector::new(),
        emitter: Emitter::new(42),
    };
    tree.emitter
        .set_telemetry_out(tree.collector.telemetry_in_port());
    tree.initialize();

    tree.periodic_run();
    assert_eq!(0, tree.collector.received_data_count());

    tree.periodic_run();
    assert_eq!(1, tree.collector.received_data_count());
    assert_eq!(Telemetry { value: 42 }, tree.collector.last_received_data());
}

#[test]
fn cyclic_wiring_ticks_without_growth() {
    let mut ring = Ring {
        alpha: Echo::new(1),
        beta: Echo::new(2),
    };
    ring.alpha.set_telemetry_out(ring.beta.telemetry_in_port());
    ring.beta.set_telemetry_out(ring.alpha.telemetry_in_port());
    ring.initialize();

    // Alpha ticks first: beta sees alpha's record on the same tick,
    // alpha sees beta's record one tick later.
    ring.periodic_run();
    assert_eq!(1, ring.beta.received_data_count());
    assert_eq!(Telemetry { value: 1 }, ring.beta.last_received_data());
    assert_eq!(0, ring.alpha.received_data_count());

    for _ in 0..9 {
        ring.periodic_run();
    }
    assert_eq!(10, ring.beta.received_data_count());
    assert_eq!(9, ring.alpha.received_data_count());
    assert_eq!(Telemetry { value: 2 }, ring.alpha.last_received_data());
}
