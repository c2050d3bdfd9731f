//! Outer tick driver.

use crate::component::Component;

/// Drives the root component of a partition.
///
/// Owns the root, guards one-time initialization and counts ticks. The
/// tick cadence is the caller's: invoke [`Ticker::tick`] from whatever
/// periodic schedule the surrounding system provides.
#[derive(Debug)]
pub struct Ticker<C: Component> {
    root: C,
    ticks: u64,
    initialized: bool,
}

impl<C: Component> Ticker<C> {
    /// Wraps a fully wired root component.
    pub fn new(root: C) -> Self {
        Self {
            root,
            ticks: 0,
            initialized: false,
        }
    }

    /// Initializes the tree. Further calls are no-ops.
    pub fn initialize(&mut self) {
        if !self.initialized {
            self.root.initialize();
            self.initialized = true;
            sim_debug!("partition initialized");
        }
    }

    /// Runs one periodic pass over the whole tree.
    pub fn tick(&mut self) {
        self.root.periodic_run();
        self.ticks += 1;
        sim_trace!("tick {} complete", self.ticks);
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Read access to the root component.
    pub fn root(&self) -> &C {
        &self.root
    }

    /// Mutable access to the root component.
    pub fn root_mut(&mut self) -> &mut C {
        &mut self.root
    }

    /// Releases the root component.
    pub fn into_inner(self) -> C {
        self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counting {
        initialized: u32,
        runs: u32,
    }

    impl Component for Counting {
        fn initialize(&mut self) {
            self.initialized += 1;
        }

        fn periodic_run(&mut self) {
            self.runs += 1;
        }
    }

    #[test]
    fn initialize_happens_once() {
        let mut ticker = Ticker::new(Counting::default());
        ticker.initialize();
        ticker.initialize();
        assert_eq!(1, ticker.root().initialized);
    }

    #[test]
    fn ticks_are_counted() {
        let mut ticker = Ticker::new(Counting::default());
        ticker.initialize();
        for _ in 0..5 {
            ticker.tick();
        }
        assert_eq!(5, ticker.ticks());
        assert_eq!(5, ticker.root().runs);
    }
}
