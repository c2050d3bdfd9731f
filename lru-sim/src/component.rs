//! Component lifecycle contracts.

/// A unit of the partition tree that takes part in the periodic
/// lifecycle.
///
/// Both lifecycle methods are infallible: a component never signals an
/// error for a normal tick. The only defined "failure" is an unwired
/// outbound port, and that is a silent skip.
pub trait Component {
    /// Prepares internal state for the first tick.
    ///
    /// Called once, after all wiring is done; must be idempotent and
    /// must not depend on which ports are wired.
    fn initialize(&mut self);

    /// Executes one unit of work.
    ///
    /// Called once per tick. A component that owns inbound ports latches
    /// them here; one that owns outbound ports produces this tick's
    /// records and sends them through every bound port.
    fn periodic_run(&mut self);
}

/// A component composed of owned children.
///
/// A composite holds its children as plain value members and visits them
/// in the fixed order declared at construction; that order is the tick
/// execution order, every tick, with no reordering. The
/// [`composite_children!`](crate::composite_children) macro writes this
/// impl from a field list.
///
/// Every composite gets its [`Component`] behavior for free:
/// `initialize` and `periodic_run` propagate to the children in declared
/// order.
pub trait Composite {
    /// Visits the owned children in declared order.
    fn for_each_child(&mut self, f: &mut dyn FnMut(&mut dyn Component));
}

impl<T: Composite> Component for T {
    fn initialize(&mut self) {
        self.for_each_child(&mut |child| child.initialize());
    }

    fn periodic_run(&mut self) {
        self.for_each_child(&mut |child| child.periodic_run());
    }
}
