#[cfg(not(test))]
#[cfg(feature = "log")]
macro_rules! sim_log {
    (trace, $($arg:expr),*) => { log::trace!($($arg),*) };
    (debug, $($arg:expr),*) => { log::debug!($($arg),*) };
}

#[cfg(any(test, not(feature = "log")))]
macro_rules! sim_log {
    ($level:ident, $($arg:expr),*) => {{ $( let _ = &$arg; )* }}
}

macro_rules! sim_trace {
    ($($arg:expr),*) => (sim_log!(trace, $($arg),*));
}

macro_rules! sim_debug {
    ($($arg:expr),*) => (sim_log!(debug, $($arg),*));
}

/// Implements [`Composite`](crate::prelude::Composite) for a struct from
/// an ordered list of its child fields.
///
/// The field order given here is the tick-execution order of the
/// children and never changes afterwards.
///
/// ```
/// use lru_sim::composite_children;
/// use lru_sim::prelude::*;
///
/// #[derive(Debug, Default)]
/// struct Blinker;
///
/// impl Component for Blinker {
///     fn initialize(&mut self) {}
///     fn periodic_run(&mut self) {}
/// }
///
/// #[derive(Debug, Default)]
/// struct Panel {
///     left: Blinker,
///     right: Blinker,
/// }
///
/// composite_children!(Panel { left, right });
/// ```
#[macro_export]
macro_rules! composite_children {
    ($ty:ty { $($child:ident),+ $(,)? }) => {
        impl $crate::prelude::Composite for $ty {
            fn for_each_child(
                &mut self,
                f: &mut dyn FnMut(&mut dyn $crate::prelude::Component),
            ) {
                $( f(&mut self.$child); )+
            }
        }
    };
}
