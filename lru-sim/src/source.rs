//! Payload production strategies.
//!
//! What value a component publishes each tick is not the framework's
//! business; components delegate it to a [`Source`] so the payload logic
//! can be swapped without touching the port plumbing.

use crate::record::Record;

/// Produces the record a component publishes on one tick.
pub trait Source<T: Record> {
    /// Produces the next record to send.
    fn next_record(&mut self) -> T;
}

/// A source that publishes the same fixed value on every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fixed<T: Record>(pub T);

impl<T: Record> Source<T> for Fixed<T> {
    fn next_record(&mut self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_repeats_its_value() {
        let mut source = Fixed(17u32);
        assert_eq!(17, source.next_record());
        assert_eq!(17, source.next_record());
    }

    #[test]
    fn stateful_sources_advance() {
        struct Ramp(u32);

        impl Source<u32> for Ramp {
            fn next_record(&mut self) -> u32 {
                self.0 += 1;
                self.0
            }
        }

        let mut source = Ramp(0);
        assert_eq!(1, source.next_record());
        assert_eq!(2, source.next_record());
    }
}
