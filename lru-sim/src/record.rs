use core::fmt::Debug;

/// Contract for data records exchanged between components.
///
/// A record is a plain value: it is copied into the receiver's mailbox
/// on every send and has no identity beyond its field values. Any type
/// that is copyable, default-constructible, comparable and printable
/// qualifies; domain crates only need the derives.
pub trait Record: Copy + Default + PartialEq + Debug {}

impl<T: Copy + Default + PartialEq + Debug> Record for T {}
