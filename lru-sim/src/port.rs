//! Capability handles and the inbound/outbound port types.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt::{Debug, Formatter};

use crate::record::Record;

/// Shared handle to a capability interface implementer.
///
/// Handles are resolved once during relation-initialization and held
/// directly thereafter; invoking an operation through one involves no
/// lookup and no failure mode. `Rc` is `!Send`, which pins the whole
/// component tree to a single thread.
pub type Handle<C: ?Sized> = Rc<C>;

/// An outbound port: a nullable reference to some capability interface.
///
/// The port starts unbound. [`OutPort::bind`] is expected to be called
/// exactly once, during relation-initialization; re-binding is defined
/// (the last assignment wins) but discouraged. Sending through an
/// unbound port is not an error, the send is skipped.
pub struct OutPort<C: ?Sized> {
    name: &'static str,
    target: Option<Handle<C>>,
}

impl<C: ?Sized> OutPort<C> {
    /// Creates an unbound port with the given diagnostic name.
    pub const fn new(name: &'static str) -> Self {
        Self { name, target: None }
    }

    /// The diagnostic name of this port.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Binds the port to an implementer of its capability interface.
    ///
    /// Re-binding replaces the previous target (last assignment wins),
    /// which keeps relation-initialization idempotent when it is re-run
    /// against the same topology.
    pub fn bind(&mut self, target: Handle<C>) {
        if self.target.is_some() {
            sim_debug!("port {} re-bound", self.name);
        }
        self.target = Some(target);
    }

    /// Whether the port has been bound.
    pub fn is_bound(&self) -> bool {
        self.target.is_some()
    }

    /// The bound capability handle, if any.
    pub fn handle(&self) -> Option<&C> {
        self.target.as_deref()
    }

    /// Invokes `f` on the bound capability, or skips silently if the
    /// port was never wired.
    pub fn send(&self, f: impl FnOnce(&C)) {
        match self.target.as_deref() {
            Some(target) => f(target),
            None => sim_trace!("port {} unbound, skipping send", self.name),
        }
    }
}

impl<C: ?Sized> Debug for OutPort<C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OutPort")
            .field("name", &self.name)
            .field("bound", &self.is_bound())
            .finish()
    }
}

#[derive(Debug)]
struct Mailbox<T> {
    pending: Option<T>,
    pending_count: u32,
    last: T,
    count: u32,
}

/// An inbound port: the mailbox behind one capability operation.
///
/// The owning component implements the capability interface for this
/// type (or for a small struct of these) and exports a [`Handle`] to a
/// clone of it; clones share the same mailbox, so the composite can keep
/// owning the component by value while ancestors hold live handles.
///
/// Delivery is a synchronous store into a pending slot. The record only
/// becomes observable through [`InPort::last_received`] and
/// [`InPort::received_count`] once the receiver latches it with
/// [`InPort::sample`] during its own tick; a receiver that runs before
/// its sender therefore sees this tick's record one tick late. Within a
/// tick, a later delivery overwrites an earlier pending one, but every
/// delivery is counted.
pub struct InPort<T: Record> {
    name: &'static str,
    inner: Rc<RefCell<Mailbox<T>>>,
}

impl<T: Record> InPort<T> {
    /// Creates an empty mailbox with the given diagnostic name.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Rc::new(RefCell::new(Mailbox {
                pending: None,
                pending_count: 0,
                last: T::default(),
                count: 0,
            })),
        }
    }

    /// The diagnostic name of this port.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Stores a record in the pending slot. Called by the capability
    /// operation body; never fails, never blocks.
    pub fn deliver(&self, record: T) {
        let mut mailbox = self.inner.borrow_mut();
        sim_trace!("port {} received {:?}", self.name, record);
        mailbox.pending = Some(record);
        mailbox.pending_count += 1;
    }

    /// Latches any pending record and returns the latest one received.
    ///
    /// To be called once per tick by the owning component. The receipt
    /// count advances by the number of deliveries since the last latch.
    pub fn sample(&self) -> T {
        let mut mailbox = self.inner.borrow_mut();
        if let Some(record) = mailbox.pending.take() {
            mailbox.last = record;
            mailbox.count += mailbox.pending_count;
            mailbox.pending_count = 0;
        }
        mailbox.last
    }

    /// The last latched record, for observation; `T::default()` until
    /// something has been received and sampled.
    pub fn last_received(&self) -> T {
        self.inner.borrow().last
    }

    /// Number of records latched so far.
    pub fn received_count(&self) -> u32 {
        self.inner.borrow().count
    }
}

impl<T: Record> Clone for InPort<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Record> Debug for InPort<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let mailbox = self.inner.borrow();
        f.debug_struct("InPort")
            .field("name", &self.name)
            .field("last", &mailbox.last)
            .field("count", &mailbox.count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, Default, PartialEq)]
    struct Frame {
        value: i32,
    }

    trait FrameSink {
        fn put_frame(&self, frame: Frame);
    }

    impl FrameSink for InPort<Frame> {
        fn put_frame(&self, frame: Frame) {
            self.deliver(frame);
        }
    }

    #[test]
    fn unbound_port_skips_send() {
        let port: OutPort<dyn FrameSink> = OutPort::new("FrameOut");
        assert!(!port.is_bound());
        port.send(|sink| sink.put_frame(Frame { value: 1 }));
    }

    #[test]
    fn delivery_is_latched_on_sample() {
        let inbox = InPort::new("FrameIn");
        let mut port: OutPort<dyn FrameSink> = OutPort::new("FrameOut");
        port.bind(Rc::new(inbox.clone()));

        port.send(|sink| sink.put_frame(Frame { value: 7 }));
        assert_eq!(0, inbox.received_count());
        assert_eq!(Frame::default(), inbox.last_received());

        assert_eq!(Frame { value: 7 }, inbox.sample());
        assert_eq!(1, inbox.received_count());
        assert_eq!(Frame { value: 7 }, inbox.last_received());
    }

    #[test]
    fn every_delivery_is_counted_latest_wins() {
        let inbox = InPort::new("FrameIn");
        inbox.deliver(Frame { value: 1 });
        inbox.deliver(Frame { value: 2 });
        assert_eq!(Frame { value: 2 }, inbox.sample());
        assert_eq!(2, inbox.received_count());
    }

    #[test]
    fn sample_without_delivery_keeps_state() {
        let inbox: InPort<Frame> = InPort::new("FrameIn");
        assert_eq!(Frame::default(), inbox.sample());
        assert_eq!(0, inbox.received_count());

        inbox.deliver(Frame { value: 3 });
        let _ = inbox.sample();
        assert_eq!(Frame { value: 3 }, inbox.sample());
        assert_eq!(1, inbox.received_count());
    }

    #[test]
    fn rebind_last_assignment_wins() {
        let first = InPort::new("FirstIn");
        let second = InPort::new("SecondIn");
        let mut port: OutPort<dyn FrameSink> = OutPort::new("FrameOut");
        port.bind(Rc::new(first.clone()));
        port.bind(Rc::new(second.clone()));

        port.send(|sink| sink.put_frame(Frame { value: 9 }));
        assert_eq!(Frame::default(), first.sample());
        assert_eq!(Frame { value: 9 }, second.sample());
    }

    #[test]
    fn clones_share_one_mailbox() {
        let inbox = InPort::new("FrameIn");
        let other = inbox.clone();
        other.deliver(Frame { value: 4 });
        assert_eq!(Frame { value: 4 }, inbox.sample());
        assert_eq!(1, other.received_count());
    }
}
