use std::{cell::RefCell, rc::Rc};

use crate::measurements::Measurement;


/***
 * Observer
 *
 *  An Observer is anything that wants to hear about every published
 * Measurement. There is no error channel: an observer that panics unwinds
 * straight through the subject's notification pass.
 */
pub trait Observer {
    fn update(&mut self, m: Measurement);
}

/// Something that can render its current state to stdout.
pub trait DisplayElement {
    fn display(&self);
}

/// Shared handle to a registered observer. The subject only keeps the handle
/// for dispatch; whoever created the observer keeps it alive as well.
pub type ObserverRef = Rc<RefCell<dyn Observer>>;

/***
 * Subject
 *
 *  Keeps an ordered list of observers and pushes measurements to them.
 *      - registration is append-only, no dedup
 *      - removal drops every entry that is the same observer (same Rc)
 *      - notification is synchronous, in registration order
 */
pub trait Subject {
    fn register_observer(&mut self, o: ObserverRef);
    fn remove_observer(&mut self, o: &ObserverRef);
    fn notify_observers(&self, m: Measurement);
}

/// Identity comparison for observer handles. Only the allocation address is
/// compared, so two handles to the same observer match even when they were
/// coerced from different concrete `Rc` types.
pub fn same_observer(a: &ObserverRef, b: &ObserverRef) -> bool {
    Rc::ptr_eq(a, b)
}
