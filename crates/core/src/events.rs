//! Event fan-out from the well to the game loop.
//!
//! Subscribers register per [`WellEventKind`] and are called synchronously, in
//! registration order, whenever the well emits a matching event. Callbacks only
//! see the event, never the well, so they cannot re-enter the simulation.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::types::{WellEvent, WellEventKind};

pub type Observer = Box<dyn FnMut(&WellEvent)>;

#[derive(Default)]
pub struct Observers {
    by_kind: [Vec<Observer>; WellEventKind::COUNT],
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, kind: WellEventKind, observer: impl FnMut(&WellEvent) + 'static) {
        self.by_kind[kind.index()].push(Box::new(observer));
    }

    pub fn notify(&mut self, event: WellEvent) {
        for observer in &mut self.by_kind[event.kind().index()] {
            observer(&event);
        }
    }

    pub fn subscriber_count(&self, kind: WellEventKind) -> usize {
        self.by_kind[kind.index()].len()
    }

    /// Subscribe a shared log to every event kind.
    pub fn collect_all(&mut self) -> EventLog {
        let log = EventLog::default();
        for kind in WellEventKind::ALL {
            let sink = log.clone();
            self.subscribe(kind, move |event| sink.push(*event));
        }
        log
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_map();
        for kind in WellEventKind::ALL {
            list.entry(&kind, &self.subscriber_count(kind));
        }
        list.finish()
    }
}

/// Shared, append-only record of emitted events.
///
/// Lets the game loop react after the step returns instead of inside a callback.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<WellEvent>>>,
}

impl EventLog {
    pub fn push(&self, event: WellEvent) {
        self.events.borrow_mut().push(event);
    }

    /// Take everything recorded so far, oldest first
    pub fn drain(&self) -> Vec<WellEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}
