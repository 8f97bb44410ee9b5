//! Application-ready announcement.
//!
//! The app announces its route list exactly once after the initial render;
//! interested parties register listeners instead of the app writing into an
//! ambient global. A listener registered after the announcement is invoked
//! immediately with the recorded routes.

#[cfg(test)]
#[path = "ready_test.rs"]
mod ready_test;

use std::cell::RefCell;

type Listener = Box<dyn Fn(&[String])>;

thread_local! {
    static LISTENERS: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
    static ANNOUNCED: RefCell<Option<Vec<String>>> = const { RefCell::new(None) };
}

/// Register a listener for the application-ready announcement.
pub fn on_ready(listener: impl Fn(&[String]) + 'static) {
    let announced = ANNOUNCED.with(|slot| slot.borrow().clone());
    if let Some(routes) = announced {
        listener(&routes);
        return;
    }
    LISTENERS.with(|listeners| listeners.borrow_mut().push(Box::new(listener)));
}

/// Announce that the application finished its initial render, carrying the
/// list of routes it serves. Only the first call has any effect; returns
/// whether this call was the one that fired.
pub fn announce(routes: &[&str]) -> bool {
    let recorded: Vec<String> = routes.iter().map(|route| (*route).to_owned()).collect();
    let first = ANNOUNCED.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return false;
        }
        *slot = Some(recorded.clone());
        true
    });
    if !first {
        return false;
    }
    // Drain before invoking so a listener can itself call `on_ready`.
    let listeners = LISTENERS.with(std::cell::RefCell::take);
    for listener in &listeners {
        listener(&recorded);
    }
    true
}

#[cfg(test)]
pub(crate) fn reset() {
    LISTENERS.with(|listeners| listeners.borrow_mut().clear());
    ANNOUNCED.with(|slot| *slot.borrow_mut() = None);
}
