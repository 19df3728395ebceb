//! Action dispatch and listener notification.
//!
//! The dispatcher owns the session. Every action runs to completion
//! (mutation, status recomputation) before listeners see the result, so a
//! listener always observes a consistent session.

use log::debug;

use super::event::SessionEvent;
use crate::core::{Events, LifeAction, LifeResult, Session, SessionConfig};

/// Callback invoked once per event with the updated session.
pub type Listener = Box<dyn FnMut(&Session, &SessionEvent)>;

/// Owns a session and routes actions into it.
///
/// ## Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use life_counter::core::{LifeAction, SessionConfig};
/// use life_counter::events::Dispatcher;
///
/// let mut dispatcher = Dispatcher::new(SessionConfig::duel());
/// let renders = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&renders);
/// dispatcher.subscribe(move |_, _| counter.set(counter.get() + 1));
///
/// let player = dispatcher.session().player_at(0).unwrap();
/// dispatcher.dispatch(LifeAction::ChangeLife { player, delta: -1 }).unwrap();
/// assert_eq!(renders.get(), 1);
/// ```
pub struct Dispatcher {
    session: Session,
    listeners: Vec<Listener>,
}

impl Dispatcher {
    /// Create a dispatcher over a fresh session.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_session(Session::new(config))
    }

    /// Create a dispatcher over an existing session.
    #[must_use]
    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            listeners: Vec::new(),
        }
    }

    /// Get the current session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Register a listener (typically a render callback).
    pub fn subscribe(&mut self, listener: impl FnMut(&Session, &SessionEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply an action and notify listeners of each resulting event.
    ///
    /// On error the session is unchanged and no listener runs.
    pub fn dispatch(&mut self, action: LifeAction) -> LifeResult<Events> {
        debug!("dispatching {action:?}");
        let events = self.session.apply(&action)?;

        for event in &events {
            for listener in &mut self.listeners {
                listener(&self.session, event);
            }
        }

        Ok(events)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("session", &self.session)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
