//! Change notification for presentation layers.
//!
//! Delivery is synchronous and happens on the caller's thread inside the
//! engine call that produced the change. Within one call a board change
//! is always delivered before the turn change, and the turn change before
//! the state change.

use crate::board::BoardChange;
use crate::types::{GameState, Mark};

/// One observable fact about the engine changing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The board changed; carries snapshots from before and after.
    BoardChanged(BoardChange),
    /// The player to move changed.
    TurnChanged(Mark),
    /// The game phase changed.
    StateChanged(GameState),
}

/// Receives engine notifications.
///
/// Implemented for any `FnMut(&GameEvent)`, so a closure is enough for
/// most subscribers.
pub trait GameObserver {
    /// Called once per event, in delivery order.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Handle returned by [`crate::GameEngine::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("observer#{}", _0)]
pub struct ObserverId(pub(crate) u64);

/// Registered observers in subscription order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn GameObserver>)>,
}

impl Observers {
    pub(crate) fn add(&mut self, observer: Box<dyn GameObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Delivers each event to every observer, event-major.
    pub(crate) fn publish(&mut self, events: &[GameEvent]) {
        for event in events {
            for (_, observer) in &mut self.entries {
                observer.on_event(event);
            }
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(id, _)| id))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_publish_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut observers = Observers::default();

        let first = Rc::clone(&seen);
        observers.add(Box::new(move |event: &GameEvent| {
            first.borrow_mut().push(("first", event.clone()))
        }));
        let second = Rc::clone(&seen);
        observers.add(Box::new(move |event: &GameEvent| {
            second.borrow_mut().push(("second", event.clone()))
        }));

        observers.publish(&[
            GameEvent::TurnChanged(Mark::O),
            GameEvent::StateChanged(GameState::Started),
        ]);

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], ("first", GameEvent::TurnChanged(Mark::O)));
        assert_eq!(seen[1], ("second", GameEvent::TurnChanged(Mark::O)));
        assert_eq!(seen[2].1, GameEvent::StateChanged(GameState::Started));
    }

    #[test]
    fn test_remove() {
        let mut observers = Observers::default();
        let id = observers.add(Box::new(|_: &GameEvent| {}));
        assert_eq!(observers.len(), 1);
        assert!(observers.remove(id));
        assert!(!observers.remove(id));
        assert_eq!(observers.len(), 0);
    }
}
