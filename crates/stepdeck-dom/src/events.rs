//! DOM Events
//!
//! Listener bookkeeping for the events a presentation page reacts to.
//! Handlers themselves live with whoever registered them; the registry only
//! hands back the listener IDs that a dispatch reaches.

use crate::NodeId;
use std::collections::HashMap;

/// DOM event types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
}

impl EventType {
    /// DOM event name
    pub fn name(&self) -> &'static str {
        match self {
            EventType::Click => "click",
        }
    }
}

/// Registered listener handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Event listener storage
#[derive(Debug, Default)]
pub struct EventListenerRegistry {
    /// (node, event type) -> listeners in registration order
    listeners: HashMap<(NodeId, EventType), Vec<ListenerId>>,
    next_id: u64,
}

impl EventListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event listener
    pub fn add_listener(&mut self, node: NodeId, event_type: EventType) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;

        self.listeners.entry((node, event_type)).or_default().push(id);
        id
    }

    /// Remove an event listener
    pub fn remove_listener(&mut self, node: NodeId, event_type: EventType, listener: ListenerId) -> bool {
        let Some(list) = self.listeners.get_mut(&(node, event_type)) else {
            return false;
        };
        let Some(pos) = list.iter().position(|&id| id == listener) else {
            return false;
        };
        list.remove(pos);
        if list.is_empty() {
            self.listeners.remove(&(node, event_type));
        }
        true
    }

    /// Listeners for a node and event type
    pub fn listeners(&self, node: NodeId, event_type: EventType) -> &[ListenerId] {
        self.listeners
            .get(&(node, event_type))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listeners_keep_registration_order() {
        let mut reg = EventListenerRegistry::new();
        let a = reg.add_listener(NodeId(3), EventType::Click);
        let b = reg.add_listener(NodeId(3), EventType::Click);
        assert_eq!(reg.listeners(NodeId(3), EventType::Click), &[a, b]);
        assert!(reg.listeners(NodeId(4), EventType::Click).is_empty());
    }

    #[test]
    fn test_remove_listener() {
        let mut reg = EventListenerRegistry::new();
        let a = reg.add_listener(NodeId(1), EventType::Click);
        assert!(reg.remove_listener(NodeId(1), EventType::Click, a));
        assert!(!reg.remove_listener(NodeId(1), EventType::Click, a));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_len_counts_across_nodes() {
        let mut reg = EventListenerRegistry::new();
        reg.add_listener(NodeId(1), EventType::Click);
        reg.add_listener(NodeId(1), EventType::Click);
        reg.add_listener(NodeId(2), EventType::Click);
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn test_event_names() {
        assert_eq!(EventType::Click.name(), "click");
    }
}
