use derive_more::Display;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub struct ListenerId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerChannel {
    Move,
    Up,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(ListenerId, PointerChannel)>,
}

/// Where drag listeners get installed. Pointer move/up notifications are only
/// routed to the dial while a listener is present.
#[derive(Debug, Clone, Default)]
pub struct PointerHub {
    registry: Arc<Mutex<Registry>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs one move and one up listener. Both stay installed until the
    /// returned token is dropped.
    pub fn subscribe(&self) -> Subscription {
        let mut registry = self.registry.lock();
        let id = ListenerId(registry.next_id);
        registry.next_id += 1;
        registry.listeners.push((id, PointerChannel::Move));
        registry.listeners.push((id, PointerChannel::Up));
        log::trace!("pointer listeners {} installed", id);

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    pub fn listener_count(&self, channel: PointerChannel) -> usize {
        self.registry
            .lock()
            .listeners
            .iter()
            .filter(|(_, c)| *c == channel)
            .count()
    }

    pub fn is_listening(&self, channel: PointerChannel) -> bool {
        self.listener_count(channel) > 0
    }
}

/// Drag-scoped listener registration. Dropping it uninstalls the listeners.
#[derive(Debug)]
pub struct Subscription {
    id: ListenerId,
    registry: Weak<Mutex<Registry>>,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // hub already gone, nothing left to uninstall
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        registry.lock().listeners.retain(|(id, _)| *id != self.id);
        log::trace!("pointer listeners {} removed", self.id);
    }
}
