//! Synchronous change notification.
//!
//! Listeners run inline, in subscription order, while the registry is
//! borrowed mutably; they observe settled state and cannot mutate the registry.

use std::fmt;

/// Identifier of one listener within an [`Emitter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// A broadcast channel of boxed listeners.
pub struct Emitter<T: ?Sized> {
    next_id: u64,
    listeners: Vec<(ListenerId, Box<dyn FnMut(&T)>)>,
}

impl<T: ?Sized> Emitter<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Invoke every listener with `payload`.
    pub fn fire(&mut self, payload: &T) {
        for (_, listener) in &mut self.listeners {
            listener(payload);
        }
    }
}

impl<T: ?Sized> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Emitter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Which registry event a [`Subscription`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    SchemaChanged,
    PropertiesChanged,
}

/// Handle returned by the registry's `on_did_*` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    channel: Channel,
    id: ListenerId,
}

impl Subscription {
    #[must_use]
    pub const fn channel(&self) -> Channel {
        self.channel
    }
}

/// The registry's two event streams.
#[derive(Debug, Default)]
pub struct ChangeNotifier {
    schema_changed: Emitter<()>,
    properties_changed: Emitter<[String]>,
}

impl ChangeNotifier {
    pub fn on_schema_changed(&mut self, listener: impl FnMut(&()) + 'static) -> Subscription {
        Subscription {
            channel: Channel::SchemaChanged,
            id: self.schema_changed.subscribe(listener),
        }
    }

    pub fn on_properties_changed(
        &mut self,
        listener: impl FnMut(&[String]) + 'static,
    ) -> Subscription {
        Subscription {
            channel: Channel::PropertiesChanged,
            id: self.properties_changed.subscribe(listener),
        }
    }

    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        match subscription.channel {
            Channel::SchemaChanged => self.schema_changed.unsubscribe(subscription.id),
            Channel::PropertiesChanged => self.properties_changed.unsubscribe(subscription.id),
        }
    }

    pub fn schema_changed(&mut self) {
        self.schema_changed.fire(&());
    }

    pub fn properties_changed(&mut self, keys: &[String]) {
        self.properties_changed.fire(keys);
    }

    /// Schema change followed by property change, the order every mutating
    /// registry operation uses.
    pub fn both(&mut self, keys: &[String]) {
        self.schema_changed();
        self.properties_changed(keys);
    }
}
