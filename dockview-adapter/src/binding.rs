use alloc::string::String;
use alloc::vec::Vec;

use crate::key::Map;
use crate::{Host, ListenerId, TargetId, Trigger};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    #[error("could not resolve element {0}")]
    Unresolved(String),
    #[error("popover was torn down")]
    TornDown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstalledListener<K> {
    pub event: String,
    pub listener: ListenerId,
    pub trigger: Trigger<K>,
}

/// The listeners installed on one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding<K> {
    pub listeners: Vec<InstalledListener<K>>,
}

/// Trigger bindings keyed by element id.
///
/// Every installed listener gets a fresh [`ListenerId`]; ids are never reused, so a listener
/// that fires after its binding was removed resolves to nothing.
#[derive(Clone, Debug)]
pub struct Bindings<K> {
    by_id: Map<K, Binding<K>>,
    triggers: Map<ListenerId, Trigger<K>>,
    next_listener: u64,
}

impl<K: TargetId> Default for Bindings<K> {
    fn default() -> Self {
        Self {
            by_id: Map::new(),
            triggers: Map::new(),
            next_listener: 0,
        }
    }
}

impl<K: TargetId> Bindings<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn is_attached(&self, id: &K) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn get(&self, id: &K) -> Option<&Binding<K>> {
        self.by_id.get(id)
    }

    pub fn ids(&self) -> Vec<K> {
        self.by_id.keys().cloned().collect()
    }

    pub fn trigger(&self, listener: ListenerId) -> Option<&Trigger<K>> {
        self.triggers.get(&listener)
    }

    /// Installs show/hide listeners on the element behind `id`.
    ///
    /// An already attached `id` is detached first. Returns the number of listeners installed.
    pub fn attach<H>(
        &mut self,
        host: &mut H,
        id: K,
        show_events: &[String],
        hide_events: &[String],
    ) -> Result<usize, BindError>
    where
        H: Host<Id = K>,
    {
        if self.is_attached(&id) {
            self.detach(host, &id);
        }

        let Some(element) = host.get_element(&id) else {
            dwarn!(id = ?id, "could not attach overlay to element");
            return Err(BindError::Unresolved(alloc::format!("{id:?}")));
        };

        let events = show_events
            .iter()
            .map(|e| (e, Trigger::Show(id.clone())))
            .chain(hide_events.iter().map(|e| (e, Trigger::Hide)));

        let mut listeners = Vec::with_capacity(show_events.len() + hide_events.len());
        for (event, trigger) in events {
            let listener = ListenerId(self.next_listener);
            self.next_listener = self.next_listener.wrapping_add(1);
            host.add_listener(&element, event, listener);
            self.triggers.insert(listener, trigger.clone());
            listeners.push(InstalledListener {
                event: event.clone(),
                listener,
                trigger,
            });
        }

        let installed = listeners.len();
        ddebug!(id = ?id, installed, "attached");
        self.by_id.insert(id, Binding { listeners });
        Ok(installed)
    }

    /// Removes every listener installed for `id`.
    ///
    /// If the element no longer resolves, the host is not called, but the listeners are still
    /// forgotten. Returns the number of listeners dropped.
    pub fn detach<H>(&mut self, host: &mut H, id: &K) -> usize
    where
        H: Host<Id = K>,
    {
        let Some(binding) = self.by_id.remove(id) else {
            return 0;
        };
        for installed in &binding.listeners {
            self.triggers.remove(&installed.listener);
        }

        match host.get_element(id) {
            Some(element) => {
                for installed in &binding.listeners {
                    host.remove_listener(&element, &installed.event, installed.listener);
                }
            }
            None => {
                dtrace!(id = ?id, "detach: element gone, listeners dropped");
            }
        }

        ddebug!(id = ?id, removed = binding.listeners.len(), "detached");
        binding.listeners.len()
    }

    pub fn detach_all<H>(&mut self, host: &mut H) -> usize
    where
        H: Host<Id = K>,
    {
        let ids = self.ids();
        ids.iter().map(|id| self.detach(host, id)).sum()
    }
}
