//! Host-level registry of live widget instances.
//!
//! A host owns one registry and maps each widget-kind key to its current
//! live instance. Registering a new instance under a kind tears down and
//! replaces whatever was live before, so "dismiss the previous popup"
//! becomes an explicit registry operation instead of hidden static state.

use log::debug;
use std::collections::HashMap;

/// A widget the registry can manage: anything with an explicit teardown.
pub trait Widget {
    /// Detach listeners and release held state. Called by the registry
    /// when the instance is displaced or deregistered.
    fn teardown(&mut self);
}

/// Mapping from widget-kind key to the current live instance.
#[derive(Default)]
pub struct WidgetRegistry {
    live: HashMap<String, Box<dyn Widget>>,
}

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `widget` as the live instance for `kind`.
    ///
    /// Any prior instance of the same kind is torn down first and returned
    /// so the host can drop or inspect it.
    pub fn register(&mut self, kind: &str, widget: Box<dyn Widget>) -> Option<Box<dyn Widget>> {
        let mut displaced = self.live.insert(kind.to_string(), widget);
        if let Some(prior) = displaced.as_mut() {
            prior.teardown();
            debug!("displaced live '{kind}' widget");
        }
        displaced
    }

    /// Tear down and remove the live instance for `kind`, if any.
    pub fn deregister(&mut self, kind: &str) -> bool {
        match self.live.remove(kind) {
            Some(mut widget) => {
                widget.teardown();
                debug!("deregistered '{kind}' widget");
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.live.contains_key(kind)
    }

    pub fn get_mut(&mut self, kind: &str) -> Option<&mut (dyn Widget + 'static)> {
        self.live.get_mut(kind).map(|w| w.as_mut())
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Tear down every live instance.
    pub fn clear(&mut self) {
        for (kind, widget) in self.live.iter_mut() {
            widget.teardown();
            debug!("deregistered '{kind}' widget");
        }
        self.live.clear();
    }
}
