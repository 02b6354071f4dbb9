//! Registre d'observateurs d'une [`StateCell`](crate::StateCell).
//!
//! Deux styles d'abonnement cohabitent : des callbacks synchrones invoqués
//! dans l'ordre d'enregistrement (avec un identifiant stable permettant le
//! désabonnement explicite), et des channels `crossbeam` pour les
//! consommateurs qui préfèrent recevoir les transitions depuis un autre
//! thread. Les receivers abandonnés sont purgés au premier envoi raté.

use crossbeam_channel::{Receiver, Sender, unbounded};

/// Identifiant stable d'un callback enregistré, retourné par `subscribe`.
///
/// Le désabonnement est explicite : conserver ce handle tant que le callback
/// doit rester actif, puis le passer à `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type ObserverFn<V> = Box<dyn Fn(V) + Send + Sync>;

pub(crate) struct ObserverRegistry<V> {
    callbacks: Vec<(ObserverId, ObserverFn<V>)>,
    channels: Vec<Sender<V>>,
    next_id: u64,
}

impl<V: Copy> ObserverRegistry<V> {
    pub(crate) fn new() -> Self {
        Self {
            callbacks: Vec::new(),
            channels: Vec::new(),
            next_id: 0,
        }
    }

    pub(crate) fn register(&mut self, observer: impl Fn(V) + Send + Sync + 'static) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(observer)));
        id
    }

    pub(crate) fn remove(&mut self, id: ObserverId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(registered, _)| *registered != id);
        self.callbacks.len() != before
    }

    pub(crate) fn open_channel(&mut self) -> Receiver<V> {
        let (tx, rx) = unbounded::<V>();
        self.channels.push(tx);
        rx
    }

    /// Diffuse une transition : callbacks dans l'ordre d'enregistrement,
    /// puis channels (les senders déconnectés sont retirés).
    pub(crate) fn notify(&mut self, value: V) {
        for (_, observer) in &self.callbacks {
            observer(value);
        }
        self.channels.retain(|tx| tx.send(value).is_ok());
    }

    pub(crate) fn len(&self) -> usize {
        self.callbacks.len() + self.channels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_callbacks_invoked_in_registration_order() {
        let mut registry = ObserverRegistry::<u8>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let seen = seen.clone();
            registry.register(move |v| seen.lock().unwrap().push((tag, v)));
        }

        registry.notify(7);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![("first", 7), ("second", 7), ("third", 7)]
        );
    }

    #[test]
    fn test_remove_stops_delivery() {
        let mut registry = ObserverRegistry::<u8>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let seen_a = seen.clone();
        let a = registry.register(move |v| seen_a.lock().unwrap().push(("a", v)));
        let seen_b = seen.clone();
        let _b = registry.register(move |v| seen_b.lock().unwrap().push(("b", v)));

        registry.notify(1);
        assert!(registry.remove(a));
        assert!(!registry.remove(a));
        registry.notify(2);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![("a", 1), ("b", 1), ("b", 2)]
        );
    }

    #[test]
    fn test_dropped_receiver_is_pruned() {
        let mut registry = ObserverRegistry::<u8>::new();

        let kept = registry.open_channel();
        let dropped = registry.open_channel();
        assert_eq!(registry.len(), 2);

        drop(dropped);
        registry.notify(3);

        assert_eq!(kept.try_recv(), Ok(3));
        assert_eq!(registry.len(), 1);
    }
}
