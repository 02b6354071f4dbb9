//! Cellule d'état observable pour une énumération fermée.
//!
//! Une [`StateCell`] conserve la variante « courante » d'une énumération,
//! alimentée par des identifiants texte venant d'un pilote externe, et
//! notifie ses observateurs à chaque transition réelle. Les lectures et les
//! mises à jour peuvent venir de threads différents sans coordination côté
//! appelant.

use std::collections::HashMap;

use parking_lot::{Mutex, RwLock};

use crate::errors::StateCellError;
use crate::observers::{ObserverId, ObserverRegistry};
use crate::variant::StateVariant;

/// Résultat d'une mise à jour. Purement informatif : aucune erreur n'est
/// propagée à l'appelant, un identifiant inconnu est signalé et absorbé.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome<V> {
    /// La valeur a changé ; les observateurs ont été notifiés.
    Changed { previous: V, current: V },
    /// L'identifiant résout vers la variante déjà en place.
    Unchanged(V),
    /// Identifiant inconnu de la table de résolution, valeur conservée.
    Unrecognized,
}

impl<V> UpdateOutcome<V> {
    pub fn is_changed(&self) -> bool {
        matches!(self, UpdateOutcome::Changed { .. })
    }
}

/// Cellule d'état synchronisée pour une énumération [`StateVariant`].
///
/// La table nom → variante est construite une seule fois à la création. La
/// valeur courante vit derrière un `RwLock` pour que [`current`] ne soit
/// jamais suspendu par l'exécution des observateurs ; la section critique
/// « lire, comparer, écrire, notifier » est sérialisée par le mutex du
/// registre, ce qui garantit exactement une notification par transition
/// réelle. Deux cellules distinctes sont totalement indépendantes.
///
/// Les observateurs sont exécutés de façon synchrone sur le thread qui
/// effectue la mise à jour, dans l'ordre d'enregistrement. Un observateur
/// lent retarde ce `set_from_name`-là, rien d'autre ; un observateur ne doit
/// pas rappeler `subscribe`/`set_from_name` sur la même cellule.
///
/// [`current`]: StateCell::current
pub struct StateCell<V: StateVariant> {
    label: &'static str,
    lookup: HashMap<&'static str, V>,
    value: RwLock<V>,
    registry: Mutex<ObserverRegistry<V>>,
}

impl<V: StateVariant> StateCell<V> {
    /// Crée une cellule avec sa valeur par défaut.
    ///
    /// `label` est le nom de la cellule dans les diagnostics (par exemple
    /// "PlayerType").
    ///
    /// # Panics
    ///
    /// Si deux variantes partagent le même nom, ou si `default` n'appartient
    /// pas à `V::VARIANTS`. Ce sont des invariants de construction, vérifiés
    /// une seule fois, jamais sur le chemin chaud.
    pub fn new(label: &'static str, default: V) -> Self {
        assert!(
            !V::VARIANTS.is_empty(),
            "{label}: variant set must not be empty"
        );
        assert!(
            V::VARIANTS.contains(&default),
            "{label}: default {default:?} is not a declared variant"
        );

        let mut lookup = HashMap::with_capacity(V::VARIANTS.len());
        for variant in V::VARIANTS {
            if lookup.insert(variant.name(), *variant).is_some() {
                panic!("{label}: duplicate variant name {:?}", variant.name());
            }
        }

        Self {
            label,
            lookup,
            value: RwLock::new(default),
            registry: Mutex::new(ObserverRegistry::new()),
        }
    }

    /// Nom de la cellule dans les diagnostics.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Résout un identifiant texte vers sa variante.
    pub fn resolve(&self, name: &str) -> Result<V, StateCellError> {
        self.lookup
            .get(name)
            .copied()
            .ok_or_else(|| StateCellError::UnknownVariant {
                cell: self.label,
                name: name.to_string(),
            })
    }

    /// Variante courante. Ne bloque jamais sur une notification en cours.
    pub fn current(&self) -> V {
        *self.value.read()
    }

    /// Mise à jour pilotée par identifiant texte.
    ///
    /// Un identifiant inconnu est signalé (diagnostic d'erreur) et absorbé :
    /// la valeur courante est conservée et l'appel retourne normalement. Le
    /// pilote externe peut envoyer des noms de variantes que cette version
    /// ne connaît pas encore.
    pub fn set_from_name(&self, name: &str) -> UpdateOutcome<V> {
        match self.resolve(name) {
            Ok(variant) => self.set(variant),
            Err(err) => {
                tracing::error!("{err}");
                UpdateOutcome::Unrecognized
            }
        }
    }

    /// Mise à jour typée. Notifie les observateurs si et seulement si la
    /// variante diffère de celle en place.
    pub fn set(&self, new_value: V) -> UpdateOutcome<V> {
        // Section critique par cellule : le registre sérialise les mises à
        // jour concurrentes, la valeur reste lisible pendant la notification.
        let mut registry = self.registry.lock();

        let previous = *self.value.read();
        if previous == new_value {
            tracing::trace!("{} unchanged: {}", self.label, new_value.name());
            return UpdateOutcome::Unchanged(new_value);
        }

        *self.value.write() = new_value;
        tracing::debug!(
            "{} changed to: {} (was {})",
            self.label,
            new_value.name(),
            previous.name()
        );
        registry.notify(new_value);

        UpdateOutcome::Changed {
            previous,
            current: new_value,
        }
    }

    /// Enregistre un callback invoqué à chaque future transition (pas
    /// d'invocation rétroactive avec la valeur courante).
    pub fn subscribe(&self, observer: impl Fn(V) + Send + Sync + 'static) -> ObserverId {
        self.registry.lock().register(observer)
    }

    /// Retire un callback. Retourne `false` si le handle était déjà retiré.
    ///
    /// Bloque le temps qu'une notification en vol se termine : au retour, le
    /// callback ne sera plus jamais invoqué.
    pub fn unsubscribe(&self, id: ObserverId) -> bool {
        self.registry.lock().remove(id)
    }

    /// Abonnement par channel : chaque transition envoie la nouvelle
    /// variante. Il suffit de drop le receiver pour se désabonner.
    pub fn watch(&self) -> crossbeam_channel::Receiver<V> {
        self.registry.lock().open_channel()
    }

    /// Nombre d'abonnés actifs (callbacks et channels).
    pub fn observer_count(&self) -> usize {
        self.registry.lock().len()
    }
}
