use std::fmt;

/// Trait de base pour les énumérations suivies par une [`StateCell`].
///
/// Chaque type implémentant ce trait expose un ensemble fermé de variantes,
/// chacune identifiée par un nom stable utilisé pour les résolutions
/// nom → variante venant du pilote externe.
///
/// L'ordre de [`StateVariant::VARIANTS`] est l'ordre de déclaration ; il ne
/// porte aucune sémantique de comparaison, il sert uniquement à construire
/// la table de résolution.
///
/// Préférer la macro [`state_enum!`](crate::state_enum) à une implémentation
/// manuelle : elle garantit l'unicité des noms par construction.
///
/// [`StateCell`]: crate::StateCell
pub trait StateVariant: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Toutes les variantes du type, dans l'ordre de déclaration.
    const VARIANTS: &'static [Self];

    /// Nom stable de la variante, unique dans le type.
    fn name(&self) -> &'static str;
}
