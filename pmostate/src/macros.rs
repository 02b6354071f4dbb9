/// Macro pour définir une énumération suivie par une [`StateCell`].
///
/// Génère l'enum, l'implémentation de [`StateVariant`] (liste des variantes
/// et noms stables) et un `Display` qui affiche le nom stable. L'unicité des
/// noms est garantie par construction : un nom par variante, une variante
/// par identifiant.
///
/// # Syntaxe
///
/// ```ignore
/// state_enum! {
///     /// Documentation de l'enum.
///     pub enum TransportState {
///         Stopped => "STOPPED",
///         Playing => "PLAYING",
///         PausedPlayback => "PAUSED_PLAYBACK",
///     }
/// }
/// ```
///
/// # Examples
///
/// ```
/// use pmostate::{state_enum, StateCell, StateVariant};
///
/// state_enum! {
///     pub enum Gate {
///         Closed => "CLOSED",
///         Open => "OPEN",
///     }
/// }
///
/// let cell = StateCell::new("Gate", Gate::Closed);
/// cell.set_from_name("OPEN");
/// assert_eq!(cell.current(), Gate::Open);
/// assert_eq!(Gate::Open.name(), "OPEN");
/// ```
///
/// [`StateCell`]: crate::StateCell
/// [`StateVariant`]: crate::StateVariant
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $str:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant
            ),+
        }

        impl $crate::StateVariant for $name {
            const VARIANTS: &'static [Self] = &[
                $( Self::$variant ),+
            ];

            fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant => $str ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::StateVariant::name(self))
            }
        }
    };
}
