//! État partagé du lecteur : type de lecteur, type de vidéo, verrouillage.
//!
//! Trois cellules [`StateCell`] alimentées par le pilote externe, une par
//! énumération. Le reste du process lit la variante courante ou s'abonne aux
//! transitions ; il n'existe aucune contrainte de légalité entre variantes,
//! la source externe pilote entièrement les transitions.
//!
//! ```
//! use pmoshared::{get_shared_state, PlayerType};
//!
//! let state = get_shared_state();
//! state.player_type.set_from_name("FULLSCREEN");
//! assert_eq!(state.player_type.current(), PlayerType::Fullscreen);
//! ```

mod lock_mode;
mod player_type;
mod video_type;

pub use lock_mode::LockModeState;
pub use player_type::PlayerType;
pub use video_type::VideoType;

use once_cell::sync::Lazy;
use pmostate::StateCell;

/// Contexte possédant les trois cellules d'état du lecteur.
///
/// Chaque cellule est indépendante : pas de verrou croisé, les mises à jour
/// concurrentes sur des cellules distinctes ne se gênent pas.
///
/// Construire une instance fraîche avec [`SharedState::new`] pour isoler les
/// tests ; le reste du process passe par [`get_shared_state`].
pub struct SharedState {
    pub player_type: StateCell<PlayerType>,
    pub video_type: StateCell<VideoType>,
    pub lock_mode: StateCell<LockModeState>,
}

impl SharedState {
    pub fn new() -> Self {
        Self {
            player_type: StateCell::new("PlayerType", PlayerType::Minimized),
            video_type: StateCell::new("VideoType", VideoType::Unknown),
            lock_mode: StateCell::new("LockModeState", LockModeState::Unknown),
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

static SHARED_STATE: Lazy<SharedState> = Lazy::new(SharedState::new);

/// Instance process-wide, créée au premier accès et jamais détruite.
pub fn get_shared_state() -> &'static SharedState {
    &SHARED_STATE
}
