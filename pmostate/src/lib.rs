//! Cellules d'état observables pour énumérations fermées.
//!
//! Ce crate fournit [`StateCell`], un conteneur synchronisé de la variante
//! « courante » d'une énumération, mis à jour par identifiants texte venant
//! d'une source externe et notifiant ses observateurs exactement une fois
//! par transition réelle. Les diagnostics (identifiant inconnu, transition
//! confirmée) passent par `tracing` ; le formatage et la destination sont
//! l'affaire du subscriber.
//!
//! La macro [`state_enum!`] définit une énumération prête à l'emploi :
//!
//! ```
//! use pmostate::{state_enum, StateCell};
//!
//! state_enum! {
//!     pub enum TransportState {
//!         Stopped => "STOPPED",
//!         Playing => "PLAYING",
//!     }
//! }
//!
//! let cell = StateCell::new("TransportState", TransportState::Stopped);
//! let rx = cell.watch();
//! cell.set_from_name("PLAYING");
//! assert_eq!(cell.current(), TransportState::Playing);
//! assert_eq!(rx.try_recv(), Ok(TransportState::Playing));
//! ```

mod cell;
mod errors;
mod macros;
mod observers;
mod variant;

pub use cell::{StateCell, UpdateOutcome};
pub use errors::StateCellError;
pub use observers::ObserverId;
pub use variant::StateVariant;
