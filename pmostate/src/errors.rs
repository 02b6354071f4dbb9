use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateCellError {
    // Seul cas d'erreur du module : le pilote externe peut envoyer des
    // identifiants inconnus (versions futures), l'état courant est conservé.
    #[error("Unknown {cell} encountered: {name}")]
    UnknownVariant { cell: &'static str, name: String },
}
