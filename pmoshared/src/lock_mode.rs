use pmostate::state_enum;

state_enum! {
    /// État du verrouillage de l'interface pendant la lecture.
    pub enum LockModeState {
        Unknown => "LOCK_MODE_STATE_ENUM_UNKNOWN",
        Unlocked => "LOCK_MODE_STATE_ENUM_UNLOCKED",
        Locked => "LOCK_MODE_STATE_ENUM_LOCKED",
        CanUnlock => "LOCK_MODE_STATE_ENUM_CAN_UNLOCK",
        UnlockExpanded => "LOCK_MODE_STATE_ENUM_UNLOCK_EXPANDED",
        LockedTemporarySuspension => "LOCK_MODE_STATE_ENUM_LOCKED_TEMPORARY_SUSPENSION",
    }
}

impl LockModeState {
    /// Vrai tant que l'interface reste verrouillée, y compris quand le
    /// panneau de déverrouillage est déplié.
    pub fn is_locked(self) -> bool {
        matches!(self, Self::Locked | Self::UnlockExpanded)
    }
}
