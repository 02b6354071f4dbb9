use pmostate::state_enum;

state_enum! {
    /// Type de lecteur WatchWhile.
    ///
    /// Les noms stables sont les identifiants envoyés tels quels par le
    /// pilote externe.
    pub enum PlayerType {
        Dismissed => "DISMISSED",
        Minimized => "MINIMIZED",
        MaximizedNowPlaying => "MAXIMIZED_NOW_PLAYING",
        MaximizedPlayerAdditionalView => "MAXIMIZED_PLAYER_ADDITIONAL_VIEW",
        Fullscreen => "FULLSCREEN",
        SlidingVertically => "SLIDING_VERTICALLY",
        QueueExpanding => "QUEUE_EXPANDING",
        SlidingHorizontally => "SLIDING_HORIZONTALLY",
    }
}

impl PlayerType {
    /// Vrai si le lecteur est fermé ou réduit.
    pub fn is_dismissed_or_minimized(self) -> bool {
        matches!(self, Self::Dismissed | Self::Minimized)
    }
}
