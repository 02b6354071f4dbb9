use pmostate::state_enum;

state_enum! {
    /// Type de vidéo musicale.
    pub enum VideoType {
        Unknown => "MUSIC_VIDEO_TYPE_UNKNOWN",
        Atv => "MUSIC_VIDEO_TYPE_ATV",
        Omv => "MUSIC_VIDEO_TYPE_OMV",
        Ugc => "MUSIC_VIDEO_TYPE_UGC",
        Shoulder => "MUSIC_VIDEO_TYPE_SHOULDER",
        OfficialSourceMusic => "MUSIC_VIDEO_TYPE_OFFICIAL_SOURCE_MUSIC",
        PrivatelyOwnedTrack => "MUSIC_VIDEO_TYPE_PRIVATELY_OWNED_TRACK",
        LiveStream => "MUSIC_VIDEO_TYPE_LIVE_STREAM",
        PodcastEpisode => "MUSIC_VIDEO_TYPE_PODCAST_EPISODE",
    }
}

impl VideoType {
    /// Vrai pour un clip vidéo officiel (OMV).
    pub fn is_music_video(self) -> bool {
        matches!(self, Self::Omv)
    }
}
