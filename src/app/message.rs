// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::audio::DecodedTrack;
use crate::error::Error;
use crate::ui::player_bar;
use crate::video::feed::FeedEvent;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Message from the player overlay.
    PlayerBar(player_bar::Message),

    /// A pointer press landed on the window background while the autoplay
    /// fallback was waiting for a gesture.
    PointerPressed,

    /// Frame-cadence tick driving the intro choreography.
    AnimationTick(Instant),

    /// Coarse tick refreshing the player clock.
    PlayerTick(Instant),

    /// Result from decoding the soundtrack.
    TrackLoaded(Result<DecodedTrack, Error>),

    /// Event from the background clip frame feed.
    Feed(FeedEvent),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional asset directory override.
    pub assets_dir: Option<String>,

    /// Optional background clip override; skips the random pick.
    pub clip: Option<String>,

    /// Start without attempting soundtrack playback.
    pub muted: bool,
}
