// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Each subscription is conditional on a piece of application state and
//! detaches as soon as that state clears: the animation tick stops when the
//! choreography ends, the gesture listener disarms once the autoplay
//! fallback resolves, and the clock tick only runs during playback.

use super::Message;
use crate::video::feed;
use iced::{event, mouse, time, Subscription};
use std::path::PathBuf;
use std::time::Duration;

/// Frame-cadence tick for timeline sampling while the intro plays.
///
/// Once the choreography has finished the subscription is dropped, so no
/// per-frame work happens on an idle splash screen.
pub fn create_intro_subscription(intro_running: bool) -> Subscription<Message> {
    if intro_running {
        time::every(Duration::from_millis(16)).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}

/// Coarse tick that refreshes the displayed clock while audio plays.
/// One state write per tick keeps the readout smooth without re-rendering
/// on every audio callback.
pub fn create_player_subscription(is_ticking: bool) -> Subscription<Message> {
    if is_ticking {
        time::every(Duration::from_millis(100)).map(Message::PlayerTick)
    } else {
        Subscription::none()
    }
}

/// One-shot pointer listener for the autoplay fallback.
///
/// Armed only while the fallback is waiting for a gesture. Presses captured
/// by an interactive widget are left to that widget; anywhere else on the
/// window counts as the gesture.
pub fn create_gesture_subscription(armed: bool) -> Subscription<Message> {
    if !armed {
        return Subscription::none();
    }
    event::listen_with(|event, status, _window| match (event, status) {
        (
            event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)),
            event::Status::Ignored,
        ) => Some(Message::PointerPressed),
        _ => None,
    })
}

/// Background clip frame feed.
pub fn create_feed_subscription(
    clip: Option<&PathBuf>,
    alive: bool,
    session_id: u64,
) -> Subscription<Message> {
    match clip {
        Some(path) if alive => feed::frames(path.clone(), session_id).map(Message::Feed),
        _ => Subscription::none(),
    }
}
