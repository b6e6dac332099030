// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.

use super::{App, Message};
use crate::audio::{decode, AudioOutput, AutoplayFallback, DecodedTrack, SinkCommand};
use crate::error::Error;
use crate::ui::player_bar;
use crate::video::feed::FeedEvent;
use iced::widget::image;
use iced::Task;
use std::sync::Arc;
use std::time::Instant;

impl App {
    pub(super) fn handle_player_bar(&mut self, message: player_bar::Message) -> Task<Message> {
        match message {
            player_bar::Message::TogglePlayback => self.handle_toggle(),
        }
    }

    /// Play/pause toggle: reads the current flag, issues the inverse
    /// command, flips the flag.
    ///
    /// A press on the toggle is also a pointer gesture, so while the
    /// autoplay fallback is waiting it resolves the wait instead of
    /// toggling a playback that never started.
    fn handle_toggle(&mut self) -> Task<Message> {
        if self.autoplay.is_some_and(AutoplayFallback::is_waiting) {
            return self.handle_pointer_pressed();
        }

        match self.player.toggle() {
            SinkCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                }
                Task::none()
            }
            SinkCommand::Play => self.start_sink(),
        }
    }

    /// Resumes the output, opening it first if this is the first play.
    /// The flag stays flipped even when the device refuses; the refusal is
    /// logged and the next toggle tries again.
    fn start_sink(&mut self) -> Task<Message> {
        if let Some(sink) = &self.sink {
            sink.resume();
            return self.ensure_track();
        }
        match AudioOutput::new(self.volume, true) {
            Ok(sink) => {
                sink.resume();
                self.sink = Some(sink);
                self.ensure_track()
            }
            Err(e) => {
                tracing::error!("soundtrack playback failed to start: {e}");
                Task::none()
            }
        }
    }

    /// The gesture-driven retry of a refused automatic start. Runs at most
    /// once: afterwards the fallback is in a terminal state and the pointer
    /// listener is no longer armed.
    pub(super) fn handle_pointer_pressed(&mut self) -> Task<Message> {
        let Some(state) = self.autoplay else {
            return Task::none();
        };
        if !state.is_waiting() {
            return Task::none();
        }

        match AudioOutput::new(self.volume, true) {
            Ok(sink) => {
                sink.resume();
                self.sink = Some(sink);
                self.autoplay = Some(state.after_retry(true));
                self.player.mark_playing();
                self.ensure_track()
            }
            Err(e) => {
                self.autoplay = Some(state.after_retry(false));
                tracing::error!("soundtrack playback refused again, giving up: {e}");
                Task::none()
            }
        }
    }

    /// Kicks off the soundtrack decode once the output exists, so the
    /// decoder can target the device's actual rate and channel count.
    pub(super) fn ensure_track(&mut self) -> Task<Message> {
        if self.track_loading || self.track_failed {
            return Task::none();
        }
        let Some(sink) = &self.sink else {
            return Task::none();
        };
        if sink.has_track() {
            return Task::none();
        }

        self.track_loading = true;
        let path = self.soundtrack.clone();
        let rate = sink.sample_rate();
        let channels = sink.channels();
        Task::perform(
            async move { decode::decode_track(&path, rate, channels) },
            Message::TrackLoaded,
        )
    }

    pub(super) fn handle_track_loaded(
        &mut self,
        result: Result<DecodedTrack, Error>,
    ) -> Task<Message> {
        self.track_loading = false;
        match result {
            Ok(track) => {
                self.player.set_duration(track.duration_secs);
                if let Some(sink) = &self.sink {
                    sink.load_track(Arc::clone(&track.samples));
                }
                tracing::info!(duration_secs = track.duration_secs, "soundtrack ready");
            }
            Err(e) => {
                self.track_failed = true;
                tracing::error!("failed to load soundtrack: {e}");
            }
        }
        Task::none()
    }

    pub(super) fn handle_animation_tick(&mut self, now: Instant) -> Task<Message> {
        self.intro_elapsed = now.duration_since(self.intro_started).as_secs_f32();
        if self.intro.is_finished(self.intro_elapsed) {
            // Latch: the frame tick detaches and never comes back.
            self.intro_running = false;
        }
        Task::none()
    }

    pub(super) fn handle_player_tick(&mut self) -> Task<Message> {
        if let Some(sink) = &self.sink {
            self.player.refresh_position(sink.position_secs());
        }
        Task::none()
    }

    pub(super) fn handle_feed_event(&mut self, event: FeedEvent) -> Task<Message> {
        match event {
            FeedEvent::Frame {
                rgba,
                width,
                height,
            } => {
                self.frame = Some(image::Handle::from_rgba(width, height, rgba));
            }
            FeedEvent::Failed(message) => {
                // The scene keeps rendering over the plain backdrop.
                self.feed_alive = false;
                tracing::warn!("background clip disabled: {message}");
            }
        }
        Task::none()
    }
}
