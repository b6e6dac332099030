// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the splash scene.
//!
//! The `App` struct wires together the intro choreography, the soundtrack
//! player, and the background clip feed, and translates messages into side
//! effects like opening the audio output or kicking off the decode. Policy
//! decisions (window size, autoplay behavior, asset resolution) stay close
//! to the update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::animation::Choreography;
use crate::audio::{AudioOutput, AutoplayFallback, Player};
use crate::config;
use crate::ui::player_bar;
use crate::video;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Single frame-feed session per run; the clip never changes once picked.
const FEED_SESSION: u64 = 1;

/// Subdirectory of the asset directory holding the background clips.
const CLIPS_SUBDIR: &str = "clips";

/// Root Iced application state.
pub struct App {
    /// View-facing playback state (flags and clocks).
    player: Player,
    /// Autoplay fallback state; `None` when autoplay is disabled.
    autoplay: Option<AutoplayFallback>,
    /// The cpal output stream, once the platform granted one.
    sink: Option<AudioOutput>,
    /// Soundtrack file resolved at startup.
    soundtrack: PathBuf,
    /// Configured soundtrack volume.
    volume: f32,
    track_title: String,
    track_artist: String,
    /// A decode task is in flight.
    track_loading: bool,
    /// The decode failed; logged once, never retried.
    track_failed: bool,
    /// The intro choreography, built once at startup.
    intro: Choreography,
    intro_started: Instant,
    /// Seconds since the intro began, advanced by the frame tick.
    intro_elapsed: f32,
    /// False once every timeline has finished; latched.
    intro_running: bool,
    /// Background clip picked at startup; stable for the window's lifetime.
    clip: Option<PathBuf>,
    /// Latest decoded background frame.
    frame: Option<image::Handle>,
    /// False once the feed reported a failure.
    feed_alive: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("is_playing", &self.player.is_playing())
            .field("autoplay", &self.autoplay)
            .field("clip", &self.clip)
            .finish()
    }
}

/// Builds the window settings from the loaded configuration.
pub fn window_settings(config: &config::Config) -> window::Settings {
    let (width, height) = config.window_size();
    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (window_config, _) = config::load();

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings(&window_config))
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            player: Player::new(),
            autoplay: None,
            sink: None,
            soundtrack: PathBuf::from(config::defaults::DEFAULT_ASSETS_DIR)
                .join(config::defaults::DEFAULT_SOUNDTRACK),
            volume: config::defaults::DEFAULT_VOLUME,
            track_title: config::defaults::DEFAULT_TRACK_TITLE.to_string(),
            track_artist: config::defaults::DEFAULT_TRACK_ARTIST.to_string(),
            track_loading: false,
            track_failed: false,
            intro: Choreography::intro(),
            intro_started: Instant::now(),
            intro_elapsed: 0.0,
            intro_running: true,
            clip: None,
            frame: None,
            feed_alive: false,
        }
    }
}

impl App {
    /// Initializes application state, picks the background clip, and
    /// attempts the unsolicited soundtrack start.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            tracing::warn!("{warning}");
        }

        let assets_dir = flags
            .assets_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| config.assets_dir());
        let soundtrack = assets_dir.join(
            config
                .assets
                .soundtrack
                .clone()
                .unwrap_or_else(|| config::defaults::DEFAULT_SOUNDTRACK.to_string()),
        );

        // The random pick happens exactly once, here; re-renders never
        // recompute it.
        let clip = match &flags.clip {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                let clips_dir = assets_dir.join(CLIPS_SUBDIR);
                let clips = video::discover_clips(&clips_dir);
                let picked = video::pick_clip(&clips, &mut rand::thread_rng());
                if picked.is_none() {
                    tracing::warn!("no background clips found under {:?}", clips_dir);
                }
                picked
            }
        };

        let mut app = App {
            soundtrack,
            volume: config.volume(),
            track_title: config.track_title(),
            track_artist: config.track_artist(),
            feed_alive: clip.is_some(),
            clip,
            ..Self::default()
        };

        let task = if flags.muted || !config.autoplay() {
            Task::none()
        } else {
            app.attempt_autoplay()
        };

        (app, task)
    }

    /// The unsolicited start attempt: open the output, mark playing, begin
    /// the decode. A refusal arms the pointer-gesture fallback.
    fn attempt_autoplay(&mut self) -> Task<Message> {
        match AudioOutput::new(self.volume, true) {
            Ok(sink) => {
                sink.resume();
                self.sink = Some(sink);
                self.autoplay = Some(AutoplayFallback::after_initial(true));
                self.player.mark_playing();
                self.ensure_track()
            }
            Err(e) => {
                self.autoplay = Some(AutoplayFallback::after_initial(false));
                tracing::warn!("autoplay refused, waiting for a pointer gesture: {e}");
                Task::none()
            }
        }
    }

    fn title(&self) -> String {
        format!("{} | {}", self.track_title, self.track_artist)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let intro_sub = subscription::create_intro_subscription(self.intro_running);
        let player_sub = subscription::create_player_subscription(
            self.player.is_playing() && self.sink.is_some(),
        );
        let gesture_sub = subscription::create_gesture_subscription(
            self.autoplay.is_some_and(AutoplayFallback::is_waiting),
        );
        let feed_sub = subscription::create_feed_subscription(
            self.clip.as_ref(),
            self.feed_alive,
            FEED_SESSION,
        );

        Subscription::batch([intro_sub, player_sub, gesture_sub, feed_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PlayerBar(bar_message) => self.handle_player_bar(bar_message),
            Message::PointerPressed => self.handle_pointer_pressed(),
            Message::AnimationTick(now) => self.handle_animation_tick(now),
            Message::PlayerTick(_now) => self.handle_player_tick(),
            Message::TrackLoaded(result) => self.handle_track_loaded(result),
            Message::Feed(event) => self.handle_feed_event(event),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            intro: &self.intro,
            elapsed: self.intro_elapsed,
            frame: self.frame.as_ref(),
            playback: player_bar::PlaybackState {
                is_playing: self.player.is_playing(),
                position_secs: self.player.position_secs(),
                duration_secs: self.player.duration_secs(),
            },
            track_title: &self.track_title,
            track_artist: &self.track_artist,
        })
    }
}
