// SPDX-License-Identifier: MPL-2.0
//! Soundtrack playback: decoding, output, and the view-facing player state.
//!
//! The split mirrors the flow of data: [`decode`] turns the soundtrack file
//! into device-ready samples, [`output`] owns the cpal stream that plays
//! them, [`player`] holds the state the UI renders, and [`autoplay`] models
//! the start-on-first-gesture fallback.

pub mod autoplay;
pub mod decode;
pub mod output;
pub mod player;

pub use autoplay::AutoplayFallback;
pub use decode::DecodedTrack;
pub use output::AudioOutput;
pub use player::{Player, SinkCommand};
