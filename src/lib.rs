// SPDX-License-Identifier: MPL-2.0
//! `iced_marquee` is an animated promotional splash screen built with the
//! Iced GUI framework.
//!
//! It layers a looping background video, a timed intro choreography, and a
//! soundtrack overlay with a start-on-first-gesture autoplay fallback.

#![doc(html_root_url = "https://docs.rs/iced_marquee/0.1.0")]

pub mod animation;
pub mod app;
pub mod audio;
pub mod config;
pub mod error;
pub mod ffmpeg;
pub mod ui;
pub mod video;
