// SPDX-License-Identifier: MPL-2.0
//! Background video frame feed.
//!
//! A blocking FFmpeg worker decodes the chosen clip, paces frames against
//! a wall clock, and loops at end of stream. Frames reach the UI through an
//! Iced subscription; when the subscription is dropped the worker notices
//! its channel closing and stops, so closing the window leaves nothing
//! running.
//!
//! The clip plays muted: only the video stream is opened.

use iced::futures::SinkExt;
use iced::stream;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

use crate::error::{Error, Result};

/// Events emitted by the frame feed.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    /// A new frame is ready for display.
    Frame {
        /// RGBA pixel data (width x height x 4 bytes).
        rgba: Vec<u8>,
        /// Frame width in pixels.
        width: u32,
        /// Frame height in pixels.
        height: u32,
    },

    /// The clip could not be played; the scene falls back to the backdrop.
    Failed(String),
}

/// Subscription ID for the frame feed. Each session gets a unique ID so
/// the subscription is recreated if playback ever restarts.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FeedId {
    clip: PathBuf,
    session_id: u64,
}

/// Creates the frame feed subscription for the chosen clip.
pub fn frames(clip: PathBuf, session_id: u64) -> iced::Subscription<FeedEvent> {
    iced::Subscription::run_with(
        FeedId { clip, session_id },
        |id| {
            let clip = id.clip.clone();
            stream::channel(8, move |mut output: iced::futures::channel::mpsc::Sender<FeedEvent>| async move {
                let (event_tx, mut event_rx) = mpsc::channel::<FeedEvent>(2);

                let worker_clip = clip.clone();
                tokio::task::spawn_blocking(move || {
                    // FFmpeg contexts are not Send, so the whole decode loop
                    // lives on this blocking thread.
                    if let Err(e) = decode_loop(&worker_clip, &event_tx) {
                        let _ = event_tx.blocking_send(FeedEvent::Failed(e.to_string()));
                    }
                });

                while let Some(event) = event_rx.recv().await {
                    if output.send(event).await.is_err() {
                        break;
                    }
                }
            })
        },
    )
}

/// Decodes the clip forever, looping at end of stream.
///
/// Returns when the event channel closes (subscription dropped) or on a
/// decode error the caller reports as `FeedEvent::Failed`.
fn decode_loop(clip: &Path, event_tx: &mpsc::Sender<FeedEvent>) -> Result<()> {
    crate::ffmpeg::init()?;

    if !clip.exists() {
        return Err(Error::Io(format!("Clip not found: {:?}", clip)));
    }

    let mut ictx = ffmpeg_next::format::input(&clip)
        .map_err(|e| Error::Video(format!("Failed to open clip: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or_else(|| Error::Video("No video stream found".to_string()))?;
    let video_stream_index = input.index();

    let time_base = input.time_base();
    let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| Error::Video(format!("Failed to create codec context: {e}")))?;
    let mut decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| Error::Video(format!("Failed to create video decoder: {e}")))?;

    let width = decoder.width();
    let height = decoder.height();

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| Error::Video(format!("Failed to create scaler: {e}")))?;

    loop {
        let playback_start = std::time::Instant::now();
        let mut first_pts: Option<f64> = None;

        for (stream, packet) in ictx.packets() {
            if stream.index() != video_stream_index {
                continue;
            }

            if decoder.send_packet(&packet).is_err() {
                // Skip damaged packets; the next keyframe recovers.
                continue;
            }

            let mut decoded_frame = ffmpeg_next::frame::Video::empty();
            while decoder.receive_frame(&mut decoded_frame).is_ok() {
                let mut rgba_frame = ffmpeg_next::frame::Video::empty();
                scaler
                    .run(&decoded_frame, &mut rgba_frame)
                    .map_err(|e| Error::Video(format!("Scaling failed: {e}")))?;

                let pts_secs = decoded_frame
                    .timestamp()
                    .map(|pts| pts as f64 * time_base_f64)
                    .unwrap_or(0.0);
                let first = *first_pts.get_or_insert(pts_secs);

                // Pace against the wall clock so frames arrive at
                // presentation time rather than decode speed.
                let due = playback_start + std::time::Duration::from_secs_f64(
                    (pts_secs - first).max(0.0),
                );
                if let Some(wait) = due.checked_duration_since(std::time::Instant::now()) {
                    std::thread::sleep(wait);
                }

                let event = FeedEvent::Frame {
                    rgba: extract_rgba(&rgba_frame, width, height),
                    width,
                    height,
                };
                if event_tx.blocking_send(event).is_err() {
                    // Subscription dropped; stop decoding.
                    return Ok(());
                }
            }
        }

        // End of stream: rewind and play again.
        ictx.seek(0, ..0)
            .map_err(|e| Error::Video(format!("Rewind failed: {e}")))?;
        decoder.flush();
    }
}

/// Copies RGBA pixels out of a scaled frame, honoring the line stride.
fn extract_rgba(frame: &ffmpeg_next::frame::Video, width: u32, height: u32) -> Vec<u8> {
    let data = frame.data(0);
    let stride = frame.stride(0);
    let row_bytes = width as usize * 4;

    let mut rgba = Vec::with_capacity(row_bytes * height as usize);
    for row in 0..height as usize {
        let start = row * stride;
        let end = start + row_bytes;
        if end <= data.len() {
            rgba.extend_from_slice(&data[start..end]);
        }
    }
    rgba
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_clip_is_reported_not_panicked() {
        let (event_tx, _event_rx) = mpsc::channel(2);
        let result = decode_loop(&PathBuf::from("/nonexistent/clip.mp4"), &event_tx);
        assert!(result.is_err());
    }

    #[test]
    fn feed_event_frame_is_cloneable() {
        let event = FeedEvent::Frame {
            rgba: vec![0; 16],
            width: 2,
            height: 2,
        };
        let cloned = event.clone();
        assert!(matches!(cloned, FeedEvent::Frame { width: 2, .. }));
    }
}
