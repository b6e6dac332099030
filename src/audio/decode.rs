// SPDX-License-Identifier: MPL-2.0
//! Soundtrack decoding via FFmpeg.
//!
//! The whole track is decoded and resampled up front: a promotional
//! soundtrack is a few minutes of audio, which comfortably fits in memory
//! and lets the output derive the playback position from a plain cursor.

use std::path::Path;
use std::sync::Arc;

use crate::error::{AudioError, Error, Result};

/// A fully decoded soundtrack, ready for the output device.
#[derive(Debug, Clone)]
pub struct DecodedTrack {
    /// Interleaved f32 samples at the output device's rate and layout.
    pub samples: Arc<Vec<f32>>,

    /// Sample rate the track was resampled to.
    pub sample_rate: u32,

    /// Channel count the track was resampled to.
    pub channels: u16,

    /// Track length in seconds.
    pub duration_secs: f64,
}

/// Decodes the soundtrack at `path`, resampling to the given output rate
/// and channel count.
///
/// # Errors
///
/// Returns an error when the file cannot be opened, has no audio stream,
/// or fails to decode.
pub fn decode_track(path: &Path, output_rate: u32, output_channels: u16) -> Result<DecodedTrack> {
    crate::ffmpeg::init()?;

    if !path.exists() {
        return Err(Error::Io(format!("Soundtrack not found: {:?}", path)));
    }

    let mut ictx = ffmpeg_next::format::input(&path)
        .map_err(|e| AudioError::Decode(format!("Failed to open soundtrack: {e}")))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Audio)
        .ok_or_else(|| AudioError::Decode("No audio stream found".to_string()))?;
    let audio_stream_index = input.index();

    let context_decoder = ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
        .map_err(|e| AudioError::Decode(format!("Failed to create codec context: {e}")))?;
    let mut decoder = context_decoder
        .decoder()
        .audio()
        .map_err(|e| AudioError::Decode(format!("Failed to create audio decoder: {e}")))?;

    // Resample to f32 interleaved at the device rate and channel count.
    // Without this the track plays at the wrong speed or channel layout.
    let output_channel_layout = match output_channels {
        1 => ffmpeg_next::ChannelLayout::MONO,
        _ => ffmpeg_next::ChannelLayout::STEREO, // Downmix anything else to stereo
    };

    let mut resampler = ffmpeg_next::software::resampling::Context::get(
        decoder.format(),
        decoder.channel_layout(),
        decoder.rate(),
        ffmpeg_next::format::Sample::F32(ffmpeg_next::format::sample::Type::Packed),
        output_channel_layout,
        output_rate,
    )
    .map_err(|e| AudioError::Decode(format!("Failed to create resampler: {e}")))?;

    let channels = output_channel_layout.channels() as u16;
    let mut samples: Vec<f32> = Vec::new();

    let mut receive_resampled =
        |decoder: &mut ffmpeg_next::decoder::Audio, samples: &mut Vec<f32>| -> Result<()> {
            let mut decoded_frame = ffmpeg_next::frame::Audio::empty();
            while decoder.receive_frame(&mut decoded_frame).is_ok() {
                let mut resampled = ffmpeg_next::frame::Audio::empty();
                resampler
                    .run(&decoded_frame, &mut resampled)
                    .map_err(|e| AudioError::Decode(format!("Resampling failed: {e}")))?;
                extract_samples(&resampled, channels, samples);
            }
            Ok(())
        };

    for (stream, packet) in ictx.packets() {
        if stream.index() != audio_stream_index {
            continue;
        }
        if let Err(e) = decoder.send_packet(&packet) {
            // Skip damaged packets; the next frame recovers.
            tracing::debug!("audio packet failed: {e}");
            continue;
        }
        receive_resampled(&mut decoder, &mut samples)?;
    }

    // Drain the decoder.
    decoder
        .send_eof()
        .map_err(|e| AudioError::Decode(format!("Failed to flush decoder: {e}")))?;
    receive_resampled(&mut decoder, &mut samples)?;

    if samples.is_empty() {
        return Err(AudioError::Decode("Soundtrack decoded to no samples".to_string()).into());
    }

    let duration_secs = samples.len() as f64 / (f64::from(output_rate) * f64::from(channels));

    Ok(DecodedTrack {
        samples: Arc::new(samples),
        sample_rate: output_rate,
        channels,
        duration_secs,
    })
}

/// Extracts f32 samples from a resampled audio frame.
fn extract_samples(frame: &ffmpeg_next::frame::Audio, channels: u16, out: &mut Vec<f32>) {
    let data = frame.data(0);
    let sample_count = frame.samples() * channels as usize;

    out.reserve(sample_count);
    for i in 0..sample_count {
        let offset = i * 4; // f32 = 4 bytes
        if offset + 4 <= data.len() {
            let bytes = [
                data[offset],
                data[offset + 1],
                data[offset + 2],
                data[offset + 3],
            ];
            out.push(f32::from_le_bytes(bytes));
        }
    }
}
