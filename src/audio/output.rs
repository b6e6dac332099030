// SPDX-License-Identifier: MPL-2.0
//! Audio output using cpal for low-latency playback.
//!
//! The output owns a single decoded track. The device callback copies
//! samples from the track at a cursor, wrapping at the end when looping is
//! enabled, so the playback position is always derivable from the cursor
//! without asking the device anything.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::AudioError;

/// Interleaved f32 samples normalized to [-1.0, 1.0].
pub type TrackSamples = Arc<Vec<f32>>;

/// Shared state between the audio callback and the main thread.
struct SharedState {
    /// The loaded track, if any.
    track: Mutex<Option<TrackSamples>>,

    /// Next sample index the callback will read.
    cursor: AtomicUsize,

    /// Pause state.
    paused: AtomicBool,

    /// Whether playback wraps at the end of the track.
    looping: AtomicBool,

    /// Current volume (stored as u32 bits of f32 for atomic access).
    volume_bits: AtomicU32,
}

impl SharedState {
    fn new(initial_volume: f32, looping: bool) -> Self {
        Self {
            track: Mutex::new(None),
            cursor: AtomicUsize::new(0),
            paused: AtomicBool::new(true),
            looping: AtomicBool::new(looping),
            volume_bits: AtomicU32::new(initial_volume.to_bits()),
        }
    }

    fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    fn is_looping(&self) -> bool {
        self.looping.load(Ordering::Relaxed)
    }
}

/// Audio output stream manager.
///
/// Building one attempts to open the default output device and start its
/// stream; any failure along the way is the platform refusing playback.
pub struct AudioOutput {
    shared: Arc<SharedState>,

    /// Sample rate of the output device.
    sample_rate: u32,

    /// Number of channels of the output device.
    channels: u16,

    /// The audio stream (kept alive to maintain playback).
    _stream: cpal::Stream,
}

impl AudioOutput {
    /// Opens the default output device and starts a (silent, paused) stream.
    ///
    /// Returns the configured sample rate and channel count through the
    /// accessors; the decoder must resample the soundtrack to match.
    ///
    /// # Errors
    ///
    /// Returns an error if no audio output device is found, if the device
    /// configuration cannot be retrieved, or if the stream fails to start.
    pub fn new(initial_volume: f32, looping: bool) -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;

        let supported_config = device
            .default_output_config()
            .map_err(|e| AudioError::DeviceConfig(e.to_string()))?;

        let sample_rate = supported_config.sample_rate().0;
        let channels = supported_config.channels();

        let shared = Arc::new(SharedState::new(initial_volume, looping));
        let shared_for_stream = Arc::clone(&shared);

        let stream = match supported_config.sample_format() {
            cpal::SampleFormat::F32 => {
                Self::build_stream::<f32>(&device, &supported_config.into(), shared_for_stream)?
            }
            cpal::SampleFormat::I16 => {
                Self::build_stream::<i16>(&device, &supported_config.into(), shared_for_stream)?
            }
            cpal::SampleFormat::U16 => {
                Self::build_stream::<u16>(&device, &supported_config.into(), shared_for_stream)?
            }
            other => return Err(AudioError::UnsupportedFormat(format!("{other:?}"))),
        };

        stream
            .play()
            .map_err(|e| AudioError::StreamStart(e.to_string()))?;

        Ok(Self {
            shared,
            sample_rate,
            channels,
            _stream: stream,
        })
    }

    /// Builds an audio output stream for a specific sample format.
    fn build_stream<T: cpal::SizedSample + cpal::FromSample<f32>>(
        device: &cpal::Device,
        config: &cpal::StreamConfig,
        shared: Arc<SharedState>,
    ) -> Result<cpal::Stream, AudioError> {
        let stream = device
            .build_output_stream(
                config,
                move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                    Self::fill(&shared, data);
                },
                |err| {
                    tracing::warn!("audio output error: {err}");
                },
                None,
            )
            .map_err(|e| AudioError::StreamBuild(e.to_string()))?;

        Ok(stream)
    }

    /// Fills one device buffer from the loaded track.
    fn fill<T: cpal::SizedSample + cpal::FromSample<f32>>(shared: &SharedState, data: &mut [T]) {
        let silence = |data: &mut [T]| {
            for sample in data.iter_mut() {
                *sample = T::from_sample(0.0f32);
            }
        };

        if shared.is_paused() {
            silence(data);
            return;
        }

        let Ok(guard) = shared.track.lock() else {
            // Mutex poisoned, output silence
            silence(data);
            return;
        };
        let Some(track) = guard.as_ref() else {
            silence(data);
            return;
        };
        if track.is_empty() {
            silence(data);
            return;
        }

        // Quadratic curve keeps the volume slider perceptually linear.
        let volume = shared.volume();
        let perceptual_volume = volume * volume;

        let looping = shared.is_looping();
        let mut cursor = shared.cursor.load(Ordering::Relaxed);

        for sample in data.iter_mut() {
            if cursor >= track.len() {
                if looping {
                    cursor = 0;
                } else {
                    *sample = T::from_sample(0.0f32);
                    continue;
                }
            }
            // Clamping to slightly below 1.0 prevents i16 overflow in
            // from_sample at exactly 1.0.
            let amplified = (track[cursor] * perceptual_volume).clamp(-1.0, 0.999_999_9);
            *sample = T::from_sample(amplified);
            cursor += 1;
        }

        shared.cursor.store(cursor, Ordering::Relaxed);
    }

    /// Loads a decoded track and rewinds to its beginning.
    /// Does not change the pause state.
    pub fn load_track(&self, samples: TrackSamples) {
        if let Ok(mut guard) = self.shared.track.lock() {
            *guard = Some(samples);
        }
        self.shared.cursor.store(0, Ordering::Relaxed);
    }

    pub fn has_track(&self) -> bool {
        self.shared
            .track
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Pauses playback, holding the cursor in place.
    pub fn pause(&self) {
        self.shared.paused.store(true, Ordering::Relaxed);
    }

    /// Resumes playback from the current cursor.
    pub fn resume(&self) {
        self.shared.paused.store(false, Ordering::Relaxed);
    }

    pub fn set_volume(&self, volume: f32) {
        self.shared
            .volume_bits
            .store(volume.clamp(0.0, 1.0).to_bits(), Ordering::Relaxed);
    }

    /// Current playback position derived from the cursor.
    #[must_use]
    pub fn position_secs(&self) -> f64 {
        let cursor = self.shared.cursor.load(Ordering::Relaxed);
        cursor as f64 / (f64::from(self.sample_rate) * f64::from(self.channels))
    }

    /// Returns the output sample rate.
    #[must_use]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the number of output channels.
    #[must_use]
    pub fn channels(&self) -> u16 {
        self.channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_state_starts_paused_without_a_track() {
        let state = SharedState::new(0.8, true);
        assert!(state.is_paused());
        assert!(state.track.lock().unwrap().is_none());
        assert!((state.volume() - 0.8).abs() < 0.001);
    }

    #[test]
    fn fill_wraps_the_cursor_when_looping() {
        let state = SharedState::new(1.0, true);
        *state.track.lock().unwrap() = Some(Arc::new(vec![0.1, 0.2, 0.3, 0.4]));
        state.paused.store(false, Ordering::Relaxed);
        state.cursor.store(2, Ordering::Relaxed);

        let mut data = [0.0f32; 4];
        AudioOutput::fill(&state, &mut data);

        // Read 0.3, 0.4, then wrapped to 0.1, 0.2.
        assert!((data[0] - 0.3).abs() < 1e-6);
        assert!((data[2] - 0.1).abs() < 1e-6);
        assert_eq!(state.cursor.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn fill_pads_with_silence_when_not_looping() {
        let state = SharedState::new(1.0, false);
        *state.track.lock().unwrap() = Some(Arc::new(vec![0.5, 0.5]));
        state.paused.store(false, Ordering::Relaxed);

        let mut data = [1.0f32; 4];
        AudioOutput::fill(&state, &mut data);

        assert!((data[1] - 0.5).abs() < 1e-6);
        assert_eq!(data[2], 0.0);
        assert_eq!(data[3], 0.0);
        // The cursor holds at the end of the track instead of running on.
        assert_eq!(state.cursor.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn fill_outputs_silence_while_paused_and_holds_the_cursor() {
        let state = SharedState::new(1.0, true);
        *state.track.lock().unwrap() = Some(Arc::new(vec![0.5; 8]));
        state.cursor.store(3, Ordering::Relaxed);

        let mut data = [1.0f32; 4];
        AudioOutput::fill(&state, &mut data);

        assert_eq!(data, [0.0; 4]);
        assert_eq!(state.cursor.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn fill_applies_the_perceptual_volume_curve() {
        let state = SharedState::new(0.5, true);
        *state.track.lock().unwrap() = Some(Arc::new(vec![1.0; 4]));
        state.paused.store(false, Ordering::Relaxed);

        let mut data = [0.0f32; 4];
        AudioOutput::fill(&state, &mut data);

        // 0.5 on the slider is 0.25 actual gain.
        assert!((data[0] - 0.25).abs() < 1e-6);
    }

    // Tests that create an AudioOutput require actual audio hardware and are
    // better suited for manual testing.
    #[test]
    #[ignore = "requires audio hardware"]
    fn audio_output_can_be_created() {
        if let Ok(output) = AudioOutput::new(0.8, true) {
            assert!(output.sample_rate() > 0);
            assert!(output.channels() > 0);
            assert!(!output.has_track());
            assert_eq!(output.position_secs(), 0.0);
        }
    }
}
