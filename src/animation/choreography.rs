// SPDX-License-Identifier: MPL-2.0
//! The hand-authored intro sequence.
//!
//! Three timelines play once when the window opens: the header elements
//! slide in, the centered title pulses its letter spacing while the subtitle
//! fades in and settles smaller, and the background video slides into place.
//! All values here are scene coordinates for the default 1280x720 window.

use super::easing::Easing;
use super::timeline::{Position, Timeline, Tween};

/// Animated property channels of the splash scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Corner logo x position.
    HeaderLogoX,

    /// Wordmark glyph x position.
    WordmarkX,

    /// Header tagline x position.
    HeaderTextX,

    /// "Season" tag opacity.
    SeasonTagOpacity,

    /// Title glyph scale factor.
    TitleScale,

    /// Spacing between title glyphs.
    TitleGap,

    /// Subtitle scale factor.
    SubtitleScale,

    /// Subtitle opacity.
    SubtitleOpacity,

    /// Background video vertical offset during the slide-in.
    VideoSlide,

    /// Background video offset during the final settle.
    VideoSettle,
}

// Header element rest positions, and the offscreen x they slide in from.
const HEADER_LOGO_FROM_X: f32 = 640.0;
const HEADER_LOGO_REST_X: f32 = 25.0;
const WORDMARK_FROM_X: f32 = 1280.0;
const WORDMARK_REST_X: f32 = 170.0;
const HEADER_TEXT_FROM_X: f32 = 1280.0;
const HEADER_TEXT_REST_X: f32 = 250.0;

/// Letter spacing of the title at the peak of the pulse.
const TITLE_GAP_OPEN: f32 = 300.0;

/// Subtitle scale once the pulse has settled.
const SUBTITLE_REST_SCALE: f32 = 0.5;

/// Vertical distance the background video travels while sliding in.
const VIDEO_SLIDE_DISTANCE: f32 = 200.0;

/// The full intro: every timeline of the opening sequence.
#[derive(Debug, Clone)]
pub struct Choreography {
    timelines: Vec<Timeline<Channel>>,
}

impl Choreography {
    /// Builds the opening sequence played when the window appears.
    pub fn intro() -> Self {
        let entrance = Timeline::new()
            .push(
                Channel::HeaderLogoX,
                Tween::new(HEADER_LOGO_FROM_X, HEADER_LOGO_REST_X, 1.0).ease(Easing::SineInOut),
                Position::AtStart,
            )
            .push(
                Channel::WordmarkX,
                Tween::new(WORDMARK_FROM_X, WORDMARK_REST_X, 1.5)
                    .ease(Easing::SineInOut)
                    .delay(0.5),
                Position::AtStart,
            )
            .push(
                Channel::HeaderTextX,
                Tween::new(HEADER_TEXT_FROM_X, HEADER_TEXT_REST_X, 1.5)
                    .ease(Easing::SineInOut)
                    .delay(0.5),
                Position::AtStart,
            )
            .push(
                Channel::SeasonTagOpacity,
                Tween::new(0.0, 1.0, 1.0).ease(Easing::SineInOut).delay(0.5),
                Position::AtStart,
            );

        // Title pulse: glyphs grow and spread apart, the subtitle fades in
        // over the last half second of the spread, then everything settles.
        let title = Timeline::with_delay(0.5)
            .then(
                Channel::TitleScale,
                Tween::new(1.0, 1.3, 0.5).ease(Easing::QuadOut).delay(1.0),
            )
            .alongside(
                Channel::TitleGap,
                Tween::new(0.0, TITLE_GAP_OPEN, 0.5).ease(Easing::QuadOut),
            )
            .overlapping(
                0.5,
                Channel::SubtitleOpacity,
                Tween::new(0.0, 1.0, 0.5).ease(Easing::QuadOut),
            )
            .then(
                Channel::TitleScale,
                Tween::new(1.3, 1.0, 1.0).ease(Easing::SineInOut),
            )
            .alongside(
                Channel::TitleGap,
                Tween::new(TITLE_GAP_OPEN, 0.0, 0.5).ease(Easing::QuadInOut),
            )
            .alongside(
                Channel::SubtitleScale,
                Tween::new(1.0, SUBTITLE_REST_SCALE, 0.5).ease(Easing::QuadInOut),
            );

        let video = Timeline::with_delay(0.2)
            .then(
                Channel::VideoSlide,
                Tween::new(-VIDEO_SLIDE_DISTANCE, 0.0, 1.0).ease(Easing::QuadOut),
            )
            .then(
                Channel::VideoSettle,
                Tween::new(VIDEO_SLIDE_DISTANCE, 0.0, 0.8).ease(Easing::QuadInOut),
            );

        Self {
            timelines: vec![entrance, title, video],
        }
    }

    /// Samples one channel at `elapsed` seconds since the intro began.
    /// Returns `None` for channels no timeline animates.
    pub fn sample(&self, channel: Channel, elapsed: f32) -> Option<f32> {
        self.timelines
            .iter()
            .find_map(|timeline| timeline.sample(channel, elapsed))
    }

    /// Like [`sample`](Self::sample) but substituting `default` for
    /// channels with no tweens.
    pub fn value_or(&self, channel: Channel, elapsed: f32, default: f32) -> f32 {
        self.sample(channel, elapsed).unwrap_or(default)
    }

    /// True once every timeline has played out.
    pub fn is_finished(&self, elapsed: f32) -> bool {
        self.timelines
            .iter()
            .all(|timeline| timeline.is_finished(elapsed))
    }

    /// Running time of the longest timeline.
    pub fn duration(&self) -> f32 {
        self.timelines
            .iter()
            .map(Timeline::duration)
            .fold(0.0_f32, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const END: f32 = 100.0;

    #[test]
    fn scene_starts_offscreen_and_hidden() {
        let intro = Choreography::intro();
        assert_eq!(intro.sample(Channel::HeaderLogoX, 0.0), Some(HEADER_LOGO_FROM_X));
        assert_eq!(intro.sample(Channel::WordmarkX, 0.0), Some(WORDMARK_FROM_X));
        assert_eq!(intro.sample(Channel::SeasonTagOpacity, 0.0), Some(0.0));
        assert_eq!(intro.sample(Channel::SubtitleOpacity, 0.0), Some(0.0));
        assert_eq!(
            intro.sample(Channel::VideoSlide, 0.0),
            Some(-VIDEO_SLIDE_DISTANCE)
        );
    }

    #[test]
    fn scene_settles_at_rest_positions() {
        let intro = Choreography::intro();
        assert_eq!(intro.sample(Channel::HeaderLogoX, END), Some(HEADER_LOGO_REST_X));
        assert_eq!(intro.sample(Channel::WordmarkX, END), Some(WORDMARK_REST_X));
        assert_eq!(intro.sample(Channel::HeaderTextX, END), Some(HEADER_TEXT_REST_X));
        assert_eq!(intro.sample(Channel::SeasonTagOpacity, END), Some(1.0));
        assert_eq!(intro.sample(Channel::TitleScale, END), Some(1.0));
        assert_eq!(intro.sample(Channel::TitleGap, END), Some(0.0));
        assert_eq!(intro.sample(Channel::SubtitleScale, END), Some(SUBTITLE_REST_SCALE));
        assert_eq!(intro.sample(Channel::SubtitleOpacity, END), Some(1.0));
        assert_eq!(intro.sample(Channel::VideoSlide, END), Some(0.0));
        assert_eq!(intro.sample(Channel::VideoSettle, END), Some(0.0));
    }

    #[test]
    fn title_gap_opens_together_with_the_scale_pulse() {
        let intro = Choreography::intro();
        // The pulse starts 1.5s in (0.5 timeline delay + 1.0 tween delay).
        assert_eq!(intro.sample(Channel::TitleScale, 1.5), Some(1.0));
        assert_eq!(intro.sample(Channel::TitleGap, 1.5), Some(0.0));
        // Halfway through both have left their start values.
        let scale = intro.sample(Channel::TitleScale, 1.75).unwrap();
        let gap = intro.sample(Channel::TitleGap, 1.75).unwrap();
        assert!(scale > 1.0 && scale < 1.3);
        assert!(gap > 0.0 && gap < TITLE_GAP_OPEN);
    }

    #[test]
    fn subtitle_fade_overlaps_the_spread() {
        let intro = Choreography::intro();
        // Fade runs over the last half second of the spread: 1.5s to 2.0s.
        assert_eq!(intro.sample(Channel::SubtitleOpacity, 1.5), Some(0.0));
        assert_eq!(intro.sample(Channel::SubtitleOpacity, 2.0), Some(1.0));
    }

    #[test]
    fn video_settles_after_the_slide() {
        let intro = Choreography::intro();
        // Slide: 0.2s to 1.2s. Settle: 1.2s to 2.0s.
        assert_eq!(intro.sample(Channel::VideoSlide, 1.2), Some(0.0));
        assert_eq!(
            intro.sample(Channel::VideoSettle, 1.0),
            Some(VIDEO_SLIDE_DISTANCE)
        );
        assert_eq!(intro.sample(Channel::VideoSettle, 2.0), Some(0.0));
    }

    #[test]
    fn intro_finishes_when_the_longest_timeline_does() {
        let intro = Choreography::intro();
        // Title timeline: 0.5 delay + pulse out at 1.0..1.5 + settle 1.5..2.5.
        assert_eq!(intro.duration(), 3.0);
        assert!(!intro.is_finished(2.99));
        assert!(intro.is_finished(3.0));
    }
}
