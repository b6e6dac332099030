// SPDX-License-Identifier: MPL-2.0
//! Timelines: time-ordered property tweens with relative sequencing markers.
//!
//! A timeline is built once, up front; markers like "start together with the
//! previous tween" are resolved to absolute start times at build time, so
//! sampling is a pure lookup. Sampling a channel the timeline does not carry
//! returns `None` and the caller is expected to no-op.

use super::easing::Easing;

/// A single property transition: interpolates `from` to `to` over
/// `duration` seconds once its resolved start time has passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: f32,
    pub delay: f32,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            easing: Easing::default(),
        }
    }

    pub fn ease(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Shifts the resolved start time without affecting sequencing of
    /// later tweens relative to this one.
    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Value at `local` seconds past the resolved start.
    fn value_at(&self, local: f32) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let progress = self.easing.apply(local / self.duration);
        self.from + (self.to - self.from) * progress
    }
}

/// Where a tween starts relative to the one pushed before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// At the timeline origin (plus the tween's own delay).
    AtStart,

    /// When the previous tween ends.
    AfterPrevious,

    /// Together with the previous tween's start.
    WithPrevious,

    /// The given number of seconds before the previous tween ends.
    BeforePreviousEnd(f32),
}

#[derive(Debug, Clone)]
struct Entry<C> {
    channel: C,
    tween: Tween,
    /// Absolute start within the timeline, after the global delay.
    /// Includes the tween's own delay.
    start: f32,
}

impl<C> Entry<C> {
    fn end(&self) -> f32 {
        self.start + self.tween.duration
    }
}

/// An ordered set of tweens over named channels, played once.
#[derive(Debug, Clone, Default)]
pub struct Timeline<C> {
    delay: f32,
    entries: Vec<Entry<C>>,
}

impl<C: Copy + PartialEq> Timeline<C> {
    pub fn new() -> Self {
        Self {
            delay: 0.0,
            entries: Vec::new(),
        }
    }

    /// A timeline whose entire content starts `delay` seconds late.
    pub fn with_delay(delay: f32) -> Self {
        Self {
            delay,
            entries: Vec::new(),
        }
    }

    /// Appends a tween, resolving its start from the sequencing marker.
    pub fn push(mut self, channel: C, tween: Tween, position: Position) -> Self {
        let base = match (self.entries.last(), position) {
            (_, Position::AtStart) | (None, _) => 0.0,
            (Some(prev), Position::AfterPrevious) => prev.end(),
            (Some(prev), Position::WithPrevious) => prev.start,
            (Some(prev), Position::BeforePreviousEnd(secs)) => prev.end() - secs,
        };
        let start = (base + tween.delay).max(0.0);
        self.entries.push(Entry {
            channel,
            tween,
            start,
        });
        self
    }

    pub fn then(self, channel: C, tween: Tween) -> Self {
        self.push(channel, tween, Position::AfterPrevious)
    }

    pub fn alongside(self, channel: C, tween: Tween) -> Self {
        self.push(channel, tween, Position::WithPrevious)
    }

    pub fn overlapping(self, secs: f32, channel: C, tween: Tween) -> Self {
        self.push(channel, tween, Position::BeforePreviousEnd(secs))
    }

    /// Samples one channel at `elapsed` seconds since the timeline began.
    ///
    /// Before a channel's first tween starts the sample holds that tween's
    /// `from` value; after the last one ends it holds its `to` value. When
    /// several tweens target the same channel, the most recently started one
    /// wins. Returns `None` for a channel with no tweens.
    pub fn sample(&self, channel: C, elapsed: f32) -> Option<f32> {
        let t = elapsed - self.delay;

        let mut first: Option<&Entry<C>> = None;
        let mut active: Option<&Entry<C>> = None;
        for entry in self.entries.iter().filter(|e| e.channel == channel) {
            if first.is_none_or(|f| entry.start < f.start) {
                first = Some(entry);
            }
            if entry.start <= t && active.is_none_or(|a| entry.start >= a.start) {
                active = Some(entry);
            }
        }

        match (active, first) {
            (Some(entry), _) => Some(entry.tween.value_at(t - entry.start)),
            (None, Some(entry)) => Some(entry.tween.from),
            (None, None) => None,
        }
    }

    /// Total running time, including the global delay.
    pub fn duration(&self) -> f32 {
        let content = self
            .entries
            .iter()
            .map(Entry::end)
            .fold(0.0_f32, f32::max);
        self.delay + content
    }

    pub fn is_finished(&self, elapsed: f32) -> bool {
        elapsed >= self.duration()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Prop {
        X,
        Opacity,
    }

    fn linear(from: f32, to: f32, duration: f32) -> Tween {
        Tween::new(from, to, duration).ease(Easing::Linear)
    }

    #[test]
    fn sample_interpolates_linearly() {
        let timeline = Timeline::new().then(Prop::X, linear(0.0, 100.0, 2.0));
        assert_eq!(timeline.sample(Prop::X, 0.0), Some(0.0));
        assert_eq!(timeline.sample(Prop::X, 1.0), Some(50.0));
        assert_eq!(timeline.sample(Prop::X, 2.0), Some(100.0));
    }

    #[test]
    fn sample_holds_endpoints_outside_the_tween() {
        let timeline = Timeline::new().push(
            Prop::X,
            linear(10.0, 20.0, 1.0).delay(1.0),
            Position::AtStart,
        );
        // Before the delayed start: holds the from value.
        assert_eq!(timeline.sample(Prop::X, 0.5), Some(10.0));
        // Long after the end: holds the to value.
        assert_eq!(timeline.sample(Prop::X, 60.0), Some(20.0));
    }

    #[test]
    fn missing_channel_samples_to_none() {
        let timeline = Timeline::new().then(Prop::X, linear(0.0, 1.0, 1.0));
        assert_eq!(timeline.sample(Prop::Opacity, 0.5), None);
    }

    #[test]
    fn after_previous_waits_for_the_previous_end() {
        let timeline = Timeline::new()
            .then(Prop::X, linear(0.0, 1.0, 1.0))
            .then(Prop::Opacity, linear(0.0, 1.0, 1.0));
        // Second tween has not started at t=1.0 minus epsilon.
        assert_eq!(timeline.sample(Prop::Opacity, 0.9), Some(0.0));
        assert_eq!(timeline.sample(Prop::Opacity, 1.5), Some(0.5));
    }

    #[test]
    fn with_previous_aligns_starts() {
        let timeline = Timeline::new()
            .push(Prop::X, linear(0.0, 1.0, 1.0).delay(2.0), Position::AtStart)
            .alongside(Prop::Opacity, linear(0.0, 1.0, 1.0));
        // The marker aligns to the previous tween's start, delay included,
        // so both begin at t=2.0.
        assert_eq!(timeline.sample(Prop::Opacity, 2.0), Some(0.0));
        assert_eq!(timeline.sample(Prop::Opacity, 2.5), Some(0.5));
        assert_eq!(timeline.sample(Prop::X, 2.5), Some(0.5));
    }

    #[test]
    fn before_previous_end_overlaps() {
        let timeline = Timeline::new()
            .then(Prop::X, linear(0.0, 1.0, 2.0))
            .overlapping(0.5, Prop::Opacity, linear(0.0, 1.0, 0.5));
        // Previous ends at 2.0, so the overlap starts at 1.5.
        assert_eq!(timeline.sample(Prop::Opacity, 1.5), Some(0.0));
        assert_eq!(timeline.sample(Prop::Opacity, 2.0), Some(1.0));
    }

    #[test]
    fn later_tween_on_same_channel_wins() {
        let timeline = Timeline::new()
            .then(Prop::X, linear(0.0, 10.0, 1.0))
            .then(Prop::X, linear(10.0, 0.0, 1.0));
        assert_eq!(timeline.sample(Prop::X, 0.5), Some(5.0));
        assert_eq!(timeline.sample(Prop::X, 1.5), Some(5.0));
        assert_eq!(timeline.sample(Prop::X, 5.0), Some(0.0));
    }

    #[test]
    fn global_delay_shifts_everything() {
        let timeline = Timeline::with_delay(1.0).then(Prop::X, linear(0.0, 10.0, 1.0));
        assert_eq!(timeline.sample(Prop::X, 0.5), Some(0.0));
        assert_eq!(timeline.sample(Prop::X, 1.5), Some(5.0));
        assert_eq!(timeline.duration(), 2.0);
    }

    #[test]
    fn duration_covers_the_latest_end() {
        let timeline = Timeline::new()
            .then(Prop::X, linear(0.0, 1.0, 1.0))
            .overlapping(0.8, Prop::Opacity, linear(0.0, 1.0, 0.3));
        // Overlap starts at 0.2 and ends at 0.5; the first tween still
        // defines the total duration.
        assert_eq!(timeline.duration(), 1.0);
        assert!(timeline.is_finished(1.0));
        assert!(!timeline.is_finished(0.99));
    }

    #[test]
    fn empty_timeline_is_immediately_finished() {
        let timeline: Timeline<Prop> = Timeline::new();
        assert!(timeline.is_empty());
        assert!(timeline.is_finished(0.0));
    }

    #[test]
    fn zero_duration_tween_snaps_to_target() {
        let timeline = Timeline::new().then(Prop::X, linear(0.0, 7.0, 0.0));
        assert_eq!(timeline.sample(Prop::X, 0.0), Some(7.0));
    }
}
