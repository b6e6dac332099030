// SPDX-License-Identifier: MPL-2.0
//! Tweening engine for the intro choreography.
//!
//! A [`Timeline`] is a time-ordered set of property interpolations; the view
//! samples it with the elapsed time each frame. Everything in here is plain
//! data and arithmetic: no clocks, no side effects, no engine thread.

pub mod choreography;
pub mod easing;
pub mod timeline;

pub use choreography::{Channel, Choreography};
pub use easing::Easing;
pub use timeline::{Position, Timeline, Tween};
