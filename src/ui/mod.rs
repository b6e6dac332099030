// SPDX-License-Identifier: MPL-2.0
//! UI modules: the hero scene, the player overlay, and shared styling.

pub mod design_tokens;
pub mod hero;
pub mod icons;
pub mod player_bar;
