// SPDX-License-Identifier: MPL-2.0
//! Soundtrack player overlay.
//!
//! A compact panel with the track labels, a play/pause toggle, and the
//! elapsed-time readout.

use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Background, Border, Color, Element, Length, Theme};

/// Messages emitted by the player overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Toggle play/pause state.
    TogglePlayback,
}

/// View context for rendering the overlay.
pub struct ViewContext<'a> {
    pub track_title: &'a str,
    pub track_artist: &'a str,
}

/// Playback state for rendering the overlay.
#[derive(Debug, Clone, Default)]
pub struct PlaybackState {
    /// Is the soundtrack currently playing?
    pub is_playing: bool,

    /// Current playback position in seconds.
    pub position_secs: f64,

    /// Total duration in seconds.
    pub duration_secs: f64,
}

/// Renders the player overlay panel.
pub fn view<'a>(ctx: ViewContext<'a>, state: &PlaybackState) -> Element<'a, Message> {
    let icon_size = sizing::ICON_SM;

    let toggle_icon = if state.is_playing {
        icons::sized(icons::pause(), icon_size)
    } else {
        icons::sized(icons::play(), icon_size)
    };

    let toggle_button = button(toggle_icon)
        .on_press(Message::TogglePlayback)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::BUTTON_HEIGHT))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(toggle_style);

    let labels = column![
        text(ctx.track_title.to_string())
            .size(typography::BODY)
            .color(palette::WHITE),
        text(ctx.track_artist.to_string())
            .size(typography::BODY_SM)
            .color(palette::GRAY_200),
        text(format_clock(state.position_secs))
            .size(typography::CAPTION)
            .color(palette::GRAY_200),
    ]
    .spacing(spacing::XXS)
    .width(Length::Fill);

    let content = row![labels, toggle_button]
        .spacing(spacing::SM)
        .align_y(Alignment::Center);

    container(content)
        .width(Length::Fixed(sizing::PLAYER_WIDTH))
        .padding(spacing::SM)
        .style(panel_style)
        .into()
}

/// Translucent dark panel behind the player.
fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Circular translucent toggle, brighter on hover.
fn toggle_style(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.3,
        _ => opacity::OVERLAY_SUBTLE,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::WHITE
        })),
        text_color: palette::WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..button::Style::default()
    }
}

/// Formats the elapsed clock as `M:SS`, flooring to whole seconds.
fn format_clock(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let minutes = total_secs / 60;
    let secs = total_secs % 60;
    format!("{}:{:02}", minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_floors_fractional_seconds() {
        assert_eq!(format_clock(125.4), "2:05");
    }

    #[test]
    fn clock_handles_zero() {
        assert_eq!(format_clock(0.0), "0:00");
    }

    #[test]
    fn clock_zero_pads_seconds_only() {
        assert_eq!(format_clock(9.0), "0:09");
        assert_eq!(format_clock(61.0), "1:01");
        assert_eq!(format_clock(600.0), "10:00");
    }

    #[test]
    fn clock_clamps_negative_positions() {
        assert_eq!(format_clock(-4.2), "0:00");
    }

    #[test]
    fn playback_state_defaults() {
        let state = PlaybackState::default();
        assert!(!state.is_playing);
        assert_eq!(state.position_secs, 0.0);
        assert_eq!(state.duration_secs, 0.0);
    }

    #[test]
    fn view_renders() {
        let ctx = ViewContext {
            track_title: "Ashes and Blood",
            track_artist: "Woodkid - Arcane",
        };
        let state = PlaybackState::default();
        let _element = view(ctx, &state);
    }
}
