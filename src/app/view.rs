// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The hero scene fills the window; the player overlay is stacked in the
//! top-right corner above it.

use super::Message;
use crate::animation::Choreography;
use crate::ui::design_tokens::spacing;
use crate::ui::{hero, player_bar};
use iced::alignment::Horizontal;
use iced::widget::{image, Container, Stack};
use iced::{Element, Length, Padding};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub intro: &'a Choreography,
    pub elapsed: f32,
    pub frame: Option<&'a image::Handle>,
    pub playback: player_bar::PlaybackState,
    pub track_title: &'a str,
    pub track_artist: &'a str,
}

/// Renders the full window: scene plus overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scene = hero::view(hero::ViewContext {
        intro: ctx.intro,
        elapsed: ctx.elapsed,
        frame: ctx.frame,
    });

    let bar = player_bar::view(
        player_bar::ViewContext {
            track_title: ctx.track_title,
            track_artist: ctx.track_artist,
        },
        &ctx.playback,
    )
    .map(Message::PlayerBar);

    let bar_layer = Container::new(bar)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(Padding {
            top: spacing::XL,
            right: spacing::XXL,
            ..Padding::ZERO
        });

    Stack::new()
        .push(scene)
        .push(bar_layer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
