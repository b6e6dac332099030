// SPDX-License-Identifier: MPL-2.0
//! The hero scene: background video, header strip, title block, and call
//! to action, layered with a `Stack`.
//!
//! Every animated property is sampled from the intro choreography with the
//! elapsed time the application tracks; the scene itself holds no state and
//! emits no messages.

use crate::animation::{Channel, Choreography};
use crate::ui::design_tokens::{opacity, palette, radius, spacing, typography};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, image, row, text, Container, Space, Stack};
use iced::{Alignment, Background, Border, Color, ContentFit, Element, Length, Padding, Theme};

// Scene copy.
const STUDIO_MARK: &str = "RIOT";
const WORDMARK_GLYPH: &str = "A";
const HEADER_LINE_ONE: &str = "WATCH THE CITY";
const HEADER_LINE_TWO: &str = "CATCH FIRE";
const SEASON_TAG_LINE_ONE: &str = "SEASON";
const SEASON_TAG_LINE_TWO: &str = "2";
const TITLE_TEXT: &str = "ARCANE";
const SUBTITLE_TEXT: &str = "LEAGUE OF LEGENDS";
const CTA_LABEL: &str = "Watch Now";
const CTA_NOTE: &str = "ONLY ON NETFLIX";

// Static scene geometry.
const HEADER_TOP: f32 = 48.0;
const SEASON_TAG_RIGHT: f32 = 40.0;
const TITLE_GLYPH_SIZE: f32 = 148.0;
const SUBTITLE_SIZE: f32 = 48.0;
const CTA_OFFSET_LEFT: f32 = 200.0;
const CTA_OFFSET_TOP: f32 = 280.0;

/// Context required to render the hero scene.
pub struct ViewContext<'a> {
    pub intro: &'a Choreography,
    /// Seconds since the intro began.
    pub elapsed: f32,
    /// Latest background video frame, if the feed produced one.
    pub frame: Option<&'a image::Handle>,
}

/// Renders the layered hero scene.
pub fn view<'a, M: Clone + 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let sample = |channel, resting| ctx.intro.value_or(channel, ctx.elapsed, resting);

    let mut stack = Stack::new().push(backdrop());

    if let Some(handle) = ctx.frame {
        // The clip travels down into place in two phases: the slide covers
        // most of the distance, the settle eases out the remainder.
        let slide = sample(Channel::VideoSlide, 0.0);
        let settle = sample(Channel::VideoSettle, 0.0);
        let drop = (-slide + settle).max(0.0);
        stack = stack.push(video_layer(handle, drop));
    }

    stack = stack
        .push(offset_layer(
            studio_badge(),
            sample(Channel::HeaderLogoX, 25.0),
            HEADER_TOP,
        ))
        .push(offset_layer(
            text(WORDMARK_GLYPH)
                .size(typography::BODY * 2.5)
                .color(palette::WHITE)
                .into(),
            sample(Channel::WordmarkX, 170.0),
            HEADER_TOP,
        ))
        .push(offset_layer(
            header_tagline(),
            sample(Channel::HeaderTextX, 250.0),
            HEADER_TOP,
        ))
        .push(season_tag(sample(Channel::SeasonTagOpacity, 1.0)))
        .push(title_block(
            sample(Channel::TitleScale, 1.0),
            sample(Channel::TitleGap, 0.0),
            sample(Channel::SubtitleScale, 1.0),
            sample(Channel::SubtitleOpacity, 1.0),
        ))
        .push(call_to_action());

    stack.width(Length::Fill).height(Length::Fill).into()
}

/// Solid black surface behind everything else.
fn backdrop<'a, M: 'a>() -> Element<'a, M> {
    Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(palette::BLACK)),
            ..Default::default()
        })
        .into()
}

/// Background video frame, covering the window, shifted down by `drop`.
fn video_layer<'a, M: 'a>(handle: &image::Handle, drop: f32) -> Element<'a, M> {
    Container::new(
        image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .content_fit(ContentFit::Cover),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(Padding {
        top: drop,
        ..Padding::ZERO
    })
    .into()
}

/// Full-bleed layer placing `content` at a left/top offset.
fn offset_layer<'a, M: 'a>(content: Element<'a, M>, left: f32, top: f32) -> Element<'a, M> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            left: left.max(0.0),
            top,
            ..Padding::ZERO
        })
        .into()
}

/// Bordered studio mark in the header corner.
fn studio_badge<'a, M: 'a>() -> Element<'a, M> {
    Container::new(
        text(STUDIO_MARK)
            .size(typography::BODY)
            .color(palette::WHITE),
    )
    .padding(spacing::XS)
    .style(|_theme: &Theme| container::Style {
        border: Border {
            color: palette::WHITE,
            width: 2.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    })
    .into()
}

/// Two-line header tagline.
fn header_tagline<'a, M: 'a>() -> Element<'a, M> {
    column![
        text(HEADER_LINE_ONE)
            .size(typography::BODY + 2.0)
            .color(palette::WHITE),
        text(HEADER_LINE_TWO)
            .size(typography::BODY + 2.0)
            .color(palette::WHITE),
    ]
    .spacing(spacing::XXS)
    .into()
}

/// Right-aligned season tag, fading in with the header.
fn season_tag<'a, M: 'a>(alpha: f32) -> Element<'a, M> {
    let color = Color {
        a: alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        ..palette::WHITE
    };
    let tag = column![
        text(SEASON_TAG_LINE_ONE).size(typography::BODY + 6.0).color(color),
        text(SEASON_TAG_LINE_TWO).size(typography::BODY + 6.0).color(color),
    ]
    .spacing(spacing::XXS)
    .align_x(Alignment::End);

    Container::new(tag)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Right)
        .padding(Padding {
            top: HEADER_TOP,
            right: SEASON_TAG_RIGHT,
            ..Padding::ZERO
        })
        .into()
}

/// Centered title glyph row and subtitle, driven by the pulse channels.
fn title_block<'a, M: 'a>(
    scale: f32,
    gap: f32,
    subtitle_scale: f32,
    subtitle_alpha: f32,
) -> Element<'a, M> {
    let glyph_size = TITLE_GLYPH_SIZE * scale.max(0.0);
    let glyphs = row(TITLE_TEXT.chars().map(|glyph| {
        text(glyph.to_string())
            .size(glyph_size)
            .color(palette::WHITE)
            .into()
    }))
    .spacing(gap.max(0.0));

    let subtitle_color = Color {
        a: subtitle_alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        ..palette::WHITE
    };
    let subtitle = text(SUBTITLE_TEXT)
        .size((SUBTITLE_SIZE * subtitle_scale).max(1.0))
        .color(subtitle_color);

    let block = column![glyphs, subtitle]
        .spacing(spacing::XS)
        .align_x(Alignment::Center);

    Container::new(block)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

/// "Watch Now" row, offset from center like the promotional layout.
fn call_to_action<'a, M: Clone + 'a>() -> Element<'a, M> {
    let watch = button(text(CTA_LABEL).size(typography::BODY))
        .padding(Padding {
            top: spacing::XS,
            bottom: spacing::XS,
            left: spacing::MD,
            right: spacing::MD,
        })
        .style(cta_style);

    let note = text(CTA_NOTE)
        .size(typography::BODY)
        .color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::WHITE
        });

    let cta = row![watch, note]
        .spacing(spacing::MD)
        .align_y(Alignment::Center);

    Container::new(cta)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .padding(Padding {
            left: CTA_OFFSET_LEFT,
            top: CTA_OFFSET_TOP,
            ..Padding::ZERO
        })
        .into()
}

/// Black CTA chip with a rounded lower-right corner.
fn cta_style(_theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: palette::WHITE,
        border: Border {
            radius: iced::border::Radius {
                top_left: 0.0,
                top_right: 0.0,
                bottom_right: radius::MD,
                bottom_left: 0.0,
            },
            ..Default::default()
        },
        ..button::Style::default()
    }
}
