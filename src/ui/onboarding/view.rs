// SPDX-License-Identifier: MPL-2.0
//! Rendering of the onboarding screen.
//!
//! Visual state is derived entirely from the carousel: each group's eased
//! entrance progress becomes opacity, a vertical slide-in and a scale.

use super::{Message, State};
use crate::config::defaults::{ENTRANCE_MIN_SCALE, ENTRANCE_OFFSET};
use crate::domain::onboarding::{AnimationGroup, Artwork, Slide, StackLayer};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, svg, text, Column, Container, Row, Space, Stack};
use iced::{
    alignment::{Horizontal, Vertical},
    Border, Color, Element, Length, Padding, Radians, Theme,
};

/// Contextual data needed to render the onboarding screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
    /// Whether the effective appearance is dark.
    pub dark: bool,
}

/// Visual parameters of a group at a given entrance progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub opacity: f32,
    /// Downward displacement, shrinking to zero as the entrance completes.
    pub offset: f32,
    pub scale: f32,
}

impl Entrance {
    #[must_use]
    pub fn from_progress(progress: f32) -> Self {
        let progress = progress.clamp(0.0, 1.0);
        Self {
            opacity: progress,
            offset: ENTRANCE_OFFSET * (1.0 - progress),
            scale: ENTRANCE_MIN_SCALE + (1.0 - ENTRANCE_MIN_SCALE) * progress,
        }
    }
}

/// Render the onboarding screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let carousel = state.carousel();
    let slide = carousel.current_slide();
    let now = state.now();

    let artwork = match slide.artwork() {
        Artwork::Single => {
            let entrance =
                Entrance::from_progress(carousel.progress(AnimationGroup::PageImage, now));
            single_artwork(state, slide, entrance, &ctx)
        }
        Artwork::Stack(layers) => {
            let entrance =
                Entrance::from_progress(carousel.progress(AnimationGroup::ImageStack, now));
            stacked_artwork(state, layers, entrance, carousel.bounce_offset(now), &ctx)
        }
    };

    let text_entrance = Entrance::from_progress(carousel.progress(AnimationGroup::Text, now));
    let copy = build_copy(slide, text_entrance, &ctx);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(build_top_bar(&ctx))
        .push(Space::new().height(Length::Fill))
        .push(artwork)
        .push(copy)
        .push(Space::new().height(Length::Fill))
        .push(build_page_dots(carousel.current_page(), carousel.page_count(), &ctx))
        .push(build_primary_button(carousel.is_last(), &ctx));

    let surface = ctx.scheme.surface_primary;
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XL)
        .style(move |_theme: &Theme| container::Style {
            background: Some(surface.into()),
            ..Default::default()
        })
        .into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = if ctx.dark {
        ctx.i18n.tr("onboarding-appearance-light")
    } else {
        ctx.i18n.tr("onboarding-appearance-dark")
    };

    Row::new()
        .width(Length::Fill)
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(label).size(typography::BODY))
                .style(button::text)
                .on_press(Message::ToggleAppearance),
        )
        .into()
}

fn single_artwork<'a>(
    state: &'a State,
    slide: &'a Slide,
    entrance: Entrance,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let edge = sizing::ARTWORK_HEIGHT * entrance.scale;
    let image: Element<'a, Message> = match state.artwork().get(slide.image_ref()) {
        Some(handle) => svg::Svg::new(handle.clone())
            .width(Length::Fixed(edge))
            .height(Length::Fixed(edge))
            .opacity(entrance.opacity)
            .into(),
        None => missing_artwork(entrance, ctx),
    };

    Container::new(image)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::STACK_HEIGHT))
        .padding(shift(0.0, entrance.offset))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn stacked_artwork<'a>(
    state: &'a State,
    layers: &'a [StackLayer],
    entrance: Entrance,
    bounce: f32,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let mut stack = Stack::new()
        .width(Length::Fixed(sizing::STACK_WIDTH))
        .height(Length::Fixed(sizing::STACK_HEIGHT));

    // Layers are already in paint order.
    for layer in layers {
        let edge = layer.size * entrance.scale;
        let image: Element<'a, Message> = match state.artwork().get(&layer.image_ref) {
            Some(handle) => svg::Svg::new(handle.clone())
                .width(Length::Fixed(edge))
                .height(Length::Fixed(edge))
                .rotation(Radians(layer.rotation_degrees.to_radians()))
                .opacity(entrance.opacity)
                .into(),
            None => missing_artwork(entrance, ctx),
        };

        stack = stack.push(
            Container::new(image)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(shift(layer.offset_x, layer.offset_y + bounce + entrance.offset))
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center),
        );
    }

    Container::new(stack)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn missing_artwork<'a>(entrance: Entrance, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    text(ctx.i18n.tr("onboarding-missing-artwork"))
        .size(typography::BODY)
        .color(faded(ctx.scheme.text_secondary, entrance.opacity))
        .into()
}

fn build_copy<'a>(slide: &'a Slide, entrance: Entrance, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = text(slide.title())
        .size(typography::TITLE_LG)
        .center()
        .color(faded(ctx.scheme.text_primary, entrance.opacity));
    let subtitle = text(slide.subtitle())
        .size(typography::BODY_LG)
        .center()
        .color(faded(ctx.scheme.text_secondary, entrance.opacity));

    Column::new()
        .max_width(sizing::COPY_MAX_WIDTH)
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .padding(shift(0.0, entrance.offset))
        .push(title)
        .push(subtitle)
        .into()
}

fn build_page_dots<'a>(current: usize, count: usize, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut dots = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);

    for index in 0..count {
        let color = if index == current {
            ctx.scheme.brand_primary
        } else {
            faded(ctx.scheme.indicator_inactive, opacity::INACTIVE)
        };
        let dot = Container::new(Space::new())
            .width(Length::Fixed(sizing::PAGE_DOT))
            .height(Length::Fixed(sizing::PAGE_DOT))
            .style(move |_theme: &Theme| container::Style {
                background: Some(color.into()),
                border: Border {
                    radius: radius::FULL.into(),
                    ..Default::default()
                },
                ..Default::default()
            });

        dots = dots.push(
            button(dot)
                .padding(spacing::XXS)
                .style(button::text)
                .on_press(Message::SelectPage(index)),
        );
    }

    let indicator = ctx.i18n.tr_with_args(
        "onboarding-page-indicator",
        &[
            ("current", (current + 1).to_string().as_str()),
            ("total", count.to_string().as_str()),
        ],
    );

    Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(dots)
        .push(
            text(indicator)
                .size(typography::BODY)
                .color(ctx.scheme.text_secondary),
        )
        .into()
}

fn build_primary_button<'a>(is_last: bool, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let label = if is_last {
        ctx.i18n.tr("onboarding-get-started-button")
    } else {
        ctx.i18n.tr("onboarding-next-button")
    };

    button(
        text(label)
            .size(typography::BODY_LG)
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::BUTTON_HEIGHT))
    .style(button::primary)
    .on_press(Message::Advance)
    .into()
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Padding that moves centered content by `(dx, dy)`.
fn shift(dx: f32, dy: f32) -> Padding {
    Padding {
        top: (2.0 * dy).max(0.0),
        right: (-2.0 * dx).max(0.0),
        bottom: (-2.0 * dy).max(0.0),
        left: (2.0 * dx).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn entrance_starts_hidden_and_displaced() {
        let entrance = Entrance::from_progress(0.0);
        assert_abs_diff_eq!(entrance.opacity, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(entrance.offset, ENTRANCE_OFFSET, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(entrance.scale, ENTRANCE_MIN_SCALE, epsilon = F32_EPSILON);
    }

    #[test]
    fn entrance_ends_at_rest() {
        let entrance = Entrance::from_progress(1.0);
        assert_abs_diff_eq!(entrance.opacity, 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(entrance.offset, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(entrance.scale, 1.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn entrance_clamps_progress() {
        assert_eq!(Entrance::from_progress(3.0), Entrance::from_progress(1.0));
        assert_eq!(Entrance::from_progress(-1.0), Entrance::from_progress(0.0));
    }

    #[test]
    fn shift_moves_center_by_requested_amount() {
        let padding = shift(10.0, -5.0);
        assert_abs_diff_eq!((padding.left - padding.right) / 2.0, 10.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!((padding.top - padding.bottom) / 2.0, -5.0, epsilon = F32_EPSILON);
    }
}
