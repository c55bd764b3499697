// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: one picture over a dimmed backdrop.
//!
//! Clicking the backdrop closes the overlay; the picture itself swallows
//! clicks. Prev/next controls are only drawn when the list holds more than
//! one image.

use super::component::{Message, State};
use super::view::picture;
use crate::application::query::CloseReason;
use crate::i18n::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Largest area the picture may take inside the window.
const MAX_PICTURE_WIDTH: f32 = 1100.0;
const MAX_PICTURE_HEIGHT: f32 = 760.0;

/// Renders the overlay, or `None` while the lightbox is closed.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    let session = state.session();
    let image = session.current_image()?;
    let info = session.lightbox_info();

    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::Close(CloseReason::Backdrop));

    let close_button = button(Text::new("×").size(typography::TITLE_MD))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_MEDIUM,
        ))
        .on_press(Message::Close(CloseReason::CloseButton));

    let close_row = Row::new()
        .width(Length::Fill)
        .push(Space::new().width(Length::Fill))
        .push(close_button);

    let framed = Container::new(picture(
        state.thumbnail(&image.src),
        i18n,
        Length::Fill,
        Length::Fill,
        ContentFit::Contain,
    ))
    .width(Length::Fill)
    .height(Length::Fill)
    .max_width(MAX_PICTURE_WIDTH)
    .max_height(MAX_PICTURE_HEIGHT)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let mut stage = Row::new()
        .spacing(spacing::MD)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);
    if info.show_navigation {
        stage = stage.push(nav_button("‹", Message::Previous));
    }
    stage = stage.push(opaque(framed));
    if info.show_navigation {
        stage = stage.push(nav_button("›", Message::Next));
    }

    let mut caption = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(image.title.as_str())
                .size(typography::TITLE_SM)
                .color(palette::WHITE),
        );
    if let Some(index) = info.current_index {
        let current = (index + 1).to_string();
        let total = info.total_count.to_string();
        caption = caption.push(
            Text::new(i18n.tr_with_args(
                "lightbox-position",
                &[("current", current.as_str()), ("total", total.as_str())],
            ))
            .size(typography::CAPTION)
            .color(palette::GRAY_200),
        );
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(close_row)
        .push(stage)
        .push(caption);

    Some(
        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(backdrop)
            .push(content)
            .into(),
    )
}

fn nav_button<'a>(glyph: &'a str, message: Message) -> Element<'a, Message> {
    button(
        Container::new(Text::new(glyph).size(typography::TITLE_LG))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .padding(0)
    .width(Length::Fixed(sizing::LIGHTBOX_NAV))
    .height(Length::Fixed(sizing::LIGHTBOX_NAV))
    .style(styles::button::overlay(
        palette::WHITE,
        opacity::OVERLAY_MEDIUM,
        opacity::OVERLAY_STRONG,
    ))
    .on_press(message)
    .into()
}
