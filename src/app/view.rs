// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module renders the navigation bar, the active screen and the toast
//! overlay on top of both.

use super::{Message, Screen};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::gallery::{self, ViewEnv as GalleryViewEnv};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub gallery: &'a gallery::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => view_home(ctx.gallery, ctx.i18n),
        Screen::Gallery => gallery::view::view(ctx.gallery, GalleryViewEnv { i18n: ctx.i18n })
            .map(Message::Gallery),
    };

    let column = Column::new()
        .push(navbar(ctx.i18n, ctx.screen))
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        );

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(column.width(Length::Fill).height(Length::Fill))
        .push(toasts)
        .into()
}

fn navbar(i18n: &I18n, screen: Screen) -> Element<'_, Message> {
    let title = Text::new(i18n.tr("window-title")).size(typography::TITLE_MD);

    let link = |key: &str, target: Screen| {
        button(Text::new(i18n.tr(key)).size(typography::BODY_LG))
            .style(styles::button::nav_link(screen == target))
            .on_press(Message::SwitchScreen(target))
    };

    let mut languages = Row::new()
        .spacing(spacing::XXS)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr("language-label"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    for locale in i18n.available_locales() {
        let style = if locale == i18n.current_locale() {
            styles::button::chip_selected
        } else {
            styles::button::chip
        };
        languages = languages.push(
            button(Text::new(locale.to_string()).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(style)
                .on_press(Message::LanguageSelected(locale.clone())),
        );
    }

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(link("nav-home", Screen::Home))
        .push(link("nav-gallery", Screen::Gallery))
        .push(languages);

    Container::new(bar)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::panel)
        .into()
}

fn view_home<'a>(gallery: &'a gallery::State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("gallery-title")).size(typography::TITLE_LG);
    let description = Text::new(i18n.tr("gallery-description"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let strip = gallery::view::preview(gallery, i18n, Message::OpenCategory);

    let full_gallery = button(Text::new(i18n.tr("view-full-gallery")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::SwitchScreen(Screen::Gallery));

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(description)
        .push(strip)
        .push(full_gallery);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
