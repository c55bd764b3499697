// SPDX-License-Identifier: MPL-2.0
//! Gallery screen rendering: header, filter bar and image grid.

use super::component::{Message, State};
use super::lightbox;
use crate::application::query::{label_for, DisplayCategory};
use crate::domain::gallery::{CategoryKey, GalleryImage};
use crate::i18n::I18n;
use crate::media::ThumbnailStatus;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Image, Row, Scrollable, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::ops::Range;

/// Context required to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

/// Translation lookup used for category labels.
///
/// The `"all"` sentinel is labelled with the `all-photos` message; other keys
/// are looked up under the category prefix.
pub fn translate_key(i18n: &I18n, key: &str) -> Option<String> {
    if key == CategoryKey::ALL {
        i18n.translate("all-photos")
    } else {
        i18n.translate_category(key)
    }
}

/// Filter bar entries in display order, with "all" first.
///
/// The server normally lists the sentinel itself; it is prepended when it
/// does not.
pub fn filter_entries(state: &State, i18n: &I18n) -> Vec<DisplayCategory> {
    let mut entries = state
        .session()
        .display_categories(|key| translate_key(i18n, key));
    if !entries.iter().any(|entry| entry.key.is_all()) {
        entries.insert(
            0,
            DisplayCategory {
                key: CategoryKey::all(),
                label: i18n.tr("all-photos"),
            },
        );
    }
    entries
}

/// List positions of the grid tiles inside a viewport of `width` by
/// `height` scrolled down by `offset_y`, plus one row below it.
///
/// Tiles are laid out in rows of fixed-size cells; captions longer than a
/// line make the real rows taller, so the estimate errs towards more tiles.
pub fn visible_tiles(width: f32, height: f32, offset_y: f32, count: usize) -> Range<usize> {
    let cell = sizing::THUMBNAIL + spacing::MD;
    let row = sizing::THUMBNAIL + spacing::XXS + typography::BODY * 1.5 + spacing::MD;
    let columns = ((width + spacing::MD) / cell).floor().max(1.0) as usize;

    let top = offset_y.max(0.0);
    let first_row = (top / row).floor() as usize;
    let last_row = ((top + height.max(0.0)) / row).ceil() as usize + 1;

    let start = (first_row * columns).min(count);
    let end = (last_row * columns).min(count);
    start..end
}

/// Renders the gallery screen, with the lightbox on top when open.
pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let i18n = env.i18n;

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(header(state, i18n))
        .push(filter_bar(state, i18n))
        .push(body(state, i18n));

    match lightbox::view(state, i18n) {
        Some(overlay) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(content)
            .push(overlay)
            .into(),
        None => content.into(),
    }
}

fn header<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("photo-gallery")).size(typography::TITLE_LG);
    let subtitle = Text::new(i18n.tr("gallery-subtitle"))
        .size(typography::BODY)
        .color(palette::GRAY_400);

    let count = state.session().images().len().to_string();
    let counter = Text::new(
        i18n.tr_with_args("gallery-image-count", &[("count", count.as_str())]),
    )
    .size(typography::CAPTION)
    .color(palette::GRAY_400);

    Column::new()
        .spacing(spacing::XXS)
        .push(title)
        .push(subtitle)
        .push(counter)
        .into()
}

fn filter_bar<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let active = state.session().active_key();

    let chips: Vec<Element<'a, Message>> = filter_entries(state, i18n)
        .into_iter()
        .map(|entry| {
            let style = if entry.key == active {
                styles::button::chip_selected
            } else {
                styles::button::chip
            };
            button(Text::new(entry.label).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(style)
                .on_press(Message::FilterSelected(entry.key))
                .into()
        })
        .collect();

    let chips = Row::with_children(chips).spacing(spacing::XS).wrap();

    if state.session().categories_error().is_none() {
        return chips.into();
    }

    let retry = button(Text::new(i18n.tr("retry")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::RetryCategories);

    Column::new()
        .spacing(spacing::XS)
        .push(chips)
        .push(
            Row::new()
                .spacing(spacing::MD)
                .align_y(alignment::Vertical::Center)
                .push(
                    Text::new(i18n.tr("notification-categories-load-error"))
                        .size(typography::BODY)
                        .color(palette::ERROR_500),
                )
                .push(retry),
        )
        .into()
}

fn body<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let store = state.session().image_store();

    if let Some(error) = store.last_error() {
        let banner = error_banner(i18n, error.i18n_key());
        if store.is_empty() {
            return centered(banner);
        }
        // Previous list stays visible under the banner
        return Column::new()
            .spacing(spacing::MD)
            .push(banner)
            .push(grid(state, i18n))
            .into();
    }

    if store.is_empty() {
        let key = if store.is_loading() {
            "gallery-loading"
        } else {
            "gallery-empty"
        };
        return centered(
            Text::new(i18n.tr(key))
                .size(typography::TITLE_SM)
                .color(palette::GRAY_400)
                .into(),
        );
    }

    grid(state, i18n)
}

fn grid<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let categories = state.session().categories();
    let tiles: Vec<Element<'a, Message>> = state
        .session()
        .images()
        .iter()
        .map(|image| {
            let label = label_for(&image.category_key, categories, |key| {
                translate_key(i18n, key)
            });
            tile(state, i18n, image, label)
        })
        .collect();

    let count = tiles.len();
    Scrollable::new(
        Row::with_children(tiles)
            .spacing(spacing::MD)
            .wrap()
            .vertical_spacing(spacing::MD),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .on_scroll(move |viewport| {
        let bounds = viewport.bounds();
        Message::TilesVisible(visible_tiles(
            bounds.width,
            bounds.height,
            viewport.absolute_offset().y,
            count,
        ))
    })
    .into()
}

fn tile<'a>(
    state: &'a State,
    i18n: &'a I18n,
    image: &'a GalleryImage,
    label: String,
) -> Element<'a, Message> {
    let picture = picture(
        state.thumbnail(&image.src),
        i18n,
        Length::Fixed(sizing::THUMBNAIL),
        Length::Fixed(sizing::THUMBNAIL),
        ContentFit::Cover,
    );

    let badge = Container::new(Text::new(label).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge);

    let layered = Stack::new().push(picture).push(
        Container::new(badge)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XS)
            .align_x(alignment::Horizontal::Left)
            .align_y(alignment::Vertical::Bottom),
    );

    let caption = Text::new(image.title.as_str())
        .size(typography::BODY)
        .width(Length::Fixed(sizing::THUMBNAIL));

    button(Column::new().spacing(spacing::XXS).push(layered).push(caption))
        .padding(0)
        .style(styles::button::tile)
        .on_press(Message::ImageClicked(image.id))
        .into()
}

/// Draws a cached picture, or a placeholder while loading or after failure.
pub(super) fn picture<'a, M: 'a>(
    status: ThumbnailStatus,
    i18n: &I18n,
    width: Length,
    height: Length,
    fit: ContentFit,
) -> Element<'a, M> {
    match status {
        ThumbnailStatus::Ready(handle) => Image::new(handle)
            .width(width)
            .height(height)
            .content_fit(fit)
            .into(),
        ThumbnailStatus::Failed => placeholder(i18n.tr("image-unavailable"), width, height),
        ThumbnailStatus::Loading | ThumbnailStatus::Missing => {
            placeholder(i18n.tr("gallery-loading"), width, height)
        }
    }
}

fn placeholder<'a, M: 'a>(label: String, width: Length, height: Length) -> Element<'a, M> {
    Container::new(Text::new(label).size(typography::CAPTION))
        .width(width)
        .height(height)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::placeholder)
        .into()
}

fn error_banner<'a>(i18n: &'a I18n, message_key: &'a str) -> Element<'a, Message> {
    let retry = button(Text::new(i18n.tr("retry")))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::Retry);

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr(message_key))
                .size(typography::BODY)
                .color(palette::ERROR_500),
        )
        .push(retry);

    Container::new(content)
        .padding(spacing::MD)
        .style(styles::container::panel)
        .into()
}

fn centered(content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Home page strip: the first images of the unfiltered list.
///
/// Selecting a picture opens the gallery filtered by its category, through
/// `on_select`.
pub fn preview<'a, M, F>(state: &'a State, i18n: &'a I18n, on_select: F) -> Element<'a, M>
where
    M: Clone + 'a,
    F: Fn(CategoryKey) -> M,
{
    let tiles: Vec<Element<'a, M>> = state
        .preview()
        .iter()
        .map(|image| {
            let picture = picture(
                state.thumbnail(&image.src),
                i18n,
                Length::Fixed(sizing::THUMBNAIL),
                Length::Fixed(sizing::PREVIEW_TILE_HEIGHT),
                ContentFit::Cover,
            );
            button(picture)
                .padding(0)
                .style(styles::button::tile)
                .on_press(on_select(image.category_key.clone()))
                .into()
        })
        .collect();

    if tiles.is_empty() {
        return Text::new(i18n.tr("gallery-loading"))
            .size(typography::BODY)
            .color(palette::GRAY_400)
            .into();
    }

    Row::with_children(tiles)
        .spacing(spacing::MD)
        .wrap()
        .vertical_spacing(spacing::MD)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn english() -> I18n {
        I18n::new(Some("en-US".into()), None, &Config::default())
    }

    #[test]
    fn all_sentinel_is_labelled_with_all_photos() {
        let i18n = english();
        assert_eq!(translate_key(&i18n, "all"), i18n.translate("all-photos"));
    }

    #[test]
    fn known_category_uses_prefixed_translation() {
        let i18n = english();
        assert_eq!(translate_key(&i18n, "nature").as_deref(), Some("Nature"));
        assert_eq!(translate_key(&i18n, "unlisted"), None);
    }

    #[test]
    fn visible_tiles_start_at_top_row() {
        // 700 px fits three columns; 600 px shows three rows, plus one below
        assert_eq!(visible_tiles(700.0, 600.0, 0.0, 100), 0..12);
        assert_eq!(visible_tiles(100.0, 600.0, 0.0, 100), 0..4);
    }

    #[test]
    fn visible_tiles_follow_scroll_offset() {
        assert_eq!(visible_tiles(700.0, 261.0, 530.0, 100), 6..15);
        assert_eq!(visible_tiles(700.0, 261.0, 530.0, 10), 6..10);
        assert_eq!(visible_tiles(700.0, 261.0, 5000.0, 10), 10..10);
    }
}
