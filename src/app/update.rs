// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Handlers borrow the pieces of application state they need through
//! [`UpdateContext`] so each stays testable without a running window.

use super::{Message, Screen};
use crate::application::query::CloseReason;
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::domain::gallery::CategoryKey;
use crate::i18n::I18n;
use crate::ui::gallery;
use crate::ui::notifications::{self, Notification};
use iced::Task;
use std::path::Path;
use unic_langid::LanguageIdentifier;

/// Mutable view over the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub screen: &'a mut Screen,
    pub config: &'a mut Config,
    pub gallery: &'a mut gallery::State,
    pub notifications: &'a mut notifications::Manager,
    pub diagnostics: &'a mut DiagnosticsCollector,
}

/// Forwards a gallery message and applies the effect it reports.
pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery::Message,
) -> Task<Message> {
    let (effect, task) = ctx.gallery.handle_message(message);
    match effect {
        gallery::Effect::None => {}
        gallery::Effect::ShowError(error) => {
            ctx.notifications.push(Notification::error(error.i18n_key()));
        }
        gallery::Effect::ClearNetworkErrors => ctx.notifications.clear_network_errors(),
    }
    ctx.diagnostics.process_pending();
    task.map(Message::Gallery)
}

/// Switches screens. The lightbox only lives on the gallery screen, and the
/// home preview needs the unfiltered list, so going home while a category is
/// selected reloads "all".
pub fn handle_screen_switch(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    *ctx.screen = target;
    if target != Screen::Gallery {
        ctx.gallery.close_lightbox(CloseReason::ScreenChanged);
        ctx.diagnostics.process_pending();
    }
    if target == Screen::Home && ctx.gallery.session().filter().is_active() {
        return ctx
            .gallery
            .select_filter(CategoryKey::all())
            .map(Message::Gallery);
    }
    Task::none()
}

/// Opens the gallery on `key` (home preview link).
pub fn handle_open_category(ctx: &mut UpdateContext<'_>, key: CategoryKey) -> Task<Message> {
    *ctx.screen = Screen::Gallery;
    ctx.gallery.select_filter(key).map(Message::Gallery)
}

/// Switches the UI language and persists the choice.
pub fn handle_language_selected(ctx: &mut UpdateContext<'_>, locale: LanguageIdentifier) {
    if !ctx.i18n.set_locale(locale.clone()) {
        return;
    }
    ctx.config.general.language = Some(locale.to_string());
    if config::save(ctx.config).is_err() {
        ctx.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

/// Writes the diagnostics buffer to `path`; failures only produce a toast.
pub fn dump_diagnostics(ctx: &mut UpdateContext<'_>, path: &Path) {
    ctx.diagnostics.process_pending();
    if ctx.diagnostics.export_to_file(path).is_err() {
        ctx.notifications
            .push(Notification::warning("notification-diagnostics-export-error"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::store::{LoadTicket, RequestSequence};
    use crate::domain::gallery::{CategoryFilter, GalleryImage, ImageId};
    use crate::error::NetworkError;
    use crate::infrastructure::OfflineGalleryApi;
    use std::sync::Arc;

    struct Fixture {
        i18n: I18n,
        screen: Screen,
        config: Config,
        gallery: gallery::State,
        notifications: notifications::Manager,
        diagnostics: DiagnosticsCollector,
    }

    impl Fixture {
        fn new() -> Self {
            let config = Config::default();
            let api = Arc::new(OfflineGalleryApi::new(NetworkError::Timeout));
            let gallery = gallery::State::new(
                api,
                gallery::StateConfig {
                    preview_count: 2,
                    thumbnail_cache_entries: 8,
                    thumbnail_cache_bytes: 1024 * 1024,
                },
                None,
            );
            Self {
                i18n: I18n::new(Some("en-US".into()), None, &config),
                screen: Screen::Gallery,
                config,
                gallery,
                notifications: notifications::Manager::new(),
                diagnostics: DiagnosticsCollector::default(),
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &mut self.i18n,
                screen: &mut self.screen,
                config: &mut self.config,
                gallery: &mut self.gallery,
                notifications: &mut self.notifications,
                diagnostics: &mut self.diagnostics,
            }
        }

        /// Shows an "events" list with the first picture in the lightbox.
        fn open_events_lightbox(&mut self) {
            let _ = self.gallery.select_filter("events");
            // First image request of a fresh state carries the first sequence number
            let ticket = LoadTicket {
                seq: RequestSequence::new().issue(),
                filter: CategoryFilter::from_key("events"),
            };
            let images = vec![
                GalleryImage::new(1, "/img/1.jpg", "Parade", "events"),
                GalleryImage::new(2, "/img/2.jpg", "Concert", "events"),
            ];
            let _ = self.gallery.handle_message(gallery::Message::ImagesLoaded {
                ticket,
                result: Ok(images),
            });
            let _ = self
                .gallery
                .handle_message(gallery::Message::ImageClicked(ImageId(1)));
            assert!(self.gallery.is_lightbox_open());
        }
    }

    #[test]
    fn going_home_closes_the_lightbox() {
        let mut fixture = Fixture::new();
        fixture.open_events_lightbox();

        let _ = handle_screen_switch(&mut fixture.ctx(), Screen::Home);

        assert_eq!(fixture.screen, Screen::Home);
        assert!(!fixture.gallery.is_lightbox_open());
        // Home needs the unfiltered list back
        assert_eq!(fixture.gallery.session().filter(), &CategoryFilter::All);
    }

    #[test]
    fn staying_on_the_gallery_keeps_the_lightbox() {
        let mut fixture = Fixture::new();
        fixture.open_events_lightbox();

        let _ = handle_screen_switch(&mut fixture.ctx(), Screen::Gallery);

        assert!(fixture.gallery.is_lightbox_open());
        assert_eq!(
            fixture.gallery.session().filter(),
            &CategoryFilter::from_key("events")
        );
    }

    #[test]
    fn failed_gallery_load_raises_a_toast() {
        let mut fixture = Fixture::new();
        let ticket = LoadTicket {
            seq: RequestSequence::new().issue(),
            filter: CategoryFilter::All,
        };
        let _ = fixture.gallery.select_filter(CategoryKey::all());

        let _ = handle_gallery_message(
            &mut fixture.ctx(),
            gallery::Message::ImagesLoaded {
                ticket,
                result: Err(NetworkError::Status(500)),
            },
        );

        assert!(fixture.notifications.has_notifications());
    }
}
