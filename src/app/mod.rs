// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the home page and the
//! gallery.
//!
//! The `App` struct wires together the gallery component, localization,
//! notifications and diagnostics, and translates messages into side effects
//! like API fetches or config persistence.

mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::GalleryApi;
use crate::config::{self, Config, THUMBNAIL_CACHE_MAX_BYTES};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::domain::gallery::CategoryKey;
use crate::i18n::I18n;
use crate::infrastructure::{HttpGalleryApi, OfflineGalleryApi};
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    theme_mode: ThemeMode,
    gallery: gallery::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
    /// Written as JSON when the window closes (`--dump-diagnostics`).
    diagnostics_dump: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .field("gallery", &self.gallery)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
///
/// Close requests are delivered to `update` so diagnostics can be written
/// before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot function; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the HTTP client, or a failing stand-in plus the error to report.
fn build_api(
    cli_base: Option<&str>,
    config: &Config,
) -> (Arc<dyn GalleryApi>, Option<crate::error::NetworkError>) {
    let base = config::resolve_api_base(cli_base, config);
    match HttpGalleryApi::new(&base, config.api_timeout()) {
        Ok(api) => (Arc::new(api), None),
        Err(error) => (Arc::new(OfflineGalleryApi::new(error.clone())), Some(error)),
    }
}

impl App {
    /// Initializes application state and kicks off the category and image
    /// loads.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let diagnostics = DiagnosticsCollector::new(BufferCapacity::default());
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.handle());

        let (api, api_error) = build_api(flags.api_base.as_deref(), &config);

        let mut gallery = gallery::State::new(
            api,
            gallery::StateConfig {
                preview_count: config.preview_count(),
                thumbnail_cache_entries: config.thumbnail_cache_entries(),
                thumbnail_cache_bytes: THUMBNAIL_CACHE_MAX_BYTES,
            },
            Some(diagnostics.handle()),
        );

        // Show warnings for config loading issues
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(key));
        }
        if let Some(error) = api_error {
            notifications.push(notifications::Notification::error(error.i18n_key()));
        }

        let initial_category = flags.category.map(CategoryKey::new);
        let screen = if initial_category.is_some() {
            Screen::Gallery
        } else {
            Screen::Home
        };
        let task = gallery.start(initial_category).map(Message::Gallery);

        let app = App {
            i18n,
            screen,
            theme_mode: config.general.theme_mode,
            config,
            gallery,
            notifications,
            diagnostics,
            diagnostics_dump: flags.dump_diagnostics.map(PathBuf::from),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Home => app_name,
            Screen::Gallery => match self.gallery.session().current_image() {
                Some(image) => format!("{} - {app_name}", image.title),
                None => format!("{} - {app_name}", self.i18n.tr("photo-gallery")),
            },
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_sub = subscription::create_window_subscription();
        let lightbox_sub = subscription::create_lightbox_subscription(
            self.screen == Screen::Gallery && self.gallery.is_lightbox_open(),
        );
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([window_sub, lightbox_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            screen: &mut self.screen,
            config: &mut self.config,
            gallery: &mut self.gallery,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::SwitchScreen(target) => update::handle_screen_switch(&mut ctx, target),
            Message::OpenCategory(key) => update::handle_open_category(&mut ctx, key),
            Message::LanguageSelected(locale) => {
                update::handle_language_selected(&mut ctx, locale);
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                self.diagnostics.process_pending();
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                if let Some(path) = self.diagnostics_dump.clone() {
                    update::dump_diagnostics(&mut ctx, &path);
                }
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }
}
