// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the form, the uploader
//! and the previews.
//!
//! The `App` struct owns the customization and every component state. Child
//! components report events; only this module turns them into state changes
//! and side effects like image decoding, model loading or config persistence.

pub mod config;
pub mod keymap;
mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::domain::{Customization, GarmentColor};
use crate::i18n::fluent::I18n;
use crate::media::{AssetStore, GarmentAssets, ImageData, UploadedAsset};
use crate::ui::form;
use crate::ui::notifications::{self, Notification};
use crate::ui::preview::{LoadTicket, PreviewMode, Scene};
use crate::ui::theming::{AppTheme, ThemeStyle};
use crate::ui::uploader;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    customization: Customization,
    preview_mode: PreviewMode,
    theme: AppTheme,
    /// Live handles for decoded uploads.
    assets: AssetStore,
    upload: Option<UploadedAsset>,
    garment_assets: GarmentAssets,
    uploader: uploader::State,
    form: form::State,
    /// Present only while the 3D preview is shown.
    scene: Option<Scene>,
    last_load: LoadTicket,
    notifications: notifications::Manager,
    /// Last known window size, used to pick the layout.
    window_size: Option<Size>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("customization", &self.customization)
            .field("preview_mode", &self.preview_mode)
            .field("theme", &self.theme.style)
            .field("live_assets", &self.assets.live_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 520.0;
pub const MIN_WINDOW_HEIGHT: f32 = 600.0;

/// Below this width the form and the preview are stacked.
pub const TWO_COLUMN_MIN_WIDTH: f32 = 900.0;

/// Builds the window settings.
///
/// Close requests are intercepted so uploads and the 3D scene are released
/// before the window goes away.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
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

impl App {
    /// Initializes application state from the config file and CLI flags.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, config, config_warning)
    }

    /// Initializes application state from an already loaded config.
    pub fn with_config(
        flags: Flags,
        config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let assets_dir = paths::resolve_assets_dir(config.assets.dir.as_deref());
        let garment_assets = GarmentAssets::scan(&assets_dir);
        let customization = config.initial_customization();
        let preview_mode = PreviewMode::from_start_in_3d(flags.start_in_3d || config.start_in_3d());
        log::info!(
            "Starting with assets from {} in {:?} preview",
            garment_assets.root().display(),
            preview_mode
        );

        let mut app = App {
            i18n,
            form: form::State::new(&customization),
            theme: AppTheme::new(config.general.theme),
            customization,
            preview_mode: PreviewMode::Flat,
            assets: AssetStore::new(),
            upload: None,
            garment_assets,
            uploader: uploader::State::new(),
            scene: None,
            last_load: LoadTicket::default(),
            notifications: notifications::Manager::new(),
            window_size: None,
            config,
        };

        if let Some(key) = config_warning {
            app.notifications.push(Notification::warning(key));
        }

        let mut tasks = Vec::new();
        if preview_mode == PreviewMode::Model {
            tasks.push(app.update(Message::SetPreviewMode(PreviewMode::Model)));
        }
        if let Some(path) = flags.file_path {
            tasks.push(app.update(Message::Uploader(uploader::Message::Dropped(
                PathBuf::from(path),
            ))));
        }

        (app, Task::batch(tasks))
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme.to_iced_theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
            subscription::create_frame_subscription(self.scene.is_some()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            customization: &mut self.customization,
            preview_mode: &mut self.preview_mode,
            theme: &mut self.theme,
            assets: &mut self.assets,
            upload: &mut self.upload,
            garment_assets: &self.garment_assets,
            uploader: &mut self.uploader,
            form: &mut self.form,
            scene: &mut self.scene,
            last_load: &mut self.last_load,
            notifications: &mut self.notifications,
            window_size: &mut self.window_size,
        };

        match message {
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::Uploader(uploader_message) => {
                update::handle_uploader_message(&mut ctx, uploader_message)
            }
            Message::Scene(scene_message) => {
                if let Some(scene) = ctx.scene.as_mut() {
                    scene.handle_message(scene_message);
                }
                Task::none()
            }
            Message::Notification(notification_message) => {
                ctx.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::ImageDecoded {
                ticket,
                file,
                result,
            } => update::handle_image_decoded(&mut ctx, ticket, file, result),
            Message::ModelLoaded { ticket, result } => {
                update::handle_model_loaded(&mut ctx, ticket, result)
            }
            Message::SetPreviewMode(mode) => update::handle_preview_mode(&mut ctx, mode),
            Message::ThemeSelected(style) => update::handle_theme_selected(&mut ctx, style),
            Message::LanguageSelected(locale) => update::handle_language_selected(&mut ctx, locale),
            Message::Shortcut(action) => update::handle_shortcut(&mut ctx, action),
            Message::WindowResized(size) => {
                *ctx.window_size = Some(size);
                Task::none()
            }
            Message::WindowCloseRequested(id) => update::handle_close_requested(&mut ctx, id),
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
            Message::Frame(now) => {
                if let Some(scene) = ctx.scene.as_mut() {
                    scene.tick(now);
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            customization: &self.customization,
            preview_mode: self.preview_mode,
            theme_style: self.theme.style,
            uploaded: self.uploaded_image(),
            upload: self.upload.as_ref(),
            garment_assets: &self.garment_assets,
            uploader: &self.uploader,
            form: &self.form,
            scene: self.scene.as_ref(),
            notifications: &self.notifications,
            window_size: self.window_size,
        })
    }

    #[must_use]
    pub fn customization(&self) -> &Customization {
        &self.customization
    }

    #[must_use]
    pub fn preview_mode(&self) -> PreviewMode {
        self.preview_mode
    }

    #[must_use]
    pub fn theme_style(&self) -> ThemeStyle {
        self.theme.style
    }

    #[must_use]
    pub fn color(&self) -> GarmentColor {
        self.customization.color
    }

    #[must_use]
    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    /// The decoded upload currently shown, with the file it came from.
    #[must_use]
    pub fn upload(&self) -> Option<&UploadedAsset> {
        self.upload.as_ref()
    }

    #[must_use]
    pub fn uploader(&self) -> &uploader::State {
        &self.uploader
    }

    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    /// Decoded pixels of the current upload, if its handle is still live.
    #[must_use]
    pub fn uploaded_image(&self) -> Option<&ImageData> {
        self.customization
            .image
            .as_ref()
            .and_then(|url| self.assets.get(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Build, CustomizationPatch, Height, PrintText, Weight};
    use crate::error::{Error, ModelError};
    use crate::media::model::{obj, LoadOutcome, MaterialLibrary};
    use crate::media::PendingFile;
    use crate::ui::notifications::Severity;
    use crate::ui::preview::LoadState;

    fn app() -> App {
        let flags = Flags {
            lang: Some("en-US".into()),
            ..Flags::default()
        };
        App::with_config(flags, Config::default(), None).0
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255; 4])
    }

    fn drop_file(app: &mut App, path: &str) -> uploader::UploadTicket {
        let _ = app.update(Message::Uploader(uploader::Message::Dropped(PathBuf::from(
            path,
        ))));
        app.uploader().latest_ticket().expect("upload accepted")
    }

    fn decoded(ticket: uploader::UploadTicket, path: &str) -> Message {
        Message::ImageDecoded {
            ticket,
            file: PendingFile::from_path(PathBuf::from(path)),
            result: Ok(pixel()),
        }
    }

    #[test]
    fn boots_with_defaults() {
        let app = app();
        assert_eq!(app.customization(), &Customization::default());
        assert_eq!(app.preview_mode(), PreviewMode::Flat);
        assert!(app.scene().is_none());
        assert_eq!(app.theme_style(), ThemeStyle::Minimal);
    }

    #[test]
    fn config_warning_becomes_a_toast() {
        let (app, _) = App::with_config(
            Flags::default(),
            Config::default(),
            Some("notification-config-load-error".into()),
        );
        let toast = app.notifications().visible().next().expect("toast");
        assert_eq!(toast.severity(), Severity::Warning);
    }

    #[test]
    fn start_in_3d_flag_opens_the_scene() {
        let flags = Flags {
            start_in_3d: true,
            ..Flags::default()
        };
        let (app, _) = App::with_config(flags, Config::default(), None);
        assert_eq!(app.preview_mode(), PreviewMode::Model);
        assert_eq!(app.scene().map(Scene::state), Some(&LoadState::Loading));
    }

    #[test]
    fn form_patch_updates_customization() {
        let mut app = app();
        let _ = app.update(Message::Form(form::Message::BuildSelected(Build::Lean)));
        let _ = app.update(Message::Form(form::Message::HeightChanged("170".into())));

        let expected = CustomizationPatch {
            height: Height::new(170),
            weight: Weight::default(),
            build: Build::Lean,
            color: GarmentColor::Navy,
            text: PrintText::default(),
        };
        assert_eq!(app.customization().to_patch(), expected);
    }

    #[test]
    fn color_cycle_wraps_after_six_presses() {
        let mut app = app();
        for _ in 0..6 {
            let _ = app.update(Message::Shortcut(keymap::Action::CycleColor));
        }
        assert_eq!(app.color(), GarmentColor::Navy);
        let _ = app.update(Message::Shortcut(keymap::Action::CycleColor));
        assert_eq!(app.color(), GarmentColor::White);
    }

    #[test]
    fn color_cycle_recolors_the_scene() {
        let mut app = app();
        let _ = app.update(Message::SetPreviewMode(PreviewMode::Model));
        let _ = app.update(Message::Shortcut(keymap::Action::CycleColor));
        assert_eq!(app.scene().map(Scene::color), Some(GarmentColor::White));
    }

    #[test]
    fn toggle_twice_restores_mode_and_drops_scene() {
        let mut app = app();
        let before = app.customization().clone();

        let _ = app.update(Message::Shortcut(keymap::Action::TogglePreview));
        assert!(app.scene().is_some());
        let _ = app.update(Message::Shortcut(keymap::Action::TogglePreview));

        assert_eq!(app.preview_mode(), PreviewMode::Flat);
        assert!(app.scene().is_none());
        assert_eq!(app.customization(), &before);
    }

    #[test]
    fn theme_cycle_is_recorded_in_config() {
        let mut app = app();
        let _ = app.update(Message::Shortcut(keymap::Action::CycleTheme));
        assert_eq!(app.theme_style(), ThemeStyle::Modern);
        assert_eq!(app.config.general.theme, ThemeStyle::Modern);
    }

    #[test]
    fn non_image_drop_changes_nothing() {
        let mut app = app();
        let _ = app.update(Message::Uploader(uploader::Message::Dropped(PathBuf::from(
            "/tmp/notes.txt",
        ))));
        assert!(app.uploader().latest_ticket().is_none());
        assert!(app.customization().image.is_none());
    }

    #[test]
    fn decoded_upload_becomes_a_live_handle() {
        let mut app = app();
        let ticket = drop_file(&mut app, "/tmp/a.png");
        let _ = app.update(decoded(ticket, "/tmp/a.png"));

        let url = app.customization().image.clone().expect("image set");
        assert!(!url.as_str().is_empty());
        assert!(app.assets().is_live(&url));
        assert!(app.uploaded_image().is_some());
    }

    #[test]
    fn later_upload_wins_over_slow_decode() {
        let mut app = app();
        let first = drop_file(&mut app, "/tmp/a.png");
        let second = drop_file(&mut app, "/tmp/b.png");

        let _ = app.update(decoded(second, "/tmp/b.png"));
        let b_url = app.customization().image.clone().expect("b set");
        let _ = app.update(decoded(first, "/tmp/a.png"));

        assert_eq!(app.customization().image.as_ref(), Some(&b_url));
        assert_eq!(app.assets().live_count(), 1);
    }

    #[test]
    fn replacing_an_upload_revokes_the_old_handle() {
        let mut app = app();
        let first = drop_file(&mut app, "/tmp/a.png");
        let _ = app.update(decoded(first, "/tmp/a.png"));
        let a_url = app.customization().image.clone().expect("a set");

        let second = drop_file(&mut app, "/tmp/b.png");
        let _ = app.update(decoded(second, "/tmp/b.png"));

        assert!(!app.assets().is_live(&a_url));
        assert_eq!(app.assets().live_count(), 1);
        let upload = app.upload().expect("b uploaded");
        assert_eq!(upload.file.path, PathBuf::from("/tmp/b.png"));
        assert_eq!(Some(&upload.url), app.customization().image.as_ref());
    }

    #[test]
    fn undecodable_upload_shows_a_warning() {
        let mut app = app();
        let ticket = drop_file(&mut app, "/tmp/broken.png");
        let _ = app.update(Message::ImageDecoded {
            ticket,
            file: PendingFile::from_path(PathBuf::from("/tmp/broken.png")),
            result: Err(Error::Image("truncated".into())),
        });

        assert!(app.customization().image.is_none());
        assert!(app.uploader().pending().is_none());
        let toast = app.notifications().visible().next().expect("toast");
        assert_eq!(toast.message_key(), "notification-upload-decode-error");
    }

    #[test]
    fn model_result_reaches_the_scene() {
        let mut app = app();
        let _ = app.update(Message::SetPreviewMode(PreviewMode::Model));
        let ticket = app.scene().map(Scene::ticket).expect("scene");
        let model = obj::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n", MaterialLibrary::default())
            .expect("valid obj");

        let _ = app.update(Message::ModelLoaded {
            ticket,
            result: Ok(LoadOutcome::Full(model)),
        });

        assert_eq!(app.scene().map(Scene::state), Some(&LoadState::Loaded));
    }

    #[test]
    fn model_result_after_leaving_3d_is_dropped() {
        let mut app = app();
        let _ = app.update(Message::SetPreviewMode(PreviewMode::Model));
        let ticket = app.scene().map(Scene::ticket).expect("scene");
        let _ = app.update(Message::SetPreviewMode(PreviewMode::Flat));

        let _ = app.update(Message::ModelLoaded {
            ticket,
            result: Err(ModelError::Empty),
        });

        assert!(app.scene().is_none());
    }

    #[test]
    fn load_from_an_earlier_3d_visit_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::SetPreviewMode(PreviewMode::Model));
        let first_visit = app.scene().map(Scene::ticket).expect("scene");
        let _ = app.update(Message::SetPreviewMode(PreviewMode::Flat));
        let _ = app.update(Message::SetPreviewMode(PreviewMode::Model));

        let _ = app.update(Message::ModelLoaded {
            ticket: first_visit,
            result: Err(ModelError::Empty),
        });

        assert_eq!(app.scene().map(Scene::state), Some(&LoadState::Loading));
        assert_ne!(app.scene().map(Scene::ticket), Some(first_visit));
    }

    #[test]
    fn close_request_releases_everything() {
        let mut app = app();
        let ticket = drop_file(&mut app, "/tmp/a.png");
        let _ = app.update(decoded(ticket, "/tmp/a.png"));
        let _ = app.update(Message::SetPreviewMode(PreviewMode::Model));

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));

        assert_eq!(app.assets().live_count(), 0);
        assert!(app.upload().is_none());
        assert!(app.scene().is_none());
    }

    #[test]
    fn resize_is_cached() {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(640.0, 480.0)));
        assert_eq!(app.window_size, Some(Size::new(640.0, 480.0)));
    }
}
