// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application root.
//!
//! Each handler receives an [`UpdateContext`] with mutable access to the
//! root state and returns the follow-up task, if any.

use super::config::Config;
use super::{keymap, persistence, Message};
use crate::domain::Customization;
use crate::error::{Error, ModelError};
use crate::i18n::fluent::I18n;
use crate::media::model::{loader, LoadOutcome};
use crate::media::{self, AssetStore, GarmentAssets, ImageData, PendingFile, UploadedAsset};
use crate::ui::form;
use crate::ui::notifications::{self, Notification};
use crate::ui::preview::{LoadTicket, PreviewMode, Scene};
use crate::ui::theming::{AppTheme, ThemeStyle};
use crate::ui::uploader::{self, UploadTicket};
use iced::{window, Size, Task};
use unic_langid::LanguageIdentifier;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub customization: &'a mut Customization,
    pub preview_mode: &'a mut PreviewMode,
    pub theme: &'a mut AppTheme,
    pub assets: &'a mut AssetStore,
    /// The upload currently shown, if any.
    pub upload: &'a mut Option<UploadedAsset>,
    pub garment_assets: &'a GarmentAssets,
    pub uploader: &'a mut uploader::State,
    pub form: &'a mut form::State,
    pub scene: &'a mut Option<Scene>,
    /// Last model load ticket handed out, across scenes.
    pub last_load: &'a mut LoadTicket,
    pub notifications: &'a mut notifications::Manager,
    pub window_size: &'a mut Option<Size>,
}

impl UpdateContext<'_> {
    /// Pushes the current garment color into the 3D material.
    fn recolor_scene(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.recolor(self.customization.color);
        }
    }
}

pub fn handle_form_message(ctx: &mut UpdateContext<'_>, message: form::Message) -> Task<Message> {
    if let form::Event::Changed(patch) = ctx.form.update(message) {
        let recolor = patch.color != ctx.customization.color;
        ctx.customization.apply_patch(patch);
        if recolor {
            ctx.recolor_scene();
        }
    }
    Task::none()
}

pub fn handle_uploader_message(
    ctx: &mut UpdateContext<'_>,
    message: uploader::Message,
) -> Task<Message> {
    let (event, task) = ctx.uploader.handle_message(message, ctx.i18n);
    let task = task.map(Message::Uploader);

    match event {
        uploader::Event::None => task,
        uploader::Event::FileAccepted { file, ticket } => {
            Task::batch([task, decode_upload(file, ticket)])
        }
    }
}

/// Decodes an accepted upload on the blocking pool.
fn decode_upload(file: PendingFile, ticket: UploadTicket) -> Task<Message> {
    let path = file.path.clone();
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || media::load_image(&path))
                .await
                .map_err(|e| Error::Io(e.to_string()))?
        },
        move |result| Message::ImageDecoded {
            ticket,
            file,
            result,
        },
    )
}

/// Registers a decoded upload and points the customization at it.
///
/// Results for superseded uploads are discarded before they ever get a
/// handle, and the handle being replaced is revoked.
pub fn handle_image_decoded(
    ctx: &mut UpdateContext<'_>,
    ticket: UploadTicket,
    file: PendingFile,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    if !ctx.uploader.is_current(ticket) {
        log::debug!("Dropping superseded upload {}", file.path.display());
        return Task::none();
    }

    match result {
        Ok(image) => {
            let url = ctx.assets.create(image);
            log::info!("Upload {} available as {url}", file.display_name());
            ctx.customization.replace_image(url.clone());
            if let Some(previous) = ctx.upload.replace(UploadedAsset { file, url }) {
                ctx.assets.revoke(&previous.url);
            }
        }
        Err(err) => {
            log::warn!("Cannot decode upload {}: {err}", file.path.display());
            ctx.uploader.clear_pending();
            ctx.notifications.push(
                Notification::warning("notification-upload-decode-error")
                    .with_arg("file", file.display_name()),
            );
        }
    }
    Task::none()
}

pub fn handle_model_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: LoadTicket,
    result: Result<LoadOutcome, ModelError>,
) -> Task<Message> {
    match ctx.scene.as_mut() {
        Some(scene) => {
            let triangles = result
                .as_ref()
                .ok()
                .map(|outcome| outcome.model().triangle_count());
            if scene.finish_load(ticket, result) {
                if let Some(count) = triangles {
                    log::info!("Garment model ready with {count} triangles");
                }
            }
        }
        None => log::debug!("Dropping model load that finished after the 3D preview closed"),
    }
    Task::none()
}

/// Switches previews. Entering 3D creates the scene and starts the model
/// load; leaving it drops the scene.
pub fn handle_preview_mode(ctx: &mut UpdateContext<'_>, mode: PreviewMode) -> Task<Message> {
    if *ctx.preview_mode == mode {
        return Task::none();
    }
    *ctx.preview_mode = mode;

    match mode {
        PreviewMode::Flat => {
            *ctx.scene = None;
            Task::none()
        }
        PreviewMode::Model => {
            let mut scene = Scene::continuing(ctx.customization.color, *ctx.last_load);
            let ticket = scene.begin_load();
            *ctx.last_load = ticket;
            *ctx.scene = Some(scene);

            let paths = ctx.garment_assets.model_paths();
            let obj = paths.obj.clone();
            log::debug!("Loading garment model from {}", obj.display());
            Task::perform(
                async move {
                    tokio::task::spawn_blocking(move || loader::load_garment(&paths))
                        .await
                        .unwrap_or_else(|e| {
                            Err(ModelError::Missing {
                                path: obj,
                                reason: e.to_string(),
                            })
                        })
                },
                move |result| Message::ModelLoaded { ticket, result },
            )
        }
    }
}

pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, action: keymap::Action) -> Task<Message> {
    match action {
        keymap::Action::TogglePreview => {
            let mode = ctx.preview_mode.toggled();
            handle_preview_mode(ctx, mode)
        }
        keymap::Action::CycleColor => {
            let color = ctx.customization.cycle_color();
            log::debug!("Garment color is now {}", color.name());
            ctx.form.sync(ctx.customization);
            ctx.recolor_scene();
            Task::none()
        }
        keymap::Action::CycleTheme => {
            let style = ctx.theme.style.next();
            handle_theme_selected(ctx, style)
        }
    }
}

pub fn handle_theme_selected(ctx: &mut UpdateContext<'_>, style: ThemeStyle) -> Task<Message> {
    *ctx.theme = AppTheme::new(style);
    if let Err(err) = persistence::persist_theme(ctx.config, style) {
        report_save_error(ctx.notifications, &err);
    }
    Task::none()
}

pub fn handle_language_selected(
    ctx: &mut UpdateContext<'_>,
    locale: LanguageIdentifier,
) -> Task<Message> {
    if let Err(err) = persistence::apply_language_change(ctx.i18n, ctx.config, locale) {
        report_save_error(ctx.notifications, &err);
    }
    Task::none()
}

fn report_save_error(notifications: &mut notifications::Manager, err: &Error) {
    log::error!("Failed to save config: {err}");
    notifications.push(Notification::error("notification-config-save-error"));
}

/// Revokes every upload handle and drops the scene, then closes the window.
pub fn handle_close_requested(ctx: &mut UpdateContext<'_>, id: window::Id) -> Task<Message> {
    let revoked = ctx.assets.revoke_all();
    *ctx.upload = None;
    *ctx.scene = None;
    log::info!("Closing: released {revoked} upload handle(s)");
    window::close(id)
}
