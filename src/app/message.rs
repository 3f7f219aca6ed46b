// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use super::keymap;
use crate::error::{Error, ModelError};
use crate::media::model::LoadOutcome;
use crate::media::{ImageData, PendingFile};
use crate::ui::form;
use crate::ui::notifications;
use crate::ui::preview::{scene, LoadTicket, PreviewMode};
use crate::ui::theming::ThemeStyle;
use crate::ui::uploader::{self, UploadTicket};
use iced::{window, Size};
use std::time::Instant;
use unic_langid::LanguageIdentifier;

/// Top-level messages consumed by `App::update`. Component messages are
/// forwarded; everything else is a root-level action or task completion.
#[derive(Debug, Clone)]
pub enum Message {
    Form(form::Message),
    Uploader(uploader::Message),
    Scene(scene::Message),
    Notification(notifications::NotificationMessage),
    /// An accepted upload finished decoding.
    ImageDecoded {
        ticket: UploadTicket,
        file: PendingFile,
        result: Result<ImageData, Error>,
    },
    /// The garment model finished loading.
    ModelLoaded {
        ticket: LoadTicket,
        result: Result<LoadOutcome, ModelError>,
    },
    SetPreviewMode(PreviewMode),
    ThemeSelected(ThemeStyle),
    LanguageSelected(LanguageIdentifier),
    Shortcut(keymap::Action),
    WindowResized(Size),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(window::Id),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// Redraw of the 3D preview.
    Frame(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional image path to load on startup as if it had been dropped.
    pub file_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TEE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional assets directory override.
    /// Takes precedence over `ICED_TEE_ASSETS_DIR` environment variable.
    pub assets_dir: Option<String>,
    /// Open the 3D preview first.
    pub start_in_3d: bool,
}
