// SPDX-License-Identifier: MPL-2.0
//! Image uploader: drop zone plus "Select file" button.
//!
//! The uploader only validates and records the chosen file. Decoding and
//! registration in the asset store happen in the application root, which
//! matches completions against the [`UploadTicket`] issued here so that
//! only the latest selection is applied.

use crate::i18n::fluent::I18n;
use crate::media::{mime, ImageData, PendingFile, UploadedAsset};
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, image, Column, Container, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Task, Theme};
use std::path::PathBuf;

/// Generation number of an accepted upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UploadTicket(u64);

#[derive(Debug, Clone)]
pub enum Message {
    /// A file is hovering over the window.
    DragEntered,
    /// The hovered files left the window.
    DragLeft,
    Dropped(PathBuf),
    SelectFile,
    FilePicked(Option<PathBuf>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// An image file passed validation and should be decoded.
    FileAccepted {
        file: PendingFile,
        ticket: UploadTicket,
    },
}

/// Result of handing a file to the uploader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(UploadTicket),
    Rejected,
}

#[derive(Debug, Default)]
pub struct State {
    is_dragging: bool,
    generation: u64,
    /// Most recently accepted file, shown under the drop zone.
    pending: Option<PendingFile>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    #[must_use]
    pub fn pending(&self) -> Option<&PendingFile> {
        self.pending.as_ref()
    }

    /// Whether `ticket` belongs to the latest accepted upload.
    #[must_use]
    pub fn is_current(&self, ticket: UploadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Ticket of the latest accepted upload, if any.
    #[must_use]
    pub fn latest_ticket(&self) -> Option<UploadTicket> {
        (self.generation > 0).then_some(UploadTicket(self.generation))
    }

    /// Validates `file` and, for images, records it as the pending upload.
    ///
    /// Non-image files leave the state untouched.
    pub fn submit_file(&mut self, file: PendingFile) -> SubmitOutcome {
        if !mime::is_image(&file.mime) {
            log::debug!(
                "Ignoring non-image upload {} ({})",
                file.path.display(),
                file.mime
            );
            return SubmitOutcome::Rejected;
        }

        self.generation += 1;
        log::debug!(
            "Accepted upload {} as ticket {}",
            file.path.display(),
            self.generation
        );
        self.pending = Some(file);
        SubmitOutcome::Accepted(UploadTicket(self.generation))
    }

    /// Forgets the pending file after its decode failed.
    pub fn clear_pending(&mut self) {
        self.pending = None;
    }

    pub fn handle_message(&mut self, message: Message, i18n: &I18n) -> (Event, Task<Message>) {
        match message {
            Message::DragEntered => {
                self.is_dragging = true;
                (Event::None, Task::none())
            }
            Message::DragLeft => {
                self.is_dragging = false;
                (Event::None, Task::none())
            }
            Message::Dropped(path) => {
                self.is_dragging = false;
                (self.accept_path(path), Task::none())
            }
            Message::SelectFile => (Event::None, open_dialog(i18n.tr("uploader-dialog-filter"))),
            Message::FilePicked(Some(path)) => (self.accept_path(path), Task::none()),
            Message::FilePicked(None) => (Event::None, Task::none()),
        }
    }

    fn accept_path(&mut self, path: PathBuf) -> Event {
        let file = PendingFile::from_path(path);
        match self.submit_file(file.clone()) {
            SubmitOutcome::Accepted(ticket) => Event::FileAccepted { file, ticket },
            SubmitOutcome::Rejected => Event::None,
        }
    }
}

fn open_dialog(filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, mime::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FilePicked,
    )
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// The upload currently shown in the preview.
    pub upload: Option<&'a UploadedAsset>,
    /// Decoded pixels behind `upload`, while its handle is live.
    pub thumbnail: Option<&'a ImageData>,
}

/// Caption under the drop zone: the file still decoding, else the file on
/// display.
fn file_caption<'a>(
    pending: Option<&'a PendingFile>,
    upload: Option<&'a UploadedAsset>,
) -> Option<(&'static str, &'a PendingFile)> {
    match (pending, upload) {
        (Some(pending), Some(upload)) if *pending == upload.file => {
            Some(("uploader-current-file", &upload.file))
        }
        (Some(pending), _) => Some(("uploader-decoding", pending)),
        (None, Some(upload)) => Some(("uploader-current-file", &upload.file)),
        (None, None) => None,
    }
}

/// Thumbnail box for an image of `aspect_ratio`, fitted into the drop zone.
fn thumbnail_size(aspect_ratio: f32) -> (f32, f32) {
    let height = sizing::THUMBNAIL_HEIGHT;
    let width = (height * aspect_ratio).min(sizing::THUMBNAIL_MAX_WIDTH);
    (width, width / aspect_ratio.max(f32::EPSILON))
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let hint_key = if state.is_dragging {
        "uploader-dragging"
    } else {
        "uploader-drop-hint"
    };
    let is_dragging = state.is_dragging;

    let mut zone_content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center);
    if let Some(thumbnail) = ctx.thumbnail.filter(|_| !is_dragging) {
        let (width, height) = thumbnail_size(thumbnail.aspect_ratio());
        zone_content = zone_content.push(
            image(thumbnail.handle.clone())
                .width(Length::Fixed(width))
                .height(Length::Fixed(height)),
        );
    }
    zone_content = zone_content.push(Text::new(ctx.i18n.tr(hint_key)).size(typography::BODY_SM));

    let drop_zone = Container::new(zone_content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DROP_ZONE_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |theme: &Theme| drop_zone_style(theme, is_dragging));

    let select = button(Text::new(ctx.i18n.tr("uploader-select-button")))
        .on_press(Message::SelectFile)
        .style(styles::button::primary);

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(ctx.i18n.tr("uploader-title")).size(typography::TITLE_SM))
        .push(drop_zone)
        .push(select);

    if let Some((key, file)) = file_caption(state.pending.as_ref(), ctx.upload) {
        column = column.push(
            Text::new(ctx.i18n.tr_with_args(key, &[("file", &file.display_name())]))
                .size(typography::CAPTION),
        );
    }

    column.into()
}

fn drop_zone_style(theme: &Theme, is_dragging: bool) -> container::Style {
    let palette = theme.extended_palette();
    let accent = palette.primary.base.color;
    let background = if is_dragging {
        Color { a: 0.15, ..accent }
    } else {
        palette.background.weak.color
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: if is_dragging {
                accent
            } else {
                palette.background.strong.color
            },
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}
