// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a header, a body with the form column and the preview
//! column, and a footer listing the keymap. Toasts float above everything.

use super::{keymap, Message, TWO_COLUMN_MIN_WIDTH};
use crate::domain::Customization;
use crate::i18n::fluent::I18n;
use crate::media::{GarmentAssets, ImageData, UploadedAsset};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::form;
use crate::ui::notifications::{self, Toast};
use crate::ui::preview::{self, flat, FlatComposite, PreviewMode, Scene};
use crate::ui::styles;
use crate::ui::theming::ThemeStyle;
use crate::ui::uploader;
use iced::widget::{button, pick_list, scrollable, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length, Size};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub customization: &'a Customization,
    pub preview_mode: PreviewMode,
    pub theme_style: ThemeStyle,
    pub uploaded: Option<&'a ImageData>,
    pub upload: Option<&'a UploadedAsset>,
    pub garment_assets: &'a GarmentAssets,
    pub uploader: &'a uploader::State,
    pub form: &'a form::State,
    pub scene: Option<&'a Scene>,
    pub notifications: &'a notifications::Manager,
    pub window_size: Option<Size>,
}

/// Whether the body fits side by side. Assumed until the first resize.
fn is_wide(window_size: Option<Size>) -> bool {
    window_size.is_none_or(|size| size.width >= TWO_COLUMN_MIN_WIDTH)
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;

    let controls = Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(form::view(ctx.form, form::ViewContext { i18n }).map(Message::Form))
            .push(
                uploader::view(
                    ctx.uploader,
                    uploader::ViewContext {
                        i18n,
                        upload: ctx.upload,
                        thumbnail: ctx.uploaded,
                    },
                )
                    .map(Message::Uploader),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::panel);

    let preview_panel = Container::new(view_preview(&ctx))
        .padding(spacing::MD)
        .style(styles::container::panel);

    let body: Element<'_, Message> = if is_wide(ctx.window_size) {
        Row::new()
            .spacing(spacing::LG)
            .push(controls)
            .push(preview_panel)
            .into()
    } else {
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center)
            .push(controls)
            .push(preview_panel)
            .into()
    };

    let page = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .push(view_header(i18n, ctx.theme_style))
        .push(body);

    let content = Column::new()
        .push(scrollable(page).height(Length::Fill))
        .push(view_footer(i18n));

    Stack::new()
        .push(content)
        .push(Toast::view_overlay(ctx.notifications, i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_header(i18n: &I18n, theme_style: ThemeStyle) -> Element<'_, Message> {
    let title = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("header-title")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("header-subtitle")).size(typography::BODY));

    let themes = ThemeStyle::ALL
        .iter()
        .fold(Row::new().spacing(spacing::XXS), |row, &style| {
            row.push(
                button(Text::new(i18n.tr(style.i18n_key())).size(typography::BODY_SM))
                    .on_press(Message::ThemeSelected(style))
                    .style(if style == theme_style {
                        styles::button::selected
                    } else {
                        styles::button::unselected
                    }),
            )
        });

    let theme_setting = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("settings-theme-label")).size(typography::CAPTION))
        .push(themes);

    let language_setting = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("settings-language-label")).size(typography::CAPTION))
        .push(
            pick_list(
                i18n.available_locales().to_vec(),
                Some(i18n.current_locale().clone()),
                Message::LanguageSelected,
            )
            .text_size(typography::BODY_SM),
        );

    Row::new()
        .spacing(spacing::LG)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(theme_setting)
        .push(language_setting)
        .into()
}

fn view_preview<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let modes = [PreviewMode::Flat, PreviewMode::Model]
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, mode| {
            row.push(
                button(Text::new(i18n.tr(mode.i18n_key())).size(typography::BODY_SM))
                    .on_press(Message::SetPreviewMode(mode))
                    .style(if mode == ctx.preview_mode {
                        styles::button::selected
                    } else {
                        styles::button::unselected
                    }),
            )
        });

    let stage: Element<'a, Message> = match (ctx.preview_mode, ctx.scene) {
        (PreviewMode::Model, Some(scene)) => {
            preview::view_scene(scene, i18n).map(Message::Scene)
        }
        _ => flat::view(FlatComposite::compose(
            ctx.customization.color,
            &ctx.customization.text,
            ctx.uploaded,
            ctx.garment_assets,
        )),
    };

    Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::PREVIEW_WIDTH))
        .push(
            Row::new()
                .align_y(alignment::Vertical::Center)
                .push(Text::new(i18n.tr("preview-title")).size(typography::TITLE_SM))
                .push(Space::new().width(Length::Fill))
                .push(modes),
        )
        .push(Container::new(stage).style(styles::container::stage))
        .into()
}

fn view_footer(i18n: &I18n) -> Element<'_, Message> {
    let entries = keymap::BINDINGS
        .iter()
        .fold(Row::new().spacing(spacing::LG), |row, binding| {
            row.push(
                Text::new(format!(
                    "{}  {}",
                    binding.label(),
                    i18n.tr(binding.action.i18n_key())
                ))
                    .size(typography::CAPTION),
            )
        });

    Container::new(entries)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::LG])
        .align_x(alignment::Horizontal::Center)
        .style(styles::container::footer)
        .into()
}
