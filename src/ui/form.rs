// SPDX-License-Identifier: MPL-2.0
//! Customization form: measurements, build, color and print text.
//!
//! Every accepted edit emits the full form snapshot as a
//! [`CustomizationPatch`]. Unparsable measurements show a field error and
//! emit nothing. Text beyond three lines or 180 characters is cut off and a
//! hint stays visible until the next edit that fits.

use crate::domain::measurements::{height_bounds, weight_bounds};
use crate::domain::{
    Build, Customization, CustomizationPatch, GarmentColor, Height, MeasurementInputError,
    PrintText, Weight,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::text_editor::{self, Action, Content, Motion};
use iced::widget::{pick_list, text_input, Column, Text};
use iced::{Element, Length};
use std::fmt;

#[derive(Debug, Clone)]
pub enum Message {
    HeightChanged(String),
    WeightChanged(String),
    BuildSelected(Build),
    ColorSelected(GarmentColor),
    TextEdited(Action),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    Changed(CustomizationPatch),
}

/// A measurement field: the raw text plus the last accepted value.
#[derive(Debug, Clone)]
struct MeasurementField<T> {
    input: String,
    value: T,
    error: Option<MeasurementInputError>,
}

impl<T: Copy + PartialEq + fmt::Display> MeasurementField<T> {
    fn new(value: T) -> Self {
        Self {
            input: value.to_string(),
            value,
            error: None,
        }
    }

    /// Stores `raw` and returns whether it produced a new accepted value.
    fn edit(&mut self, raw: String, parse: fn(&str) -> Result<T, MeasurementInputError>) -> bool {
        self.input = raw;
        match parse(&self.input) {
            Ok(value) => {
                self.value = value;
                self.error = None;
                true
            }
            Err(error) => {
                self.error = Some(error);
                false
            }
        }
    }

    fn sync(&mut self, value: T) {
        if self.value != value {
            *self = Self::new(value);
        }
    }
}

pub struct State {
    height: MeasurementField<Height>,
    weight: MeasurementField<Weight>,
    build: Build,
    color: GarmentColor,
    text: PrintText,
    editor: Content,
    text_truncated: bool,
}

impl State {
    #[must_use]
    pub fn new(customization: &Customization) -> Self {
        Self {
            height: MeasurementField::new(customization.height),
            weight: MeasurementField::new(customization.weight),
            build: customization.build,
            color: customization.color,
            text: customization.text.clone(),
            editor: Content::with_text(customization.text.as_str()),
            text_truncated: false,
        }
    }

    /// Re-reads a snapshot changed outside the form, such as a color cycled
    /// by shortcut. Fields the user is mid-way through editing are kept.
    pub fn sync(&mut self, customization: &Customization) {
        self.height.sync(customization.height);
        self.weight.sync(customization.weight);
        self.build = customization.build;
        self.color = customization.color;
        if self.text != customization.text {
            self.text = customization.text.clone();
            self.editor = Content::with_text(self.text.as_str());
            self.text_truncated = false;
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> CustomizationPatch {
        CustomizationPatch {
            height: self.height.value,
            weight: self.weight.value,
            build: self.build,
            color: self.color,
            text: self.text.clone(),
        }
    }

    #[must_use]
    pub fn text_truncated(&self) -> bool {
        self.text_truncated
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::HeightChanged(raw) => {
                if !self.height.edit(raw, Height::parse_input) {
                    return Event::None;
                }
            }
            Message::WeightChanged(raw) => {
                if !self.weight.edit(raw, Weight::parse_input) {
                    return Event::None;
                }
            }
            Message::BuildSelected(build) => self.build = build,
            Message::ColorSelected(color) => self.color = color,
            Message::TextEdited(action) => {
                let is_edit = action.is_edit();
                self.editor.perform(action);
                if !is_edit {
                    return Event::None;
                }
                self.apply_editor_text();
            }
        }
        Event::Changed(self.snapshot())
    }

    fn apply_editor_text(&mut self) {
        let text = PrintText::new(&self.editor.text());
        self.text_truncated = text.was_truncated();
        if self.text_truncated {
            log::debug!("Print text truncated to {} lines", text.line_count());
            self.editor = Content::with_text(text.as_str());
            self.editor.perform(Action::Move(Motion::DocumentEnd));
        }
        self.text = text;
    }
}

/// Pick-list entry showing a translated label for a value.
#[derive(Debug, Clone)]
struct Labeled<T> {
    value: T,
    label: String,
}

impl<T: PartialEq> PartialEq for Labeled<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> fmt::Display for Labeled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn labeled<T: Copy>(values: &[T], i18n: &I18n, key: fn(T) -> &'static str) -> Vec<Labeled<T>> {
    values
        .iter()
        .map(|&value| Labeled {
            value,
            label: i18n.tr(key(value)),
        })
        .collect()
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

pub fn view<'a>(state: &'a State, ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let height = measurement_view(
        i18n.tr("form-height-label"),
        range_hint(i18n, height_bounds::MIN_CM, height_bounds::MAX_CM),
        &state.height,
        Message::HeightChanged,
        i18n,
    );
    let weight = measurement_view(
        i18n.tr("form-weight-label"),
        range_hint(i18n, weight_bounds::MIN_KG, weight_bounds::MAX_KG),
        &state.weight,
        Message::WeightChanged,
        i18n,
    );

    let builds = labeled(&Build::ALL, i18n, Build::i18n_key);
    let selected_build = builds.iter().find(|b| b.value == state.build).cloned();
    let build = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("form-build-label")).size(typography::BODY_SM))
        .push(
            pick_list(builds, selected_build, |choice: Labeled<Build>| {
                Message::BuildSelected(choice.value)
            })
            .width(Length::Fill),
        );

    let colors = labeled(&GarmentColor::ALL, i18n, GarmentColor::i18n_key);
    let selected_color = colors.iter().find(|c| c.value == state.color).cloned();
    let color = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("form-color-label")).size(typography::BODY_SM))
        .push(
            pick_list(colors, selected_color, |choice: Labeled<GarmentColor>| {
                Message::ColorSelected(choice.value)
            })
            .width(Length::Fill),
        );

    let mut text = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(i18n.tr("form-text-label")).size(typography::BODY_SM))
        .push(
            iced::widget::text_editor(&state.editor)
                .placeholder(i18n.tr("form-text-placeholder"))
                .on_action(Message::TextEdited)
                .height(Length::Fixed(sizing::TEXT_EDITOR_HEIGHT)),
        );
    if state.text_truncated {
        text = text.push(
            Text::new(i18n.tr("form-text-truncated"))
                .size(typography::CAPTION)
                .color(palette::WARNING_500),
        );
    }

    Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("form-title")).size(typography::TITLE_SM))
        .push(height)
        .push(weight)
        .push(build)
        .push(color)
        .push(text)
        .into()
}

fn range_hint(i18n: &I18n, min: u16, max: u16) -> String {
    i18n.tr_with_args(
        "form-range-hint",
        &[("min", &min.to_string()), ("max", &max.to_string())],
    )
}

fn measurement_view<'a, T>(
    label: String,
    hint: String,
    field: &'a MeasurementField<T>,
    on_input: fn(String) -> Message,
    i18n: &I18n,
) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::BODY_SM))
        .push(text_input(&hint, &field.input).on_input(on_input));

    if let Some(error) = field.error {
        column = column.push(
            Text::new(i18n.tr(error.i18n_key()))
                .size(typography::CAPTION)
                .color(palette::ERROR_500),
        );
    }

    column.into()
}
