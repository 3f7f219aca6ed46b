// SPDX-License-Identifier: MPL-2.0
//! Body measurement newtypes.
//!
//! Height and weight are always within their valid ranges. Out-of-range
//! values are clamped on construction, so the rest of the application never
//! has to re-validate them.

use std::fmt;

// =============================================================================
// Bounds
// =============================================================================

/// Height bounds in centimetres.
pub mod height_bounds {
    pub const MIN_CM: u16 = 140;
    pub const MAX_CM: u16 = 220;
    pub const DEFAULT_CM: u16 = 180;
}

/// Weight bounds in kilograms.
pub mod weight_bounds {
    pub const MIN_KG: u16 = 40;
    pub const MAX_KG: u16 = 150;
    pub const DEFAULT_KG: u16 = 80;
}

/// Why free-form measurement input was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementInputError {
    /// The input is empty after trimming.
    Empty,
    /// The input is not a number.
    NotANumber,
}

impl MeasurementInputError {
    /// Returns the i18n key of the field-level message.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            MeasurementInputError::Empty => "form-error-empty",
            MeasurementInputError::NotANumber => "form-error-not-a-number",
        }
    }
}

/// Parses user input into a whole number, accepting decimals by rounding.
fn parse_number(input: &str) -> Result<f64, MeasurementInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(MeasurementInputError::Empty);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(MeasurementInputError::NotANumber)
}

// =============================================================================
// Height
// =============================================================================

/// Body height in centimetres, guaranteed to be within 140–220.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Height(u16);

impl Height {
    /// Creates a new height, clamping the value to the valid range.
    #[must_use]
    pub fn new(cm: u16) -> Self {
        Self(cm.clamp(height_bounds::MIN_CM, height_bounds::MAX_CM))
    }

    /// Parses free-form input, clamping numeric values into range.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is empty or not a number.
    pub fn parse_input(input: &str) -> Result<Self, MeasurementInputError> {
        let value = parse_number(input)?;
        let clamped = value
            .round()
            .clamp(f64::from(height_bounds::MIN_CM), f64::from(height_bounds::MAX_CM));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // clamped into 140..=220 above
        Ok(Self(clamped as u16))
    }

    /// Returns the raw value in centimetres.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for Height {
    fn default() -> Self {
        Self(height_bounds::DEFAULT_CM)
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Weight
// =============================================================================

/// Body weight in kilograms, guaranteed to be within 40–150.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u16);

impl Weight {
    /// Creates a new weight, clamping the value to the valid range.
    #[must_use]
    pub fn new(kg: u16) -> Self {
        Self(kg.clamp(weight_bounds::MIN_KG, weight_bounds::MAX_KG))
    }

    /// Parses free-form input, clamping numeric values into range.
    ///
    /// # Errors
    ///
    /// Returns an error when the input is empty or not a number.
    pub fn parse_input(input: &str) -> Result<Self, MeasurementInputError> {
        let value = parse_number(input)?;
        let clamped = value
            .round()
            .clamp(f64::from(weight_bounds::MIN_KG), f64::from(weight_bounds::MAX_KG));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // clamped into 40..=150 above
        Ok(Self(clamped as u16))
    }

    /// Returns the raw value in kilograms.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(weight_bounds::DEFAULT_KG)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_clamps() {
        assert_eq!(Height::new(100).value(), height_bounds::MIN_CM);
        assert_eq!(Height::new(300).value(), height_bounds::MAX_CM);
        assert_eq!(Height::new(175).value(), 175);
    }

    #[test]
    fn weight_clamps() {
        assert_eq!(Weight::new(10).value(), weight_bounds::MIN_KG);
        assert_eq!(Weight::new(400).value(), weight_bounds::MAX_KG);
        assert_eq!(Weight::new(72).value(), 72);
    }

    #[test]
    fn defaults_match_form_defaults() {
        assert_eq!(Height::default().value(), 180);
        assert_eq!(Weight::default().value(), 80);
    }

    #[test]
    fn parse_input_accepts_and_clamps_numbers() {
        assert_eq!(Height::parse_input(" 190 "), Ok(Height::new(190)));
        assert_eq!(Height::parse_input("500"), Ok(Height::new(220)));
        assert_eq!(Weight::parse_input("12"), Ok(Weight::new(40)));
        assert_eq!(Weight::parse_input("80.6"), Ok(Weight::new(81)));
    }

    #[test]
    fn parse_input_rejects_garbage() {
        assert_eq!(Height::parse_input(""), Err(MeasurementInputError::Empty));
        assert_eq!(Height::parse_input("   "), Err(MeasurementInputError::Empty));
        assert_eq!(
            Weight::parse_input("heavy"),
            Err(MeasurementInputError::NotANumber)
        );
        assert_eq!(
            Weight::parse_input("NaN"),
            Err(MeasurementInputError::NotANumber)
        );
    }

    #[test]
    fn negative_input_clamps_to_minimum() {
        assert_eq!(Height::parse_input("-5"), Ok(Height::new(140)));
    }
}
