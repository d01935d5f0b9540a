//! Converting value types to and from separator-delimited text.

use crate::{
    error::{MathError, Result},
    num::Scalar,
};
use std::fmt::{self, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How components are written and read as text.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextFormat {
    /// Placed between consecutive components. Must not be empty when
    /// parsing.
    pub separator: String,
    /// Number of decimals to write for each component, if fixed.
    pub precision: Option<usize>,
    pub locale: Locale,
    pub style: NumberStyle,
}

/// Culture-specific number formatting.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    pub decimal_point: char,
}

/// Which surroundings of a number token are accepted when parsing.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NumberStyle {
    /// The token must be exactly a number.
    #[default]
    Strict,
    /// Leading and trailing whitespace around the number is ignored.
    Number,
}

impl TextFormat {
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_style(mut self, style: NumberStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for TextFormat {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            precision: None,
            locale: Locale::default(),
            style: NumberStyle::default(),
        }
    }
}

impl Locale {
    pub const INVARIANT: Self = Self::new('.');

    pub const fn new(decimal_point: char) -> Self {
        Self { decimal_point }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

/// Writes `components` separated by `", "`, honoring the precision and width
/// requested by `f` for every component.
pub(crate) fn write_components<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    components: impl IntoIterator<Item = T>,
) -> fmt::Result {
    for (idx, component) in components.into_iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(&component, f)?;
    }
    Ok(())
}

/// Formats `components` according to `format`.
pub(crate) fn format_components<T: Scalar>(
    components: impl IntoIterator<Item = T>,
    format: &TextFormat,
) -> String {
    let mut text = String::new();
    for (idx, component) in components.into_iter().enumerate() {
        if idx > 0 {
            text.push_str(&format.separator);
        }
        let start = text.len();
        // Writing to a `String` cannot fail
        let _ = match format.precision {
            Some(precision) => write!(text, "{component:.precision$}"),
            None => write!(text, "{component}"),
        };
        if format.locale.decimal_point != '.' {
            let localized = text[start..].replace('.', &format.locale.decimal_point.to_string());
            text.replace_range(start.., &localized);
        }
    }
    text
}

/// Parses exactly `N` components from `text`.
///
/// # Errors
/// Returns [`MathError::NullInput`] if `text` is `None`, and
/// [`MathError::Format`] if the number of tokens is not `N` or any token is
/// not a valid value of the domain.
pub(crate) fn parse_components<T: Scalar, const N: usize>(
    text: Option<&str>,
    format: &TextFormat,
) -> Result<[T; N]> {
    let text = text.ok_or(MathError::NullInput)?;

    if format.separator.is_empty() {
        return Err(MathError::format("the separator is empty"));
    }

    let tokens: Vec<&str> = text.split(format.separator.as_str()).collect();
    if tokens.len() != N {
        return Err(MathError::format(format!(
            "expected {N} components but found {}",
            tokens.len()
        )));
    }

    let mut components = [T::default(); N];
    for (component, token) in components.iter_mut().zip(tokens) {
        *component = parse_token(token, format)?;
    }
    Ok(components)
}

fn parse_token<T: Scalar>(token: &str, format: &TextFormat) -> Result<T> {
    let trimmed = match format.style {
        NumberStyle::Strict => token,
        NumberStyle::Number => token.trim(),
    };
    let parsed = if format.locale.decimal_point == '.' {
        trimmed.parse()
    } else {
        trimmed.replace(format.locale.decimal_point, ".").parse()
    };
    parsed.map_err(|error| MathError::format(format!("`{token}` is not a valid component: {error}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatting_with_defaults_uses_comma_space() {
        let text = format_components([1.5_f64, -2.0, 3.25], &TextFormat::default());
        assert_eq!(text, "1.5, -2, 3.25");
    }

    #[test]
    fn formatting_with_precision_pads_decimals() {
        let format = TextFormat::with_separator(";").with_precision(2);
        assert_eq!(format_components([1.0_f32, 0.126], &format), "1.00;0.13");
    }

    #[test]
    fn formatting_with_locale_replaces_decimal_point() {
        let format = TextFormat::with_separator("; ").with_locale(Locale::new(','));
        assert_eq!(format_components([1.5_f64, 2.0], &format), "1,5; 2");
    }

    #[test]
    fn parsing_requires_exact_token_count() {
        let format = TextFormat::default();
        assert!(parse_components::<f64, 3>(Some("1, 2"), &format).is_err());
        assert!(parse_components::<f64, 3>(Some("1, 2, 3, 4"), &format).is_err());
        assert_eq!(
            parse_components::<f64, 3>(Some("1, 2, 3"), &format),
            Ok([1.0, 2.0, 3.0])
        );
    }

    #[test]
    fn parsing_nothing_differs_from_parsing_empty_text() {
        let format = TextFormat::default();
        assert_eq!(
            parse_components::<i32, 2>(None, &format),
            Err(MathError::NullInput)
        );
        assert!(matches!(
            parse_components::<i32, 2>(Some(""), &format),
            Err(MathError::Format { .. })
        ));
    }

    #[test]
    fn strict_style_rejects_padding_that_number_style_accepts() {
        let strict = TextFormat::with_separator(",");
        let lenient = TextFormat::with_separator(",").with_style(NumberStyle::Number);
        assert!(parse_components::<i64, 2>(Some(" 4, 5 "), &strict).is_err());
        assert_eq!(
            parse_components::<i64, 2>(Some(" 4, 5 "), &lenient),
            Ok([4, 5])
        );
    }

    #[test]
    fn parsing_with_locale_reads_decimal_point() {
        let format = TextFormat::with_separator(";").with_locale(Locale::new(','));
        assert_eq!(
            parse_components::<f32, 2>(Some("0,5;-1,25"), &format),
            Ok([0.5, -1.25])
        );
    }
}
