//! CSS-style color grammars: hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

static RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(rgba?)\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .unwrap()
});

static HSL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(hsla?)\(\s*(\d{1,3}(?:\.\d+)?)\s*,\s*(\d{1,3}(?:\.\d+)?)%\s*,\s*(\d{1,3}(?:\.\d+)?)%\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .unwrap()
});

/// A color notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
    Any,
}

/// A syntactically valid color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedColor {
    pub format: ColorFormat,
    pub has_alpha: bool,
}

fn alpha_ok(alpha: Option<regex::Match<'_>>) -> bool {
    alpha
        .and_then(|a| a.as_str().parse::<f64>().ok())
        .is_none_or(|a| (0.0..=1.0).contains(&a))
}

fn parse_hex(input: &str) -> Option<ParsedColor> {
    HEX.is_match(input).then(|| ParsedColor {
        format: ColorFormat::Hex,
        has_alpha: matches!(input.len(), 5 | 9),
    })
}

/// `rgb()` takes exactly three channels and `rgba()` exactly four.
fn parse_functional(
    pattern: &Regex,
    format: ColorFormat,
    input: &str,
    channel_max: [f64; 3],
) -> Option<ParsedColor> {
    let caps = pattern.captures(input)?;
    let wants_alpha = caps[1].len() == 4;
    let alpha = caps.get(5);
    if wants_alpha != alpha.is_some() || !alpha_ok(alpha) {
        return None;
    }
    for (i, max) in channel_max.iter().enumerate() {
        let value: f64 = caps[i + 2].parse().ok()?;
        if value > *max {
            return None;
        }
    }
    Some(ParsedColor {
        format,
        has_alpha: wants_alpha,
    })
}

/// Parses `input` as exactly `format`; `Any` tries hex, rgb, hsl in order.
#[must_use]
pub fn parse_color_as(input: &str, format: ColorFormat) -> Option<ParsedColor> {
    match format {
        ColorFormat::Hex => parse_hex(input),
        ColorFormat::Rgb => parse_functional(&RGB, ColorFormat::Rgb, input, [255.0; 3]),
        ColorFormat::Hsl => parse_functional(&HSL, ColorFormat::Hsl, input, [360.0, 100.0, 100.0]),
        ColorFormat::Any => parse_color(input),
    }
}

/// The first grammar `input` satisfies.
///
/// ```
/// use formosa_validator::algorithms::color::{ColorFormat, parse_color};
///
/// assert_eq!(parse_color("#fff").unwrap().format, ColorFormat::Hex);
/// assert!(parse_color("rgba(0, 0, 0, 0.5)").unwrap().has_alpha);
/// assert!(parse_color("rgb(256, 0, 0)").is_none());
/// ```
#[must_use]
pub fn parse_color(input: &str) -> Option<ParsedColor> {
    [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Hsl]
        .into_iter()
        .find_map(|format| parse_color_as(input, format))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("#fff", Some((ColorFormat::Hex, false)))]
    #[case("#FFFA", Some((ColorFormat::Hex, true)))]
    #[case("#12ab9f", Some((ColorFormat::Hex, false)))]
    #[case("#12ab9f80", Some((ColorFormat::Hex, true)))]
    #[case("#12ab9", None)]
    #[case("12ab9f", None)]
    #[case("rgb(255, 0, 10)", Some((ColorFormat::Rgb, false)))]
    #[case("RGB(1,2,3)", Some((ColorFormat::Rgb, false)))]
    #[case("rgba(255, 0, 10, 0.5)", Some((ColorFormat::Rgb, true)))]
    #[case("rgba(255, 0, 10)", None)]
    #[case("rgb(255, 0, 10, 1)", None)]
    #[case("rgba(0, 0, 0, 1.5)", None)]
    #[case("hsl(360, 100%, 50%)", Some((ColorFormat::Hsl, false)))]
    #[case("hsla(120, 50%, 50%, .3)", Some((ColorFormat::Hsl, true)))]
    #[case("hsl(361, 100%, 50%)", None)]
    #[case("hsl(120, 50, 50)", None)]
    #[case("red", None)]
    fn grammar(#[case] input: &str, #[case] expected: Option<(ColorFormat, bool)>) {
        assert_eq!(parse_color(input).map(|c| (c.format, c.has_alpha)), expected);
    }

    #[test]
    fn single_format_rejects_others() {
        assert!(parse_color_as("#fff", ColorFormat::Rgb).is_none());
        assert!(parse_color_as("rgb(0,0,0)", ColorFormat::Rgb).is_some());
    }
}
