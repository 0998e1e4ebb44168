// Configuration value types

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// What the tip is positioned against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AlignTo {
    #[default]
    Element,
    Cursor,
}

impl FromStr for AlignTo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "element" => Ok(AlignTo::Element),
            "cursor" => Ok(AlignTo::Cursor),
            other => Err(format!("unknown alignment '{other}' (expected element or cursor)")),
        }
    }
}

impl fmt::Display for AlignTo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignTo::Element => f.write_str("element"),
            AlignTo::Cursor => f.write_str("cursor"),
        }
    }
}

/// Signed `[dx, dy]` displacement of the tip
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Offset { dx, dy }
    }
}

impl Default for Offset {
    fn default() -> Self {
        Offset { dx: 0.0, dy: -1.0 }
    }
}

impl From<[f64; 2]> for Offset {
    fn from([dx, dy]: [f64; 2]) -> Self {
        Offset { dx, dy }
    }
}

impl FromStr for Offset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dx, dy) = s
            .split_once(',')
            .ok_or_else(|| format!("offset '{s}' must be written as dx,dy"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("offset '{s}': {e}"))
        };
        Ok(Offset::new(parse(dx)?, parse(dy)?))
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.dx, self.dy)
    }
}

/// Delay as written by the user, before integer coercion
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DelayValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<u64> for DelayValue {
    fn from(ms: u64) -> Self {
        DelayValue::Integer(i64::try_from(ms).unwrap_or(i64::MAX))
    }
}

impl From<&str> for DelayValue {
    fn from(text: &str) -> Self {
        DelayValue::Text(text.to_string())
    }
}

/// Coerce a delay to whole milliseconds.
///
/// Fractions are truncated and text is read up to the first non-digit
/// (`"250ms"` is 250). Anything negative or unreadable disables the delay.
pub fn coerce_delay(value: &DelayValue) -> u64 {
    match value {
        DelayValue::Integer(ms) => u64::try_from(*ms).unwrap_or(0),
        DelayValue::Float(ms) if ms.is_finite() && *ms > 0.0 => ms.trunc() as u64,
        DelayValue::Float(_) => 0,
        DelayValue::Text(text) => leading_integer(text),
    }
}

fn leading_integer(text: &str) -> u64 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_offset_default_is_just_above() {
        assert_eq!(Offset::default(), Offset::new(0.0, -1.0));
    }

    #[test]
    fn test_offset_from_str() {
        assert_eq!("4, -2".parse::<Offset>(), Ok(Offset::new(4.0, -2.0)));
        assert!("4".parse::<Offset>().is_err());
        assert!("a,b".parse::<Offset>().is_err());
    }

    #[test]
    fn test_align_to_from_str() {
        assert_eq!("Cursor".parse::<AlignTo>(), Ok(AlignTo::Cursor));
        assert!("pointer".parse::<AlignTo>().is_err());
    }

    #[test]
    fn test_coerce_delay_text_forms() {
        assert_eq!(coerce_delay(&DelayValue::Text("250ms".to_string())), 250);
        assert_eq!(coerce_delay(&DelayValue::Text("  75".to_string())), 75);
        assert_eq!(coerce_delay(&DelayValue::Text("+10".to_string())), 10);
        assert_eq!(coerce_delay(&DelayValue::Text("-10".to_string())), 0);
        assert_eq!(coerce_delay(&DelayValue::Text("soon".to_string())), 0);
    }

    #[test]
    fn test_coerce_delay_numbers() {
        assert_eq!(coerce_delay(&DelayValue::Float(120.9)), 120);
        assert_eq!(coerce_delay(&DelayValue::Float(f64::NAN)), 0);
        assert_eq!(coerce_delay(&DelayValue::Integer(-5)), 0);
        assert_eq!(coerce_delay(&DelayValue::from(300u64)), 300);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Any non-negative integer survives coercion whether written as a number or as text
        #[test]
        fn prop_integer_delays_survive_coercion(ms in 0u32..100_000) {
            let ms = u64::from(ms);
            prop_assert_eq!(coerce_delay(&DelayValue::from(ms)), ms);
            prop_assert_eq!(coerce_delay(&DelayValue::Text(ms.to_string())), ms);
            prop_assert_eq!(coerce_delay(&DelayValue::Text(format!("{ms}px"))), ms);
        }

        // Alignment values parse from TOML in any supported spelling
        #[test]
        fn prop_align_to_parsing(value in prop::sample::select(vec!["element", "cursor"])) {
            #[derive(Deserialize)]
            struct Wrapper {
                align_to: AlignTo,
            }

            let toml_content = format!("align_to = \"{}\"", value);
            let parsed: Result<Wrapper, _> = toml::from_str(&toml_content);
            prop_assert!(parsed.is_ok(), "Failed to parse alignment: {}", value);

            let expected = match value {
                "element" => AlignTo::Element,
                "cursor" => AlignTo::Cursor,
                _ => unreachable!(),
            };
            prop_assert_eq!(parsed.unwrap().align_to, expected);
        }
    }
}
