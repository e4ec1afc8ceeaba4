use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

pub type ColorResult<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid color format: {input:?}")]
    InvalidFormat { input: String },
    #[error("invalid RGB component: {value}")]
    InvalidComponent { value: i32 },
}

/// Immutable RGB color with a canonical `#RRGGBB` string form.
///
/// Components are fixed at construction; the only ways in are the validated
/// constructors and the hex-string parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from wide integers, rejecting anything outside [0, 255].
    pub fn from_components(r: i32, g: i32, b: i32) -> ColorResult<Self> {
        Ok(Self {
            r: validated_component(r)?,
            g: validated_component(g)?,
            b: validated_component(b)?,
        })
    }

    /// Parse an optional `#` followed by exactly six hex digits,
    /// case-insensitive.
    pub fn parse(input: &str) -> ColorResult<Self> {
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            tracing::debug!(input, "rejected color string");
            return Err(ColorError::InvalidFormat {
                input: input.to_string(),
            });
        }

        let component = |range: Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidFormat {
                input: input.to_string(),
            })
        };

        Ok(Self {
            r: component(0..2)?,
            g: component(2..4)?,
            b: component(4..6)?,
        })
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    pub const fn r(self) -> u8 {
        self.r
    }

    pub const fn g(self) -> u8 {
        self.g
    }

    pub const fn b(self) -> u8 {
        self.b
    }

    /// Canonical serialized form: uppercase, zero-padded, leading `#`.
    pub fn to_hex_string(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Compare against a color string by parsing it first.
    ///
    /// A string that fails to parse is an error, not `false`.
    pub fn matches_str(self, input: &str) -> ColorResult<bool> {
        Ok(self == Self::parse(input)?)
    }
}

fn validated_component(value: i32) -> ColorResult<u8> {
    u8::try_from(value).map_err(|_| {
        tracing::debug!(value, "rejected RGB component");
        ColorError::InvalidComponent { value }
    })
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> ColorResult<Self> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}
