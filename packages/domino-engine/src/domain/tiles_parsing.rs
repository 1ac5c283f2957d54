//! Tile parsing from string tokens (e.g., "3-5", "6-6")

use std::str::FromStr;

use super::tiles_types::{End, Tile};
use crate::errors::domain::ParseTileError;

impl FromStr for Tile {
    type Err = ParseTileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 3 || bytes[1] != b'-' {
            return Err(ParseTileError::new(s));
        }
        let face = |b: u8| -> Result<u8, ParseTileError> {
            if b.is_ascii_digit() {
                Ok(b - b'0')
            } else {
                Err(ParseTileError::new(s))
            }
        };
        let x = face(bytes[0])?;
        let y = face(bytes[2])?;
        Tile::try_new(x, y).ok_or_else(|| ParseTileError::new(s))
    }
}

impl FromStr for End {
    type Err = ParseTileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEFT" => Ok(End::Left),
            "RIGHT" => Ok(End::Right),
            _ => Err(ParseTileError::new(s)),
        }
    }
}

/// Non-panicking helper to parse tile tokens into a hand.
pub fn try_parse_tiles<I, S>(tokens: I) -> Result<Vec<Tile>, ParseTileError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Tile>())
        .collect()
}
