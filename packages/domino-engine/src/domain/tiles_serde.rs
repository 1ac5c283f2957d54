//! Serialization and deserialization for tile types

use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::tiles_types::{End, OrientedTile, Tile};

// Tile serde (compact "a-b" token)
impl Serialize for Tile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Tile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Tile>()
            .map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}

// OrientedTile serde: `[left, right]`, orientation is significant
impl Serialize for OrientedTile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.left)?;
        tup.serialize_element(&self.right)?;
        tup.end()
    }
}

impl<'de> Deserialize<'de> for OrientedTile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (left, right) = <(u8, u8)>::deserialize(deserializer)?;
        if Tile::try_new(left, right).is_none() {
            return Err(serde::de::Error::custom(format!(
                "Invalid oriented tile: [{left}, {right}]"
            )));
        }
        Ok(OrientedTile { left, right })
    }
}

// End serde
impl Serialize for End {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match self {
            End::Left => "LEFT",
            End::Right => "RIGHT",
        };
        serializer.serialize_str(s)
    }
}

impl<'de> Deserialize<'de> for End {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<End>()
            .map_err(|_| serde::de::Error::custom(format!("Invalid end: {s}")))
    }
}
