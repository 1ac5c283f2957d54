//! Typed move payloads accepted from collaborators.

use serde::{Deserialize, Serialize};

use crate::domain::state::Seat;
use crate::domain::tiles_types::End;

/// A tile from the acting seat's hand and the end it goes on.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub tile_index: usize,
    pub end: End,
}

impl Placement {
    pub const fn new(tile_index: usize, end: End) -> Self {
        Self { tile_index, end }
    }
}

/// What a seat wants to do on its turn.
///
/// Wire shape: `{"type":"play","seat":0,"tile_index":2,"end":"LEFT"}` or
/// `{"type":"pass","seat":1}`. Unknown tags, missing fields and bad ends
/// fail to deserialize, so nothing loosely typed reaches the rules.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Intent {
    Play {
        seat: Seat,
        tile_index: usize,
        end: End,
    },
    Pass {
        seat: Seat,
    },
}

impl Intent {
    pub fn seat(&self) -> Seat {
        match *self {
            Intent::Play { seat, .. } | Intent::Pass { seat } => seat,
        }
    }

    pub fn play(seat: Seat, placement: Placement) -> Self {
        Intent::Play {
            seat,
            tile_index: placement.tile_index,
            end: placement.end,
        }
    }
}
