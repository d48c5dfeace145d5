use crate::consts;
use derive_more::{Display, Error};
use enum_iterator::Sequence;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The seven tetromino tags. Only the tag matters here, no geometry.
#[derive(
    Copy, Clone, Debug, Default, Display, Eq, PartialEq, Hash, Sequence, Deserialize, Serialize,
)]
pub enum Shape {
    #[default]
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
#[display("unknown shape tag {tag:?}")]
pub struct ParseShapeError {
    pub tag: String,
}

/// A queued piece. Duplicated ids are allowed, pieces have no identity beyond their fields.
#[derive(Copy, Clone, Debug, Default, Display, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[display("ID: {id} | Tipo: {shape}")]
pub struct Piece {
    pub id: u16,
    pub shape: Shape,
}

impl Piece {
    pub fn new(id: u16, shape: Shape) -> Piece {
        Piece { id, shape }
    }
}

impl FromStr for Shape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Shape::*;
        Ok(match s.trim().to_ascii_uppercase().as_str() {
            "I" => I,
            "O" => O,
            "T" => T,
            "L" => L,
            "J" => J,
            "S" => S,
            "Z" => Z,
            _ => {
                return Err(ParseShapeError {
                    tag: s.to_string(),
                })
            }
        })
    }
}

impl Distribution<Shape> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        use Shape::*;
        match rng.gen_range(0..consts::NUM_SHAPES) {
            0 => I,
            1 => O,
            2 => T,
            3 => L,
            4 => J,
            5 => S,
            _ => Z,
        }
    }
}

impl Distribution<Piece> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Piece {
        let id = rng.gen_range(0..=consts::MAX_PIECE_ID);
        Piece::new(id, rng.gen())
    }
}
