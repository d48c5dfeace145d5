use crate::bounded_stack::{BoundedStack, StackError};
use crate::circular_queue::{CircularQueue, Dequeued};
use crate::piece::Piece;
use crate::piece_source::{PieceSource, RandomPieceSource};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Action {
    Play,
    Reserve,
    UseReserved,
    Quit,
}

#[derive(Clone, Debug, Display, Error, Eq, PartialEq)]
#[display("invalid option {input:?}")]
pub struct ParseActionError {
    pub input: String,
}

/// What a single [`Session::apply`] did.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Played(Dequeued),
    Reserved(Dequeued),
    UsedReserved(Piece),
    Refused(StackError),
    Quit,
}

/// One piece with the position it is displayed at.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct SlotView {
    pub slot: usize,
    #[serde(flatten)]
    pub piece: Piece,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct SessionSnapshot {
    /// Oldest first, `slot` is the ring slot.
    pub queue: Vec<SlotView>,
    /// Top first, `slot` counts from the bottom of the reserve.
    pub reserve: Vec<SlotView>,
}

/// The upcoming-piece queue and the reserve stack, plus the three moves that combine them.
#[derive(Clone, Debug)]
pub struct Session<S> {
    queue: CircularQueue<S>,
    reserve: BoundedStack,
}

impl Session<RandomPieceSource> {
    pub fn from_seed(seed: u64) -> Self {
        Session::new(RandomPieceSource::from_seed(seed))
    }
}

impl<S: PieceSource> Session<S> {
    pub fn new(source: S) -> Self {
        Session {
            queue: CircularQueue::new(source),
            reserve: BoundedStack::new(),
        }
    }

    pub fn play(&mut self) -> Dequeued {
        self.queue.dequeue()
    }

    /// Move the front of the queue onto the reserve.
    ///
    /// The reserve is checked first, so a full reserve leaves the queue untouched.
    pub fn reserve(&mut self) -> Result<Dequeued, StackError> {
        if self.reserve.is_full() {
            return Err(StackError::Full {
                capacity: self.reserve.capacity(),
            });
        }
        let taken = self.queue.dequeue();
        self.reserve.push(taken.into_piece())?;
        Ok(taken)
    }

    pub fn use_reserved(&mut self) -> Result<Piece, StackError> {
        self.reserve.pop()
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        use Action::*;
        let outcome = match action {
            Play => Outcome::Played(self.play()),
            Reserve => self.reserve().map_or_else(Outcome::Refused, Outcome::Reserved),
            UseReserved => self
                .use_reserved()
                .map_or_else(Outcome::Refused, Outcome::UsedReserved),
            Quit => Outcome::Quit,
        };
        debug!(?action, ?outcome, "applied");
        outcome
    }

    pub fn queue(&self) -> &CircularQueue<S> {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut CircularQueue<S> {
        &mut self.queue
    }

    pub fn reserve_stack(&self) -> &BoundedStack {
        &self.reserve
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            queue: self
                .queue
                .slots()
                .map(|(slot, piece)| SlotView {
                    slot,
                    piece: *piece,
                })
                .collect(),
            reserve: self
                .reserve
                .slots()
                .map(|(slot, piece)| SlotView {
                    slot,
                    piece: *piece,
                })
                .collect(),
        }
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use Action::*;
        Ok(match s.trim() {
            "1" => Play,
            "2" => Reserve,
            "3" => UseReserved,
            "0" => Quit,
            _ => {
                return Err(ParseActionError {
                    input: s.trim().to_string(),
                })
            }
        })
    }
}
