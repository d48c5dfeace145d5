use crate::consts;
use crate::piece::Piece;
use derive_more::{Display, Error};
use tracing::debug;

#[derive(Copy, Clone, Debug, Display, Error, Eq, PartialEq)]
pub enum StackError {
    #[display("reserve is full ({capacity} pieces)")]
    Full { capacity: usize },
    #[display("reserve is empty")]
    Empty,
}

/// Fixed-capacity LIFO reserve. A refused push or pop leaves the stack untouched.
#[derive(Clone, Debug)]
pub struct BoundedStack<const M: usize = { consts::STACK_CAPACITY }> {
    slots: [Piece; M],
    len: usize,
}

impl<const M: usize> BoundedStack<M> {
    pub fn new() -> Self {
        BoundedStack {
            slots: [Piece::default(); M],
            len: 0,
        }
    }

    pub fn initialize(&mut self) {
        self.len = 0;
    }

    pub fn push(&mut self, piece: Piece) -> Result<(), StackError> {
        if self.is_full() {
            return Err(StackError::Full { capacity: M });
        }
        self.slots[self.len] = piece;
        self.len += 1;
        debug!(%piece, len = self.len, "pushed onto reserve");
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Piece, StackError> {
        if self.is_empty() {
            return Err(StackError::Empty);
        }
        self.len -= 1;
        let piece = self.slots[self.len];
        debug!(%piece, len = self.len, "popped from reserve");
        Ok(piece)
    }

    pub fn peek(&self) -> Option<&Piece> {
        self.slots[..self.len].last()
    }

    /// Pieces from top to bottom.
    pub fn peek_all(&self) -> impl ExactSizeIterator<Item = &Piece> + Clone + '_ {
        self.slots[..self.len].iter().rev()
    }

    /// Top to bottom, paired with each piece's position counted from the bottom.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = (usize, &Piece)> + Clone + '_ {
        self.slots[..self.len].iter().enumerate().rev()
    }

    pub const fn capacity(&self) -> usize {
        M
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == M
    }
}

impl<const M: usize> Default for BoundedStack<M> {
    fn default() -> Self {
        Self::new()
    }
}
