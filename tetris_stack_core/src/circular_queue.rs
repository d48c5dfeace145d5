use crate::consts;
use crate::piece::Piece;
use crate::piece_source::PieceSource;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of taking the front piece off the queue.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Dequeued {
    /// The piece was waiting at the front of the queue.
    Stored(Piece),
    /// The queue was empty, so a fresh piece was generated in its place.
    Recovered(Piece),
}

impl Dequeued {
    pub fn piece(&self) -> &Piece {
        match self {
            Dequeued::Stored(p) | Dequeued::Recovered(p) => p,
        }
    }

    pub fn into_piece(self) -> Piece {
        *self.piece()
    }

    pub fn is_recovered(&self) -> bool {
        matches!(self, Dequeued::Recovered(_))
    }
}

/// Fixed-size ring of upcoming pieces.
///
/// The element count is tracked next to the head index, so all `N` slots are usable and a
/// full queue holds exactly `N` pieces. Every successful [`dequeue`](Self::dequeue) pulls one
/// new piece from the source, which keeps a full queue full. Inserting into a full queue
/// overwrites the oldest piece instead of failing.
#[derive(Clone, Debug)]
pub struct CircularQueue<S, const N: usize = { consts::QUEUE_CAPACITY }> {
    slots: [Piece; N],
    head: usize,
    len: usize,
    source: S,
}

impl<S: PieceSource, const N: usize> CircularQueue<S, N> {
    /// Create a queue already filled with `N` pieces from `source`.
    pub fn new(source: S) -> Self {
        let mut queue = CircularQueue {
            slots: [Piece::default(); N],
            head: 0,
            len: 0,
            source,
        };
        queue.initialize();
        queue
    }

    /// Drop everything and refill with `N` freshly generated pieces.
    pub fn initialize(&mut self) {
        self.clear();
        for _ in 0..N {
            let piece = self.source.generate();
            self.enqueue(piece);
        }
    }

    /// Insert at the tail. On a full queue the oldest piece is discarded and returned.
    pub fn enqueue(&mut self, piece: Piece) -> Option<Piece> {
        if N == 0 {
            return Some(piece);
        }

        let overwritten = if self.len == N {
            let oldest = self.slots[self.head];
            self.head = (self.head + 1) % N;
            self.len -= 1;
            debug!(%oldest, "queue full, overwriting oldest piece");
            Some(oldest)
        } else {
            None
        };

        let tail = (self.head + self.len) % N;
        self.slots[tail] = piece;
        self.len += 1;
        debug!(%piece, slot = tail, "enqueued");
        overwritten
    }

    /// Take the front piece and top the queue back up with one generated piece.
    ///
    /// An empty queue is not an error: a piece is generated on the spot and handed back as
    /// [`Dequeued::Recovered`]. The queue itself stays empty in that case.
    pub fn dequeue(&mut self) -> Dequeued {
        if self.len == 0 {
            let piece = self.source.generate();
            warn!(%piece, "queue empty on dequeue, generated a replacement");
            return Dequeued::Recovered(piece);
        }

        let piece = self.slots[self.head];
        self.head = (self.head + 1) % N;
        self.len -= 1;
        debug!(%piece, "dequeued");

        let refill = self.source.generate();
        self.enqueue(refill);
        Dequeued::Stored(piece)
    }

    /// Pieces from oldest to newest. Calling it again restarts from the front.
    pub fn peek_all(&self) -> impl ExactSizeIterator<Item = &Piece> + Clone + '_ {
        (0..self.len).map(move |i| &self.slots[(self.head + i) % N])
    }

    /// Like [`peek_all`](Self::peek_all), paired with the ring slot each piece sits in.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = (usize, &Piece)> + Clone + '_ {
        (0..self.len).map(move |i| {
            let slot = (self.head + i) % N;
            (slot, &self.slots[slot])
        })
    }

    pub fn front(&self) -> Option<&Piece> {
        self.peek_all().next()
    }

    /// Forget all pieces without refilling.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S, const N: usize> CircularQueue<S, N> {
    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }
}
