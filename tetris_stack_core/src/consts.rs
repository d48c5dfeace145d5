/// Number of upcoming pieces the preview queue always holds.
pub const QUEUE_CAPACITY: usize = 5;

/// How many pieces can be set aside in the reserve at once.
pub const STACK_CAPACITY: usize = 3;

/// Largest id a generated piece can carry. Ids are drawn from `0..=MAX_PIECE_ID`.
pub const MAX_PIECE_ID: u16 = 999;

pub const NUM_SHAPES: usize = 7;
