pub mod bounded_stack;
pub mod circular_queue;
pub mod consts;
pub mod piece;
pub mod piece_source;
pub mod session;
