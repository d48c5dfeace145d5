use crate::piece::Piece;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Where new pieces come from. Containers only ever see this trait, so tests can swap the
/// generator for a seeded one.
pub trait PieceSource {
    fn generate(&mut self) -> Piece;
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn generate(&mut self) -> Piece {
        (**self).generate()
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn generate(&mut self) -> Piece {
        (**self).generate()
    }
}

/// Uniform random pieces: id in `0..=MAX_PIECE_ID`, one of the seven shapes.
#[derive(Clone, Debug)]
pub struct RandomPieceSource<R = StdRng> {
    rng: R,
    seed: Option<u64>,
}

impl RandomPieceSource<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        RandomPieceSource {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Seeded once from the wall clock.
    pub fn from_time() -> Self {
        Self::from_seed(time_seed())
    }
}

impl<R: Rng> RandomPieceSource<R> {
    pub fn new(rng: R) -> Self {
        RandomPieceSource { rng, seed: None }
    }

    /// The seed this source was built from, if it was built from one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl<R: Rng> PieceSource for RandomPieceSource<R> {
    fn generate(&mut self) -> Piece {
        self.rng.gen()
    }
}

impl<R: Rng> Iterator for RandomPieceSource<R> {
    type Item = Piece;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}

pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
