//! Sources of coin outcomes.

use toss_types::Face;

/// Produces one face per call.
///
/// Implementations for play must be fair and independent across calls.
pub trait CoinSource: Send {
    fn toss(&mut self) -> Face;
}

/// Fair coin backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngCoin;

impl CoinSource for ThreadRngCoin {
    fn toss(&mut self) -> Face {
        Face::from_bit(rand::random::<bool>())
    }
}

/// Replays a fixed sequence of faces, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedCoin {
    faces: Vec<Face>,
    next: usize,
    tosses: u64,
}

impl ScriptedCoin {
    /// An empty script behaves like a two-headed coin.
    #[must_use]
    pub fn new(faces: impl Into<Vec<Face>>) -> Self {
        Self {
            faces: faces.into(),
            next: 0,
            tosses: 0,
        }
    }

    /// How many times [`CoinSource::toss`] has been called.
    #[must_use]
    pub fn tosses(&self) -> u64 {
        self.tosses
    }
}

impl CoinSource for ScriptedCoin {
    fn toss(&mut self) -> Face {
        self.tosses += 1;
        let Some(face) = self.faces.get(self.next).copied() else {
            return Face::Heads;
        };
        self.next = (self.next + 1) % self.faces.len();
        face
    }
}
