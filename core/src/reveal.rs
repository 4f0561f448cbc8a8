use rand::Rng;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One box in the hunt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoxSlot {
    pub has_ring: bool,
    pub revealed: bool,
}

/// Outcome of opening a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Ring,
    Empty,
    AlreadyOpen,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RingHuntError {
    #[error("the hunt needs at least one box")]
    NoBoxes,
    #[error("box {0} is out of bounds")]
    OutOfBounds(usize),
}

/// The "find the ring" round: N boxes, exactly one hiding the ring.
///
/// Re-revealing an open box reports [`Reveal::AlreadyOpen`] and changes
/// nothing, so the win path fires at most once per round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RingHunt {
    boxes: Vec<BoxSlot>,
}

impl RingHunt {
    /// Starts a round over `count` boxes with a uniformly chosen ring.
    pub fn new(count: usize, rng: &mut impl Rng) -> Result<Self, RingHuntError> {
        if count == 0 {
            return Err(RingHuntError::NoBoxes);
        }
        let mut hunt = RingHunt {
            boxes: vec![
                BoxSlot {
                    has_ring: false,
                    revealed: false,
                };
                count
            ],
        };
        hunt.hide_ring(rng);
        Ok(hunt)
    }

    fn hide_ring(&mut self, rng: &mut impl Rng) {
        let winner = rng.gen_range(0..self.boxes.len());
        for (index, slot) in self.boxes.iter_mut().enumerate() {
            slot.has_ring = index == winner;
            slot.revealed = false;
        }
    }

    /// Opens a box.
    pub fn reveal(&mut self, index: usize) -> Result<Reveal, RingHuntError> {
        let slot = self
            .boxes
            .get_mut(index)
            .ok_or(RingHuntError::OutOfBounds(index))?;
        if slot.revealed {
            return Ok(Reveal::AlreadyOpen);
        }
        slot.revealed = true;
        Ok(if slot.has_ring {
            Reveal::Ring
        } else {
            Reveal::Empty
        })
    }

    /// Starts a fresh round: everything unrevealed, a new independently
    /// chosen ring position (which may repeat the last one).
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.hide_ring(rng);
    }

    pub fn boxes(&self) -> &[BoxSlot] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// How many boxes currently hide the ring. Always one.
    pub fn ring_count(&self) -> usize {
        self.boxes.iter().filter(|slot| slot.has_ring).count()
    }
}
