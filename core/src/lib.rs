//! Core domain state for the Keepsake page.
//!
//! Everything here is pure and synchronous: no timers, no rendering, no I/O.
//! Randomness only enters through explicit `rand::Rng` parameters so callers
//! (and tests) decide the source.
pub mod carousel;
pub mod catch;
pub mod celebration;
pub mod confetti;
pub mod particles;
pub mod reveal;
pub mod typewriter;

pub use carousel::{Carousel, CarouselError, Direction};
pub use catch::{CatchGame, CatchGameError, CatchOutcome};
pub use celebration::Celebration;
pub use confetti::{BURST_PIECES, ConfettiPiece, scatter};
pub use particles::{Particle, ParticleField, ParticleId, Span, SpawnProfile};
pub use reveal::{Reveal, RingHunt, RingHuntError};
pub use typewriter::Typewriter;
