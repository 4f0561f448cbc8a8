use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many pieces one celebration throws.
pub const BURST_PIECES: usize = 200;

/// One confetti piece. Positions are viewport units; the web layer animates
/// the fall with CSS and clears the whole burst when its celebration window
/// expires.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConfettiPiece {
    /// Starting horizontal position, vw.
    pub x: f32,
    /// Horizontal travel over the fall, vw.
    pub drift: f32,
    /// Start delay, ms.
    pub delay_ms: u32,
    /// Fall duration, ms.
    pub fall_ms: u32,
    /// Edge length, px.
    pub size: f32,
    /// Palette index, already reduced modulo `palette_len`.
    pub color: usize,
}

/// Scatters `count` pieces across the viewport width.
pub fn scatter(count: usize, palette_len: usize, rng: &mut impl Rng) -> Vec<ConfettiPiece> {
    (0..count)
        .map(|_| ConfettiPiece {
            x: rng.gen_range(0.0..100.0),
            drift: rng.gen_range(-12.0..12.0),
            delay_ms: rng.gen_range(0..800),
            fall_ms: rng.gen_range(2200..3800),
            size: rng.gen_range(6.0..12.0),
            color: if palette_len == 0 {
                0
            } else {
                rng.gen_range(0..palette_len)
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn scatter_produces_the_requested_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert_eq!(scatter(BURST_PIECES, 5, &mut rng).len(), BURST_PIECES);
        assert!(scatter(0, 5, &mut rng).is_empty());
    }

    #[test]
    fn pieces_stay_within_the_documented_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for piece in scatter(500, 5, &mut rng) {
            assert!((0.0..100.0).contains(&piece.x));
            assert!((-12.0..12.0).contains(&piece.drift));
            assert!(piece.delay_ms < 800);
            assert!((2200..3800).contains(&piece.fall_ms));
            assert!((6.0..12.0).contains(&piece.size));
            assert!(piece.color < 5);
        }
    }

    #[test]
    fn empty_palette_pins_color_to_zero() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert!(scatter(20, 0, &mut rng).iter().all(|p| p.color == 0));
    }

    #[test]
    fn same_seed_scatters_identically() {
        let a = scatter(50, 5, &mut ChaCha8Rng::seed_from_u64(11));
        let b = scatter(50, 5, &mut ChaCha8Rng::seed_from_u64(11));

        assert_eq!(a, b);
    }
}
