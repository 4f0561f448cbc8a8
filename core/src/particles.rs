use rand::Rng;

/// Sampling range for one spawn attribute, inclusive of `lo`, exclusive of
/// `hi`. A degenerate span always yields `lo`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub lo: f32,
    pub hi: f32,
}

impl Span {
    pub const fn new(lo: f32, hi: f32) -> Self {
        Span { lo, hi }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> f32 {
        if self.hi <= self.lo {
            self.lo
        } else {
            rng.gen_range(self.lo..self.hi)
        }
    }
}

/// Attribute ranges for one kind of decorative particle.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnProfile {
    pub x: Span,
    pub y: Span,
    pub size: Span,
    pub duration_ms: Span,
    pub glyphs: &'static [&'static str],
}

pub type ParticleId = u64;

/// One short-lived decorative element.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub duration_ms: u32,
    pub glyph: &'static str,
    expires_at: u64,
}

impl Particle {
    /// Deadline after which a sweep may reclaim this particle.
    pub fn expires_at(&self) -> u64 {
        self.expires_at
    }
}

/// Owned collection of live particles.
///
/// Ids come from a monotonic counter, so removing an id can never alias a
/// later spawn. Removal is idempotent; `sweep` bounds the lifetime of any
/// particle whose removal timer went missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleField {
    next_id: ParticleId,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns one particle with every attribute sampled from `profile`.
    pub fn spawn(&mut self, profile: &SpawnProfile, rng: &mut impl Rng, now_ms: u64) -> Particle {
        let x = profile.x.sample(rng);
        let y = profile.y.sample(rng);
        self.spawn_inner(x, y, profile, rng, now_ms)
    }

    /// Spawns one particle at an exact position; size, lifetime, and glyph
    /// are still sampled from `profile`.
    pub fn spawn_at(
        &mut self,
        x: f32,
        y: f32,
        profile: &SpawnProfile,
        rng: &mut impl Rng,
        now_ms: u64,
    ) -> Particle {
        self.spawn_inner(x, y, profile, rng, now_ms)
    }

    fn spawn_inner(
        &mut self,
        x: f32,
        y: f32,
        profile: &SpawnProfile,
        rng: &mut impl Rng,
        now_ms: u64,
    ) -> Particle {
        let duration_ms = profile.duration_ms.sample(rng).max(0.0) as u32;
        let glyph = if profile.glyphs.is_empty() {
            ""
        } else {
            profile.glyphs[rng.gen_range(0..profile.glyphs.len())]
        };
        let id = self.next_id;
        self.next_id += 1;
        let particle = Particle {
            id,
            x,
            y,
            size: profile.size.sample(rng),
            duration_ms,
            glyph,
            expires_at: now_ms + u64::from(duration_ms),
        };
        self.particles.push(particle.clone());
        particle
    }

    /// Removes one particle. A second removal of the same id is a no-op.
    pub fn remove(&mut self, id: ParticleId) -> bool {
        let before = self.particles.len();
        self.particles.retain(|p| p.id != id);
        self.particles.len() != before
    }

    /// Reclaims every particle whose deadline has passed.
    /// Returns how many were dropped.
    pub fn sweep(&mut self, now_ms: u64) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| p.expires_at > now_ms);
        before - self.particles.len()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const PROFILE: SpawnProfile = SpawnProfile {
        x: Span::new(10.0, 90.0),
        y: Span::new(10.0, 90.0),
        size: Span::new(20.0, 40.0),
        duration_ms: Span::new(2000.0, 5000.0),
        glyphs: &["a", "b", "c"],
    };

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn spawned_attributes_stay_within_the_profile_ranges() {
        let mut rng = rng();
        let mut field = ParticleField::new();

        for _ in 0..100 {
            let p = field.spawn(&PROFILE, &mut rng, 0);
            assert!((10.0..90.0).contains(&p.x));
            assert!((10.0..90.0).contains(&p.y));
            assert!((20.0..40.0).contains(&p.size));
            assert!((2000..5000).contains(&p.duration_ms));
            assert!(PROFILE.glyphs.contains(&p.glyph));
        }
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut rng = rng();
        let mut field = ParticleField::new();

        let first = field.spawn(&PROFILE, &mut rng, 0);
        let second = field.spawn(&PROFILE, &mut rng, 0);
        field.remove(first.id);
        let third = field.spawn(&PROFILE, &mut rng, 0);

        assert!(second.id > first.id);
        assert!(third.id > second.id);
    }

    #[test]
    fn spawn_at_keeps_the_exact_position() {
        let mut rng = rng();
        let mut field = ParticleField::new();

        let p = field.spawn_at(312.5, 48.0, &PROFILE, &mut rng, 0);

        assert_eq!(p.x, 312.5);
        assert_eq!(p.y, 48.0);
    }

    #[test]
    fn removal_is_idempotent() {
        let mut rng = rng();
        let mut field = ParticleField::new();
        let p = field.spawn(&PROFILE, &mut rng, 0);

        assert!(field.remove(p.id));
        assert!(!field.remove(p.id));
        assert!(field.is_empty());
    }

    #[test]
    fn removing_one_particle_leaves_the_others() {
        let mut rng = rng();
        let mut field = ParticleField::new();
        let a = field.spawn(&PROFILE, &mut rng, 0);
        let b = field.spawn(&PROFILE, &mut rng, 0);

        field.remove(a.id);

        assert_eq!(field.len(), 1);
        assert!(field.iter().any(|p| p.id == b.id));
    }

    #[test]
    fn sweep_reclaims_exactly_the_expired_particles() {
        let mut rng = rng();
        let mut field = ParticleField::new();
        // Lifetimes land in [2000, 5000), so at t=6000 everything spawned at
        // t=0 is out while everything spawned at t=5000 is still live.
        for _ in 0..5 {
            field.spawn(&PROFILE, &mut rng, 0);
        }
        for _ in 0..3 {
            field.spawn(&PROFILE, &mut rng, 5000);
        }

        let dropped = field.sweep(6000);

        assert_eq!(dropped, 5);
        assert_eq!(field.len(), 3);
        assert!(field.iter().all(|p| p.expires_at() > 6000));
    }

    #[test]
    fn no_particle_survives_a_sweep_past_its_deadline() {
        let mut rng = rng();
        let mut field = ParticleField::new();
        let mut now = 0;
        // Spawn on a cadence shorter than the shortest lifetime and sweep on
        // every tick, like the page's spawner loops do.
        for _ in 0..50 {
            now += 300;
            field.sweep(now);
            field.spawn(&PROFILE, &mut rng, now);
            assert!(field.iter().all(|p| p.expires_at() > now));
        }
    }

    #[test]
    fn degenerate_span_always_yields_lo() {
        let mut rng = rng();
        let span = Span::new(24.0, 24.0);

        for _ in 0..10 {
            assert_eq!(span.sample(&mut rng), 24.0);
        }
    }

    #[test]
    fn same_seed_spawns_the_same_particles() {
        let mut a = ParticleField::new();
        let mut b = ParticleField::new();

        let pa = a.spawn(&PROFILE, &mut rng(), 0);
        let pb = b.spawn(&PROFILE, &mut rng(), 0);

        assert_eq!(pa, pb);
    }
}
