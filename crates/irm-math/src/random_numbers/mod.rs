//! Random driver sources.
//!
//! A [`RandomDriver`] is the only source of randomness for the simulation
//! engine: it hands out independent standard-normal draws on demand.  The
//! engine treats it as an injected capability, so a run can be backed by a
//! seeded pseudo-random generator or by a fixed replay sequence.

use irm_core::{Error, Real, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_mt::Mt19937GenRand64;

// ─── RandomDriver ─────────────────────────────────────────────────────────────

/// A source of independent standard-normal draws.
///
/// Drawing never fails.  Implementations take `&mut self`, so a driver is
/// owned by a single simulation at a time.
pub trait RandomDriver {
    /// Draw one standard-normal deviate.
    fn draw(&mut self) -> Real;

    /// Fill `out` with consecutive draws.
    fn fill(&mut self, out: &mut [Real]) {
        for x in out.iter_mut() {
            *x = self.draw();
        }
    }
}

impl<D: RandomDriver + ?Sized> RandomDriver for &mut D {
    fn draw(&mut self) -> Real {
        (**self).draw()
    }

    fn fill(&mut self, out: &mut [Real]) {
        (**self).fill(out)
    }
}

impl<D: RandomDriver + ?Sized> RandomDriver for Box<D> {
    fn draw(&mut self) -> Real {
        (**self).draw()
    }

    fn fill(&mut self, out: &mut [Real]) {
        (**self).fill(out)
    }
}

// ─── Mersenne Twister ─────────────────────────────────────────────────────────

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Generate the next uniform deviate in `[0, 1)`.
    pub fn next_real(&mut self) -> Real {
        let u: u64 = self.rng.next_u64();
        u as f64 / (u64::MAX as f64 + 1.0)
    }
}

/// An inverse-cumulative normal random number generator.
///
/// Wraps a Mersenne Twister and transforms its output through the inverse
/// CDF of the standard normal distribution.
pub struct InverseCumulativeNormalRng {
    inner: MersenneTwisterUniformRng,
}

impl InverseCumulativeNormalRng {
    /// Create a new generator backed by a Mersenne Twister with the given
    /// seed.
    pub fn new(seed: u64) -> Self {
        Self {
            inner: MersenneTwisterUniformRng::new(seed),
        }
    }

    /// Generate the next standard-normal deviate.
    pub fn next_real(&mut self) -> Real {
        // Avoid exact 0 or 1 which would produce ±∞
        let u = loop {
            let u = self.inner.next_real();
            if u > 0.0 && u < 1.0 {
                break u;
            }
        };
        crate::distributions::normal_cdf_inverse(u)
    }
}

impl RandomDriver for InverseCumulativeNormalRng {
    fn draw(&mut self) -> Real {
        self.next_real()
    }
}

// ─── rand-backed generator ────────────────────────────────────────────────────

/// Standard-normal draws from `rand`'s `StdRng` through `rand_distr`.
pub struct PseudoRandomNormal {
    rng: StdRng,
}

impl PseudoRandomNormal {
    /// Create a reproducible generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from operating-system entropy.
    ///
    /// Paths produced this way are not reproducible.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomDriver for PseudoRandomNormal {
    fn draw(&mut self) -> Real {
        self.rng.sample(StandardNormal)
    }
}

// ─── Replay ───────────────────────────────────────────────────────────────────

/// Replays a fixed sequence of draws, wrapping around when exhausted.
#[derive(Debug, Clone)]
pub struct ReplayDriver {
    draws: Vec<Real>,
    position: usize,
}

impl ReplayDriver {
    /// Create a replay driver over `draws`.
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] if `draws` is empty.
    pub fn new(draws: Vec<Real>) -> Result<Self> {
        if draws.is_empty() {
            return Err(Error::InvalidArgument(
                "replay sequence must contain at least one draw".into(),
            ));
        }
        Ok(Self { draws, position: 0 })
    }

    /// A driver that always returns zero.
    pub fn zeros() -> Self {
        Self {
            draws: vec![0.0],
            position: 0,
        }
    }

    /// Number of draws handed out so far.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl RandomDriver for ReplayDriver {
    fn draw(&mut self) -> Real {
        let d = self.draws[self.position % self.draws.len()];
        self.position += 1;
        d
    }
}
