use std::collections::HashSet;

use rand::distributions::Uniform;
use rand::Rng;

use protocol::GENERATION_MAX_COLLISIONS;

use crate::error::SessionError;

/// Per-peer record of every number already handed out during the current
/// generation session. Keyed by the bit pattern of the `f64` rather than the
/// float itself, since our samples are always finite and bit-identity is
/// exactly what "already sent" means here.
#[derive(Default)]
pub struct PeerSession {
    seen: HashSet<u64>,
}

impl PeerSession {
    pub fn new() -> Self {
        PeerSession::default()
    }

    /// Draws `count` samples uniformly from `[-upper_bound, upper_bound)`,
    /// rejecting any draw already present in this peer's set up to
    /// [`GENERATION_MAX_COLLISIONS`] times before giving up.
    pub fn draw_unique(&mut self, count: u64, upper_bound: f64) -> Result<Vec<f64>, SessionError> {
        let distribution = Uniform::new(-upper_bound, upper_bound);
        let mut rng = rand::thread_rng();
        let mut numbers = Vec::with_capacity(count as usize);

        for _ in 0..count {
            let mut collisions = 0;
            loop {
                let candidate = rng.sample(distribution);
                let bits = candidate.to_bits();

                if self.seen.insert(bits) {
                    numbers.push(candidate);
                    break;
                }

                collisions += 1;
                if collisions >= GENERATION_MAX_COLLISIONS {
                    return Err(SessionError::GenerationExhausted(collisions));
                }
            }
        }

        Ok(numbers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_requested_count() {
        let mut session = PeerSession::new();
        let numbers = session.draw_unique(50, 10.0).unwrap();
        assert_eq!(numbers.len(), 50);
        for n in &numbers {
            assert!(*n >= -10.0 && *n < 10.0);
        }
    }

    #[test]
    fn draws_are_unique_within_a_session() {
        let mut session = PeerSession::new();
        let first = session.draw_unique(200, 1000.0).unwrap();
        let second = session.draw_unique(200, 1000.0).unwrap();

        let mut all_bits: HashSet<u64> = HashSet::new();
        for n in first.iter().chain(second.iter()) {
            assert!(all_bits.insert(n.to_bits()), "duplicate number across fragments");
        }
    }

    #[test]
    fn zero_count_draws_nothing() {
        let mut session = PeerSession::new();
        assert!(session.draw_unique(0, 5.0).unwrap().is_empty());
    }

    #[test]
    fn generation_exhausted_once_the_range_is_used_up() {
        // A range built from the two smallest-magnitude subnormals leaves
        // only a handful of distinct representable outputs. Pre-seeding
        // `seen` with every one of them (accessible here as a descendant
        // module of `generator`) guarantees every draw collides, rather
        // than relying on a specific RNG implementation to exhaust itself.
        let upper_bound = f64::from_bits(1);
        let mut session = PeerSession {
            seen: HashSet::from([
                0.0f64.to_bits(),
                (-0.0f64).to_bits(),
                f64::from_bits(1).to_bits(),
                f64::from_bits(2).to_bits(),
                (-f64::from_bits(1)).to_bits(),
                (-f64::from_bits(2)).to_bits(),
            ]),
        };

        let result = session.draw_unique(1, upper_bound);
        assert!(matches!(result, Err(SessionError::GenerationExhausted(_))));
    }
}
