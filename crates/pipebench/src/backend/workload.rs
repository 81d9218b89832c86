use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::core_trait::WorkloadGenerator;

/// Generates random byte payloads of a fixed size.
///
/// This is the stock generator for backends that take opaque byte buffers:
/// every submission gets a fresh randomized payload, the way a camera-feed
/// benchmark would hand each frame different pixels. Use [`RandomPayload::seeded`]
/// when a reproducible byte stream matters.
pub struct RandomPayload {
    size: usize,
    rng: StdRng,
}

impl RandomPayload {
    /// A generator producing `size`-byte payloads from an entropy-seeded rng.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            rng: StdRng::from_entropy(),
        }
    }

    /// A deterministic generator for reproducible payload streams.
    pub fn seeded(size: usize, seed: u64) -> Self {
        Self {
            size,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl WorkloadGenerator<Vec<u8>> for RandomPayload {
    fn next_payload(&mut self) -> Vec<u8> {
        let mut buf = vec![0u8; self.size];
        self.rng.fill_bytes(&mut buf);
        buf
    }
}
