//! Seeded random source
//!
//! Gantree: L3_Bench → Rng
//!
//! `Pcg64` (PCG XSL-RR 128/64) seeded through a `SeedSequence` entropy
//! pool. `Pcg64::seed_from_u64(s)` produces the same stream as
//! `numpy.random.default_rng(s)`, and `rng.gen::<f64>()` the same doubles
//! as `Generator.random()`, so generated angles match the reference
//! benchmark circuits bit for bit.

use qbench_core::{math, Angle};
use rand::{Error, Rng, RngCore, SeedableRng};

// ============================================================================
// SeedSequence
// ============================================================================

const POOL_SIZE: usize = 4;
const INIT_A: u32 = 0x43b0_d7e5;
const MULT_A: u32 = 0x931e_8875;
const INIT_B: u32 = 0x8b51_f9dd;
const MULT_B: u32 = 0x58f3_8ded;
const MIX_MULT_L: u32 = 0xca01_f9dd;
const MIX_MULT_R: u32 = 0x4973_f715;
const XSHIFT: u32 = 16;

/// Entropy pool turning a small seed into well-mixed generator state
/// Gantree: SeedSequence // 엔트로피 풀
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSequence {
    pool: [u32; POOL_SIZE],
}

impl SeedSequence {
    /// Pool for an integer seed
    pub fn new(seed: u64) -> Self {
        let lo = seed as u32;
        let hi = (seed >> 32) as u32;
        if hi == 0 {
            Self::from_words(&[lo])
        } else {
            Self::from_words(&[lo, hi])
        }
    }

    /// Pool for little-endian 32-bit entropy words
    /// Gantree: from_words(&[u32]) -> Self // 풀 초기화
    pub fn from_words(entropy: &[u32]) -> Self {
        let mut hash_const = INIT_A;
        let mut hashmix = |value: u32| -> u32 {
            let mut v = value ^ hash_const;
            hash_const = hash_const.wrapping_mul(MULT_A);
            v = v.wrapping_mul(hash_const);
            v ^ (v >> XSHIFT)
        };

        let mut pool = [0u32; POOL_SIZE];
        for (i, slot) in pool.iter_mut().enumerate() {
            *slot = hashmix(entropy.get(i).copied().unwrap_or(0));
        }

        for src in 0..POOL_SIZE {
            for dst in 0..POOL_SIZE {
                if src != dst {
                    let hashed = hashmix(pool[src]);
                    pool[dst] = mix(pool[dst], hashed);
                }
            }
        }

        for &word in entropy.iter().skip(POOL_SIZE) {
            for slot in pool.iter_mut() {
                let hashed = hashmix(word);
                *slot = mix(*slot, hashed);
            }
        }

        Self { pool }
    }

    /// Expand the pool into `n` 32-bit words
    pub fn generate_state_u32(&self, n: usize) -> Vec<u32> {
        let mut hash_const = INIT_B;
        (0..n)
            .map(|i| {
                let mut v = self.pool[i % POOL_SIZE] ^ hash_const;
                hash_const = hash_const.wrapping_mul(MULT_B);
                v = v.wrapping_mul(hash_const);
                v ^ (v >> XSHIFT)
            })
            .collect()
    }

    /// Expand the pool into `n` 64-bit words (pairs of 32-bit words, low first)
    pub fn generate_state_u64(&self, n: usize) -> Vec<u64> {
        self.generate_state_u32(2 * n)
            .chunks_exact(2)
            .map(|pair| u64::from(pair[0]) | (u64::from(pair[1]) << 32))
            .collect()
    }
}

fn mix(x: u32, y: u32) -> u32 {
    let r = MIX_MULT_L
        .wrapping_mul(x)
        .wrapping_sub(MIX_MULT_R.wrapping_mul(y));
    r ^ (r >> XSHIFT)
}

// ============================================================================
// Pcg64
// ============================================================================

/// PCG XSL-RR 128/64 generator with a 32-bit output buffer
///
/// The 128-bit core is `rand_pcg::Pcg64`. `next_u32` serves the low half of
/// one 64-bit output and then the high half.
/// Gantree: Pcg64 // 128비트 PCG
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pcg64 {
    core: rand_pcg::Pcg64,
    /// Upper half of the last 64-bit output, served by the next `next_u32`
    buffered: Option<u32>,
}

impl Pcg64 {
    /// Create from initial state and stream selector
    pub fn new(initstate: u128, initseq: u128) -> Self {
        Self {
            core: rand_pcg::Pcg64::new(initstate, initseq),
            buffered: None,
        }
    }

    /// Create from a seed sequence
    /// Gantree: from_seed_sequence(&SeedSequence) -> Self // 시드 시퀀스 초기화
    pub fn from_seed_sequence(seq: &SeedSequence) -> Self {
        let words = seq.generate_state_u64(4);
        Self::from_words([words[0], words[1], words[2], words[3]])
    }

    fn from_words(words: [u64; 4]) -> Self {
        let initstate = (u128::from(words[0]) << 64) | u128::from(words[1]);
        let initseq = (u128::from(words[2]) << 64) | u128::from(words[3]);
        Self::new(initstate, initseq)
    }
}

impl RngCore for Pcg64 {
    fn next_u32(&mut self) -> u32 {
        if let Some(upper) = self.buffered.take() {
            return upper;
        }
        let next = self.next_u64();
        self.buffered = Some((next >> 32) as u32);
        next as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.core.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Pcg64 {
    type Seed = [u8; 32];

    /// Seed bytes are read as four little-endian 64-bit state words
    fn from_seed(seed: Self::Seed) -> Self {
        let mut words = [0u64; 4];
        for (word, bytes) in words.iter_mut().zip(seed.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(bytes);
            *word = u64::from_le_bytes(buf);
        }
        Self::from_words(words)
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::from_seed_sequence(&SeedSequence::new(state))
    }
}

// ============================================================================
// Angle Sampling
// ============================================================================

/// Draw `count` angles uniformly from `[0, 2π)`
/// Gantree: uniform_angles(rng, count) -> Vec<Angle> // 각도 샘플링
pub fn uniform_angles<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Angle> {
    (0..count).map(|_| math::TWO_PI * rng.gen::<f64>()).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_seed_sequence_words() {
        let words = SeedSequence::new(10).generate_state_u64(4);
        assert_eq!(
            words,
            vec![
                0x9a5a_02d3_d255_c0bb,
                0xa33c_639b_db7c_0661,
                0xba5e_2ab7_dc44_67da,
                0x4097_1270_1d79_50e4
            ]
        );

        let zero = SeedSequence::new(0).generate_state_u64(2);
        assert_eq!(zero, vec![0xdb2c_d7e7_b0f4_78be, 0xabf4_641a_2c71_ba49]);
    }

    #[test]
    fn test_seed_sequence_wide_seed() {
        let words = SeedSequence::new((1 << 40) + 7).generate_state_u64(4);
        assert_eq!(words[0], 0x0d86_72e1_0e3d_1a15);
        assert_eq!(words[3], 0x4089_27dc_0dc8_a316);
    }

    #[test]
    fn test_seed_sequence_u32_order() {
        let seq = SeedSequence::new(10);
        let words = seq.generate_state_u32(2);
        assert_eq!(words, vec![0xd255_c0bb, 0x9a5a_02d3]);
    }

    #[test]
    fn test_pcg_from_state_words() {
        let mut rng = Pcg64::new(
            0x9a5a_02d3_d255_c0bb_a33c_639b_db7c_0661,
            0xba5e_2ab7_dc44_67da_4097_1270_1d79_50e4,
        );
        assert_eq!(rng.next_u64(), 0xf4bc_872d_c6cb_2998);
        assert_eq!(rng, {
            let mut seeded = Pcg64::seed_from_u64(10);
            seeded.next_u64();
            seeded
        });
    }

    #[test]
    fn test_pcg_raw_output() {
        let mut rng = Pcg64::seed_from_u64(10);
        assert_eq!(rng.next_u64(), 0xf4bc_872d_c6cb_2998);
        assert_eq!(rng.next_u64(), 0x352a_a296_4396_c540);
        assert_eq!(rng.next_u64(), 0xd414_f6c8_cae6_a555);
    }

    #[test]
    fn test_uniform_draws_match_reference_stream() {
        let mut rng = Pcg64::seed_from_u64(10);
        let expected = [
            0.9560017096289753,
            0.20768181007914688,
            0.8284448852745308,
            0.14928212308202027,
            0.5128046164365648,
            0.13591960402050662,
        ];
        for &e in &expected {
            assert_relative_eq!(rng.gen::<f64>(), e);
        }

        let mut rng = Pcg64::seed_from_u64(42);
        for &e in &[
            0.7739560485559633,
            0.4388784397520523,
            0.8585979199113825,
            0.6973680290593639,
        ] {
            assert_relative_eq!(rng.gen::<f64>(), e);
        }

        let mut rng = Pcg64::seed_from_u64(0);
        assert_relative_eq!(rng.gen::<f64>(), 0.6369616873214543);
        assert_relative_eq!(rng.gen::<f64>(), 0.2697867137638703);
    }

    #[test]
    fn test_uniform_angles() {
        let mut rng = Pcg64::seed_from_u64(10);
        let angles = uniform_angles(&mut rng, 4);

        assert_relative_eq!(angles[0], 6.006735895579343);
        assert_relative_eq!(angles[1], 1.304903297657757);
        assert_relative_eq!(angles[2], 5.205272730965009);
        assert_relative_eq!(angles[3], 0.9379672423735244);
    }

    #[test]
    fn test_angles_in_unit_turn() {
        let mut rng = Pcg64::seed_from_u64(10);
        let angles = uniform_angles(&mut rng, 1000);
        assert!(angles.iter().all(|&a| math::is_unit_turn(a)));
    }

    #[test]
    fn test_next_u32_splits_u64() {
        let mut a = Pcg64::seed_from_u64(7);
        let mut b = a.clone();

        let full = a.next_u64();
        assert_eq!(b.next_u32(), full as u32);
        assert_eq!(b.next_u32(), (full >> 32) as u32);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_from_seed_matches_words() {
        let words = SeedSequence::new(10).generate_state_u64(4);
        let mut seed = [0u8; 32];
        for (chunk, word) in seed.chunks_exact_mut(8).zip(&words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }

        let mut a = Pcg64::from_seed(seed);
        let mut b = Pcg64::seed_from_u64(10);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_fill_bytes() {
        let mut a = Pcg64::seed_from_u64(3);
        let mut b = a.clone();

        let mut buf = [0u8; 12];
        a.fill_bytes(&mut buf);
        assert_eq!(&buf[..8], &b.next_u64().to_le_bytes());
        assert_eq!(&buf[8..], &b.next_u64().to_le_bytes()[..4]);
    }
}
