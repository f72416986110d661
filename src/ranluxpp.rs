use core::marker::PhantomData;
#[cfg(feature = "serde")] use serde::{Deserialize, Serialize};

use super::lcg::{to_lcg, to_ranlux};
use super::luxury::{Luxury, P218, P223, P389, P404, P778, P794, P2048};
use super::mulmod::{canonical, mulmod, powermod, Limbs, ONE};
use super::uniform::Conversion;

// RANLUX++ features
// -RANLUX output recast as an LCG on 576-bit numbers (Sibidanov 2017)
// -bit-identical to the subtract-with-borrow RANLUX sequence at the chosen luxury level
// -period of about 2**570 blocks
// -skipping n numbers costs O(log n) 576-bit multiplications
// -state is 576 bits, a carry bit and a bit position

/// Number of bits in the RANLUX state.
pub const MAX_POS: usize = 9 * 64;

/// RANLUX++ non-cryptographic RNG, generic over its configuration.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(bound = ""))]
#[derive(Clone, Eq, PartialEq)]
pub struct RanluxppEngine<L: Luxury> {
    /// RANLUX state.
    state: Limbs,
    /// Carry bit of the RANLUX state.
    carry: u64,
    /// Current position in bits.
    position: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    luxury: PhantomData<L>,
}

/// RANLUX++ with 48-bit output, p = 2048.
pub type Ranluxpp = RanluxppEngine<P2048>;
/// RANLUX++ with 48-bit output, p = 794.
pub type Ranluxpp794 = RanluxppEngine<P794>;
/// RANLUX++ with 48-bit output, p = 778, 11 words per block.
pub type Ranluxpp778 = RanluxppEngine<P778>;
/// RANLUX++ with 48-bit output, p = 404.
pub type Ranluxpp404 = RanluxppEngine<P404>;
/// RANLUX++ with 24-bit output, p = 389.
pub type Ranluxpp389 = RanluxppEngine<P389>;
/// RANLUX++ with 24-bit output, p = 223.
pub type Ranluxpp223 = RanluxppEngine<P223>;
/// RANLUX++ with 24-bit output, p = 218.
pub type Ranluxpp218 = RanluxppEngine<P218>;

// As recommended, this Debug implementation does not expose internal state.
impl<L: Luxury> core::fmt::Debug for RanluxppEngine<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "RanluxppEngine {{}}")
    }
}

impl<L: Luxury> RanluxppEngine<L> {

    /// Smallest output word.
    pub const MIN: u64 = 0;

    /// Largest output word.
    pub const MAX: u64 = u64::MAX >> (64 - L::BITS);

    /// Output words per block.
    const WORDS: usize = L::USED;

    /// Bits used from each block.
    const CAPACITY: usize = L::USED * L::BITS;

    /// Evaluating this fails the build for configurations whose words
    /// do not fit a u64 and whole bytes, or whose block does not fit the state.
    const VALID: () = assert!(
        L::BITS >= 8 && L::BITS <= 64 && L::USED >= 1 && L::USED * L::BITS <= MAX_POS,
        "unsupported RANLUX++ configuration"
    );

    /// Creates a new RNG from a 64-bit seed.
    /// Equal seeds give equal sequences.
    pub fn new(seed: u64) -> Self {
        let () = Self::VALID;
        let mut rng = RanluxppEngine { state: [0; 9], carry: 0, position: 0, luxury: PhantomData };
        rng.seed(seed);
        rng
    }

    /// Reseeds the RNG. The result is the same as from `new(seed)`.
    pub fn seed(&mut self, seed: u64) {
        // Start 2**96 * seed blocks after the LCG state 1.
        let a_seed = powermod(&L::MULTIPLIER, 1 << 48);
        let a_seed = powermod(&a_seed, 1 << 48);
        let a_seed = powermod(&a_seed, seed);
        self.set_lcg(&mulmod(&a_seed, &ONE));
        self.position = 0;
    }

    /// Stores an LCG state in RANLUX form.
    #[inline]
    fn set_lcg(&mut self, lcg: &Limbs) {
        let (state, carry) = to_ranlux(&canonical(lcg));
        self.state = state;
        self.carry = carry;
    }

    /// Multiplies the LCG state by the given factor.
    #[inline]
    fn multiply(&mut self, factor: &Limbs) {
        let lcg = to_lcg(&self.state, self.carry);
        self.set_lcg(&mulmod(factor, &lcg));
    }

    /// Advances to the next block. Remaining words in the current block are discarded.
    pub fn advance(&mut self) {
        self.multiply(&L::MULTIPLIER);
        self.position = 0;
    }

    /// Generates the next random word of `L::BITS` bits.
    #[inline]
    pub fn next(&mut self) -> u64 {
        if self.position + L::BITS > Self::CAPACITY {
            self.advance();
        }

        // The word may straddle two limbs.
        let index = self.position / 64;
        let offset = self.position % 64;
        let available = 64 - offset;

        let mut bits = self.state[index] >> offset;
        if available < L::BITS {
            bits |= self.state[index + 1] << available;
        }
        bits &= Self::MAX;

        self.position += L::BITS;
        debug_assert!(self.position <= Self::CAPACITY, "position out of range!");

        bits
    }

    /// Skips `n` random words without generating them.
    pub fn skip(&mut self, n: u64) {
        debug_assert!(self.position <= Self::CAPACITY, "position out of range!");
        let left = ((Self::CAPACITY - self.position) / L::BITS) as u64;
        if n < left {
            // Just skip the next few words in the current block.
            self.position += n as usize * L::BITS;
            return;
        }

        // Move past the current block, then over whole blocks.
        let n = n - left;
        let words = Self::WORDS as u64;
        let blocks = n / words;
        self.multiply(&powermod(&L::MULTIPLIER, blocks + 1));

        // Finally skip words in the new block.
        let remaining = n - blocks * words;
        self.position = remaining as usize * L::BITS;
        debug_assert!(self.position <= Self::CAPACITY, "position out of range!");
    }

    /// Generates a random number in [0, 1) with `L::BITS` bits of randomness.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.uniform_with(Conversion::Scale)
    }

    /// Generates a random number in [0, 1) using the given conversion.
    #[inline]
    pub fn uniform_with(&mut self, conversion: Conversion) -> f64 {
        conversion.to_f64(self.next(), L::BITS)
    }

    /// Returns at least `bits` random bits, concatenating whole words from lowest to highest.
    #[inline]
    fn next_bits(&mut self, bits: usize) -> u64 {
        let mut x = self.next();
        let mut filled = L::BITS;
        while filled < bits {
            x |= self.next() << filled;
            filled += L::BITS;
        }
        x
    }
}

impl<L: Luxury> Default for RanluxppEngine<L> {
    /// Creates a new RNG with the default seed.
    fn default() -> Self {
        Self::new(super::DEFAULT_SEED)
    }
}

use super::{RngCore, Error, SeedableRng};

impl<L: Luxury> RngCore for RanluxppEngine<L> {
    fn next_u32(&mut self) -> u32 {
        self.next_bits(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_bits(64)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let () = Self::VALID;
        // Whole bytes of each word are used, always Little-Endian.
        for chunk in dest.chunks_mut(L::BITS / 8) {
            let x = self.next();
            chunk.copy_from_slice(&x.to_le_bytes()[.. chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl<L: Luxury> SeedableRng for RanluxppEngine<L> {
    type Seed = [u8; 8];

    /// Creates a new RNG from a Little-Endian 64-bit seed.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    /// Creates a new RNG from a 64-bit seed. Same as `new(state)`.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
