use super::mulmod::Limbs;

/// Generator configuration.
///
/// A block is the 576-bit RANLUX state. Advancing to the next block
/// runs the underlying subtract-with-borrow generator `P` steps at once,
/// which is a single multiplication by `MULTIPLIER` in the LCG view.
///
/// Word width must be in 8 ..= 64 and `USED * BITS` must fit in 576 bits;
/// `RanluxppEngine` refuses to compile otherwise.
///
/// ```compile_fail
/// use rand_ranluxpp::*;
///
/// #[derive(Clone, PartialEq, Eq)]
/// struct Nibbles;
///
/// impl Luxury for Nibbles {
///     const BITS: usize = 4;
///     const P: u64 = 1;
///     const MULTIPLIER: Limbs = A_1;
/// }
///
/// let mut rng = RanluxppEngine::<Nibbles>::new(1);
/// let mut bytes = [0u8; 4];
/// rng.fill_bytes(&mut bytes);
/// ```
pub trait Luxury: Clone + Eq {
    /// Bits per output word.
    const BITS: usize;
    /// Words taken from each block, starting from the lowest bits.
    /// By default the block is used whole.
    const USED: usize = 576 / Self::BITS;
    /// Luxury level: subtract-with-borrow steps per block.
    const P: u64;
    /// LCG multiplier, a**P mod m.
    const MULTIPLIER: Limbs;
}

/// RANLUX++: 48-bit words, p = 2048.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct P2048;

impl Luxury for P2048 {
    const BITS: usize = 48;
    const P: u64 = 2048;
    const MULTIPLIER: Limbs = super::A_2048;
}

/// 48-bit words, p = 794, the luxury level of ranlxd2.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct P794;

impl Luxury for P794 {
    const BITS: usize = 48;
    const P: u64 = 794;
    const MULTIPLIER: Limbs = super::A_794;
}

/// 48-bit words, p = 778, 11 words per block.
/// This is the block layout of `std::ranlux48`: 389 steps of its 48-bit
/// generator are 778 steps of the 24-bit one, and only 11 of the 12 words are used.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct P778;

impl Luxury for P778 {
    const BITS: usize = 48;
    const USED: usize = 11;
    const P: u64 = 778;
    const MULTIPLIER: Limbs = super::A_778;
}

/// 48-bit words, p = 404, the luxury level of ranlxd1.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct P404;

impl Luxury for P404 {
    const BITS: usize = 48;
    const P: u64 = 404;
    const MULTIPLIER: Limbs = super::A_404;
}

/// 24-bit words, p = 389, luxury level 4 of James' RANLUX.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct P389;

impl Luxury for P389 {
    const BITS: usize = 24;
    const P: u64 = 389;
    const MULTIPLIER: Limbs = super::A_389;
}

/// 24-bit words, p = 223, luxury level 3 of James' RANLUX.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct P223;

impl Luxury for P223 {
    const BITS: usize = 24;
    const P: u64 = 223;
    const MULTIPLIER: Limbs = super::A_223;
}

/// 24-bit words, p = 218, the luxury level of ranlxs0.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct P218;

impl Luxury for P218 {
    const BITS: usize = 24;
    const P: u64 = 218;
    const MULTIPLIER: Limbs = super::A_218;
}
