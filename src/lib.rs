#![no_std]

pub mod lcg;
pub mod luxury;
pub mod mulmod;
pub mod ranluxpp;
pub mod uniform;

pub use luxury::*;
pub use mulmod::{Limbs, WideLimbs};
pub use ranluxpp::*;
pub use uniform::*;
pub use rand_core::*;

// RANLUX++ from Sibidanov, A., A revision of the subtract-with-borrow
// random number generators, Computer Physics Communications 221 (2017).
// RANLUX with base b = 2**24 and lags (24, 10) is an LCG modulo
// m = b**24 - b**10 + 1 = 2**576 - 2**240 + 1.
// Limbs are stored least significant first.

/// Default seed.
pub const DEFAULT_SEED: u64 = 314159265;

/// The modulus m = 2**576 - 2**240 + 1.
pub const MODULUS: Limbs = [
    0x0000000000000001, 0x0000000000000000, 0x0000000000000000,
    0xffff000000000000, 0xffffffffffffffff, 0xffffffffffffffff,
    0xffffffffffffffff, 0xffffffffffffffff, 0xffffffffffffffff,
];

/// LCG multiplier of a single subtract-with-borrow step, a = m - (m - 1) / 2**24.
pub const A_1: Limbs = [
    0x0000000000000001, 0x0000000000000000, 0x0000000000000000,
    0xffff000001000000, 0xffffffffffffffff, 0xffffffffffffffff,
    0xffffffffffffffff, 0xffffffffffffffff, 0xfffffeffffffffff,
];

// LCG multipliers a**p mod m for luxury levels p.

pub const A_218: Limbs = [
    0xf445fffffffffd94, 0xfffffd74ffffffff, 0x000000000ba5ffff,
    0xfc76000000000942, 0xfffffaaaffffffff, 0x0000000000b0ffff,
    0x027b0000000007d1, 0xfffff96000000000, 0xfffffffff8e4ffff,
];

pub const A_223: Limbs = [
    0x0000000ba6000000, 0x0a00000000094200, 0xffeef0fffffffffa,
    0xfffffffe25ffffff, 0x7b0000000007d0ff, 0xfff9600000000002,
    0xfffffff8e4ffffff, 0xba00000000026cff, 0x00028b000000000b,
];

pub const A_389: Limbs = [
    0x00002ecac9000000, 0x740000002c389600, 0xb9c8a6ffffffe525,
    0xfffff593cfffffff, 0xab0000001e93f2ff, 0xe4ab160000000d92,
    0xffffdf6604ffffff, 0x020000000b9242ff, 0x0df0600000002ee0,
];

pub const A_404: Limbs = [
    0x2eabffffffc9d08b, 0x00012612ffffff99, 0x0000007c3ebe0000,
    0x353600000047bba1, 0xffd3c769ffffffd1, 0x0000001ada8bffff,
    0x6c30000000463759, 0xffb2a1440000000a, 0xffffffc634beffff,
];

pub const A_778: Limbs = [
    0x872de42d9dca512b, 0xdbf015ea1662f8a0, 0x01f48f0d28482e96,
    0x392fca0b3be2ae04, 0xed00881af896ce54, 0x14f0a768664013f3,
    0x9489f52deb1f7f80, 0x72139804e09c0f37, 0x2146b0bb92a2f9a4,
];

pub const A_794: Limbs = [
    0x428df7227a2ca7c9, 0xde32225faaa74b1a, 0x4b9d965ca1ebd668,
    0x78d15f59e58e2aff, 0x240fea15e99d075f, 0xfe0b70f2d7b7d169,
    0x75a535f4c41d51fb, 0x1a5ef0b7233b93e1, 0xbc787ca783d5d5a9,
];

pub const A_2048: Limbs = [
    0xed7faa90747aaad9, 0x4cec2c78af55c101, 0xe64dcb31c48228ec,
    0x6d8a15a13bee7cb0, 0x20b2ca60cb78c509, 0x256c3d3c662ea36c,
    0xff74e54107684ed2, 0x492edfcc0cc8e753, 0xb48c187cf5b22097,
];
