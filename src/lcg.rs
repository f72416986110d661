use super::mulmod::{Limbs, add_carry, add_overflow, at_least_m, compute_r, high_bits, sub_carry, sub_overflow};

// This module converts between the two views of the generator state.
//
// The RANLUX view is the 576-bit buffer of the subtract-with-borrow generator
// plus its carry bit. These are the bits we hand out.
// The LCG view is a residue x in 0 .. m, which we can advance by
// any number of steps with a single modular multiplication.
//
// Taking output bits from x directly would be biased, as x never reaches
// the top of the 576-bit range. The RANLUX view is uniform in every bit.

/// Converts a RANLUX state with carry bit c into the equivalent LCG state,
/// x = ranlux - (ranlux >> 336) + c.
pub fn to_lcg(ranlux: &Limbs, c: u64) -> Limbs {
    let mut lcg: Limbs = [0; 9];

    // Subtract the top 240 bits.
    let mut carry = 0;
    for i in 0 .. 9 {
        let (lcg_i, borrow) = sub_overflow(ranlux[i], carry);
        carry = borrow;
        lcg[i] = sub_carry(lcg_i, high_bits(ranlux, i), &mut carry);
    }

    // Add and propagate the carry bit.
    let mut carry = c;
    for limb in lcg.iter_mut() {
        let (sum, overflow) = add_overflow(*limb, carry);
        *limb = sum;
        carry = overflow;
    }
    lcg
}

/// Converts an LCG state, which must be less than m, into the equivalent RANLUX state.
/// Returns the 576 RANLUX bits and the carry bit.
pub fn to_ranlux(lcg: &Limbs) -> (Limbs, u64) {
    debug_assert!(!at_least_m(lcg), "LCG state out of range!");

    // The RANLUX bits are floor(lcg * 2**576 / m) = lcg + (lcg >> 336) + c,
    // where c in -1 ..= 1 is the multiple of 2**576 left over by compute_r.
    let mut r: Limbs = [0; 9];
    let c = compute_r(lcg, &mut r);

    let mut ranlux: Limbs = [0; 9];
    let mut carry: u64 = 0;
    for i in 0 .. 9usize {
        let (ranlux_i, overflow) = add_overflow(lcg[i], carry);
        carry = overflow;
        ranlux[i] = add_carry(ranlux_i, high_bits(lcg, i), &mut carry);
    }

    // c may be -1, in which case it is added sign extended to all limbs.
    let c_high = (c >> 1) as u64;
    let (ranlux_0, overflow) = add_overflow(ranlux[0], c as u64);
    ranlux[0] = ranlux_0;
    carry = overflow;
    for i in 1 .. 9usize {
        let (ranlux_i, overflow) = add_overflow(ranlux[i], carry);
        carry = overflow;
        ranlux[i] = add_carry(ranlux_i, c_high, &mut carry);
    }

    // The carry bit is whatever to_lcg needs on top of the bits, lcg - (ranlux - (ranlux >> 336)).
    // It is 0 or 1. The carry out of the sum above does not give it near m.
    let carry = (to_lcg(&ranlux, 0) != *lcg) as u64;
    debug_assert!(to_lcg(&ranlux, carry) == *lcg, "RANLUX conversion is not exact!");

    (ranlux, carry)
}

#[cfg(test)] mod tests {
    use super::*;
    use super::super::*;
    use super::super::mulmod::{canonical, mulmod, ONE};

    /// Returns the k-th 24-bit number of a RANLUX state.
    fn number(x: &Limbs, k: usize) -> i64 {
        let bit = 24 * k;
        let (i, shift) = (bit / 64, bit % 64);
        let mut bits = x[i] >> shift;
        if shift > 40 {
            bits |= x[i + 1] << (64 - shift);
        }
        (bits & 0xffffff) as i64
    }

    #[test] pub fn small_states() {
        // Values below 2**336 map to themselves.
        let (ranlux, c) = to_ranlux(&ONE);
        assert_eq!(ONE, ranlux);
        assert_eq!(0, c);
        assert_eq!(ONE, to_lcg(&ranlux, c));

        let zero: Limbs = [0; 9];
        assert_eq!((zero, 0), to_ranlux(&zero));
        assert_eq!(zero, to_lcg(&zero, 0));
    }

    #[test] pub fn carry_states() {
        // 2**336 needs the carry bit.
        let x: Limbs = [0, 0, 0, 0, 0, 0x10000, 0, 0, 0];
        let (ranlux, c) = to_ranlux(&x);
        assert_eq!(x, ranlux);
        assert_eq!(1, c);
        assert_eq!(x, to_lcg(&ranlux, c));

        // The largest residue, m - 1.
        let mut x = MODULUS;
        x[0] = 0;
        let (ranlux, c) = to_ranlux(&x);
        let mut expected = [u64::MAX; 9];
        expected[0] = 0xfffffffffffffffe;
        assert_eq!(expected, ranlux);
        assert_eq!(1, c);
        assert_eq!(x, to_lcg(&ranlux, c));
    }

    #[test] pub fn near_modulus_states() {
        // m - 2**336 + 1: the carry out of the conversion sum is 0 but the carry bit is 1.
        let x: Limbs = [2, 0, 0, 0xffff000000000000, u64::MAX, 0xfffffffffffeffff, u64::MAX, u64::MAX, u64::MAX];
        let (ranlux, c) = to_ranlux(&x);
        assert_eq!([0, 0, 0, 0, 0, 0xffffffffffff0000, u64::MAX, u64::MAX, u64::MAX], ranlux);
        assert_eq!(1, c);
        assert_eq!(x, to_lcg(&ranlux, c));

        let x: Limbs = [1, 0x800, 0, 0xfffeffff00000000, u64::MAX, 0xffffffff7fffffff, u64::MAX, u64::MAX, u64::MAX];
        let (ranlux, c) = to_ranlux(&x);
        assert_eq!([0xffffffffffff7fff, 0x7ff, 0, 0xffffffff00000000, u64::MAX, 0xffffffff7fffffff, u64::MAX, u64::MAX, u64::MAX], ranlux);
        assert_eq!(1, c);
        assert_eq!(x, to_lcg(&ranlux, c));

        // One cleared bit in the top 336 and a single low bit set, for every such pair.
        for high in 240 .. 576 {
            for low in [0, 1, 11, 100, 200, 239] {
                let mut x: Limbs = [0; 9];
                x[3] = 0xffff000000000000;
                for limb in x[4 ..].iter_mut() { *limb = u64::MAX; }
                x[high / 64] ^= 1u64 << (high % 64);
                x[low / 64] |= 1u64 << (low % 64);
                let (ranlux, c) = to_ranlux(&x);
                assert!(c <= 1);
                assert_eq!(x, to_lcg(&ranlux, c));
            }
        }
    }

    #[test] pub fn run_tests() {

        let mut r: u64 = 0;
        let mut rnd = || -> u64 { r = r.wrapping_mul(0xd1342543de82ef95).wrapping_add(0xffff); r };

        for i in 0 .. 1<<12 {
            let mut x: Limbs = [0; 9];
            for limb in x.iter_mut() { *limb = rnd(); }
            if i & 1 == 1 {
                // Also cover residues just below m, with nearly all of the top 336 bits set.
                x[3] |= 0xffff000000000000;
                for limb in x[4 ..].iter_mut() { *limb = u64::MAX; }
                x[4 + (rnd() % 5) as usize] ^= 1u64 << (rnd() % 64);
                if i & 2 == 2 {
                    // Sparse low bits.
                    x[3] &= 0xffff000000000000;
                    for limb in x[.. 3].iter_mut() { *limb = 0; }
                    for _ in 0 .. rnd() % 4 {
                        let bit = (rnd() % 240) as usize;
                        x[bit / 64] |= 1u64 << (bit % 64);
                    }
                }
            }
            let x = canonical(&x);

            let (ranlux, c) = to_ranlux(&x);
            assert!(c <= 1);
            assert_eq!(x, to_lcg(&ranlux, c));

            // One LCG step by a is one subtract-with-borrow step in the RANLUX view:
            // the 24-bit numbers move down by one and the new top number is
            // x[14] - x[0] - c, with the borrow as the new carry.
            let (next, c_next) = to_ranlux(&canonical(&mulmod(&A_1, &x)));
            for k in 0 .. 23 {
                assert_eq!(number(&ranlux, k + 1), number(&next, k));
            }
            let top = number(&ranlux, 14) - number(&ranlux, 0) - c as i64;
            assert_eq!(top.rem_euclid(1 << 24), number(&next, 23));
            assert_eq!((top < 0) as u64, c_next);
        }
    }
}
