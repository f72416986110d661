use wrapping_arithmetic::wrappit;

// This module contains arithmetic modulo m = 2**576 - 2**240 + 1
// on numbers stored as nine 64-bit limbs, least significant limb first.
// Reduction uses 2**576 = 2**240 - 1 (mod m) instead of division.

/// A 576-bit number.
pub type Limbs = [u64; 9];

/// A 1152-bit number, the full product of two `Limbs`.
pub type WideLimbs = [u64; 18];

/// The number 1.
pub const ONE: Limbs = [1, 0, 0, 0, 0, 0, 0, 0, 0];

/// Returns a + b and the overflow (0 or 1).
#[wrappit] #[inline]
pub(crate) fn add_overflow(a: u64, b: u64) -> (u64, u64) {
    let sum = a + b;
    (sum, (sum < a) as u64)
}

/// Returns a - b and the borrow (0 or 1).
#[wrappit] #[inline]
pub(crate) fn sub_overflow(a: u64, b: u64) -> (u64, u64) {
    let difference = a - b;
    (difference, (difference > a) as u64)
}

/// Returns a + b and increments carry on overflow.
#[inline]
pub(crate) fn add_carry(a: u64, b: u64, carry: &mut u64) -> u64 {
    let (sum, overflow) = add_overflow(a, b);
    *carry += overflow;
    sum
}

/// Returns a - b and increments carry on borrow.
#[inline]
pub(crate) fn sub_carry(a: u64, b: u64, carry: &mut u64) -> u64 {
    let (difference, borrow) = sub_overflow(a, b);
    *carry += borrow;
    difference
}

/// Limb i of x >> 336, that is, of the top 240 bits of x.
#[inline]
pub(crate) fn high_bits(x: &Limbs, i: usize) -> u64 {
    match i {
        0 ..= 2 => (x[i + 5] >> 16) | (x[i + 6] << 48),
        3 => x[8] >> 16,
        _ => 0,
    }
}

/// Limb i of (x mod 2**336) << 240.
#[inline]
fn low_bits_shifted(x: &Limbs, i: usize) -> u64 {
    match i {
        0 ..= 2 => 0,
        3 => x[0] << 48,
        _ => (x[i - 4] >> 16) | (x[i - 3] << 48),
    }
}

/// Limb i of (x >> 336) << 240.
#[inline]
fn high_bits_shifted(x: &Limbs, i: usize) -> u64 {
    match i {
        0 ..= 2 => 0,
        3 => (x[5] >> 16) << 48,
        4 ..= 6 => (x[i + 1] >> 32) | (x[i + 2] << 32),
        7 => x[8] >> 32,
        _ => 0,
    }
}

/// Multiplies two 576-bit numbers. The product is exact.
#[wrappit]
pub fn multiply9x9(a: &Limbs, b: &Limbs) -> WideLimbs {
    let mut out: WideLimbs = [0; 18];
    let mut next: u64 = 0;
    let mut next_carry: u64 = 0;

    for i in 0 .. 18usize {
        let mut current = next;
        let mut carry = next_carry;
        next = 0;
        next_carry = 0;

        let j_first = if i < 9 { 0 } else { i - 8 };
        let j_last = if i < 9 { i } else { 8 };
        for j in j_first ..= j_last {
            // We get a widening 64-to-128-bit multiply by casting the arguments from 64 bits.
            let product = (a[j] as u128) * (b[i - j] as u128);
            current = add_carry(current, product as u64, &mut carry);
            next = add_carry(next, (product >> 64) as u64, &mut next_carry);
        }

        // Overflows of the current limb go to the next one.
        next = add_carry(next, carry, &mut next_carry);
        out[i] = current;
    }
    out
}

/// Sets r to r - (t1 + t2) + (t3 + t2) * 2**240, where t1 = upper,
/// t2 = upper >> 336 and t3 = upper mod 2**336.
/// This is congruent to r + upper * 2**576 modulo m.
/// Returns the multiple of 2**576 that fell outside r, in -1 ..= 1.
pub(crate) fn compute_r(upper: &Limbs, r: &mut Limbs) -> i64 {
    // Subtract t1.
    let mut carry = 0;
    for i in 0 .. 9 {
        let (r_i, borrow) = sub_overflow(r[i], carry);
        carry = borrow;
        r[i] = sub_carry(r_i, upper[i], &mut carry);
    }
    let mut c = -(carry as i64);

    // Subtract t2.
    carry = 0;
    for i in 0 .. 9 {
        let (r_i, borrow) = sub_overflow(r[i], carry);
        carry = borrow;
        r[i] = sub_carry(r_i, high_bits(upper, i), &mut carry);
    }
    c -= carry as i64;

    // Add (t3 + t2) * 2**240, which starts at limb 3.
    carry = 0;
    for i in 3 .. 9 {
        let (r_i, overflow) = add_overflow(r[i], carry);
        carry = overflow;
        let r_i = add_carry(r_i, high_bits_shifted(upper, i), &mut carry);
        r[i] = add_carry(r_i, low_bits_shifted(upper, i), &mut carry);
    }
    c + carry as i64
}

/// Returns whether x >= m. This holds if and only if the top 336 bits
/// are all set and some of the low 240 bits are set.
pub(crate) fn at_least_m(x: &Limbs) -> bool {
    let low = x[0] | x[1] | x[2] | (x[3] & 0x0000ffffffffffff);
    low != 0 && (x[3] >> 48) == 0xffff && x[4 ..].iter().all(|&limb| limb == u64::MAX)
}

/// Returns r - c * m modulo 2**576 for c in -1 ..= 1.
#[wrappit]
fn subtract_multiple(r: &Limbs, c: i64) -> Limbs {
    // Mod 2**576, c * m is c * (1 - 2**240). Limb patterns by c:
    // c =  0: all zero.
    // c =  1: limb 0 is 1, bits 240 and up are set.
    // c = -1: bits below 240 are set.
    let t0 = c >> 1;
    let t2 = t0 - ((c as u64) << 48) as i64;
    let t1 = t2 >> 48;

    let mut out: Limbs = [0; 9];
    let mut carry: u64 = 0;
    for i in 0 .. 9usize {
        let pattern = match i {
            0 => c as u64,
            1 | 2 => t0 as u64,
            3 => t2 as u64,
            _ => t1 as u64,
        };
        let (r_i, borrow) = sub_overflow(r[i], carry);
        carry = borrow;
        out[i] = sub_carry(r_i, pattern, &mut carry);
    }
    out
}

/// Returns a number less than 2**576 that is congruent to mul modulo m.
/// The result is not necessarily the least residue:
/// values in m .. 2**576 are left as they are.
pub fn mod_m(mul: &WideLimbs) -> Limbs {
    let mut r: Limbs = [0; 9];
    let mut upper: Limbs = [0; 9];
    r.copy_from_slice(&mul[.. 9]);
    upper.copy_from_slice(&mul[9 ..]);
    let c = compute_r(&upper, &mut r);
    subtract_multiple(&r, c)
}

/// Returns a * b modulo m. Like `mod_m`, the result is not necessarily the least residue.
#[inline]
pub fn mulmod(a: &Limbs, b: &Limbs) -> Limbs {
    mod_m(&multiply9x9(a, b))
}

/// Returns base**n modulo m. Like `mod_m`, the result is not necessarily the least residue.
/// The base is copied before any work, so `x = powermod(&x, n)` is fine.
pub fn powermod(base: &Limbs, n: u64) -> Limbs {
    let factor = *base;
    let mut result = ONE;
    if n == 0 {
        return result;
    }
    // Square and multiply, from the highest set bit down.
    let top = 63 - n.leading_zeros();
    for bit in (0 ..= top).rev() {
        result = mulmod(&result, &result);
        if (n >> bit) & 1 == 1 {
            result = mulmod(&result, &factor);
        }
    }
    result
}

/// Returns the least residue of x modulo m.
pub fn canonical(x: &Limbs) -> Limbs {
    if !at_least_m(x) {
        return *x;
    }
    // x < 2**576 < 2 * m, so one subtraction suffices.
    let mut out: Limbs = [0; 9];
    let mut carry = 0;
    for i in 0 .. 9 {
        let (x_i, borrow) = sub_overflow(x[i], carry);
        carry = borrow;
        out[i] = sub_carry(x_i, super::MODULUS[i], &mut carry);
    }
    out
}
