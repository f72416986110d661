/// Conversion of `bits`-bit output words to floating point numbers in [0, 1).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Conversion {
    /// Multiplies the word by 2**-bits. This is exact and has no directional bias.
    Scale,
    /// Puts the word in the top mantissa bits of a number in [1, 2), then subtracts 1.
    /// Words wider than the 52-bit mantissa lose their low bits.
    Mantissa,
}

impl Default for Conversion {
    fn default() -> Self {
        Conversion::Scale
    }
}

impl Conversion {
    /// Converts a `bits`-bit word. Requires 0 < bits <= 64.
    #[inline]
    pub fn to_f64(self, word: u64, bits: usize) -> f64 {
        match self {
            Conversion::Scale => {
                // Keep at most 53 bits so the word converts exactly.
                let (word, bits) = if bits > 53 { (word >> (bits - 53), 53) } else { (word, bits) };
                word as f64 / ((1u64 << bits) as f64)
            }
            Conversion::Mantissa => {
                const ONE: u64 = 0x3ff0000000000000;
                let mantissa = if bits <= 52 { word << (52 - bits) } else { word >> (bits - 52) };
                f64::from_bits(ONE | mantissa) - 1.0
            }
        }
    }
}

#[cfg(test)] mod tests {
    use super::*;

    #[test] pub fn run_tests() {
        assert_eq!(0.0, Conversion::Scale.to_f64(0, 48));
        assert_eq!(0.5, Conversion::Scale.to_f64(1 << 47, 48));
        assert_eq!(0.5, Conversion::Mantissa.to_f64(1 << 47, 48));
        assert_eq!(0.5, Conversion::Mantissa.to_f64(1 << 23, 24));
        assert_eq!(1.0 - 1.0 / 16777216.0, Conversion::Scale.to_f64(0xffffff, 24));
        assert!(Conversion::Scale.to_f64(u64::MAX >> 16, 48) < 1.0);
        assert!(Conversion::Mantissa.to_f64(u64::MAX, 64) < 1.0);
        assert!(Conversion::Scale.to_f64(u64::MAX, 64) < 1.0);

        let mut r: u64 = 0;
        for _ in 0 .. 1<<12 {
            r = r.wrapping_mul(0xd1342543de82ef95).wrapping_add(0xffff);
            for &bits in &[24, 48, 52] {
                let word = r >> (64 - bits);
                let x = Conversion::Scale.to_f64(word, bits);
                assert!((0.0 .. 1.0).contains(&x));
                // Both conversions are exact for words that fit the mantissa.
                assert_eq!(x.to_bits(), Conversion::Mantissa.to_f64(word, bits).to_bits());
                assert_eq!(word, (x * ((1u64 << bits) as f64)) as u64);
            }
        }
    }
}
