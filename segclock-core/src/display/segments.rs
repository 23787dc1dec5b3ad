//! Segment lookup table
//!
//! Maps the closed set of displayable symbols to segment patterns for a
//! common-anode display. Bit layout is `dp,g,f,e,d,c,b,a` and a cleared bit
//! lights the segment:
//!
//! ```text
//!    aaa
//!   f   b
//!    ggg
//!   e   c
//!    ddd  dp
//! ```

/// Bit of the decimal point in an encoded pattern
pub const DOT_BIT: u8 = 0x80;

/// Displayable symbols, discriminant is the index into [`SEGMENT_TABLE`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Symbol {
    Zero = 0x00,
    One = 0x01,
    Two = 0x02,
    Three = 0x03,
    Four = 0x04,
    Five = 0x05,
    Six = 0x06,
    Seven = 0x07,
    Eight = 0x08,
    Nine = 0x09,
    A = 0x0A,
    B = 0x0B,
    C = 0x0C,
    D = 0x0D,
    E = 0x0E,
    F = 0x0F,
    Blank = 0x10,
    Dash = 0x11,
    /// Lowercase `h`
    H = 0x12,
    /// Decimal point only
    Dot = 0x13,
    L = 0x14,
    /// Lowercase `n`
    N = 0x15,
    /// Lowercase `o`
    O = 0x16,
    /// Lowercase `r`
    R = 0x17,
    /// Lowercase `t`
    T = 0x18,
    U = 0x19,
    /// Lowercase `u`
    SmallU = 0x1A,
    /// Lowercase `i`
    I = 0x1B,
    /// Three-legged approximation of `M`
    M = 0x1C,
    /// Uppercase `H`
    BigH = 0x1D,
    P = 0x1E,
}

/// Number of entries in the segment table
pub const SYMBOL_COUNT: usize = 0x1F;

/// Encoded pattern for every symbol, indexed by discriminant
pub const SEGMENT_TABLE: [u8; SYMBOL_COUNT] = [
    0b1100_0000, // 0
    0b1111_1001, // 1
    0b1010_0100, // 2
    0b1011_0000, // 3
    0b1001_1001, // 4
    0b1001_0010, // 5
    0b1000_0010, // 6
    0b1111_1000, // 7
    0b1000_0000, // 8
    0b1001_1000, // 9
    0b1000_1000, // A
    0b1000_0011, // b
    0b1100_0110, // C
    0b1010_0001, // d
    0b1000_0110, // E
    0b1000_1110, // F
    0b1111_1111, // ' '
    0b1011_1111, // '-'
    0b1000_1011, // h
    0b0111_1111, // '.'
    0b1100_0111, // L
    0b1010_1011, // n
    0b1010_0011, // o
    0b1010_1111, // r
    0b1000_0111, // t
    0b1100_0001, // U
    0b1110_0011, // u
    0b1111_1011, // i
    0b1100_1000, // M
    0b1000_1001, // H
    0b1000_1100, // P
];

const ALL: [Symbol; SYMBOL_COUNT] = [
    Symbol::Zero,
    Symbol::One,
    Symbol::Two,
    Symbol::Three,
    Symbol::Four,
    Symbol::Five,
    Symbol::Six,
    Symbol::Seven,
    Symbol::Eight,
    Symbol::Nine,
    Symbol::A,
    Symbol::B,
    Symbol::C,
    Symbol::D,
    Symbol::E,
    Symbol::F,
    Symbol::Blank,
    Symbol::Dash,
    Symbol::H,
    Symbol::Dot,
    Symbol::L,
    Symbol::N,
    Symbol::O,
    Symbol::R,
    Symbol::T,
    Symbol::U,
    Symbol::SmallU,
    Symbol::I,
    Symbol::M,
    Symbol::BigH,
    Symbol::P,
];

impl Symbol {
    /// Symbol for a decimal digit; values above 9 wrap
    pub const fn digit(value: u8) -> Self {
        ALL[(value % 10) as usize]
    }

    /// Symbol for the low hexadecimal nibble of `value`
    pub const fn hex(value: u8) -> Self {
        ALL[(value & 0x0F) as usize]
    }

    /// Encoded segment pattern with the decimal point off
    pub const fn encode(self) -> u8 {
        SEGMENT_TABLE[self as usize]
    }

    /// Encoded segment pattern, lighting the decimal point if `dot`
    pub const fn encode_with_dot(self, dot: bool) -> u8 {
        if dot {
            self.encode() & !DOT_BIT
        } else {
            self.encode()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_symbols() {
        for (i, symbol) in ALL.iter().enumerate() {
            assert_eq!(*symbol as usize, i);
            assert_eq!(symbol.encode(), SEGMENT_TABLE[i]);
        }
        assert_eq!(Symbol::digit(7), Symbol::Seven);
        assert_eq!(Symbol::digit(17), Symbol::Seven);
    }

    #[test]
    fn test_digit_patterns_unique() {
        for a in 0..10u8 {
            for b in (a + 1)..10 {
                assert_ne!(
                    Symbol::digit(a).encode(),
                    Symbol::digit(b).encode(),
                    "digits {} and {}",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_reference_patterns_are_fixed() {
        assert_eq!(Symbol::Zero.encode(), 0xC0);
        assert_eq!(Symbol::Eight.encode(), 0x80);
        assert_eq!(Symbol::Blank.encode(), 0xFF);
        assert_eq!(Symbol::Dash.encode(), 0xBF);
        assert_eq!(Symbol::H.encode(), 0x8B);
        assert_eq!(Symbol::Dot.encode(), 0x7F);
    }

    #[test]
    fn test_dot_clears_only_bit_seven() {
        for symbol in ALL {
            let plain = symbol.encode();
            let dotted = symbol.encode_with_dot(true);
            assert_eq!(dotted, plain & 0x7F);
            assert_eq!(symbol.encode_with_dot(false), plain);
        }
        assert_eq!(Symbol::Blank.encode_with_dot(true), Symbol::Dot.encode());
    }

    #[test]
    fn test_hex_uses_low_nibble() {
        assert_eq!(Symbol::hex(0x1B), Symbol::B);
        assert_eq!(Symbol::hex(0x0F), Symbol::F);
    }
}
