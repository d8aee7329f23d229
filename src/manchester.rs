//! # Bi-phase (Manchester) bitstream writer
//!
//! RC5 and RC6 modulate each data bit as a mid-bit transition. The two
//! families use opposite conventions: RC5 encodes a logical one as
//! space-then-mark, RC6 as mark-then-space. [`Manchester`] accumulates
//! half-bits (with an explicit width so RC6's double-size trailer bit is
//! just a wider pair) and [`Manchester::write_to`] collapses runs of equal
//! half-bits into Pronto mark/space words.

use log::trace;

use crate::pronto::IrCode;

/// Which half-bit pattern means a logical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BiphaseConvention {
    /// RC5: logical one is space-then-mark (`01`), zero is mark-then-space.
    Rc5,
    /// RC6: logical one is mark-then-space (`10`), zero is space-then-mark.
    Rc6,
}

#[derive(Debug, Clone, Copy)]
struct Half {
    mark: bool,
    units: u32,
}

pub(crate) struct Manchester {
    convention: BiphaseConvention,
    halves: Vec<Half>,
}

impl Manchester {
    pub fn new(convention: BiphaseConvention) -> Self {
        Self {
            convention,
            halves: Vec::new(),
        }
    }

    /// Appends one bit as two single-width half-bits.
    pub fn push_bit(&mut self, bit: bool) {
        self.push_bit_wide(bit, 1);
    }

    /// Appends one bit whose half-bits are `units` wide. RC6's trailer
    /// (toggle) bit is double width.
    pub fn push_bit_wide(&mut self, bit: bool, units: u32) {
        let first_is_mark = match self.convention {
            BiphaseConvention::Rc5 => !bit,
            BiphaseConvention::Rc6 => bit,
        };
        self.halves.push(Half {
            mark: first_is_mark,
            units,
        });
        self.halves.push(Half {
            mark: !first_is_mark,
            units,
        });
    }

    /// Appends the lowest `bits` bits of `value`, top bit first.
    pub fn push_bits_msb(&mut self, value: u32, bits: u32) {
        for i in (0..bits).rev() {
            self.push_bit(value >> i & 1 == 1);
        }
    }

    /// Collapses the half-bit stream into mark/space words on `code`.
    ///
    /// Equal neighbouring half-bits merge into one wider run; runs then
    /// alternate mark/space by construction. Pronto expects the stream to
    /// open with a pulse, so a leading space half-bit (RC5's first start
    /// bit) is dropped, and a trailing space run gets a one-unit mark
    /// appended so the frame-length pad stays the only trailing space.
    pub fn write_to(&self, code: &mut IrCode) {
        let mut stream = String::with_capacity(self.halves.len());
        for half in &self.halves {
            stream.push(if half.mark { '1' } else { '0' });
        }
        trace!("manchester half-bits {stream}");

        let mut runs: Vec<(bool, u32)> = Vec::with_capacity(self.halves.len());
        let skip = usize::from(self.halves.first().is_some_and(|h| !h.mark));
        for half in &self.halves[skip..] {
            match runs.last_mut() {
                Some((mark, units)) if *mark == half.mark => *units += half.units,
                _ => runs.push((half.mark, half.units)),
            }
        }
        if runs.last().is_some_and(|&(mark, _)| !mark) {
            runs.push((true, 1));
        }
        for (_, units) in runs {
            code.run(units);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ProntoClock;

    fn rc5_code() -> IrCode {
        IrCode::new(ProntoClock::new(36_000.0, 32))
    }

    #[test]
    fn test_rc5_conventions() {
        let mut man = Manchester::new(BiphaseConvention::Rc5);
        man.push_bit(true);
        man.push_bit(false);
        let halves: Vec<bool> = man.halves.iter().map(|h| h.mark).collect();
        assert_eq!(halves, vec![false, true, true, false]);
    }

    #[test]
    fn test_rc6_conventions_are_reversed() {
        let mut man = Manchester::new(BiphaseConvention::Rc6);
        man.push_bit(true);
        man.push_bit(false);
        let halves: Vec<bool> = man.halves.iter().map(|h| h.mark).collect();
        assert_eq!(halves, vec![true, false, false, true]);
    }

    #[test]
    fn test_collapse_drops_leading_space_half() {
        // RC5 start bit "01": the leading space is skipped so the code
        // starts with a pulse.
        let mut man = Manchester::new(BiphaseConvention::Rc5);
        man.push_bit(true);
        man.push_bit(true);
        let mut code = rc5_code();
        man.write_to(&mut code);
        // halves 0,1,0,1 -> skip -> 1 | 0 | 1, ends on mark
        assert_eq!(code.into_words(), vec![0x0020, 0x0020, 0x0020]);
    }

    #[test]
    fn test_collapse_merges_equal_halves() {
        // "10" then "01" leaves two equal spaces in the middle.
        let mut man = Manchester::new(BiphaseConvention::Rc5);
        man.push_bit(false);
        man.push_bit(true);
        let mut code = rc5_code();
        man.write_to(&mut code);
        assert_eq!(code.into_words(), vec![0x0020, 0x0040, 0x0020]);
    }

    #[test]
    fn test_collapse_appends_mark_after_trailing_space() {
        // A lone zero bit under RC5 is "10": mark, space. The collapser
        // must close on a mark.
        let mut man = Manchester::new(BiphaseConvention::Rc5);
        man.push_bit(false);
        let mut code = rc5_code();
        man.write_to(&mut code);
        assert_eq!(code.into_words(), vec![0x0020, 0x0020, 0x0020]);
    }

    #[test]
    fn test_double_width_trailer_merges_into_neighbours() {
        // RC6 mode-bit tail '...1' followed by a double-width toggle 0
        // ("01" at two units) gives the characteristic 1,(2),(2+n) widths.
        let mut man = Manchester::new(BiphaseConvention::Rc6);
        man.push_bit(true); // start
        man.push_bit_wide(false, 2); // toggle
        man.push_bit(false); // first data bit, zero
        let mut code = IrCode::new(ProntoClock::new(36_000.0, 16));
        man.write_to(&mut code);
        // halves: 1(1) 0(1) | 0(2) 1(2) | 0(1) 1(1)
        // runs:   1 -> 3 space -> 2 mark -> 1 space -> 1 mark
        assert_eq!(
            code.into_words(),
            vec![0x0010, 0x0030, 0x0020, 0x0010, 0x0010]
        );
    }
}
