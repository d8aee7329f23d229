//! # RC5 encoder
//!
//! Philips RC5: fourteen bi-phase bits on a 36 kHz carrier (two start
//! ones, the toggle, `D:5` and `F:6` MSB first), padded to the nominal
//! 113.778 ms frame. The toggle bit is always transmitted as zero; the
//! receiver-side alternation RC5 remotes perform is not reproduced here.

use crate::clock::ProntoClock;
use crate::manchester::{BiphaseConvention, Manchester};
use crate::pronto::{EncodedFrame, IrCode};

const CARRIER_HZ: f64 = 36_000.0;
const UNIT_CYCLES: u32 = 32;
const FRAME_MS: f64 = 113.778;

pub(crate) fn encode(byte_d: u8, byte_f: u8) -> EncodedFrame {
    let clock = ProntoClock::new(CARRIER_HZ, UNIT_CYCLES);
    let mut man = Manchester::new(BiphaseConvention::Rc5);
    man.push_bit(true);
    man.push_bit(true);
    man.push_bit(false); // toggle
    man.push_bits_msb(byte_d as u32, 5);
    man.push_bits_msb(byte_f as u32, 6);

    let mut code = IrCode::new(clock);
    man.write_to(&mut code);
    code.pad_to_frame(FRAME_MS);

    EncodedFrame {
        prescaler: clock.prescaler(),
        body: code.into_words(),
        repeat_skip: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pronto::assemble;

    #[test]
    fn test_device5_function35_frame() {
        let frame = encode(5, 35);
        let pronto = assemble(&frame, 0);
        assert!(pronto.starts_with("0000 0073 0000"));

        // Half-bit stream 0101 10 10 10 01 10 01 01 10 10 10 01 01 with the
        // leading space half skipped collapses to these unit runs.
        let units: Vec<u16> = frame.body[..frame.body.len() - 1]
            .iter()
            .map(|&w| w / 32)
            .collect();
        assert_eq!(
            units,
            vec![1, 1, 2, 1, 1, 1, 1, 2, 2, 2, 1, 1, 2, 1, 1, 1, 1, 2, 1, 1, 1]
        );
    }

    #[test]
    fn test_frame_length_totals_nominal() {
        let frame = encode(5, 35);
        let total: u32 = frame.body.iter().map(|&w| w as u32).sum();
        // round(4_145_152 / 115 * 0.113778)
        assert_eq!(total, 4101);
    }

    #[test]
    fn test_word_count_is_even() {
        for (d, f) in [(0u8, 0u8), (5, 35), (31, 63), (12, 1)] {
            let frame = encode(d, f);
            assert_eq!(frame.body.len() % 2, 0, "odd body for d={d} f={f}");
        }
    }
}
