//! # Denon / Sharp two-frame encoder
//!
//! Denon and Sharp share a 15-bit frame `D:5, F:8, ext:2` (LSB first)
//! followed by a check frame carrying the inverted function and extension
//! bits, each frame closed by the long (1,-165) space. The extension bits
//! are the only difference between the two: Denon sends `00`, Sharp `01`.

use crate::clock::ProntoClock;
use crate::pronto::{EncodedFrame, IrCode, PdmTiming};

const CARRIER_HZ: f64 = 38_000.0;
const UNIT_CYCLES: u32 = 10;
const TIMING: PdmTiming = PdmTiming {
    zero: (1, 3),
    one: (1, 7),
};
const FRAME_GAP_SPACE_UNITS: u32 = 165;

pub(crate) fn encode(sharp: bool, byte_d: u8, byte_f: u8) -> EncodedFrame {
    let ext: u32 = if sharp { 0b01 } else { 0b00 };
    let clock = ProntoClock::new(CARRIER_HZ, UNIT_CYCLES);
    let mut code = IrCode::new(clock);

    code.pdm_bursts_lsb(5, byte_d as u32, &TIMING);
    code.pdm_bursts_lsb(8, byte_f as u32, &TIMING);
    code.pdm_bursts_lsb(2, ext, &TIMING);
    code.burst(1, FRAME_GAP_SPACE_UNITS);

    code.pdm_bursts_lsb(5, byte_d as u32, &TIMING);
    code.pdm_bursts_lsb(8, (0xFF - byte_f) as u32, &TIMING);
    code.pdm_bursts_lsb(2, 0b11 - ext, &TIMING);
    code.burst(1, FRAME_GAP_SPACE_UNITS);

    EncodedFrame {
        prescaler: clock.prescaler(),
        body: code.into_words(),
        repeat_skip: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_frames_with_gaps() {
        let frame = encode(false, 5, 0x42);
        // 15 pairs + gap, twice
        assert_eq!(frame.body.len(), (15 * 2 + 2) * 2);
        assert_eq!(frame.body[30], 10);
        assert_eq!(frame.body[31], 1650);
        assert_eq!(*frame.body.last().unwrap(), 1650);
    }

    #[test]
    fn test_denon_extension_bits_are_zero() {
        let frame = encode(false, 0, 0);
        // frame 1 ext bits at pairs 13..15: both short spaces
        assert_eq!(frame.body[27], 0x001E);
        assert_eq!(frame.body[29], 0x001E);
    }

    #[test]
    fn test_sharp_extension_bit_order() {
        // ext = 01, transmitted LSB first: long then short
        let frame = encode(true, 0, 0);
        assert_eq!(frame.body[27], 70);
        assert_eq!(frame.body[29], 30);
    }

    #[test]
    fn test_check_frame_inverts_function() {
        let frame = encode(false, 0, 0x0F);
        // frame 1 F bits: 1,1,1,1,0,0,0,0; frame 2: 0,0,0,0,1,1,1,1
        let f1_spaces: Vec<u16> = (0..8).map(|i| frame.body[10 + 2 * i + 1]).collect();
        let f2_spaces: Vec<u16> = (0..8).map(|i| frame.body[42 + 2 * i + 1]).collect();
        assert_eq!(f1_spaces, vec![70, 70, 70, 70, 30, 30, 30, 30]);
        assert_eq!(f2_spaces, vec![30, 30, 30, 30, 70, 70, 70, 70]);
    }
}
