//! # NEC-family encoder
//!
//! Covers NEC1/NEC2, LG, Samsung's NECx2, the Denon/Sharp NEC offshoots and
//! Pioneer. One frame is a lead-in burst, the four data bytes
//! `D, S, F, ~F` transmitted LSB first, a one-unit trailing mark, and a
//! lead-out space stretching the frame to its nominal 108 ms.

use crate::clock::ProntoClock;
use crate::pronto::{EncodedFrame, IrCode, PdmTiming};

use super::NecVariant;

const CARRIER_HZ: f64 = 38_000.0;
const PIONEER_HEADER_HZ: f64 = 40_000.0;
const UNIT_CYCLES: u32 = 21;
const TIMING: PdmTiming = PdmTiming {
    zero: (1, 1),
    one: (1, 3),
};
const FRAME_MS: f64 = 108.0;

pub(crate) fn encode(variant: NecVariant, byte_d: u8, byte_s: u8, byte_f: u8) -> EncodedFrame {
    let clock = ProntoClock::new(CARRIER_HZ, UNIT_CYCLES);
    // Pioneer advertises the 40 kHz prescaler in the preamble but times
    // every burst against the 38 kHz clock.
    let prescaler = match variant {
        NecVariant::Pioneer => ProntoClock::new(PIONEER_HEADER_HZ, UNIT_CYCLES).prescaler(),
        _ => clock.prescaler(),
    };

    let mut code = IrCode::new(clock);
    match variant {
        NecVariant::Necx2 => code.burst(8, 8),
        _ => code.burst(16, 8),
    }
    let byte_g = 0xFF - byte_f;
    for byte in [byte_d, byte_s, byte_f, byte_g] {
        code.pdm_bursts_msb(8, byte as u32, &TIMING);
    }
    code.run(1);
    code.pad_to_frame(FRAME_MS);

    EncodedFrame {
        prescaler,
        body: code.into_words(),
        repeat_skip: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pronto::assemble;

    // Byte layout the validator derives for NEC2, device 4, subdevice -1,
    // function 8, LSB first.
    const BYTE_D: u8 = 0x20;
    const BYTE_S: u8 = 0xFB;
    const BYTE_F: u8 = 0x10;

    #[test]
    fn test_nec2_device4_function8_prefix() {
        let frame = encode(NecVariant::Nec2, BYTE_D, BYTE_S, BYTE_F);
        let pronto = assemble(&frame, 0);
        assert!(pronto.starts_with("0000 006D 0000 0022 0150 00A8 0015"));
    }

    #[test]
    fn test_frame_is_34_pairs() {
        let frame = encode(NecVariant::Nec2, BYTE_D, BYTE_S, BYTE_F);
        // lead-in + 32 data pairs + trailing mark/lead-out
        assert_eq!(frame.body.len(), 68);
    }

    #[test]
    fn test_frame_length_totals_108ms() {
        let frame = encode(NecVariant::Nec2, BYTE_D, BYTE_S, BYTE_F);
        let total: u32 = frame.body.iter().map(|&w| w as u32).sum();
        // round(4_145_152 / 109 * 0.108)
        assert_eq!(total, 4107);
    }

    #[test]
    fn test_inverted_function_byte() {
        let frame = encode(NecVariant::Nec2, BYTE_D, BYTE_S, BYTE_F);
        // byte_f = 0x10, ~F = 0xEF: seven long spaces in the last byte
        let last_byte = &frame.body[50..66];
        let long_spaces = last_byte
            .iter()
            .skip(1)
            .step_by(2)
            .filter(|&&w| w == 0x003F)
            .count();
        assert_eq!(long_spaces, 7);
    }

    #[test]
    fn test_necx2_lead_in_is_half() {
        let frame = encode(NecVariant::Necx2, BYTE_D, BYTE_S, BYTE_F);
        assert_eq!(&frame.body[..2], &[0x00A8, 0x00A8]);
    }

    #[test]
    fn test_pioneer_keeps_40k_prescaler_and_38k_timing() {
        let frame = encode(NecVariant::Pioneer, BYTE_D, BYTE_S, BYTE_F);
        assert_eq!(frame.prescaler, 0x0068);
        // bursts still on the 38 kHz grid
        assert_eq!(&frame.body[..2], &[0x0150, 0x00A8]);
        let total: u32 = frame.body.iter().map(|&w| w as u32).sum();
        assert_eq!(total, 4107);
    }

    #[test]
    fn test_repeats_duplicate_whole_frame() {
        let frame = encode(NecVariant::Nec1, BYTE_D, BYTE_S, BYTE_F);
        let pronto = assemble(&frame, 2);
        let words: Vec<&str> = pronto.split(' ').collect();
        assert_eq!(words.len(), 4 + 68 * 3);
        assert_eq!(words[3], "0066"); // 102 pairs
        assert_eq!(words[4..4 + 68], words[4 + 68..4 + 136]);
    }
}
