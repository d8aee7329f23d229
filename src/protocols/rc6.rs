//! # RC6-family encoder
//!
//! RC6 frames open with a (6,-2) lead-in, then a bi-phase stream: start bit
//! `1`, three mode bits, the double-width trailer (toggle) bit, and the
//! payload fields MSB first. Three variants are carried:
//!
//! - RC6-0-16: mode 0, payload `D:8, F:8`
//! - RC6-6-20 (Sky): mode 6, payload `D:8, S:4, F:8`
//! - RC6-6-32 (MCE): mode 6, payload `0x80:8, S:8, D:8, F:8` where bit 7 of
//!   the device byte is the long-lived toggle that distinguishes repeated
//!   presses of the same button
//!
//! The trailer bit itself is always transmitted as zero.

use crate::clock::ProntoClock;
use crate::manchester::{BiphaseConvention, Manchester};
use crate::pronto::{EncodedFrame, IrCode};

use super::Rc6Variant;

const CARRIER_HZ: f64 = 36_000.0;
const UNIT_CYCLES: u32 = 16;
const FRAME_MS: f64 = 106.667;
const MCE_OEM1: u8 = 0x80;

pub(crate) fn encode(
    variant: Rc6Variant,
    byte_d: u8,
    byte_s: u8,
    byte_f: u8,
    mce_toggle: bool,
) -> EncodedFrame {
    let clock = ProntoClock::new(CARRIER_HZ, UNIT_CYCLES);
    let mut code = IrCode::new(clock);
    code.burst(6, 2);

    let mut man = Manchester::new(BiphaseConvention::Rc6);
    man.push_bit(true); // start
    let mode = match variant {
        Rc6Variant::Plain => 0b000,
        Rc6Variant::Sky | Rc6Variant::Mce => 0b110,
    };
    man.push_bits_msb(mode, 3);
    man.push_bit_wide(false, 2); // trailer

    match variant {
        Rc6Variant::Plain => {
            man.push_bits_msb(byte_d as u32, 8);
            man.push_bits_msb(byte_f as u32, 8);
        }
        Rc6Variant::Sky => {
            man.push_bits_msb(byte_d as u32, 8);
            man.push_bits_msb(byte_s as u32, 4);
            man.push_bits_msb(byte_f as u32, 8);
        }
        Rc6Variant::Mce => {
            let device = byte_d & 0x7F | (mce_toggle as u8) << 7;
            man.push_bits_msb(MCE_OEM1 as u32, 8);
            man.push_bits_msb(byte_s as u32, 8);
            man.push_bits_msb(device as u32, 8);
            man.push_bits_msb(byte_f as u32, 8);
        }
    }

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

    #[test]
    fn test_lead_in_and_prescaler() {
        let frame = encode(Rc6Variant::Plain, 0x01, 0, 0x10, false);
        assert_eq!(frame.prescaler, 0x0073);
        assert_eq!(&frame.body[..2], &[96, 32]);
    }

    #[test]
    fn test_frame_length_totals_nominal() {
        for variant in [Rc6Variant::Plain, Rc6Variant::Sky, Rc6Variant::Mce] {
            let frame = encode(variant, 0x0C, 0x0F, 0x0D, false);
            let total: u32 = frame.body.iter().map(|&w| w as u32).sum();
            // round(4_145_152 / 115 * 0.106667)
            assert_eq!(total, 3845);
        }
    }

    #[test]
    fn test_trailer_bit_is_double_width() {
        // Mode 0 half stream: 1,0 | 0,1 0,1 0,1 | toggle 0,1 at two units.
        // With an all-zero payload the runs around the trailer are a
        // two-unit space and a two-unit mark.
        let frame = encode(Rc6Variant::Plain, 0x00, 0, 0x00, false);
        let units: Vec<u16> = frame.body[2..11].iter().map(|&w| w / 16).collect();
        assert_eq!(units, vec![1, 2, 1, 1, 1, 1, 1, 2, 2]);
    }

    #[test]
    fn test_trailer_merges_with_set_top_data_bit() {
        // When the first payload bit is a one, its mark half joins the
        // trailer's wide mark into a three-unit run.
        let frame = encode(Rc6Variant::Plain, 0x80, 0, 0x00, false);
        let units: Vec<u16> = frame.body[2..11].iter().map(|&w| w / 16).collect();
        assert_eq!(units, vec![1, 2, 1, 1, 1, 1, 1, 2, 3]);
    }

    #[test]
    fn test_mce_toggle_flips_device_bit() {
        let off = encode(Rc6Variant::Mce, 0x0C, 0x0F, 0x0D, false);
        let on = encode(Rc6Variant::Mce, 0x0C, 0x0F, 0x0D, true);
        assert_ne!(off.body, on.body);
        // both still land on the nominal frame length
        let sum = |b: &[u16]| b.iter().map(|&w| w as u32).sum::<u32>();
        assert_eq!(sum(&off.body), sum(&on.body));
    }

    #[test]
    fn test_sky_payload_is_20_bits() {
        let short = encode(Rc6Variant::Sky, 0x01, 0x0C, 0x01, false);
        let plain = encode(Rc6Variant::Plain, 0x01, 0, 0x01, false);
        // 4 extra payload bits lengthen the Sky stream
        assert!(short.body.len() > plain.body.len());
    }
}
