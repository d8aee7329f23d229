//! # Sony SIRC encoder
//!
//! Pulse-width modulation: the mark length carries the bit (two units for a
//! one, one for a zero) and every space is one unit. A frame is the (4,-1)
//! lead-in, `F:7` then the device field LSB first (5, 8 or 5+8 bits for
//! the 12-, 15- and 20-bit variants), padded to a 45 ms frame. The final
//! data bit's space is absorbed into the lead-out pad rather than standing
//! as its own word.

use crate::clock::ProntoClock;
use crate::pronto::{EncodedFrame, IrCode, PdmTiming};

use super::SonyVariant;

const CARRIER_HZ: f64 = 40_000.0;
const UNIT_CYCLES: u32 = 24;
const TIMING: PdmTiming = PdmTiming {
    zero: (1, 1),
    one: (2, 1),
};
const FRAME_MS: f64 = 45.0;

pub(crate) fn encode(variant: SonyVariant, byte_d: u8, byte_e: u8, byte_f: u8) -> EncodedFrame {
    let clock = ProntoClock::new(CARRIER_HZ, UNIT_CYCLES);
    let mut code = IrCode::new(clock);
    code.burst(4, 1);
    code.pdm_bursts_lsb(7, byte_f as u32, &TIMING);
    match variant {
        SonyVariant::Sony12 => code.pdm_bursts_lsb(5, byte_d as u32, &TIMING),
        SonyVariant::Sony15 => code.pdm_bursts_lsb(8, byte_d as u32, &TIMING),
        SonyVariant::Sony20 => {
            code.pdm_bursts_lsb(5, byte_d as u32, &TIMING);
            code.pdm_bursts_lsb(8, byte_e as u32, &TIMING);
        }
    }
    code.pad_to_frame_absorbing_last(FRAME_MS);
    EncodedFrame {
        prescaler: clock.prescaler(),
        body: code.into_words(),
        repeat_skip: 0,
    }
}
