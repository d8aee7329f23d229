//! Mitsubishi 16-bit pulse-distance encoder. No lead-in; `D:8, F:8` LSB
//! first on a 32.6 kHz carrier, closed by the (1,-80) trailer.

use crate::clock::ProntoClock;
use crate::pronto::{EncodedFrame, IrCode, PdmTiming};

const CARRIER_HZ: f64 = 32_600.0;
const UNIT_CYCLES: u32 = 10;
const TIMING: PdmTiming = PdmTiming {
    zero: (1, 3),
    one: (1, 7),
};
const TRAILER_SPACE_UNITS: u32 = 80;

pub(crate) fn encode(byte_d: u8, byte_f: u8) -> EncodedFrame {
    let clock = ProntoClock::new(CARRIER_HZ, UNIT_CYCLES);
    let mut code = IrCode::new(clock);
    code.pdm_bursts_lsb(8, byte_d as u32, &TIMING);
    code.pdm_bursts_lsb(8, byte_f as u32, &TIMING);
    code.burst(1, TRAILER_SPACE_UNITS);
    EncodedFrame {
        prescaler: clock.prescaler(),
        body: code.into_words(),
        repeat_skip: 0,
    }
}
