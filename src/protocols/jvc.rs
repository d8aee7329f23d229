//! JVC 16-bit pulse-distance encoder. The (16,-8) lead-in is sent only on
//! the first frame of a repeat group; the assembler drops it from later
//! copies via `repeat_skip`.

use crate::clock::ProntoClock;
use crate::pronto::{EncodedFrame, IrCode, PdmTiming};

const CARRIER_HZ: f64 = 38_000.0;
const UNIT_CYCLES: u32 = 20;
const TIMING: PdmTiming = PdmTiming {
    zero: (1, 1),
    one: (1, 3),
};
const TRAILER_SPACE_UNITS: u32 = 45;

pub(crate) fn encode(byte_d: u8, byte_f: u8) -> EncodedFrame {
    let clock = ProntoClock::new(CARRIER_HZ, UNIT_CYCLES);
    let mut code = IrCode::new(clock);
    code.burst(16, 8);
    code.pdm_bursts_lsb(8, byte_d as u32, &TIMING);
    code.pdm_bursts_lsb(8, byte_f as u32, &TIMING);
    code.burst(1, TRAILER_SPACE_UNITS);
    EncodedFrame {
        prescaler: clock.prescaler(),
        body: code.into_words(),
        repeat_skip: 2,
    }
}
