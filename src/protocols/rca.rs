//! RCA 24-bit encoder: (8,-8) lead-in, then `D:4, F:8, ~D:4, ~F:8`
//! transmitted MSB first on the 56.7 kHz carrier, closed by (1,-16).

use crate::clock::ProntoClock;
use crate::pronto::{EncodedFrame, IrCode, PdmTiming};

const CARRIER_HZ: f64 = 56_700.0;
const UNIT_CYCLES: u32 = 28;
const TIMING: PdmTiming = PdmTiming {
    zero: (1, 2),
    one: (1, 4),
};
const TRAILER_SPACE_UNITS: u32 = 16;

pub(crate) fn encode(byte_d: u8, byte_f: u8) -> EncodedFrame {
    let clock = ProntoClock::new(CARRIER_HZ, UNIT_CYCLES);
    let mut code = IrCode::new(clock);
    code.burst(8, 8);
    code.pdm_bursts_msb(4, byte_d as u32, &TIMING);
    code.pdm_bursts_msb(8, byte_f as u32, &TIMING);
    code.pdm_bursts_msb(4, (0x0F - byte_d) as u32, &TIMING);
    code.pdm_bursts_msb(8, (0xFF - byte_f) as u32, &TIMING);
    code.burst(1, TRAILER_SPACE_UNITS);
    EncodedFrame {
        prescaler: clock.prescaler(),
        body: code.into_words(),
        repeat_skip: 0,
    }
}
