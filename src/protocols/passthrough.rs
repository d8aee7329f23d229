//! Passthrough encoders for buttons that carry their waveform directly:
//! GC100 `sendir` count lists and raw microsecond timing lists. (The PRONTO
//! passthrough never reaches an encoder; the dispatch returns the button's
//! code verbatim.)

use crate::clock::ProntoClock;
use crate::pronto::EncodedFrame;

/// Number of GC100 `sendir` values that are transport framing rather than
/// burst pairs: carrier clock, repeat count and repeat offset.
pub(crate) const GC100_HEADER_LEN: usize = 3;

/// GC100 lists are already carrier-cycle counts; only the transport header
/// is stripped.
pub(crate) fn encode_gc100(codes: &[u32]) -> EncodedFrame {
    let clock = ProntoClock::new(codes[0] as f64, 1);
    let body = codes[GC100_HEADER_LEN..]
        .iter()
        .map(|&c| c.min(0xFFFF) as u16)
        .collect();
    EncodedFrame {
        prescaler: clock.prescaler(),
        body,
        repeat_skip: 0,
    }
}

/// Raw lists are signed microsecond timings (the sign convention of capture
/// tools is ignored); each becomes a cycle count at the button's carrier.
pub(crate) fn encode_raw(codes: &[i32], freq: u32) -> EncodedFrame {
    let clock = ProntoClock::new(freq as f64, 1);
    let body = codes
        .iter()
        .map(|&us| clock.cycles_in_us(us.unsigned_abs() as f64).min(0xFFFF) as u16)
        .collect();
    EncodedFrame {
        prescaler: clock.prescaler(),
        body,
        repeat_skip: 0,
    }
}
