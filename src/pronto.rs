//! # Burst primitives and the Pronto assembler
//!
//! A Pronto CCF code is a sequence of space-separated 4-hex-digit words:
//! `0000 <prescaler> 0000 <n2>` followed by `n2` burst pairs, each pair a
//! mark length and a space length counted in carrier cycles. [`IrCode`]
//! accumulates the body words for one frame while tracking the total cycle
//! count, so encoders can pad a frame to its nominal length afterwards.
//! [`assemble`] wraps a finished body in the preamble and splices in the
//! repeated copies.

use log::{error, trace};

use crate::clock::ProntoClock;

/// Pulse-distance timing: `(mark, space)` lengths in basic time units for a
/// logical zero and a logical one.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PdmTiming {
    pub zero: (u32, u32),
    pub one: (u32, u32),
}

/// One frame of Pronto body words under construction.
pub(crate) struct IrCode {
    clock: ProntoClock,
    words: Vec<u16>,
    cycles: u32,
}

impl IrCode {
    pub fn new(clock: ProntoClock) -> Self {
        Self {
            clock,
            words: Vec::new(),
            cycles: 0,
        }
    }

    /// Total carrier cycles emitted so far.
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    fn push_cycles(&mut self, cycles: u32) {
        // A Pronto word is 16 bits; longer bursts cannot be represented.
        self.words.push(cycles.min(0xFFFF) as u16);
        self.cycles += cycles;
    }

    /// Appends one mark-or-space word of `units` basic time units. Whether
    /// the word is a mark or a space is positional in Pronto, so marks and
    /// spaces share this.
    pub fn run(&mut self, units: u32) {
        self.push_cycles(self.clock.cycles_for_units(units));
    }

    /// Appends a mark/space pair, e.g. a lead-in burst.
    pub fn burst(&mut self, mark_units: u32, space_units: u32) {
        self.run(mark_units);
        self.run(space_units);
    }

    /// Emits `bits` pulse-distance pairs walking `value` from bit 0 upward.
    pub fn pdm_bursts_lsb(&mut self, bits: u32, value: u32, timing: &PdmTiming) {
        let mut emitted = String::with_capacity(bits as usize);
        for i in 0..bits {
            let bit = value >> i & 1 == 1;
            self.pdm_bit(bit, timing);
            emitted.push(if bit { '1' } else { '0' });
        }
        trace!("pdm lsb {bits}-bit field 0x{value:X} -> {emitted}");
    }

    /// Emits `bits` pulse-distance pairs walking `value` from the top bit of
    /// the field downward.
    pub fn pdm_bursts_msb(&mut self, bits: u32, value: u32, timing: &PdmTiming) {
        let mut emitted = String::with_capacity(bits as usize);
        for i in (0..bits).rev() {
            let bit = value >> i & 1 == 1;
            self.pdm_bit(bit, timing);
            emitted.push(if bit { '1' } else { '0' });
        }
        trace!("pdm msb {bits}-bit field 0x{value:X} -> {emitted}");
    }

    fn pdm_bit(&mut self, bit: bool, timing: &PdmTiming) {
        let (mark, space) = if bit { timing.one } else { timing.zero };
        self.burst(mark, space);
    }

    /// Appends the lead-out space that stretches the frame to `frame_ms`
    /// milliseconds of carrier time.
    pub fn pad_to_frame(&mut self, frame_ms: f64) {
        let frame = self.clock.cycles_in_ms(frame_ms);
        // A zero-length word would desynchronise the mark/space alternation.
        let pad = frame.saturating_sub(self.cycles).max(1);
        self.push_cycles(pad);
    }

    /// Sony variant of the frame pad: the final data bit's trailing space is
    /// merged into the lead-out, so the last word is overwritten rather than
    /// a new one appended.
    pub fn pad_to_frame_absorbing_last(&mut self, frame_ms: f64) {
        let frame = self.clock.cycles_in_ms(frame_ms);
        if let Some(last) = self.words.pop() {
            self.cycles -= last as u32;
        }
        let pad = frame.saturating_sub(self.cycles).max(1);
        self.push_cycles(pad);
    }

    pub fn into_words(self) -> Vec<u16> {
        self.words
    }
}

/// One encoded frame plus everything the assembler needs to splice repeats.
pub(crate) struct EncodedFrame {
    /// Prescaler word for the preamble. Usually the body clock's, except
    /// PIONEER which advertises a different carrier than it times against.
    pub prescaler: u16,
    pub body: Vec<u16>,
    /// Words omitted from the second and later copies (JVC drops its
    /// lead-in pair there).
    pub repeat_skip: usize,
}

/// Wraps an encoded frame in the four-word Pronto preamble and repeats the
/// body `repeats + 1` times. Word 2 is always `0000`: there is no once-only
/// sequence, everything lives in sequence two.
pub(crate) fn assemble(frame: &EncodedFrame, repeats: u8) -> String {
    let mut seq: Vec<u16> = Vec::with_capacity(frame.body.len() * (repeats as usize + 1));
    seq.extend_from_slice(&frame.body);
    for _ in 0..repeats {
        seq.extend_from_slice(&frame.body[frame.repeat_skip.min(frame.body.len())..]);
    }
    if seq.len() % 2 != 0 {
        // Should be unreachable: every encoder closes its frame on a space.
        error!(
            "assembled Pronto body has odd word count {}; emitting anyway",
            seq.len()
        );
    }
    let mut out = String::with_capacity((seq.len() + 4) * 5);
    out.push_str(&format!(
        "0000 {:04X} 0000 {:04X}",
        frame.prescaler,
        seq.len() / 2
    ));
    for word in &seq {
        out.push_str(&format!(" {word:04X}"));
    }
    out
}
