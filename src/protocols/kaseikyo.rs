//! # Kaseikyo-family encoder
//!
//! The shared 48-bit framing used by Panasonic, Denon-K, JVC-48 and a tail
//! of rarer OEMs. A frame is the (8,-4) lead-in, the two OEM identification
//! bytes, an optional extension byte on the 56-bit variants, the D/S/F
//! payload, an XOR checksum byte (omitted by the Fujitsu variants) and the
//! long trailer space. Every byte is transmitted LSB first.
//!
//! FUJITSU, MITSUBISHI-K, SHARPDVD and TEAC-K validate and emit a
//! best-effort frame, but their payload layout has never been confirmed
//! against a real remote; the validator warns when they are used.

use crate::clock::ProntoClock;
use crate::pronto::{EncodedFrame, IrCode, PdmTiming};

const CARRIER_HZ: f64 = 36_700.0;
const UNIT_CYCLES: u32 = 16;
const SHARPDVD_CARRIER_HZ: f64 = 38_000.0;
const SHARPDVD_UNIT_CYCLES: u32 = 15;
const TIMING: PdmTiming = PdmTiming {
    zero: (1, 1),
    one: (1, 3),
};
const TRAILER_SPACE_UNITS: u32 = 173;
const FUJITSU_TRAILER_SPACE_UNITS: u32 = 110;

/// Kaseikyo sub-family, distinguished by the OEM bytes heading the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KaseikyoVariant {
    Panasonic,
    DenonK,
    Jvc48,
    Fujitsu,
    Fujitsu56,
    MitsubishiK,
    SharpDvd,
    TeacK,
}

impl KaseikyoVariant {
    /// The OEM identification bytes transmitted ahead of the payload.
    pub(crate) fn oem(&self) -> (u8, u8) {
        match self {
            KaseikyoVariant::Panasonic => (0x02, 0x20),
            KaseikyoVariant::DenonK => (0x54, 0x32),
            KaseikyoVariant::Jvc48 => (0x03, 0x01),
            KaseikyoVariant::Fujitsu | KaseikyoVariant::Fujitsu56 => (0x14, 0x63),
            KaseikyoVariant::MitsubishiK => (0x23, 0xCB),
            KaseikyoVariant::SharpDvd => (0xAA, 0x5A),
            KaseikyoVariant::TeacK => (0x43, 0x53),
        }
    }

    /// The Fujitsu variants carry no checksum byte.
    fn has_checksum(&self) -> bool {
        !matches!(self, KaseikyoVariant::Fujitsu | KaseikyoVariant::Fujitsu56)
    }

    fn trailer_space_units(&self) -> u32 {
        match self {
            KaseikyoVariant::Fujitsu | KaseikyoVariant::Fujitsu56 => FUJITSU_TRAILER_SPACE_UNITS,
            _ => TRAILER_SPACE_UNITS,
        }
    }

    fn clock(&self) -> ProntoClock {
        match self {
            KaseikyoVariant::SharpDvd => {
                ProntoClock::new(SHARPDVD_CARRIER_HZ, SHARPDVD_UNIT_CYCLES)
            }
            _ => ProntoClock::new(CARRIER_HZ, UNIT_CYCLES),
        }
    }

    /// Whether the payload layout is still a best-effort guess.
    pub(crate) fn is_stub(&self) -> bool {
        matches!(
            self,
            KaseikyoVariant::Fujitsu
                | KaseikyoVariant::Fujitsu56
                | KaseikyoVariant::MitsubishiK
                | KaseikyoVariant::SharpDvd
                | KaseikyoVariant::TeacK
        )
    }
}

pub(crate) fn encode(
    variant: KaseikyoVariant,
    oem_m: u8,
    oem_n: u8,
    byte_x: Option<u8>,
    byte_d: u8,
    byte_s: u8,
    byte_f: u8,
) -> EncodedFrame {
    let clock = variant.clock();
    let mut code = IrCode::new(clock);
    code.burst(8, 4);

    let mut payload = vec![oem_m, oem_n];
    payload.extend(byte_x);
    payload.extend([byte_d, byte_s, byte_f]);
    if variant.has_checksum() {
        payload.push(byte_d ^ byte_s ^ byte_f ^ byte_x.unwrap_or(0));
    }
    for byte in payload {
        code.pdm_bursts_lsb(8, byte as u32, &TIMING);
    }
    code.burst(1, variant.trailer_space_units());

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
    fn test_panasonic_known_good_frame() {
        // Panasonic D=8, S=0, F=0x3D; checksum 8 ^ 0 ^ 0x3D = 0x35.
        let (oem_m, oem_n) = KaseikyoVariant::Panasonic.oem();
        let frame = encode(KaseikyoVariant::Panasonic, oem_m, oem_n, None, 8, 0, 0x3D);
        let pronto = assemble(&frame, 0);
        // lead-in (8,-4) on the 16-cycle grid
        assert!(pronto.starts_with("0000 0071 0000 0032 0080 0040"));

        // OEM-M = 0x02, LSB first: 0,1,0,0,0,0,0,0
        assert_eq!(
            &frame.body[2..18],
            &[
                0x0010, 0x0010, 0x0010, 0x0030, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010,
                0x0010, 0x0010, 0x0010, 0x0010, 0x0010, 0x0010,
            ]
        );
        // trailer (1,-173)
        assert_eq!(&frame.body[98..], &[0x0010, 0x0AD0]);
        assert_eq!(frame.body.len(), 100);
    }

    #[test]
    fn test_panasonic_checksum_byte() {
        let frame = encode(KaseikyoVariant::Panasonic, 0x02, 0x20, None, 8, 0, 0x3D);
        // checksum byte occupies the last 16 data words; 0x35 LSB first:
        // 1,0,1,0,1,1,0,0
        let sum_words = &frame.body[82..98];
        let spaces: Vec<u16> = sum_words.iter().skip(1).step_by(2).copied().collect();
        assert_eq!(
            spaces,
            vec![0x0030, 0x0010, 0x0030, 0x0010, 0x0030, 0x0030, 0x0010, 0x0010]
        );
    }

    #[test]
    fn test_fujitsu_omits_checksum_and_shortens_trailer() {
        let (oem_m, oem_n) = KaseikyoVariant::Fujitsu.oem();
        let frame = encode(KaseikyoVariant::Fujitsu, oem_m, oem_n, None, 1, 2, 3);
        // lead-in + 5 bytes + trailer
        assert_eq!(frame.body.len(), 2 + 5 * 16 + 2);
        assert_eq!(*frame.body.last().unwrap(), 110 * 16);
    }

    #[test]
    fn test_fujitsu56_carries_extension_byte() {
        let (oem_m, oem_n) = KaseikyoVariant::Fujitsu56.oem();
        let frame = encode(KaseikyoVariant::Fujitsu56, oem_m, oem_n, Some(0), 1, 2, 3);
        assert_eq!(frame.body.len(), 2 + 6 * 16 + 2);
    }

    #[test]
    fn test_sharpdvd_runs_on_38k_grid() {
        let (oem_m, oem_n) = KaseikyoVariant::SharpDvd.oem();
        let frame = encode(KaseikyoVariant::SharpDvd, oem_m, oem_n, None, 1, 2, 3);
        assert_eq!(frame.prescaler, 0x006D);
        assert_eq!(&frame.body[..2], &[8 * 15, 4 * 15]);
    }
}
