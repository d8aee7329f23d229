//! # Protocol encoders
//!
//! One encoder per IR protocol family. Each encoder turns a button's
//! precomputed byte layout into a single frame of Pronto body words: it
//! derives the clock for the family's carrier and basic time unit, emits the
//! lead-in, data and trailer bursts, and (where the protocol defines a
//! nominal frame length) pads the frame with a lead-out space. The
//! assembler in [`crate::pronto`] then wraps the frame in the preamble and
//! splices in repeats.
//!
//! Protocol tags from the definitions file are classified once, at
//! validation time, into the [`Protocol`] enum; nothing dispatches on
//! strings during an encode. Kaseikyo, NEC, RC6 and Sony are sub-families
//! and carry a variant tag.

mod denon;
mod jvc;
mod kaseikyo;
mod mitsubishi;
mod nec;
mod passthrough;
mod rc5;
mod rc6;
mod rca;
mod sony;

use log::error;

use crate::errors::{Error, Result};
use crate::pronto;
use crate::remote::CmdBytes;

pub use kaseikyo::KaseikyoVariant;
pub(crate) use passthrough::GC100_HEADER_LEN;

/// NEC-style pulse-distance protocols sharing the 38 kHz / 21-cycle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NecVariant {
    Nec1,
    Nec2,
    /// Samsung's NECx2 framing: the lead-in mark is half the NEC one.
    Necx2,
    Lg,
    DenonNec,
    SharpNec,
    /// 40 kHz prescaler in the preamble, 38 kHz burst timing.
    Pioneer,
}

/// RC6 sub-family: mode bits and payload layout differ per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rc6Variant {
    /// RC6-0-16: mode 0, 16 payload bits.
    Plain,
    /// RC6-6-20 as used by Sky boxes.
    Sky,
    /// RC6-6-32 / MCE, with the long-lived toggle in the device byte.
    Mce,
}

/// Sony SIRC bit counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SonyVariant {
    Sony12,
    Sony15,
    Sony20,
}

/// Protocol families the codec can emit, classified from the definition
/// file's protocol tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Nec(NecVariant),
    Kaseikyo(KaseikyoVariant),
    Denon,
    Sharp,
    Mitsubishi,
    Jvc,
    Rc5,
    Rc6(Rc6Variant),
    Rca,
    Sony(SonyVariant),
    Gc100,
    Raw,
    Pronto,
}

impl Protocol {
    /// Classifies an upper-cased protocol tag. Returns `None` for tags the
    /// codec does not know.
    pub fn from_tag(tag: &str) -> Option<Protocol> {
        Some(match tag {
            "NEC" | "NEC1" => Protocol::Nec(NecVariant::Nec1),
            "NEC2" => Protocol::Nec(NecVariant::Nec2),
            "SAMSUNG" | "NECX2" => Protocol::Nec(NecVariant::Necx2),
            "LG" => Protocol::Nec(NecVariant::Lg),
            "DENON-NEC" => Protocol::Nec(NecVariant::DenonNec),
            "SHARP-NEC" => Protocol::Nec(NecVariant::SharpNec),
            "PIONEER" => Protocol::Nec(NecVariant::Pioneer),
            "PANASONIC" => Protocol::Kaseikyo(KaseikyoVariant::Panasonic),
            "DENON-K" => Protocol::Kaseikyo(KaseikyoVariant::DenonK),
            "JVC-48" => Protocol::Kaseikyo(KaseikyoVariant::Jvc48),
            "FUJITSU" => Protocol::Kaseikyo(KaseikyoVariant::Fujitsu),
            "FUJITSU-56" => Protocol::Kaseikyo(KaseikyoVariant::Fujitsu56),
            "MITSUBISHI-K" => Protocol::Kaseikyo(KaseikyoVariant::MitsubishiK),
            "SHARPDVD" => Protocol::Kaseikyo(KaseikyoVariant::SharpDvd),
            "TEAC-K" => Protocol::Kaseikyo(KaseikyoVariant::TeacK),
            "DENON" => Protocol::Denon,
            "SHARP" => Protocol::Sharp,
            "MITSUBISHI" => Protocol::Mitsubishi,
            "JVC" => Protocol::Jvc,
            "RC5" => Protocol::Rc5,
            "RC6" | "RC6-0-16" => Protocol::Rc6(Rc6Variant::Plain),
            "SKY" | "RC6-6-20" => Protocol::Rc6(Rc6Variant::Sky),
            "MCE" | "RC6-6-32" => Protocol::Rc6(Rc6Variant::Mce),
            "RCA" => Protocol::Rca,
            "SONY12" => Protocol::Sony(SonyVariant::Sony12),
            "SONY15" => Protocol::Sony(SonyVariant::Sony15),
            "SONY20" => Protocol::Sony(SonyVariant::Sony20),
            "GC100" => Protocol::Gc100,
            "RAW" => Protocol::Raw,
            "PRONTO" => Protocol::Pronto,
            _ => return None,
        })
    }

    /// Whether the protocol takes device/subdevice addressing at all. The
    /// passthrough protocols carry their complete waveform in the button.
    pub fn uses_addressing(&self) -> bool {
        !matches!(self, Protocol::Gc100 | Protocol::Raw | Protocol::Pronto)
    }

    pub fn is_kaseikyo(&self) -> bool {
        matches!(self, Protocol::Kaseikyo(_))
    }
}

/// Encodes one button into the final Pronto string. `mce_toggle` is the
/// current toggle state; only the MCE encoder reads it.
pub(crate) fn encode(
    protocol: Protocol,
    bytes: &CmdBytes,
    repeats: u8,
    mce_toggle: bool,
) -> Result<String> {
    let frame = match (protocol, bytes) {
        (Protocol::Pronto, CmdBytes::Pronto { code }) => {
            // Verbatim passthrough: the button already is a Pronto code.
            return Ok(code.clone());
        }
        (
            Protocol::Nec(variant),
            &CmdBytes::Irp {
                byte_d,
                byte_s,
                byte_f,
            },
        ) => nec::encode(variant, byte_d, byte_s, byte_f),
        (
            Protocol::Kaseikyo(variant),
            &CmdBytes::Kaseikyo {
                oem_m,
                oem_n,
                byte_x,
                byte_d,
                byte_s,
                byte_f,
            },
        ) => kaseikyo::encode(variant, oem_m, oem_n, byte_x, byte_d, byte_s, byte_f),
        (Protocol::Denon, &CmdBytes::Irp { byte_d, byte_f, .. }) => {
            denon::encode(false, byte_d, byte_f)
        }
        (Protocol::Sharp, &CmdBytes::Irp { byte_d, byte_f, .. }) => {
            denon::encode(true, byte_d, byte_f)
        }
        (Protocol::Mitsubishi, &CmdBytes::Irp { byte_d, byte_f, .. }) => {
            mitsubishi::encode(byte_d, byte_f)
        }
        (Protocol::Jvc, &CmdBytes::Irp { byte_d, byte_f, .. }) => jvc::encode(byte_d, byte_f),
        (Protocol::Rc5, &CmdBytes::Irp { byte_d, byte_f, .. }) => rc5::encode(byte_d, byte_f),
        (
            Protocol::Rc6(variant),
            &CmdBytes::Irp {
                byte_d,
                byte_s,
                byte_f,
            },
        ) => rc6::encode(variant, byte_d, byte_s, byte_f, mce_toggle),
        (Protocol::Rca, &CmdBytes::Irp { byte_d, byte_f, .. }) => rca::encode(byte_d, byte_f),
        (
            Protocol::Sony(variant),
            &CmdBytes::Sony {
                byte_d,
                byte_e,
                byte_f,
            },
        ) => sony::encode(variant, byte_d, byte_e, byte_f),
        (Protocol::Gc100, CmdBytes::Gc100 { codes }) => passthrough::encode_gc100(codes),
        (Protocol::Raw, CmdBytes::Raw { codes, freq }) => passthrough::encode_raw(codes, *freq),
        (protocol, _) => {
            error!("button bytes do not match protocol {protocol:?}");
            return Err(Error::Config(
                "button bytes do not match the remote's protocol".to_string(),
            ));
        }
    };
    Ok(pronto::assemble(&frame, repeats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_classification() {
        assert_eq!(
            Protocol::from_tag("NEC2"),
            Some(Protocol::Nec(NecVariant::Nec2))
        );
        assert_eq!(
            Protocol::from_tag("SAMSUNG"),
            Some(Protocol::Nec(NecVariant::Necx2))
        );
        assert_eq!(
            Protocol::from_tag("MCE"),
            Some(Protocol::Rc6(Rc6Variant::Mce))
        );
        assert_eq!(
            Protocol::from_tag("RC6-6-32"),
            Some(Protocol::Rc6(Rc6Variant::Mce))
        );
        assert_eq!(
            Protocol::from_tag("PANASONIC"),
            Some(Protocol::Kaseikyo(KaseikyoVariant::Panasonic))
        );
        assert_eq!(Protocol::from_tag("DENON"), Some(Protocol::Denon));
        assert_eq!(Protocol::from_tag("XYZ"), None);
    }

    #[test]
    fn test_addressing_split() {
        assert!(Protocol::Rc5.uses_addressing());
        assert!(!Protocol::Gc100.uses_addressing());
        assert!(!Protocol::Raw.uses_addressing());
        assert!(!Protocol::Pronto.uses_addressing());
    }

    #[test]
    fn test_pronto_passthrough_ignores_repeats() {
        let code = "0000 006D 0000 0022 0150 00A8".to_string();
        let bytes = CmdBytes::Pronto { code: code.clone() };
        let out = encode(Protocol::Pronto, &bytes, 5, false).unwrap();
        assert_eq!(out, code);
    }

    #[test]
    fn test_mismatched_bytes_rejected() {
        let bytes = CmdBytes::Pronto {
            code: "0000".into(),
        };
        assert!(encode(Protocol::Rc5, &bytes, 0, false).is_err());
    }
}
