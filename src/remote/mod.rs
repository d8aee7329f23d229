//! # Remote data model
//!
//! The deserialized shape of the remote-definitions file: a mapping from
//! remote display name to [`Remote`], each with an IR emitter address, an
//! [`Encoding`] block and a map of buttons. Numeric fields in the file are
//! written both as JSON numbers and as strings (decimal or `0x` hex), so
//! everything numeric goes through a tolerant deserializer.
//!
//! A freshly parsed remote is inert: [`crate::ProntoCast`] runs it through
//! the validator, which canonicalizes the protocol tag, classifies it into
//! a [`Protocol`], and attaches the precomputed [`CmdObc`]/[`CmdBytes`]
//! records to every button. Failed validation rejects the whole remote.

mod validate;

pub(crate) use validate::validate;

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::protocols::Protocol;

/// The remote-definitions file: remote display name to definition.
pub type RemoteSet = BTreeMap<String, Remote>;

/// One virtual remote.
#[derive(Debug, Clone, Deserialize)]
pub struct Remote {
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "IRemitter")]
    pub ir_emitter: IrEmitter,
    #[serde(rename = "Encoding")]
    pub encoding: Encoding,
    #[serde(rename = "Functions")]
    pub functions: BTreeMap<String, Button>,
}

/// Which blaster the host should hand the encoded code to. The device id is
/// opaque to the codec; the service index selects the transport style.
#[derive(Debug, Clone, Deserialize)]
pub struct IrEmitter {
    #[serde(rename = "Device", deserialize_with = "de_text")]
    pub device: String,
    #[serde(rename = "ServiceIdx", deserialize_with = "de_service_idx")]
    pub service_idx: u8,
}

/// The per-remote encoding block.
#[derive(Debug, Clone, Deserialize)]
pub struct Encoding {
    /// Protocol tag; canonicalized to upper case by the validator.
    #[serde(rename = "Protocol")]
    pub protocol: String,
    /// Device address, 0..=255. Unused by the passthrough protocols.
    #[serde(rename = "Device", default, deserialize_with = "de_opt_int")]
    pub device: Option<i64>,
    /// Subdevice address, -1..=255; -1 means absent (derive the complement
    /// for NEC, no extension byte for SONY20).
    #[serde(rename = "Subdevice", default, deserialize_with = "de_opt_int")]
    pub subdevice: Option<i64>,
    #[serde(rename = "LSBfirst", default = "default_true")]
    pub lsb_first: bool,
    /// Extra frame copies, coerced into 0..=5 by the validator.
    #[serde(rename = "Repeats", default, deserialize_with = "de_opt_int")]
    pub repeats: Option<i64>,
    /// Set by the validator when the protocol is in the Kaseikyo family.
    #[serde(skip)]
    pub kaseikyo: bool,
    #[serde(skip)]
    pub(crate) classified: Option<Protocol>,
}

impl Encoding {
    /// The coerced repeat count. Zero until the remote has been validated.
    pub fn repeat_count(&self) -> u8 {
        self.repeats
            .filter(|r| (0..=5).contains(r))
            .unwrap_or(0) as u8
    }

    /// The classified protocol; `None` until the remote has been validated.
    pub fn protocol_tag(&self) -> Option<Protocol> {
        self.classified
    }
}

/// One button definition plus the records the validator derives for it.
#[derive(Debug, Clone, Deserialize)]
pub struct Button {
    #[serde(rename = "Fnc")]
    pub fnc: Fnc,
    #[serde(rename = "Note", default)]
    pub note: Option<String>,
    /// Carrier in Hz, RAW buttons only.
    #[serde(rename = "Freq", default, deserialize_with = "de_opt_int")]
    pub freq: Option<i64>,
    #[serde(skip)]
    pub(crate) obc: Option<CmdObc>,
    #[serde(skip)]
    pub(crate) bytes: Option<CmdBytes>,
}

impl Button {
    /// The human-readable original button code, once validated.
    pub fn obc(&self) -> Option<CmdObc> {
        self.obc
    }

    /// The protocol-specific encoder input, once validated.
    pub fn cmd_bytes(&self) -> Option<&CmdBytes> {
        self.bytes.as_ref()
    }
}

/// The `Fnc` field is protocol-dependent: a number (or numeric string) for
/// the IRP protocols, a hex word string for PRONTO, an integer list for
/// GC100 and RAW.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Fnc {
    Number(i64),
    Text(String),
    List(Vec<i64>),
}

/// Original button code: the (D, S, F) triple in human-readable form, after
/// the endianness adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmdObc {
    pub obc_d: i64,
    pub obc_s: i64,
    pub obc_f: i64,
}

/// Protocol-specific encoder input derived at validation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CmdBytes {
    /// The generic D/S/F byte triple used by the NEC family and the other
    /// fixed-layout IRP protocols. Fields a protocol does not transmit stay
    /// zero.
    Irp { byte_d: u8, byte_s: u8, byte_f: u8 },
    /// Kaseikyo payload: OEM bytes, optional extension byte for the 56-bit
    /// variants, and the (possibly repacked) D/S/F bytes.
    Kaseikyo {
        oem_m: u8,
        oem_n: u8,
        byte_x: Option<u8>,
        byte_d: u8,
        byte_s: u8,
        byte_f: u8,
    },
    /// Sony payload with the SONY20 extension byte.
    Sony { byte_d: u8, byte_e: u8, byte_f: u8 },
    /// A complete Pronto code, returned verbatim.
    Pronto { code: String },
    /// GC100 `sendir` count list, transport header included.
    Gc100 { codes: Vec<u32> },
    /// Raw microsecond timings plus their carrier.
    Raw { codes: Vec<i32>, freq: u32 },
}

fn default_true() -> bool {
    true
}

/// Integer fields arrive as JSON numbers, decimal strings or `0x` hex
/// strings.
pub(crate) fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        i64::from_str_radix(hex, 16).ok()
    } else {
        text.parse().ok()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrText {
    Num(i64),
    Text(String),
}

fn de_opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumOrText::Num(n)) => Ok(Some(n)),
        Some(NumOrText::Text(t)) => parse_int(&t)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("not a number: {t:?}"))),
    }
}

fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match NumOrText::deserialize(deserializer)? {
        NumOrText::Num(n) => n.to_string(),
        NumOrText::Text(t) => t,
    })
}

fn de_service_idx<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match NumOrText::deserialize(deserializer)? {
        NumOrText::Num(n) => n,
        NumOrText::Text(t) => parse_int(&t)
            .ok_or_else(|| serde::de::Error::custom(format!("not a service index: {t:?}")))?,
    };
    u8::try_from(value).map_err(|_| serde::de::Error::custom("service index out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_forms() {
        assert_eq!(parse_int("8"), Some(8));
        assert_eq!(parse_int("0x08"), Some(8));
        assert_eq!(parse_int("0X1f"), Some(31));
        assert_eq!(parse_int("-1"), Some(-1));
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("power"), None);
    }

    #[test]
    fn test_deserialize_mixed_number_forms() {
        let json = r#"
        {
            "Model": "Test TV",
            "IRemitter": { "Device": 164, "ServiceIdx": "2" },
            "Encoding": {
                "Protocol": "nec2",
                "Device": 4,
                "Subdevice": "-1",
                "Repeats": "0"
            },
            "Functions": {
                "Power": { "Fnc": "0x08", "Note": "toggle" }
            }
        }"#;
        let remote: Remote = serde_json::from_str(json).unwrap();
        assert_eq!(remote.ir_emitter.device, "164");
        assert_eq!(remote.ir_emitter.service_idx, 2);
        assert_eq!(remote.encoding.device, Some(4));
        assert_eq!(remote.encoding.subdevice, Some(-1));
        assert!(remote.encoding.lsb_first);
        assert_eq!(remote.encoding.repeat_count(), 0);
        match &remote.functions["Power"].fnc {
            Fnc::Text(t) => assert_eq!(t, "0x08"),
            other => panic!("unexpected fnc {other:?}"),
        }
    }

    #[test]
    fn test_deserialize_list_fnc() {
        let json = r#"{ "Fnc": [38000, 1, 1, 343, 171], "Note": null }"#;
        let button: Button = serde_json::from_str(json).unwrap();
        match button.fnc {
            Fnc::List(ref v) => assert_eq!(v.len(), 5),
            other => panic!("unexpected fnc {other:?}"),
        }
        assert!(button.obc.is_none());
        assert!(button.bytes.is_none());
    }

    #[test]
    fn test_repeat_count_out_of_range_is_zero() {
        let mut encoding = Encoding {
            protocol: "NEC".into(),
            device: Some(0),
            subdevice: Some(-1),
            lsb_first: true,
            repeats: Some(9),
            kaseikyo: false,
            classified: None,
        };
        assert_eq!(encoding.repeat_count(), 0);
        encoding.repeats = Some(3);
        assert_eq!(encoding.repeat_count(), 3);
        encoding.repeats = None;
        assert_eq!(encoding.repeat_count(), 0);
    }
}
