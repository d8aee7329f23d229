//! # Validator / normalizer
//!
//! Runs once per remote, at load time. Canonicalizes and classifies the
//! protocol tag, coerces the repeat count, range-checks the addressing
//! fields, and derives every button's `CmdObc`/`CmdBytes` records so the
//! encoders never touch raw definition values. The first bad button rejects
//! the whole remote.
//!
//! ## Endianness
//!
//! The `LSBfirst` flag describes how the definition's D/S/F values are to
//! be read; it is applied here, in each field's active bit width, and
//! nowhere else. The NEC-family check additionally stores its bytes
//! bit-reversed (the encoder walks them top bit first to put the fields on
//! the wire LSB first), with one historical quirk kept intact: a derived
//! subdevice is the arithmetic complement `0xFF - D` of the adjusted
//! device, not of the stored byte.

use log::{error, warn};

use crate::bits::reverse_bits;
use crate::errors::{Error, Result};
use crate::protocols::{KaseikyoVariant, Protocol, Rc6Variant, SonyVariant, GC100_HEADER_LEN};

use super::{parse_int, Button, CmdBytes, CmdObc, Fnc, Remote};

/// Subdevice the Sky (RC6-6-20) check falls back to when the definition
/// carries the -1 sentinel.
const SKY_DEFAULT_SUBDEVICE: i64 = 0x0C;

pub(crate) fn validate(name: &str, remote: &mut Remote) -> Result<()> {
    let fail = |message: String| {
        error!("remote {name:?}: {message}");
        Error::Config(format!("remote {name:?}: {message}"))
    };

    if remote.model.trim().is_empty() {
        return Err(fail("Model must be non-empty text".to_string()));
    }

    let tag = remote.encoding.protocol.trim().to_ascii_uppercase();
    let protocol =
        Protocol::from_tag(&tag).ok_or_else(|| fail(format!("unknown protocol {tag:?}")))?;
    remote.encoding.protocol = tag;
    remote.encoding.classified = Some(protocol);
    remote.encoding.kaseikyo = protocol.is_kaseikyo();

    let repeats = remote.encoding.repeats.unwrap_or(0);
    if !(0..=5).contains(&repeats) {
        warn!("remote {name:?}: Repeats {repeats} out of range, sending a single frame");
    }
    remote.encoding.repeats = Some(remote.encoding.repeat_count() as i64);

    let (device, subdevice) = if protocol.uses_addressing() {
        let device = remote
            .encoding
            .device
            .ok_or_else(|| fail("Device must be a number".to_string()))?;
        let subdevice = remote
            .encoding
            .subdevice
            .ok_or_else(|| fail("Subdevice must be a number".to_string()))?;
        if !(0..=255).contains(&device) {
            return Err(fail(format!("Device {device} out of range 0..=255")));
        }
        if !(-1..=255).contains(&subdevice) {
            return Err(fail(format!("Subdevice {subdevice} out of range -1..=255")));
        }
        (device, subdevice)
    } else {
        (0, -1)
    };

    let lsb_first = remote.encoding.lsb_first;
    for (button_name, button) in remote.functions.iter_mut() {
        validate_button(protocol, lsb_first, device, subdevice, button).map_err(|message| {
            error!("remote {name:?}: button {button_name:?}: {message}");
            Error::Config(format!(
                "remote {name:?}: button {button_name:?}: {message}"
            ))
        })?;
    }
    Ok(())
}

fn validate_button(
    protocol: Protocol,
    lsb_first: bool,
    device: i64,
    subdevice: i64,
    button: &mut Button,
) -> std::result::Result<(), String> {
    match protocol {
        Protocol::Pronto => {
            let Fnc::Text(text) = &button.fnc else {
                return Err("PRONTO Fnc must be a string of 4-hex-digit words".to_string());
            };
            let code = text.trim().to_string();
            if !code.split(' ').all(|w| {
                w.len() == 4 && w.chars().all(|c| c.is_ascii_hexdigit())
            }) {
                return Err(format!("Fnc {text:?} is not a Pronto code"));
            }
            button.bytes = Some(CmdBytes::Pronto { code });
            Ok(())
        }
        Protocol::Gc100 => {
            let list = fnc_list(&button.fnc)?;
            if list.len() < GC100_HEADER_LEN + 2 {
                return Err("GC100 Fnc needs the 3-value header and at least one burst pair"
                    .to_string());
            }
            if (list.len() - GC100_HEADER_LEN) % 2 != 0 {
                return Err("GC100 Fnc has an unpaired burst count".to_string());
            }
            let codes = list
                .iter()
                .map(|&v| u32::try_from(v).map_err(|_| format!("negative GC100 count {v}")))
                .collect::<std::result::Result<Vec<u32>, String>>()?;
            if codes[0] == 0 {
                return Err("GC100 carrier frequency must be positive".to_string());
            }
            button.bytes = Some(CmdBytes::Gc100 { codes });
            Ok(())
        }
        Protocol::Raw => {
            let list = fnc_list(&button.fnc)?;
            if list.is_empty() {
                return Err("RAW Fnc must not be empty".to_string());
            }
            if list.len() % 2 != 0 {
                return Err("RAW Fnc has an unpaired timing value".to_string());
            }
            let freq = button
                .freq
                .filter(|&f| f > 0)
                .ok_or_else(|| "RAW buttons need a positive Freq".to_string())?;
            let codes = list
                .iter()
                .map(|&v| i32::try_from(v).map_err(|_| format!("timing {v} out of range")))
                .collect::<std::result::Result<Vec<i32>, String>>()?;
            button.bytes = Some(CmdBytes::Raw {
                codes,
                freq: freq as u32,
            });
            Ok(())
        }
        _ => validate_irp_button(protocol, lsb_first, device, subdevice, button),
    }
}

fn validate_irp_button(
    protocol: Protocol,
    lsb_first: bool,
    device: i64,
    subdevice: i64,
    button: &mut Button,
) -> std::result::Result<(), String> {
    let function = match &button.fnc {
        Fnc::Number(n) => *n,
        Fnc::Text(t) => parse_int(t).ok_or_else(|| format!("Fnc {t:?} is not a number"))?,
        Fnc::List(_) => return Err("Fnc must be a number for IRP protocols".to_string()),
    };
    if function < 0 {
        return Err(format!("Fnc {function} must not be negative"));
    }

    // Applies the LSBfirst adjustment in the field's active bit width.
    let adjust = |value: i64, bits: u32| -> i64 {
        if lsb_first {
            value
        } else {
            reverse_bits(value as u32, bits) as i64
        }
    };
    let check = |value: i64, max: i64, what: &str| -> std::result::Result<(), String> {
        if value > max {
            Err(format!("{what} {value} exceeds {max:#X}"))
        } else {
            Ok(())
        }
    };

    match protocol {
        Protocol::Nec(_) => {
            check(function, 0xFF, "Fnc")?;
            let d = adjust(device, 8);
            let f = adjust(function, 8);
            let (obc_s, byte_s) = if subdevice == -1 {
                (-1, (0xFF - d) as u8)
            } else {
                let s = adjust(subdevice, 8);
                (s, reverse_bits(s as u32, 8) as u8)
            };
            button.obc = Some(CmdObc {
                obc_d: d,
                obc_s,
                obc_f: f,
            });
            button.bytes = Some(CmdBytes::Irp {
                byte_d: reverse_bits(d as u32, 8) as u8,
                byte_s,
                byte_f: reverse_bits(f as u32, 8) as u8,
            });
        }
        Protocol::Kaseikyo(variant) => {
            if variant.is_stub() {
                warn!(
                    "protocol {variant:?} payload layout is unverified; \
                     the emitted code may not decode"
                );
            }
            let (oem_m, oem_n) = variant.oem();
            if variant == KaseikyoVariant::DenonK {
                check(device, 0x0F, "Device")?;
                check(function, 0xFFF, "Fnc")?;
                if !(0..=0x0F).contains(&subdevice) {
                    return Err(format!("Subdevice {subdevice} out of range 0..=15"));
                }
                let d = adjust(device, 4);
                let s = adjust(subdevice, 4);
                let f = adjust(function, 12);
                button.obc = Some(CmdObc {
                    obc_d: d,
                    obc_s: s,
                    obc_f: f,
                });
                // D:4, S:4 and the split F:12 repacked into the three
                // payload bytes: F's low nibble rides with S, the high
                // eight bits fill the last byte.
                button.bytes = Some(CmdBytes::Kaseikyo {
                    oem_m,
                    oem_n,
                    byte_x: None,
                    byte_d: (d << 4) as u8,
                    byte_s: (((f & 0x0F) << 4) | s) as u8,
                    byte_f: (f >> 4) as u8,
                });
            } else {
                check(function, 0xFF, "Fnc")?;
                if subdevice == -1 {
                    return Err("Subdevice is required for Kaseikyo protocols".to_string());
                }
                let d = adjust(device, 8);
                let s = adjust(subdevice, 8);
                let f = adjust(function, 8);
                let byte_x = matches!(variant, KaseikyoVariant::Fujitsu56).then_some(0);
                button.obc = Some(CmdObc {
                    obc_d: d,
                    obc_s: s,
                    obc_f: f,
                });
                button.bytes = Some(CmdBytes::Kaseikyo {
                    oem_m,
                    oem_n,
                    byte_x,
                    byte_d: d as u8,
                    byte_s: s as u8,
                    byte_f: f as u8,
                });
            }
        }
        Protocol::Denon | Protocol::Sharp => {
            check(device, 0x1F, "Device")?;
            check(function, 0xFF, "Fnc")?;
            let d = adjust(device, 5);
            let f = adjust(function, 8);
            button.obc = Some(CmdObc {
                obc_d: d,
                obc_s: subdevice,
                obc_f: f,
            });
            button.bytes = Some(CmdBytes::Irp {
                byte_d: d as u8,
                byte_s: 0,
                byte_f: f as u8,
            });
        }
        Protocol::Mitsubishi | Protocol::Jvc => {
            check(function, 0xFF, "Fnc")?;
            let d = adjust(device, 8);
            let f = adjust(function, 8);
            button.obc = Some(CmdObc {
                obc_d: d,
                obc_s: subdevice,
                obc_f: f,
            });
            button.bytes = Some(CmdBytes::Irp {
                byte_d: d as u8,
                byte_s: 0,
                byte_f: f as u8,
            });
        }
        Protocol::Rc5 => {
            check(device, 0x1F, "Device")?;
            check(function, 0x3F, "Fnc")?;
            let d = adjust(device, 5);
            let f = adjust(function, 6);
            button.obc = Some(CmdObc {
                obc_d: d,
                obc_s: subdevice,
                obc_f: f,
            });
            button.bytes = Some(CmdBytes::Irp {
                byte_d: d as u8,
                byte_s: 0,
                byte_f: f as u8,
            });
        }
        Protocol::Rc6(variant) => {
            check(function, 0xFF, "Fnc")?;
            let d = adjust(device, 8);
            let f = adjust(function, 8);
            let (obc_s, byte_s) = match variant {
                Rc6Variant::Plain => (subdevice, 0),
                Rc6Variant::Sky => {
                    let s = if subdevice == -1 {
                        SKY_DEFAULT_SUBDEVICE
                    } else {
                        check(subdevice, 0x0F, "Subdevice")?;
                        subdevice
                    };
                    let s = adjust(s, 4);
                    (s, s as u8)
                }
                Rc6Variant::Mce => {
                    if subdevice == -1 {
                        return Err("Subdevice is required for MCE".to_string());
                    }
                    let s = adjust(subdevice, 8);
                    (s, s as u8)
                }
            };
            button.obc = Some(CmdObc {
                obc_d: d,
                obc_s,
                obc_f: f,
            });
            button.bytes = Some(CmdBytes::Irp {
                byte_d: d as u8,
                byte_s,
                byte_f: f as u8,
            });
        }
        Protocol::Rca => {
            check(device, 0x0F, "Device")?;
            check(function, 0xFF, "Fnc")?;
            let d = adjust(device, 4);
            let f = adjust(function, 8);
            button.obc = Some(CmdObc {
                obc_d: d,
                obc_s: subdevice,
                obc_f: f,
            });
            button.bytes = Some(CmdBytes::Irp {
                byte_d: d as u8,
                byte_s: 0,
                byte_f: f as u8,
            });
        }
        Protocol::Sony(variant) => {
            check(function, 0x7F, "Fnc")?;
            let (d, obc_d) = match variant {
                SonyVariant::Sony15 => {
                    let d = adjust(device, 8);
                    (d as u8, d)
                }
                _ => {
                    check(device, 0x1F, "Device")?;
                    let d = adjust(device, 5);
                    (d as u8, d)
                }
            };
            let (obc_s, byte_e) = match variant {
                SonyVariant::Sony20 => {
                    if subdevice == -1 {
                        (-1, 0)
                    } else {
                        let e = adjust(subdevice, 8);
                        (e, e as u8)
                    }
                }
                _ => (subdevice, 0),
            };
            let f = adjust(function, 7);
            button.obc = Some(CmdObc {
                obc_d,
                obc_s,
                obc_f: f,
            });
            button.bytes = Some(CmdBytes::Sony {
                byte_d: d,
                byte_e,
                byte_f: f as u8,
            });
        }
        Protocol::Gc100 | Protocol::Raw | Protocol::Pronto => unreachable!(),
    }
    Ok(())
}

fn fnc_list(fnc: &Fnc) -> std::result::Result<&Vec<i64>, String> {
    match fnc {
        Fnc::List(list) => Ok(list),
        _ => Err("Fnc must be an integer list".to_string()),
    }
}
