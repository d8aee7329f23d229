use std::collections::BTreeMap;

use log::warn;

use crate::device::{unimplemented_service_name, ProntoTransmitter};
use crate::protocols::{self, Protocol, Rc6Variant};
use crate::remote::{parse_int, validate, Button, Encoding, Fnc, IrEmitter, Remote, RemoteSet};
use crate::{Error, Result};

/// Reserved remote-table slot used by [`ProntoCast::send_irp_code`]. Each
/// ad-hoc send overwrites the previous one.
pub const AD_HOC_REMOTE: &str = "AdHocIrp";
/// The single button of the ad-hoc remote.
pub const AD_HOC_BUTTON: &str = "Send";

/// The primary API: a table of validated virtual remotes plus the
/// transports that deliver their encoded Pronto codes.
///
/// Remotes are loaded once (JSON, see the crate docs for the format) and
/// are read-only afterwards, except for the single ad-hoc slot. Encoding is
/// pure apart from the MCE toggle, which alternates across calls so that
/// consecutive presses of the same MCE button stay distinguishable.
///
/// # Examples
/// ```rust
/// use prontocast::{ProntoCast, TransmitterEmulator, Result};
///
/// fn main() -> Result<()> {
///     let mut cast = ProntoCast::new();
///     cast.register_transmitter(2, Box::new(TransmitterEmulator));
///     cast.send_irp_code("NEC2", "4", "-1", "0x08", "0", "164", "2")?;
///     Ok(())
/// }
/// ```
pub struct ProntoCast {
    remotes: BTreeMap<String, Remote>,
    transmitters: BTreeMap<u8, Box<dyn ProntoTransmitter>>,
    mce_toggle: bool,
}

impl ProntoCast {
    pub fn new() -> Self {
        Self {
            remotes: BTreeMap::new(),
            transmitters: BTreeMap::new(),
            mce_toggle: false,
        }
    }

    /// Registers the transport for a transmitter service index. Indices 1
    /// and 2 are the GC100- and BroadLink-style transports of the
    /// definitions file; anything the host can drive is accepted.
    pub fn register_transmitter(
        &mut self,
        service_idx: u8,
        transmitter: Box<dyn ProntoTransmitter>,
    ) {
        self.transmitters.insert(service_idx, transmitter);
    }

    /// Parses and validates a remote-definitions file. Nothing is inserted
    /// unless every remote in the file validates.
    pub fn load_remotes_json(&mut self, json: &str) -> Result<()> {
        let mut set: RemoteSet = serde_json::from_str(json)?;
        for (name, remote) in set.iter_mut() {
            validate(name, remote)?;
        }
        self.remotes.extend(set);
        Ok(())
    }

    /// Validates a single remote and inserts it, replacing any previous
    /// definition under the same name.
    pub fn add_remote(&mut self, name: &str, mut remote: Remote) -> Result<()> {
        validate(name, &mut remote)?;
        self.remotes.insert(name.to_string(), remote);
        Ok(())
    }

    /// A loaded remote, by display name.
    pub fn remote(&self, name: &str) -> Option<&Remote> {
        self.remotes.get(name)
    }

    /// Encodes one button press into its Pronto code without transmitting.
    ///
    /// Takes `&mut self` because an MCE encode advances the toggle.
    pub fn encode_remote_code(&mut self, remote_name: &str, button_name: &str) -> Result<String> {
        let remote = self
            .remotes
            .get(remote_name)
            .ok_or_else(|| Error::Lookup(format!("unknown remote {remote_name:?}")))?;
        let button = remote.functions.get(button_name).ok_or_else(|| {
            Error::Lookup(format!(
                "remote {remote_name:?} has no button {button_name:?}"
            ))
        })?;
        let protocol = remote
            .encoding
            .classified
            .ok_or_else(|| Error::Config(format!("remote {remote_name:?} was never validated")))?;
        let bytes = button.bytes.as_ref().ok_or_else(|| {
            Error::Config(format!("button {button_name:?} was never validated"))
        })?;

        let toggle = if protocol == Protocol::Rc6(Rc6Variant::Mce) {
            self.mce_toggle = !self.mce_toggle;
            self.mce_toggle
        } else {
            false
        };
        protocols::encode(protocol, bytes, remote.encoding.repeat_count(), toggle)
    }

    /// Encodes a button and hands the code to the remote's transmitter.
    ///
    /// Unknown remote or button names are logged and the call is a no-op,
    /// as is a service index without a registered transport.
    pub fn send_remote_code(&mut self, remote_name: &str, button_name: &str) -> Result<()> {
        let pronto = match self.encode_remote_code(remote_name, button_name) {
            Ok(pronto) => pronto,
            Err(Error::Lookup(message)) => {
                warn!("{message}; nothing sent");
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        // the lookup succeeded above
        let emitter = self.remotes[remote_name].ir_emitter.clone();
        self.transmit(&emitter, &pronto)
    }

    /// Sends a one-off IRP code without a stored remote. All parameters
    /// arrive as strings (decimal or `0x` hex); an ephemeral single-button
    /// remote is validated and parked in the reserved [`AD_HOC_REMOTE`]
    /// slot, then sent through the normal path.
    #[allow(clippy::too_many_arguments)]
    pub fn send_irp_code(
        &mut self,
        protocol: &str,
        device: &str,
        subdevice: &str,
        function: &str,
        repeats: &str,
        ir_device: &str,
        service_idx: &str,
    ) -> Result<()> {
        let parse = |what: &str, text: &str| {
            parse_int(text).ok_or_else(|| Error::Config(format!("{what} {text:?} is not a number")))
        };
        let service_idx = u8::try_from(parse("ServiceIdx", service_idx)?)
            .map_err(|_| Error::Config("ServiceIdx out of range".to_string()))?;

        let mut functions = BTreeMap::new();
        functions.insert(
            AD_HOC_BUTTON.to_string(),
            Button {
                fnc: Fnc::Text(function.to_string()),
                note: None,
                freq: None,
                obc: None,
                bytes: None,
            },
        );
        let remote = Remote {
            model: "ad-hoc IRP code".to_string(),
            ir_emitter: IrEmitter {
                device: ir_device.to_string(),
                service_idx,
            },
            encoding: Encoding {
                protocol: protocol.to_string(),
                device: Some(parse("Device", device)?),
                subdevice: Some(parse("Subdevice", subdevice)?),
                lsb_first: true,
                repeats: Some(parse_int(repeats).unwrap_or(0)),
                kaseikyo: false,
                classified: None,
            },
            functions,
        };
        self.add_remote(AD_HOC_REMOTE, remote)?;
        self.send_remote_code(AD_HOC_REMOTE, AD_HOC_BUTTON)
    }

    fn transmit(&self, emitter: &IrEmitter, pronto: &str) -> Result<()> {
        match self.transmitters.get(&emitter.service_idx) {
            Some(transmitter) => transmitter.send_pronto(&emitter.device, pronto),
            None => {
                match unimplemented_service_name(emitter.service_idx) {
                    Some(name) => warn!(
                        "transmitter service {} ({name}) is not implemented; dropping code",
                        emitter.service_idx
                    ),
                    None => warn!(
                        "no transmitter registered for service {}; dropping code",
                        emitter.service_idx
                    ),
                }
                Ok(())
            }
        }
    }
}

impl Default for ProntoCast {
    fn default() -> Self {
        Self::new()
    }
}
