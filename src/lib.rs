#![doc = r##"
# PRONTOCAST Library

**prontocast** is an open source Rust library that turns a declarative
description of a "virtual remote" (carrier protocol, device/subdevice
addresses, and per-button function codes) into Pronto CCF hex codes: the
space-separated 4-hex-digit waveform format that network IR blasters
(GC100, BroadLink and friends) replay verbatim.

The crate implements the encoders for roughly fifteen IR protocol families:
the NEC family (NEC1/NEC2, LG, Samsung NECx2, Pioneer and the Denon/Sharp
NEC offshoots), the 48-bit Kaseikyo family (Panasonic, Denon-K, JVC-48 and
several rarer OEMs), the Denon/Sharp two-frame protocol, Mitsubishi, JVC,
Philips RC5 and the RC6 family (RC6-0-16, Sky's RC6-6-20, and MCE with its
alternating toggle bit), RCA, Sony SIRC in its 12/15/20-bit forms, plus
GC100, raw-timing and Pronto passthroughs. Each encoder reproduces its
protocol's modulation bit-exactly: pulse-distance, pulse-width, and
bi-phase (Manchester) schemes, endianness adjustment, checksum synthesis,
complement bytes, and frame-length padding derived from the historical
4.145152 MHz Pronto master oscillator.

## Remote definitions

Remotes are described in JSON, one entry per remote:

```json
{
  "MyTV": {
    "Model": "Example TV",
    "IRemitter": { "Device": "164", "ServiceIdx": "2" },
    "Encoding": {
      "Protocol": "NEC2",
      "Device": 4, "Subdevice": -1,
      "LSBfirst": true, "Repeats": "0"
    },
    "Functions": {
      "Power": { "Fnc": "0x08", "Note": "toggle" }
    }
  }
}
```

`Fnc` is a number (or decimal/hex string) for the IRP protocols, a string
of 4-hex-digit words for `PRONTO` buttons, and an integer list for `GC100`
and `RAW` buttons (raw buttons carry their carrier in a sibling `Freq`
field). Numeric fields may be JSON numbers or strings; both appear in the
wild.

## Usage Example

```rust
use prontocast::{ProntoCast, TransmitterEmulator, Result};

fn main() -> Result<()> {
    let mut cast = ProntoCast::new();

    // The host registers a transport per transmitter service index; the
    // emulator just prints the encoded code.
    cast.register_transmitter(2, Box::new(TransmitterEmulator));

    cast.load_remotes_json(r#"{
        "MyTV": {
            "Model": "Example TV",
            "IRemitter": { "Device": "164", "ServiceIdx": "2" },
            "Encoding": { "Protocol": "NEC2", "Device": 4, "Subdevice": -1 },
            "Functions": { "Power": { "Fnc": "0x08" } }
        }
    }"#)?;

    cast.send_remote_code("MyTV", "Power")?;

    // One-off sends without a stored remote route through the same path.
    cast.send_irp_code("RC5", "5", "-1", "35", "0", "164", "2")?;
    Ok(())
}
```

## Scope

The crate is the codec only. It performs no network or device I/O of its
own: every encoded code is handed to whatever [`ProntoTransmitter`] the
host registered for the emitter's service index. Decoding received IR and
learning mode are out of scope.
"##]

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;

mod bits;
mod clock;
mod controller;
mod device;
mod errors;
mod manchester;
mod pronto;
mod protocols;
mod remote;

pub use controller::{ProntoCast, AD_HOC_BUTTON, AD_HOC_REMOTE};
pub use device::{
    ProntoTransmitter, TransmitterEmulator, SERVICE_BROADLINK, SERVICE_GC100, SERVICE_KIRA,
    SERVICE_TASMOTA,
};
pub use errors::{Error, Result};
pub use protocols::{KaseikyoVariant, NecVariant, Protocol, Rc6Variant, SonyVariant};
pub use remote::{Button, CmdBytes, CmdObc, Encoding, Fnc, IrEmitter, Remote, RemoteSet};
