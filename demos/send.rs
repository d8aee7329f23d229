//! Loads a small remote-definitions file and prints the encoded Pronto
//! codes through the emulator transmitter.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example send
//! ```

use prontocast::{ProntoCast, Result, TransmitterEmulator, SERVICE_BROADLINK};

const REMOTES_JSON: &str = r#"
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
            "Power": { "Fnc": "0x08", "Note": "toggle" },
            "VolumeUp": { "Fnc": "0x12" },
            "VolumeDown": { "Fnc": "0x13" }
        }
    },
    "MediaCenter": {
        "Model": "Example HTPC",
        "IRemitter": { "Device": "164", "ServiceIdx": "2" },
        "Encoding": {
            "Protocol": "MCE",
            "Device": 12, "Subdevice": 15
        },
        "Functions": {
            "Ok": { "Fnc": 13 }
        }
    }
}"#;

fn main() -> Result<()> {
    env_logger::init();

    let mut cast = ProntoCast::new();
    cast.register_transmitter(SERVICE_BROADLINK, Box::new(TransmitterEmulator));
    cast.load_remotes_json(REMOTES_JSON)?;

    cast.send_remote_code("MyTV", "Power")?;
    cast.send_remote_code("MyTV", "VolumeUp")?;

    // two MCE sends of the same button differ in the toggle bit
    cast.send_remote_code("MediaCenter", "Ok")?;
    cast.send_remote_code("MediaCenter", "Ok")?;

    // an ad-hoc IRP send, no stored remote needed
    cast.send_irp_code("RC5", "5", "-1", "35", "0", "164", "2")?;

    Ok(())
}
