use crate::device::ProntoTransmitter;
use crate::Result;

// Note: TransmitterEmulator is for development/testing only.
pub struct TransmitterEmulator;

impl ProntoTransmitter for TransmitterEmulator {
    fn send_pronto(&self, device: &str, pronto: &str) -> Result<()> {
        println!("Simulated send to {device}: {pronto}");
        Ok(())
    }
}
