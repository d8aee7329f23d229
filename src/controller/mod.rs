//! # Controller
//!
//! [`ProntoCast`] is the dispatch facade: it owns the validated remote
//! table, the registry of transmitter transports, and the one genuinely
//! long-lived piece of codec state, the MCE toggle. The two public send
//! operations (by remote/button name, and the ad-hoc IRP path) both run
//! through it.
//!
//! **Thread Safety**:
//!   Encoding advances the MCE toggle, so the send methods take `&mut
//!   self`. If multi-threaded access is needed, wrap the instance in a
//!   Mutex.

mod cast;

pub use cast::{ProntoCast, AD_HOC_BUTTON, AD_HOC_REMOTE};
