#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

//! # ledbank GPIO
//!
//! Pin objects for port/bit addressed GPIO lines. A [`Gpio`] pool owns the
//! platform's [`HardwareAccess`](ledbank_core::HardwareAccess) implementation
//! and a bounded arena of [`Line`]s; callers hold [`PinHandle`]s.
//!
//! ```
//! use ledbank_gpio::{GpioConfig, StaticGpio, Gpio};
//! use ledbank_sim::SimPort;
//!
//! let mut gpio: StaticGpio<SimPort> = Gpio::new_static(SimPort::new(), GpioConfig::default());
//! let red_led = gpio.create(1, 7)?;
//! gpio.set_output(red_led, true)?;
//! gpio.set_state(red_led, false)?;
//! # Ok::<(), ledbank_core::LedError>(())
//! ```

pub mod config;
pub mod hal;
pub mod pin;
pub mod shared;

pub use config::*;
pub use hal::PinRef;
pub use pin::*;
pub use shared::SharedGpio;
