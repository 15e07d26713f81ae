//! Hardware abstraction traits for the refresh cycle
//!
//! Boards implement [`SensorReadiness`], [`ChargeSense`] and [`PowerControl`];
//! [`RefreshDriver`] samples the first two, asks `refresh-core` for a
//! decision and hands the resulting step to the third.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(warnings)]

#[macro_use]
mod fmt;

pub mod charger;
pub mod cycle;
pub mod traits;

pub use charger::{ActiveLevel, PinChargeSense};
pub use cycle::RefreshDriver;
pub use traits::{sample_context, ChargeSense, PowerControl, SensorReadiness};

pub use refresh_core::{RefreshAction, RefreshContext, RefreshPolicy, RefreshStep};
