//! Platform-agnostic refresh logic for battery-powered sensor panels
//!
//! After every display refresh the firmware asks this crate what to do next:
//! keep waiting for sensor data, stay awake while on the charger, or drop into
//! deep sleep. It has NO hardware dependencies; boards feed it a
//! [`RefreshContext`] and act on the returned [`RefreshAction`].
//!
//! ## Decision table
//!
//! | sensors ready | charger known | charging | action             |
//! |---------------|---------------|----------|--------------------|
//! | no            | any           | any      | `WAIT_FOR_DATA`    |
//! | yes           | yes           | yes      | `STAY_AWAKE`       |
//! | yes           | yes           | no       | `ENTER_DEEP_SLEEP` |
//! | yes           | no            | any      | `ENTER_DEEP_SLEEP` |

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![deny(warnings)]

#[macro_use]
mod fmt;

pub mod action;
pub mod context;
pub mod decide;
pub mod history;
pub mod policy;

pub use action::{InvalidActionCode, RefreshAction};
pub use context::RefreshContext;
pub use decide::decide;
pub use history::RefreshHistory;
pub use policy::{RefreshPolicy, RefreshStep};
