//! Refresh actions and their stable numeric codes
//!
//! Firmware glue keeps the last decision in an integer global initialised to
//! `0`, so the codes below are part of the interface and must not change.

/// What the device should do after a refresh cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RefreshAction {
    /// Sensor values are still missing; keep the display as is and wait
    #[default]
    WaitForData = 0,
    /// Running from the charger; stay awake and refresh again later
    StayAwake = 1,
    /// Nothing left to do; power down until the next wake event
    EnterDeepSleep = 2,
}

impl RefreshAction {
    /// All actions in code order
    pub const ALL: [RefreshAction; 3] = [
        RefreshAction::WaitForData,
        RefreshAction::StayAwake,
        RefreshAction::EnterDeepSleep,
    ];

    /// Numeric code stored by the firmware
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Canonical upper-case name, as used in firmware logs
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WaitForData => "WAIT_FOR_DATA",
            Self::StayAwake => "STAY_AWAKE",
            Self::EnterDeepSleep => "ENTER_DEEP_SLEEP",
        }
    }
}

impl core::fmt::Display for RefreshAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RefreshAction> for u8 {
    fn from(action: RefreshAction) -> Self {
        action.code()
    }
}

impl TryFrom<u8> for RefreshAction {
    type Error = InvalidActionCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::WaitForData),
            1 => Ok(Self::StayAwake),
            2 => Ok(Self::EnterDeepSleep),
            other => Err(InvalidActionCode(other)),
        }
    }
}

/// Numeric code that does not name a [`RefreshAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidActionCode(pub u8);

impl core::fmt::Display for InvalidActionCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Invalid refresh action code: {}", self.0)
    }
}

impl core::error::Error for InvalidActionCode {}
