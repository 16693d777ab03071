//! Logical fixture state derived from the input lines

/// Which signal animation is requested
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputState {
    /// No signal requested, running light only
    #[default]
    None,
    Left,
    Right,
    /// Both directions requested at once
    Hazard,
}

impl InputState {
    /// Derive the state from the two request lines
    pub const fn from_requests(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, true) => Self::Hazard,
            (true, false) => Self::Left,
            (false, true) => Self::Right,
            (false, false) => Self::None,
        }
    }

    /// Whether the left indicator zone animates in this state
    pub const fn animates_left(self) -> bool {
        matches!(self, Self::Left | Self::Hazard)
    }

    /// Whether the right indicator zone animates in this state
    pub const fn animates_right(self) -> bool {
        matches!(self, Self::Right | Self::Hazard)
    }
}

/// Running light brightness mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AmbientLevel {
    #[default]
    Day,
    Night,
}

impl AmbientLevel {
    pub const fn from_night(night: bool) -> Self {
        if night { Self::Night } else { Self::Day }
    }
}

/// Raw levels of the three input lines for one loop iteration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputRequests {
    pub left: bool,
    pub right: bool,
    pub night: bool,
}

impl InputRequests {
    pub const fn new(left: bool, right: bool, night: bool) -> Self {
        Self { left, right, night }
    }

    pub const fn state(self) -> InputState {
        InputState::from_requests(self.left, self.right)
    }

    pub const fn ambient(self) -> AmbientLevel {
        AmbientLevel::from_night(self.night)
    }
}
