/// Pitch band in which an unconstrained camera is upside down (inclusive).
pub const INVERTED_PITCH_MIN: f32 = 90.0;
pub const INVERTED_PITCH_MAX: f32 = 270.0;

/// Two-state machine tracking whether free-look rotation has carried the
/// camera over the pole.
///
/// Crossing into `[90, 270]` moves `Upright -> Inverted`, crossing back out
/// moves `Inverted -> Upright`. Each edge asks the caller to flip `world_up`
/// and `right` exactly once; staying inside or outside the band is silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RollState {
    #[default]
    Upright,
    Inverted,
}

impl RollState {
    /// Returns the next state and whether the roll compensation must be
    /// applied for this step.
    pub fn transition(self, pitch: f32) -> (RollState, bool) {
        let inside = (INVERTED_PITCH_MIN..=INVERTED_PITCH_MAX).contains(&pitch);
        match (self, inside) {
            (RollState::Upright, true) => (RollState::Inverted, true),
            (RollState::Inverted, false) => (RollState::Upright, true),
            (state, _) => (state, false),
        }
    }

    pub fn is_inverted(self) -> bool {
        self == RollState::Inverted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_fire_once() {
        let (s, flip) = RollState::Upright.transition(45.0);
        assert_eq!((s, flip), (RollState::Upright, false));

        let (s, flip) = s.transition(90.0);
        assert_eq!((s, flip), (RollState::Inverted, true));

        let (s, flip) = s.transition(180.0);
        assert_eq!((s, flip), (RollState::Inverted, false));

        let (s, flip) = s.transition(270.0);
        assert_eq!((s, flip), (RollState::Inverted, false));

        let (s, flip) = s.transition(270.5);
        assert_eq!((s, flip), (RollState::Upright, true));

        let (_, flip) = s.transition(300.0);
        assert!(!flip);
    }
}
