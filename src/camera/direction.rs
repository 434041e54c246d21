use bitflags::bitflags;

bitflags! {
    /// Cardinal directions a camera command acts along.
    ///
    /// The bit order matches an SDL joystick hat (up, right, down, left), so a
    /// raw hat value can be read straight into this set. Diagonals are plain
    /// unions of two cardinal bits.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Direction: u8 {
        const NORTH = 1 << 0;
        const EAST = 1 << 1;
        const SOUTH = 1 << 2;
        const WEST = 1 << 3;

        const NORTH_EAST = Self::NORTH.bits() | Self::EAST.bits();
        const NORTH_WEST = Self::NORTH.bits() | Self::WEST.bits();
        const SOUTH_EAST = Self::SOUTH.bits() | Self::EAST.bits();
        const SOUTH_WEST = Self::SOUTH.bits() | Self::WEST.bits();
    }
}

impl Direction {
    pub const CARDINALS: [Direction; 4] = [
        Direction::NORTH,
        Direction::EAST,
        Direction::SOUTH,
        Direction::WEST,
    ];

    /// Each cardinal bit contained in this set, north first, clockwise.
    pub fn cardinals(self) -> impl Iterator<Item = Direction> {
        Self::CARDINALS.into_iter().filter(move |d| self.contains(*d))
    }

    /// Drops both bits of any opposing pair (north/south, east/west).
    pub fn without_conflicts(self) -> Self {
        let mut out = self;
        if out.contains(Self::NORTH | Self::SOUTH) {
            out.remove(Self::NORTH | Self::SOUTH);
        }
        if out.contains(Self::EAST | Self::WEST) {
            out.remove(Self::EAST | Self::WEST);
        }
        out
    }

    /// Vertical component of a relative motion: negative is up (north).
    pub fn from_vertical(delta: f32) -> Option<Self> {
        if delta < 0.0 {
            Some(Self::NORTH)
        } else if delta > 0.0 {
            Some(Self::SOUTH)
        } else {
            None
        }
    }

    /// Horizontal component of a relative motion: negative is left (west).
    pub fn from_horizontal(delta: f32) -> Option<Self> {
        if delta < 0.0 {
            Some(Self::WEST)
        } else if delta > 0.0 {
            Some(Self::EAST)
        } else {
            None
        }
    }
}
