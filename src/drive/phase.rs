//! Half-step phase table and phase-index arithmetic.

/// Number of motor coil lines.
pub const COIL_COUNT: usize = 4;

/// Number of entries in the half-step cycle.
pub const PHASE_COUNT: usize = 8;

/// The 28BYJ-48 half-step drive sequence, from the manufacturer's datasheet.
///
/// One row per phase, one level per coil line in wiring order. Stepping
/// through rows in order turns the rotor one way; in reverse order, the other.
pub const PHASE_TABLE: [[bool; COIL_COUNT]; PHASE_COUNT] = [
    [true, false, false, true],
    [true, false, false, false],
    [true, true, false, false],
    [false, true, false, false],
    [false, true, true, false],
    [false, false, true, false],
    [false, false, true, true],
    [false, false, false, true],
];

/// Index into [`PHASE_TABLE`], always normalized into `[0, 8)`.
///
/// Stored non-negatively; signed advances (including the rewind stride of -2)
/// wrap correctly through zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PhaseIndex(u8);

impl PhaseIndex {
    /// Create a phase index, wrapping the raw value into range.
    #[inline]
    pub fn new(raw: u8) -> Self {
        Self(raw % PHASE_COUNT as u8)
    }

    /// Get the index value in `[0, 8)`.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// The coil levels for this phase.
    #[inline]
    pub fn levels(self) -> [bool; COIL_COUNT] {
        PHASE_TABLE[self.0 as usize]
    }

    /// Advance by a signed number of phases, wrapping into `[0, 8)`.
    #[inline]
    pub fn advance(self, delta: i8) -> Self {
        let n = PHASE_COUNT as i16;
        let next = (self.0 as i16 + delta as i16).rem_euclid(n);
        Self(next as u8)
    }
}
