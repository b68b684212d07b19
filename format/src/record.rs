//! Command bytes and 3-byte stitch records.

/// Size of one record in bytes: command, Y magnitude, X magnitude.
pub const RECORD_SIZE: usize = 3;

/// The first byte of a record.
///
/// Flag bits classify the record and give the signs of its deltas. Bits not
/// named here carry no meaning for decoding and are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Command(u8);

impl Command {
    /// Record moves the needle without stitching.
    pub const JUMP: u8 = 1 << 0;

    /// Record switches to the next thread color.
    pub const COLOR_CHANGE: u8 = 1 << 3;

    /// X magnitude is negative.
    pub const NEG_X: u8 = 1 << 5;

    /// Y magnitude is negative.
    pub const NEG_Y: u8 = 1 << 6;

    /// Creates a command from a raw byte.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Returns the raw command byte.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Returns `true` if the jump bit is set.
    #[must_use]
    pub const fn is_jump(self) -> bool {
        self.0 & Self::JUMP != 0
    }

    /// Returns `true` if the color-change bit is set.
    #[must_use]
    pub const fn is_color_change(self) -> bool {
        self.0 & Self::COLOR_CHANGE != 0
    }

    /// Returns `true` if the X delta is negated.
    #[must_use]
    pub const fn negates_x(self) -> bool {
        self.0 & Self::NEG_X != 0
    }

    /// Returns `true` if the Y delta is negated.
    #[must_use]
    pub const fn negates_y(self) -> bool {
        self.0 & Self::NEG_Y != 0
    }

    /// Classifies the command.
    ///
    /// Color change is checked first: a byte with both the color-change and
    /// the jump bit is a color change only.
    #[must_use]
    pub const fn kind(self) -> RecordKind {
        if self.is_color_change() {
            RecordKind::ColorChange
        } else if self.is_jump() {
            RecordKind::Jump
        } else {
            RecordKind::Stitch
        }
    }
}

impl From<u8> for Command {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

/// What a record does to the path being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Continue the current run with a visible stitch.
    Stitch,
    /// Move without stitching; ends the current run, keeps the color.
    Jump,
    /// End the current run and switch to the next color.
    ColorChange,
}

impl RecordKind {
    /// Human-readable name used by dumps and logs.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stitch => "Stitch",
            Self::Jump => "Jump",
            Self::ColorChange => "Color Change",
        }
    }
}

/// One decoded 3-byte record.
///
/// The magnitudes are stored unsigned as they appear in the file; signs come
/// from the command byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record {
    /// Command byte.
    pub command: Command,
    /// Unsigned Y magnitude.
    pub dy: u8,
    /// Unsigned X magnitude.
    pub dx: u8,
}

impl Record {
    /// Builds a record from its bytes in file order `(command, dy, dx)`.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; RECORD_SIZE]) -> Self {
        Self {
            command: Command::from_raw(bytes[0]),
            dy: bytes[1],
            dx: bytes[2],
        }
    }

    /// Returns the signed `(dx, dy)` movement of this record.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        let mut dx = self.dx as i32;
        let mut dy = self.dy as i32;
        if self.command.negates_x() {
            dx = -dx;
        }
        if self.command.negates_y() {
            dy = -dy;
        }
        (dx, dy)
    }

    /// Classifies the record.
    #[must_use]
    pub const fn kind(self) -> RecordKind {
        self.command.kind()
    }
}
