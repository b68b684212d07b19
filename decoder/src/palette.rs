//! Thread palette and the color-change cycle.
//!
//! Stitch files do not name their colors. A color-change record only says
//! "next color"; which color that is comes from a caller-supplied
//! [`ColorOrder`] that indexes into a [`Palette`]. Display values (RGB and
//! so on) belong to whoever renders the output.

use std::str::FromStr;

use crate::error::{DecodeError, DecodeResult};
use crate::types::ColorId;

const DEFAULT_NAMES: [&str; 12] = [
    "white", "black", "gray", "blue", "yellow", "red", "orange", "purple", "green", "brown",
    "beige", "pink",
];

const DEFAULT_ORDER: [u8; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 2, 3, 4];

/// Ordered list of named thread colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    names: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            names: DEFAULT_NAMES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Palette {
    /// Builds a palette from color names in index order.
    ///
    /// Only the first 256 names are addressable by a [`ColorId`].
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).take(256).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ColorId) -> bool {
        usize::from(id.raw()) < self.names.len()
    }

    /// Returns the name of a palette entry.
    #[must_use]
    pub fn name(&self, id: ColorId) -> Option<&str> {
        self.names.get(usize::from(id.raw())).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorId, &str)> {
        self.names.iter().enumerate().map(|(index, name)| {
            // `new` caps the palette at 256 entries.
            #[allow(clippy::cast_possible_truncation)]
            let id = ColorId::new(index as u8);
            (id, name.as_str())
        })
    }
}

/// The sequence of palette entries that successive color changes walk
/// through. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorOrder {
    entries: Vec<ColorId>,
}

impl ColorOrder {
    /// Creates an order; fails if `entries` is empty.
    pub fn new(entries: impl Into<Vec<ColorId>>) -> DecodeResult<Self> {
        let entries = entries.into();
        if entries.is_empty() {
            return Err(DecodeError::EmptyColorOrder);
        }
        Ok(Self { entries })
    }

    /// Creates an order from raw palette indices.
    pub fn from_indices(indices: &[u8]) -> DecodeResult<Self> {
        Self::new(indices.iter().copied().map(ColorId::new).collect::<Vec<_>>())
    }

    /// Parses a comma-separated list of palette indices, e.g. `"2,3,4"`.
    pub fn parse(text: &str) -> DecodeResult<Self> {
        let entries = text
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u8>()
                    .map(ColorId::new)
                    .map_err(|_| DecodeError::InvalidColorOrder {
                        entry: part.to_string(),
                    })
            })
            .collect::<DecodeResult<Vec<_>>>()?;
        Self::new(entries)
    }

    /// Checks that every entry exists in `palette`.
    pub fn validate(&self, palette: &Palette) -> DecodeResult<()> {
        match self.entries.iter().find(|id| !palette.contains(**id)) {
            Some(id) => Err(DecodeError::ColorOutOfRange {
                index: id.raw(),
                palette_len: palette.len(),
            }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[ColorId] {
        &self.entries
    }

    /// Color used after `changes` color-change records.
    #[must_use]
    pub fn color_after(&self, changes: u64) -> ColorId {
        // Lossless: the remainder is below `len`.
        #[allow(clippy::cast_possible_truncation)]
        let slot = (changes % self.entries.len() as u64) as usize;
        self.entries[slot]
    }
}

/// Gray through pink, then gray, blue and yellow once more before wrapping.
impl Default for ColorOrder {
    fn default() -> Self {
        Self {
            entries: DEFAULT_ORDER.iter().copied().map(ColorId::new).collect(),
        }
    }
}

impl FromStr for ColorOrder {
    type Err = DecodeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

/// Cursor into a [`ColorOrder`], advanced once per color-change record.
#[derive(Debug, Clone)]
pub struct ColorCycle<'a> {
    order: &'a ColorOrder,
    slot: usize,
    changes: u64,
}

impl<'a> ColorCycle<'a> {
    #[must_use]
    pub const fn new(order: &'a ColorOrder) -> Self {
        Self {
            order,
            slot: 0,
            changes: 0,
        }
    }

    /// The active color.
    #[must_use]
    pub fn current(&self) -> ColorId {
        self.order.entries[self.slot]
    }

    /// Moves to the next color, wrapping at the end of the order, and
    /// returns it.
    pub fn advance(&mut self) -> ColorId {
        self.slot = (self.slot + 1) % self.order.len();
        self.changes += 1;
        self.current()
    }

    /// Position of the cursor within the order.
    #[must_use]
    pub const fn slot(&self) -> usize {
        self.slot
    }

    /// Number of times [`advance`](Self::advance) has been called.
    #[must_use]
    pub const fn changes(&self) -> u64 {
        self.changes
    }
}
