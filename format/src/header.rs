//! The fixed-size file header.

/// Header size in bytes. Records start right after it.
pub const HEADER_SIZE: usize = 512;

/// The raw header bytes, exactly as read from the file.
#[derive(Clone, PartialEq, Eq)]
pub struct RawHeader(Box<[u8; HEADER_SIZE]>);

impl RawHeader {
    /// Wraps a full header buffer.
    #[must_use]
    pub fn new(bytes: [u8; HEADER_SIZE]) -> Self {
        Self(Box::new(bytes))
    }

    /// Returns the header bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; HEADER_SIZE] {
        &self.0
    }

    /// Reads the textual metadata fields, if any.
    #[must_use]
    pub fn info(&self) -> HeaderInfo {
        HeaderInfo::parse(self.as_bytes())
    }
}

impl std::fmt::Debug for RawHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawHeader")
            .field("label", &self.info().label)
            .finish_non_exhaustive()
    }
}

/// Metadata that encoders typically write into the header as `KEY:value`
/// lines.
///
/// None of it is needed to decode the records, and files in the wild fill
/// it inconsistently, so every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderInfo {
    /// `LA:` design label.
    pub label: Option<String>,
    /// `ST:` number of stitches.
    pub stitch_count: Option<u32>,
    /// `CO:` number of color changes.
    pub color_changes: Option<u32>,
    /// `+X:` extent to the right of the origin.
    pub max_x: Option<u32>,
    /// `-X:` extent to the left of the origin.
    pub min_x: Option<u32>,
    /// `+Y:` extent above the origin.
    pub max_y: Option<u32>,
    /// `-Y:` extent below the origin.
    pub min_y: Option<u32>,
    /// `AX:` final needle X.
    pub end_x: Option<i32>,
    /// `AY:` final needle Y.
    pub end_y: Option<i32>,
}

impl HeaderInfo {
    /// Parses header bytes. Never fails; fields that are missing or
    /// malformed are left as `None`.
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        let mut info = Self::default();
        for line in text.split(['\n', '\r']) {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim_matches(is_padding);
            match key.trim() {
                "LA" if !value.is_empty() => info.label = Some(value.to_string()),
                "ST" => info.stitch_count = parse_unsigned(value),
                "CO" => info.color_changes = parse_unsigned(value),
                "+X" => info.max_x = parse_unsigned(value),
                "-X" => info.min_x = parse_unsigned(value),
                "+Y" => info.max_y = parse_unsigned(value),
                "-Y" => info.min_y = parse_unsigned(value),
                "AX" => info.end_x = parse_signed(value),
                "AY" => info.end_y = parse_signed(value),
                _ => {}
            }
        }
        info
    }

    /// Returns `true` if no field could be read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn is_padding(c: char) -> bool {
    c.is_whitespace() || c == '\0' || c == '\u{1a}'
}

fn parse_unsigned(value: &str) -> Option<u32> {
    value.parse().ok()
}

// Writers put padding between the sign and the digits, e.g. `+    120`.
fn parse_signed(value: &str) -> Option<i32> {
    let (negative, digits) = match value.chars().next()? {
        '-' => (true, value[1..].trim_start()),
        '+' => (false, value[1..].trim_start()),
        _ => (false, value),
    };
    let magnitude: i32 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
