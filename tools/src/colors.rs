//! Display values for palette color names.

/// RGB triple for a palette color name. Unknown names render black.
#[must_use]
pub fn rgb_for(name: &str) -> [u8; 3] {
    match name.to_ascii_lowercase().as_str() {
        "white" => [255, 255, 255],
        "gray" | "grey" => [128, 128, 128],
        "blue" => [0, 0, 255],
        "yellow" => [255, 255, 0],
        "red" => [255, 0, 0],
        "orange" => [255, 200, 0],
        "purple" => [128, 0, 128],
        "green" => [0, 255, 0],
        "brown" => [165, 42, 42],
        "beige" => [245, 245, 220],
        "pink" => [255, 175, 175],
        _ => [0, 0, 0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decoder::Palette;

    #[test]
    fn known_colors() {
        assert_eq!(rgb_for("white"), [255, 255, 255]);
        assert_eq!(rgb_for("purple"), [128, 0, 128]);
        assert_eq!(rgb_for("Beige"), [245, 245, 220]);
    }

    #[test]
    fn unknown_is_black() {
        assert_eq!(rgb_for("chartreuse"), [0, 0, 0]);
        assert_eq!(rgb_for("black"), [0, 0, 0]);
    }

    #[test]
    fn default_palette_is_covered() {
        for (_, name) in Palette::default().iter() {
            if name != "black" {
                assert_ne!(rgb_for(name), [0, 0, 0], "{name} has no rgb entry");
            }
        }
    }
}
