//! Block letter fonts for the mauseu demo page.

/// Large block letters A-Z (7 lines tall, mostly 6 chars wide; M and W are 7)
pub const LETTERS: [[&str; 7]; 26] = [
    // A
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██████",
        "██  ██",
        "██  ██",
        "██  ██",
    ],
    // B
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
    ],
    // C
    [
        " ████ ",
        "██  ██",
        "██    ",
        "██    ",
        "██    ",
        "██  ██",
        " ████ ",
    ],
    // D
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "█████ ",
    ],
    // E
    [
        "██████",
        "██    ",
        "██    ",
        "█████ ",
        "██    ",
        "██    ",
        "██████",
    ],
    // F
    [
        "██████",
        "██    ",
        "██    ",
        "█████ ",
        "██    ",
        "██    ",
        "██    ",
    ],
    // G
    [
        " ████ ",
        "██  ██",
        "██    ",
        "██ ███",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // H
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██████",
        "██  ██",
        "██  ██",
        "██  ██",
    ],
    // I
    [
        "██████",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "██████",
    ],
    // J
    [
        "██████",
        "    ██",
        "    ██",
        "    ██",
        "    ██",
        "██  ██",
        " ████ ",
    ],
    // K
    [
        "██  ██",
        "██ ██ ",
        "████  ",
        "███   ",
        "████  ",
        "██ ██ ",
        "██  ██",
    ],
    // L
    [
        "██    ",
        "██    ",
        "██    ",
        "██    ",
        "██    ",
        "██    ",
        "██████",
    ],
    // M
    [
        "██   ██",
        "███ ███",
        "███████",
        "██ █ ██",
        "██   ██",
        "██   ██",
        "██   ██",
    ],
    // N
    [
        "██  ██",
        "███ ██",
        "██████",
        "██ ███",
        "██  ██",
        "██  ██",
        "██  ██",
    ],
    // O
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // P
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
        "██    ",
        "██    ",
        "██    ",
    ],
    // Q
    [
        " ████ ",
        "██  ██",
        "██  ██",
        "██  ██",
        "██ ███",
        "██  ██",
        " █████",
    ],
    // R
    [
        "█████ ",
        "██  ██",
        "██  ██",
        "█████ ",
        "████  ",
        "██ ██ ",
        "██  ██",
    ],
    // S
    [
        " ████ ",
        "██  ██",
        "██    ",
        " ████ ",
        "    ██",
        "██  ██",
        " ████ ",
    ],
    // T
    [
        "██████",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
    ],
    // U
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
    ],
    // V
    [
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        "██  ██",
        " ████ ",
        "  ██  ",
    ],
    // W
    [
        "██   ██",
        "██   ██",
        "██   ██",
        "██ █ ██",
        "███████",
        "███ ███",
        "██   ██",
    ],
    // X
    [
        "██  ██",
        "██  ██",
        " ████ ",
        "  ██  ",
        " ████ ",
        "██  ██",
        "██  ██",
    ],
    // Y
    [
        "██  ██",
        "██  ██",
        " ████ ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
        "  ██  ",
    ],
    // Z
    [
        "██████",
        "    ██",
        "   ██ ",
        "  ██  ",
        " ██   ",
        "██    ",
        "██████",
    ],
];

/// Look up the glyph for a letter, case-insensitively.
pub fn glyph(c: char) -> Option<&'static [&'static str; 7]> {
    let upper = c.to_ascii_uppercase();
    if upper.is_ascii_uppercase() {
        Some(&LETTERS[(upper as u8 - b'A') as usize])
    } else {
        None
    }
}

/// Build a large block-letter rendering of a title.
///
/// Letters are separated by one column; a space in the title becomes a wider
/// gap. Characters without a glyph are skipped.
///
/// # Returns
/// A vector of 7 strings, each representing one line of the block art.
pub fn build_title_art(title: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(7);

    for row in 0..7 {
        let mut line = String::new();
        for c in title.chars() {
            if c == ' ' {
                line.push_str("    ");
                continue;
            }
            if let Some(letter) = glyph(c) {
                if !line.is_empty() {
                    line.push(' ');
                }
                line.push_str(letter[row]);
            }
        }
        lines.push(line);
    }

    lines
}
