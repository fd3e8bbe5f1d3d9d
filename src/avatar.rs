//! Deterministic avatar helpers for the profile view.

/// Fixed palette; the hash below picks a slot. Each entry pairs a color
/// name with its xterm-256 code for terminal display.
pub const COLORS: [(&str, u8); 12] = [
    ("red", 160),
    ("orange", 166),
    ("amber", 172),
    ("yellow", 178),
    ("lime", 106),
    ("green", 34),
    ("emerald", 35),
    ("teal", 30),
    ("cyan", 37),
    ("blue", 26),
    ("indigo", 61),
    ("purple", 91),
];

/// djb2-xor over UTF-16 code units with 32-bit wrapping, the same hash the
/// web client used, so a given name lands on the same palette slot.
fn hash_name(name: &str) -> i32 {
    let mut hash: i32 = 5381;
    for unit in name.encode_utf16() {
        hash = hash.wrapping_mul(33) ^ unit as i32;
    }
    hash
}

/// Color name from the fixed palette for a display name.
pub fn avatar_color(name: &str) -> &'static str {
    COLORS[palette_index(name)].0
}

/// xterm-256 code matching [`avatar_color`].
pub fn avatar_color_code(name: &str) -> u8 {
    COLORS[palette_index(name)].1
}

fn palette_index(name: &str) -> usize {
    hash_name(name).unsigned_abs() as usize % COLORS.len()
}

/// "Jane Doe" -> "JD", "Madonna" -> "M". First character of the first and
/// last whitespace-separated parts, uppercased.
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => String::new(),
        [only] => first_char_upper(only),
        [first, .., last] => {
            let mut out = first_char_upper(first);
            out.push_str(&first_char_upper(last));
            out
        }
    }
}

fn first_char_upper(part: &str) -> String {
    part.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
