//! Character classes shared by the scorer and the generator.

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";

/// Characters counted as "special" by the scorer and drawn by the generator.
pub const SPECIAL: &[u8] = b"!@#$%^&*(),.?\":{}|<>";

/// Every class the generator must cover, in draw order.
pub const REQUIRED_CLASSES: [&[u8]; 4] = [UPPERCASE, LOWERCASE, DIGITS, SPECIAL];

/// Union of all allowed classes, used to fill the unconstrained positions.
pub fn union() -> Vec<u8> {
    REQUIRED_CLASSES.iter().flat_map(|class| class.iter().copied()).collect()
}

pub fn is_special(c: char) -> bool {
    c.is_ascii() && SPECIAL.contains(&(c as u8))
}
