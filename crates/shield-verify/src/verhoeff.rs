//! # Verhoeff Checksum
//!
//! The dihedral-group checksum used by Aadhaar numbers. Detects all
//! single-digit substitutions and all adjacent transpositions, which is
//! why it is the sole fraud-detection mechanism for the most common
//! document kind.
//!
//! The multiplication, permutation, and inverse tables below are the
//! published ones; the validation loop processes the digit string in
//! reverse, indexing the permutation table by position modulo 8.

/// Multiplication table of the dihedral group D5, indexed `[checksum][digit]`.
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Permutation table, indexed `[position % 8][digit]`.
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Multiplicative inverse table for D5.
const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Run the checksum accumulator over a digit string including its check
/// digit. Returns `None` if any character is not an ASCII digit.
fn accumulate(digits: &str) -> Option<u8> {
    let mut c: u8 = 0;
    for (i, ch) in digits.chars().rev().enumerate() {
        let digit = ch.to_digit(10)? as usize;
        c = D[c as usize][P[i % 8][digit] as usize];
    }
    Some(c)
}

/// Validate a digit string that ends in its Verhoeff check digit.
///
/// Returns `false` for empty input or any non-digit character.
pub fn validate(digits: &str) -> bool {
    !digits.is_empty() && accumulate(digits) == Some(0)
}

/// Compute the check digit for a payload (a digit string *without* its
/// check digit). Returns `None` if any character is not an ASCII digit.
pub fn check_digit(payload: &str) -> Option<u8> {
    let mut c: u8 = 0;
    for (i, ch) in payload.chars().rev().enumerate() {
        let digit = ch.to_digit(10)? as usize;
        c = D[c as usize][P[(i + 1) % 8][digit] as usize];
    }
    Some(INV[c as usize])
}
