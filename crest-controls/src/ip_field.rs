//! A masked IPv4 address entry field.
//!
//! ## Usage
//!
//! The host renders a line edit with the input mask `000.000.000.000; `
//! and consults this module for two things: validating the masked text as
//! the user types, and moving the cursor a whole octet at a time on tab and
//! backtab. Octets still showing mask filler (spaces or underscores) leave
//! the address incomplete rather than wrong.

use crate::event::Key;

/// Validation verdict for the masked text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ip4Validity {
    /// A complete, well-formed address.
    Acceptable,
    /// Not yet complete, but a valid prefix of one.
    Intermediate,
    /// Cannot become a valid address without deleting something.
    Invalid,
}

/// Validates masked IPv4 text.
///
/// Empty text is acceptable (the empty field is a valid resting state).
/// More than four octets, or an octet outside `0..=255`, is invalid; empty
/// or filler-only octets and non-numeric residue are intermediate.
pub fn validate(address: &str) -> Ip4Validity {
    if address.is_empty() {
        return Ip4Validity::Acceptable;
    }
    let octets: Vec<&str> = address.split('.').collect();
    if octets.len() > 4 {
        return Ip4Validity::Invalid;
    }
    let mut has_empty_octet = false;
    for octet in &octets {
        if octet.is_empty() || octet.chars().all(|c| c == '_' || c == ' ') {
            has_empty_octet = true;
            continue;
        }
        let Ok(value) = octet.trim_matches([' ', '_']).parse::<i64>() else {
            return Ip4Validity::Intermediate;
        };
        if !(0..=255).contains(&value) {
            return Ip4Validity::Invalid;
        }
    }
    if octets.len() < 4 || has_empty_octet {
        return Ip4Validity::Intermediate;
    }
    Ip4Validity::Acceptable
}

fn dot_positions(display: &str) -> Option<[usize; 3]> {
    let mut dots = display
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .map(|(i, _)| i);
    let positions = [dots.next()?, dots.next()?, dots.next()?];
    dots.next().is_none().then_some(positions)
}

/// Computes the cursor position for a tab or backtab press, jumping one
/// octet at a time through the masked display text.
///
/// Returns `None` when the key is not a navigation key, when the display is
/// not a three-dot mask, or when the jump would leave the field (so the
/// host lets normal focus traversal take over).
pub fn segment_cursor(display: &str, cursor: usize, key: Key) -> Option<usize> {
    let [first, second, third] = dot_positions(display)?;
    match key {
        Key::Tab => {
            if cursor <= first {
                Some(first + 1)
            } else if cursor <= second {
                Some(second + 1)
            } else if cursor <= third {
                Some(third + 1)
            } else {
                None
            }
        }
        Key::Backtab => {
            if cursor > third {
                Some(second + 1)
            } else if cursor > second {
                Some(first + 1)
            } else if cursor > first {
                Some(0)
            } else {
                None
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_address_is_acceptable() {
        assert_eq!(validate("192.168.0.1"), Ip4Validity::Acceptable);
        assert_eq!(validate("0.0.0.0"), Ip4Validity::Acceptable);
        assert_eq!(validate("255.255.255.255"), Ip4Validity::Acceptable);
    }

    #[test]
    fn test_empty_text_is_acceptable() {
        assert_eq!(validate(""), Ip4Validity::Acceptable);
    }

    #[test]
    fn test_partial_address_is_intermediate() {
        assert_eq!(validate("192.168"), Ip4Validity::Intermediate);
        assert_eq!(validate("192.168.."), Ip4Validity::Intermediate);
        assert_eq!(validate("192.168.___.1"), Ip4Validity::Intermediate);
        assert_eq!(validate("192.168.   .1"), Ip4Validity::Intermediate);
    }

    #[test]
    fn test_octet_out_of_range_is_invalid() {
        assert_eq!(validate("256.0.0.1"), Ip4Validity::Invalid);
        assert_eq!(validate("10.999.0.1"), Ip4Validity::Invalid);
    }

    #[test]
    fn test_too_many_octets_is_invalid() {
        assert_eq!(validate("1.2.3.4.5"), Ip4Validity::Invalid);
    }

    #[test]
    fn test_non_numeric_residue_is_intermediate() {
        assert_eq!(validate("19a.0.0.1"), Ip4Validity::Intermediate);
    }

    #[test]
    fn test_tab_jumps_to_next_octet() {
        // Mask display: dots at 3, 7, 11.
        let display = "192.168.  0.  1";
        assert_eq!(segment_cursor(display, 0, Key::Tab), Some(4));
        assert_eq!(segment_cursor(display, 3, Key::Tab), Some(4));
        assert_eq!(segment_cursor(display, 5, Key::Tab), Some(8));
        assert_eq!(segment_cursor(display, 9, Key::Tab), Some(12));
        assert_eq!(segment_cursor(display, 13, Key::Tab), None);
    }

    #[test]
    fn test_backtab_jumps_to_previous_octet() {
        let display = "192.168.  0.  1";
        assert_eq!(segment_cursor(display, 14, Key::Backtab), Some(8));
        assert_eq!(segment_cursor(display, 10, Key::Backtab), Some(4));
        assert_eq!(segment_cursor(display, 6, Key::Backtab), Some(0));
        assert_eq!(segment_cursor(display, 2, Key::Backtab), None);
    }

    #[test]
    fn test_navigation_needs_masked_display() {
        assert_eq!(segment_cursor("no dots here", 0, Key::Tab), None);
        assert_eq!(segment_cursor("192.168.0.0.1", 0, Key::Tab), None);
        assert_eq!(segment_cursor("192.168.0.1", 0, Key::Space), None);
    }
}
