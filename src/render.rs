//! Turns a remaining-second count into big `MM:SS` block text
use crate::glyphs::{self, ROWS};

/// The five rows of block art for one tick of the countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    rows: [String; ROWS],
}

impl Frame {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

pub fn format_clock(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

pub fn render(total_seconds: u64) -> Frame {
    let mut rows: [String; ROWS] = Default::default();
    for ch in format_clock(total_seconds).chars() {
        let glyph = glyphs::glyph(ch).expect("format_clock only produces digits and ':'");
        for (row, part) in rows.iter_mut().zip(glyph) {
            row.push_str(part);
            row.push(' ');
        }
    }
    Frame { rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(frame: &Frame) -> String {
        frame
            .rows()
            .iter()
            .map(|row| row.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(128), "02:08");
        assert_eq!(format_clock(5999), "99:59");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn test_zero() {
        let expected = "\
██████ ██████    ██████ ██████
██  ██ ██  ██ ██ ██  ██ ██  ██
██  ██ ██  ██    ██  ██ ██  ██
██  ██ ██  ██ ██ ██  ██ ██  ██
██████ ██████    ██████ ██████";
        assert_eq!(joined(&render(0)), expected);
    }

    #[test]
    fn test_10_seconds() {
        let expected = "\
██████ ██████       ██  ██████
██  ██ ██  ██ ██   ███  ██  ██
██  ██ ██  ██       ██  ██  ██
██  ██ ██  ██ ██    ██  ██  ██
██████ ██████       ██  ██████";
        assert_eq!(joined(&render(10)), expected);
    }

    #[test]
    fn test_60_seconds() {
        let expected = "\
██████    ██     ██████ ██████
██  ██   ███  ██ ██  ██ ██  ██
██  ██    ██     ██  ██ ██  ██
██  ██    ██  ██ ██  ██ ██  ██
██████    ██     ██████ ██████";
        assert_eq!(joined(&render(60)), expected);
    }

    #[test]
    fn test_45_minutes() {
        let expected = "\
██  ██ ██████    ██████ ██████
██  ██ ██     ██ ██  ██ ██  ██
██████ ██████    ██  ██ ██  ██
    ██     ██ ██ ██  ██ ██  ██
    ██ ██████    ██████ ██████";
        assert_eq!(joined(&render(2700)), expected);
    }

    #[test]
    fn test_8_minutes_6_seconds() {
        let expected = "\
██████  ████     ██████ ██████
██  ██ ██  ██ ██ ██  ██ ██
██  ██  ████     ██  ██ ██████
██  ██ ██  ██ ██ ██  ██ ██  ██
██████  ████     ██████ ██████";
        assert_eq!(joined(&render(486)), expected);
    }

    #[test]
    fn test_35_minutes_18_seconds() {
        let expected = "\
██████ ██████       ██   ████
    ██ ██     ██   ███  ██  ██
 █████ ██████       ██   ████
    ██     ██ ██    ██  ██  ██
██████ ██████       ██   ████";
        assert_eq!(joined(&render(2118)), expected);
    }

    #[test]
    fn test_rows_keep_trailing_space_and_equal_width() {
        let frame = render(3);
        for row in frame.rows() {
            assert!(row.ends_with(' '));
            assert_eq!(row.chars().count(), 31);
        }
    }

    #[test]
    fn test_every_clock_character_has_a_glyph() {
        for seconds in [0, 59, 61, 599, 3599, 5999, 6000, 359_999] {
            assert!(format_clock(seconds).chars().all(|ch| glyphs::glyph(ch).is_some()));
            assert_eq!(render(seconds).rows().len(), ROWS);
        }
    }

    #[test]
    fn test_three_digit_minutes_widen_the_frame() {
        let frame = render(6000);
        assert_eq!(frame.rows()[0].chars().count(), 38);
    }
}
