//! Tab-separated hex dump.
//!
//! ```text
//! \t00\t01\t02 ... \t0F
//! 0\t48\t65\t6C ... \t21
//! 10\t0A
//! ```
//!
//! The offset column is uppercase hex without padding; each octet is two
//! uppercase hex digits. A short final row carries only the bytes present.

use std::fmt;
use std::io::{self, Write};

/// Octets per dump row.
pub const BYTES_PER_ROW: usize = 16;

/// The column label row: a leading tab, then `00` through `0F`.
pub fn header_row() -> String {
    let mut out = String::with_capacity(BYTES_PER_ROW * 3);
    for col in 0..BYTES_PER_ROW {
        out.push('\t');
        out.push_str(&format!("{col:02X}"));
    }
    out
}

/// One row of the dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexRow<'a> {
    /// Offset of the first byte in the row.
    pub offset: usize,
    /// At most [`BYTES_PER_ROW`] bytes.
    pub bytes: &'a [u8],
}

impl HexRow<'_> {
    /// Each byte rendered as two uppercase hex digits.
    pub fn octets(&self) -> Vec<String> {
        self.bytes.iter().map(|b| format!("{b:02X}")).collect()
    }
}

impl fmt::Display for HexRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:X}", self.offset)?;
        for byte in self.bytes {
            write!(f, "\t{byte:02X}")?;
        }
        Ok(())
    }
}

/// Split `data` into dump rows.
pub fn rows(data: &[u8]) -> impl Iterator<Item = HexRow<'_>> {
    data.chunks(BYTES_PER_ROW)
        .enumerate()
        .map(|(i, bytes)| HexRow {
            offset: i * BYTES_PER_ROW,
            bytes,
        })
}

/// Write the header row and every data row, one per line.
pub fn write_hex_dump<W: Write>(out: &mut W, data: &[u8]) -> io::Result<()> {
    writeln!(out, "{}", header_row())?;
    for row in rows(data) {
        writeln!(out, "{row}")?;
    }
    Ok(())
}

/// Render the full dump as a string.
pub fn hex_dump(data: &[u8]) -> String {
    let mut out = Vec::with_capacity((data.len() / BYTES_PER_ROW + 1) * 64);
    // Writing into a Vec cannot fail.
    let _ = write_hex_dump(&mut out, data);
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lists_sixteen_columns() {
        assert_eq!(
            header_row(),
            "\t00\t01\t02\t03\t04\t05\t06\t07\t08\t09\t0A\t0B\t0C\t0D\t0E\t0F"
        );
    }

    #[test]
    fn empty_body_is_header_only() {
        let dump = hex_dump(&[]);
        assert_eq!(dump, format!("{}\n", header_row()));
        assert_eq!(dump.lines().count(), 1);
    }

    #[test]
    fn thirty_two_bytes_make_two_full_rows() {
        let data: Vec<u8> = (0..32).collect();
        let dump = hex_dump(&data);
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 3);
        for line in &lines[1..] {
            assert_eq!(line.split('\t').count(), 1 + BYTES_PER_ROW);
        }
        assert_eq!(
            lines[1],
            "0\t00\t01\t02\t03\t04\t05\t06\t07\t08\t09\t0A\t0B\t0C\t0D\t0E\t0F"
        );
        assert!(lines[2].starts_with("10\t10\t11"));
        assert!(lines[2].ends_with("\t1F"));
    }

    #[test]
    fn short_final_row_is_truncated() {
        let data = [0xABu8; 17];
        let dump = hex_dump(&data);
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2], "10\tAB");
    }

    #[test]
    fn offsets_are_unpadded_uppercase_hex() {
        let data = vec![0u8; 16 * 11];
        let offsets: Vec<String> = rows(&data).map(|r| format!("{:X}", r.offset)).collect();
        assert_eq!(offsets.last().map(String::as_str), Some("A0"));

        let last = rows(&data).last().unwrap();
        assert!(last.to_string().starts_with("A0\t00"));
    }

    #[test]
    fn single_digit_bytes_are_zero_padded() {
        let row = HexRow {
            offset: 0,
            bytes: &[0x0, 0x7, 0xF0],
        };
        assert_eq!(row.to_string(), "0\t00\t07\tF0");
        assert_eq!(row.octets(), vec!["00", "07", "F0"]);
    }

    #[test]
    fn row_count_matches_length() {
        for (len, expected) in [(0usize, 0usize), (1, 1), (15, 1), (16, 1), (17, 2), (48, 3)] {
            let data = vec![0u8; len];
            assert_eq!(rows(&data).count(), expected, "len {len}");
        }
    }
}
