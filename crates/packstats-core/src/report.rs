//! Plain-text ranking table

use std::io::{self, Write};

use crate::types::RankedPackage;

const RANK_WIDTH: usize = 5;
const NAME_WIDTH: usize = 40;

/// Write the header and one row per package, ranks starting at 1.
///
/// Columns are tab-separated and left-justified.
pub fn write_table<W: Write>(out: &mut W, ranked: &[RankedPackage]) -> io::Result<()> {
    writeln!(
        out,
        "{:<RANK_WIDTH$}\t{:<NAME_WIDTH$}\t{}",
        "No.", "Package Name", "File Count"
    )?;
    for (i, pkg) in ranked.iter().enumerate() {
        writeln!(
            out,
            "{:<RANK_WIDTH$}\t{:<NAME_WIDTH$}\t{}",
            i + 1,
            pkg.name,
            pkg.file_count
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(ranked: &[RankedPackage]) -> String {
        let mut buf = Vec::new();
        write_table(&mut buf, ranked).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header_only() {
        let out = render(&[]);
        assert_eq!(out.lines().count(), 1);
        let cols: Vec<_> = out.trim_end().split('\t').map(str::trim_end).collect();
        assert_eq!(cols, ["No.", "Package Name", "File Count"]);
    }

    #[test]
    fn test_rows_are_numbered() {
        let out = render(&[
            RankedPackage::new("devel/piglit", 53007),
            RankedPackage::new("science/esys-particle", 18408),
        ]);
        let rows: Vec<Vec<&str>> = out
            .lines()
            .skip(1)
            .map(|l| l.split('\t').map(str::trim_end).collect())
            .collect();
        assert_eq!(rows[0], ["1", "devel/piglit", "53007"]);
        assert_eq!(rows[1], ["2", "science/esys-particle", "18408"]);
    }

    #[test]
    fn test_long_names_are_not_truncated() {
        let name = "x".repeat(60);
        let out = render(&[RankedPackage::new(name.clone(), 1)]);
        assert!(out.contains(&name));
    }
}
