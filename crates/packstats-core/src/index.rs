//! Contents index parsing and ranking
//!
//! A Contents file maps installed paths to the packages shipping them:
//!
//! ```text
//! usr/bin/foo                         utils/foo
//! usr/share/doc/My Notes/readme.txt   doc/notes,doc/notes-extra
//! ```
//!
//! The path may contain spaces, so each line is split at its *last*
//! whitespace run.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::types::{Limit, RankedPackage, SortOrder};

/// Placeholder the archive uses for paths without a real owner.
pub const EMPTY_PACKAGE: &str = "EMPTY_PACKAGE";

/// Package name to owned file paths.
///
/// Keys keep first-insertion order, which makes ranking ties deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageIndex {
    packages: IndexMap<String, Vec<String>>,
}

impl PackageIndex {
    /// Empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a decompressed Contents file into a fresh index.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut index = Self::new();
        index.parse_file(path)?;
        Ok(index)
    }

    /// Parse a decompressed Contents file, appending to this index.
    pub fn parse_file(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        self.parse_reader(BufReader::new(file), path)
    }

    /// Parse Contents lines from `reader`, appending to this index.
    ///
    /// `source` only labels errors. Invalid UTF-8 is replaced rather than
    /// rejected.
    pub fn parse_reader<R: BufRead>(&mut self, reader: R, source: &Path) -> Result<()> {
        let before = self.packages.len();

        for (idx, raw) in reader.split(b'\n').enumerate() {
            let raw = raw.map_err(|e| Error::io(source, e))?;
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let (file_path, packages) = split_line(line).ok_or_else(|| Error::Parse {
                path: source.to_path_buf(),
                line: idx + 1,
            })?;
            if file_path == EMPTY_PACKAGE {
                continue;
            }

            for name in packages.split(',') {
                if name.is_empty() || name == EMPTY_PACKAGE {
                    continue;
                }
                self.insert(name, file_path);
            }
        }

        tracing::debug!(
            "Parsed {}: {} new packages, {} total",
            source.display(),
            self.packages.len() - before,
            self.packages.len()
        );
        Ok(())
    }

    /// Record that `package` owns `file_path`.
    pub fn insert(&mut self, package: &str, file_path: &str) {
        self.packages
            .entry(package.to_string())
            .or_default()
            .push(file_path.to_string());
    }

    /// Fold `other` into this index, concatenating file lists per package.
    pub fn merge(&mut self, other: Self) {
        for (name, files) in other.packages {
            self.packages.entry(name).or_default().extend(files);
        }
    }

    /// Files owned by `package`, in parse order.
    pub fn files(&self, package: &str) -> Option<&[String]> {
        self.packages.get(package).map(Vec::as_slice)
    }

    /// Number of distinct packages.
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    /// True when nothing has been parsed.
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    /// Packages with their files, in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.packages
            .iter()
            .map(|(name, files)| (name.as_str(), files.as_slice()))
    }

    /// Packages ordered by file count, truncated to `limit`.
    ///
    /// The sort is stable: packages with equal counts keep insertion order in
    /// both directions.
    pub fn rank(&self, order: SortOrder, limit: Limit) -> Vec<RankedPackage> {
        let mut ranked: Vec<RankedPackage> = self
            .iter()
            .map(|(name, files)| RankedPackage::new(name, files.len()))
            .collect();

        match order {
            SortOrder::Descending => ranked.sort_by(|a, b| b.file_count.cmp(&a.file_count)),
            SortOrder::Ascending => ranked.sort_by_key(|p| p.file_count),
        }

        if let Limit::Top(n) = limit {
            ranked.truncate(n);
        }
        ranked
    }
}

/// Split a trimmed Contents line into `(file_path, package_list)`.
fn split_line(line: &str) -> Option<(&str, &str)> {
    let (file_path, packages) = line.rsplit_once(char::is_whitespace)?;
    Some((file_path.trim_end(), packages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> Result<PackageIndex> {
        let mut index = PackageIndex::new();
        index.parse_reader(Cursor::new(text), Path::new("Contents-test"))?;
        Ok(index)
    }

    fn sample() -> PackageIndex {
        let mut index = PackageIndex::new();
        index.insert("a", "f1");
        index.insert("a", "f2");
        index.insert("b", "f1");
        index.insert("c", "f1");
        index.insert("c", "f2");
        index.insert("c", "f3");
        index
    }

    fn names(ranked: &[RankedPackage]) -> Vec<(&str, usize)> {
        ranked
            .iter()
            .map(|p| (p.name.as_str(), p.file_count))
            .collect()
    }

    #[test]
    fn test_parse_basic() {
        let index = parse("/usr/bin/foo pkgA\n/usr/bin/bar pkgA,pkgB\n").unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.files("pkgA").unwrap(), ["/usr/bin/foo", "/usr/bin/bar"]);
        assert_eq!(index.files("pkgB").unwrap(), ["/usr/bin/bar"]);
    }

    #[test]
    fn test_parse_path_with_spaces() {
        let index = parse(
            "usr/share/doc/My Notes/read me.txt    doc/notes\n\
             usr/lib/a b\tc\tlibs/x,libs/y\n",
        )
        .unwrap();
        assert_eq!(
            index.files("doc/notes").unwrap(),
            ["usr/share/doc/My Notes/read me.txt"]
        );
        assert_eq!(index.files("libs/x").unwrap(), ["usr/lib/a b\tc"]);
        assert_eq!(index.files("libs/y").unwrap(), ["usr/lib/a b\tc"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let index = parse("\n   \n/bin/sh shells/dash\n\t\n").unwrap();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let index = parse("   /bin/true   utils/coreutils   \r\n").unwrap();
        assert_eq!(index.files("utils/coreutils").unwrap(), ["/bin/true"]);
    }

    #[test]
    fn test_parse_empty_package_sentinel() {
        let index = parse("EMPTY_PACKAGE pkgA,pkgB\n/bin/x pkgA\n/bin/y EMPTY_PACKAGE\n").unwrap();
        assert_eq!(index.files("pkgA").unwrap(), ["/bin/x"]);
        assert!(index.files("pkgB").is_none());
        assert!(index.files(EMPTY_PACKAGE).is_none());
        assert!(index.iter().all(|(_, files)| !files.is_empty()));
    }

    #[test]
    fn test_parse_ignores_empty_names() {
        let index = parse("/bin/x pkgA,,pkgB,\n").unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = parse("/bin/x pkgA\n\nnowhitespacehere\n").unwrap_err();
        match err {
            Error::Parse { path, line } => {
                assert_eq!(path, Path::new("Contents-test"));
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_twice_doubles_counts() {
        let text = "/bin/a p1\n/bin/b p1,p2\n/bin/c p3\n";
        let single = parse(text).unwrap();

        let mut double = parse(text).unwrap();
        double
            .parse_reader(Cursor::new(text), Path::new("again"))
            .unwrap();

        for (name, files) in single.iter() {
            assert_eq!(double.files(name).unwrap().len(), files.len() * 2);
        }
    }

    #[test]
    fn test_merge_concatenates() {
        let mut deb = parse("/bin/a shared\n/bin/b deb-only\n").unwrap();
        let udeb = parse("/lib/c shared\n/lib/d udeb-only\n").unwrap();
        deb.merge(udeb);

        assert_eq!(deb.files("shared").unwrap(), ["/bin/a", "/lib/c"]);
        assert_eq!(deb.len(), 3);
        let order: Vec<_> = deb.iter().map(|(name, _)| name).collect();
        assert_eq!(order, ["shared", "deb-only", "udeb-only"]);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Contents-amd64");
        std::fs::write(&path, "usr/bin/vim editors/vim\n").unwrap();
        let index = PackageIndex::from_file(&path).unwrap();
        assert_eq!(index.files("editors/vim").unwrap(), ["usr/bin/vim"]);
    }

    #[test]
    fn test_from_missing_file() {
        let err = PackageIndex::from_file(Path::new("/nonexistent/Contents-amd64")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_rank_descending() {
        let ranked = sample().rank(SortOrder::Descending, Limit::Top(10));
        assert_eq!(names(&ranked), [("c", 3), ("a", 2), ("b", 1)]);
    }

    #[test]
    fn test_rank_ascending() {
        let ranked = sample().rank(SortOrder::Ascending, Limit::Top(10));
        assert_eq!(names(&ranked), [("b", 1), ("a", 2), ("c", 3)]);
    }

    #[test]
    fn test_rank_truncates() {
        let ranked = sample().rank(SortOrder::Descending, Limit::Top(2));
        assert_eq!(names(&ranked), [("c", 3), ("a", 2)]);
        assert_eq!(sample().rank(SortOrder::Descending, Limit::All).len(), 3);
        assert!(sample().rank(SortOrder::Descending, Limit::Top(0)).is_empty());
    }

    #[test]
    fn test_rank_ties_keep_insertion_order() {
        let index = parse("/a z\n/b y\n/c x\n/d y\n/e w\n/f w\n").unwrap();
        let desc = index.rank(SortOrder::Descending, Limit::All);
        assert_eq!(names(&desc), [("y", 2), ("w", 2), ("z", 1), ("x", 1)]);
        let asc = index.rank(SortOrder::Ascending, Limit::All);
        assert_eq!(names(&asc), [("z", 1), ("x", 1), ("y", 2), ("w", 2)]);
    }
}
