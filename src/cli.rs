//! Command-line parsing.
//!
//! The option syntax is single-dash words taking exactly one value each
//! (`-name foo`, `-size +15`), in any order after the search path.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use crate::error::FindError;
use crate::query::{Query, SizeFilter};

pub const USAGE: &str = "\
Usage:
\ttreefind path [options] - find files under path matching all options.

\tOptions:
\t\t-inum num       - inode number;
\t\t-name name      - file name (exact, last path component);
\t\t-size [-=+]size - file size in bytes (less, equal, more);
\t\t-nlinks num     - hard link count;
\t\t-exec path      - program to run with the found files as arguments;

\t-h, -help, --help alone print this text; search a directory with one of
\tthose names as ./-h.
";

/// What the command line asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Search(Query),
}

/// Parse a full argument vector, program name first.
pub fn parse_args<I, T>(args: I) -> Result<Command, FindError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into).skip(1).peekable();

    let root = args.next().ok_or(FindError::MissingRoot)?;
    // Help only when alone, so `-h -name x` still searches a directory `-h`.
    if args.peek().is_none() && matches!(root.to_str(), Some("-h" | "-help" | "--help")) {
        return Ok(Command::Help);
    }

    let mut query = Query::new(root);

    while let Some(option) = args.next() {
        let option = option.to_string_lossy().into_owned();
        let value = args
            .next()
            .ok_or_else(|| FindError::MissingValue(option.clone()))?;

        match option.as_str() {
            "-inum"   => query.filters.inode = Some(parse_number(&option, &value)?),
            "-name"   => query.filters.name = Some(value),
            "-size"   => query.filters.size = Some(parse_size(&value)?),
            "-nlinks" => query.filters.nlinks = Some(parse_number(&option, &value)?),
            "-exec"   => query.exec = Some(PathBuf::from(value)),
            _ => return Err(FindError::UnknownOption(option)),
        }
    }

    Ok(Command::Search(query))
}

fn parse_number(option: &str, value: &OsStr) -> Result<u64, FindError> {
    value
        .to_str()
        .and_then(|v| v.parse().ok())
        .ok_or_else(|| FindError::InvalidNumber {
            option: option.to_string(),
            value:  value.to_string_lossy().into_owned(),
        })
}

/// `-N` less than, `=N` equal to, `+N` greater than N bytes.
fn parse_size(value: &OsStr) -> Result<SizeFilter, FindError> {
    let invalid = || FindError::InvalidSize(value.to_string_lossy().into_owned());
    let value = value.to_str().ok_or_else(invalid)?;

    let mut chars = value.chars();
    let build = match chars.next() {
        Some('-') => SizeFilter::less,
        Some('=') => SizeFilter::equal,
        Some('+') => SizeFilter::greater,
        _ => return Err(invalid()),
    };

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    digits.parse().map(build).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Filters;

    fn search(args: &[&str]) -> Query {
        match parse_args(std::iter::once("treefind").chain(args.iter().copied())) {
            Ok(Command::Search(q)) => q,
            other => panic!("expected a search, got {other:?}"),
        }
    }

    fn fail(args: &[&str]) -> FindError {
        parse_args(std::iter::once("treefind").chain(args.iter().copied())).unwrap_err()
    }

    #[test]
    fn root_only() {
        let q = search(&["dir"]);
        assert_eq!(q.root, PathBuf::from("dir"));
        assert_eq!(q.filters, Filters::default());
        assert_eq!(q.exec, None);
    }

    #[test]
    fn every_option() {
        let q = search(&[
            "dir", "-inum", "12", "-name", "a.txt", "-size", "+15", "-nlinks", "2", "-exec", "/bin/true",
        ]);
        assert_eq!(q.filters.inode, Some(12));
        assert_eq!(q.filters.name, Some("a.txt".into()));
        assert_eq!(q.filters.size, Some(SizeFilter::greater(15)));
        assert_eq!(q.filters.nlinks, Some(2));
        assert_eq!(q.exec, Some(PathBuf::from("/bin/true")));
    }

    #[test]
    fn size_signs() {
        assert_eq!(search(&["d", "-size", "-3"]).filters.size, Some(SizeFilter::less(3)));
        assert_eq!(search(&["d", "-size", "=0"]).filters.size, Some(SizeFilter::equal(0)));
        assert_eq!(search(&["d", "-size", "+7"]).filters.size, Some(SizeFilter::greater(7)));
    }

    #[test]
    fn later_option_wins() {
        let q = search(&["d", "-name", "a", "-name", "b"]);
        assert_eq!(q.filters.name, Some("b".into()));
    }

    #[test]
    fn malformed_size_is_rejected() {
        for bad in ["x5", "5", "+", "+-5", "+5k", ""] {
            assert!(
                matches!(fail(&["d", "-size", bad]), FindError::InvalidSize(_)),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn usage_errors() {
        assert!(matches!(fail(&[]), FindError::MissingRoot));
        assert!(matches!(fail(&["d", "-type", "f"]), FindError::UnknownOption(o) if o == "-type"));
        assert!(matches!(fail(&["d", "-name"]), FindError::MissingValue(o) if o == "-name"));
        assert!(matches!(fail(&["d", "-inum", "abc"]), FindError::InvalidNumber { .. }));
        assert!(matches!(fail(&["d", "-nlinks", "-1"]), FindError::InvalidNumber { .. }));
        assert!(fail(&[]).is_usage());
    }

    #[test]
    fn help() {
        for flag in ["-h", "-help", "--help"] {
            assert_eq!(parse_args(["treefind", flag]).unwrap(), Command::Help);
        }
    }

    #[test]
    fn help_word_with_options_is_a_root() {
        let q = search(&["-h", "-name", "a"]);
        assert_eq!(q.root, PathBuf::from("-h"));
        assert_eq!(q.filters.name, Some("a".into()));

        assert_eq!(search(&["./-h"]).root, PathBuf::from("./-h"));
    }
}
