//! Resolving a user selection into a root path

use std::path::PathBuf;

/// Turn a raw drag-and-drop payload into a path.
///
/// Tk delivers paths containing spaces as `{C:/some dir}`; some desktops
/// quote them instead. One layer of braces is removed first, then
/// surrounding double quotes.
pub fn parse_dropped_path(raw: &str) -> PathBuf {
    let mut path = raw.trim();
    if let Some(inner) = path.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
        path = inner;
    }
    PathBuf::from(path.trim_matches('"'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path_unchanged() {
        assert_eq!(parse_dropped_path("/home/user/docs"), PathBuf::from("/home/user/docs"));
    }

    #[test]
    fn test_strips_braces_and_quotes() {
        assert_eq!(
            parse_dropped_path("{C:/Users/me/My Documents}"),
            PathBuf::from("C:/Users/me/My Documents")
        );
        assert_eq!(
            parse_dropped_path("\"/tmp/with space\"\n"),
            PathBuf::from("/tmp/with space")
        );
        assert_eq!(parse_dropped_path("{\"/tmp/x\"}"), PathBuf::from("/tmp/x"));
    }

    #[test]
    fn test_unbalanced_brace_kept() {
        assert_eq!(parse_dropped_path("{/tmp/x"), PathBuf::from("{/tmp/x"));
    }
}
