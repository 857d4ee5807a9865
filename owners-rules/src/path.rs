//! Helpers for splitting repository-relative paths. Declaration files and the
//! paths matched against them always use Unix separators, so these work on
//! plain strings rather than `std::path::Path`.

const SEPARATOR: char = '/';

/// The final segment of `path`. A path without a separator is its own
/// basename.
pub fn basename(path: &str) -> &str {
    match path.rsplit_once(SEPARATOR) {
        Some((_, name)) => name,
        None => path,
    }
}

/// Everything before the final separator of `path`, or `""` for paths at the
/// top level. Leading `./` segments are dropped, so `./OWNERS.yaml` and
/// `OWNERS.yaml` share the same directory.
pub fn dirname(path: &str) -> &str {
    let path = path.trim_start_matches("./");
    match path.rsplit_once(SEPARATOR) {
        Some((dir, _)) => dir,
        None => "",
    }
}
