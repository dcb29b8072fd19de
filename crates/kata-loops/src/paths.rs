//! Common directory of a set of file paths.

/// The longest directory prefix shared by every path, ending in `/`.
///
/// Only directory segments take part: the final segment of each path is
/// treated as a file name. Returns an empty string when the paths share no
/// leading segment, for example when an absolute path is mixed with a
/// relative one.
///
/// ```
/// use kata_loops::common_directory_path;
///
/// assert_eq!(
///     common_directory_path(&["/web/images/image1.png", "/web/images/image2.png"]),
///     "/web/images/",
/// );
/// assert_eq!(
///     common_directory_path(&["/web/favicon.ico", "/web-scripts/dump", "/webalizer/logs"]),
///     "/",
/// );
/// ```
#[must_use]
pub fn common_directory_path<S: AsRef<str>>(paths: &[S]) -> String {
    let Some((first, rest)) = paths.split_first() else {
        return String::new();
    };

    let mut common = directories(first.as_ref());
    for path in rest {
        let other = directories(path.as_ref());
        let shared = common
            .iter()
            .zip(&other)
            .take_while(|(a, b)| a == b)
            .count();
        common.truncate(shared);
    }

    common.iter().map(|segment| format!("{segment}/")).collect()
}

/// Every segment of `path` except the file name.
fn directories(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = path.split('/').collect();
    let _ = segments.pop();
    segments
}
