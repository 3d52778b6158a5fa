use std::path::{Component, MAIN_SEPARATOR_STR, Path};

fn components(path: &Path, base: &Path) -> Vec<String> {
    let relative = path.strip_prefix(base).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    if parts.is_empty() {
        // The path is the base itself; fall back to its own name.
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        return vec![name];
    }
    parts
}

/// Number of leading components shared by every path.
fn common_prefix_len(paths: &[Vec<String>]) -> usize {
    let Some((first, rest)) = paths.split_first() else {
        return 0;
    };
    let shortest = paths.iter().map(Vec::len).min().unwrap_or(0);

    (0..shortest)
        .take_while(|&i| rest.iter().all(|p| p[i] == first[i]))
        .count()
}

/// Shorten each path to the part that distinguishes it within the group.
///
/// Paths are taken relative to `base` when they live under it, then the
/// leading components shared by all of them are dropped. A path that would
/// be stripped entirely is shown as its last component, so no entry is ever
/// empty. The result has one entry per input, in order.
pub fn minimal_paths<P: AsRef<Path>>(paths: &[P], base: &Path) -> Vec<String> {
    let split: Vec<Vec<String>> = paths
        .iter()
        .map(|p| components(p.as_ref(), base))
        .collect();
    let common = common_prefix_len(&split);

    split
        .into_iter()
        .map(|parts| match parts.get(common..) {
            Some(tail) if !tail.is_empty() => tail.join(MAIN_SEPARATOR_STR),
            _ => parts.last().cloned().unwrap_or_default(),
        })
        .collect()
}
