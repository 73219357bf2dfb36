//! Collection and sampling of formula files.

use std::path::{Path, PathBuf};

use rand::{seq::SliceRandom, Rng};

use crate::types::err::{self};

/// Whether the path names a formula file.
///
/// `cnf` files are formula files, and with the `xz` feature so are `cnf.xz` files.
pub fn is_formula_path(path: &Path) -> bool {
    match path.extension() {
        Some(extension) if extension == "cnf" => true,

        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => path
            .file_stem()
            .map(Path::new)
            .and_then(|stem| stem.extension())
            .is_some_and(|extension| extension == "cnf"),

        _ => false,
    }
}

/// The formula files of a directory, sorted by path.
pub fn collect_formula_paths(dir: &Path) -> Result<Vec<PathBuf>, err::ErrorKind> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => {
            return Err(err::ErrorKind::from(err::BenchError::UnreadableDirectory(
                dir.to_owned(),
            )))
        }
    };

    let mut paths = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_formula_path(path))
        .collect::<Vec<_>>();

    paths.sort();
    Ok(paths)
}

/// A sample of paths, taken block by block.
///
/// The paths are split into `block_count` contiguous blocks of `paths.len() / block_count` paths, with the last block also taking any remaining paths.
/// Each block with at most `per_block` paths is taken whole, and otherwise `per_block` paths are drawn uniformly at random.
///
/// So, with fewer paths than blocks every block but the last is empty.
///
/// ```rust
/// # use std::path::PathBuf;
/// # use rand::{rngs::StdRng, SeedableRng};
/// # use trisat::bench::sample::sample_blocks;
/// let paths = (0..25).map(|i| PathBuf::from(format!("{i:02}.cnf"))).collect::<Vec<_>>();
/// let mut rng = StdRng::seed_from_u64(0);
///
/// // Blocks of 2, with the last block of 7.
/// let sample = sample_blocks(&paths, 10, 3, &mut rng);
/// assert_eq!(sample.len(), 9 * 2 + 3);
/// ```
pub fn sample_blocks(
    paths: &[PathBuf],
    block_count: usize,
    per_block: usize,
    rng: &mut impl Rng,
) -> Vec<PathBuf> {
    let block_count = block_count.max(1);
    let block_size = paths.len() / block_count;
    let mut samples = Vec::default();

    for block_index in 0..block_count {
        let start = block_index * block_size;
        let end = match block_index + 1 == block_count {
            true => paths.len(),
            false => start + block_size,
        };
        let block = &paths[start..end];

        match block.len() <= per_block {
            true => samples.extend(block.iter().cloned()),
            false => samples.extend(block.choose_multiple(rng, per_block).cloned()),
        }
    }

    samples
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    fn paths(count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|i| PathBuf::from(format!("{i:03}.cnf")))
            .collect()
    }

    #[test]
    fn samples_stay_in_block() {
        let paths = paths(100);
        let mut rng = StdRng::seed_from_u64(7);
        let sample = sample_blocks(&paths, 10, 2, &mut rng);
        assert_eq!(sample.len(), 20);
        for (index, path) in sample.iter().enumerate() {
            let position = paths.iter().position(|p| p == path).unwrap();
            assert_eq!(position / 10, index / 2);
        }
    }

    #[test]
    fn few_paths_in_last_block() {
        let paths = paths(7);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample_blocks(&paths, 10, 10, &mut rng), paths);
        assert_eq!(sample_blocks(&paths, 10, 3, &mut rng).len(), 3);
        assert!(sample_blocks(&[], 10, 3, &mut rng).is_empty());
    }

    #[test]
    fn formula_paths() {
        assert!(is_formula_path(Path::new("uf20-01.cnf")));
        assert!(!is_formula_path(Path::new("notes.txt")));
        assert!(!is_formula_path(Path::new("cnf")));
    }
}
