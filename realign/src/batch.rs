use crate::{patch, RealignError};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

pub const USAGE: &str = "Usage: realign <file.so> [file2.so ...]";

#[derive(Debug)]
pub enum Outcome {
    Realigned,
    Unchanged,
    Missing,
    Failed(RealignError)
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome
}

pub fn process_file(path: &Path) -> Outcome {
    if !path.exists() {
        warn!("{} does not exist, skipping", path.display());
        return Outcome::Missing;
    }

    match patch(path) {
        Ok(true) => {
            info!("Re-aligned {} to 16KB", path.display());
            Outcome::Realigned
        },
        Ok(false) => {
            info!("{} - no changes needed or not an ELF file", path.display());
            Outcome::Unchanged
        },
        Err(err) => {
            error!("Error processing {}: {}", path.display(), err);
            Outcome::Failed(err)
        }
    }
}

pub fn process_files<I, P>(paths: I) -> Vec<FileReport>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>
{
    paths.into_iter().map(|path| {
        let path = path.as_ref();
        FileReport { path: path.to_path_buf(), outcome: process_file(path) }
    }).collect()
}

/// Entry point for the command line; `args` excludes the program name.
/// Per-file failures never change the returned exit code.
pub fn run<I, P>(args: I) -> i32
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>
{
    let paths: Vec<P> = args.into_iter().collect();
    if paths.is_empty() {
        error!("{}", USAGE);
        return 1;
    }

    process_files(paths);
    0
}
