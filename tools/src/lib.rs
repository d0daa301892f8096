//! Path handling for the `nbtjson` binary.
use std::error::Error;
use std::fmt::Display;
use std::path::{Component, Path, PathBuf};

type Result<T> = std::result::Result<T, Box<dyn Error>>;

#[derive(Debug)]
struct ErrorMessage(String);
impl std::error::Error for ErrorMessage {}

impl Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn fail<T>(msg: String) -> Result<T> {
    Err(Box::new(ErrorMessage(msg)))
}

/// Make `path` absolute against the current directory and fold away `.` and
/// `..` components. The filesystem is not consulted.
pub fn resolve_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    Ok(resolve_from(&std::env::current_dir()?, path.as_ref()))
}

fn resolve_from(base: &Path, path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for part in base.join(path).components() {
        match part {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// An input file given on the command line. It has to exist.
pub fn check_input(path: &str) -> Result<PathBuf> {
    if path.is_empty() {
        return fail("no input file given".to_owned());
    }

    let resolved = resolve_path(path)?;
    if !resolved.is_file() {
        return fail(format!("not a valid file: {}", resolved.display()));
    }
    Ok(resolved)
}

/// An output file given on the command line. The file itself may not exist
/// yet, but the directory it goes in must.
pub fn check_output(path: &str) -> Result<PathBuf> {
    if path.is_empty() {
        return fail("no output file given".to_owned());
    }

    let resolved = resolve_path(path)?;
    match resolved.parent() {
        Some(dir) if dir.is_dir() => Ok(resolved),
        _ => fail(format!("not a valid path: {}", resolved.display())),
    }
}

/// Output used when none is given: the input's file stem with `extension`,
/// in the current directory.
pub fn default_output(input: &Path, extension: &str) -> Result<PathBuf> {
    let stem = match input.file_stem() {
        Some(stem) => stem,
        None => return fail(format!("no file name in {}", input.display())),
    };

    let mut name = PathBuf::from(stem);
    name.set_extension(extension);
    resolve_path(name)
}
