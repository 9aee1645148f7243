//! Persistence of generated files.
//!
//! Generation itself never writes anything; callers hand the results to a
//! [`Writer`].

use std::{
    io::{self, Write as _},
    path::{Component, Path, PathBuf},
};

use crate::generate::Generated;

pub trait Writer {
    fn write(&mut self, path: &Path, text: &str) -> io::Result<()>;
}

/// Write each generated file into `out_dir`, in order.
///
/// Returns the paths that were written. Every file name must be a plain
/// file name; otherwise nothing is written.
pub fn write_all<'a, W: Writer + ?Sized>(
    writer: &mut W,
    out_dir: &Path,
    generated: impl IntoIterator<Item = &'a Generated>,
) -> io::Result<Vec<PathBuf>> {
    let generated: Vec<&Generated> = generated.into_iter().collect();
    if let Some(g) = generated.iter().find(|g| !is_file_name(&g.file_name)) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{:?} is not a plain file name", g.file_name),
        ));
    }

    let mut written = Vec::new();
    for g in generated {
        let path = out_dir.join(&g.file_name);
        writer.write(&path, &g.text)?;
        written.push(path);
    }
    Ok(written)
}

fn is_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Writes files to disk, creating parent directories as needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsWriter;

impl Writer for FsWriter {
    fn write(&mut self, path: &Path, text: &str) -> io::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, text)
    }
}

/// Writes every file to stdout, each preceded by a `// <path>` line.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutWriter;

impl Writer for StdoutWriter {
    fn write(&mut self, path: &Path, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "// {}", path.display())?;
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }
}

/// Keeps written files in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryWriter {
    pub files: Vec<(PathBuf, String)>,
}

impl MemoryWriter {
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.files
            .iter()
            .rev()
            .find(|(p, _)| p == path)
            .map(|(_, text)| text.as_str())
    }
}

impl Writer for MemoryWriter {
    fn write(&mut self, path: &Path, text: &str) -> io::Result<()> {
        self.files.push((path.to_owned(), text.to_owned()));
        Ok(())
    }
}
