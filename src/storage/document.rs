use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

/// Write the assembled document to `path`, one line per entry.
///
/// Every line, including the last, is terminated by `\n`. Missing parent
/// directories are created. An existing file is replaced.
///
/// # Errors
///
/// Returns an error if the file or its parent directories cannot be created
/// or written to.
pub fn write_document<S: AsRef<str>>(path: &Path, lines: &[S]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
