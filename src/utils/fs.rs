use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use crate::utils::error::BoxResult;

/// Read a UTF-8 file to string, with `\r\n` line endings turned into `\n`
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    let mut file = fs::File::open(path.as_ref())?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    if contents.contains("\r\n") {
        contents = contents.replace("\r\n", "\n");
    }
    Ok(contents)
}

/// Write a string to a file with `\n` line endings, replacing any previous content
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    let normalized = contents.replace("\r\n", "\n");

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(normalized.as_bytes())?;
    file.flush()?;
    Ok(())
}
