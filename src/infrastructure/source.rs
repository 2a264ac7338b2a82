//! Where prune candidates come from

use crate::error::Result;
use std::io::{self, BufRead, Read};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Separator between names on input and output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Nul,
    Newline,
}

impl Delimiter {
    pub fn from_newline_flag(newline: bool) -> Self {
        if newline {
            Delimiter::Newline
        } else {
            Delimiter::Nul
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Nul => b'\0',
            Delimiter::Newline => b'\n',
        }
    }

    pub fn as_char(self) -> char {
        self.as_byte() as char
    }
}

/// A supplier of candidate names for prune mode
pub trait CandidateSource {
    fn candidates(&mut self) -> Result<Vec<String>>;
}

/// Delimiter-separated names from a reader (usually standard input).
/// A trailing delimiter does not produce an empty name.
pub struct ReaderSource<R: BufRead> {
    reader: R,
    delimiter: Delimiter,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R, delimiter: Delimiter) -> Self {
        ReaderSource { reader, delimiter }
    }
}

impl<R: BufRead> CandidateSource for ReaderSource<R> {
    fn candidates(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for chunk in self.reader.by_ref().split(self.delimiter.as_byte()) {
            names.push(String::from_utf8_lossy(&chunk?).into_owned());
        }
        Ok(names)
    }
}

/// Entry names of a single directory, sorted by name
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: PathBuf) -> Self {
        DirectorySource { dir }
    }
}

impl CandidateSource for DirectorySource {
    fn candidates(&mut self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(io::Error::other)?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}
