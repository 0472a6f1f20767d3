// src/input.rs
use crate::clipboard;
use crate::error::{PhishguardError, Result};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Where the email text comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EmailSource {
    Text(String),
    Stdin,
    File(PathBuf),
    #[default]
    Clipboard,
}

impl EmailSource {
    /// Picks a source from CLI flags: stdin, then file, then inline text,
    /// falling back to the clipboard.
    #[must_use]
    pub fn select(stdin: bool, file: Option<PathBuf>, text: Option<String>) -> Self {
        if stdin {
            Self::Stdin
        } else if let Some(path) = file {
            Self::File(path)
        } else if let Some(text) = text {
            Self::Text(text)
        } else {
            Self::Clipboard
        }
    }

    /// Reads the raw email text. Blank text is returned as-is; validation
    /// happens in the detector.
    ///
    /// # Errors
    /// Returns error if the underlying source cannot be read.
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .map_err(|source| PhishguardError::Io {
                        source,
                        path: PathBuf::from("<stdin>"),
                    })?;
                Ok(buf)
            }
            Self::File(path) => read_lossy(path),
            Self::Clipboard => clipboard::read_clipboard(),
        }
    }

    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Text(_) => "argument".to_string(),
            Self::Stdin => "stdin".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Clipboard => "clipboard".to_string(),
        }
    }
}

/// Reads a file as text, replacing invalid UTF-8.
///
/// # Errors
/// Returns error if the file cannot be read.
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| PhishguardError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_prefers_stdin_then_file_then_text() {
        let f = Some(PathBuf::from("mail.eml"));
        let t = Some("hi".to_string());
        assert_eq!(EmailSource::select(true, f.clone(), t.clone()), EmailSource::Stdin);
        assert_eq!(
            EmailSource::select(false, f, t.clone()),
            EmailSource::File(PathBuf::from("mail.eml"))
        );
        assert_eq!(
            EmailSource::select(false, None, t),
            EmailSource::Text("hi".to_string())
        );
        assert_eq!(EmailSource::select(false, None, None), EmailSource::Clipboard);
    }

    #[test]
    fn missing_file_reports_path() {
        let src = EmailSource::File(PathBuf::from("/definitely/not/here.eml"));
        let err = src.read().unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.eml"));
    }
}
