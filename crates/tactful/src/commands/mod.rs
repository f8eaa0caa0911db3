//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

pub mod analyze;
pub mod info;
pub mod lexicon;
pub mod rewrite;
#[cfg(feature = "mcp")]
pub mod serve;

/// Where a command reads its message from.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// File containing the message (`-` or omitted reads stdin).
    #[arg(conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Message text given inline instead of a file.
    #[arg(long)]
    pub text: Option<String>,
}

impl InputArgs {
    /// Short label for logs and error messages.
    pub fn label(&self) -> String {
        match (&self.text, &self.file) {
            (Some(_), _) => "<text>".to_string(),
            (None, Some(path)) if path.as_str() != "-" => path.to_string(),
            _ => "<stdin>".to_string(),
        }
    }

    /// Read the message, enforcing the size limit.
    ///
    /// File and stdin input lose one trailing line ending; `--text` is kept
    /// as given.
    pub fn read(&self, max_bytes: Option<usize>) -> anyhow::Result<String> {
        match (&self.text, &self.file) {
            (Some(text), _) => {
                check_size(&self.label(), text.len(), max_bytes)?;
                Ok(text.clone())
            }
            (None, Some(path)) if path.as_str() != "-" => {
                read_input_file(path, max_bytes).map(strip_line_ending)
            }
            _ => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                check_size(&self.label(), buf.len(), max_bytes)?;
                Ok(strip_line_ending(buf))
            }
        }
    }
}

/// Drop exactly one trailing `\n` or `\r\n`.
fn strip_line_ending(mut content: String) -> String {
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    content
}

fn check_size(label: &str, size: usize, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && size > max
    {
        anyhow::bail!("input too large: {label} is {size} bytes (limit: {max} bytes)");
    }
    Ok(())
}

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    check_size(path.as_str(), metadata.len() as usize, max_bytes)?;

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_text_wins() {
        let args = InputArgs {
            file: None,
            text: Some("hello".into()),
        };
        assert_eq!(args.read(None).unwrap(), "hello");
        assert_eq!(args.label(), "<text>");
    }

    #[test]
    fn oversized_inline_text_is_rejected() {
        let args = InputArgs {
            file: None,
            text: Some("hello".into()),
        };
        let err = args.read(Some(3)).unwrap_err();
        assert!(err.to_string().contains("input too large"));
    }

    #[test]
    fn strips_one_line_ending() {
        assert_eq!(strip_line_ending("hi\n".into()), "hi");
        assert_eq!(strip_line_ending("hi\r\n".into()), "hi");
        assert_eq!(strip_line_ending("hi\n\n".into()), "hi\n");
        assert_eq!(strip_line_ending("hi\r".into()), "hi\r");
        assert_eq!(strip_line_ending(String::new()), "");
    }

    #[test]
    fn file_input_drops_trailing_newline() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "That demo was lame.\r\n").unwrap();
        let args = InputArgs {
            file: Some(Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()),
            text: None,
        };
        assert_eq!(args.read(None).unwrap(), "That demo was lame.");
    }

    #[test]
    fn inline_text_is_kept_verbatim() {
        let args = InputArgs {
            file: None,
            text: Some("hello\n".into()),
        };
        assert_eq!(args.read(None).unwrap(), "hello\n");
    }

    #[test]
    fn reads_file_within_limit() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), "be kind").unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        assert_eq!(read_input_file(&path, Some(100)).unwrap(), "be kind");
        assert!(read_input_file(&path, Some(2)).is_err());
    }
}
