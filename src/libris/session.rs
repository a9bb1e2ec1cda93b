//! Login against a credentials file.
//!
//! The credentials file holds one `username:password:catalog-file` record
//! per line; lines starting with `#` are comments. The catalog file named
//! by the matching record is the one the session works on.
//!
//! Session state is an explicit value threaded through the entry point.
//! There are no process-wide globals here, and terminal concerns (echo
//! suppression for the password prompt) live entirely in the CLI layer.

use crate::error::{LibrisError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A successful login: who is logged in and which catalog file they own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub catalog_path: PathBuf,
}

impl Session {
    /// Scans `credentials` linearly for an exact username and password
    /// match. Wrong credentials are [`LibrisError::LoginFailed`]; an
    /// unreadable credentials file propagates as an I/O error, which the
    /// CLI treats as fatal. Malformed lines are skipped.
    pub fn login(credentials: &Path, username: &str, password: &str) -> Result<Session> {
        let content = fs::read_to_string(credentials)?;

        for line in content.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.splitn(3, ':');
            let (Some(user), Some(pass), Some(file)) = (parts.next(), parts.next(), parts.next())
            else {
                continue;
            };

            if user == username && pass == password {
                return Ok(Session {
                    username: user.to_string(),
                    catalog_path: PathBuf::from(file),
                });
            }
        }

        Err(LibrisError::LoginFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn credentials_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn matching_line_yields_a_session() {
        let file = credentials_file("ada:secret:ada-books.catalog\n");
        let session = Session::login(file.path(), "ada", "secret").unwrap();
        assert_eq!(session.username, "ada");
        assert_eq!(session.catalog_path, PathBuf::from("ada-books.catalog"));
    }

    #[test]
    fn wrong_password_fails() {
        let file = credentials_file("ada:secret:books.catalog\n");
        let err = Session::login(file.path(), "ada", "wrong").unwrap_err();
        assert!(matches!(err, LibrisError::LoginFailed));
    }

    #[test]
    fn unknown_user_fails() {
        let file = credentials_file("ada:secret:books.catalog\n");
        assert!(Session::login(file.path(), "bob", "secret").is_err());
    }

    #[test]
    fn comments_and_malformed_lines_are_skipped() {
        let file = credentials_file(
            "# site accounts\nnot-a-record\nada:secret:books.catalog\n",
        );
        let session = Session::login(file.path(), "ada", "secret").unwrap();
        assert_eq!(session.catalog_path, PathBuf::from("books.catalog"));
    }

    #[test]
    fn later_lines_are_reached() {
        let file = credentials_file(
            "ada:secret:ada.catalog\nbob:hunter2:bob.catalog\n",
        );
        let session = Session::login(file.path(), "bob", "hunter2").unwrap();
        assert_eq!(session.catalog_path, PathBuf::from("bob.catalog"));
    }

    #[test]
    fn password_may_not_contain_the_separator_but_path_may() {
        let file = credentials_file("ada:secret:dir:with:colons\n");
        let session = Session::login(file.path(), "ada", "secret").unwrap();
        assert_eq!(session.catalog_path, PathBuf::from("dir:with:colons"));
    }

    #[test]
    fn missing_credentials_file_is_an_io_error() {
        let err = Session::login(Path::new("/no/such/credentials.txt"), "a", "b").unwrap_err();
        assert!(matches!(err, LibrisError::Io(_)));
    }
}
