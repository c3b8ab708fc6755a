//! Proxy: `ProtectedDocument` stands in for a `RealDocument`. It checks an
//! access list before forwarding, and the real document defers its
//! expensive load until the first authorized read.

use std::cell::{Cell, OnceCell};
use std::collections::HashSet;
use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

pub trait Document {
    fn title(&self) -> &str;
    fn read(&self, user: &str) -> Result<String, PatternError>;
}

/// Loads its body on first read and caches it.
pub struct RealDocument {
    title: String,
    body: OnceCell<String>,
    loads: Cell<u32>,
}

impl RealDocument {
    pub fn new(title: impl Into<String>) -> Self {
        RealDocument {
            title: title.into(),
            body: OnceCell::new(),
            loads: Cell::new(0),
        }
    }

    pub fn load_count(&self) -> u32 {
        self.loads.get()
    }

    fn body(&self) -> &str {
        self.body.get_or_init(|| {
            tracing::debug!(title = %self.title, "loading document body");
            self.loads.set(self.loads.get() + 1);
            format!("Contents of '{}': quarterly numbers look fine.", self.title)
        })
    }
}

impl Document for RealDocument {
    fn title(&self) -> &str {
        &self.title
    }

    fn read(&self, _user: &str) -> Result<String, PatternError> {
        Ok(self.body().to_string())
    }
}

pub struct ProtectedDocument {
    inner: RealDocument,
    allowed: HashSet<String>,
}

impl ProtectedDocument {
    pub fn new<I, S>(inner: RealDocument, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ProtectedDocument {
            inner,
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    pub fn inner(&self) -> &RealDocument {
        &self.inner
    }
}

impl Document for ProtectedDocument {
    fn title(&self) -> &str {
        self.inner.title()
    }

    fn read(&self, user: &str) -> Result<String, PatternError> {
        if !self.allowed.contains(user) {
            tracing::debug!(user, title = self.title(), "access denied");
            return Err(PatternError::access_denied(user, self.title()));
        }
        self.inner.read(user)
    }
}

pub struct ProxyPattern;

impl Pattern for ProxyPattern {
    fn name(&self) -> &'static str {
        "proxy"
    }

    fn category(&self) -> Category {
        Category::Structural
    }

    fn intent(&self) -> &'static str {
        "Provide a surrogate that controls access to another object."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Subject", "Document"),
            Participant::new("RealSubject", "RealDocument"),
            Participant::new("Proxy", "ProtectedDocument"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Proxy")?;

        let doc = ProtectedDocument::new(RealDocument::new("Q3 report"), ["alice", "bob"]);
        writeln!(out, "Loads before any read: {}", doc.inner().load_count())?;

        for user in ["mallory", "alice", "bob"] {
            match doc.read(user) {
                Ok(body) => writeln!(out, "{user}: {body}")?,
                Err(e) => writeln!(out, "{user}: {e}")?,
            }
        }
        writeln!(out, "Loads after reads: {}", doc.inner().load_count())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_denied_user_gets_error_and_no_load() {
        let doc = ProtectedDocument::new(RealDocument::new("secret"), ["alice"]);
        let err = doc.read("eve").unwrap_err();

        assert!(matches!(err, PatternError::AccessDenied { .. }));
        assert_eq!(err.to_string(), "access denied: 'eve' may not read 'secret'");
        assert_eq!(doc.inner().load_count(), 0);
    }

    #[test]
    fn test_lazy_load_happens_once() {
        let doc = ProtectedDocument::new(RealDocument::new("memo"), ["alice", "bob"]);
        let first = doc.read("alice").unwrap();
        let second = doc.read("bob").unwrap();

        assert_eq!(first, second);
        assert_eq!(doc.inner().load_count(), 1);
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        ProxyPattern.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Loads before any read: 0"));
        assert!(text.contains("mallory: access denied"));
        assert!(text.contains("Loads after reads: 1"));
    }
}
