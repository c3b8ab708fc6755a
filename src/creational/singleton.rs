//! Singleton: one process-wide `Registry`, created lazily on first access and
//! shared as a `&'static` reference from then on.

use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use lazy_static::lazy_static;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

pub struct Registry {
    settings: Mutex<HashMap<String, String>>,
    next_id: AtomicU64,
}

lazy_static! {
    static ref INSTANCE: Registry = {
        tracing::debug!("initializing registry singleton");
        Registry {
            settings: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    };
}

impl Registry {
    pub fn instance() -> &'static Registry {
        &INSTANCE
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        // A poisoned map is still a valid map.
        let mut settings = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        settings.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let settings = self.settings.lock().unwrap_or_else(PoisonError::into_inner);
        settings.get(key).cloned()
    }

    /// Unique across every caller in the process.
    pub fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }
}

pub struct SingletonPattern;

impl Pattern for SingletonPattern {
    fn name(&self) -> &'static str {
        "singleton"
    }

    fn category(&self) -> Category {
        Category::Creational
    }

    fn intent(&self) -> &'static str {
        "Ensure a type has one instance and provide a global point of access to it."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Singleton", "Registry"),
            Participant::new("Instance accessor", "Registry::instance"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Singleton")?;

        let a = Registry::instance();
        let b = Registry::instance();
        writeln!(out, "Same instance: {}", std::ptr::eq(a, b))?;

        a.set("demo.greeting", "hello from a");
        writeln!(
            out,
            "Read through b: {}",
            b.get("demo.greeting").unwrap_or_default()
        )?;

        let first = a.next_id();
        let second = b.next_id();
        writeln!(out, "Ids keep increasing across handles: {}", second > first)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_single_instance() {
        assert!(std::ptr::eq(Registry::instance(), Registry::instance()));
    }

    #[test]
    fn test_settings_visible_everywhere() {
        Registry::instance().set("test.key", "value");
        let seen = thread::spawn(|| Registry::instance().get("test.key"))
            .join()
            .unwrap();
        assert_eq!(seen.as_deref(), Some("value"));
    }

    #[test]
    fn test_ids_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                thread::spawn(|| {
                    (0..100)
                        .map(|_| Registry::instance().next_id())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(ids.insert(id), "duplicate id {id}");
            }
        }
        assert_eq!(ids.len(), 400);
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        SingletonPattern.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Same instance: true"));
        assert!(text.contains("Read through b: hello from a"));
        assert!(text.contains("Ids keep increasing across handles: true"));
    }
}
