//! Chain of Responsibility: a purchase request travels up three approvers
//! with fixed spending limits until one of them can sign it off.

use std::fmt;
use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub number: u32,
    pub amount: f64,
    pub purpose: String,
}

impl Purchase {
    pub fn new(number: u32, amount: f64, purpose: impl Into<String>) -> Self {
        Purchase {
            number,
            amount,
            purpose: purpose.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Approved { by: String, title: &'static str },
    /// Nobody in the chain could approve it.
    Rejected,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Approved { by, title } => write!(f, "approved by {title} {by}"),
            Decision::Rejected => f.write_str("requires an executive meeting"),
        }
    }
}

pub struct Approver {
    name: String,
    title: &'static str,
    limit: f64,
    next: Option<Box<Approver>>,
}

impl Approver {
    pub fn new(title: &'static str, name: impl Into<String>, limit: f64) -> Self {
        Approver {
            name: name.into(),
            title,
            limit,
            next: None,
        }
    }

    pub fn manager(name: impl Into<String>) -> Self {
        Self::new("Manager", name, 1_000.0)
    }

    pub fn director(name: impl Into<String>) -> Self {
        Self::new("Director", name, 10_000.0)
    }

    pub fn president(name: impl Into<String>) -> Self {
        Self::new("President", name, 100_000.0)
    }

    /// Appends `next` after the last handler in this chain.
    pub fn set_next(mut self, next: Approver) -> Self {
        match self.next.take() {
            Some(existing) => self.next = Some(Box::new(existing.set_next(next))),
            None => self.next = Some(Box::new(next)),
        }
        self
    }

    pub fn handle(&self, purchase: &Purchase) -> Decision {
        if purchase.amount <= self.limit {
            return Decision::Approved {
                by: self.name.clone(),
                title: self.title,
            };
        }

        match &self.next {
            Some(next) => {
                tracing::debug!(
                    from = self.title,
                    to = next.title,
                    request = purchase.number,
                    "passing request up the chain"
                );
                next.handle(purchase)
            }
            None => Decision::Rejected,
        }
    }
}

/// Manager (<= 1,000) -> Director (<= 10,000) -> President (<= 100,000).
pub fn standard_chain() -> Approver {
    Approver::manager("Samuel")
        .set_next(Approver::director("Larry"))
        .set_next(Approver::president("Tammy"))
}

pub struct ChainOfResponsibilityPattern;

impl Pattern for ChainOfResponsibilityPattern {
    fn name(&self) -> &'static str {
        "chain-of-responsibility"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Pass a request along a chain of handlers until one of them handles it."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Handler", "Approver"),
            Participant::new("ConcreteHandler", "manager, director, president"),
            Participant::new("Client", "Purchase sender"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Chain of Responsibility")?;

        let chain = standard_chain();
        let requests = [
            Purchase::new(2034, 350.00, "Supplies"),
            Purchase::new(2035, 32_590.10, "Project X"),
            Purchase::new(2036, 122_100.00, "Project Y"),
        ];

        for purchase in &requests {
            writeln!(
                out,
                "Request #{} ({}, {:.2}): {}",
                purchase.number,
                purchase.purpose,
                purchase.amount,
                chain.handle(purchase)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approved_by(decision: Decision) -> Option<&'static str> {
        match decision {
            Decision::Approved { title, .. } => Some(title),
            Decision::Rejected => None,
        }
    }

    #[test]
    fn test_thresholds() {
        let chain = standard_chain();
        let check = |amount| approved_by(chain.handle(&Purchase::new(1, amount, "x")));

        assert_eq!(check(0.0), Some("Manager"));
        assert_eq!(check(1_000.0), Some("Manager"));
        assert_eq!(check(1_000.01), Some("Director"));
        assert_eq!(check(10_000.0), Some("Director"));
        assert_eq!(check(50_000.0), Some("President"));
        assert_eq!(check(100_000.0), Some("President"));
        assert_eq!(check(100_000.01), None);
    }

    #[test]
    fn test_single_handler_chain() {
        let only = Approver::manager("Solo");
        assert_eq!(only.handle(&Purchase::new(1, 5_000.0, "x")), Decision::Rejected);
    }

    #[test]
    fn test_transcript() {
        let mut out = Vec::new();
        ChainOfResponsibilityPattern.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Request #2034 (Supplies, 350.00): approved by Manager Samuel"));
        assert!(text.contains("Request #2035 (Project X, 32590.10): approved by President Tammy"));
        assert!(text.contains("Request #2036 (Project Y, 122100.00): requires an executive meeting"));
    }
}
