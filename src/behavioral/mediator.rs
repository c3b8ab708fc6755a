//! Mediator: chat participants never hold references to each other. All
//! traffic goes through the `ChatRoom`, which knows who is registered.

use std::collections::BTreeMap;
use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub from: String,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct Member {
    name: String,
    inbox: Vec<Message>,
}

impl Member {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inbox(&self) -> &[Message] {
        &self.inbox
    }

    fn receive(&mut self, from: &str, text: &str) {
        self.inbox.push(Message {
            from: from.to_string(),
            text: text.to_string(),
        });
    }
}

#[derive(Debug, Default)]
pub struct ChatRoom {
    members: BTreeMap<String, Member>,
}

impl ChatRoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.members.entry(name.clone()).or_insert_with(|| Member {
            name,
            inbox: Vec::new(),
        });
    }

    pub fn send(&mut self, from: &str, to: &str, text: &str) -> Result<(), PatternError> {
        if !self.members.contains_key(from) {
            return Err(PatternError::UnknownParticipant(from.to_string()));
        }
        let recipient = self
            .members
            .get_mut(to)
            .ok_or_else(|| PatternError::UnknownParticipant(to.to_string()))?;
        recipient.receive(from, text);
        Ok(())
    }

    /// Delivers to everyone except the sender. Returns how many received it.
    pub fn broadcast(&mut self, from: &str, text: &str) -> Result<usize, PatternError> {
        if !self.members.contains_key(from) {
            return Err(PatternError::UnknownParticipant(from.to_string()));
        }
        let mut delivered = 0;
        for member in self.members.values_mut().filter(|m| m.name != from) {
            member.receive(from, text);
            delivered += 1;
        }
        Ok(delivered)
    }

    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members.get(name)
    }

    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }
}

pub struct MediatorPattern;

impl Pattern for MediatorPattern {
    fn name(&self) -> &'static str {
        "mediator"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Define an object that encapsulates how a set of objects interact."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Mediator", "ChatRoom"),
            Participant::new("Colleague", "Member"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "Mediator")?;

        let mut room = ChatRoom::new();
        for name in ["George", "Paul", "Ringo", "John"] {
            room.register(name);
        }

        room.send("Paul", "Ringo", "All you need is love")?;
        room.send("Ringo", "George", "My sweet Lord")?;
        room.broadcast("John", "Let it be")?;

        if let Err(e) = room.send("George", "Yoko", "Hello?") {
            writeln!(out, "Delivery failed: {e}")?;
        }

        for member in room.members() {
            for message in member.inbox() {
                writeln!(out, "{} <- {}: '{}'", member.name(), message.from, message.text)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> ChatRoom {
        let mut room = ChatRoom::new();
        room.register("a");
        room.register("b");
        room.register("c");
        room
    }

    #[test]
    fn test_direct_message() {
        let mut room = room();
        room.send("a", "b", "hi").unwrap();

        let inbox = room.member("b").unwrap().inbox();
        assert_eq!(inbox.len(), 1);
        assert_eq!(inbox[0].from, "a");
        assert!(room.member("c").unwrap().inbox().is_empty());
    }

    #[test]
    fn test_broadcast_skips_sender() {
        let mut room = room();
        assert_eq!(room.broadcast("a", "all").unwrap(), 2);
        assert!(room.member("a").unwrap().inbox().is_empty());
    }

    #[test]
    fn test_unknown_participants() {
        let mut room = room();
        assert!(matches!(
            room.send("a", "z", "x"),
            Err(PatternError::UnknownParticipant(name)) if name == "z"
        ));
        assert!(room.send("z", "a", "x").is_err());
        assert!(room.broadcast("z", "x").is_err());
    }

    #[test]
    fn test_register_twice_keeps_inbox() {
        let mut room = room();
        room.send("a", "b", "hi").unwrap();
        room.register("b");
        assert_eq!(room.member("b").unwrap().inbox().len(), 1);
    }
}
