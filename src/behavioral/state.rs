//! State: a blog post moves `Draft -> PendingReview -> Published`.
//! Each state is its own type behind `Box<dyn State>`, and every
//! transition consumes the old state and returns the next one.

use std::io::Write;

use crate::catalog::{Category, Participant, Pattern};
use crate::error::PatternError;
use crate::output;

trait State {
    fn name(&self) -> &'static str;
    fn request_review(self: Box<Self>) -> Transition;
    fn approve(self: Box<Self>) -> Transition;
    fn reject(self: Box<Self>) -> Transition;

    fn content<'a>(&self, _post: &'a Post) -> &'a str {
        ""
    }
}

/// On failure the unchanged state comes back with the refused action.
type Transition = Result<Box<dyn State>, (Box<dyn State>, &'static str)>;

fn refuse(state: Box<dyn State>, action: &'static str) -> Transition {
    Err((state, action))
}

struct Draft;
struct PendingReview;
struct Published;

impl State for Draft {
    fn name(&self) -> &'static str {
        "draft"
    }

    fn request_review(self: Box<Self>) -> Transition {
        Ok(Box::new(PendingReview))
    }

    fn approve(self: Box<Self>) -> Transition {
        refuse(self, "approve")
    }

    fn reject(self: Box<Self>) -> Transition {
        refuse(self, "reject")
    }
}

impl State for PendingReview {
    fn name(&self) -> &'static str {
        "pending review"
    }

    fn request_review(self: Box<Self>) -> Transition {
        refuse(self, "request review")
    }

    fn approve(self: Box<Self>) -> Transition {
        Ok(Box::new(Published))
    }

    fn reject(self: Box<Self>) -> Transition {
        Ok(Box::new(Draft))
    }
}

impl State for Published {
    fn name(&self) -> &'static str {
        "published"
    }

    fn request_review(self: Box<Self>) -> Transition {
        refuse(self, "request review")
    }

    fn approve(self: Box<Self>) -> Transition {
        refuse(self, "approve")
    }

    fn reject(self: Box<Self>) -> Transition {
        refuse(self, "reject")
    }

    fn content<'a>(&self, post: &'a Post) -> &'a str {
        &post.content
    }
}

/// The context. Its behavior changes with its current state.
pub struct Post {
    state: Option<Box<dyn State>>,
    content: String,
}

impl Default for Post {
    fn default() -> Self {
        Self::new()
    }
}

impl Post {
    pub fn new() -> Self {
        Post {
            state: Some(Box::new(Draft)),
            content: String::new(),
        }
    }

    pub fn add_text(&mut self, text: &str) {
        self.content.push_str(text);
    }

    /// Empty until the post is published.
    pub fn content(&self) -> &str {
        match &self.state {
            Some(state) => state.content(self),
            None => "",
        }
    }

    pub fn status(&self) -> &'static str {
        self.state.as_ref().map_or("unknown", |s| s.name())
    }

    pub fn try_request_review(&mut self) -> Result<(), PatternError> {
        self.transition(|s| s.request_review())
    }

    pub fn try_approve(&mut self) -> Result<(), PatternError> {
        self.transition(|s| s.approve())
    }

    pub fn try_reject(&mut self) -> Result<(), PatternError> {
        self.transition(|s| s.reject())
    }

    /// Lenient variants: illegal actions leave the post as it was.
    pub fn request_review(&mut self) {
        let _ = self.try_request_review();
    }

    pub fn approve(&mut self) {
        let _ = self.try_approve();
    }

    pub fn reject(&mut self) {
        let _ = self.try_reject();
    }

    fn transition<F>(&mut self, action: F) -> Result<(), PatternError>
    where
        F: FnOnce(Box<dyn State>) -> Transition,
    {
        let Some(state) = self.state.take() else {
            return Ok(());
        };
        let from = state.name();
        match action(state) {
            Ok(next) => {
                tracing::debug!(from, to = next.name(), "post state changed");
                self.state = Some(next);
                Ok(())
            }
            Err((unchanged, action)) => {
                self.state = Some(unchanged);
                Err(PatternError::InvalidTransition {
                    state: from,
                    action,
                })
            }
        }
    }
}

pub struct StatePattern;

impl Pattern for StatePattern {
    fn name(&self) -> &'static str {
        "state"
    }

    fn category(&self) -> Category {
        Category::Behavioral
    }

    fn intent(&self) -> &'static str {
        "Let an object alter its behavior when its internal state changes."
    }

    fn participants(&self) -> &'static [Participant] {
        const PARTICIPANTS: &[Participant] = &[
            Participant::new("Context", "Post"),
            Participant::new("State", "State (private trait)"),
            Participant::new("ConcreteState", "Draft, PendingReview, Published"),
        ];
        PARTICIPANTS
    }

    fn run(&self, out: &mut dyn Write) -> Result<(), PatternError> {
        output::heading(out, "State")?;

        let mut post = Post::new();
        post.add_text("I ate a salad for lunch today");
        writeln!(out, "[{}] content: {:?}", post.status(), post.content())?;

        post.request_review();
        writeln!(out, "[{}] content: {:?}", post.status(), post.content())?;

        post.reject();
        writeln!(out, "[{}] after reject", post.status())?;

        post.request_review();
        post.approve();
        writeln!(out, "[{}] content: {:?}", post.status(), post.content())?;

        output::section(out, "Illegal transition")?;
        if let Err(e) = post.try_reject() {
            writeln!(out, "{e}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut post = Post::new();
        post.add_text("hello");
        assert_eq!(post.status(), "draft");
        assert_eq!(post.content(), "");

        post.try_request_review().unwrap();
        assert_eq!(post.status(), "pending review");
        assert_eq!(post.content(), "");

        post.try_approve().unwrap();
        assert_eq!(post.status(), "published");
        assert_eq!(post.content(), "hello");
    }

    #[test]
    fn test_reject_returns_to_draft() {
        let mut post = Post::new();
        post.request_review();
        post.try_reject().unwrap();
        assert_eq!(post.status(), "draft");
    }

    #[test]
    fn test_illegal_actions_keep_state() {
        let mut post = Post::new();

        let err = post.try_approve().unwrap_err();
        assert_eq!(err.to_string(), "cannot approve while draft");
        assert_eq!(post.status(), "draft");

        post.approve();
        assert_eq!(post.status(), "draft");

        post.request_review();
        post.approve();
        assert!(matches!(
            post.try_request_review(),
            Err(PatternError::InvalidTransition { state: "published", .. })
        ));
        assert_eq!(post.status(), "published");
    }
}
