use std::fmt;

/// A single, already formatted line of text handed to the logger.
///
/// The core adds nothing to it: no timestamp, no level, no fields. Any such
/// decoration is the caller's business and happens before construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogMessage(String);

impl LogMessage {
  pub fn new(text: impl Into<String>) -> Self {
    LogMessage(text.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn into_inner(self) -> String {
    self.0
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }
}

impl From<&str> for LogMessage {
  fn from(text: &str) -> Self {
    LogMessage(text.to_owned())
  }
}

impl From<String> for LogMessage {
  fn from(text: String) -> Self {
    LogMessage(text)
  }
}

impl From<&String> for LogMessage {
  fn from(text: &String) -> Self {
    LogMessage(text.clone())
  }
}

impl AsRef<str> for LogMessage {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for LogMessage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn conversions_keep_text_verbatim() {
    let owned = String::from("Thread 1 - Message 2");
    assert_eq!(LogMessage::from(&owned).as_str(), "Thread 1 - Message 2");
    assert_eq!(LogMessage::from("a\nb").into_inner(), "a\nb");
    assert_eq!(LogMessage::new(owned).to_string(), "Thread 1 - Message 2");
  }

  #[test]
  fn empty_message_is_allowed() {
    let msg = LogMessage::from("");
    assert!(msg.is_empty());
    assert_eq!(msg.len(), 0);
  }
}
