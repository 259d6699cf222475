//! [`ChatProxy`] turns a visitor's question into a logged answer.

use std::sync::Arc;

use folio_core::{
  chat::{ChatMessage, ChatOutcome, NewChatMessage},
  store::PortfolioStore,
};

use crate::{CompletionBackend, CompletionRequest, Error, Result, SystemPrompt};

/// Returned when the service answers with nothing usable.
pub const EMPTY_REPLY: &str = "I'm sorry, I couldn't generate a response. For specific questions about Kirsi's work or to discuss potential projects, please email her directly at kirsi.rohbock@gmail.com.";

/// Returned when the service cannot be reached or rejects the request.
pub const UNAVAILABLE_REPLY: &str = "I'm having trouble connecting to my knowledge base right now. Please try again later or contact Kirsi directly at kirsi.rohbock@gmail.com.";

/// What the assistant said, and whether the model actually said it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
  Answered(String),
  /// The service replied without usable text.
  Empty,
  /// The service failed; the cause has already been logged.
  Unavailable,
}

impl ChatReply {
  /// The text to show the visitor.
  pub fn text(&self) -> &str {
    match self {
      Self::Answered(text) => text,
      Self::Empty => EMPTY_REPLY,
      Self::Unavailable => UNAVAILABLE_REPLY,
    }
  }

  pub fn outcome(&self) -> ChatOutcome {
    match self {
      Self::Answered(_) => ChatOutcome::Answered,
      Self::Empty => ChatOutcome::Empty,
      Self::Unavailable => ChatOutcome::Unavailable,
    }
  }
}

/// A completed exchange: the reply plus the chat log record written for it.
#[derive(Debug, Clone)]
pub struct ChatExchange {
  pub reply:  ChatReply,
  pub record: ChatMessage,
}

/// Answers questions about the portfolio owner.
///
/// Each call is independent: the only context the model sees is the system
/// prompt and the one message. There is no retry.
pub struct ChatProxy<S, B> {
  store:   Arc<S>,
  backend: B,
  prompt:  SystemPrompt,
}

impl<S, B> ChatProxy<S, B>
where
  S: PortfolioStore,
  B: CompletionBackend,
{
  pub fn new(store: Arc<S>, backend: B, prompt: SystemPrompt) -> Self {
    Self {
      store,
      backend,
      prompt,
    }
  }

  /// Ask the completion service, classify the result, and log the exchange.
  ///
  /// Upstream failures are absorbed into [`ChatReply::Unavailable`]; the only
  /// error returned is a failure to write the chat log.
  pub async fn answer(&self, message: &str) -> Result<ChatExchange> {
    let reply = self.ask(message).await;

    let record = self
      .store
      .save_chat_message(NewChatMessage {
        message:  message.to_owned(),
        response: reply.text().to_owned(),
        outcome:  reply.outcome(),
      })
      .await
      .map_err(|e| Error::Store(Box::new(e)))?;

    Ok(ChatExchange { reply, record })
  }

  async fn ask(&self, message: &str) -> ChatReply {
    let request = CompletionRequest::new(self.prompt.as_str(), message);
    match self.backend.complete(&request).await {
      Ok(Some(text)) if !text.trim().is_empty() => ChatReply::Answered(text),
      Ok(_) => {
        tracing::warn!("completion service returned no usable text");
        ChatReply::Empty
      }
      Err(e) => {
        tracing::error!(error = %e, "completion request failed");
        ChatReply::Unavailable
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use folio_store_memory::MemoryStore;

  use super::*;

  /// Replays a fixed result and remembers what it was asked.
  struct FakeBackend {
    result: fn() -> Result<Option<String>>,
    seen:   Mutex<Vec<CompletionRequest>>,
  }

  impl FakeBackend {
    fn new(result: fn() -> Result<Option<String>>) -> Self {
      Self {
        result,
        seen: Mutex::new(Vec::new()),
      }
    }
  }

  impl CompletionBackend for FakeBackend {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>> {
      self.seen.lock().unwrap().push(request.clone());
      (self.result)()
    }
  }

  fn proxy(backend: FakeBackend) -> (Arc<MemoryStore>, ChatProxy<MemoryStore, FakeBackend>) {
    let store = Arc::new(MemoryStore::seeded().unwrap());
    let proxy = ChatProxy::new(Arc::clone(&store), backend, SystemPrompt::builtin());
    (store, proxy)
  }

  #[tokio::test]
  async fn answered_text_is_returned_verbatim_and_logged() {
    let (store, proxy) = proxy(FakeBackend::new(|| Ok(Some("  Kirsi leads research.\n".into()))));

    let exchange = proxy.answer("What does Kirsi do?").await.unwrap();
    assert_eq!(exchange.reply, ChatReply::Answered("  Kirsi leads research.\n".into()));
    assert_eq!(exchange.record.response, "  Kirsi leads research.\n");
    assert_eq!(exchange.record.outcome, ChatOutcome::Answered);

    let history = store.get_chat_history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].message, "What does Kirsi do?");
  }

  #[tokio::test]
  async fn request_carries_prompt_and_fixed_sampling() {
    let (_store, proxy) = proxy(FakeBackend::new(|| Ok(Some("ok".into()))));
    proxy.answer("hello").await.unwrap();

    let seen = proxy.backend.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].system, SystemPrompt::builtin().as_str());
    assert_eq!(seen[0].user, "hello");
    assert_eq!(seen[0].max_tokens, 300);
    assert_eq!(seen[0].temperature, 0.7);
  }

  #[tokio::test]
  async fn missing_or_blank_text_uses_empty_reply() {
    for backend in [
      FakeBackend::new(|| Ok(None)),
      FakeBackend::new(|| Ok(Some("   ".into()))),
    ] {
      let (store, proxy) = proxy(backend);
      let exchange = proxy.answer("hi").await.unwrap();
      assert_eq!(exchange.reply, ChatReply::Empty);
      assert_eq!(exchange.reply.text(), EMPTY_REPLY);

      let history = store.get_chat_history().await.unwrap();
      assert_eq!(history.len(), 1);
      assert_eq!(history[0].outcome, ChatOutcome::Empty);
    }
  }

  #[tokio::test]
  async fn upstream_failure_becomes_unavailable_reply() {
    let (store, proxy) = proxy(FakeBackend::new(|| Err(Error::RateLimited)));

    let exchange = proxy.answer("What are Kirsi's skills?").await.unwrap();
    assert_eq!(exchange.reply, ChatReply::Unavailable);
    assert!(exchange.reply.text().contains("kirsi.rohbock@gmail.com"));

    let history = store.get_chat_history().await.unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].response, UNAVAILABLE_REPLY);
    assert_eq!(history[0].outcome, ChatOutcome::Unavailable);
  }

  #[tokio::test]
  async fn calls_are_independent() {
    let (store, proxy) = proxy(FakeBackend::new(|| Ok(Some("ok".into()))));
    proxy.answer("first").await.unwrap();
    proxy.answer("second").await.unwrap();

    let seen = proxy.backend.seen.lock().unwrap();
    assert_eq!(seen[1].user, "second");
    assert!(!seen[1].system.contains("first"));
    drop(seen);
    assert_eq!(store.get_chat_history().await.unwrap().len(), 2);
  }
}
