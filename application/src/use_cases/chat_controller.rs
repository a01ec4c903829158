//! Chat controller use case
//!
//! Owns the conversation and turns each user submission into exactly one
//! assistant reply, calling at most one external service on the way.

use crate::ports::completion_gateway::{CompletionGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::conversation_notifier::{ConversationNotifier, NoConversationNotifier};
use crate::ports::listing_gateway::ListingGateway;
use assistant_domain::util::preview;
use assistant_domain::{Conversation, DomainError, Intent, Message, reply};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// Why a submission was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Empty or whitespace-only text
    Blank,
    /// Another reply is still in flight
    ReplyPending,
}

/// Result of [`ChatController::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The conversation was not touched
    Ignored(IgnoreReason),
    /// The user message and this assistant reply were appended
    Replied(Message),
}

impl SubmitOutcome {
    pub fn reply(&self) -> Option<&Message> {
        match self {
            SubmitOutcome::Replied(message) => Some(message),
            SubmitOutcome::Ignored(_) => None,
        }
    }
}

/// Conversation controller
///
/// `submit` takes `&self` so the controller can be shared (`Arc`) between
/// the input loop and the task awaiting a reply. The conversation mutex is
/// never held across an await; a submission that arrives while a reply is
/// pending sees the flag and is dropped.
pub struct ChatController {
    completion: Arc<dyn CompletionGateway>,
    listing: Arc<dyn ListingGateway>,
    notifier: Arc<dyn ConversationNotifier>,
    conversation_logger: Arc<dyn ConversationLogger>,
    conversation: Mutex<Conversation>,
}

impl ChatController {
    pub fn new(completion: Arc<dyn CompletionGateway>, listing: Arc<dyn ListingGateway>) -> Self {
        Self {
            completion,
            listing,
            notifier: Arc::new(NoConversationNotifier),
            conversation_logger: Arc::new(NoConversationLogger),
            conversation: Mutex::new(Conversation::new()),
        }
    }

    /// Replace the seeded greeting.
    pub fn with_greeting(self, greeting: impl Into<String>) -> Self {
        *self.conversation() = Conversation::with_greeting(greeting);
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn ConversationNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Snapshot of the conversation so far.
    pub fn messages(&self) -> Vec<Message> {
        self.conversation().messages().to_vec()
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.conversation().is_awaiting_reply()
    }

    /// Submit user text and wait for the assistant reply.
    ///
    /// Never fails: every gateway error becomes an assistant message.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let begun = self.conversation().begin_exchange(text);
        let user_message = match begun {
            Ok(message) => message,
            Err(DomainError::EmptyMessage) => {
                debug!("Ignoring blank submission");
                return SubmitOutcome::Ignored(IgnoreReason::Blank);
            }
            Err(e) => {
                debug!("Ignoring submission: {}", e);
                return SubmitOutcome::Ignored(IgnoreReason::ReplyPending);
            }
        };

        info!("User message {}: {}", user_message.id(), preview(text, 80));
        self.record_appended(&user_message);
        self.notifier.on_reply_pending(true);

        let content = self.answer(text).await;

        let completed = self.conversation().complete_exchange(content);
        match completed {
            Ok(reply) => {
                self.record_appended(&reply);
                self.notifier.on_reply_pending(false);
                SubmitOutcome::Replied(reply)
            }
            // Only this call raised the flag, so this arm means the
            // conversation was replaced underneath us.
            Err(e) => {
                warn!("Dropping reply: {}", e);
                SubmitOutcome::Ignored(IgnoreReason::ReplyPending)
            }
        }
    }

    /// Produce the assistant text for a user message. Exactly one external
    /// call is made, or none when a credential is missing.
    async fn answer(&self, text: &str) -> String {
        if !self.completion.is_configured() || !self.listing.is_configured() {
            warn!("Skipping outbound call: a service API key is not configured");
            return reply::NOT_CONFIGURED.to_string();
        }

        let intent = Intent::classify(text);
        info!("Routing message to {} service", intent);

        match intent {
            Intent::Listing => match self.listing.list_items().await {
                Ok(items) => {
                    debug!("Listing returned {} items", items.len());
                    reply::listing_sentence(&items)
                }
                Err(e) => {
                    self.record_failure(intent, &e);
                    reply::LISTING_UNAVAILABLE.to_string()
                }
            },
            Intent::Completion => match self.completion.complete(text).await {
                Ok(Some(content)) if !content.is_empty() => content,
                Ok(_) => {
                    debug!("Completion returned no content, using fallback");
                    reply::COMPLETION_FALLBACK.to_string()
                }
                Err(e) => {
                    self.record_failure(intent, &e);
                    if e.is_configuration() {
                        reply::NOT_CONFIGURED.to_string()
                    } else {
                        reply::GENERIC_FAILURE.to_string()
                    }
                }
            },
        }
    }

    fn record_appended(&self, message: &Message) {
        self.conversation_logger
            .log(ConversationEvent::message(message));
        self.notifier.on_message_appended(message);
    }

    fn record_failure(&self, intent: Intent, error: &GatewayError) {
        warn!("{} call failed: {}", intent, error);
        self.conversation_logger.log(ConversationEvent::new(
            "gateway_error",
            serde_json::json!({
                "intent": intent.as_str(),
                "configuration": error.is_configuration(),
                "error": error.to_string(),
            }),
        ));
    }

    fn conversation(&self) -> MutexGuard<'_, Conversation> {
        self.conversation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
