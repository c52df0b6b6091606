//! Chat session controller
//!
//! Owns the message log, the draft, and the single in-flight completion
//! request. The session is either idle or awaiting exactly one response; the
//! pending flag is read off that phase rather than stored on its own, so it
//! cannot drift from the real request state.
//!
//! The remote call runs on a spawned tokio task and reports back through a
//! oneshot channel. The owning event loop resolves it with [`ChatSession::poll`]
//! (non-blocking) or [`ChatSession::settle`] (awaits). Dropping the session
//! while a request is in flight leaves the task to finish on its own; its
//! result is discarded.

use std::fmt;
use std::sync::Arc;

use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::ai::{ApiError, SharedClient};
use crate::config::DEFAULT_TEMPERATURE;
use crate::content::{
    CONNECTION_ERROR_FALLBACK, EMPTY_REPLY_FALLBACK, GREETING, SYSTEM_INSTRUCTION,
};
use crate::state::{ChatTurn, MessageLog, SessionState};

type Completion = Result<String, ApiError>;

/// Called after every append to the log with the full list of turns
pub type LogObserver = Box<dyn FnMut(&[ChatTurn]) + Send>;

/// Why a submit was ignored. Never shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    Blank,
    Pending,
}

impl fmt::Display for SubmitRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitRejection::Blank => f.write_str("message is blank"),
            SubmitRejection::Pending => f.write_str("a reply is still pending"),
        }
    }
}

enum Phase {
    Idle,
    AwaitingResponse(oneshot::Receiver<Completion>),
}

pub struct ChatSession {
    client: SharedClient,
    system_instruction: Arc<str>,
    temperature: f32,
    log: MessageLog,
    draft: String,
    phase: Phase,
    observers: Vec<LogObserver>,
}

impl ChatSession {
    pub fn new(
        client: SharedClient,
        system_instruction: impl Into<Arc<str>>,
        temperature: f32,
    ) -> Self {
        Self {
            client,
            system_instruction: system_instruction.into(),
            temperature,
            log: MessageLog::seeded(GREETING),
            draft: String::new(),
            phase: Phase::Idle,
            observers: Vec::new(),
        }
    }

    /// Session using the built-in biography and the default temperature
    pub fn with_defaults(client: SharedClient) -> Self {
        Self::new(client, SYSTEM_INSTRUCTION, DEFAULT_TEMPERATURE)
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&[ChatTurn]) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn client(&self) -> &SharedClient {
        &self.client
    }

    pub fn turns(&self) -> &[ChatTurn] {
        self.log.turns()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.phase, Phase::AwaitingResponse(_))
    }

    pub fn state(&self) -> SessionState<'_> {
        SessionState {
            log: &self.log,
            pending: self.is_pending(),
            draft: &self.draft,
        }
    }

    /// Whether submitting the current draft would be accepted
    pub fn can_submit(&self) -> bool {
        !self.is_pending() && !self.draft.trim().is_empty()
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Mutable access for in-place editing (cursor inserts, backspace)
    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    /// Submit whatever is currently in the draft.
    pub fn submit_draft(&mut self) -> Result<(), SubmitRejection> {
        let text = self.draft.clone();
        self.submit(&text)
    }

    /// Append the visitor's turn and start the remote request.
    ///
    /// Blank text, or any submit while a reply is pending, is a no-op: log,
    /// draft and phase are left exactly as they were.
    pub fn submit(&mut self, text: &str) -> Result<(), SubmitRejection> {
        let message = text.trim();
        if message.is_empty() {
            tracing::debug!("ignoring blank submit");
            return Err(SubmitRejection::Blank);
        }
        if self.is_pending() {
            tracing::debug!("ignoring submit while a reply is pending");
            return Err(SubmitRejection::Pending);
        }

        self.draft.clear();
        self.append(ChatTurn::user(message));

        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(&self.client);
        let system_instruction = Arc::clone(&self.system_instruction);
        let temperature = self.temperature;
        let prompt = message.to_string();

        tracing::info!(
            provider = client.name(),
            model = client.model(),
            chars = prompt.chars().count(),
            "requesting completion"
        );

        tokio::spawn(async move {
            let result = client.complete(&prompt, &system_instruction, temperature).await;
            // The receiver is gone only if the session was dropped
            let _ = tx.send(result);
        });

        self.phase = Phase::AwaitingResponse(rx);
        Ok(())
    }

    /// Resolve the in-flight request if it has finished. Returns true when a
    /// reply was appended.
    pub fn poll(&mut self) -> bool {
        let outcome = match &mut self.phase {
            Phase::Idle => return false,
            Phase::AwaitingResponse(rx) => match rx.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return false,
                Err(TryRecvError::Closed) => Err(task_died()),
            },
        };
        self.finish(outcome);
        true
    }

    /// Wait for the in-flight request, if any, and resolve it.
    pub async fn settle(&mut self) -> bool {
        let outcome = match &mut self.phase {
            Phase::Idle => return false,
            Phase::AwaitingResponse(rx) => rx.await.unwrap_or_else(|_| Err(task_died())),
        };
        self.finish(outcome);
        true
    }

    // The only way out of AwaitingResponse. The phase is reset before the
    // reply is appended so observers always see an idle session.
    fn finish(&mut self, outcome: Completion) {
        self.phase = Phase::Idle;

        let reply = match outcome {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => {
                tracing::warn!("completion returned no text");
                EMPTY_REPLY_FALLBACK.to_string()
            }
            Err(e) => {
                tracing::warn!("completion failed: {e}");
                CONNECTION_ERROR_FALLBACK.to_string()
            }
        };

        self.append(ChatTurn::assistant(reply));
    }

    fn append(&mut self, turn: ChatTurn) {
        self.log.push(turn);
        let turns = self.log.turns();
        for observer in &mut self.observers {
            observer(turns);
        }
    }
}

fn task_died() -> ApiError {
    ApiError::Task("completion task ended without a result".to_string())
}
