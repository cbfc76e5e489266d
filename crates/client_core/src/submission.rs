//! Contact form delivery.
//!
//! One request may be in flight at a time. The state lives in a watch channel
//! so a UI can render it while `submit` is awaiting the endpoint.

use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use reqwest::Client;
use shared::{error::ContactErrorBody, protocol::ContactFields};
use thiserror::Error;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use url::Url;

pub const DEFAULT_SENT_RESET_DELAY: Duration = Duration::from_secs(5);
pub const CONNECTIVITY_FAILURE_MESSAGE: &str =
    "Unable to reach the server. Check your connection and try again.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    Submit,
    /// Endpoint answered with a 2xx status.
    Delivered,
    /// Endpoint answered with an error status; carries the message to show.
    Rejected(String),
    TransportFailed,
    SentExpired,
}

impl SubmissionState {
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed(_))
    }

    /// Returns `None` when `event` is not legal in the current state.
    pub fn apply(&self, event: SubmissionEvent) -> Option<SubmissionState> {
        match (self, event) {
            (SubmissionState::Idle | SubmissionState::Failed(_), SubmissionEvent::Submit) => {
                Some(SubmissionState::Sending)
            }
            (SubmissionState::Sending, SubmissionEvent::Delivered) => Some(SubmissionState::Sent),
            (SubmissionState::Sending, SubmissionEvent::Rejected(reason)) => {
                Some(SubmissionState::Failed(reason))
            }
            (SubmissionState::Sending, SubmissionEvent::TransportFailed) => Some(
                SubmissionState::Failed(CONNECTIVITY_FAILURE_MESSAGE.to_string()),
            ),
            (SubmissionState::Sent, SubmissionEvent::SentExpired) => Some(SubmissionState::Idle),
            _ => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(reason) => Some(reason.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("contact form cannot be submitted while {state:?}")]
    NotReady { state: SubmissionState },
}

pub struct SubmissionClient {
    http: Client,
    endpoint: Url,
    sent_reset_delay: Duration,
    state: Arc<watch::Sender<SubmissionState>>,
}

impl SubmissionClient {
    pub fn new(endpoint: Url) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            http: Client::new(),
            endpoint,
            sent_reset_delay: DEFAULT_SENT_RESET_DELAY,
            state: Arc::new(state),
        }
    }

    pub fn with_sent_reset_delay(mut self, delay: Duration) -> Self {
        self.sent_reset_delay = delay;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    /// Posts `fields` to the endpoint and returns the state reached once the
    /// response (or transport failure) is in. Fields are sent as given; the
    /// caller is responsible for validating them.
    ///
    /// A successful delivery schedules the `Sent -> Idle` reset on the current
    /// tokio runtime.
    pub async fn submit(
        &self,
        fields: &ContactFields,
    ) -> Result<SubmissionState, SubmissionError> {
        let mut refused = None;
        self.state.send_if_modified(|state| match state.apply(SubmissionEvent::Submit) {
            Some(next) => {
                *state = next;
                true
            }
            None => {
                refused = Some(state.clone());
                false
            }
        });
        if let Some(state) = refused {
            debug!(?state, "contact submission refused");
            return Err(SubmissionError::NotReady { state });
        }

        let outcome = self.deliver(fields).await;
        let next = transition(&self.state, outcome);
        if next == SubmissionState::Sent {
            self.schedule_sent_reset();
        }
        Ok(next)
    }

    async fn deliver(&self, fields: &ContactFields) -> SubmissionEvent {
        let response = match self
            .http
            .post(self.endpoint.clone())
            .json(fields)
            .send()
            .await
        {
            Ok(response) => response,
            Err(error) => {
                warn!(endpoint = %self.endpoint, %error, "contact submission transport failure");
                return SubmissionEvent::TransportFailed;
            }
        };

        let status = response.status();
        if status.is_success() {
            info!(endpoint = %self.endpoint, status = status.as_u16(), "contact message delivered");
            return SubmissionEvent::Delivered;
        }

        let reason = match response.json::<ContactErrorBody>().await {
            Ok(body) => body.error,
            Err(error) => {
                debug!(%error, "contact endpoint error body was not decodable");
                format!("Request failed with status {}", status.as_u16())
            }
        };
        warn!(
            endpoint = %self.endpoint,
            status = status.as_u16(),
            %reason,
            "contact submission rejected"
        );
        SubmissionEvent::Rejected(reason)
    }

    fn schedule_sent_reset(&self) {
        let state: Weak<watch::Sender<SubmissionState>> = Arc::downgrade(&self.state);
        let delay = self.sent_reset_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The form was closed before the delay elapsed.
            let Some(state) = state.upgrade() else {
                return;
            };
            transition(&state, SubmissionEvent::SentExpired);
        });
    }
}

fn transition(state: &watch::Sender<SubmissionState>, event: SubmissionEvent) -> SubmissionState {
    state.send_if_modified(|current| match current.apply(event.clone()) {
        Some(next) => {
            *current = next;
            true
        }
        None => {
            debug!(?current, ?event, "ignored submission event");
            false
        }
    });
    state.borrow().clone()
}
