// Copyright (c) 2025 - Cowboy AI, Inc.
//! Connection Configuration Resolver
//!
//! Turns manual field edits, a pasted connection string or an uploaded
//! credentials file into one [`ConnectionDescriptor`], then asks an injected
//! [`Connector`] whether it can connect.
//!
//! # Sources
//!
//! - Manual fields: [`ConnectionConfigResolver::update_field`]
//! - Pasted URI: [`ConnectionConfigResolver::ingest_pasted_uri`] via [`parse_uri`]
//! - Credentials file: [`ConnectionConfigResolver::ingest_uploaded_file`] via
//!   [`parse_config_text`]
//!
//! All three are overlays onto the current field state and never fail on
//! malformed input.
//!
//! # Submission
//!
//! ```text
//! Idle ──submit──> Submitting ──ok──> Connected
//!                      │
//!                      └──err──> Failed
//! ```
//!
//! Only one attempt may be outstanding. A dismissed session discards the
//! result of its in-flight attempt.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use cim_graph_connection::{
//!     ConnectionConfigResolver, ConnectionOutcome, ConnectionResult, ConnectionStatus,
//!     ConnectionTarget, Connector,
//! };
//!
//! struct AlwaysUp;
//!
//! #[async_trait]
//! impl Connector for AlwaysUp {
//!     async fn connect(&self, _target: &ConnectionTarget) -> ConnectionResult<()> {
//!         Ok(())
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let (status_tx, status_rx) = tokio::sync::watch::channel(ConnectionStatus::disconnected());
//! let resolver = ConnectionConfigResolver::new(AlwaysUp, status_tx);
//!
//! resolver.ingest_pasted_uri("bolt://db.internal:7687");
//! let outcome = resolver.submit().await.unwrap();
//!
//! assert_eq!(outcome, ConnectionOutcome::Success);
//! assert!(status_rx.borrow().connected);
//! # });
//! ```

pub mod config_file;
pub mod uri;

pub use config_file::{parse_config_text, ConfigKey};
pub use uri::{build_connection_string, has_embedded_port, parse_uri};

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::connector::Connector;
use crate::domain::{ConnectionDescriptor, DescriptorField, FieldUpdate};
use crate::errors::{ConnectionError, ConnectionResult};
use crate::file_reader::FileReader;
use crate::state_machine::{StateMachine, SubmissionInput, SubmissionState};
use crate::status::{ConnectionOutcome, ConnectionStatus, FailureReason};

/// Editable state of one connection dialog
#[derive(Debug)]
struct Session {
    descriptor: ConnectionDescriptor,
    state: SubmissionState,
    attempt: u64,
}

impl Session {
    fn dismiss(&mut self) {
        match self.state.transition(&SubmissionInput::Dismiss) {
            Ok((next, ())) => self.state = next,
            Err(e) => warn!("{}", e),
        }
    }
}

/// Resolves connection input into a descriptor and submits it
///
/// The resolver owns the descriptor for one editing session. The connection
/// status belongs to the caller, who keeps the receiving half of the watch
/// channel.
pub struct ConnectionConfigResolver<C> {
    id: Uuid,
    connector: C,
    status: watch::Sender<ConnectionStatus>,
    session: Mutex<Session>,
}

impl<C: Connector> ConnectionConfigResolver<C> {
    /// Create a resolver starting from the default descriptor
    pub fn new(connector: C, status: watch::Sender<ConnectionStatus>) -> Self {
        Self::with_descriptor(connector, status, ConnectionDescriptor::default())
    }

    /// Create a resolver starting from `descriptor`
    pub fn with_descriptor(
        connector: C,
        status: watch::Sender<ConnectionStatus>,
        descriptor: ConnectionDescriptor,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            connector,
            status,
            session: Mutex::new(Session {
                descriptor,
                state: SubmissionState::Idle,
                attempt: 0,
            }),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.id
    }

    /// Snapshot of the current field state
    pub fn current_descriptor(&self) -> ConnectionDescriptor {
        self.lock().descriptor.clone()
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state
    }

    /// Apply a manual field edit without validation
    pub fn update_field(&self, update: FieldUpdate) {
        debug!(session = %self.id, ?update, "Field updated");
        self.lock().descriptor.apply(update);
    }

    /// Apply a manual edit given as raw form input
    pub fn update_field_by_name(&self, name: &str, value: &str) -> ConnectionResult<()> {
        let field: DescriptorField = name.parse()?;
        self.update_field(FieldUpdate::parse(field, value)?);
        Ok(())
    }

    /// Overlay a pasted `scheme://host[:port]` string
    pub fn ingest_pasted_uri(&self, raw: &str) -> ConnectionDescriptor {
        let mut session = self.lock();
        session.descriptor = parse_uri(raw, &session.descriptor);
        debug!(session = %self.id, host = %session.descriptor.host, "Applied pasted URI");
        session.descriptor.clone()
    }

    /// Overlay the contents of an uploaded credentials file
    pub fn ingest_uploaded_file(&self, text: &str) -> ConnectionDescriptor {
        let mut session = self.lock();
        session.descriptor = parse_config_text(text, &session.descriptor);
        debug!(session = %self.id, host = %session.descriptor.host, "Applied credentials file");
        session.descriptor.clone()
    }

    /// Read an uploaded file through `reader` and overlay it
    ///
    /// A read failure leaves the descriptor untouched.
    pub async fn ingest_file<R>(&self, reader: &R, path: &Path) -> ConnectionResult<ConnectionDescriptor>
    where
        R: FileReader + ?Sized,
    {
        let text = reader.read_to_string(path).await.map_err(|e| {
            warn!(session = %self.id, "Could not load credentials file: {}", e);
            e
        })?;

        Ok(self.ingest_uploaded_file(&text))
    }

    /// Submit the current descriptor to the connector
    ///
    /// Returns [`ConnectionError::SubmissionInProgress`] if another attempt is
    /// outstanding and [`ConnectionError::AttemptDiscarded`] if the session was
    /// dismissed before the connector answered. Otherwise the outcome is
    /// applied to the session and published to the status channel.
    #[instrument(skip(self), fields(session = %self.id))]
    pub async fn submit(&self) -> ConnectionResult<ConnectionOutcome> {
        let (attempt, descriptor) = self.begin_attempt()?;
        let mut guard = AttemptGuard {
            session: &self.session,
            attempt,
            armed: true,
        };

        let target = descriptor.target();
        let outcome = if !descriptor.is_submittable() {
            warn!(attempt, "Descriptor has no host, connector not called");
            ConnectionOutcome::Failure(FailureReason::InvalidDescriptor)
        } else {
            info!(
                attempt,
                uri = %target.uri,
                encrypted = descriptor.scheme.is_encrypted(),
                "Connecting"
            );
            match self.connector.connect(&target).await {
                Ok(()) => {
                    info!(attempt, uri = %target.uri, "Connected");
                    ConnectionOutcome::Success
                }
                Err(e) => {
                    warn!(attempt, uri = %target.uri, "Connection failed: {}", e);
                    ConnectionOutcome::Failure(FailureReason::UnreachableOrRejected)
                }
            }
        };

        guard.armed = false;
        self.finish_attempt(attempt, outcome, target.uri)
    }

    /// Close the submission surface
    ///
    /// An attempt still in flight is discarded when it resolves.
    pub fn dismiss(&self) {
        let mut session = self.lock();
        if session.state.is_submitting() {
            info!(session = %self.id, attempt = session.attempt, "Dismissed during submission");
        }
        session.dismiss();
        session.attempt += 1;
    }

    fn begin_attempt(&self) -> ConnectionResult<(u64, ConnectionDescriptor)> {
        let mut session = self.lock();
        let (next, ()) = session
            .state
            .transition(&SubmissionInput::Submit)
            .map_err(|_| ConnectionError::SubmissionInProgress)?;

        session.state = next;
        session.attempt += 1;
        Ok((session.attempt, session.descriptor.clone()))
    }

    fn finish_attempt(
        &self,
        attempt: u64,
        outcome: ConnectionOutcome,
        uri: String,
    ) -> ConnectionResult<ConnectionOutcome> {
        let mut session = self.lock();
        if session.attempt != attempt || !session.state.is_submitting() {
            debug!(attempt, "Discarding outcome of stale attempt");
            return Err(ConnectionError::AttemptDiscarded(attempt));
        }

        let input = match outcome {
            ConnectionOutcome::Success => SubmissionInput::Succeed,
            ConnectionOutcome::Failure(_) => SubmissionInput::Fail,
        };
        let (next, ()) = session.state.transition(&input)?;
        session.state = next;

        self.status
            .send_replace(ConnectionStatus::from_outcome(outcome, uri));
        Ok(outcome)
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        lock_session(&self.session)
    }
}

fn lock_session(session: &Mutex<Session>) -> MutexGuard<'_, Session> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the session to Idle if a submit future is dropped mid-flight
struct AttemptGuard<'a> {
    session: &'a Mutex<Session>,
    attempt: u64,
    armed: bool,
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut session = lock_session(self.session);
        if session.attempt == self.attempt && session.state.is_submitting() {
            debug!(attempt = self.attempt, "Submission abandoned");
            session.dismiss();
        }
    }
}
