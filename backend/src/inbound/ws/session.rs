//! Per-connection WebSocket handler.
//!
//! Forwards brand events from the broadcast feed to the client, filtered by
//! the client's current subscription. The public WebSocket contract pings
//! every 5s and considers a connection idle after 10s without client
//! traffic. Tests shorten these intervals to speed up feedback.

use std::time::{Duration, Instant};

use actix_ws::{CloseCode, CloseReason, Closed, Message, MessageStream, ProtocolError, Session};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::time;
use tracing::{debug, warn};

use crate::domain::brand::BrandCreationId;
use crate::domain::brand_events::BrandEvent;
use crate::inbound::ws::messages::{ClientCommand, ServerFrame};

/// Time between heartbeats to the client (5s in production, shorter in tests).
#[cfg(not(test))]
const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
#[cfg(test)]
const HEARTBEAT_INTERVAL: Duration = Duration::from_millis(50);

/// Max idle time before disconnecting the client (10s in production, shorter in tests).
#[cfg(not(test))]
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);
#[cfg(test)]
const CLIENT_TIMEOUT: Duration = Duration::from_millis(100);

pub(super) async fn handle_ws_session(
    events: broadcast::Receiver<BrandEvent>,
    session: Session,
    stream: MessageStream,
) {
    WsSession::new(events).run(session, stream).await;
}

enum SessionError {
    ClientClosed(Option<CloseReason>),
    StreamClosed,
    HeartbeatTimeout,
    Protocol(ProtocolError),
    InvalidPayload,
    FeedClosed,
    Network(Closed),
}

enum CloseAction {
    None,
    Close(Option<CloseReason>),
}

/// Which events a connection currently receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Subscription {
    All,
    One(BrandCreationId),
}

impl Subscription {
    fn accepts(self, event: &BrandEvent) -> bool {
        match self {
            Self::All => true,
            Self::One(id) => event.brand_creation_id() == Some(&id),
        }
    }
}

impl From<ClientCommand> for Subscription {
    fn from(command: ClientCommand) -> Self {
        match command {
            ClientCommand::Watch { brand_creation_id } => {
                Self::One(BrandCreationId::from_uuid(brand_creation_id))
            }
            ClientCommand::WatchAll => Self::All,
        }
    }
}

struct WsSession {
    events: broadcast::Receiver<BrandEvent>,
    subscription: Subscription,
}

impl WsSession {
    fn new(events: broadcast::Receiver<BrandEvent>) -> Self {
        Self {
            events,
            subscription: Subscription::All,
        }
    }

    async fn run(mut self, mut session: Session, mut stream: MessageStream) {
        let mut last_heartbeat = Instant::now();
        let mut heartbeat = time::interval(HEARTBEAT_INTERVAL);

        loop {
            let result = tokio::select! {
                _ = heartbeat.tick() => {
                    Self::handle_heartbeat_tick(&mut session, &last_heartbeat).await
                }
                message = stream.recv() => {
                    self.handle_stream_message(&mut session, &mut last_heartbeat, message)
                        .await
                }
                event = self.events.recv() => {
                    self.handle_event(&mut session, event).await
                }
            };

            if let Err(error) = result {
                Self::log_shutdown_reason(&error);
                let close_action = Self::close_action_for(&error);
                Self::close_session_if_needed(session, close_action).await;
                return;
            }
        }
    }

    async fn handle_heartbeat_tick(
        session: &mut Session,
        last_heartbeat: &Instant,
    ) -> Result<(), SessionError> {
        if Instant::now().duration_since(*last_heartbeat) > CLIENT_TIMEOUT {
            return Err(SessionError::HeartbeatTimeout);
        }

        session.ping(b"").await.map_err(SessionError::Network)
    }

    async fn handle_stream_message(
        &mut self,
        session: &mut Session,
        last_heartbeat: &mut Instant,
        message: Option<Result<Message, ProtocolError>>,
    ) -> Result<(), SessionError> {
        let Some(message) = message else {
            return Err(SessionError::StreamClosed);
        };

        match message {
            Ok(message) => self.handle_message(session, last_heartbeat, message).await,
            Err(error) => Err(SessionError::Protocol(error)),
        }
    }

    async fn handle_message(
        &mut self,
        session: &mut Session,
        last_heartbeat: &mut Instant,
        message: Message,
    ) -> Result<(), SessionError> {
        match message {
            Message::Ping(payload) => {
                *last_heartbeat = Instant::now();
                session
                    .pong(&payload)
                    .await
                    .map_err(SessionError::Network)?;
                Ok(())
            }
            Message::Text(text) => {
                *last_heartbeat = Instant::now();
                self.handle_text_message(text.as_ref())
            }
            Message::Pong(_) | Message::Binary(_) | Message::Continuation(_) | Message::Nop => {
                *last_heartbeat = Instant::now();
                Ok(())
            }
            Message::Close(reason) => Err(SessionError::ClientClosed(reason)),
        }
    }

    fn handle_text_message(&mut self, text: &str) -> Result<(), SessionError> {
        let command = serde_json::from_str::<ClientCommand>(text).map_err(|error| {
            warn!(error = %error, "Rejected malformed WebSocket payload");
            SessionError::InvalidPayload
        })?;
        self.subscription = Subscription::from(command);
        debug!(subscription = ?self.subscription, "WebSocket subscription changed");
        Ok(())
    }

    async fn handle_event(
        &self,
        session: &mut Session,
        event: Result<BrandEvent, RecvError>,
    ) -> Result<(), SessionError> {
        match event {
            Ok(event) if self.subscription.accepts(&event) => {
                Self::send_json(session, &ServerFrame::from(event))
                    .await
                    .map_err(SessionError::Network)
            }
            Ok(_) => Ok(()),
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "WebSocket client lagged behind the brand event feed");
                Ok(())
            }
            Err(RecvError::Closed) => Err(SessionError::FeedClosed),
        }
    }

    async fn send_json<T: serde::Serialize>(
        session: &mut Session,
        payload: &T,
    ) -> Result<(), Closed> {
        match serde_json::to_string(payload) {
            Ok(body) => session.text(body).await,
            Err(error) => {
                warn!(error = %error, "Failed to serialize WebSocket payload");
                Ok(())
            }
        }
    }

    fn log_shutdown_reason(error: &SessionError) {
        match error {
            SessionError::HeartbeatTimeout => {
                warn!("WebSocket heartbeat timeout; closing connection");
            }
            SessionError::Protocol(error) => {
                warn!(error = %error, "WebSocket protocol error");
            }
            SessionError::Network(error) => {
                warn!(error = %error, "WebSocket send failed; closing connection");
            }
            SessionError::FeedClosed => {
                debug!("Brand event feed closed; closing connection");
            }
            SessionError::InvalidPayload
            | SessionError::ClientClosed(_)
            | SessionError::StreamClosed => {}
        }
    }

    fn close_action_for(error: &SessionError) -> CloseAction {
        match error {
            SessionError::HeartbeatTimeout => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Normal,
                description: Some("heartbeat timeout".to_owned()),
            })),
            SessionError::Protocol(_) => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Protocol,
                description: Some("protocol error".to_owned()),
            })),
            SessionError::InvalidPayload => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Policy,
                description: Some("invalid payload".to_owned()),
            })),
            SessionError::FeedClosed => CloseAction::Close(Some(CloseReason {
                code: CloseCode::Away,
                description: Some("event feed closed".to_owned()),
            })),
            SessionError::ClientClosed(reason) => CloseAction::Close(reason.clone()),
            SessionError::StreamClosed | SessionError::Network(_) => CloseAction::None,
        }
    }

    async fn close_session_if_needed(session: Session, close_action: CloseAction) {
        if let CloseAction::Close(reason) = close_action {
            if let Err(error) = session.close(reason).await {
                warn!(error = %error, "Failed to close WebSocket session");
            }
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
