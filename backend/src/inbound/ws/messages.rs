//! Wire-level message definitions for the WebSocket adapter.
//!
//! Domain events are transformed into these payloads before being serialized
//! to JSON and sent to connected clients. Every frame carries a `type` tag.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::brand::BrandCreation;
use crate::domain::brand_events::{BrandEvent, BrandEventKind};
use crate::domain::feedback::Feedback;

/// Subscription commands sent by the client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ClientCommand {
    /// Narrow the feed to events about one brand creation.
    Watch { brand_creation_id: Uuid },
    /// Receive every event again.
    WatchAll,
}

/// Outbound frame for a single brand event.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ServerFrame {
    BrandCreationCreated {
        brand_creation: BrandCreation,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_id: Option<Uuid>,
    },
    BrandCreationUpdated {
        brand_creation: BrandCreation,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_id: Option<Uuid>,
    },
    FeedbackReceived {
        feedback: Feedback,
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_id: Option<Uuid>,
    },
}

impl From<BrandEvent> for ServerFrame {
    fn from(value: BrandEvent) -> Self {
        let trace_id = value.trace_id.map(|id| *id.as_uuid());
        match value.kind {
            BrandEventKind::BrandCreationCreated(brand_creation) => Self::BrandCreationCreated {
                brand_creation,
                trace_id,
            },
            BrandEventKind::BrandCreationUpdated(brand_creation) => Self::BrandCreationUpdated {
                brand_creation,
                trace_id,
            },
            BrandEventKind::FeedbackReceived(feedback) => Self::FeedbackReceived {
                feedback,
                trace_id,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TraceId;
    use crate::domain::brand::{BrandCreationId, CompanyName, NewBrandCreation};
    use crate::domain::feedback::{FeedbackCategory, FeedbackComment, FeedbackId, NewFeedback, Rating};
    use crate::test_support::clock::fixture_timestamp;
    use insta::assert_json_snapshot;
    use rstest::rstest;

    fn feedback() -> Feedback {
        Feedback::record(
            FeedbackId::from_uuid(Uuid::nil()),
            NewFeedback {
                brand_creation_id: Some(BrandCreationId::from_uuid(Uuid::nil())),
                rating: Rating::new(4).expect("static rating must be valid"),
                comment: FeedbackComment::parse("Sharp palette").expect("static comment"),
                category: FeedbackCategory::Design,
                is_anonymous: None,
                contribute_to_learning: None,
            },
            fixture_timestamp(),
        )
    }

    #[rstest]
    fn serialises_feedback_received_frame() {
        let frame = ServerFrame::from(BrandEvent {
            trace_id: Some(TraceId::from_uuid(Uuid::nil())),
            kind: BrandEventKind::FeedbackReceived(feedback()),
        });
        assert_json_snapshot!(frame, @r#"
        {
          "type": "feedbackReceived",
          "feedback": {
            "id": "00000000-0000-0000-0000-000000000000",
            "brandCreationId": "00000000-0000-0000-0000-000000000000",
            "rating": 4,
            "comment": "Sharp palette",
            "category": "design",
            "isAnonymous": false,
            "contributeToLearning": true,
            "sentimentAnalysis": null,
            "impactAnalysis": null,
            "createdAt": "2026-02-24T10:30:00Z"
          },
          "traceId": "00000000-0000-0000-0000-000000000000"
        }
        "#);
    }

    #[rstest]
    fn omits_trace_id_when_absent() {
        let record = BrandCreation::create(
            BrandCreationId::from_uuid(Uuid::nil()),
            NewBrandCreation::named(CompanyName::new("Acme").expect("static name")),
            fixture_timestamp(),
        );
        let frame = ServerFrame::from(BrandEvent {
            trace_id: None,
            kind: BrandEventKind::BrandCreationCreated(record),
        });
        let value = serde_json::to_value(&frame).expect("frame serialises");
        assert_eq!(value["type"], "brandCreationCreated");
        assert_eq!(value["brandCreation"]["companyName"], "Acme");
        assert!(value.get("traceId").is_none());
    }

    #[rstest]
    #[case(
        r#"{"type":"watch","brandCreationId":"00000000-0000-0000-0000-000000000000"}"#,
        ClientCommand::Watch { brand_creation_id: Uuid::nil() }
    )]
    #[case(r#"{"type":"watchAll"}"#, ClientCommand::WatchAll)]
    fn parses_client_commands(#[case] raw: &str, #[case] expected: ClientCommand) {
        let command: ClientCommand = serde_json::from_str(raw).expect("command parses");
        assert_eq!(command, expected);
    }

    #[rstest]
    #[case(r#"{"type":"watch"}"#)]
    #[case(r#"{"type":"watch","brandCreationId":"nope"}"#)]
    #[case(r#"{"type":"unsubscribe"}"#)]
    fn rejects_malformed_commands(#[case] raw: &str) {
        assert!(serde_json::from_str::<ClientCommand>(raw).is_err());
    }
}
