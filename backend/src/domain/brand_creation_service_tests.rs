//! Tests for the brand creation service.

use std::sync::{Arc, Mutex};

use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ErrorCode;
use crate::domain::brand::{
    BrandCreationPatch, BrandStatus, CompanyName, NewBrandCreation, Score, Sector, StyleMode,
};
use crate::domain::ports::MockBrandCreationRepository;
use crate::test_support::clock::{MutableClock, fixture_timestamp};

#[derive(Default)]
struct RecordingPublisher(Mutex<Vec<BrandEvent>>);

impl RecordingPublisher {
    fn events(&self) -> Vec<BrandEvent> {
        self.0.lock().expect("publisher lock").clone()
    }
}

impl BrandEventPublisher for RecordingPublisher {
    fn publish(&self, event: BrandEvent) {
        self.0.lock().expect("publisher lock").push(event);
    }
}

#[fixture]
fn clock() -> Arc<MutableClock> {
    Arc::new(MutableClock::default())
}

fn acme_draft() -> NewBrandCreation {
    NewBrandCreation {
        company_name: CompanyName::new("Acme").expect("valid name"),
        sector: Some(Sector::new("Fintech").expect("valid sector")),
        style_mode: StyleMode::Timeless,
        custom_watermark: None,
    }
}

fn stored_record() -> BrandCreation {
    BrandCreation::create(BrandCreationId::random(), acme_draft(), fixture_timestamp())
}

fn service(
    repo: MockBrandCreationRepository,
    clock: Arc<MutableClock>,
    publisher: Arc<RecordingPublisher>,
) -> BrandCreationService<MockBrandCreationRepository> {
    BrandCreationService::new(Arc::new(repo), clock).with_events(publisher)
}

#[rstest]
#[tokio::test]
async fn create_stores_creating_record_and_publishes(clock: Arc<MutableClock>) {
    let mut repo = MockBrandCreationRepository::new();
    repo.expect_insert()
        .withf(|record| record.status() == BrandStatus::Creating)
        .times(1)
        .return_once(|_| Ok(()));
    let publisher = Arc::new(RecordingPublisher::default());

    let record = service(repo, clock.clone(), publisher.clone())
        .create_brand_creation(CreateBrandCreationRequest {
            draft: acme_draft(),
        })
        .await
        .expect("create succeeds");

    assert_eq!(record.status(), BrandStatus::Creating);
    assert!(record.results().is_empty());
    assert_eq!(record.created_at(), clock.utc());
    let events = publisher.events();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events.first().map(|event| &event.kind),
        Some(&BrandEventKind::BrandCreationCreated(record))
    );
}

#[rstest]
#[tokio::test]
async fn create_assigns_distinct_ids(clock: Arc<MutableClock>) {
    let mut repo = MockBrandCreationRepository::new();
    repo.expect_insert().times(2).returning(|_| Ok(()));
    let service = service(repo, clock, Arc::new(RecordingPublisher::default()));

    let first = service
        .create_brand_creation(CreateBrandCreationRequest {
            draft: acme_draft(),
        })
        .await
        .expect("first create");
    let second = service
        .create_brand_creation(CreateBrandCreationRequest {
            draft: acme_draft(),
        })
        .await
        .expect("second create");

    assert_ne!(first.id(), second.id());
}

#[rstest]
#[case(
    BrandCreationRepositoryError::unavailable("lock poisoned"),
    ErrorCode::ServiceUnavailable
)]
#[case(BrandCreationRepositoryError::duplicate("abc"), ErrorCode::InternalError)]
#[tokio::test]
async fn create_maps_repository_errors(
    clock: Arc<MutableClock>,
    #[case] failure: BrandCreationRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockBrandCreationRepository::new();
    repo.expect_insert().return_once(move |_| Err(failure));
    let publisher = Arc::new(RecordingPublisher::default());

    let error = service(repo, clock, publisher.clone())
        .create_brand_creation(CreateBrandCreationRequest {
            draft: acme_draft(),
        })
        .await
        .expect_err("repository failure surfaces");

    assert_eq!(error.code(), expected);
    assert!(publisher.events().is_empty());
}

#[rstest]
#[tokio::test]
async fn update_returns_merged_record_and_publishes(clock: Arc<MutableClock>) {
    let mut stored = stored_record();
    let id = *stored.id();
    clock.advance_seconds(30);
    let expected_now = clock.utc();
    let mut repo = MockBrandCreationRepository::new();
    repo.expect_update()
        .withf(move |candidate, patch, now| {
            *candidate == id && patch.status == Some(BrandStatus::Completed) && *now == expected_now
        })
        .times(1)
        .return_once(move |_, patch, now| {
            stored.apply(patch, now);
            Ok(Some(stored))
        });
    let publisher = Arc::new(RecordingPublisher::default());

    let merged = service(repo, clock, publisher.clone())
        .update_brand_creation(UpdateBrandCreationRequest {
            id,
            patch: BrandCreationPatch {
                status: Some(BrandStatus::Completed),
                hypnotic_power_score: Some(Some(
                    Score::new(0.87, "hypnoticPowerScore").expect("valid score"),
                )),
                ..BrandCreationPatch::default()
            },
        })
        .await
        .expect("update succeeds")
        .expect("record exists");

    assert_eq!(merged.status(), BrandStatus::Completed);
    assert_eq!(merged.updated_at(), expected_now);
    assert!(matches!(
        publisher.events().first().map(|event| &event.kind),
        Some(BrandEventKind::BrandCreationUpdated(_))
    ));
}

#[rstest]
#[tokio::test]
async fn update_of_unknown_id_is_absent_not_error(clock: Arc<MutableClock>) {
    let mut repo = MockBrandCreationRepository::new();
    repo.expect_update().return_once(|_, _, _| Ok(None));
    let publisher = Arc::new(RecordingPublisher::default());

    let outcome = service(repo, clock, publisher.clone())
        .update_brand_creation(UpdateBrandCreationRequest {
            id: BrandCreationId::random(),
            patch: BrandCreationPatch::default(),
        })
        .await
        .expect("unknown id is not an error");

    assert!(outcome.is_none());
    assert!(publisher.events().is_empty());
}

#[rstest]
#[tokio::test]
async fn get_passes_through_absence(clock: Arc<MutableClock>) {
    let mut repo = MockBrandCreationRepository::new();
    repo.expect_find_by_id().return_once(|_| Ok(None));

    let found = service(repo, clock, Arc::new(RecordingPublisher::default()))
        .get_brand_creation(&BrandCreationId::random())
        .await
        .expect("lookup succeeds");

    assert!(found.is_none());
}

#[rstest]
#[tokio::test]
async fn list_maps_unavailable_store(clock: Arc<MutableClock>) {
    let mut repo = MockBrandCreationRepository::new();
    repo.expect_list()
        .return_once(|| Err(BrandCreationRepositoryError::unavailable("poisoned")));

    let error = service(repo, clock, Arc::new(RecordingPublisher::default()))
        .list_brand_creations()
        .await
        .expect_err("unavailable store");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn events_carry_request_trace(clock: Arc<MutableClock>) {
    let mut repo = MockBrandCreationRepository::new();
    repo.expect_insert().return_once(|_| Ok(()));
    let publisher = Arc::new(RecordingPublisher::default());
    let service = service(repo, clock, publisher.clone());
    let trace_id = crate::domain::TraceId::generate();

    crate::domain::TraceId::scope(trace_id, async {
        service
            .create_brand_creation(CreateBrandCreationRequest {
                draft: acme_draft(),
            })
            .await
            .expect("create succeeds");
    })
    .await;

    assert_eq!(
        publisher.events().first().and_then(|event| event.trace_id),
        Some(trace_id)
    );
}
