//! Behavioural tests for the brand creation lifecycle and its event feed.
#[path = "support/brand_harness.rs"]
mod harness;

use std::time::Duration;

use actix_web::http::Method;
use awc::ws::Frame;
use futures_util::StreamExt;
use harness::{SharedWorld, WorldFixture, connect_feed, perform_json_request, with_world_async};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use serde_json::{Value, json};

const HYPNOTIC_POWER_SCORE: f64 = 0.87;

#[fixture]
fn world() -> WorldFixture {
    harness::world()
}

fn last_body(world: &SharedWorld) -> Value {
    world.borrow().last_body.clone().expect("response body")
}

fn brand_creation_id(world: &SharedWorld) -> String {
    world
        .borrow()
        .brand_creation_id
        .clone()
        .expect("brand creation id")
}

fn create_acme(world: &SharedWorld) {
    perform_json_request(
        world,
        Method::POST,
        "/api/v1/brand-creations",
        Some(json!({"companyName": "Acme", "sector": "Fintech"})),
    );
    let id = last_body(world)["id"]
        .as_str()
        .map(str::to_owned)
        .expect("created id");
    world.borrow_mut().brand_creation_id = Some(id);
}

#[given("a running brand studio")]
fn a_running_brand_studio(world: &WorldFixture) {
    let _ = world;
}

#[given("an existing brand creation")]
fn an_existing_brand_creation(world: &WorldFixture) {
    create_acme(&world.world());
}

#[given("a client watching the brand event feed")]
fn a_client_watching_the_brand_event_feed(world: &WorldFixture) {
    connect_feed(&world.world());
}

#[when("the client creates a brand creation for Acme in Fintech")]
fn the_client_creates_a_brand_creation(world: &WorldFixture) {
    create_acme(&world.world());
}

#[when("the client completes the brand creation with a hypnotic power score")]
fn the_client_completes_the_brand_creation(world: &WorldFixture) {
    let shared = world.world();
    let id = brand_creation_id(&shared);
    perform_json_request(
        &shared,
        Method::PATCH,
        &format!("/api/v1/brand-creations/{id}"),
        Some(json!({"status": "completed", "hypnoticPowerScore": HYPNOTIC_POWER_SCORE})),
    );
}

#[when("the client fetches the brand creation")]
fn the_client_fetches_the_brand_creation(world: &WorldFixture) {
    let shared = world.world();
    let id = brand_creation_id(&shared);
    perform_json_request(
        &shared,
        Method::GET,
        &format!("/api/v1/brand-creations/{id}"),
        None,
    );
}

#[when("the client submits feedback rated {rating}")]
fn the_client_submits_feedback(world: &WorldFixture, rating: i64) {
    let shared = world.world();
    let id = brand_creation_id(&shared);
    perform_json_request(
        &shared,
        Method::POST,
        "/api/v1/feedback",
        Some(json!({"brandCreationId": id, "rating": rating, "category": "overall"})),
    );
}

#[when("the client lists feedback for the brand creation")]
fn the_client_lists_feedback(world: &WorldFixture) {
    let shared = world.world();
    let id = brand_creation_id(&shared);
    perform_json_request(
        &shared,
        Method::GET,
        &format!("/api/v1/brand-creations/{id}/feedback"),
        None,
    );
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &WorldFixture, status: u16) {
    assert_eq!(world.world().borrow().last_status, Some(status));
}

#[then("the brand creation is still creating in timeless style")]
fn the_brand_creation_is_still_creating(world: &WorldFixture) {
    let body = last_body(&world.world());
    assert_eq!(body["status"], "creating");
    assert!(body["hypnoticPowerScore"].is_null());
    assert_eq!(body["styleMode"], "timeless");
    assert_eq!(body["sector"], "Fintech");
}

#[then("the brand creation is completed")]
fn the_brand_creation_is_completed(world: &WorldFixture) {
    let body = last_body(&world.world());
    assert_eq!(body["status"], "completed");
    assert_eq!(body["hypnoticPowerScore"], json!(HYPNOTIC_POWER_SCORE));
}

#[then("the fetched brand creation keeps its name and score")]
fn the_fetched_brand_creation_keeps_its_fields(world: &WorldFixture) {
    let body = last_body(&world.world());
    assert_eq!(body["companyName"], "Acme");
    assert_eq!(body["sector"], "Fintech");
    assert_eq!(body["status"], "completed");
    assert_eq!(body["hypnoticPowerScore"], json!(HYPNOTIC_POWER_SCORE));
}

#[then("the error reports {field} as {code}")]
fn the_error_reports(world: &WorldFixture, field: String, code: String) {
    let body = last_body(&world.world());
    assert_eq!(body["code"], "invalid_request");
    let errors = body
        .pointer("/details/errors")
        .and_then(Value::as_array)
        .expect("field errors");
    assert!(
        errors
            .iter()
            .any(|error| error["field"] == field.as_str() && error["code"] == code.as_str()),
        "expected {field}/{code} in {errors:?}"
    );
}

#[then("no feedback is stored")]
fn no_feedback_is_stored(world: &WorldFixture) {
    assert_eq!(last_body(&world.world()), json!([]));
}

#[then("the feed announces the created brand creation")]
fn the_feed_announces_the_created_brand_creation(world: &WorldFixture) {
    let shared = world.world();
    let mut socket = shared.borrow_mut().socket.take().expect("open feed socket");
    let (socket, value) = with_world_async(&shared, |_| async move {
        let value = tokio::time::timeout(Duration::from_secs(2), async {
            loop {
                match socket.next().await.expect("frame").expect("valid frame") {
                    Frame::Text(bytes) => {
                        break serde_json::from_slice::<Value>(&bytes).expect("json frame");
                    }
                    Frame::Ping(_) | Frame::Pong(_) => {}
                    other => panic!("unexpected frame: {other:?}"),
                }
            }
        })
        .await
        .expect("event within timeout");
        (socket, value)
    });
    shared.borrow_mut().socket = Some(socket);

    assert_eq!(value["type"], "brandCreationCreated");
    assert_eq!(value["brandCreation"]["companyName"], "Acme");
    assert_eq!(
        value["brandCreation"]["id"].as_str(),
        Some(brand_creation_id(&shared).as_str())
    );
}

#[scenario(path = "tests/features/brand_lifecycle.feature", index = 0)]
fn refining_a_brand_creation(world: WorldFixture) {
    let _ = world;
}

#[scenario(path = "tests/features/brand_lifecycle.feature", index = 1)]
fn rejecting_out_of_range_feedback(world: WorldFixture) {
    let _ = world;
}

#[scenario(path = "tests/features/brand_lifecycle.feature", index = 2)]
fn watching_the_brand_event_feed(world: WorldFixture) {
    let _ = world;
}
