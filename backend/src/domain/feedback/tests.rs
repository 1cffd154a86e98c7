//! Tests for feedback value objects.

use chrono::Utc;
use rstest::rstest;
use serde_json::json;

use super::*;

fn draft() -> NewFeedback {
    NewFeedback {
        brand_creation_id: Some(BrandCreationId::random()),
        rating: Rating::new(4).expect("valid rating"),
        comment: None,
        category: FeedbackCategory::Design,
        is_anonymous: None,
        contribute_to_learning: None,
    }
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(5)]
fn rating_accepts_one_to_five(#[case] value: i64) {
    let rating = Rating::new(value).expect("valid rating");
    assert_eq!(i64::from(rating.value()), value);
}

#[rstest]
#[case(0)]
#[case(6)]
#[case(-1)]
#[case(256)]
fn rating_rejects_out_of_range(#[case] value: i64) {
    let err = Rating::new(value).expect_err("invalid rating");
    assert_eq!(err, FeedbackValidationError::RatingOutOfRange { value });
    assert_eq!(err.field(), "rating");
    assert_eq!(err.code(), "out_of_range");
}

#[rstest]
#[case("design", FeedbackCategory::Design)]
#[case("functionality", FeedbackCategory::Functionality)]
#[case("creativity", FeedbackCategory::Creativity)]
#[case("overall", FeedbackCategory::Overall)]
fn category_parses(#[case] raw: &str, #[case] expected: FeedbackCategory) {
    assert_eq!(raw.parse::<FeedbackCategory>(), Ok(expected));
}

#[rstest]
fn category_rejects_unknown() {
    let err = "pricing"
        .parse::<FeedbackCategory>()
        .expect_err("unknown category");
    assert_eq!(err.field(), "category");
}

#[rstest]
#[case("")]
#[case("   ")]
fn blank_comment_is_none(#[case] raw: &str) {
    assert_eq!(FeedbackComment::parse(raw), Ok(None));
}

#[rstest]
fn overlong_comment_is_rejected() {
    let raw = "x".repeat(COMMENT_MAX + 1);
    assert_eq!(
        FeedbackComment::parse(&raw),
        Err(FeedbackValidationError::CommentTooLong)
    );
}

#[rstest]
fn record_applies_flag_defaults() {
    let feedback = Feedback::record(FeedbackId::random(), draft(), Utc::now());
    assert!(!feedback.is_anonymous());
    assert!(feedback.contribute_to_learning());
    assert!(feedback.sentiment_analysis().is_none());
    assert!(feedback.impact_analysis().is_none());
}

#[rstest]
fn record_keeps_explicit_flags() {
    let feedback = Feedback::record(
        FeedbackId::random(),
        NewFeedback {
            is_anonymous: Some(true),
            contribute_to_learning: Some(false),
            ..draft()
        },
        Utc::now(),
    );
    assert!(feedback.is_anonymous());
    assert!(!feedback.contribute_to_learning());
}

#[rstest]
fn feedback_serialises_camel_case_with_nulls() {
    let feedback = Feedback::record(
        FeedbackId::random(),
        NewFeedback {
            brand_creation_id: None,
            ..draft()
        },
        Utc::now(),
    );
    let value = serde_json::to_value(&feedback).expect("feedback serialises");

    assert_eq!(value["rating"], json!(4));
    assert_eq!(value["category"], json!("design"));
    assert_eq!(value["brandCreationId"], json!(null));
    assert_eq!(value["isAnonymous"], json!(false));
    assert_eq!(value["contributeToLearning"], json!(true));
    assert_eq!(value["sentimentAnalysis"], json!(null));
    assert_eq!(value["impactAnalysis"], json!(null));
}
