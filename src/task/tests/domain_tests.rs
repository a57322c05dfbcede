//! Validation tests for task domain values.

use crate::task::domain::{
    Expertise, PageRequest, PatientId, TaskDescription, TaskDomainError, TaskDraft, TaskId,
    TaskTitle, TaskUpdate,
};
use rstest::rstest;

#[test]
fn title_rejects_empty_value() {
    assert_eq!(TaskTitle::new(""), Err(TaskDomainError::EmptyTitle));
}

#[test]
fn title_rejects_value_over_limit() {
    let raw = "x".repeat(101);
    assert_eq!(
        TaskTitle::new(raw),
        Err(TaskDomainError::TitleTooLong {
            max: 100,
            actual: 101
        })
    );
}

#[test]
fn title_accepts_value_at_limit() {
    let raw = "x".repeat(100);
    let title = TaskTitle::new(raw.clone()).expect("title at limit is valid");
    assert_eq!(title.as_str(), raw);
}

#[test]
fn title_length_counts_characters_not_bytes() {
    // 100 two-byte characters; valid despite 200 bytes.
    let raw = "é".repeat(100);
    assert!(TaskTitle::new(raw).is_ok());
}

#[test]
fn description_rejects_value_over_limit() {
    let raw = "d".repeat(501);
    assert_eq!(
        TaskDescription::new(raw),
        Err(TaskDomainError::DescriptionTooLong {
            max: 500,
            actual: 501
        })
    );
}

#[test]
fn description_defaults_to_absent() {
    assert!(TaskDescription::default().is_empty());
}

#[test]
fn expertise_rejects_empty_value() {
    assert_eq!(Expertise::new(""), Err(TaskDomainError::EmptyExpertise));
}

#[rstest]
#[case(0)]
#[case(-5)]
fn patient_id_rejects_non_positive_values(#[case] value: i32) {
    assert_eq!(
        PatientId::new(value),
        Err(TaskDomainError::InvalidPatientId(value))
    );
}

#[test]
fn patient_id_accepts_positive_value() {
    let patient = PatientId::new(17).expect("positive patient id is valid");
    assert_eq!(patient.value(), 17);
}

#[rstest]
#[case(0, 0, TaskDomainError::NonPositiveLimit(0))]
#[case(-1, 0, TaskDomainError::NonPositiveLimit(-1))]
#[case(51, 0, TaskDomainError::LimitTooLarge { max: 50, actual: 51 })]
#[case(10, -1, TaskDomainError::NegativeOffset(-1))]
fn page_request_rejects_out_of_bounds_windows(
    #[case] limit: i32,
    #[case] offset: i32,
    #[case] expected: TaskDomainError,
) {
    assert_eq!(PageRequest::new(limit, offset), Err(expected));
}

#[rstest]
#[case(1, 0)]
#[case(50, 0)]
#[case(10, 1000)]
fn page_request_accepts_valid_windows(#[case] limit: i32, #[case] offset: i32) {
    let page = PageRequest::new(limit, offset).expect("window is valid");
    assert_eq!(page.limit(), limit);
    assert_eq!(page.offset(), offset);
}

#[test]
fn draft_validates_all_fields() {
    let draft = TaskDraft::new("Draw blood", "fasting sample", "phlebotomy", 12)
        .expect("valid draft");
    assert_eq!(draft.title().as_str(), "Draw blood");
    assert_eq!(draft.patient_id().value(), 12);
}

#[test]
fn draft_rejects_invalid_expertise() {
    let result = TaskDraft::new("Draw blood", "", "e".repeat(101), 12);
    assert!(matches!(
        result,
        Err(TaskDomainError::ExpertiseTooLong { .. })
    ));
}

#[test]
fn update_rejects_unset_id() {
    let result = TaskUpdate::new(TaskId::from_i32(0), false, "Title", "", "nursing", 3);
    assert_eq!(result, Err(TaskDomainError::MissingTaskId));
}

#[test]
fn update_carries_all_mutable_fields() {
    let update = TaskUpdate::new(
        TaskId::from_i32(4),
        true,
        "Re-dress wound",
        "left forearm",
        "wound care",
        9,
    )
    .expect("valid update");
    assert_eq!(update.id(), TaskId::from_i32(4));
    assert!(update.complete());
    assert_eq!(update.description().as_str(), "left forearm");
}
