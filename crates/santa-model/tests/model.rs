//! Tests for santa-model types.

use santa_model::{Participant, ParticipantTable, SantaError, SantaPair};

#[test]
fn duplicate_names_are_rejected() {
    let err = ParticipantTable::from_names(["Dasher", "Dancer", "Dasher"]).unwrap_err();
    assert_eq!(
        err,
        SantaError::DuplicateParticipant {
            name: "Dasher".to_string()
        }
    );
}

#[test]
fn names_are_trimmed_before_comparison() {
    let err = ParticipantTable::from_names(["Vixen", " Vixen "]).unwrap_err();
    assert!(matches!(err, SantaError::DuplicateParticipant { .. }));
}

#[test]
fn empty_names_report_their_row() {
    let err = ParticipantTable::from_names(["Comet", "  "]).unwrap_err();
    assert_eq!(err, SantaError::EmptyName { row: 1 });
}

#[test]
fn table_keeps_insertion_order() {
    let table = ParticipantTable::new(vec![
        Participant::with_criteria("Prancer", ["B"]),
        Participant::with_criteria("Vixen", ["A"]),
        Participant::with_criteria("Comet", ["B"]),
    ])
    .expect("valid table");
    let names: Vec<&str> = table.names().collect();
    assert_eq!(names, vec!["Prancer", "Vixen", "Comet"]);
    assert_eq!(table.position("Comet"), Some(2));
    assert_eq!(table.criterion_count(), 1);
}

#[test]
fn invalid_criteria_message_names_the_value() {
    let err = SantaError::InvalidCriteria { value: -1, max: 5 };
    assert!(err.to_string().contains("-1"));
    let err = SantaError::InvalidCriteria { value: 6, max: 5 };
    assert!(err.to_string().contains("got 6"));
}

#[test]
fn pair_serializes_as_giver_receiver_object() {
    let pair = SantaPair::new("Blitzen", "Cupid");
    let json = serde_json::to_string(&pair).expect("serialize pair");
    assert_eq!(json, r#"{"giver":"Blitzen","receiver":"Cupid"}"#);
    let round: SantaPair = serde_json::from_str(&json).expect("deserialize pair");
    assert_eq!(round, pair);
    assert_eq!(pair.to_string(), "Blitzen -> Cupid");
}
