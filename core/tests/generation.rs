//! Dataset generation tests: shape, identity stability, ranges.

use feedback_core::generator::{self, GeneratorParams};
use feedback_core::rng::DatasetRng;
use feedback_core::table::{FeedbackTable, COLUMNS};
use feedback_core::vocab::{self, Vocabulary};

#[test]
fn row_count_is_participants_times_days() {
    let mut rng = DatasetRng::from_seed(42);
    let table = generator::generate(
        GeneratorParams {
            num_participants: 300,
            num_days: 5,
        },
        &mut rng,
    )
    .unwrap();
    assert_eq!(table.len(), 1500, "Expected 300 x 5 rows, got {}", table.len());
}

#[test]
fn two_participants_one_day_yields_two_rows() {
    let mut rng = DatasetRng::from_seed(1);
    let table = generator::generate(
        GeneratorParams {
            num_participants: 2,
            num_days: 1,
        },
        &mut rng,
    )
    .unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn schema_has_eleven_columns() {
    assert_eq!(COLUMNS.len(), 11);
    assert_eq!(FeedbackTable::column_count(), 11);
    assert_eq!(
        COLUMNS,
        [
            "Participant_ID",
            "Name",
            "Age",
            "Gender",
            "Day",
            "Sport Event",
            "Score",
            "College",
            "State",
            "Satisfaction_Rating",
            "Feedback",
        ]
    );
}

#[test]
fn identity_fields_stable_within_each_participant() {
    let num_days = 4u32;
    let mut rng = DatasetRng::from_seed(99);
    let table = generator::generate(
        GeneratorParams {
            num_participants: 50,
            num_days,
        },
        &mut rng,
    )
    .unwrap();

    // Rows are participant-major, so each participant's rows form one
    // contiguous chunk of num_days.
    for chunk in table.rows().chunks(num_days as usize) {
        let first = &chunk[0];
        for row in chunk {
            assert_eq!(row.participant_id, first.participant_id);
            assert_eq!(row.name, first.name);
            assert_eq!(row.age, first.age);
            assert_eq!(row.gender, first.gender);
        }
    }
}

#[test]
fn days_ascend_within_each_participant() {
    let num_days = 3u32;
    let mut rng = DatasetRng::from_seed(5);
    let table = generator::generate(
        GeneratorParams {
            num_participants: 20,
            num_days,
        },
        &mut rng,
    )
    .unwrap();

    for chunk in table.rows().chunks(num_days as usize) {
        for (i, row) in chunk.iter().enumerate() {
            assert_eq!(row.day, i as u32 + 1);
        }
    }
}

#[test]
fn all_fields_within_ranges_and_vocabularies() {
    let num_days = 5u32;
    let mut rng = DatasetRng::from_seed(1234);
    let table = generator::generate(
        GeneratorParams {
            num_participants: 100,
            num_days,
        },
        &mut rng,
    )
    .unwrap();

    for row in table.rows() {
        assert!(
            (vocab::AGE_MIN..=vocab::AGE_MAX).contains(&row.age),
            "age {} out of range",
            row.age
        );
        assert!((1..=num_days).contains(&row.day), "day {} out of range", row.day);
        assert!(
            (vocab::SCORE_MIN..=vocab::SCORE_MAX).contains(&row.score),
            "score {} out of range",
            row.score
        );
        assert!(
            (vocab::SATISFACTION_MIN..=vocab::SATISFACTION_MAX)
                .contains(&row.satisfaction_rating),
            "satisfaction {} out of range",
            row.satisfaction_rating
        );
        assert!(
            Vocabulary::genders().contains(&row.gender.as_str()),
            "unknown gender {}",
            row.gender
        );
        assert!(
            Vocabulary::is_sport_event(&row.sport_event),
            "unknown sport {}",
            row.sport_event
        );
        assert!(
            Vocabulary::colleges()
                .contains(&(row.college.as_str(), row.state.as_str())),
            "({}, {}) is not one of the fixed college/state pairs",
            row.college,
            row.state
        );
        assert!(
            Vocabulary::feedback_samples().contains(&row.feedback.as_str()),
            "unknown feedback text {}",
            row.feedback
        );
        assert!(row.participant_id.starts_with('P'));
        assert!(row.name.starts_with("Participant_"));
    }
}

#[test]
fn zero_sized_parameters_are_rejected() {
    let mut rng = DatasetRng::from_seed(0);

    let err = generator::generate(
        GeneratorParams {
            num_participants: 0,
            num_days: 5,
        },
        &mut rng,
    )
    .unwrap_err();
    assert!(
        matches!(err, feedback_core::error::FeedbackError::InvalidArgument(_)),
        "expected InvalidArgument, got {err}"
    );

    let err = generator::generate(
        GeneratorParams {
            num_participants: 5,
            num_days: 0,
        },
        &mut rng,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        feedback_core::error::FeedbackError::InvalidArgument(_)
    ));
}

#[test]
fn same_seed_produces_identical_tables() {
    let params = GeneratorParams {
        num_participants: 30,
        num_days: 3,
    };
    let table_a = generator::generate(params, &mut DatasetRng::from_seed(777)).unwrap();
    let table_b = generator::generate(params, &mut DatasetRng::from_seed(777)).unwrap();
    assert_eq!(table_a, table_b, "Seeded generation diverged");
}
