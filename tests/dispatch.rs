use workout_stats::error::{DispatchError, RecordError};
use workout_stats::pipeline::dispatch::{read, read_package};
use workout_stats::pipeline::training::Workout;
use workout_stats::types::workout::{ActivityKind, Package};

#[test]
fn known_codes_build_matching_workouts() {
    let run = read_package("RUN", &[15000.0, 1.0, 75.0]).expect("run");
    let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("walk");
    let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("swim");

    assert!(matches!(run, Workout::Running(_)));
    assert!(matches!(walk, Workout::SportsWalking(_)));
    assert!(matches!(swim, Workout::Swimming(ref s) if s.pool_count() == 40));
    assert_eq!(swim.kind(), ActivityKind::Swimming);
}

#[test]
fn every_kind_round_trips_through_its_code() {
    for kind in ActivityKind::ALL {
        assert_eq!(ActivityKind::from_code(kind.code()), Some(kind));

        let readings = vec![100.0; kind.arity()];
        let workout = read_package(kind.code(), &readings).expect("known code");
        assert_eq!(workout.kind(), kind);
    }
}

#[test]
fn unknown_code_is_rejected() {
    let err = read_package("XYZ", &[1.0, 2.0, 3.0]).expect_err("unknown code");
    assert_eq!(err, DispatchError::UnknownActivityType("XYZ".to_string()));
    assert_eq!(err.to_string(), "Unknown activity type: XYZ");

    // Codes are case-sensitive.
    assert!(matches!(
        read_package("run", &[1.0, 2.0, 3.0]),
        Err(DispatchError::UnknownActivityType(_))
    ));
}

#[test]
fn wrong_reading_count_is_an_arity_mismatch() {
    let err = read_package("WLK", &[9000.0, 1.0, 75.0]).expect_err("missing height");
    assert_eq!(
        err,
        DispatchError::ArityMismatch {
            kind: ActivityKind::SportsWalking,
            expected: 4,
            got: 3,
        }
    );

    assert!(matches!(
        read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]),
        Err(DispatchError::ArityMismatch { expected: 3, got: 4, .. })
    ));
}

#[test]
fn zero_duration_and_height_are_rejected() {
    assert_eq!(
        read_package("RUN", &[15000.0, 0.0, 75.0]),
        Err(DispatchError::Record(RecordError::ZeroDivisor("duration_hours")))
    );
    assert_eq!(
        read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]),
        Err(DispatchError::Record(RecordError::ZeroDivisor("height_cm")))
    );
}

#[test]
fn counts_must_be_whole_and_non_negative() {
    assert!(matches!(
        read_package("RUN", &[-1.0, 1.0, 75.0]),
        Err(DispatchError::Record(RecordError::InvalidCount { field: "action", .. }))
    ));
    assert!(matches!(
        read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]),
        Err(DispatchError::Record(RecordError::InvalidCount { field: "pool_count", .. }))
    ));
    assert!(matches!(
        read_package("RUN", &[f64::NAN, 1.0, 75.0]),
        Err(DispatchError::Record(RecordError::InvalidCount { .. }))
    ));
}

#[test]
fn read_forwards_package_fields() {
    let package = Package::new("RUN", &[15000.0, 1.0, 75.0]);
    let workout = read(&package).expect("run");
    assert_eq!(workout, read_package("RUN", &[15000.0, 1.0, 75.0]).expect("run"));
}
