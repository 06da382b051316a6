use fittrack_rs::error::CalcError;
use fittrack_rs::pipeline::batch::{summarize, summarize_all};
use fittrack_rs::pipeline::package::read_package;
use fittrack_rs::pipeline::samples::sample_packages;
use fittrack_rs::pipeline::training::Training;
use fittrack_rs::types::workout::WorkoutPackage;

#[test]
fn resolves_each_activity_code() {
    let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).expect("swimming");
    assert_eq!(swim.training_type(), "Swimming");

    let run = read_package("RUN", &[15000.0, 1.0, 75.0]).expect("running");
    assert_eq!(run.training_type(), "Running");

    let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).expect("walking");
    assert_eq!(walk.training_type(), "SportsWalking");
}

#[test]
fn unknown_code_is_rejected() {
    let err = read_package("BIK", &[1.0, 1.0, 1.0]).err().expect("error");
    assert_eq!(err, CalcError::UnknownActivityCode("BIK".to_string()));

    let err = read_package("run", &[15000.0, 1.0, 75.0]).err().expect("error");
    assert_eq!(err, CalcError::UnknownActivityCode("run".to_string()));
}

#[test]
fn wrong_value_count_is_rejected() {
    let err = read_package("RUN", &[15000.0, 1.0, 75.0, 180.0]).err().expect("error");
    assert_eq!(
        err,
        CalcError::ArityMismatch {
            code: "RUN",
            expected: 3,
            got: 4
        }
    );

    let err = read_package("WLK", &[]).err().expect("error");
    assert_eq!(
        err,
        CalcError::ArityMismatch {
            code: "WLK",
            expected: 4,
            got: 0
        }
    );

    let err = read_package("SWM", &[720.0, 1.0, 80.0]).err().expect("error");
    assert_eq!(
        err,
        CalcError::ArityMismatch {
            code: "SWM",
            expected: 5,
            got: 3
        }
    );
}

#[test]
fn count_fields_must_be_whole_numbers() {
    let err = read_package("RUN", &[100.5, 1.0, 75.0]).err().expect("error");
    assert_eq!(
        err,
        CalcError::InvalidValue {
            field: "action",
            value: 100.5
        }
    );

    let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -1.0]).err().expect("error");
    assert_eq!(
        err,
        CalcError::InvalidValue {
            field: "count_pool",
            value: -1.0
        }
    );
}

#[test]
fn counts_beyond_u64_are_rejected() {
    let two_pow_64 = 18_446_744_073_709_551_616.0;
    let err = read_package("RUN", &[two_pow_64, 1.0, 75.0]).err().expect("error");
    assert_eq!(
        err,
        CalcError::InvalidValue {
            field: "action",
            value: two_pow_64
        }
    );

    let largest_exact = 9_007_199_254_740_992.0;
    assert!(read_package("RUN", &[largest_exact, 1.0, 75.0]).is_ok());
}

#[test]
fn tiny_duration_fails_instead_of_overflowing() {
    let package = WorkoutPackage {
        workout_type: "RUN".to_string(),
        data: vec![15000.0, 1e-310, 0.0],
    };
    let err = summarize(&package).err().expect("error");
    assert!(matches!(err, CalcError::NonFinite { what: "mean_speed", .. }));
    assert_eq!(err.to_string(), "Non-finite result for mean_speed: inf");
}

#[test]
fn summary_message_matches_template() {
    let package = WorkoutPackage {
        workout_type: "RUN".to_string(),
        data: vec![15000.0, 1.0, 75.0],
    };
    let summary = summarize(&package).expect("summary");
    assert_eq!(
        summary.message(),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. cкорость: 9.750 км/ч; Потрачено ккал: 699.750. "
    );
}

#[test]
fn samples_render_in_order() {
    let messages: Vec<String> = summarize_all(&sample_packages())
        .into_iter()
        .map(|outcome| outcome.expect("sample summary").message())
        .collect();

    assert_eq!(
        messages,
        vec![
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. cкорость: 1.000 км/ч; Потрачено ккал: 336.000. ",
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. cкорость: 9.750 км/ч; Потрачено ккал: 699.750. ",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. cкорость: 5.850 км/ч; Потрачено ккал: 157.500. ",
        ]
    );
}

#[test]
fn batch_keeps_failures_per_record() {
    let packages = vec![
        WorkoutPackage {
            workout_type: "RUN".to_string(),
            data: vec![15000.0, 0.0, 75.0],
        },
        WorkoutPackage {
            workout_type: "WLK".to_string(),
            data: vec![9000.0, 1.0, 75.0, 180.0],
        },
    ];
    let outcomes = summarize_all(&packages);
    assert_eq!(
        outcomes[0],
        Err(CalcError::DivisionByZero { what: "duration" })
    );
    assert_eq!(
        outcomes[1].as_ref().map(|s| s.training_type.as_str()),
        Ok("SportsWalking")
    );
}
