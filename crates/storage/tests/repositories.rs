use chrono::Utc;
use storage::{
    Database, StorageError,
    dto::{
        exercise::{CreateExerciseRequest, UpdateExerciseRequest},
        program::{CreateProgramRequest, ProgramFilter, UpdateProgramRequest},
        progress::CreateProgressRequest,
        user::CreateUserRequest,
        workout::CreateWorkoutRequest,
    },
    models::{CompletionState, WorkoutProgram},
    repository::{
        ExerciseRepository, ProgramRepository, ProgressRepository, UserRepository,
        WorkoutRepository,
    },
};

async fn test_db() -> Database {
    let db = Database::new("sqlite::memory:")
        .await
        .expect("in-memory database");
    db.run_migrations().await.expect("migrations");
    db
}

fn program_request(difficulty: &str, goal: &str, location: &str, name: &str) -> CreateProgramRequest {
    CreateProgramRequest {
        difficulty: difficulty.to_string(),
        goal: goal.to_string(),
        location: location.to_string(),
        name: name.to_string(),
        description: Some("описание".to_string()),
    }
}

fn workout_request(program_id: i64, day_number: i32) -> CreateWorkoutRequest {
    CreateWorkoutRequest {
        program_id,
        day_number,
        title: format!("День {}", day_number),
        description: None,
    }
}

fn exercise_request(workout_id: i64) -> CreateExerciseRequest {
    CreateExerciseRequest {
        workout_id,
        name: "Приседания".to_string(),
        sets: 3,
        reps: "15-20".to_string(),
        rest_time: 60,
        description: None,
    }
}

async fn count(db: &Database, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(db.pool())
        .await
        .unwrap()
}

#[tokio::test]
async fn duplicate_telegram_id_is_a_constraint_violation() {
    let db = test_db().await;
    let mut conn = db.pool().acquire().await.unwrap();
    let mut users = UserRepository::new(&mut conn);

    let req = CreateUserRequest {
        telegram_id: "t1".to_string(),
    };
    let user = users.create(&req).await.unwrap();
    assert_eq!(user.telegram_id, "t1");

    let err = users.create(&req).await.unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation(_)));

    drop(conn);
    assert_eq!(count(&db, "users").await, 1);
}

#[tokio::test]
async fn lookups_return_none_for_unknown_ids() {
    let db = test_db().await;
    let mut conn = db.pool().acquire().await.unwrap();

    assert!(
        UserRepository::new(&mut conn)
            .find_by_telegram_id("missing")
            .await
            .unwrap()
            .is_none()
    );
    assert!(ProgramRepository::new(&mut conn).find_by_id(42).await.unwrap().is_none());
    assert!(!WorkoutRepository::new(&mut conn).exists(42).await.unwrap());
    assert!(ExerciseRepository::new(&mut conn).find_by_id(42).await.unwrap().is_none());
    assert!(ProgressRepository::new(&mut conn).find_by_id(42).await.unwrap().is_none());
    assert!(!ProgramRepository::new(&mut conn).delete(42).await.unwrap());
}

#[tokio::test]
async fn program_filters_combine_with_and() {
    let db = test_db().await;
    let mut conn = db.pool().acquire().await.unwrap();
    let mut programs = ProgramRepository::new(&mut conn);

    programs
        .create(&program_request("Начальный", "Похудение", "Дома", "A"))
        .await
        .unwrap();
    programs
        .create(&program_request("Начальный", "Набор массы", "Зал", "B"))
        .await
        .unwrap();
    programs
        .create(&program_request("Средний", "Похудение", "Дома", "C"))
        .await
        .unwrap();

    let filter = ProgramFilter {
        difficulty: Some("Начальный".to_string()),
        goal: Some("Похудение".to_string()),
        limit: 100,
        ..ProgramFilter::default()
    };
    let found: Vec<String> = programs
        .list(&filter)
        .await
        .unwrap()
        .into_iter()
        .map(|p: WorkoutProgram| p.name)
        .collect();
    assert_eq!(found, vec!["A"]);

    let by_location = ProgramFilter {
        location: Some("Дома".to_string()),
        limit: 100,
        ..ProgramFilter::default()
    };
    assert_eq!(programs.list(&by_location).await.unwrap().len(), 2);

    let paged = ProgramFilter {
        skip: 1,
        limit: 1,
        ..ProgramFilter::default()
    };
    let page = programs.list(&paged).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "B");
}

#[tokio::test]
async fn program_update_keeps_description_when_absent() {
    let db = test_db().await;
    let mut conn = db.pool().acquire().await.unwrap();
    let mut programs = ProgramRepository::new(&mut conn);

    let program = programs
        .create(&program_request("Начальный", "Похудение", "Дома", "Old"))
        .await
        .unwrap();

    let update = UpdateProgramRequest {
        name: "New".to_string(),
        description: None,
        difficulty: "Продвинутый".to_string(),
        goal: "Выносливость".to_string(),
        location: "Улица".to_string(),
    };
    let updated = programs.update(program.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.name, "New");
    assert_eq!(updated.difficulty, "Продвинутый");
    assert_eq!(updated.description.as_deref(), Some("описание"));

    assert!(programs.update(program.id + 100, &update).await.unwrap().is_none());
}

#[tokio::test]
async fn workouts_are_listed_in_day_order() {
    let db = test_db().await;
    let mut conn = db.pool().acquire().await.unwrap();

    let program = ProgramRepository::new(&mut conn)
        .create(&program_request("Начальный", "Похудение", "Дома", "P"))
        .await
        .unwrap();

    let mut workouts = WorkoutRepository::new(&mut conn);
    for day in [3, 1, 2] {
        workouts.create(&workout_request(program.id, day)).await.unwrap();
    }

    let days: Vec<i32> = workouts
        .list_by_program(program.id)
        .await
        .unwrap()
        .iter()
        .map(|w| w.day_number)
        .collect();
    assert_eq!(days, vec![1, 2, 3]);
}

#[tokio::test]
async fn foreign_keys_reject_orphans() {
    let db = test_db().await;
    let mut conn = db.pool().acquire().await.unwrap();

    let err = WorkoutRepository::new(&mut conn)
        .create(&workout_request(999, 1))
        .await
        .unwrap_err();
    assert!(matches!(err, StorageError::ConstraintViolation(_)));

    drop(conn);
    assert_eq!(count(&db, "workouts").await, 0);
}

#[tokio::test]
async fn exercise_update_replaces_fields() {
    let db = test_db().await;
    let mut conn = db.pool().acquire().await.unwrap();

    let program = ProgramRepository::new(&mut conn)
        .create(&program_request("Начальный", "Похудение", "Дома", "P"))
        .await
        .unwrap();
    let workout = WorkoutRepository::new(&mut conn)
        .create(&workout_request(program.id, 1))
        .await
        .unwrap();

    let mut exercises = ExerciseRepository::new(&mut conn);
    let mut req = exercise_request(workout.id);
    req.description = Some("с собственным весом".to_string());
    let exercise = exercises.create(&req).await.unwrap();

    let update = UpdateExerciseRequest {
        name: "Выпады".to_string(),
        sets: 4,
        reps: "12 на каждую ногу".to_string(),
        rest_time: 90,
        description: None,
    };
    let updated = exercises.update(exercise.id, &update).await.unwrap().unwrap();
    assert_eq!(updated.workout_id, workout.id);
    assert_eq!(updated.sets, 4);
    assert_eq!(updated.rest_time, 90);
    assert_eq!(updated.description, None);

    assert!(exercises.delete(exercise.id).await.unwrap());
    assert!(exercises.list_by_workout(workout.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn completion_state_round_trips_through_the_store() {
    let db = test_db().await;
    let mut conn = db.pool().acquire().await.unwrap();

    let user = UserRepository::new(&mut conn)
        .create(&CreateUserRequest {
            telegram_id: "t1".to_string(),
        })
        .await
        .unwrap();
    let program = ProgramRepository::new(&mut conn)
        .create(&program_request("Начальный", "Похудение", "Дома", "P"))
        .await
        .unwrap();
    let workout = WorkoutRepository::new(&mut conn)
        .create(&workout_request(program.id, 1))
        .await
        .unwrap();

    let mut progress = ProgressRepository::new(&mut conn);
    let req = CreateProgressRequest {
        user_id: user.id,
        program_id: program.id,
        workout_id: workout.id,
        is_completed: false,
    };
    let record = progress
        .create(&req, CompletionState::Incomplete)
        .await
        .unwrap();
    assert!(!record.is_completed);
    assert!(record.completed_at.is_none());

    let now = Utc::now().naive_utc();
    let done = progress
        .set_completion(record.id, CompletionState::requested(true, now))
        .await
        .unwrap()
        .unwrap();
    assert!(done.is_completed);
    assert!(done.completed_at.is_some());

    let undone = progress
        .set_completion(record.id, CompletionState::requested(false, now))
        .await
        .unwrap()
        .unwrap();
    assert!(!undone.is_completed);
    assert!(undone.completed_at.is_none());

    let undone_again = progress
        .set_completion(record.id, CompletionState::Incomplete)
        .await
        .unwrap()
        .unwrap();
    assert!(!undone_again.is_completed);
    assert!(undone_again.completed_at.is_none());

    assert!(
        progress
            .set_completion(record.id + 1, CompletionState::Incomplete)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn progress_can_be_narrowed_to_a_program() {
    let db = test_db().await;
    let mut conn = db.pool().acquire().await.unwrap();

    let user = UserRepository::new(&mut conn)
        .create(&CreateUserRequest {
            telegram_id: "t1".to_string(),
        })
        .await
        .unwrap();

    let mut program_ids = Vec::new();
    for name in ["P1", "P2"] {
        let program = ProgramRepository::new(&mut conn)
            .create(&program_request("Начальный", "Похудение", "Дома", name))
            .await
            .unwrap();
        let workout = WorkoutRepository::new(&mut conn)
            .create(&workout_request(program.id, 1))
            .await
            .unwrap();
        ProgressRepository::new(&mut conn)
            .create(
                &CreateProgressRequest {
                    user_id: user.id,
                    program_id: program.id,
                    workout_id: workout.id,
                    is_completed: false,
                },
                CompletionState::Incomplete,
            )
            .await
            .unwrap();
        program_ids.push(program.id);
    }

    let mut progress = ProgressRepository::new(&mut conn);
    assert_eq!(progress.list_by_user(user.id, None).await.unwrap().len(), 2);

    let narrowed = progress
        .list_by_user(user.id, Some(program_ids[1]))
        .await
        .unwrap();
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].program_id, program_ids[1]);
}

#[tokio::test]
async fn deleting_a_program_cascades_to_every_dependent() {
    let db = test_db().await;
    let mut conn = db.pool().acquire().await.unwrap();

    let user = UserRepository::new(&mut conn)
        .create(&CreateUserRequest {
            telegram_id: "t1".to_string(),
        })
        .await
        .unwrap();
    let doomed = ProgramRepository::new(&mut conn)
        .create(&program_request("Начальный", "Похудение", "Дома", "Doomed"))
        .await
        .unwrap();
    let kept = ProgramRepository::new(&mut conn)
        .create(&program_request("Средний", "Гибкость", "Зал", "Kept"))
        .await
        .unwrap();

    for program_id in [doomed.id, kept.id] {
        for day in 1..=2 {
            let workout = WorkoutRepository::new(&mut conn)
                .create(&workout_request(program_id, day))
                .await
                .unwrap();
            ExerciseRepository::new(&mut conn)
                .create(&exercise_request(workout.id))
                .await
                .unwrap();
            ProgressRepository::new(&mut conn)
                .create(
                    &CreateProgressRequest {
                        user_id: user.id,
                        program_id,
                        workout_id: workout.id,
                        is_completed: true,
                    },
                    CompletionState::requested(true, Utc::now().naive_utc()),
                )
                .await
                .unwrap();
        }
    }

    assert!(ProgramRepository::new(&mut conn).delete(doomed.id).await.unwrap());
    drop(conn);

    assert_eq!(count(&db, "workout_programs").await, 1);
    assert_eq!(count(&db, "workouts").await, 2);
    assert_eq!(count(&db, "exercises").await, 2);
    assert_eq!(count(&db, "user_progress").await, 2);

    let orphans: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM user_progress WHERE program_id = ? OR workout_id NOT IN (SELECT id FROM workouts)",
    )
    .bind(doomed.id)
    .fetch_one(db.pool())
    .await
    .unwrap();
    assert_eq!(orphans, 0);
}

#[tokio::test]
async fn deleting_a_workout_removes_its_exercises_and_progress() {
    let db = test_db().await;
    let mut conn = db.pool().acquire().await.unwrap();

    let user = UserRepository::new(&mut conn)
        .create(&CreateUserRequest {
            telegram_id: "t1".to_string(),
        })
        .await
        .unwrap();
    let program = ProgramRepository::new(&mut conn)
        .create(&program_request("Начальный", "Похудение", "Дома", "P"))
        .await
        .unwrap();
    let workout = WorkoutRepository::new(&mut conn)
        .create(&workout_request(program.id, 1))
        .await
        .unwrap();
    ExerciseRepository::new(&mut conn)
        .create(&exercise_request(workout.id))
        .await
        .unwrap();
    ProgressRepository::new(&mut conn)
        .create(
            &CreateProgressRequest {
                user_id: user.id,
                program_id: program.id,
                workout_id: workout.id,
                is_completed: false,
            },
            CompletionState::Incomplete,
        )
        .await
        .unwrap();

    assert!(WorkoutRepository::new(&mut conn).delete(workout.id).await.unwrap());
    drop(conn);

    assert_eq!(count(&db, "workout_programs").await, 1);
    assert_eq!(count(&db, "exercises").await, 0);
    assert_eq!(count(&db, "user_progress").await, 0);
}
