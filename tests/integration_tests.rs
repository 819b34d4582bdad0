use secret_santa::domain::model::AssignmentRow;
use secret_santa::utils::error::{ErrorSeverity, SantaError};
use secret_santa::{CliConfig, ExchangeEngine, ExchangePipeline, LocalStorage};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn config_for(temp_dir: &TempDir) -> CliConfig {
    CliConfig {
        roster: "input/Employee-List.csv".to_string(),
        prior: None,
        output: "output/Secret-Santa-Assignments.csv".to_string(),
        base_dir: temp_dir.path().to_string_lossy().into_owned(),
        attempts: 1,
        config: None,
        verbose: false,
    }
}

fn write_roster(base: &Path, people: &[(&str, &str)]) {
    let mut csv = String::from("Employee_Name,Employee_EmailID\n");
    for (name, email) in people {
        csv.push_str(&format!("{name},{email}\n"));
    }
    let input_dir = base.join("input");
    fs::create_dir_all(&input_dir).unwrap();
    fs::write(input_dir.join("Employee-List.csv"), csv).unwrap();
}

fn write_prior(base: &Path, pairs: &[(&str, &str, &str, &str)]) {
    let mut csv =
        String::from("Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID\n");
    for (giver_name, giver_email, receiver_name, receiver_email) in pairs {
        csv.push_str(&format!(
            "{giver_name},{giver_email},{receiver_name},{receiver_email}\n"
        ));
    }
    fs::write(base.join("input").join("Prior-Assignments.csv"), csv).unwrap();
}

fn read_output_rows(base: &Path) -> Vec<AssignmentRow> {
    let data = fs::read(base.join("output").join("Secret-Santa-Assignments.csv")).unwrap();
    let mut reader = csv::Reader::from_reader(data.as_slice());
    reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("output rows should deserialize")
}

#[tokio::test]
async fn end_to_end_draw_writes_a_complete_bijection() {
    let temp_dir = TempDir::new().unwrap();
    let people = [
        ("Alice", "alice@corp.test"),
        ("Bob", "bob@corp.test"),
        ("Carol", "carol@corp.test"),
        ("Dave", "dave@corp.test"),
        ("Erin", "erin@corp.test"),
        ("Frank", "frank@corp.test"),
    ];
    write_roster(temp_dir.path(), &people);

    let mut config = config_for(&temp_dir);
    // A greedy dead-end is rare but possible; retries keep the test stable
    // without touching the per-draw semantics.
    config.attempts = 50;

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = ExchangePipeline::new(storage, config);
    let output_path = ExchangeEngine::new(pipeline).run().await.unwrap();
    assert_eq!(output_path, "output/Secret-Santa-Assignments.csv");

    let output_file = temp_dir
        .path()
        .join("output")
        .join("Secret-Santa-Assignments.csv");
    assert!(output_file.exists());

    let header_line = fs::read_to_string(&output_file)
        .unwrap()
        .lines()
        .next()
        .unwrap()
        .to_string();
    assert_eq!(
        header_line,
        "Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID"
    );

    let rows = read_output_rows(temp_dir.path());
    assert_eq!(rows.len(), people.len());

    let all_emails: HashSet<&str> = people.iter().map(|(_, email)| *email).collect();
    let givers: HashSet<&str> = rows.iter().map(|r| r.giver_email.as_str()).collect();
    let receivers: HashSet<&str> = rows.iter().map(|r| r.receiver_email.as_str()).collect();
    assert_eq!(givers, all_emails);
    assert_eq!(receivers, all_emails);
    for row in &rows {
        assert_ne!(row.giver_email, row.receiver_email);
    }
}

#[tokio::test]
async fn tight_prior_cycle_either_fails_or_forces_the_open_receiver() {
    let temp_dir = TempDir::new().unwrap();
    write_roster(
        temp_dir.path(),
        &[("Alice", "a@x"), ("Bob", "b@x"), ("Carol", "c@x")],
    );
    write_prior(temp_dir.path(), &[("Alice", "a@x", "Bob", "b@x")]);

    let mut config = config_for(&temp_dir);
    config.prior = Some("input/Prior-Assignments.csv".to_string());
    config.attempts = 50;

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = ExchangePipeline::new(storage, config);
    let outcome = ExchangeEngine::new(pipeline).run().await;

    let output_file = temp_dir
        .path()
        .join("output")
        .join("Secret-Santa-Assignments.csv");
    match outcome {
        Ok(_) => {
            let rows = read_output_rows(temp_dir.path());
            assert_eq!(rows.len(), 3);
            let alices = rows.iter().find(|r| r.giver_email == "a@x").unwrap();
            assert_eq!(alices.receiver_email, "c@x");
            assert_eq!(alices.receiver_name, "Carol");
        }
        Err(SantaError::MatchingExhausted) => {
            assert!(!output_file.exists(), "failed draws must not leave output");
        }
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn forbidden_swap_fails_and_leaves_no_output() {
    let temp_dir = TempDir::new().unwrap();
    write_roster(temp_dir.path(), &[("Alice", "a@x"), ("Bob", "b@x")]);
    write_prior(temp_dir.path(), &[("Alice", "a@x", "Bob", "b@x")]);

    let mut config = config_for(&temp_dir);
    config.prior = Some("input/Prior-Assignments.csv".to_string());
    config.attempts = 3;

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = ExchangePipeline::new(storage, config);
    let err = ExchangeEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, SantaError::MatchingExhausted));
    assert_eq!(err.severity(), ErrorSeverity::Medium);
    assert!(!temp_dir
        .path()
        .join("output")
        .join("Secret-Santa-Assignments.csv")
        .exists());
}

#[tokio::test]
async fn missing_roster_columns_fail_before_matching() {
    let temp_dir = TempDir::new().unwrap();
    let input_dir = temp_dir.path().join("input");
    fs::create_dir_all(&input_dir).unwrap();
    fs::write(
        input_dir.join("Employee-List.csv"),
        "Name,Email\nAlice,alice@corp.test\n",
    )
    .unwrap();

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = ExchangePipeline::new(storage, config_for(&temp_dir));
    let err = ExchangeEngine::new(pipeline).run().await.unwrap_err();

    assert!(matches!(err, SantaError::Source { .. }));
    assert!(!temp_dir.path().join("output").exists());
}

#[tokio::test]
async fn last_rounds_output_seeds_the_next_round() {
    let temp_dir = TempDir::new().unwrap();
    let people = [
        ("Alice", "alice@corp.test"),
        ("Bob", "bob@corp.test"),
        ("Carol", "carol@corp.test"),
        ("Dave", "dave@corp.test"),
    ];
    write_roster(temp_dir.path(), &people);

    let mut config = config_for(&temp_dir);
    config.attempts = 50;
    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = ExchangePipeline::new(storage, config);
    ExchangeEngine::new(pipeline).run().await.unwrap();

    let first_round: HashMap<String, String> = read_output_rows(temp_dir.path())
        .into_iter()
        .map(|r| (r.giver_email, r.receiver_email))
        .collect();

    // Re-run with the produced file as the prior input.
    let mut config = config_for(&temp_dir);
    config.prior = Some("output/Secret-Santa-Assignments.csv".to_string());
    config.output = "output/Next-Round.csv".to_string();
    config.attempts = 50;
    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = ExchangePipeline::new(storage, config);

    match ExchangeEngine::new(pipeline).run().await {
        Ok(_) => {
            let data = fs::read(temp_dir.path().join("output").join("Next-Round.csv")).unwrap();
            let mut reader = csv::Reader::from_reader(data.as_slice());
            for row in reader.deserialize::<AssignmentRow>() {
                let row = row.unwrap();
                assert_ne!(
                    Some(&row.receiver_email),
                    first_round.get(&row.giver_email),
                    "giver {} repeated last round's receiver",
                    row.giver_email
                );
            }
        }
        // The greedy draw may dead-end even with retries; that is the
        // documented failure mode, not a test failure.
        Err(SantaError::MatchingExhausted) => {}
        Err(other) => panic!("unexpected error: {other}"),
    }
}
