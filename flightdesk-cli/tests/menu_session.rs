//! End-to-end tests of the interactive menu.
//!
//! Each test scripts a whole session on stdin and checks both what was
//! printed and what ended up in the database.

mod common;

use common::{add_customer, add_flight, add_pilot, add_plane, TestEnv};
use predicates::prelude::*;

#[test]
fn test_banner_menu_and_exit() {
    let env = TestEnv::new();
    let stdout = env.session("10\n");

    assert!(stdout.starts_with("Connecting to database...Connection URL: sqlite://ops@localhost:5432/"));
    assert!(stdout.contains("\n\nDone\nMAIN MENU\n---------\n1. Add Plane\n"));
    assert!(stdout.contains("13. Look up records\n10. < EXIT\nPlease make your choice: "));
    assert!(stdout.ends_with("Disconnecting from database...Done\n\nBye !\n"));
    assert!(env.db_path().exists());
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let env = TestEnv::new();
    env.command()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye !"));
}

#[test]
fn test_invalid_choice_reprompts() {
    let env = TestEnv::new();
    let stdout = env.session("abc\n0\n10\n");
    assert_eq!(stdout.matches("Your input is invalid!").count(), 2);
}

#[test]
fn test_add_plane_persists_seats() {
    let env = TestEnv::new();
    let stdout = env.session(&format!("{}10\n", add_plane("Boeing", "737", 2010, 180)));

    assert!(stdout.contains("Your entry has been added to the database.\n\nNew Plane with ID 0\n"));
    assert!(stdout.contains("Number of Seats: 180"));
    assert_eq!(env.query_i64("SELECT seats FROM Plane WHERE id = 0"), 180);
}

#[test]
fn test_non_utf8_answer_is_reprompted() {
    let env = TestEnv::new();
    let output = env
        .command()
        .write_stdin(b"1\nBoe\xffing\nBoeing\n737\n2010\n180\n10\n".to_vec())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please re-enter. The answer is not valid text."));
    assert_eq!(env.query_i64("SELECT COUNT(*) FROM Plane WHERE make = 'Boeing'"), 1);
}

#[test]
fn test_add_plane_reprompts_out_of_range_seats() {
    let env = TestEnv::new();
    let stdout = env.session("1\nBoeing\n737\n2010\n500\n0\n499\n10\n");

    assert_eq!(
        stdout
            .matches("Please re-enter. The plane's seat capacity must be between 1 and 499.")
            .count(),
        2
    );
    assert_eq!(env.query_i64("SELECT seats FROM Plane"), 499);
}

#[test]
fn test_ids_continue_across_sessions() {
    let env = TestEnv::new();
    env.session(&format!("{}10\n", add_plane("Boeing", "737", 2010, 180)));
    let stdout = env.session(&format!("{}10\n", add_plane("Airbus", "A320", 2015, 150)));

    assert!(stdout.contains("New Plane with ID 1"));
    assert_eq!(env.query_i64("SELECT COUNT(*) FROM Plane"), 2);
}

#[test]
fn test_add_flight_then_available_seats() {
    let env = TestEnv::new();
    let script = [
        add_plane("Boeing", "737", 2010, 180),
        add_pilot("Ann Lee", "US"),
        add_flight(12, "Ann Lee", "0"),
        "6\n0\n2024\n3\n5\n".to_string(),
        "10\n".to_string(),
    ]
    .concat();
    let stdout = env.session(&script);

    assert!(stdout.contains("The following entries have been added to the database."));
    assert!(stdout.contains("New FlightInfo entry with ID 0\nFlight ID: 0\nPilot ID: 0\nPlane ID: 0"));
    assert!(stdout.contains("The number of available seats for flight 0 on 2024-03-05 is:\n168\n"));
    assert_eq!(env.query_i64("SELECT COUNT(*) FROM Schedule WHERE flightNum = 0"), 1);
}

#[test]
fn test_booking_fills_flight_then_waitlists() {
    let env = TestEnv::new();
    let script = [
        add_plane("Cessna", "172", 1990, 2),
        add_pilot("Ann Lee", "US"),
        add_customer("Ada", "Byron"),
        add_flight(1, "0", "0"),
        "5\n0\n0\n2024\n3\n5\ny\n".to_string(),
        "5\nAda Byron\n0\n2024\n3\n5\n".to_string(),
        "10\n".to_string(),
    ]
    .concat();
    let stdout = env.session(&script);

    assert!(stdout.contains("The ticket has been sold to customer 0"));
    assert!(stdout.contains("Flight 0 is full. The reservation will be placed on the waitlist."));
    assert_eq!(
        stdout.matches("Has the customer confirmed their reservation? (y/n):").count(),
        1
    );
    assert_eq!(env.query_i64("SELECT num_sold FROM Flight WHERE fnum = 0"), 2);
    assert_eq!(env.query_i64("SELECT COUNT(*) FROM Reservation WHERE status = 'C'"), 1);
    assert_eq!(env.query_i64("SELECT COUNT(*) FROM Reservation WHERE status = 'W'"), 1);
}

#[test]
fn test_booking_unknown_departure_returns_to_menu() {
    let env = TestEnv::new();
    let script = [
        add_plane("Boeing", "737", 2010, 180),
        add_pilot("Ann Lee", "US"),
        add_customer("Ada", "Byron"),
        add_flight(0, "0", "0"),
        "5\n0\n0\n2025\n1\n1\n".to_string(),
        "10\n".to_string(),
    ]
    .concat();

    env.command()
        .write_stdin(script)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "ERROR: not found: flight 0 departing 2025-01-01",
        ));
    assert_eq!(env.query_i64("SELECT COUNT(*) FROM Reservation"), 0);
}

#[test]
fn test_repair_reports() {
    let env = TestEnv::new();
    let script = [
        add_plane("Boeing", "737", 2010, 180),
        add_pilot("Ann Lee", "US"),
        "4\nSam Ortiz\n".to_string(),
        "12\n2023\n6\n1\nMJ\nAnn Lee\n0\nSam Ortiz\n".to_string(),
        "12\n2023\n7\n1\nsv\nSV\n0\n0\n0\n".to_string(),
        "7\n8\n10\n".to_string(),
    ]
    .concat();
    let stdout = env.session(&script);

    assert!(stdout.contains("New Repair with ID 1"));
    assert!(stdout.contains("plane_id\trepairs\n0\t2\n"));
    assert!(stdout.contains("year\trepairs\n2023\t2\n"));
}

#[test]
fn test_passengers_with_status() {
    let env = TestEnv::new();
    let script = [
        add_plane("Boeing", "737", 2010, 180),
        add_pilot("Ann Lee", "US"),
        add_customer("Ada", "Byron"),
        add_flight(0, "0", "0"),
        "5\n0\n0\n2024\n3\n5\nn\n".to_string(),
        "9\n0\nR\n".to_string(),
        "10\n".to_string(),
    ]
    .concat();
    let stdout = env.session(&script);

    assert!(stdout.contains("The number of passengers on flight 0 with status R is:\n1\n"));
}

#[test]
fn test_lookup_submenu_by_name() {
    let env = TestEnv::new();
    let script = [
        add_pilot("Ann Lee", "US"),
        add_pilot("Bo Chen", "CA"),
        "13\n3\nNobody\nBo Chen\n0\n".to_string(),
        "10\n".to_string(),
    ]
    .concat();
    let stdout = env.session(&script);

    assert!(stdout.contains("LOOK UP RECORDS"));
    assert!(stdout.contains("Please re-enter. There is no pilot named Nobody."));
    assert!(stdout.contains("id\tfullname\tnationality\n1\tBo Chen\tCA\n"));
}

#[test]
fn test_json_output_for_lookups() {
    let env = TestEnv::new();
    let script = [add_plane("Boeing", "737", 2010, 180), "13\n1\n0\n0\n10\n".to_string()].concat();

    env.command()
        .args(["--output", "json"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"make\": \"Boeing\""));
}

#[test]
fn test_output_format_from_config_file() {
    let env = TestEnv::new();
    env.write_config("output_format: json\n");
    let stdout = env.session(&format!("{}7\n10\n", add_plane("Boeing", "737", 2010, 180)));

    assert!(stdout.contains("[]"));
}
