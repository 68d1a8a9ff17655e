mod common;
use common::{MARIA_DAY, init_config, maria_session, rtc, setup_test_config, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_daily_hours_scenario() {
    let cfg = setup_test_config("session_daily");
    init_config(&cfg);

    let script = format!("{MARIA_DAY}day --date 2024-03-01\nquit\n");

    maria_session(&cfg, &script)
        .success()
        .stdout(contains("Welcome Maria Souza"))
        .stdout(contains("Punch #4 recorded: exit at 2024-03-01 17:00:00"))
        .stdout(contains("08:00:00"))
        .stdout(contains("17:00:00"))
        .stdout(contains("1.00h (01h 00m)"))
        .stdout(contains("8.00h (08h 00m)"));
}

#[test]
fn test_monthly_apportionment_scenario() {
    let cfg = setup_test_config("session_month");
    init_config(&cfg);

    let script = format!("{MARIA_DAY}month --month 3 --year 2024\n");

    maria_session(&cfg, &script)
        .success()
        .stdout(contains("March 2024"))
        .stdout(contains("8.00h"))
        .stdout(contains("70%"))
        .stdout(contains("5.60h"))
        .stdout(contains("30%"))
        .stdout(contains("2.40h"));
}

#[test]
fn test_month_without_punches_reports_no_data() {
    let cfg = setup_test_config("session_month_empty");
    init_config(&cfg);

    maria_session(&cfg, "month --month 2 --year 2024\n")
        .success()
        .stdout(contains("No hours recorded for February 2024."));
}

#[test]
fn test_day_without_punches() {
    let cfg = setup_test_config("session_day_empty");
    init_config(&cfg);

    maria_session(&cfg, "day --date 2024-03-01\n")
        .success()
        .stdout(contains("No punches for 2024-03-01."));
}

#[test]
fn test_last_punch_of_a_kind_wins() {
    let cfg = setup_test_config("session_last_wins");
    init_config(&cfg);

    let script = "\
punch entry --date 2024-03-01 --time 07:00
punch entry --date 2024-03-01 --time 09:00
punch exit --date 2024-03-01 --time 17:00
day --date 2024-03-01
events --date 2024-03-01
";

    maria_session(&cfg, script)
        .success()
        .stdout(contains("8.00h (08h 00m)"))
        .stdout(contains("07:00:00"))
        .stdout(contains("Session closed: 3 punch(es) recorded."));
}

#[test]
fn test_week_report_from_monday() {
    let cfg = setup_test_config("session_week");
    init_config(&cfg);

    let script = "\
punch entry --date 2024-03-01 --time 08:00
punch exit --date 2024-03-01 --time 17:00
punch entry --date 2024-03-04 --time 08:00
punch exit --date 2024-03-04 --time 16:00
punch entry --date 2024-03-05 --time 09:00
punch exit --date 2024-03-05 --time 13:30
week --from 2024-03-04
";

    maria_session(&cfg, script)
        .success()
        .stdout(contains("Week from 2024-03-04"))
        .stdout(contains("12.50h"));
}

#[test]
fn test_out_of_order_punches_are_flagged() {
    let cfg = setup_test_config("session_out_of_order");
    init_config(&cfg);

    let script = "\
punch exit --date 2024-03-01 --time 08:00
punch entry --date 2024-03-01 --time 10:00
day --date 2024-03-01
";

    maria_session(&cfg, script)
        .success()
        .stdout(contains("-2.00h"))
        .stdout(contains("exit punched before entry"));
}

#[test]
fn test_bad_command_does_not_end_session() {
    let cfg = setup_test_config("session_bad_command");
    init_config(&cfg);

    let script = "\
punch coffee --date 2024-03-01 --time 10:00
punch entry --date 2024-03-01 --time 25:00
punch entry --date 2024-03-01 --time 08:00
";

    maria_session(&cfg, script)
        .success()
        .stderr(contains("Invalid event kind: coffee"))
        .stderr(contains("Invalid time format: 25:00"))
        .stdout(contains("Punch #1 recorded: entry at 2024-03-01 08:00:00"));
}

#[test]
fn test_password_from_first_stdin_line() {
    let cfg = setup_test_config("session_stdin_password");
    init_config(&cfg);

    rtc()
        .args(["--config", &cfg, "session", "--user", "joao"])
        .write_stdin("joao123\nwhoami\n")
        .assert()
        .success()
        .stdout(contains("Project Coordinator"))
        .stdout(contains("Projetos (50%)"));
}

#[test]
fn test_wrong_password_is_rejected() {
    let cfg = setup_test_config("session_wrong_password");
    init_config(&cfg);

    rtc()
        .args([
            "--config", &cfg, "session", "--user", "maria", "--password", "nope",
        ])
        .write_stdin("punch entry\n")
        .assert()
        .failure()
        .stderr(contains("Authentication failed for user maria"));
}

#[test]
fn test_empty_username_is_a_validation_failure() {
    let cfg = setup_test_config("session_empty_user");
    init_config(&cfg);

    rtc()
        .args(["--config", &cfg, "session", "--user", " ", "--password", "x"])
        .assert()
        .failure()
        .stderr(contains("Username must not be empty"));
}

#[test]
fn test_unknown_user() {
    let cfg = setup_test_config("session_unknown_user");
    init_config(&cfg);

    rtc()
        .args(["--config", &cfg, "session", "--user", "ghost", "--password", "x"])
        .assert()
        .failure()
        .stderr(contains("Unknown user: ghost"));
}

#[test]
fn test_non_utf8_line_does_not_end_the_session() {
    let cfg = setup_test_config("session_non_utf8");
    init_config(&cfg);
    let out = temp_out("session_non_utf8", "csv");

    let mut script = b"punch entry --date 2024-03-01 --time 08:00\n".to_vec();
    script.extend_from_slice(b"punch \xff\xfe\n");
    script.extend_from_slice(format!("export --file {out}\n").as_bytes());

    rtc()
        .args([
            "--config",
            cfg.as_str(),
            "session",
            "--user",
            "maria",
            "--password",
            "maria123",
        ])
        .write_stdin(script)
        .assert()
        .success()
        .stderr(contains("not valid UTF-8"))
        .stdout(contains("Session closed: 1 punch(es) recorded."));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.lines().count(), 2);
}
