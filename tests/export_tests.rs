mod common;
use common::{MARIA_DAY, init_config, maria_session, setup_test_config, temp_out};
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_events_csv() {
    let cfg = setup_test_config("export_events_csv");
    init_config(&cfg);
    let out = temp_out("export_events_csv", "csv");

    let script = format!("{MARIA_DAY}export --format csv --file {out}\n");
    maria_session(&cfg, &script)
        .success()
        .stdout(contains("CSV export completed (4 rows)"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "date,kind,time",
            "2024-03-01,entry,08:00:00",
            "2024-03-01,lunch_out,12:00:00",
            "2024-03-01,lunch_in,13:00:00",
            "2024-03-01,exit,17:00:00",
        ]
    );
}

#[test]
fn test_export_summary_csv() {
    let cfg = setup_test_config("export_summary_csv");
    init_config(&cfg);
    let out = temp_out("export_summary_csv", "csv");

    let script = format!(
        "{MARIA_DAY}punch entry --date 2024-03-02 --time 09:00\nexport --format csv --sheet summary --file {out}\n"
    );
    maria_session(&cfg, &script).success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "date,entry,exit,total hours");
    assert_eq!(lines[1], "2024-03-01,08:00:00,17:00:00,8.00");
    assert_eq!(lines[2], "2024-03-02,09:00:00,,0.00");
}

#[test]
fn test_export_empty_selection_has_header_only() {
    let cfg = setup_test_config("export_empty");
    init_config(&cfg);
    let out = temp_out("export_empty", "csv");

    let script = format!("{MARIA_DAY}export --file {out} --range 2023\n");
    maria_session(&cfg, &script)
        .success()
        .stdout(contains("writing header only"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.trim_end(), "date,kind,time");
}

#[test]
fn test_export_xlsx_and_json() {
    let cfg = setup_test_config("export_xlsx_json");
    init_config(&cfg);
    let xlsx = temp_out("export_xlsx_json", "xlsx");
    let json = temp_out("export_xlsx_json", "json");

    let script = format!(
        "{MARIA_DAY}export --format xlsx --sheet summary --file {xlsx}\nexport --format json --file {json} --range 2024-03\n"
    );
    maria_session(&cfg, &script)
        .success()
        .stdout(contains("XLSX export completed (1 rows)"))
        .stdout(contains("JSON export completed (4 rows)"));

    let bytes = fs::read(&xlsx).expect("read exported xlsx");
    assert_eq!(&bytes[..2], b"PK");

    let content = fs::read_to_string(&json).expect("read exported json");
    assert!(content.contains("\"kind\": \"lunch_out\""));
}

#[test]
fn test_export_does_not_overwrite_without_force() {
    let cfg = setup_test_config("export_no_force");
    init_config(&cfg);
    let out = temp_out("export_no_force", "csv");
    fs::write(&out, "keep me").unwrap();

    let script = format!("{MARIA_DAY}export --file {out}\n");
    maria_session(&cfg, &script)
        .success()
        .stderr(contains("use --force to overwrite"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    let script = format!("{MARIA_DAY}export --file {out} --force\n");
    maria_session(&cfg, &script).success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("date,kind,time"));
}
