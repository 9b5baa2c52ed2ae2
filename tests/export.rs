use csv::Reader;

use suvat::Quantity;
use suvat::export::{self, Format, Report};
use suvat::form::FormatStyle;
use suvat::solver::{Solution, solve};
use suvat::state::KinematicState;

fn free_fall() -> Solution {
    solve(
        KinematicState::empty()
            .with(Quantity::InitialVelocity, 0.0)
            .with(Quantity::Acceleration, 9.8)
            .with(Quantity::Time, 2.0),
    )
    .expect("solvable")
}

fn render(format: Format, precision: Option<usize>) -> String {
    let style = FormatStyle::with_precision(precision);
    let mut buffer = Vec::new();
    export::write(&mut buffer, &free_fall(), format, &|value: f64| {
        style.format(value)
    })
    .expect("write to vec");
    String::from_utf8(buffer).expect("utf-8 output")
}

#[test]
fn text_marks_computed_values() {
    let text = render(Format::Text, Some(1));
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6, "{text}");
    assert!(lines[0].starts_with("* Displacement"), "{text}");
    assert!(lines[0].ends_with("(s) : 19.6 m"), "{text}");
    assert!(lines[1].starts_with("  Initial velocity"), "{text}");
    assert!(lines[2].starts_with("* Final velocity"), "{text}");
    assert!(lines[3].ends_with(": 9.8 m/s^2"), "{text}");
    assert!(lines[4].ends_with(": 2.0 s"), "{text}");
    assert_eq!(lines[5], "  using s = ut + at^2 / 2 and v = u + at");
}

#[test]
fn json_report_has_named_fields() {
    let json = render(Format::Json, None);
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["known"], "uat");
    assert_eq!(value["time"], 2.0);
    assert_eq!(value["initial_velocity"], 0.0);
    let equations = value["equations"].as_array().expect("equations array");
    assert_eq!(equations.len(), 2);
    let displacement = value["displacement"].as_f64().expect("number");
    assert!((displacement - 19.6).abs() < 1e-12);
}

#[test]
fn csv_has_header_and_one_row() {
    let csv = render(Format::Csv, Some(3));
    let mut reader = Reader::from_reader(csv.as_bytes());
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), ["s", "u", "v", "a", "t", "known"]);
    let rows: Vec<csv::StringRecord> = reader.records().collect::<Result<_, _>>().expect("rows");
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(&row[5], "uat");
    // CSV keeps full precision regardless of the display style.
    let v: f64 = row[2].parse().expect("number");
    assert_eq!(v, free_fall().v);
}

#[test]
fn report_matches_solution() {
    let solution = free_fall();
    let report = Report::from(&solution);
    assert_eq!(report.final_velocity, solution.v);
    assert_eq!(report.known, "uat");
    assert_eq!(report.equations, vec!["s = ut + at^2 / 2", "v = u + at"]);
    assert_eq!("JSON".parse::<Format>(), Ok(Format::Json));
    assert!("xml".parse::<Format>().is_err());
}
