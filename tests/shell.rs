use std::io::Cursor;

use suvat::Quantity;
use suvat::config::Config;
use suvat::shell::{Command, Flow, Shell};
use suvat::solver::Triple;

fn shell_with_precision(precision: Option<usize>) -> Shell {
    let mut config = Config::default();
    config.display.precision = precision;
    Shell::new(&config)
}

fn run(shell: &mut Shell, script: &str) -> String {
    let mut output = Vec::new();
    shell
        .run(Cursor::new(script), &mut output)
        .expect("in-memory io");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn session_fills_calculates_and_exports() {
    let mut shell = shell_with_precision(Some(2));
    let output = run(
        &mut shell,
        "# free fall\nu=0\nset a 9.8\n\nt=2\ncalc\nexport json\nshow\n",
    );

    assert!(output.contains("* Displacement"), "{output}");
    assert!(output.contains("(s) : 19.60 m"), "{output}");
    assert!(output.contains("\"known\": \"uat\""), "{output}");
    assert!(output.contains("s = 19.60\n"), "{output}");
    assert!(output.contains("v = 19.60\n"), "{output}");

    let solution = shell.last_solution().expect("stored result");
    assert_eq!(solution.triple, Triple::Uat);
    assert_eq!(shell.form().get(Quantity::Time), "2.00");
}

#[test]
fn reset_empties_the_form_and_forgets_the_result() {
    let mut shell = shell_with_precision(None);
    let output = run(&mut shell, "s=10\na=0\nt=5\ncalc\nreset\nshow\nexport csv\n");
    assert!(output.contains("s = -\nu = -\nv = -\na = -\nt = -\n"), "{output}");
    assert!(output.ends_with("error: nothing calculated yet\n"), "{output}");
    assert!(shell.last_solution().is_none());
    assert_eq!(shell.form().filled(), 0);
}

#[test]
fn failures_print_the_dialog_title() {
    let mut shell = shell_with_precision(None);
    let output = run(&mut shell, "s=1\ncalc\n");
    assert!(output.starts_with("Three variables needed!"), "{output}");

    let output = run(&mut shell, "u=1\nv=1\nt=1\ncalc\n");
    assert!(output.starts_with("Too many variables given!"), "{output}");

    let output = run(&mut shell, "reset\ns=0\nu=5\nv=-5\ncalc\n");
    assert!(output.starts_with("Cannot solve!"), "{output}");
    assert_eq!(shell.form().get(Quantity::FinalVelocity), "-5");

    let output = run(&mut shell, "v=\nv=abc\ncalc\n");
    assert!(output.starts_with("Invalid input!"), "{output}");
}

#[test]
fn bad_commands_report_and_continue() {
    let mut shell = shell_with_precision(None);
    let output = run(&mut shell, "jump\nx=3\nexport yaml\nset s\n");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4, "{output}");
    assert!(lines.iter().all(|line| line.starts_with("error: ")), "{output}");
    assert!(lines[1].contains("unknown quantity 'x'"), "{output}");
}

#[test]
fn quit_stops_reading() {
    let mut shell = shell_with_precision(None);
    let output = run(&mut shell, "u=1\nquit\nshow\n");
    assert!(output.is_empty(), "{output}");
    assert_eq!(shell.form().get(Quantity::InitialVelocity), "1");

    let mut sink = Vec::new();
    let flow = shell.execute(Command::Quit, &mut sink).expect("in-memory io");
    assert_eq!(flow, Flow::Quit);
}
