//! Line-oriented front end over [`Form`]: fill fields, calculate, reset.

mod command;

pub use command::{Command, CommandError, HELP};

use std::io::{self, BufRead, Write};

use suvat_config::Config;
use suvat_export::{self as export, Format};
use suvat_form::{Form, FormatStyle};
use suvat_solver::{Solution, check};
use tracing::{debug, warn};

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session state.
#[derive(Debug, Clone)]
pub struct Shell {
    form: Form,
    style: FormatStyle,
    tolerance: f64,
    last: Option<Solution>,
    prompt: bool,
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        Shell {
            form: Form::new(),
            style: FormatStyle::with_precision(config.display.precision),
            tolerance: config.check.tolerance,
            last: None,
            prompt: false,
        }
    }

    /// Print `> ` before each line (for terminals).
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn last_solution(&self) -> Option<&Solution> {
        self.last.as_ref()
    }

    /// Read commands until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        let mut lines = input.lines();
        loop {
            if self.prompt {
                write!(output, "> ")?;
                output.flush()?;
            }
            let Some(line) = lines.next().transpose()? else {
                break;
            };
            if self.execute_line(&line, output)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Parse and run one line. Blank lines and `#` comments are ignored.
    pub fn execute_line<W: Write>(&mut self, line: &str, output: &mut W) -> io::Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }
        match line.parse::<Command>() {
            Ok(command) => self.execute(command, output),
            Err(err) => {
                writeln!(output, "error: {err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> io::Result<Flow> {
        debug!(?command, "shell command");
        match command {
            Command::Set(quantity, text) => self.form.set(quantity, text),
            Command::Clear(quantity) => self.form.clear(quantity),
            Command::Show => self.show(output)?,
            Command::Calculate => self.calculate(output)?,
            Command::Export(format) => match &self.last {
                Some(solution) => self.export(solution, format, output)?,
                None => writeln!(output, "error: nothing calculated yet")?,
            },
            Command::Reset => {
                self.form.reset();
                self.last = None;
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn show<W: Write>(&self, output: &mut W) -> io::Result<()> {
        for (quantity, text) in self.form.fields() {
            let text = if text.trim().is_empty() { "-" } else { text };
            writeln!(output, "{} = {}", quantity.symbol(), text)?;
        }
        Ok(())
    }

    fn calculate<W: Write>(&mut self, output: &mut W) -> io::Result<()> {
        match self.form.calculate(&self.style) {
            Ok(solution) => {
                let values = solution.values();
                if !check::is_consistent(&values, self.tolerance) {
                    let (equation, residual) = check::worst_fit(&values);
                    warn!(
                        equation = equation.formula(),
                        residual, "result exceeds consistency tolerance"
                    );
                }
                self.export(&solution, Format::Text, output)?;
                self.last = Some(solution);
            }
            Err(err) => writeln!(output, "{} {}", err.title(), err)?,
        }
        Ok(())
    }

    fn export<W: Write>(
        &self,
        solution: &Solution,
        format: Format,
        output: &mut W,
    ) -> io::Result<()> {
        let style = self.style;
        export::write(output, solution, format, &move |value: f64| style.format(value))
    }
}
