//! The seam between the table and whoever sits in front of it.

use crate::display;
use crate::table::{Table, TableError};
use std::io::{self, BufRead, Write};

/// What the driver loop should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum RunError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("operator i/o failed: {0}")]
    Io(#[from] io::Error),
}

/// A front end: shows the table, then hands back raw operator lines.
///
/// Validation and case folding happen in the table's current state, so an
/// implementation only moves text.
pub trait Operator {
    /// Show the table and the current state's command list.
    fn show(&mut self, table: &Table, prompt: &str) -> io::Result<()>;

    /// Block for one line of input. `None` means the operator is gone.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Tell the operator `input` was not a legal command here.
    fn invalid_input(&mut self, input: &str) -> io::Result<()>;
}

/// Line-oriented prompt over any reader/writer pair.
///
/// ```
/// use poker_drill::operator::{play, LineOperator};
/// use poker_drill::table::Table;
/// use poker_drill::config::TableConfig;
///
/// let mut out = Vec::new();
/// let mut op = LineOperator::new("f\nt\nq\n".as_bytes(), &mut out);
/// let mut table = Table::new(TableConfig::default().with_seed(1));
/// play(&mut table, &mut op).unwrap();
/// assert_eq!(table.deck().number_of_cards_not_dealt(), 46);
/// ```
#[derive(Debug)]
pub struct LineOperator<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineOperator<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Operator for LineOperator<R, W> {
    fn show(&mut self, table: &Table, prompt: &str) -> io::Result<()> {
        writeln!(self.output, "{}", display::render(table))?;
        writeln!(self.output, "{prompt}")?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        // Bytes that are not UTF-8 still make a line; the state rejects it.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn invalid_input(&mut self, _input: &str) -> io::Result<()> {
        writeln!(self.output, "Invalid input.")
    }
}

/// Drive `table` with `operator` until the operator quits.
pub fn play<O: Operator + ?Sized>(table: &mut Table, operator: &mut O) -> Result<(), RunError> {
    while table.run(operator)? == Flow::Continue {}
    Ok(())
}
