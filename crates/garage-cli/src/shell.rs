//! Interactive numbered menu
//!
//! Generic over the input and output streams so it can be driven from a
//! script in tests. End of input behaves like choosing Quit.

use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use garage_app::session::{Command, Outcome, Session};
use garage_types::Result;
use tracing::debug;

use crate::cli::OutputFormat;
use crate::output::output_outcome;

const MENU: &str = "\
Parking Garage
--------------
1. Park vehicle
2. Move vehicle
3. Retrieve vehicle
4. Search vehicle
5. Show status
6. Quit";

/// Run the menu against the system clock
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: W,
    format: OutputFormat,
) -> Result<()> {
    run_menu_with_clock(session, input, out, format, Utc::now)
}

pub fn run_menu_with_clock<R, W, C>(
    session: &mut Session,
    mut input: R,
    mut out: W,
    format: OutputFormat,
    clock: C,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: Fn() -> DateTime<Utc>,
{
    loop {
        writeln!(out, "\n{}", MENU)?;
        let Some(choice) = prompt(&mut input, &mut out, "Choice: ")? else {
            break;
        };

        let Some(command) = read_command(&choice, &mut input, &mut out)? else {
            writeln!(out, "Invalid choice, try again.")?;
            continue;
        };

        debug!(?command, "dispatching");
        let outcome = session.dispatch(command, clock());
        output_outcome(&mut out, format, &outcome)?;
        out.flush()?;

        if outcome == Outcome::Quit {
            return Ok(());
        }
    }

    output_outcome(&mut out, format, &Outcome::Quit)?;
    out.flush()?;
    Ok(())
}

/// Ask the follow-up questions for a menu choice. `Ok(None)` means the
/// choice itself was not recognised; end of input maps to Quit.
fn read_command<R: BufRead, W: Write>(
    choice: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Command>> {
    let command = match choice.trim() {
        "1" => {
            let Some(category) = prompt(input, out, "Vehicle type (CAR/MC): ")? else {
                return Ok(Some(Command::Quit));
            };
            let Some(registration) = prompt(input, out, "Registration number: ")? else {
                return Ok(Some(Command::Quit));
            };
            Command::Park {
                category,
                registration,
            }
        }
        "2" => {
            let Some(registration) = prompt(input, out, "Registration number to move: ")? else {
                return Ok(Some(Command::Quit));
            };
            let Some(to) = prompt(input, out, "Target space (blank for first free): ")? else {
                return Ok(Some(Command::Quit));
            };
            Command::Move {
                registration,
                to: Some(to),
            }
        }
        "3" => {
            let Some(registration) = prompt(input, out, "Registration number to retrieve: ")?
            else {
                return Ok(Some(Command::Quit));
            };
            Command::Retrieve { registration }
        }
        "4" => {
            let Some(registration) = prompt(input, out, "Registration number to search: ")? else {
                return Ok(Some(Command::Quit));
            };
            Command::Search { registration }
        }
        "5" => Command::Status,
        "6" | "q" | "Q" => Command::Quit,
        _ => return Ok(None),
    };
    Ok(Some(command))
}

/// Print `label` and read one line. `None` at end of input.
///
/// Invalid UTF-8 is replaced rather than rejected, so a garbled line goes
/// through normal validation instead of ending the session.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
