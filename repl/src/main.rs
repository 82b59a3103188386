//! Tabula REPL - interactive editor for an ordered table.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tabula_form::ConsoleForm;
use tabula_interchange::{read_csv, write_csv};
use tabula_mutation::{MutationController, MutationOutcome};
use tabula_table::{OrderedTable, SharedTable};
use tabula_view::TextView;

/// REPL state
struct Repl {
    controller: MutationController<ConsoleForm, TextView>,
    path: Option<PathBuf>,
}

impl Repl {
    fn new(table: OrderedTable, path: Option<PathBuf>) -> Self {
        let table = SharedTable::new(table);
        Self {
            controller: MutationController::new(table, ConsoleForm::new(), TextView::new()),
            path,
        }
    }

    fn execute(&mut self, input: &str) -> Result<String, String> {
        let mut parts = input.split_whitespace();
        let command = parts.next().unwrap_or("");
        let argument = parts.next();

        let outcome = match command {
            "ar" => self.controller.append_row(),
            "ir" => self.controller.insert_row(),
            "er" => self.controller.edit_row(),
            "mr" => self.controller.move_row(),
            "dr" => self.controller.delete_row(),
            "ac" => self.controller.append_column(),
            "mc" => self.controller.move_column(),
            "dc" => self.controller.delete_column(),
            "si" => self.controller.set_index(),
            "sel" => return self.select(argument),
            "p" => {
                self.controller.refresh();
                return Ok(String::new());
            }
            "w" => return self.write(argument),
            other => return Err(format!("unknown command: {}", other)),
        };

        match outcome {
            Ok(MutationOutcome::Applied) => Ok(String::new()),
            Ok(MutationOutcome::Cancelled) => Ok("cancelled".to_string()),
            Ok(MutationOutcome::NoSelection) => Ok("no row selected".to_string()),
            // The rejection was already reported through the form.
            Ok(MutationOutcome::Rejected(_)) => Ok(String::new()),
            Err(e) => Err(e.to_string()),
        }
    }

    fn select(&mut self, argument: Option<&str>) -> Result<String, String> {
        let selection = match argument {
            None => None,
            Some(arg) => {
                let position: usize =
                    arg.parse().map_err(|_| format!("not a position: {}", arg))?;
                let row_count = self.controller.table().borrow().row_count();
                if position >= row_count {
                    return Err(format!(
                        "row position {} out of range (len {})",
                        position, row_count
                    ));
                }
                Some(position)
            }
        };
        self.controller.view_mut().set_selection(selection);
        self.controller.refresh();
        Ok(String::new())
    }

    fn write(&mut self, argument: Option<&str>) -> Result<String, String> {
        let path = match argument {
            Some(arg) => PathBuf::from(arg),
            None => self
                .path
                .clone()
                .ok_or_else(|| "no file to write to (use: w <path>)".to_string())?,
        };
        write_csv(&path, &self.controller.table().borrow(), false)
            .map_err(|e| format!("write error: {}", e))?;
        self.path = Some(path.clone());
        Ok(format!("wrote {}", path.display()))
    }

    fn interactive(&mut self) {
        println!("Tabula v0.1.0");
        println!("Type 'help' for commands, 'q' to exit");
        println!();

        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            print!("tabula> ");
            stdout.flush().unwrap();

            let mut line = String::new();
            if stdin.lock().read_line(&mut line).unwrap() == 0 {
                break; // EOF
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match trimmed {
                "q" | "quit" | "exit" => break,
                "help" | "h" => {
                    print_help();
                    continue;
                }
                _ => {}
            }

            match self.execute(trimmed) {
                Ok(output) => {
                    if !output.is_empty() {
                        println!("{}", output);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                }
            }
        }

        println!("Goodbye!");
    }
}

fn print_help() {
    println!("Tabula Commands:");
    println!("  ar             Append a row");
    println!("  ir             Insert a row before the selection");
    println!("  er             Edit the selected row");
    println!("  mr             Move a row");
    println!("  dr             Delete the selected row");
    println!("  ac             Append a column");
    println!("  mc             Move a column");
    println!("  dc             Delete a column");
    println!("  si             Set the index from columns");
    println!("  sel <n>        Select row n (sel alone clears)");
    println!("  p              Print the table");
    println!("  w [path]       Write CSV");
    println!("  help, h        Show this help");
    println!("  q, quit        Exit");
    println!();
    println!("Forms prompt per field; enter . to cancel a form.");
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (table, path) = match args.get(1) {
        Some(arg) => match read_csv(Path::new(arg)) {
            Ok(table) => (table, Some(PathBuf::from(arg))),
            Err(e) => {
                eprintln!("Error loading {}: {}", arg, e);
                std::process::exit(1);
            }
        },
        None => (OrderedTable::with_synthetic_index(), None),
    };

    let mut repl = Repl::new(table, path);
    repl.interactive();
}
