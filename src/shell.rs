//! Interactive text menu.
//!
//! Reads choices from any `BufRead` so the whole loop can be driven from a
//! byte buffer in tests. End of input behaves like choosing exit.
use crate::commands::{display_error, execute, Command, Flow};
use crate::config::Settings;
use crate::export::ExportFormat;
use crate::store::RecordStore;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Menu {
    View,
    Visualise,
    Export,
}

impl Menu {
    fn title(self) -> &'static str {
        match self {
            Menu::View => "VIEW DATA MENU",
            Menu::Visualise => "VISUALISE DATA MENU",
            Menu::Export => "EXPORT DATA MENU",
        }
    }

    fn options(self) -> &'static [&'static str] {
        match self {
            Menu::View => &[
                "[1] Display all reviews for a specific park",
                "[2] Count reviews by park and location",
                "[3] Average rating by park and year",
                "[4] Average score per park by reviewer location",
            ],
            Menu::Visualise => &[
                "[1] Pie chart - Reviews per park",
                "[2] Bar chart - Top locations by rating",
                "[3] Bar chart - Average rating by month",
            ],
            Menu::Export => &["[1] Export as TXT", "[2] Export as CSV", "[3] Export as JSON"],
        }
    }
}

enum Choice {
    Run(Command),
    Invalid,
    /// Input ran out while collecting arguments.
    EndOfInput,
}

pub struct Shell<'a, R, W> {
    store: &'a RecordStore,
    settings: &'a Settings,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a RecordStore, settings: &'a Settings, input: R, out: W) -> Self {
        Self {
            store,
            settings,
            input,
            out,
        }
    }

    /// Hand back the writer, mainly so tests can inspect what was printed.
    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.main_menu()?;
            let Some(choice) = self.prompt("\nPlease enter your choice: ")? else {
                return Ok(());
            };
            let choice = choice.to_uppercase();
            let menu = match choice.as_str() {
                "A" => Menu::View,
                "B" => Menu::Visualise,
                "C" => Menu::Export,
                "X" => {
                    execute(self.store, self.settings, &Command::Exit, &mut self.out)?;
                    return Ok(());
                }
                _ => {
                    display_error(
                        &mut self.out,
                        &format!("Invalid choice '{}'. Please enter A, B, C, or X.", choice),
                    )?;
                    continue;
                }
            };
            let label = match menu {
                Menu::View => "[A] View Data",
                Menu::Visualise => "[B] Visualise Data",
                Menu::Export => "[C] Export Data",
            };
            writeln!(self.out, "You selected: {}", label)?;
            if self.submenu(menu)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    fn main_menu(&mut self) -> io::Result<()> {
        let rule = "-".repeat(60);
        writeln!(self.out, "\n{}\n  MAIN MENU\n{}", rule, rule)?;
        for line in ["[A] View Data", "[B] Visualise Data", "[C] Export Data", "[X] Exit"] {
            writeln!(self.out, "  {}", line)?;
        }
        writeln!(self.out, "{}", rule)
    }

    fn submenu(&mut self, menu: Menu) -> io::Result<Flow> {
        let rule = "-".repeat(60);
        loop {
            writeln!(self.out, "\n{}\n  {}\n{}", rule, menu.title(), rule)?;
            for line in menu.options() {
                writeln!(self.out, "  {}", line)?;
            }
            writeln!(self.out, "  [X] Return to main menu\n{}", rule)?;

            let Some(choice) = self.prompt("\nPlease enter your choice: ")? else {
                return Ok(Flow::Exit);
            };
            let choice = choice.to_uppercase();
            if choice == "X" {
                return Ok(Flow::Continue);
            }
            let command = match self.command_for(menu, &choice)? {
                Choice::Run(command) => command,
                Choice::Invalid => {
                    let range = format!("1-{}", menu.options().len());
                    display_error(
                        &mut self.out,
                        &format!("Invalid choice '{}'. Please enter {} or X.", choice, range),
                    )?;
                    continue;
                }
                Choice::EndOfInput => return Ok(Flow::Exit),
            };
            execute(self.store, self.settings, &command, &mut self.out)?;
        }
    }

    fn command_for(&mut self, menu: Menu, choice: &str) -> io::Result<Choice> {
        let command = match (menu, choice) {
            (Menu::View, "1") => {
                let Some(park) = self.prompt("Enter park name: ")? else {
                    return Ok(Choice::EndOfInput);
                };
                Command::ViewParkReviews { park }
            }
            (Menu::View, "2") => {
                let Some(park) = self.prompt("Enter park name: ")? else {
                    return Ok(Choice::EndOfInput);
                };
                let Some(location) = self.prompt("Enter reviewer location: ")? else {
                    return Ok(Choice::EndOfInput);
                };
                Command::CountByLocation { park, location }
            }
            (Menu::View, "3") => {
                let Some(park) = self.prompt("Enter park name: ")? else {
                    return Ok(Choice::EndOfInput);
                };
                let Some(year) = self.prompt("Enter year (YYYY): ")? else {
                    return Ok(Choice::EndOfInput);
                };
                Command::AverageByYear { park, year }
            }
            (Menu::View, "4") => Command::ParkLocationAverages,
            (Menu::Visualise, "1") => Command::ChartParkShare,
            (Menu::Visualise, "2") => {
                let Some(park) = self.prompt("Enter park name: ")? else {
                    return Ok(Choice::EndOfInput);
                };
                Command::ChartTopLocations { park }
            }
            (Menu::Visualise, "3") => {
                let Some(park) = self.prompt("Enter park name: ")? else {
                    return Ok(Choice::EndOfInput);
                };
                Command::ChartMonthly { park }
            }
            (Menu::Export, "1") => Command::Export(ExportFormat::Text),
            (Menu::Export, "2") => Command::Export(ExportFormat::Csv),
            (Menu::Export, "3") => Command::Export(ExportFormat::Json),
            _ => return Ok(Choice::Invalid),
        };
        Ok(Choice::Run(command))
    }

    /// Print `label`, read one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ReviewRecord;

    fn session(input: &str, settings: &Settings) -> String {
        let store = RecordStore::new(vec![
            ReviewRecord::new("Disneyland_Paris", "France", "5", "2019-4"),
            ReviewRecord::new("Disneyland_HongKong", "Japan", "4", "2018-4"),
        ]);
        let mut shell = Shell::new(&store, settings, input.as_bytes(), Vec::new());
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn exit_from_main_menu() {
        let text = session("x\n", &Settings::default());
        assert!(text.contains("MAIN MENU"));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn invalid_main_choice_reprompts() {
        let text = session("q\nX\n", &Settings::default());
        assert!(text.contains("Invalid choice 'Q'. Please enter A, B, C, or X."));
        assert_eq!(text.matches("MAIN MENU").count(), 2);
    }

    #[test]
    fn view_count_then_back_and_exit() {
        let text = session("a\n2\nparis\nfra\nx\nx\n", &Settings::default());
        assert!(text.contains("You selected: [A] View Data"));
        assert!(text.contains("Number of reviews for paris from fra: 1"));
        assert!(text.contains("Goodbye!"));
    }

    #[test]
    fn invalid_submenu_choice() {
        let text = session("b\n9\nx\nx\n", &Settings::default());
        assert!(text.contains("Invalid choice '9'. Please enter 1-3 or X."));
    }

    #[test]
    fn end_of_input_exits_quietly() {
        let text = session("a\n1\n", &Settings::default());
        assert!(text.contains("Enter park name: "));
        assert!(!text.contains("Goodbye!"));
    }

    #[test]
    fn export_from_menu() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            export_name: dir.path().join("report").to_string_lossy().into_owned(),
            ..Settings::default()
        };
        let text = session("c\n2\nx\nx\n", &settings);
        assert!(text.contains("✓ Successfully exported to"));
        assert!(dir.path().join("report.csv").exists());
    }
}
