//! Interactive menu shell over a family tree
//!
//! The shell owns the line-oriented input parsing and the output formatting;
//! every decision about the family itself is delegated to the core. "No
//! selection" (a blank or non-numeric id line) is resolved here and never
//! reaches the core as a sentinel value.

use std::io::{BufRead, Write};

use kinship_core::{FamilyTree, NewPerson, Person, PersonId, Sex};

use crate::output::{format_person, OutputFormat, NO_ONE};

const MENU: &str = "\
Commands:
  1: add a person          6: show children
  2: list everyone         7: show siblings
  3: register spouses      8: show aunts and uncles
  4: register a child      9: show cousins
  5: show parents         10: show parents-in-law
  0: exit";

pub struct Shell {
    tree: FamilyTree,
    format: OutputFormat,
}

impl Shell {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            tree: FamilyTree::new(),
            format,
        }
    }

    /// Run the command loop until `0` or end of input
    pub fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        writeln!(out, "{MENU}")?;

        loop {
            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = read_line(input)? else { break };
            let Ok(command) = line.trim().parse::<u32>() else {
                writeln!(out, "Enter a command number (0-10)")?;
                continue;
            };

            match command {
                0 => break,
                1 => self.add_person(input, out)?,
                2 => self.list_everyone(out)?,
                3 => self.register_spouses(input, out)?,
                4 => self.register_child(input, out)?,
                5..=10 => self.query(command, input, out)?,
                _ => writeln!(out, "Unknown command: {command}")?,
            }
        }

        Ok(())
    }

    fn add_person(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let Some(name) = prompt(input, out, "Full name: ")? else { return Ok(()) };
        let name = name.trim().to_string();
        if name.is_empty() {
            writeln!(out, "Name cannot be empty")?;
            return Ok(());
        }

        let Some(year_line) = prompt(input, out, "Birth year: ")? else { return Ok(()) };
        let Ok(birth_year) = year_line.trim().parse::<i32>() else {
            writeln!(out, "Not a year: {}", year_line.trim())?;
            return Ok(());
        };

        let Some(sex_line) = prompt(input, out, "Sex (m/f): ")? else { return Ok(()) };
        let Some(sex) = parse_sex(sex_line.trim()) else {
            writeln!(out, "Not a sex code: {}", sex_line.trim())?;
            return Ok(());
        };

        let person = self.tree.register(NewPerson::new(name, birth_year, sex));
        tracing::info!("Added person {} ({})", person.id, person.full_name);
        writeln!(out, "Added person #{}", person.id)?;
        Ok(())
    }

    fn list_everyone(&self, out: &mut impl Write) -> anyhow::Result<()> {
        self.write_persons(&self.tree.all(), out)
    }

    fn register_spouses(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let Some(a) = read_person_id(input, out, "First spouse id: ")? else {
            writeln!(out, "No person selected")?;
            return Ok(());
        };
        let Some(b) = read_person_id(input, out, "Second spouse id: ")? else {
            writeln!(out, "No person selected")?;
            return Ok(());
        };

        match self.tree.register_spouses(a, b) {
            Ok(true) => {
                tracing::info!("Registered spouses {} and {}", a, b);
                writeln!(out, "Registered spouses #{a} and #{b}")?;
            }
            Ok(false) => writeln!(out, "Rejected: #{a} and #{b} cannot be spouses")?,
            Err(e) => writeln!(out, "Error: {e}")?,
        }
        Ok(())
    }

    fn register_child(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let Some(child) = read_person_id(input, out, "Child id: ")? else {
            writeln!(out, "No person selected")?;
            return Ok(());
        };
        let Some(parent1) = read_person_id(input, out, "First parent id: ")? else {
            writeln!(out, "No person selected")?;
            return Ok(());
        };
        let Some(parent2) = read_person_id(input, out, "Second parent id: ")? else {
            writeln!(out, "No person selected")?;
            return Ok(());
        };

        match self.tree.register_child(child, parent1, parent2) {
            Ok(true) => {
                tracing::info!("Registered child {} of {} and {}", child, parent1, parent2);
                writeln!(out, "Registered #{child} as a child of #{parent1} and #{parent2}")?;
            }
            Ok(false) => {
                writeln!(out, "Rejected: #{child} cannot be a child of #{parent1} and #{parent2}")?
            }
            Err(e) => writeln!(out, "Error: {e}")?,
        }
        Ok(())
    }

    fn query(
        &self,
        command: u32,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let Some(id) = read_person_id(input, out, "Person id: ")? else {
            writeln!(out, "No person selected")?;
            return Ok(());
        };

        let result = match command {
            5 => self.tree.parents(id),
            6 => self.tree.children(id),
            7 => self.tree.siblings(id),
            8 => self.tree.aunts_and_uncles(id),
            9 => self.tree.cousins(id),
            10 => self.tree.in_laws(id),
            _ => return Ok(()),
        };

        match result {
            Ok(persons) => self.write_persons(&persons, out)?,
            Err(e) => writeln!(out, "Error: {e}")?,
        }
        Ok(())
    }

    fn write_persons(&self, persons: &[Person], out: &mut impl Write) -> anyhow::Result<()> {
        if persons.is_empty() {
            writeln!(out, "{NO_ONE}")?;
        } else {
            for person in persons {
                writeln!(out, "{}", format_person(person, self.format))?;
            }
        }
        Ok(())
    }
}

fn read_line(input: &mut impl BufRead) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    read_line(input)
}

/// Parse an id line; a blank or non-numeric line means "no selection"
fn read_person_id(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> anyhow::Result<Option<PersonId>> {
    let Some(line) = prompt(input, out, label)? else { return Ok(None) };
    Ok(line.trim().parse::<u32>().ok().map(PersonId))
}

fn parse_sex(s: &str) -> Option<Sex> {
    match s.to_lowercase().as_str() {
        "m" | "male" | "0" => Some(Sex::Male),
        "f" | "female" | "1" => Some(Sex::Female),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_session(script: &str) -> String {
        let mut shell = Shell::new(OutputFormat::Table);
        let mut input = script.as_bytes();
        let mut out = Vec::new();
        shell.run(&mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let output = run_session("1\nAnna Petrova\n1950\nf\n2\n0\n");
        assert!(output.contains("Added person #0"));
        assert!(output.contains("#0 Anna Petrova (b. 1950, female)"));
    }

    #[test]
    fn test_list_empty() {
        let output = run_session("2\n0\n");
        assert!(output.contains(NO_ONE));
    }

    #[test]
    fn test_source_sex_codes_still_parse() {
        let output = run_session("1\nBoris\n1948\n0\n2\n0\n");
        assert!(output.contains("#0 Boris (b. 1948, male)"));
    }

    #[test]
    fn test_family_session() {
        let output = run_session(concat!(
            "1\nAnna\n1950\nf\n",
            "1\nBoris\n1948\nm\n",
            "3\n0\n1\n",
            "1\nDima\n1975\nm\n",
            "1\nIra\n1978\nf\n",
            "4\n2\n0\n1\n",
            "4\n3\n0\n1\n",
            "7\n2\n",
            "5\n2\n",
            "0\n",
        ));

        assert!(output.contains("Registered spouses #0 and #1"));
        assert!(output.contains("Registered #2 as a child of #0 and #1"));
        assert!(output.contains("#3 Ira (b. 1978, female)"));
        assert!(output.contains("#0 Anna (b. 1950, female)"));
        assert!(output.contains("#1 Boris (b. 1948, male)"));
    }

    #[test]
    fn test_same_sex_spouses_rejected() {
        let output = run_session(concat!(
            "1\nAnna\n1950\nf\n",
            "1\nVera\n1952\nf\n",
            "3\n0\n1\n",
            "0\n",
        ));
        assert!(output.contains("Rejected: #0 and #1 cannot be spouses"));
    }

    #[test]
    fn test_blank_id_means_no_selection() {
        let output = run_session("1\nAnna\n1950\nf\n3\n\n0\n");
        assert!(output.contains("No person selected"));
    }

    #[test]
    fn test_unknown_id_reports_error() {
        let output = run_session("5\n42\n0\n");
        assert!(output.contains("Error: Person not found: 42"));
    }

    #[test]
    fn test_unrecognized_command() {
        let output = run_session("banana\n11\n0\n");
        assert!(output.contains("Enter a command number (0-10)"));
        assert!(output.contains("Unknown command: 11"));
    }

    #[test]
    fn test_eof_exits_cleanly() {
        let output = run_session("2\n");
        assert!(output.contains(NO_ONE));
    }
}
