//! Interactive numbered menu over a contact repository.
//!
//! # Responsibility
//! - Translate menu choices into repository calls.
//! - Render contacts and map repository errors to user-facing lines.
//!
//! # Invariants
//! - Repository errors never end the loop; only `5` or end of input do.

use contactbook_core::{core_version, ContactRepository, ContactStore, LoadReport};
use std::io::{self, BufRead, Write};

const MENU: &str = "\n=== Contact Book ===\n\
1. Add contact\n\
2. List contacts\n\
3. Find contact\n\
4. Remove contact\n\
5. Exit\n";

/// Prints load warnings and a load error, if any, before the first menu.
pub fn report_load<W: Write>(report: &LoadReport, output: &mut W) -> io::Result<()> {
    for warning in &report.warnings {
        writeln!(output, "Warning: {warning}")?;
    }
    if let Some(err) = &report.error {
        writeln!(output, "Error: {err}")?;
    }
    Ok(())
}

/// Runs the menu loop until the user exits or input ends.
pub fn run_menu<S, R, W>(
    repo: &mut ContactRepository<S>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()>
where
    S: ContactStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Contact Book v{}", core_version())?;
    loop {
        write!(output, "{MENU}")?;
        let Some(choice) = prompt(input, output, "Choose an option: ")? else {
            return Ok(());
        };

        let outcome = match choice.trim() {
            "1" => {
                let Some(name) = prompt(input, output, "Name: ")? else {
                    return Ok(());
                };
                let Some(phone) = prompt(input, output, "Phone: ")? else {
                    return Ok(());
                };
                let Some(email) = prompt(input, output, "Email: ")? else {
                    return Ok(());
                };
                repo.add(&name, &phone, &email)
                    .map(|()| "Contact added.".to_string())
            }
            "2" => {
                if repo.is_empty() {
                    Ok("No contacts.".to_string())
                } else {
                    let lines: Vec<String> =
                        repo.list().iter().map(ToString::to_string).collect();
                    Ok(lines.join("\n"))
                }
            }
            "3" => {
                let Some(name) = prompt(input, output, "Name to find: ")? else {
                    return Ok(());
                };
                repo.find(&name).map(|contact| format!("Found: {contact}"))
            }
            "4" => {
                let Some(name) = prompt(input, output, "Name to remove: ")? else {
                    return Ok(());
                };
                repo.remove(&name).map(|()| "Contact removed.".to_string())
            }
            "5" => {
                writeln!(output, "Bye.")?;
                return Ok(());
            }
            _ => {
                writeln!(output, "Invalid option, try again.")?;
                continue;
            }
        };

        match outcome {
            Ok(message) => writeln!(output, "{message}")?,
            Err(err) => writeln!(output, "Error: {err}")?,
        }
    }
}

/// Writes `label` and reads one line; `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::{report_load, run_menu};
    use contactbook_core::{core_version, ContactRepository, MemoryContactStore};
    use std::io::Cursor;

    fn run(repo: &mut ContactRepository<MemoryContactStore>, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_menu(repo, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn add_list_find_remove_session() {
        let (mut repo, _) = ContactRepository::open(MemoryContactStore::new());

        let output = run(
            &mut repo,
            "1\nBob\n555-1234\nbob@test.com\n2\n3\nbob\n4\nBOB\n2\n5\n",
        );

        assert!(output.starts_with(&format!("Contact Book v{}\n", core_version())));
        assert!(output.contains("Contact added."));
        assert!(output.contains("Name: Bob, Phone: 555-1234, Email: bob@test.com"));
        assert!(output.contains("Found: Name: Bob"));
        assert!(output.contains("Contact removed."));
        assert!(output.contains("No contacts."));
        assert!(output.ends_with("Bye.\n"));
        assert!(repo.is_empty());
    }

    #[test]
    fn errors_are_printed_and_loop_continues() {
        let (mut repo, _) = ContactRepository::open(MemoryContactStore::new());

        let output = run(&mut repo, "9\n1\nAna\n555\nnot-an-email\n3\nNobody\n");

        assert!(output.contains("Invalid option, try again."));
        assert!(output.contains("Error: invalid email format"));
        assert!(output.contains("Error: contact not found: Nobody"));
        assert!(repo.is_empty());
    }

    #[test]
    fn end_of_input_mid_prompt_exits_cleanly() {
        let (mut repo, _) = ContactRepository::open(MemoryContactStore::new());

        let output = run(&mut repo, "1\nAna\n");

        assert!(output.ends_with("Phone: "));
        assert!(repo.is_empty());
    }

    #[test]
    fn load_report_lists_skipped_lines() {
        let store = MemoryContactStore::with_content("onlyonefield\nBob;1;bob@test.com\n");
        let (_, report) = ContactRepository::open(store);

        let mut output = Vec::new();
        report_load(&report, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "Warning: line 1 skipped: malformed contact line: expected 3 fields, found 1\n"
        );
    }
}
