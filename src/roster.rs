use std::path::Path;

use log::info;

pub mod compare;
pub mod err;
pub mod loader;
pub mod report;
pub mod sort;
pub mod student;

use err::RosterError;
use report::ReportMode;

/// One batch run: load the roster, order it, write the filtered report.
///
/// Returns the number of records emitted. An empty roster is rejected before
/// any work happens; every failure propagates to the caller untouched.
pub fn run(input: &Path, output: &Path, mode: ReportMode) -> Result<usize, RosterError> {
    let mut students = loader::load_students(input)?;
    if students.is_empty() {
        return Err(RosterError::EmptyInput);
    }
    info!("loaded {} record(s) from {}", students.len(), input.display());

    sort::merge_sort(&mut students, &compare::rank);

    report::write_report(output, &students, mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, fs::File, io::Write};
    use tempfile::tempdir;

    fn write_input(lines: &[&str]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roster.txt");
        let mut file = File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        (dir, path)
    }

    #[test]
    fn test_run_sorts_and_writes_all() {
        let (dir, input) = write_input(&[
            "Alice Smith Jan-05-2000 3.90 D",
            "Bob Adams Feb-10-1998 3.50 I 102",
            "Cara Jones Jan-05-2000 3.70 I 110",
            "Dan Smith Mar-15-1999 2.90 D",
        ]);
        let output = dir.path().join("report.txt");

        let count = run(&input, &output, ReportMode::All).unwrap();
        assert_eq!(count, 4);

        let text = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        // years descend; within Jan-05-2000 the last name key ascends
        assert_eq!(
            lines,
            vec![
                "Cara Jones Jan-05-2000 3.70 110 I",
                "Alice Smith Jan-05-2000 3.90 D",
                "Dan Smith Mar-15-1999 2.90 D",
                "Bob Adams Feb-10-1998 3.50 102 I",
            ]
        );
    }

    #[test]
    fn test_run_terminal_tie_break_places_international_first() {
        let (dir, input) = write_input(&[
            "Ann Abel Mar-05-2000 3.00 D",
            "Ann Abel Mar-05-2000 3.00 I 90",
        ]);
        let output = dir.path().join("report.txt");

        run(&input, &output, ReportMode::All).unwrap();

        let text = fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Ann Abel Mar-05-2000 3.00 90 I");
        assert_eq!(lines[1], "Ann Abel Mar-05-2000 3.00 D");
    }

    #[test]
    fn test_run_filters_by_mode() {
        let (dir, input) = write_input(&[
            "Alice Smith Jan-05-2000 3.90 D",
            "Bob Adams Feb-10-1998 3.50 I 102",
            "Cara Jones Jan-05-2000 3.70 I 110",
        ]);
        let output = dir.path().join("report.txt");

        let count = run(&input, &output, ReportMode::DomesticOnly).unwrap();
        assert_eq!(count, 1);

        let text = fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Alice Smith"));
    }

    #[test]
    fn test_run_rejects_empty_input() {
        let (dir, input) = write_input(&[]);
        let output = dir.path().join("report.txt");

        let result = run(&input, &output, ReportMode::All);
        assert!(matches!(result, Err(RosterError::EmptyInput)));
        // fail closed: nothing was written
        assert!(!output.exists());
    }

    #[test]
    fn test_run_aborts_on_malformed_line() {
        let (dir, input) = write_input(&[
            "Alice Smith Jan-05-2000 3.90 D",
            "not a record at all",
        ]);
        let output = dir.path().join("report.txt");

        let result = run(&input, &output, ReportMode::All);
        assert!(matches!(
            result,
            Err(RosterError::MalformedRecord { line: 2, .. })
        ));
        assert!(!output.exists());
    }
}
