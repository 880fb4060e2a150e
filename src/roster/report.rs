use std::{fs::File, io::Write, path::Path};

use log::info;

use super::err::RosterError;
use super::student::{Category, Student};

/// Which categories the report keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    DomesticOnly,
    InternationalOnly,
    All,
}

impl ReportMode {
    /// Parse a CLI mode value; accepts the legacy numeric options 1/2/3 as
    /// well as the spelled-out names.
    pub fn parse(value: &str) -> Result<Self, RosterError> {
        match value.to_ascii_lowercase().as_str() {
            "1" | "domestic" => Ok(ReportMode::DomesticOnly),
            "2" | "international" => Ok(ReportMode::InternationalOnly),
            "3" | "all" => Ok(ReportMode::All),
            _ => Err(RosterError::InvalidMode(value.to_string())),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            ReportMode::DomesticOnly => category == Category::Domestic,
            ReportMode::InternationalOnly => category == Category::International,
            ReportMode::All => true,
        }
    }
}

/// Walk the sorted records in order, keeping the ones the mode selects.
pub fn filter(students: &[Student], mode: ReportMode) -> impl Iterator<Item = &Student> {
    students.iter().filter(move |s| mode.matches(s.category))
}

/// One output line; the international form carries the TOEFL score, the
/// domestic form does not. A sentinel score renders as a bare `I` marker,
/// the same shape the loader accepts back.
pub fn format_record(student: &Student) -> String {
    let mut line = format!(
        "{} {} {}-{:02}-{} {:.2}",
        student.first_name,
        student.last_name,
        student.birth_month,
        student.birth_day,
        student.birth_year,
        student.gpa,
    );
    match (student.category, student.toefl) {
        (Category::Domestic, _) => line.push_str(" D"),
        (Category::International, Some(score)) => {
            line.push_str(&format!(" {} I", score));
        }
        (Category::International, None) => line.push_str(" I"),
    }
    line
}

/// Write the filtered report; the sole writer of the output artifact.
///
/// Fails fast if the destination cannot be created. Returns the number of
/// records emitted.
pub fn write_report(
    path: &Path,
    students: &[Student],
    mode: ReportMode,
) -> Result<usize, RosterError> {
    let mut file = File::create(path)?;

    let mut count = 0;
    for student in filter(students, mode) {
        writeln!(file, "{}", format_record(student))?;
        count += 1;
    }

    info!("wrote {} record(s) to {}", count, path.display());
    Ok(count)
}
