use std::{fs, path::Path};

use regex::Regex;

use super::err::RosterError;
use super::student::{Category, Student};

// <fname> <lname> <Mon-dd-yyyy> <gpa> <D|I [toefl]>
const LINE_PATTERN: &str =
    r"^\s*(\S+)\s+(\S+)\s+([A-Za-z]{3})-(\d{1,2})-(\d+)\s+(\d+(?:\.\d+)?)\s+([DI])(?:\s+(\d+))?\s*$";

/// Read the roster file and parse every non-blank line into a [`Student`].
///
/// Any line that does not match the record format aborts the load with its
/// 1-based line number; no partial record is returned.
pub fn load_students(path: &Path) -> Result<Vec<Student>, RosterError> {
    let text = fs::read_to_string(path)?;
    let re = Regex::new(LINE_PATTERN)?;

    let mut students = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        students.push(parse_line(&re, idx + 1, line)?);
    }
    Ok(students)
}

fn parse_line(re: &Regex, line_no: usize, line: &str) -> Result<Student, RosterError> {
    let malformed = || RosterError::MalformedRecord {
        line: line_no,
        text: line.to_string(),
    };

    let captures = re.captures(line).ok_or_else(malformed)?;

    let first_name = captures[1].to_string();
    let last_name = captures[2].to_string();
    let birth_month = captures[3].to_string();
    let birth_day: u32 = captures[4].parse().map_err(|_| malformed())?;
    let birth_year: i32 = captures[5].parse().map_err(|_| malformed())?;
    let gpa: f64 = captures[6].parse().map_err(|_| malformed())?;
    let toefl = match captures.get(8) {
        Some(score) => Some(score.as_str().parse::<u32>().map_err(|_| malformed())?),
        None => None,
    };

    let (category, toefl) = match &captures[7] {
        // a domestic record must not carry a score
        "D" if toefl.is_some() => return Err(malformed()),
        "D" => (Category::Domestic, None),
        // an international record missing its score keeps the sentinel
        _ => (Category::International, toefl),
    };

    Ok(Student::new(
        first_name,
        last_name,
        birth_month,
        birth_day,
        birth_year,
        gpa,
        category,
        toefl,
    ))
}
