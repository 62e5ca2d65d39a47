use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;

use crate::models::StudentRecord;

/// Fixed CSV column order
pub const CSV_HEADERS: [&str; 9] = [
    "Name",
    "Email",
    "Phone",
    "Institution",
    "Course",
    "Level",
    "Track",
    "Skills",
    "LinkedIn",
];

/// Write the filtered roster as CSV.
///
/// Every field is double-quoted; missing course/level render as "N/A" while
/// missing skills/linkedin render as empty strings.
pub fn write_csv<W: Write>(students: &[&StudentRecord], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(out);

    writer.write_record(CSV_HEADERS)?;
    for student in students {
        writer.write_record([
            student.name.as_str(),
            student.email.as_str(),
            student.phone.as_str(),
            student.institution.as_str(),
            student.course.as_deref().unwrap_or("N/A"),
            student.level.as_deref().unwrap_or("N/A"),
            student.track.as_str(),
            student.skills.as_deref().unwrap_or(""),
            student.linkedin.as_deref().unwrap_or(""),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Date-stamped export filename, e.g. `students_2026-08-07.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!("students_{}.csv", date.format("%Y-%m-%d"))
}

/// Write the export into `dir`, returning the file path
pub fn export_to_dir(students: &[&StudentRecord], dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let path = dir.join(export_filename(date));
    let file = std::fs::File::create(&path)?;
    write_csv(students, file)?;
    info!("Exported {} students to {}", students.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Track;
    use pretty_assertions::assert_eq;

    fn student(name: &str, course: Option<&str>, skills: Option<&str>) -> StudentRecord {
        StudentRecord {
            id: format!("id-{name}"),
            name: name.to_string(),
            email: format!("{name}@example.com"),
            phone: "0801".to_string(),
            course: course.map(String::from),
            level: None,
            track: Track::CyberSecurity,
            institution: "UNILAG".to_string(),
            location: None,
            resume_url: None,
            skills: skills.map(String::from),
            linkedin: None,
        }
    }

    #[test]
    fn test_csv_has_header_plus_one_row_per_student() {
        let a = student("Ada", Some("Computer Science"), Some("Rust, SQL"));
        let b = student("Bola", None, None);
        let rows = vec![&a, &b];

        let mut buffer = Vec::new();
        write_csv(&rows, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "\"Name\",\"Email\",\"Phone\",\"Institution\",\"Course\",\"Level\",\"Track\",\"Skills\",\"LinkedIn\""
        );
    }

    #[test]
    fn test_missing_fields_render_na_or_empty() {
        let b = student("Bola", None, None);
        let rows = vec![&b];

        let mut buffer = Vec::new();
        write_csv(&rows, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        // Course and Level fall back to "N/A"; Skills and LinkedIn stay empty
        assert_eq!(
            text.lines().nth(1).unwrap(),
            "\"Bola\",\"Bola@example.com\",\"0801\",\"UNILAG\",\"N/A\",\"N/A\",\"Cyber Security\",\"\",\"\""
        );
    }

    #[test]
    fn test_fields_containing_quotes_and_commas_stay_escaped() {
        let mut tricky = student("Ada", Some("Maths, Stats"), None);
        tricky.name = "Ada \"The Compiler\" Obi".to_string();
        let rows = vec![&tricky];

        let mut buffer = Vec::new();
        write_csv(&rows, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], "Ada \"The Compiler\" Obi");
        assert_eq!(&record[4], "Maths, Stats");
    }

    #[test]
    fn test_export_filename_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(export_filename(date), "students_2026-08-07.csv");
    }

    #[test]
    fn test_export_to_dir_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let a = student("Ada", None, None);
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();

        let path = export_to_dir(&[&a], dir.path(), date).unwrap();
        assert!(path.ends_with("students_2026-08-07.csv"));

        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
