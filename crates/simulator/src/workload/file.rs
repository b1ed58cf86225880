//! Tab-separated job files.
//!
//! One job per line: `name<TAB>service time<TAB>block probability`.
//! Checks run in a fixed order and the first failure rejects the file.

use procsim_types::{BlockProbability, JobDescriptor, JobName, MAX_JOB_NAME_LEN};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Longest accepted probability literal, e.g. `0.87`.
const MAX_PROBABILITY_LEN: usize = 4;

/// A rejected job file.
///
/// Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Wrong number of fields, or a field with the wrong shape.
    #[error("Malformed line {file}({line})")]
    Malformed { file: String, line: usize },

    /// Name has ten or more characters.
    #[error("name is too long {file}({line})")]
    NameTooLong { file: String, line: usize },

    /// Service time is negative.
    #[error("runtime is not positive integer {file}({line})")]
    NegativeServiceTime { file: String, line: usize },

    /// Probability above one.
    #[error("probability < 0 or > 1 {file}({line})")]
    ProbabilityOutOfRange { file: String, line: usize },

    /// The file could not be read.
    #[error("{file}: {error}")]
    Io {
        file: String,
        #[source]
        error: std::io::Error,
    },
}

/// Read and parse the job file at `path`.
pub fn load_jobs(path: &Path) -> Result<Vec<JobDescriptor>, DescriptorError> {
    let file = path.display().to_string();
    let contents = std::fs::read_to_string(path).map_err(|error| DescriptorError::Io {
        file: file.clone(),
        error,
    })?;
    let jobs = parse_jobs(&file, &contents)?;
    info!(file = %file, jobs = jobs.len(), "Loaded job file");
    Ok(jobs)
}

/// Parse job file contents. `file` names the source in error messages.
pub fn parse_jobs(file: &str, contents: &str) -> Result<Vec<JobDescriptor>, DescriptorError> {
    contents
        .lines()
        .enumerate()
        .map(|(index, line)| parse_line(line).map_err(|kind| kind.at(file, index + 1)))
        .collect()
}

/// A line rejection before the file position is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineError {
    Malformed,
    NameTooLong,
    NegativeServiceTime,
    ProbabilityOutOfRange,
}

impl LineError {
    fn at(self, file: &str, line: usize) -> DescriptorError {
        let file = file.to_string();
        match self {
            LineError::Malformed => DescriptorError::Malformed { file, line },
            LineError::NameTooLong => DescriptorError::NameTooLong { file, line },
            LineError::NegativeServiceTime => DescriptorError::NegativeServiceTime { file, line },
            LineError::ProbabilityOutOfRange => {
                DescriptorError::ProbabilityOutOfRange { file, line }
            }
        }
    }
}

fn parse_line(line: &str) -> Result<JobDescriptor, LineError> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    // Runs of tabs separate a single pair of fields.
    let fields: Vec<&str> = line.split('\t').filter(|f| !f.is_empty()).collect();
    let [name, service, probability] = fields[..] else {
        return Err(LineError::Malformed);
    };

    if name.chars().count() >= MAX_JOB_NAME_LEN {
        return Err(LineError::NameTooLong);
    }
    let name = JobName::new(name).map_err(|_| LineError::NameTooLong)?;

    let total_service_time = parse_service_time(service)?;
    let block_probability = parse_probability(probability)?;

    debug!(
        name = %name,
        service = total_service_time,
        probability = %block_probability,
        "Parsed job"
    );

    Ok(JobDescriptor::new(name, total_service_time, block_probability))
}

/// An optional leading `-` followed by digits.
fn parse_service_time(field: &str) -> Result<u32, LineError> {
    let digits = field.strip_prefix('-').unwrap_or(field);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LineError::Malformed);
    }
    if field.starts_with('-') && digits.bytes().any(|b| b != b'0') {
        return Err(LineError::NegativeServiceTime);
    }
    digits.parse().map_err(|_| LineError::Malformed)
}

/// A digit, optionally followed by `.` and up to two more digits.
fn parse_probability(field: &str) -> Result<BlockProbability, LineError> {
    let bytes = field.as_bytes();
    let well_formed = bytes.len() <= MAX_PROBABILITY_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            1 => *b == b'.',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(LineError::Malformed);
    }

    let value: f64 = field.parse().map_err(|_| LineError::Malformed)?;
    BlockProbability::from_fraction(value).map_err(|_| LineError::ProbabilityOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(line: &str) -> Result<JobDescriptor, LineError> {
        parse_line(line)
    }

    #[test]
    fn test_parse_sample_file() {
        let contents = "editor\t5\t0.87\ncompiler\t40\t0.53\nadventure\t30\t0.72\n";
        let jobs = parse_jobs("jobs.txt", contents).unwrap();

        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].name.as_str(), "editor");
        assert_eq!(jobs[0].total_service_time, 5);
        assert_eq!(jobs[0].block_probability.percent(), 87);
        assert_eq!(jobs[1].name.as_str(), "compiler");
        assert_eq!(jobs[1].total_service_time, 40);
        assert_eq!(jobs[1].block_probability.percent(), 53);
        assert_eq!(jobs[2].name.as_str(), "adventure");
        assert_eq!(jobs[2].block_probability.percent(), 72);
    }

    #[test]
    fn test_crlf_and_repeated_tabs() {
        let job = parse_one("editor\t\t5\t0.5\r").unwrap();
        assert_eq!(job.total_service_time, 5);
        assert_eq!(job.block_probability.percent(), 50);
    }

    #[test]
    fn test_probability_shapes() {
        assert_eq!(parse_one("a\t1\t1").unwrap().block_probability.percent(), 100);
        assert_eq!(parse_one("a\t1\t0").unwrap().block_probability.percent(), 0);
        assert_eq!(parse_one("a\t1\t0.").unwrap().block_probability.percent(), 0);
        assert_eq!(parse_one("a\t1\t0.05").unwrap().block_probability.percent(), 5);
        assert_eq!(parse_one("a\t1\t1.00").unwrap().block_probability.percent(), 100);

        assert_eq!(parse_one("a\t1\t.5"), Err(LineError::Malformed));
        assert_eq!(parse_one("a\t1\t0.125"), Err(LineError::Malformed));
        assert_eq!(parse_one("a\t1\t0,5"), Err(LineError::Malformed));
        assert_eq!(parse_one("a\t1\t-0.5"), Err(LineError::Malformed));
        assert_eq!(parse_one("a\t1\t1.5"), Err(LineError::ProbabilityOutOfRange));
        assert_eq!(parse_one("a\t1\t9"), Err(LineError::ProbabilityOutOfRange));
    }

    #[test]
    fn test_service_time_shapes() {
        assert_eq!(parse_one("a\t0\t0").unwrap().total_service_time, 0);
        assert_eq!(parse_one("a\t007\t0").unwrap().total_service_time, 7);
        assert_eq!(parse_one("a\t-0\t0").unwrap().total_service_time, 0);

        assert_eq!(parse_one("a\t-3\t0"), Err(LineError::NegativeServiceTime));
        assert_eq!(parse_one("a\t3s\t0"), Err(LineError::Malformed));
        assert_eq!(parse_one("a\t+3\t0"), Err(LineError::Malformed));
        assert_eq!(parse_one("a\t-\t0"), Err(LineError::Malformed));
        assert_eq!(parse_one("a\t99999999999\t0"), Err(LineError::Malformed));
    }

    #[test]
    fn test_field_count() {
        assert_eq!(parse_one(""), Err(LineError::Malformed));
        assert_eq!(parse_one("a\t1"), Err(LineError::Malformed));
        assert_eq!(parse_one("a\t1\t0.5\textra"), Err(LineError::Malformed));
        assert_eq!(parse_one("a 1 0.5"), Err(LineError::Malformed));
    }

    #[test]
    fn test_name_length_limit() {
        assert!(parse_one("ninechars\t1\t0").is_ok());
        assert_eq!(parse_one("tencharsxx\t1\t0"), Err(LineError::NameTooLong));
    }

    #[test]
    fn test_name_checked_before_service_time() {
        assert_eq!(parse_one("tencharsxx\t-1\t7"), Err(LineError::NameTooLong));
        assert_eq!(parse_one("a\t-1\t7"), Err(LineError::NegativeServiceTime));
    }

    #[test]
    fn test_error_reports_line_number() {
        let contents = "editor\t5\t0.87\ncompiler\t-40\t0.53\n";
        let err = parse_jobs("jobs.txt", contents).unwrap_err();

        assert!(matches!(
            err,
            DescriptorError::NegativeServiceTime { ref file, line: 2 } if file == "jobs.txt"
        ));
        assert_eq!(err.to_string(), "runtime is not positive integer jobs.txt(2)");
    }

    #[test]
    fn test_empty_file_has_no_jobs() {
        assert!(parse_jobs("empty.txt", "").unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = load_jobs(Path::new("/nonexistent/procsim/jobs.txt")).unwrap_err();
        assert!(matches!(err, DescriptorError::Io { .. }));
    }
}
