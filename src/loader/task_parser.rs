use std::fs;

use crate::domain::task::Task;
use crate::domain::utils::id::TaskId;
use crate::error::{LoadError, Result};

/// Reads and parses a task list file. See [`parse_tasks`] for the format.
pub fn load_tasks_from_file(file_path: &str) -> Result<Vec<Task>> {
    let data = fs::read_to_string(file_path)?;
    let tasks = parse_tasks(&data)?;

    log::info!("Loaded {} task(s) from '{}'.", tasks.len(), file_path);
    Ok(tasks)
}

/// Parses a task list.
///
/// The first non-empty line holds the task count N, the next N non-empty lines hold
/// `creation_time execution_time priority`. Tasks are named "T1".."TN" in file
/// order; anything after the N-th task line is ignored.
pub fn parse_tasks(input: &str) -> std::result::Result<Vec<Task>, LoadError> {
    let mut lines = input.lines().enumerate().map(|(index, line)| (index + 1, line.trim()));

    let (count_line_number, count_line) = lines.find(|(_, line)| !line.is_empty()).ok_or(LoadError::MissingTaskCount)?;
    let expected: usize = count_line
        .parse()
        .map_err(|_| LoadError::InvalidTaskCount { line: count_line_number, value: count_line.to_string() })?;

    // Grows with the lines actually read, never with the announced count.
    let mut tasks = Vec::new();
    for (line_number, line) in lines.filter(|(_, line)| !line.is_empty()).take(expected) {
        tasks.push(parse_task_line(line_number, line, tasks.len() + 1)?);
    }

    if tasks.len() < expected {
        return Err(LoadError::MissingTaskLine { expected, found: tasks.len() });
    }

    Ok(tasks)
}

fn parse_task_line(line_number: usize, line: &str, load_index: usize) -> std::result::Result<Task, LoadError> {
    let fields = line
        .split_whitespace()
        .map(|field| {
            field.parse::<i64>().map_err(|_| LoadError::MalformedTaskLine {
                line: line_number,
                reason: format!("'{}' is not an integer", field),
            })
        })
        .collect::<std::result::Result<Vec<i64>, LoadError>>()?;

    let [creation_time, execution_time, priority] = fields[..] else {
        return Err(LoadError::MalformedTaskLine {
            line: line_number,
            reason: format!("expected 3 fields (creation time, execution time, priority), found {}", fields.len()),
        });
    };

    let creation_time = positive(line_number, "creation time", creation_time)?;
    let execution_time = positive(line_number, "execution time", execution_time)?;

    Ok(Task::new(TaskId::from_load_index(load_index), creation_time, execution_time, priority))
}

fn positive(line: usize, field: &'static str, value: i64) -> std::result::Result<u64, LoadError> {
    if value < 1 {
        return Err(LoadError::InvalidTaskField { line, field, value });
    }
    Ok(value as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_tasks_in_file_order() {
        let tasks = parse_tasks("3\n1 2 1\n1 1 2\n4 3 -1\n").unwrap();

        let summary: Vec<(String, u64, u64, i64)> =
            tasks.iter().map(|t| (t.id().to_string(), t.creation_time(), t.execution_time(), t.priority())).collect();
        assert_eq!(
            summary,
            vec![("T1".to_string(), 1, 2, 1), ("T2".to_string(), 1, 1, 2), ("T3".to_string(), 4, 3, -1)]
        );
        assert!(tasks.iter().all(|t| t.remaining_time() == t.execution_time()));
    }

    #[test]
    fn test_tolerates_extra_whitespace_and_trailing_lines() {
        let tasks = parse_tasks("  2 \n1   5  3\n\n2\t1\t1\n9 9 9\n").unwrap();
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].execution_time(), 1);
    }

    #[test]
    fn test_zero_tasks_is_valid() {
        assert!(parse_tasks("0\n").unwrap().is_empty());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert_eq!(parse_tasks(""), Err(LoadError::MissingTaskCount));
        assert_eq!(parse_tasks("\n  \n"), Err(LoadError::MissingTaskCount));
    }

    #[test]
    fn test_invalid_task_count_is_rejected() {
        assert_eq!(parse_tasks("two\n"), Err(LoadError::InvalidTaskCount { line: 1, value: "two".to_string() }));
        assert_eq!(parse_tasks("-1\n"), Err(LoadError::InvalidTaskCount { line: 1, value: "-1".to_string() }));
    }

    #[test]
    fn test_invalid_task_count_names_its_actual_line() {
        assert_eq!(parse_tasks("\n\n 3x \n"), Err(LoadError::InvalidTaskCount { line: 3, value: "3x".to_string() }));
    }

    #[test]
    fn test_huge_task_count_reports_missing_lines() {
        assert_eq!(
            parse_tasks("100000000000\n1 1 1\n"),
            Err(LoadError::MissingTaskLine { expected: 100_000_000_000, found: 1 })
        );
        assert_eq!(
            parse_tasks(&format!("{}\n1 1 1\n", usize::MAX)),
            Err(LoadError::MissingTaskLine { expected: usize::MAX, found: 1 })
        );
    }

    #[test]
    fn test_missing_task_lines_are_rejected() {
        assert_eq!(parse_tasks("3\n1 1 1\n2 2 2\n"), Err(LoadError::MissingTaskLine { expected: 3, found: 2 }));
    }

    #[test]
    fn test_malformed_lines_name_the_file_line() {
        assert!(matches!(parse_tasks("2\n1 1 1\n1 x 1\n"), Err(LoadError::MalformedTaskLine { line: 3, .. })));
        assert!(matches!(parse_tasks("1\n1 1\n"), Err(LoadError::MalformedTaskLine { line: 2, .. })));
        assert!(matches!(parse_tasks("1\n1 1 1 1\n"), Err(LoadError::MalformedTaskLine { line: 2, .. })));
    }

    #[test]
    fn test_non_positive_times_are_rejected() {
        assert_eq!(
            parse_tasks("1\n0 1 1\n"),
            Err(LoadError::InvalidTaskField { line: 2, field: "creation time", value: 0 })
        );
        assert_eq!(
            parse_tasks("1\n1 -3 1\n"),
            Err(LoadError::InvalidTaskField { line: 2, field: "execution time", value: -3 })
        );
    }
}
