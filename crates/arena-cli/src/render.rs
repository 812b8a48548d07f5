//! Terminal rendering for gateway responses

use std::fmt::Write;
use std::time::Duration;

use crate::api::{BatchReport, ExecutionResult, Problem, ProblemDetail};

/// Status sentinel for a successful run
const ACCEPTED: &str = "Accepted";

/// Marker shown for a passing result
const PASS_MARK: &str = "✓";

/// Marker shown for a failing result
const FAIL_MARK: &str = "✗";

/// Render a single execution result
///
/// The result line is marked passing only when the status equals the
/// "Accepted" sentinel.
pub fn execution(result: &ExecutionResult) -> String {
    let mark = if result.status == ACCEPTED {
        PASS_MARK
    } else {
        FAIL_MARK
    };

    let mut out = String::new();
    writeln!(out, "{mark} Status: {}", result.status).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Output:").unwrap();
    writeln!(out, "{}", result.output.as_deref().unwrap_or("(no output)")).unwrap();
    writeln!(
        out,
        "Time: {}s",
        result
            .time
            .map(|t| t.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    )
    .unwrap();
    writeln!(
        out,
        "Memory: {}KB",
        result
            .memory
            .map(|m| m.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    )
    .unwrap();
    out
}

/// Render a batch report as a per-fixture table plus the aggregate score
pub fn batch(report: &BatchReport) -> String {
    let mut out = String::new();

    for (i, result) in report.test_results.iter().enumerate() {
        let mark = if result.passed { PASS_MARK } else { FAIL_MARK };
        let got = result
            .output
            .as_deref()
            .map(str::trim)
            .or(result.error.as_deref())
            .unwrap_or("(no output)");
        writeln!(
            out,
            "{mark} [{}/{}] input: {:<8} expected: {:<10} got: {}",
            i + 1,
            report.total,
            result.input,
            result.expected,
            got
        )
        .unwrap();
    }

    writeln!(out).unwrap();
    writeln!(
        out,
        "Score: {}% ({}/{} passed)",
        report.score, report.passed, report.total
    )
    .unwrap();
    out
}

/// Render the problem catalog listing
pub fn problem_list(problems: &[Problem]) -> String {
    let mut out = String::new();
    for problem in problems {
        let acceptance = problem.acceptance.as_deref().unwrap_or("-");
        writeln!(
            out,
            "{:>3}  [{:<6}] {:<28} acceptance: {}",
            problem.id, problem.difficulty, problem.title, acceptance
        )
        .unwrap();
    }
    out
}

/// Render one problem with its sample IO and starter code
pub fn problem_detail(detail: &ProblemDetail, language: &str) -> String {
    let problem = &detail.problem;
    let mut out = String::new();

    writeln!(out, "#{} {} [{}]", problem.id, problem.title, problem.difficulty).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "{}", problem.description).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Sample input:  {}", problem.sample_input).unwrap();
    writeln!(out, "Sample output: {}", problem.sample_output).unwrap();

    if let Some(template) = detail.templates.get(language) {
        writeln!(out).unwrap();
        writeln!(out, "Starter code ({language}):").unwrap();
        writeln!(out, "{template}").unwrap();
    }

    out
}

/// Render the typing-time display metric
pub fn typing_time(elapsed: &Duration) -> String {
    format!("Typing time: {:.1}s", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: &str) -> ExecutionResult {
        ExecutionResult {
            status: status.to_string(),
            output: Some("Sum = 8".to_string()),
            time: Some(0.002),
            memory: Some(3072.0),
        }
    }

    #[test]
    fn test_accepted_result_is_marked_passing() {
        let rendered = execution(&result("Accepted"));
        assert!(rendered.starts_with(PASS_MARK));
        assert!(rendered.contains("Status: Accepted"));
        assert!(rendered.contains("Sum = 8"));
    }

    #[test]
    fn test_non_accepted_result_is_marked_failing() {
        let rendered = execution(&result("Wrong Answer"));
        assert!(rendered.starts_with(FAIL_MARK));
        assert!(!rendered.starts_with(PASS_MARK));
    }

    #[test]
    fn test_batch_rendering_shows_score() {
        use crate::api::FixtureOutcome;

        let report = BatchReport {
            test_results: vec![
                FixtureOutcome {
                    input: "5 7".to_string(),
                    expected: "Sum = 12".to_string(),
                    output: Some("Sum = 12\n".to_string()),
                    passed: true,
                    time: Some(0.002),
                    error: None,
                },
                FixtureOutcome {
                    input: "0 0".to_string(),
                    expected: "Sum = 0".to_string(),
                    output: None,
                    passed: false,
                    time: None,
                    error: Some("Execution failed".to_string()),
                },
            ],
            score: 50,
            passed: 1,
            total: 2,
        };

        let rendered = batch(&report);
        assert!(rendered.contains("Score: 50% (1/2 passed)"));
        assert!(rendered.contains(PASS_MARK));
        assert!(rendered.contains(FAIL_MARK));
        assert!(rendered.contains("Execution failed"));
    }

    #[test]
    fn test_typing_time_format() {
        assert_eq!(
            typing_time(&Duration::from_millis(12_340)),
            "Typing time: 12.3s"
        );
    }
}
