//! Built-in static catalogs
//!
//! The problems and fixtures shipped with the application. These stand in
//! for an external data source; the gateway only ever sees them through
//! the provider traits.

use crate::constants::languages;
use crate::models::{Difficulty, Problem, TestCase};

use super::{FixtureProvider, ProblemCatalog};

/// In-memory problem catalog seeded with the built-in practice problems
pub struct StaticProblemCatalog {
    problems: Vec<Problem>,
}

impl StaticProblemCatalog {
    pub fn new() -> Self {
        Self {
            problems: builtin_problems(),
        }
    }
}

impl Default for StaticProblemCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProblemCatalog for StaticProblemCatalog {
    fn list(&self) -> &[Problem] {
        &self.problems
    }
}

/// In-memory fixture battery for the batch evaluation mode
pub struct StaticFixtureProvider {
    fixtures: Vec<TestCase>,
}

impl StaticFixtureProvider {
    pub fn new() -> Self {
        Self {
            fixtures: vec![
                TestCase::new("5 7", "Sum = 12"),
                TestCase::new("-3 5", "Sum = 2"),
                TestCase::new("0 0", "Sum = 0"),
            ],
        }
    }
}

impl Default for StaticFixtureProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FixtureProvider for StaticFixtureProvider {
    fn fixtures(&self) -> &[TestCase] {
        &self.fixtures
    }
}

/// Starter code shown in the editor for a given language tag
///
/// Unknown tags get the JavaScript template, mirroring the execution
/// fallback.
pub fn starter_template(language: &str) -> &'static str {
    match language {
        languages::PYTHON => "def sum(a, b):\n    # Write your code here\n    return a + b",
        languages::JAVA => {
            "public class Solution {\n    public static int sum(int a, int b) {\n        // Write your code here\n        return a + b;\n    }\n}"
        }
        languages::CPP => {
            "#include <iostream>\nusing namespace std;\n\nint sum(int a, int b) {\n    // Write your code here\n    return a + b;\n}"
        }
        languages::C => {
            "#include <stdio.h>\n\nint sum(int a, int b) {\n    // Write your code here\n    return a + b;\n}"
        }
        _ => "function sum(a, b) {\n    // Write your code here\n    return a + b;\n}",
    }
}

fn builtin_problems() -> Vec<Problem> {
    vec![
        Problem {
            id: 1,
            title: "Sum of Two Numbers".to_string(),
            difficulty: Difficulty::Easy,
            description: "Read two integers from standard input and print their sum in the \
                          format shown below."
                .to_string(),
            input_format: "A single line with two space-separated integers a and b.".to_string(),
            output_format: "A single line: Sum = <a + b>".to_string(),
            sample_input: "5 7".to_string(),
            sample_output: "Sum = 12".to_string(),
            acceptance: Some("87%".to_string()),
            options: None,
        },
        Problem {
            id: 2,
            title: "Maximum of Three".to_string(),
            difficulty: Difficulty::Easy,
            description: "Read three integers and print the largest of them.".to_string(),
            input_format: "A single line with three space-separated integers.".to_string(),
            output_format: "A single line: Max = <largest>".to_string(),
            sample_input: "4 9 2".to_string(),
            sample_output: "Max = 9".to_string(),
            acceptance: Some("74%".to_string()),
            options: None,
        },
        Problem {
            id: 3,
            title: "Predict the Output".to_string(),
            difficulty: Difficulty::Medium,
            description: "Given the sample program below, pick the line it prints for the \
                          sample input."
                .to_string(),
            input_format: "A single line with two space-separated integers.".to_string(),
            output_format: "A single line: Sum = <a + b>".to_string(),
            sample_input: "3 5".to_string(),
            sample_output: "Sum = 8".to_string(),
            acceptance: Some("61%".to_string()),
            options: Some(vec![
                "Sum = 8".to_string(),
                "Sum = 35".to_string(),
                "Sum = 15".to_string(),
            ]),
        },
    ]
}
