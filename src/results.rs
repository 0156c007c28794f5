use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Outcome of a keyword audit over every result page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordAudit {
    /// Keyword every title was tested for
    pub keyword: String,

    /// Page count read before the traversal started (`None` if unavailable)
    pub pages_expected: Option<u32>,

    /// Number of pages whose titles were read
    pub pages_audited: u32,

    /// Number of titles read across all pages
    pub titles_checked: usize,

    /// Titles lacking the keyword, in page-then-item order
    pub missing_titles: Vec<String>,
}

impl KeywordAudit {
    /// Whether the traversal actually covered a known, non-zero number of pages.
    ///
    /// An empty `missing_titles` only means "no violations" when this holds.
    pub fn is_conclusive(&self) -> bool {
        matches!(self.pages_expected, Some(n) if n > 0 && n == self.pages_audited)
    }

    pub fn passed(&self) -> bool {
        self.is_conclusive() && self.missing_titles.is_empty()
    }
}

/// Result of probing for an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    /// Present and displayed
    Displayed,
    /// Present in the page but not displayed
    Hidden,
    /// Not found
    Absent,
}

impl Presence {
    pub fn is_displayed(self) -> bool {
        self == Presence::Displayed
    }
}

/// One soft assertion recorded by a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub description: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

/// Checks recorded by one scenario run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario name
    pub name: String,

    pub checks: Vec<Check>,

    /// Error that ended the scenario early
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScenarioReport {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Records whether `actual` equals `expected` and keeps going either way
    pub fn check_eq<T: PartialEq + Debug>(&mut self, description: &str, expected: T, actual: T) {
        let passed = expected == actual;
        if passed {
            ::log::info!("PASS: {}", description);
        } else {
            ::log::error!(
                "FAIL: {} (expected {:?}, got {:?})",
                description,
                expected,
                actual
            );
        }

        self.checks.push(Check {
            description: description.to_string(),
            passed,
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        });
    }

    /// Whether every check passed and the scenario ran to the end
    pub fn passed(&self) -> bool {
        self.error.is_none() && self.checks.iter().all(|c| c.passed)
    }
}
