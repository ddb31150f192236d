// ABOUTME: Line highlight composition for code blocks
// ABOUTME: Encodes reveal steps into the runtime's data-line-numbers syntax

use std::ops::{Add, BitAnd, RangeInclusive};

/// The lines emphasised together in a single reveal step.
///
/// ```ignore
/// let steps = (Lines::of(&[4]) & Lines::range(8..=10)) + Lines::of(&[15]);
/// assert_eq!(steps.to_attribute(), "|4,8-10|15");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lines {
    ranges: Vec<RangeInclusive<u32>>,
}

impl Lines {
    /// Individual lines, each becoming its own single-line range.
    pub fn of(lines: &[u32]) -> Self {
        Self {
            ranges: lines.iter().map(|&line| line..=line).collect(),
        }
    }

    /// A contiguous block of lines.
    pub fn range(range: RangeInclusive<u32>) -> Self {
        Self {
            ranges: vec![range],
        }
    }

    /// Highlight both sets in the same step.
    pub fn and(mut self, other: Lines) -> Self {
        self.ranges.extend(other.ranges);
        self
    }

    /// Start a second step after this one.
    pub fn then(self, other: Lines) -> HighlightSteps {
        HighlightSteps {
            steps: vec![self, other],
        }
    }

    fn to_segment(&self) -> String {
        self.ranges
            .iter()
            .map(|range| {
                if range.start() == range.end() {
                    range.start().to_string()
                } else {
                    format!("{}-{}", range.start(), range.end())
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl From<RangeInclusive<u32>> for Lines {
    fn from(range: RangeInclusive<u32>) -> Self {
        Lines::range(range)
    }
}

impl BitAnd for Lines {
    type Output = Lines;

    fn bitand(self, rhs: Lines) -> Lines {
        self.and(rhs)
    }
}

impl Add for Lines {
    type Output = HighlightSteps;

    fn add(self, rhs: Lines) -> HighlightSteps {
        self.then(rhs)
    }
}

/// Ordered reveal steps for a code block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HighlightSteps {
    steps: Vec<Lines>,
}

impl HighlightSteps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, lines: Lines) -> Self {
        self.steps.push(lines);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Encode as `|a,b-c|d`. An empty composition encodes to the empty string.
    pub fn to_attribute(&self) -> String {
        if self.steps.is_empty() {
            return String::new();
        }
        let mut encoded = String::new();
        for step in &self.steps {
            encoded.push('|');
            encoded.push_str(&step.to_segment());
        }
        encoded
    }
}

impl From<Lines> for HighlightSteps {
    fn from(lines: Lines) -> Self {
        HighlightSteps { steps: vec![lines] }
    }
}

impl Add<Lines> for HighlightSteps {
    type Output = HighlightSteps;

    fn add(self, rhs: Lines) -> HighlightSteps {
        self.then(rhs)
    }
}

impl Add for HighlightSteps {
    type Output = HighlightSteps;

    fn add(mut self, rhs: HighlightSteps) -> HighlightSteps {
        self.steps.extend(rhs.steps);
        self
    }
}
