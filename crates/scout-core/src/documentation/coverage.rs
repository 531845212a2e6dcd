//! Documentation coverage scoring

use serde::{Deserialize, Serialize};
use std::fmt;

const README_POINTS: f64 = 30.0;
const DOC_FILE_POINTS: f64 = 30.0;
const COMMENT_POINTS: f64 = 40.0;
/// Comment ratio at which the comment bonus saturates (one comment per five lines)
const COMMENT_RATIO_SATURATION: f64 = 0.2;

/// Bucketed coverage score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl CoverageLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=24 => Self::Poor,
            25..=49 => Self::Fair,
            50..=74 => Self::Good,
            _ => Self::Excellent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

impl fmt::Display for CoverageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Documentation coverage of a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    /// 0 to 100
    pub score: u8,
    pub level: CoverageLevel,
    pub has_readme: bool,
    pub doc_file_count: usize,
    /// Comments per line of sampled source code
    pub comment_ratio: f64,
}

impl Default for Coverage {
    fn default() -> Self {
        compute_coverage(false, 0, 0.0)
    }
}

/// Weighted score: README bonus, diminishing doc file bonus, comment ratio
pub fn compute_coverage(has_readme: bool, doc_file_count: usize, comment_ratio: f64) -> Coverage {
    let readme = if has_readme { README_POINTS } else { 0.0 };
    let exponent = i32::try_from(doc_file_count).unwrap_or(i32::MAX);
    let docs = DOC_FILE_POINTS * (1.0 - 0.5_f64.powi(exponent));
    let comments = (comment_ratio.max(0.0) / COMMENT_RATIO_SATURATION * COMMENT_POINTS)
        .min(COMMENT_POINTS);

    let score = (readme + docs + comments).round().clamp(0.0, 100.0) as u8;
    let level = if !has_readme && doc_file_count == 0 {
        CoverageLevel::Poor
    } else {
        CoverageLevel::from_score(score)
    };

    Coverage {
        score,
        level,
        has_readme,
        doc_file_count,
        comment_ratio,
    }
}
