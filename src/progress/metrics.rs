use serde::{Deserialize, Serialize};

use crate::progress::{CourseStatus, ProgressRecord};

const POINTS_PER_COMPLETION: usize = 20;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Insight {
    StartFirstCourse,
    GoodStart,
    BuildingMomentum,
    ExcellentConsistency,
}

impl Insight {
    pub fn message(&self) -> &'static str {
        match self {
            Self::StartFirstCourse => {
                "Start your first recommended course to begin building your skill score."
            }
            Self::GoodStart => "Good start! Completing a few more courses will lift your skill score.",
            Self::BuildingMomentum => {
                "You are building momentum. Keep a steady pace to reach the next level."
            }
            Self::ExcellentConsistency => {
                "Excellent consistency! Your learning record shows strong follow-through."
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Metrics {
    pub completed_count: usize,
    pub started_count: usize,
    pub total_tracked: usize,
    pub completion_percent: u32,
    pub skill_score: usize,
    pub insight: Insight,
}

impl Metrics {
    pub fn insight_message(&self) -> &'static str {
        self.insight.message()
    }
}

pub fn compute_metrics(record: &ProgressRecord) -> Metrics {
    let completed_count = record.count(CourseStatus::Completed);
    let started_count = record.count(CourseStatus::Started);
    let total_tracked = record.len();
    let completion_percent = if total_tracked == 0 {
        0
    } else {
        (completed_count as f64 / total_tracked as f64 * 100.0).round() as u32
    };
    let skill_score = completed_count * POINTS_PER_COMPLETION;

    let insight = if completed_count == 0 {
        Insight::StartFirstCourse
    } else if skill_score < 40 {
        Insight::GoodStart
    } else if skill_score < 80 {
        Insight::BuildingMomentum
    } else {
        Insight::ExcellentConsistency
    };

    Metrics {
        completed_count,
        started_count,
        total_tracked,
        completion_percent,
        skill_score,
        insight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::CourseId;

    fn record_with(completed: usize, started: usize) -> ProgressRecord {
        let mut record = ProgressRecord::new();
        for i in 0..completed {
            record.set(CourseId::from_title(&format!("done {i}")), CourseStatus::Completed);
        }
        for i in 0..started {
            record.set(CourseId::from_title(&format!("open {i}")), CourseStatus::Started);
        }
        record
    }

    #[test]
    fn empty_record_yields_zeroes_and_start_insight() {
        let metrics = compute_metrics(&ProgressRecord::new());
        assert_eq!(metrics.completion_percent, 0);
        assert_eq!(metrics.skill_score, 0);
        assert_eq!(metrics.completed_count, 0);
        assert_eq!(metrics.started_count, 0);
        assert_eq!(metrics.total_tracked, 0);
        assert_eq!(metrics.insight, Insight::StartFirstCourse);
    }

    #[test]
    fn percent_rounds_to_nearest() {
        let metrics = compute_metrics(&record_with(1, 2));
        assert_eq!(metrics.total_tracked, 3);
        assert_eq!(metrics.completion_percent, 33);
        let metrics = compute_metrics(&record_with(2, 1));
        assert_eq!(metrics.completion_percent, 67);
    }

    #[test]
    fn insight_follows_skill_score_thresholds() {
        assert_eq!(compute_metrics(&record_with(0, 4)).insight, Insight::StartFirstCourse);
        assert_eq!(compute_metrics(&record_with(1, 0)).insight, Insight::GoodStart);
        assert_eq!(compute_metrics(&record_with(2, 0)).insight, Insight::BuildingMomentum);
        assert_eq!(compute_metrics(&record_with(3, 0)).insight, Insight::BuildingMomentum);
        assert_eq!(compute_metrics(&record_with(4, 0)).insight, Insight::ExcellentConsistency);
        assert_eq!(compute_metrics(&record_with(4, 0)).skill_score, 80);
    }
}
