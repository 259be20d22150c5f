use chrono::{Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const DEFAULT_TASK_COUNT: usize = 40;
const DEFAULT_SPAN_DAYS: i64 = 240;

const ROOMS: &[&str] = &[
    "Kitchen", "Main Bath", "Guest Bath", "Living Room", "Primary Bedroom",
    "Basement", "Garage", "Laundry", "Exterior",
];

const TRADES: &[(&str, i64, i64)] = &[
    // (work, min days, max days)
    ("Demolition", 1, 4),
    ("Framing", 2, 8),
    ("Rough Plumbing", 2, 6),
    ("Rough Electrical", 2, 6),
    ("Insulation", 1, 3),
    ("Drywall", 3, 9),
    ("Tiling", 2, 7),
    ("Cabinet Install", 1, 5),
    ("Countertops", 1, 3),
    ("Painting", 2, 6),
    ("Flooring", 2, 6),
    ("Final Inspection", 1, 1),
];

/// A scheduled piece of work in one room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    pub id: u64,
    pub name: String,
    pub room: String,
    pub start: NaiveDate,
    /// Inclusive last day
    pub end: NaiveDate,
}

impl ScheduledTask {
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Generates a reproducible renovation schedule for demos.
pub struct SampleSchedule {
    task_count: usize,
    span_days: i64,
    seed: u64,
}

impl SampleSchedule {
    pub fn new() -> Self {
        Self {
            task_count: DEFAULT_TASK_COUNT,
            span_days: DEFAULT_SPAN_DAYS,
            seed: 42, // Default seed for reproducibility
        }
    }

    pub fn with_config(task_count: usize, span_days: i64, seed: u64) -> Self {
        Self {
            task_count,
            span_days: span_days.max(1),
            seed,
        }
    }

    /// Generates tasks starting on or after `project_start`, sorted by start date.
    pub fn generate(&self, project_start: NaiveDate) -> Vec<ScheduledTask> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut tasks = Vec::with_capacity(self.task_count);

        for id in 0..self.task_count as u64 {
            let room = ROOMS.choose(&mut rng).copied().unwrap_or("Kitchen");
            let (work, min_days, max_days) = TRADES.choose(&mut rng).copied().unwrap_or(("Painting", 1, 1));

            let offset = rng.gen_range(0..self.span_days);
            let length = rng.gen_range(min_days..=max_days);
            let start = project_start + Duration::days(offset);

            tasks.push(ScheduledTask {
                id: id + 1,
                name: format!("{work} ({room})"),
                room: room.to_string(),
                start,
                end: start + Duration::days(length - 1),
            });
        }

        tasks.sort_by_key(|t| (t.start, t.id));
        tasks
    }
}

impl Default for SampleSchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let a = SampleSchedule::with_config(25, 90, 7).generate(start());
        let b = SampleSchedule::with_config(25, 90, 7).generate(start());
        assert_eq!(a, b);
        assert_eq!(a.len(), 25);
    }

    #[test]
    fn test_tasks_within_span_and_sorted() {
        let tasks = SampleSchedule::with_config(60, 30, 1).generate(start());
        for task in &tasks {
            assert!(task.start >= start());
            assert!(task.start < start() + Duration::days(30));
            assert!(task.end >= task.start);
            assert!(task.duration_days() >= 1);
        }
        assert!(tasks.windows(2).all(|w| w[0].start <= w[1].start));
    }
}
