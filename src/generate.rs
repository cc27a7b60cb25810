// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! The backfill window walk.
//!
//! For each of the past 7 days (today inclusive, walking backward) and each of
//! the 6 templates, 1-3 instances are generated, so one run yields 42-126
//! records. Counts and contents are random by design: re-running produces a
//! different batch.

use chrono::{DateTime, Days, Utc};
use rand::Rng;

use crate::event::{Actor, EventName, EventRecord, PROJECT_ID};
use crate::templates::{metadata_for, TemplateInput};

/// Days covered by one run, today inclusive.
pub const LOOKBACK_DAYS: u64 = 7;
/// Per-template, per-day instance bounds.
pub const MIN_EVENTS_PER_DAY: u32 = 1;
pub const MAX_EVENTS_PER_DAY: u32 = 3;

/// Generate the full synthetic batch for one run.
///
/// `actors` must be non-empty; the workflow gates the empty case before
/// calling. `now` anchors the window so tests can pin it.
pub fn generate_events<R: Rng + ?Sized>(
    rng: &mut R,
    actors: &[Actor],
    contest_id: &str,
    now: DateTime<Utc>,
) -> Vec<EventRecord> {
    debug_assert!(!actors.is_empty());

    let mut records = Vec::new();
    for day_offset in 0..LOOKBACK_DAYS {
        let day = now.date_naive() - Days::new(day_offset);
        for name in EventName::ALL {
            let count = rng.random_range(MIN_EVENTS_PER_DAY..=MAX_EVENTS_PER_DAY);
            for _ in 0..count {
                let actor = &actors[rng.random_range(0..actors.len())];
                let hour: u32 = rng.random_range(0..24);
                let minute: u32 = rng.random_range(0..60);
                let created_at = day
                    .and_hms_opt(hour, minute, 0)
                    .expect("hour and minute are in range")
                    .and_utc();

                let metadata = metadata_for(
                    name,
                    rng,
                    &TemplateInput {
                        contest_id,
                        event_time: created_at,
                    },
                );

                records.push(EventRecord {
                    event_name: name,
                    user_id: actor.id.clone(),
                    contest_id: contest_id.to_string(),
                    project_id: PROJECT_ID.to_string(),
                    metadata,
                    created_at,
                });
            }
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    fn actors(count: usize) -> Vec<Actor> {
        (0..count)
            .map(|i| Actor {
                id: format!("actor-{i}"),
            })
            .collect()
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_batch_size_is_within_window_bounds() {
        let actors = actors(5);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let records = generate_events(&mut rng, &actors, "contest-1", fixed_now());
            assert!(
                (42..=126).contains(&records.len()),
                "seed {seed} produced {} records",
                records.len()
            );
        }
    }

    #[test]
    fn test_per_type_counts_sum_to_total() {
        let actors = actors(3);
        let mut rng = StdRng::seed_from_u64(1);
        let records = generate_events(&mut rng, &actors, "contest-1", fixed_now());

        let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &records {
            *by_type.entry(record.event_name.as_str()).or_insert(0) += 1;
        }
        assert_eq!(by_type.len(), 6);
        assert_eq!(by_type.values().sum::<usize>(), records.len());
        // 7 days at 1-3 instances each.
        for (name, count) in by_type {
            assert!((7..=21).contains(&count), "{name}: {count}");
        }
    }

    #[test]
    fn test_grouping_and_project_are_constant_within_a_run() {
        let actors = actors(4);
        let mut rng = StdRng::seed_from_u64(2);
        let records = generate_events(&mut rng, &actors, "contest-abc", fixed_now());
        for record in &records {
            assert_eq!(record.contest_id, "contest-abc");
            assert_eq!(record.project_id, PROJECT_ID);
            assert!(record.metadata.is_object());
        }
    }

    #[test]
    fn test_timestamps_fall_inside_the_lookback_window() {
        let actors = actors(2);
        let now = fixed_now();
        let mut rng = StdRng::seed_from_u64(3);
        let records = generate_events(&mut rng, &actors, "c", now);

        let oldest = now.date_naive() - Days::new(LOOKBACK_DAYS - 1);
        for record in &records {
            let day = record.created_at.date_naive();
            assert!(day >= oldest && day <= now.date_naive(), "{day}");
        }
    }

    #[test]
    fn test_actors_are_drawn_from_the_input_set() {
        let actors = actors(3);
        let ids: Vec<&str> = actors.iter().map(|a| a.id.as_str()).collect();
        let mut rng = StdRng::seed_from_u64(4);
        let records = generate_events(&mut rng, &actors, "c", fixed_now());
        for record in &records {
            assert!(ids.contains(&record.user_id.as_str()));
        }
    }

    #[test]
    fn test_seeded_runs_reproduce_exactly() {
        let actors = actors(3);
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let first = generate_events(&mut a, &actors, "c", fixed_now());
        let second = generate_events(&mut b, &actors, "c", fixed_now());
        assert_eq!(first.len(), second.len());
        for (x, y) in first.iter().zip(&second) {
            assert_eq!(x.metadata, y.metadata);
            assert_eq!(x.created_at, y.created_at);
        }
    }
}
