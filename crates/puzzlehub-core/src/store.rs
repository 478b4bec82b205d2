//! Mock persistence layer
//!
//! In-memory stand-ins for a real backing store: one [`Store`] per entity
//! type, seeded from embedded JSON fixtures and artificially delayed per
//! operation to emulate network round-trips. Nothing survives a process
//! restart.

use std::sync::Mutex;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::catalog::{Catalog, PuzzleRecord};
use crate::entities::{DailyChallenge, Progress, Score};

/// Rows a [`Store`] can hold.
pub trait Entity: Clone {
    /// Entity kind, used in errors and logs.
    const KIND: &'static str;

    fn id(&self) -> &str;
    fn assign_id(&mut self, id: String);
}

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("fixture data is invalid: {0}")]
    Fixture(#[from] serde_json::Error),
}

/// Per-operation artificial delays emulating network round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub list: Duration,
    pub get: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Latency {
    pub fn realistic() -> Self {
        Self {
            list: Duration::from_millis(300),
            get: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(350),
            delete: Duration::from_millis(250),
        }
    }

    /// No delays; for tests and fast startup.
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            get: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::realistic()
    }
}

struct Inner<T> {
    rows: Vec<T>,
    last_id: u128,
}

/// An in-memory ordered collection with a simulated-latency CRUD surface.
/// The mutex exists so a store can be shared behind `&self`; the system is
/// single-threaded.
pub struct Store<T: Entity> {
    inner: Mutex<Inner<T>>,
    latency: Latency,
}

impl<T: Entity> Store<T> {
    pub fn new(latency: Latency) -> Self {
        Self::seeded(Vec::new(), latency)
    }

    pub fn seeded(rows: Vec<T>, latency: Latency) -> Self {
        Self {
            inner: Mutex::new(Inner { rows, last_id: 0 }),
            latency,
        }
    }

    /// Seed from a JSON fixture: an array of entity objects.
    pub fn from_json(json: &str, latency: Latency) -> Result<Self, StoreError>
    where
        T: DeserializeOwned,
    {
        let rows: Vec<T> = serde_json::from_str(json)?;
        Ok(Self::seeded(rows, latency))
    }

    /// Snapshot copy of every row.
    pub fn get_all(&self) -> Vec<T> {
        self.pause(self.latency.list);
        self.inner.lock().unwrap().rows.clone()
    }

    pub fn get_by_id(&self, id: &str) -> Option<T> {
        self.pause(self.latency.get);
        self.inner
            .lock()
            .unwrap()
            .rows
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    /// Append a row under a fresh identifier derived from the current time.
    pub fn create(&self, mut row: T) -> T {
        self.pause(self.latency.create);
        let mut inner = self.inner.lock().unwrap();
        row.assign_id(next_id(&mut inner.last_id));
        debug!("created {} {}", T::KIND, row.id());
        inner.rows.push(row.clone());
        row
    }

    /// Mutate the matching row in place and return the updated copy.
    pub fn update(&self, id: &str, apply: impl FnOnce(&mut T)) -> Result<T, StoreError> {
        self.pause(self.latency.update);
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.iter_mut().find(|r| r.id() == id) {
            Some(row) => {
                apply(row);
                debug!("updated {} {}", T::KIND, id);
                Ok(row.clone())
            }
            None => {
                warn!("update missed {} {}", T::KIND, id);
                Err(StoreError::NotFound {
                    kind: T::KIND,
                    id: id.to_string(),
                })
            }
        }
    }

    /// Remove the matching row and return it.
    pub fn delete(&self, id: &str) -> Result<T, StoreError> {
        self.pause(self.latency.delete);
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.iter().position(|r| r.id() == id) {
            Some(index) => {
                debug!("deleted {} {}", T::KIND, id);
                Ok(inner.rows.remove(index))
            }
            None => {
                warn!("delete missed {} {}", T::KIND, id);
                Err(StoreError::NotFound {
                    kind: T::KIND,
                    id: id.to_string(),
                })
            }
        }
    }

    /// Row count without the simulated latency.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
}

/// Identifier derived from the current time in epoch milliseconds, bumped
/// past the previous id so back-to-back creates stay unique.
fn next_id(last_id: &mut u128) -> String {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let id = now_ms.max(*last_id + 1);
    *last_id = id;
    id.to_string()
}

/// All four stores, seeded from the embedded fixtures.
pub struct Stores {
    pub puzzles: Store<PuzzleRecord>,
    pub scores: Store<Score>,
    pub progress: Store<Progress>,
    pub daily_challenges: Store<DailyChallenge>,
}

impl Stores {
    pub fn seeded(latency: Latency) -> Result<Self, StoreError> {
        Ok(Self {
            puzzles: Store::from_json(include_str!("../data/puzzles.json"), latency)?,
            scores: Store::from_json(include_str!("../data/scores.json"), latency)?,
            progress: Store::from_json(include_str!("../data/progress.json"), latency)?,
            daily_challenges: Store::from_json(
                include_str!("../data/daily_challenges.json"),
                latency,
            )?,
        })
    }

    /// Build the session catalog from the puzzle store.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.puzzles.get_all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Score;

    fn sample(id: &str, points: u64) -> Score {
        Score {
            id: id.to_string(),
            puzzle_id: "1".into(),
            player_name: "P".into(),
            time: 120,
            points,
            date: "2024-01-01".into(),
        }
    }

    fn store() -> Store<Score> {
        Store::seeded(vec![sample("a", 100), sample("b", 200)], Latency::none())
    }

    #[test]
    fn get_all_returns_snapshot() {
        let store = store();
        let mut snapshot = store.get_all();
        snapshot.clear();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn get_by_id_hits_and_misses() {
        let store = store();
        assert!(store.get_by_id("a").is_some());
        assert!(store.get_by_id("zzz").is_none());
    }

    #[test]
    fn create_assigns_unique_time_derived_ids() {
        let store = Store::<Score>::new(Latency::none());
        let first = store.create(sample("", 1));
        let second = store.create(sample("", 2));
        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
        assert!(second.id.parse::<u128>().unwrap() > first.id.parse::<u128>().unwrap());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_merges_fields() {
        let store = store();
        let updated = store.update("a", |s| s.points = 999).unwrap();
        assert_eq!(updated.points, 999);
        assert_eq!(store.get_by_id("a").unwrap().points, 999);
        // Untouched fields survive.
        assert_eq!(updated.player_name, "P");
    }

    #[test]
    fn update_missing_id_fails_without_mutation() {
        let store = store();
        let err = store.update("zzz", |s| s.points = 0).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_by_id("a").unwrap().points, 100);
    }

    #[test]
    fn delete_removes_and_returns_row() {
        let store = store();
        let gone = store.delete("b").unwrap();
        assert_eq!(gone.points, 200);
        assert_eq!(store.len(), 1);
        assert!(store.get_by_id("b").is_none());
    }

    #[test]
    fn delete_missing_id_fails_without_mutation() {
        let store = store();
        assert!(store.delete("zzz").is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn fixture_parse_error_is_reported() {
        let result = Store::<Score>::from_json("not json", Latency::none());
        assert!(matches!(result, Err(StoreError::Fixture(_))));
    }

    #[test]
    fn seeded_fixtures_load() {
        let stores = Stores::seeded(Latency::none()).expect("fixtures must parse");
        // 5 types x 3 difficulties
        assert_eq!(stores.puzzles.len(), 15);
        assert!(!stores.scores.is_empty());
        assert!(!stores.progress.is_empty());
        assert!(!stores.daily_challenges.is_empty());
        assert!(stores.catalog().len() == 15);
    }
}
