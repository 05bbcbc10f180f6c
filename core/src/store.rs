use alloc::string::String;
use core::fmt;

use crate::*;

/// Durable home of the statistics aggregate.
pub trait StatsStore {
    type Error: fmt::Display;

    /// `Ok(None)` when nothing was saved yet.
    fn load(&mut self) -> core::result::Result<Option<Statistics>, Self::Error>;

    fn save(&mut self, stats: &Statistics) -> core::result::Result<(), Self::Error>;

    fn erase(&mut self) -> core::result::Result<(), Self::Error>;
}

impl<T: StatsStore + ?Sized> StatsStore for &mut T {
    type Error = T::Error;

    fn load(&mut self) -> core::result::Result<Option<Statistics>, Self::Error> {
        (**self).load()
    }

    fn save(&mut self, stats: &Statistics) -> core::result::Result<(), Self::Error> {
        (**self).save(stats)
    }

    fn erase(&mut self) -> core::result::Result<(), Self::Error> {
        (**self).erase()
    }
}

/// Keeps the serialized JSON in memory, the same payload a file backed store would write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    contents: Option<String>,
}

impl MemoryStore {
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_none()
    }
}

impl StatsStore for MemoryStore {
    type Error = serde_json::Error;

    fn load(&mut self) -> core::result::Result<Option<Statistics>, Self::Error> {
        self.contents
            .as_deref()
            .map(serde_json::from_str::<Statistics>)
            .transpose()
    }

    fn save(&mut self, stats: &Statistics) -> core::result::Result<(), Self::Error> {
        self.contents = Some(serde_json::to_string(stats)?);
        Ok(())
    }

    fn erase(&mut self) -> core::result::Result<(), Self::Error> {
        self.contents = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_loads_nothing() {
        assert_eq!(MemoryStore::default().load().unwrap(), None);
    }

    #[test]
    fn saved_statistics_load_back() {
        let mut store = MemoryStore::default();
        let mut stats = Statistics::default();
        stats.total_games = 3;
        stats.hard.best_time = Some(42);

        store.save(&stats).unwrap();

        assert_eq!(store.load().unwrap(), Some(stats));
        assert!(store.contents().unwrap().contains("\"best_time\":42"));
    }

    #[test]
    fn corrupt_contents_fail_to_load() {
        let mut store = MemoryStore::with_contents("{not json");
        assert!(store.load().is_err());

        let aggregator = StatsAggregator::load(store, DEFAULT_HISTORY_LIMIT);
        assert_eq!(aggregator.statistics(), &Statistics::default());
    }

    #[test]
    fn partial_payload_uses_defaults() {
        let mut store = MemoryStore::with_contents(r#"{"total_games": 7, "easy": {"played": 7}}"#);

        let stats = store.load().unwrap().unwrap();

        assert_eq!(stats.total_games, 7);
        assert_eq!(stats.easy.played, 7);
        assert!(stats.history.is_empty());
    }
}
