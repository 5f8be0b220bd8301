//! In-memory implementation of EventRepository

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, instrument};

use event_core::entities::Event;
use event_core::traits::{EventRepository, RepoResult};

/// In-memory implementation of EventRepository
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: DashMap<String, Event>,
}

impl InMemoryEventRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no event is stored
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Collect the events matching `predicate`, oldest first
    fn collect_where(&self, predicate: impl Fn(&Event) -> bool) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();

        events.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        events
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepoResult<Option<Event>> {
        Ok(self.events.get(id).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    async fn find_by_id_and_organizer(
        &self,
        id: &str,
        organizer_id: &str,
    ) -> RepoResult<Option<Event>> {
        Ok(self
            .events
            .get(id)
            .filter(|entry| entry.is_organizer(organizer_id))
            .map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        Ok(self.collect_where(|_| true))
    }

    #[instrument(skip(self))]
    async fn find_by_attendee(&self, user_id: &str) -> RepoResult<Vec<Event>> {
        Ok(self.collect_where(|event| event.is_attending(user_id)))
    }

    #[instrument(skip(self))]
    async fn find_by_organizer(&self, organizer_id: &str) -> RepoResult<Vec<Event>> {
        let events = self.collect_where(|event| event.is_organizer(organizer_id));
        debug!(count = events.len(), "Events found for organizer");
        Ok(events)
    }

    #[instrument(skip(self))]
    async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Event>> {
        Ok(self.collect_where(|event| event.category() == category))
    }

    #[instrument(skip(self))]
    async fn find_by_term(&self, term: &str) -> RepoResult<Vec<Event>> {
        Ok(self.collect_where(|event| event.matches_term(term)))
    }

    #[instrument(skip(self, event), fields(event_id = %event.id()))]
    async fn save(&self, event: &Event) -> RepoResult<()> {
        self.events.insert(event.id().to_string(), event.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> RepoResult<()> {
        self.events.remove(id);
        Ok(())
    }
}
