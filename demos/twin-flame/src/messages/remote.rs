use super::{day_index, CalendarDay, LocalMessages, MessageProvider, RepositoryError};

/// A keyed message store that may be slow, empty or unreachable.
pub trait MessageRepository {
    fn messages_count(&self) -> Result<usize, RepositoryError>;

    fn fetch_message(&self, index: usize) -> Result<String, RepositoryError>;

    fn upsert_message(&mut self, index: usize, text: &str) -> Result<(), RepositoryError>;

    /// Write every local message under its own index.
    fn seed_from_local(&mut self, messages: &[String]) -> Result<(), RepositoryError> {
        for (index, text) in messages.iter().enumerate() {
            self.upsert_message(index, text)?;
        }
        Ok(())
    }

    fn poll(&mut self, _dt: f32) {}
}

/// Remote-first provider backed by the local list.
pub struct RemoteMessages<R> {
    repository: R,
    local: LocalMessages,
}

impl<R: MessageRepository> RemoteMessages<R> {
    pub fn new(repository: R, local: LocalMessages) -> Self {
        Self { repository, local }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    pub fn local(&self) -> &LocalMessages {
        &self.local
    }

    /// Remote count when it reports at least one message, local otherwise.
    pub fn count(&self) -> usize {
        match self.repository.messages_count() {
            Ok(n) if n > 0 => n,
            Ok(_) => self.local.len(),
            Err(err) => {
                log::debug!("message count unavailable ({err}), using local");
                self.local.len()
            }
        }
    }

    fn message_at(&mut self, index: usize) -> String {
        match self.repository.fetch_message(index) {
            Ok(text) => text,
            Err(err @ (RepositoryError::NotFound | RepositoryError::Malformed(_))) => {
                let text = self.local.message_for_index(index as i64);
                log::warn!("message {index}: {err}, seeding local text");
                if let Err(write_err) = self.repository.upsert_message(index, &text) {
                    log::warn!("message {index}: seeding failed: {write_err}");
                }
                text
            }
            Err(err) => {
                log::warn!("message {index}: {err}, using local text");
                self.local.message_for_index(index as i64)
            }
        }
    }
}

impl<R: MessageRepository> MessageProvider for RemoteMessages<R> {
    fn todays_message(&mut self, today: CalendarDay) -> String {
        let index = day_index(today, self.count());
        self.message_at(index)
    }

    fn poll(&mut self, dt: f32) {
        self.repository.poll(dt);
    }
}
