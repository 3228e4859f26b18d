use crate::core::card::CardRenderer;
use crate::core::ranking::{select_and_rank, PriorityList};
use crate::domain::ports::RepositorySource;
use crate::utils::error::Result;
use chrono::Utc;

/// Progress of one load cycle. `Populated` holds the card markup in ranked
/// order.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Populated(Vec<String>),
    Empty,
    Failed,
}

pub struct ProjectLoader<R: RepositorySource> {
    source: R,
    renderer: CardRenderer,
    self_repository: String,
    priority: PriorityList,
    state: LoadState,
}

impl<R: RepositorySource> ProjectLoader<R> {
    pub fn new(
        source: R,
        renderer: CardRenderer,
        self_repository: impl Into<String>,
        priority: PriorityList,
    ) -> Self {
        Self {
            source,
            renderer,
            self_repository: self_repository.into(),
            priority,
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn into_state(self) -> LoadState {
        self.state
    }

    /// Runs one load cycle. Failures end in [`LoadState::Failed`] with the
    /// cause logged; nothing is retried.
    pub async fn load(&mut self) -> &LoadState {
        self.state = LoadState::Loading;
        tracing::info!("Loading projects");

        self.state = match self.fetch_and_render().await {
            Ok(cards) if cards.is_empty() => {
                tracing::info!("No qualifying projects found");
                LoadState::Empty
            }
            Ok(cards) => {
                tracing::info!("Rendered {} project cards", cards.len());
                LoadState::Populated(cards)
            }
            Err(e) if e.is_load_failure() => {
                tracing::error!("Error loading projects: {}", e);
                LoadState::Failed
            }
            Err(e) => {
                tracing::error!("Error rendering project cards: {}", e);
                LoadState::Failed
            }
        };

        &self.state
    }

    async fn fetch_and_render(&self) -> Result<Vec<String>> {
        let records = self.source.fetch_repositories().await?;
        let fetched = records.len();

        let ranked = select_and_rank(records, &self.self_repository, &self.priority);
        tracing::debug!("{} of {} repositories qualify", ranked.len(), fetched);

        let now = Utc::now();
        ranked
            .iter()
            .map(|record| self.renderer.render_record(record, now))
            .collect()
    }
}
