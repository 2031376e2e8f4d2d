// Project list state management.
// Drives the loading/loaded/failed cycle and card selection.

use std::sync::Arc;

use ratatui::widgets::ListState;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::projects::{DisplayProject, ProjectSource};

/// Placeholder cards shown while a request is in flight.
pub const SKELETON_CARDS: usize = 6;

/// Loading state for async data.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadingState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadingState::Loaded(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// What the project section should draw right now.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectsView<'a> {
    Skeleton { placeholders: usize },
    Cards(&'a [DisplayProject]),
    ErrorPanel { message: &'a str },
}

fn view_of(state: &LoadingState<Vec<DisplayProject>>) -> ProjectsView<'_> {
    match state {
        LoadingState::Loading => ProjectsView::Skeleton {
            placeholders: SKELETON_CARDS,
        },
        LoadingState::Loaded(projects) => ProjectsView::Cards(projects),
        LoadingState::Failed(message) => ProjectsView::ErrorPanel { message },
    }
}

/// Result of one provider request, tagged with the request that produced it.
#[derive(Debug)]
struct Completion {
    generation: u64,
    result: Result<Vec<DisplayProject>, String>,
}

/// Presenter for the featured project list.
pub struct ProjectList {
    source: Arc<dyn ProjectSource>,
    limit: usize,
    state: LoadingState<Vec<DisplayProject>>,
    list_state: ListState,
    generation: u64,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl ProjectList {
    pub fn new(source: Arc<dyn ProjectSource>, limit: usize) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            limit,
            state: LoadingState::Loading,
            list_state: ListState::default(),
            generation: 0,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &LoadingState<Vec<DisplayProject>> {
        &self.state
    }

    pub fn view(&self) -> ProjectsView<'_> {
        view_of(&self.state)
    }

    /// The view together with the card selection, for stateful rendering.
    pub fn view_with_selection(&mut self) -> (ProjectsView<'_>, &mut ListState) {
        (view_of(&self.state), &mut self.list_state)
    }

    /// Enter `Loading` and request projects in the background.
    /// Must be called from within a tokio runtime.
    pub fn activate(&mut self) {
        self.generation += 1;
        self.state = LoadingState::Loading;
        self.list_state.select(None);

        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let limit = self.limit;
        let tx = self.tx.clone();
        debug!(generation, limit, "Requesting featured projects");

        tokio::spawn(async move {
            let request = tokio::spawn(async move { source.featured_projects(limit).await });
            let result = match request.await {
                Ok(Ok(projects)) => Ok(projects),
                Ok(Err(e)) => Err(e.to_string()),
                Err(e) => Err(format!("Project request aborted: {}", e)),
            };
            // The presenter may be gone by now; nothing to update then.
            let _ = tx.send(Completion { generation, result });
        });
    }

    /// Re-run the request after a failure (or at any time).
    pub fn retry(&mut self) {
        self.activate();
    }

    /// Apply any completed requests without waiting. Returns true if the
    /// state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.rx.try_recv() {
            changed |= self.apply(completion);
        }
        changed
    }

    /// Wait until the latest request has completed and apply it.
    pub async fn settle(&mut self) {
        while self.state.is_loading() {
            match self.rx.recv().await {
                Some(completion) => {
                    self.apply(completion);
                }
                None => break,
            }
        }
    }

    fn apply(&mut self, completion: Completion) -> bool {
        if completion.generation != self.generation {
            debug!(
                generation = completion.generation,
                current = self.generation,
                "Discarding superseded project request"
            );
            return false;
        }

        match completion.result {
            Ok(projects) => {
                self.state = LoadingState::Loaded(projects);
                self.reset_selection();
            }
            Err(message) => {
                warn!(%message, "Project list failed to load");
                self.state = LoadingState::Failed(message);
                self.list_state.select(None);
            }
        }
        true
    }

    /// Get the currently selected index.
    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Get the selected project.
    pub fn selected_project(&self) -> Option<&DisplayProject> {
        let index = self.list_state.selected()?;
        self.state.data()?.get(index)
    }

    /// Select the next card.
    pub fn select_next(&mut self) {
        let Some(projects) = self.state.data() else {
            return;
        };
        if projects.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= projects.len() - 1 => i, // Stay at end
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous card.
    pub fn select_prev(&mut self) {
        let Some(projects) = self.state.data() else {
            return;
        };
        if projects.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn reset_selection(&mut self) {
        match self.state.data() {
            Some(projects) if !projects.is_empty() => self.list_state.select(Some(0)),
            _ => self.list_state.select(None),
        }
    }
}
