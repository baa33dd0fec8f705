use crate::data::model::ComparisonDataset;
use crate::stats::{DiffStats, caption, difference};

// ---------------------------------------------------------------------------
// User actions
// ---------------------------------------------------------------------------

/// The three things a user can ask the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Previous,
    Next,
    Quit,
}

/// Button layout and handlers, left to right.
pub const ACTIONS: [(UserAction, &str, fn(&mut ViewerState)); 3] = [
    (UserAction::Previous, "Previous", ViewerState::retreat),
    (UserAction::Next, "Next", ViewerState::advance),
    (UserAction::Quit, "Quit", ViewerState::terminate),
];

// ---------------------------------------------------------------------------
// ColumnView – everything drawn for one column
// ---------------------------------------------------------------------------

/// Plot data for the column under the cursor, rebuilt on every move.
#[derive(Debug, Clone)]
pub struct ColumnView {
    pub column: String,
    pub first: Vec<f64>,
    pub second: Vec<f64>,
    pub diff: Vec<f64>,
    pub stats: Option<DiffStats>,
}

impl ColumnView {
    /// `None` when `index` is past the last column.
    fn build(dataset: &ComparisonDataset, index: usize) -> Option<Self> {
        let pair = dataset.series_pair(index)?;
        let diff = difference(pair.first, pair.second);
        let stats = DiffStats::compute(&diff);

        Some(ColumnView {
            column: pair.column.to_string(),
            first: pair.first.to_vec(),
            second: pair.second.to_vec(),
            diff,
            stats,
        })
    }

    pub fn caption(&self) -> String {
        caption(&self.column, self.stats.as_ref())
    }
}

// ---------------------------------------------------------------------------
// Viewer state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct ViewerState {
    /// Loaded and aligned data; immutable for the session.
    pub dataset: ComparisonDataset,

    /// Index into `dataset.columns`, always in `[0, len)`.
    cursor: usize,

    /// Data for the column at `cursor`.
    view: ColumnView,

    /// Set by [`ViewerState::terminate`]; no further actions are handled.
    closed: bool,
}

impl ViewerState {
    /// Start on the first column. `None` if `dataset` has no columns.
    pub fn new(dataset: ComparisonDataset) -> Option<Self> {
        let view = ColumnView::build(&dataset, 0)?;
        Some(Self {
            dataset,
            cursor: 0,
            view,
            closed: false,
        })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn view(&self) -> &ColumnView {
        &self.view
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn column_count(&self) -> usize {
        self.dataset.len()
    }

    /// Move to the next column, wrapping to the first.
    pub fn advance(&mut self) {
        let n = self.column_count();
        self.move_to((self.cursor + 1) % n);
    }

    /// Move to the previous column, wrapping to the last.
    pub fn retreat(&mut self) {
        let n = self.column_count();
        self.move_to((self.cursor + n - 1) % n);
    }

    pub fn terminate(&mut self) {
        log::info!("Quit requested");
        self.closed = true;
    }

    /// Run the handler registered for `action`. Ignored once closed.
    pub fn dispatch(&mut self, action: UserAction) {
        if self.closed {
            return;
        }
        if let Some((_, _, handler)) = ACTIONS.iter().find(|(a, _, _)| *a == action) {
            handler(self);
        }
    }

    fn move_to(&mut self, index: usize) {
        let Some(view) = ColumnView::build(&self.dataset, index) else {
            return;
        };
        self.cursor = index;
        self.view = view;
        log::debug!(
            "Showing column {}/{}: {}",
            index + 1,
            self.column_count(),
            self.view.column
        );
    }
}
