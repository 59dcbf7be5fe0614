//! The assembled dashboard: immutable inputs, reactive selection, and the
//! three currently displayed panes.

use crate::panes::{self, Panes};
use crate::state::SelectionState;
use std::cell::RefCell;
use std::rc::Rc;
use usm_data::selection::{Selection, SortOrder};
use usm_geo::boundaries::StateBoundaries;
use usm_nchs::category::MortalityCategory;
use usm_nchs::dataset::MortalityDataset;
use usm_nchs::metric::Metric;

/// Everything runs on one thread; the pane set is shared with the
/// subscriber closure through `Rc<RefCell<..>>`.
pub struct Dashboard {
    dataset: Rc<MortalityDataset>,
    boundaries: StateBoundaries,
    state: SelectionState,
    panes: Rc<RefCell<Panes>>,
}

impl Dashboard {
    /// Wire the pane derivation to the selection state and render the
    /// initial artifacts.
    pub fn new(dataset: MortalityDataset, boundaries: StateBoundaries) -> Self {
        let dataset = Rc::new(dataset);
        let initial = Selection::default();
        let panes = Rc::new(RefCell::new(panes::build_all(&dataset, initial)));

        let mut state = SelectionState::new(initial);
        let subscriber_dataset = Rc::clone(&dataset);
        let subscriber_panes = Rc::clone(&panes);
        state.subscribe(move |selection| {
            *subscriber_panes.borrow_mut() = panes::build_all(&subscriber_dataset, *selection);
        });

        Self {
            dataset,
            boundaries,
            state,
            panes,
        }
    }

    pub fn selection(&self) -> Selection {
        self.state.selection()
    }

    /// A snapshot of the three panes for the current selection.
    pub fn panes(&self) -> Panes {
        self.panes.borrow().clone()
    }

    pub fn dataset(&self) -> &MortalityDataset {
        &self.dataset
    }

    pub fn boundaries(&self) -> &StateBoundaries {
        &self.boundaries
    }

    pub fn set_year(&mut self, year: i32) {
        self.state.set_year(year);
    }

    pub fn set_category(&mut self, category: MortalityCategory) {
        self.state.set_category(category);
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.state.set_metric(metric);
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.state.set_sort_order(sort_order);
    }
}
