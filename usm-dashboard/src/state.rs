//! Reactive selection state.
//!
//! `SelectionState` bundles the four control values and a subscriber list.
//! Setting any one control replaces the whole `Selection` and synchronously
//! notifies every subscriber with the new tuple. There is no debouncing and
//! no partial notification; each setter call is one transition.

use usm_data::selection::{Selection, SortOrder};
use usm_nchs::category::MortalityCategory;
use usm_nchs::metric::Metric;

type Subscriber = Box<dyn FnMut(&Selection)>;

pub struct SelectionState {
    selection: Selection,
    subscribers: Vec<Subscriber>,
}

impl SelectionState {
    pub fn new(initial: Selection) -> Self {
        Self {
            selection: initial,
            subscribers: Vec::new(),
        }
    }

    /// The current tuple.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Register a derivation callback. Subscribers fire in registration
    /// order on every subsequent control change; registration itself does
    /// not fire them.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Selection) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn set_year(&mut self, year: i32) {
        self.selection.year = year;
        self.notify();
    }

    pub fn set_category(&mut self, category: MortalityCategory) {
        self.selection.category = category;
        self.notify();
    }

    pub fn set_metric(&mut self, metric: Metric) {
        self.selection.metric = metric;
        self.notify();
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) {
        self.selection.sort_order = sort_order;
        self.notify();
    }

    fn notify(&mut self) {
        let selection = self.selection;
        for subscriber in &mut self.subscribers {
            subscriber(&selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_each_setter_notifies_exactly_once() {
        let count = Rc::new(RefCell::new(0u32));
        let seen = Rc::new(RefCell::new(Vec::<Selection>::new()));
        let mut state = SelectionState::new(Selection::default());

        let subscriber_count = Rc::clone(&count);
        let subscriber_seen = Rc::clone(&seen);
        state.subscribe(move |selection| {
            *subscriber_count.borrow_mut() += 1;
            subscriber_seen.borrow_mut().push(*selection);
        });

        state.set_year(2018);
        state.set_category(MortalityCategory::DrugOverdose);
        state.set_metric(Metric::DeathsCount);
        state.set_sort_order(SortOrder::Ascending);

        assert_eq!(*count.borrow(), 4);
        let seen = seen.borrow();
        assert_eq!(seen[0].year, 2018);
        assert_eq!(seen[1].category, MortalityCategory::DrugOverdose);
        assert_eq!(seen[3].metric, Metric::DeathsCount);
        assert_eq!(seen[3].sort_order, SortOrder::Ascending);
    }

    #[test]
    fn test_subscribing_does_not_fire() {
        let count = Rc::new(RefCell::new(0u32));
        let mut state = SelectionState::new(Selection::default());
        let subscriber_count = Rc::clone(&count);
        state.subscribe(move |_| *subscriber_count.borrow_mut() += 1);
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_subscribers_fire_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::<&'static str>::new()));
        let mut state = SelectionState::new(Selection::default());

        let first = Rc::clone(&order);
        state.subscribe(move |_| first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        state.subscribe(move |_| second.borrow_mut().push("second"));

        state.set_year(2020);
        assert_eq!(*order.borrow(), ["first", "second"]);
    }

    #[test]
    fn test_setter_replaces_only_its_control() {
        let mut state = SelectionState::new(Selection::default());
        state.set_metric(Metric::DeathsCount);
        let selection = state.selection();
        assert_eq!(selection.metric, Metric::DeathsCount);
        assert_eq!(selection.year, Selection::default().year);
        assert_eq!(selection.category, Selection::default().category);
        assert_eq!(selection.sort_order, Selection::default().sort_order);
    }
}
