use std::rc::Rc;

use log::debug;
use yew::functional::Reducible;

/// Which FAQ answer is open. At most one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    expanded: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, expanded: None }
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Clicking the open question closes it; clicking any other opens that one.
    pub fn toggled(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        let expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        Self { expanded, ..self }
    }
}

impl Reducible for Accordion {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        let next = self.toggled(index);
        debug!("faq accordion {:?} -> {:?}", self.expanded(), next.expanded());
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let accordion = Accordion::new(3);
        assert_eq!(accordion.expanded(), None);
        assert!((0..3).all(|i| !accordion.is_expanded(i)));
    }

    #[test]
    fn double_click_collapses_every_question() {
        for i in 0..3 {
            let accordion = Accordion::new(3).toggled(i).toggled(i);
            assert_eq!(accordion.expanded(), None);
        }
    }

    #[test]
    fn opening_another_question_closes_the_first() {
        let accordion = Accordion::new(3).toggled(0).toggled(2);
        assert!(accordion.is_expanded(2));
        assert!(!accordion.is_expanded(0));
        assert_eq!((0..3).filter(|&i| accordion.is_expanded(i)).count(), 1);
    }

    #[test]
    fn walkthrough_of_three_questions() {
        let mut accordion = Accordion::new(3);
        assert_eq!(accordion.expanded(), None);
        accordion = accordion.toggled(1);
        assert_eq!(accordion.expanded(), Some(1));
        accordion = accordion.toggled(2);
        assert_eq!(accordion.expanded(), Some(2));
        accordion = accordion.toggled(2);
        assert_eq!(accordion.expanded(), None);
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let accordion = Accordion::new(3).toggled(1);
        assert_eq!(accordion.toggled(3), accordion);
        assert_eq!(Accordion::new(0).toggled(0).expanded(), None);
    }

    #[test]
    fn never_more_than_one_open() {
        let clicks = [0, 1, 1, 2, 0, 0, 2, 1, 5, 2];
        let mut accordion = Accordion::new(3);
        for click in clicks {
            accordion = accordion.toggled(click);
            assert!((0..3).filter(|&i| accordion.is_expanded(i)).count() <= 1);
        }
    }

    #[test]
    fn reducer_applies_toggle() {
        let state = Rc::new(Accordion::new(3));
        let state = state.reduce(1);
        assert!(state.is_expanded(1));
        let state = state.reduce(1);
        assert_eq!(state.expanded(), None);
    }
}
