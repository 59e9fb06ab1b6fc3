use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Position in a fixed, ordered label list. Advancing past the last label
/// wraps back to the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelCycle {
    labels: &'static [&'static str],
    index: usize,
}

pub enum LabelAction {
    Advance,
}

impl LabelCycle {
    pub fn new(labels: &'static [&'static str]) -> Self {
        Self { labels, index: 0 }
    }

    pub fn current(&self) -> Option<&'static str> {
        self.labels.get(self.index).copied()
    }

    pub fn advance(self) -> Self {
        if self.labels.is_empty() {
            return self;
        }
        Self {
            index: (self.index + 1) % self.labels.len(),
            ..self
        }
    }
}

impl Reducible for LabelCycle {
    type Action = LabelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LabelAction::Advance => Rc::new(self.advance()),
        }
    }
}

/// Shows `labels[0]` right away, then the next label every `period_ms`.
/// The interval is cancelled when the calling component unmounts.
#[hook]
pub fn use_rotating_label(labels: &'static [&'static str], period_ms: u32) -> Option<&'static str> {
    let cycle = use_reducer(|| LabelCycle::new(labels));

    {
        let dispatcher = cycle.dispatcher();
        use_effect_with_deps(
            move |period_ms| {
                let interval = Interval::new(*period_ms, move || {
                    dispatcher.dispatch(LabelAction::Advance);
                });
                move || drop(interval)
            },
            period_ms,
        );
    }

    cycle.current()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAINS: &[&str] = &["Pentesting", "Cryptography", "Forensics"];

    #[test]
    fn starts_on_first_label() {
        assert_eq!(LabelCycle::new(DOMAINS).current(), Some("Pentesting"));
    }

    #[test]
    fn cycles_in_order_and_wraps() {
        let mut cycle = LabelCycle::new(DOMAINS);
        let mut shown = Vec::new();
        for _ in 0..7 {
            shown.push(cycle.current().unwrap());
            cycle = cycle.advance();
        }
        assert_eq!(
            shown,
            [
                "Pentesting",
                "Cryptography",
                "Forensics",
                "Pentesting",
                "Cryptography",
                "Forensics",
                "Pentesting",
            ]
        );
    }

    #[test]
    fn single_label_stays_put() {
        const ONE: &[&str] = &["Forensics"];
        let cycle = LabelCycle::new(ONE).advance().advance();
        assert_eq!(cycle.current(), Some("Forensics"));
    }

    #[test]
    fn empty_list_has_no_label() {
        let cycle = LabelCycle::new(&[]).advance();
        assert_eq!(cycle.current(), None);
    }

    #[test]
    fn reducer_advances() {
        let cycle = Rc::new(LabelCycle::new(DOMAINS));
        let next = cycle.reduce(LabelAction::Advance);
        assert_eq!(next.current(), Some("Cryptography"));
    }

    #[test]
    fn site_labels_wrap_after_forensics() {
        let labels = crate::content::ROTATING_LABELS;
        let mut cycle = LabelCycle::new(labels);
        for _ in 0..labels.len() - 1 {
            cycle = cycle.advance();
        }
        assert_eq!(cycle.current(), Some("Forensics"));
        assert_eq!(cycle.advance().current(), Some("Pentesting"));
    }
}
