use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::info;

use super::{Component, ComponentId, Event, Mediator, Operation};
use crate::error::{PatternError, Result};

/// Shared record of what the components did, in order.
#[derive(Debug, Default)]
pub struct Journal {
    entries: RefCell<Vec<String>>,
}

impl Journal {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    fn record(&self, component: ComponentId, event: Event) {
        let entry = format!("{component} does {event}.");
        info!(%component, %event, "{entry}");
        self.entries.borrow_mut().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<String> {
        self.entries.take()
    }
}

/// Back-reference to a mediator plus the journal every component writes to.
struct Link {
    id: ComponentId,
    mediator: RefCell<Option<Weak<dyn Mediator>>>,
    journal: Rc<Journal>,
}

impl Link {
    fn new(id: ComponentId, journal: Rc<Journal>) -> Self {
        Self {
            id,
            mediator: RefCell::new(None),
            journal,
        }
    }

    fn attach(&self, mediator: Weak<dyn Mediator>) {
        *self.mediator.borrow_mut() = Some(mediator);
    }

    fn is_attached(&self) -> bool {
        self.mediator
            .borrow()
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    fn mediator(&self) -> Result<Rc<dyn Mediator>> {
        let weak = self
            .mediator
            .borrow()
            .clone()
            .ok_or(PatternError::UnwiredComponent { component: self.id })?;
        weak.upgrade()
            .ok_or(PatternError::MediatorDropped { component: self.id })
    }

    /// Applies the local effect of an operation raising `event`, then
    /// notifies the mediator. A detached component fails before any effect.
    fn run(&self, event: Event) -> Result<()> {
        let mediator = self.mediator()?;
        self.journal.record(self.id, event);
        mediator.notify(self.id, event)
    }
}

pub struct Component1 {
    link: Link,
}

impl Component1 {
    pub fn new(journal: Rc<Journal>) -> Rc<Self> {
        Rc::new(Self {
            link: Link::new(ComponentId::Component1, journal),
        })
    }

    pub fn do_a(&self) -> Result<()> {
        self.link.run(Event::A)
    }

    pub fn do_b(&self) -> Result<()> {
        self.link.run(Event::B)
    }
}

impl Component for Component1 {
    fn id(&self) -> ComponentId {
        self.link.id
    }

    fn set_mediator(&self, mediator: Weak<dyn Mediator>) {
        self.link.attach(mediator);
    }

    fn is_attached(&self) -> bool {
        self.link.is_attached()
    }

    fn perform(&self, operation: Operation) -> Result<()> {
        match operation {
            Operation::DoA => self.do_a(),
            Operation::DoB => self.do_b(),
            other => Err(PatternError::UnsupportedOperation {
                component: self.id(),
                operation: other,
            }),
        }
    }
}

pub struct Component2 {
    link: Link,
}

impl Component2 {
    pub fn new(journal: Rc<Journal>) -> Rc<Self> {
        Rc::new(Self {
            link: Link::new(ComponentId::Component2, journal),
        })
    }

    pub fn do_c(&self) -> Result<()> {
        self.link.run(Event::C)
    }

    pub fn do_d(&self) -> Result<()> {
        self.link.run(Event::D)
    }
}

impl Component for Component2 {
    fn id(&self) -> ComponentId {
        self.link.id
    }

    fn set_mediator(&self, mediator: Weak<dyn Mediator>) {
        self.link.attach(mediator);
    }

    fn is_attached(&self) -> bool {
        self.link.is_attached()
    }

    fn perform(&self, operation: Operation) -> Result<()> {
        match operation {
            Operation::DoC => self.do_c(),
            Operation::DoD => self.do_d(),
            other => Err(PatternError::UnsupportedOperation {
                component: self.id(),
                operation: other,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records notifications without reacting.
    #[derive(Default)]
    struct RecordingMediator {
        seen: RefCell<Vec<(ComponentId, Event)>>,
    }

    impl Mediator for RecordingMediator {
        fn notify(&self, sender: ComponentId, event: Event) -> Result<()> {
            self.seen.borrow_mut().push((sender, event));
            Ok(())
        }
    }

    #[test]
    fn test_detached_component_fails_without_effect() {
        let journal = Journal::new();
        let component = Component1::new(journal.clone());

        assert!(!component.is_attached());
        let err = component.do_a().unwrap_err();
        assert!(matches!(
            err,
            PatternError::UnwiredComponent {
                component: ComponentId::Component1
            }
        ));
        assert!(journal.is_empty());
    }

    #[test]
    fn test_operation_notifies_after_local_effect() {
        let journal = Journal::new();
        let component = Component2::new(journal.clone());
        let mediator = Rc::new(RecordingMediator::default());
        let weak: Weak<dyn Mediator> = Rc::downgrade(&mediator) as Weak<dyn Mediator>;
        component.set_mediator(weak);

        component.do_d().unwrap();
        component.do_c().unwrap();

        assert_eq!(journal.entries(), ["Component 2 does D.", "Component 2 does C."]);
        assert_eq!(
            *mediator.seen.borrow(),
            [
                (ComponentId::Component2, Event::D),
                (ComponentId::Component2, Event::C)
            ]
        );
    }

    #[test]
    fn test_dropped_mediator_is_reported() {
        let journal = Journal::new();
        let component = Component1::new(journal.clone());
        {
            let mediator: Rc<dyn Mediator> = Rc::new(RecordingMediator::default());
            component.set_mediator(Rc::downgrade(&mediator));
            assert!(component.is_attached());
        }

        assert!(!component.is_attached());
        assert!(matches!(
            component.do_b(),
            Err(PatternError::MediatorDropped { .. })
        ));
    }

    #[test]
    fn test_perform_rejects_foreign_operation() {
        let component = Component1::new(Journal::new());
        assert!(matches!(
            component.perform(Operation::DoC),
            Err(PatternError::UnsupportedOperation {
                component: ComponentId::Component1,
                operation: Operation::DoC
            })
        ));
    }

    #[test]
    fn test_journal_take_clears() {
        let journal = Journal::new();
        journal.record(ComponentId::Component1, Event::B);
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.take(), ["Component 1 does B."]);
        assert!(journal.is_empty());
    }
}
