use std::cell::Cell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use super::{Component, ComponentId, Event, Mediator, Operation, ReactionTable};
use crate::error::{PatternError, Result};

/// Nesting limit for notifications when none is configured.
pub const DEFAULT_MAX_REACTION_DEPTH: usize = 32;

/// Collects the components and reactions a [`ConcreteMediator`] coordinates.
pub struct MediatorBuilder {
    reactions: ReactionTable,
    components: Vec<Rc<dyn Component>>,
    max_depth: usize,
}

impl MediatorBuilder {
    pub fn new(reactions: ReactionTable) -> Self {
        Self {
            reactions,
            components: Vec::new(),
            max_depth: DEFAULT_MAX_REACTION_DEPTH,
        }
    }

    pub fn register(mut self, component: Rc<dyn Component>) -> Self {
        self.components.push(component);
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validates the wiring and attaches every registered component to the
    /// new mediator.
    ///
    /// Fails with [`PatternError::DuplicateComponent`] when a component id
    /// is registered twice, and with [`PatternError::UnwiredComponent`] when
    /// a reaction targets a component that was never registered. Nothing is
    /// attached when validation fails.
    pub fn build(self) -> Result<Rc<ConcreteMediator>> {
        let mut components = BTreeMap::new();
        for component in self.components {
            let id = component.id();
            if components.insert(id, component).is_some() {
                warn!(component = %id, "duplicate registration");
                return Err(PatternError::DuplicateComponent { component: id });
            }
        }

        if let Some(missing) = self
            .reactions
            .operations()
            .find(|op| !components.contains_key(&op.owner()))
        {
            warn!(operation = %missing, "reaction targets an unregistered component");
            return Err(PatternError::UnwiredComponent {
                component: missing.owner(),
            });
        }

        let reactions = self.reactions;
        let limit = self.max_depth;
        Ok(Rc::new_cyclic(|weak: &Weak<ConcreteMediator>| {
            for component in components.values() {
                let mediator: Weak<dyn Mediator> = weak.clone();
                component.set_mediator(mediator);
            }
            debug!(components = components.len(), "mediator wired");
            ConcreteMediator {
                components,
                reactions,
                depth: Cell::new(0),
                limit,
            }
        }))
    }
}

/// Routes notifications through a fixed [`ReactionTable`].
pub struct ConcreteMediator {
    components: BTreeMap<ComponentId, Rc<dyn Component>>,
    reactions: ReactionTable,
    depth: Cell<usize>,
    limit: usize,
}

impl ConcreteMediator {
    /// Wires `components` with the classic reaction table.
    pub fn new(components: Vec<Rc<dyn Component>>) -> Result<Rc<Self>> {
        components
            .into_iter()
            .fold(MediatorBuilder::new(ReactionTable::classic()), MediatorBuilder::register)
            .build()
    }

    pub fn builder(reactions: ReactionTable) -> MediatorBuilder {
        MediatorBuilder::new(reactions)
    }

    pub fn component(&self, id: ComponentId) -> Option<&Rc<dyn Component>> {
        self.components.get(&id)
    }

    pub fn reactions(&self) -> &ReactionTable {
        &self.reactions
    }

    /// Client entry point: runs `operation` on the component that owns it.
    pub fn trigger(&self, operation: Operation) -> Result<()> {
        let owner = operation.owner();
        self.component(owner)
            .ok_or(PatternError::UnwiredComponent { component: owner })?
            .perform(operation)
    }

    fn react(&self, sender: ComponentId, event: Event) -> Result<()> {
        for &operation in self.reactions.reactions(event) {
            trace!(%sender, %event, %operation, "reaction");
            self.trigger(operation)?;
        }
        Ok(())
    }
}

impl Mediator for ConcreteMediator {
    fn notify(&self, sender: ComponentId, event: Event) -> Result<()> {
        let depth = self.depth.get() + 1;
        if depth > self.limit {
            return Err(PatternError::ReactionChainTooDeep {
                depth,
                limit: self.limit,
            });
        }
        debug!(%sender, %event, depth, "notify");

        self.depth.set(depth);
        let result = self.react(sender, event);
        self.depth.set(depth - 1);
        result
    }
}
