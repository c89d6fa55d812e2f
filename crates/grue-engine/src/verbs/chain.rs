//! The single-noun verb processor chain.

use grue_core::{Capability, EntityId, InteractionResult};
use grue_mechanics::TurnContext;
use tracing::debug;

use super::VerbGroup;
use super::handlers;
use crate::error::EngineResult;

/// A handler bound to one verb group and one capability.
pub type Handler =
    fn(&mut TurnContext<'_>, &str, EntityId) -> EngineResult<InteractionResult>;

/// One link of the chain.
#[derive(Debug, Clone, Copy)]
pub struct VerbProcessor {
    /// Verbs this processor answers to.
    pub group: VerbGroup,
    /// Capability the target must advertise.
    pub capability: Capability,
    /// The handler.
    pub handler: Handler,
}

impl VerbProcessor {
    /// Run the handler directly. Fails with
    /// [`crate::EngineError::MissingCapability`] if the target does not
    /// advertise the capability.
    pub fn invoke(
        &self,
        turn: &mut TurnContext<'_>,
        verb: &str,
        target: EntityId,
    ) -> EngineResult<InteractionResult> {
        (self.handler)(turn, verb, target)
    }
}

/// The fixed processor order.
pub const CHAIN: &[VerbProcessor] = &[
    VerbProcessor {
        group: VerbGroup::Open,
        capability: Capability::Openable,
        handler: handlers::open,
    },
    VerbProcessor {
        group: VerbGroup::Close,
        capability: Capability::Openable,
        handler: handlers::close,
    },
    VerbProcessor {
        group: VerbGroup::Take,
        capability: Capability::Takeable,
        handler: handlers::take,
    },
    VerbProcessor {
        group: VerbGroup::Drop,
        capability: Capability::Takeable,
        handler: handlers::drop,
    },
    VerbProcessor {
        group: VerbGroup::Wear,
        capability: Capability::Wearable,
        handler: handlers::wear,
    },
    VerbProcessor {
        group: VerbGroup::Remove,
        capability: Capability::Wearable,
        handler: handlers::remove,
    },
    VerbProcessor {
        group: VerbGroup::Eat,
        capability: Capability::Edible,
        handler: handlers::eat,
    },
    VerbProcessor {
        group: VerbGroup::Drink,
        capability: Capability::Drinkable,
        handler: handlers::drink,
    },
    VerbProcessor {
        group: VerbGroup::Examine,
        capability: Capability::Examinable,
        handler: handlers::examine,
    },
    VerbProcessor {
        group: VerbGroup::Smell,
        capability: Capability::Smellable,
        handler: handlers::smell,
    },
    VerbProcessor {
        group: VerbGroup::Read,
        capability: Capability::Readable,
        handler: handlers::read,
    },
    VerbProcessor {
        group: VerbGroup::LightOn,
        capability: Capability::Lightable,
        handler: handlers::light_on,
    },
    VerbProcessor {
        group: VerbGroup::LightOff,
        capability: Capability::Lightable,
        handler: handlers::light_off,
    },
    VerbProcessor {
        group: VerbGroup::Attack,
        capability: Capability::Combatant,
        handler: handlers::attack,
    },
];

/// Offer a verb and target to the chain. The first processor whose verb
/// group matches and whose capability the target advertises handles it.
/// Returns `None` when no processor takes it.
pub fn dispatch(
    turn: &mut TurnContext<'_>,
    verb: &str,
    target: EntityId,
) -> EngineResult<Option<InteractionResult>> {
    let capabilities = turn.world.entity(target)?.capabilities.clone();
    let Some(processor) = CHAIN
        .iter()
        .find(|p| p.group.matches(verb) && capabilities.has(p.capability))
    else {
        return Ok(None);
    };
    debug!(verb = %verb, group = ?processor.group, "verb processor accepted");
    processor.invoke(turn, verb, target).map(Some)
}
