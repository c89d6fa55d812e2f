//! The turn driver.
//!
//! A [`Session`] owns the world, the player's context and any pending
//! clarification. Each call to [`Session::process`] handles one input line:
//! it resumes a pending dialog, substitutes pronouns, parses, resolves the
//! intent, narrates fallbacks and finally ticks the actors.

use grue_core::{
    ActorEntry, Context, CoreError, EntityId, Intent, InteractionResult, World,
};
use grue_mechanics::{CombatProfiles, TurnContext, tick_actors};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::config::{EngineConfig, NarrationFallback};
use crate::dialog::{DialogOutcome, PendingDialog};
use crate::error::{EngineError, EngineResult};
use crate::narrator::{NarrationRequest, Narrator, SingleNoun, TemplateNarrator};
use crate::parser::{IntentParser, KeywordParser};
use crate::resolve::commands::intransitive;
use crate::resolve::movement::{arrive, describe_location, enter, exit, go};
use crate::resolve::multi::resolve_multi;
use crate::resolve::single::resolve_single;
use crate::resolve::{PronounOutcome, Resolution, resolve_pronouns};
use crate::text::{lines, normalize};
use crate::verbs::VerbGroup;

/// Answer to any input once the game is over.
pub const GAME_OVER: &str = "The game is over. Start a new game to play again.";

const PARDON: &str = "I beg your pardon?";
const NOT_UNDERSTOOD: &str = "I don't understand that.";
const UNCONSCIOUS: &str = "You are unconscious and can do nothing.";

/// The outcome of routing one intent, before narration and actor ticks.
enum Step {
    /// Finished. `accepted` commands take a move and tick the actors.
    Done { text: String, accepted: bool },
    /// Ask the player a question and wait for the answer.
    Ask(PendingDialog),
    /// Finished, but the text comes from the narrator.
    Narrate(NarrationRequest),
}

impl Step {
    fn accepted(text: impl Into<String>) -> Self {
        Self::Done {
            text: text.into(),
            accepted: true,
        }
    }

    /// Map a resolution result, narrating verb and noun misses.
    fn from_result(
        result: InteractionResult,
        world: &World,
        ctx: &Context,
        verb: &str,
        phrase: &str,
    ) -> Self {
        let fallback = |noun: String| SingleNoun {
            location: world.name_of(ctx.location),
            verb: verb.to_string(),
            noun,
        };
        match result {
            InteractionResult::Positive { message } => Self::accepted(message),
            InteractionResult::Disambiguation(d) => Self::Ask(PendingDialog::Disambiguation(d)),
            InteractionResult::NoVerbMatch { noun } => {
                Self::Narrate(NarrationRequest::VerbHasNoEffect(fallback(noun)))
            }
            InteractionResult::NoNounMatch => {
                Self::Narrate(NarrationRequest::NounNotPresent(fallback(phrase.to_string())))
            }
        }
    }
}

/// One player's game.
pub struct Session {
    world: World,
    ctx: Context,
    config: EngineConfig,
    profiles: CombatProfiles,
    rng: StdRng,
    narrator: Box<dyn Narrator>,
    parser: Box<dyn IntentParser>,
    pending: Option<PendingDialog>,
}

impl Session {
    /// Start a session at the world's first location.
    pub fn new(world: World, config: EngineConfig) -> EngineResult<Self> {
        let start = world.first_location().ok_or(EngineError::NoStartLocation)?;
        Self::at_location(world, start, config)
    }

    /// Start a session at a specific location.
    pub fn at_location(world: World, location: EntityId, config: EngineConfig) -> EngineResult<Self> {
        if !world.entity(location)?.is_location() {
            return Err(CoreError::NotALocation(location).into());
        }
        let mut ctx = Context::new(location);
        ctx.carry_limit = config.carry_limit;
        ctx.death_limit = config.death_limit;
        ctx.verbosity = config.verbosity;
        for foe in world.foes_in(location) {
            ctx.actors.register(ActorEntry::Foe { foe });
        }
        info!(
            location = %world.name_of(location),
            entities = world.len(),
            seed = config.seed,
            "session started"
        );
        Ok(Self {
            world,
            ctx,
            rng: StdRng::seed_from_u64(config.seed),
            config,
            profiles: CombatProfiles::standard(),
            narrator: Box::new(TemplateNarrator::new()),
            parser: Box::new(KeywordParser::new()),
            pending: None,
        })
    }

    /// Use a different narration service.
    pub fn with_narrator(mut self, narrator: impl Narrator + 'static) -> Self {
        self.narrator = Box::new(narrator);
        self
    }

    /// Use a different input parser.
    pub fn with_parser(mut self, parser: impl IntentParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Use a different set of combat profiles.
    pub fn with_profiles(mut self, profiles: CombatProfiles) -> Self {
        self.profiles = profiles;
        self
    }

    /// The story world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the story world.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The player's state.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Mutable access to the player's state.
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    /// The question waiting for an answer, if any.
    pub fn pending(&self) -> Option<&PendingDialog> {
        self.pending.as_ref()
    }

    /// The session configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Describe the starting location.
    pub fn opening(&mut self) -> String {
        let text = describe_location(&self.world, &self.ctx, true);
        if !self.world.is_dark(self.ctx.location, &self.ctx) {
            self.ctx.visited.insert(self.ctx.location);
        }
        lines(&[text])
    }

    fn turn(&mut self) -> TurnContext<'_> {
        TurnContext {
            world: &mut self.world,
            ctx: &mut self.ctx,
            profiles: &self.profiles,
            rng: &mut self.rng,
        }
    }

    /// Handle one line of player input and return the response text.
    pub async fn process(&mut self, input: &str) -> EngineResult<String> {
        if self.ctx.game_over {
            return Ok(lines(&[GAME_OVER.to_string()]));
        }
        let input = input.trim();
        if input.is_empty() {
            return Ok(lines(&[PARDON.to_string()]));
        }

        let mut command = input.to_string();
        if let Some(dialog) = self.pending.take() {
            match dialog.resume(input) {
                DialogOutcome::Rewritten(rewritten) => command = rewritten,
                DialogOutcome::Abandoned => debug!(input = %input, "clarification abandoned"),
            }
        }

        match resolve_pronouns(&self.world, &self.ctx, &command)? {
            PronounOutcome::Unchanged => {}
            PronounOutcome::Substituted(substituted) => command = substituted,
            PronounOutcome::Clarify { prompt, template } => {
                let text = lines(&[prompt.clone()]);
                self.pending = Some(PendingDialog::Pronoun { prompt, template });
                return Ok(text);
            }
        }

        let Some(intent) = self.parser.parse(&command) else {
            return Ok(lines(&[NOT_UNDERSTOOD.to_string()]));
        };
        self.process_intent(intent).await
    }

    /// Resolve an already-parsed intent, then tick the actors.
    pub async fn process_intent(&mut self, mut intent: Intent) -> EngineResult<String> {
        if self.ctx.game_over {
            return Ok(lines(&[GAME_OVER.to_string()]));
        }
        debug!(intent = intent.label(), "routing intent");
        let (primary, accepted) = match self.route(&mut intent)? {
            Step::Done { text, accepted } => (text, accepted),
            Step::Ask(dialog) => {
                let text = lines(&[dialog.prompt().to_string()]);
                self.pending = Some(dialog);
                return Ok(text);
            }
            Step::Narrate(request) => (self.narrate(request).await?, true),
        };
        if !accepted {
            return Ok(lines(&[primary]));
        }

        self.ctx.moves += 1;
        let report = tick_actors(&mut self.turn())?;
        let Some(death) = report.death else {
            let mut parts = vec![primary];
            parts.extend(report.messages);
            return Ok(lines(&parts));
        };

        // The death replaces whatever the command itself produced.
        self.pending = None;
        let mut parts = report.messages;
        if !death.game_over {
            let respawn = self.ctx.respawn;
            parts.push(arrive(&mut self.turn(), respawn)?);
        }
        Ok(lines(&parts))
    }

    fn route(&mut self, intent: &mut Intent) -> EngineResult<Step> {
        if self.ctx.vitals.is_unconscious() {
            return Ok(Step::accepted(UNCONSCIOUS));
        }
        let mut turn = self.turn();
        let step = match intent {
            Intent::Move(m) => {
                let result = go(&mut turn, m.direction)?;
                Step::from_result(result, turn.world, turn.ctx, "go", m.direction.name())
            }
            Intent::ExitSubLocation(e) => {
                let noun = e.noun.as_deref();
                let result = exit(&mut turn, noun)?;
                Step::from_result(result, turn.world, turn.ctx, "exit", noun.unwrap_or_default())
            }
            Intent::Simple(simple) => {
                let verb = normalize(&simple.verb);
                match simple.noun_phrase() {
                    None => match intransitive(&mut turn, &verb) {
                        Some(text) => Step::accepted(text),
                        None => Step::Done {
                            text: format!("What do you want to {verb}?"),
                            accepted: false,
                        },
                    },
                    Some(phrase) => {
                        let result = if VerbGroup::Enter.matches(&verb) {
                            enter(&mut turn, &normalize(&phrase))?
                        } else {
                            resolve_single(&mut turn, simple)?
                        };
                        Step::from_result(result, turn.world, turn.ctx, &verb, &phrase)
                    }
                }
            }
            Intent::MultiNoun(multi) => match resolve_multi(&mut turn, multi)? {
                Resolution::Done(result) => {
                    let verb = normalize(&multi.verb);
                    Step::from_result(result, turn.world, turn.ctx, &verb, &multi.noun_one)
                }
                Resolution::Narrate(request) => Step::Narrate(request),
            },
        };
        Ok(step)
    }

    /// Ask the narrator for fallback prose, applying the failure policy.
    async fn narrate(&self, request: NarrationRequest) -> EngineResult<String> {
        let kind = request.kind();
        match self.narrator.narrate(request).await {
            Ok(text) if !text.trim().is_empty() => Ok(text),
            Ok(_) => {
                warn!(kind, "narrator returned no text");
                Ok(self.placeholder())
            }
            Err(err) => {
                warn!(kind, error = %err, "narration failed");
                match &self.config.narration_fallback {
                    NarrationFallback::Placeholder(text) => Ok(text.clone()),
                    NarrationFallback::Propagate => Err(err.into()),
                }
            }
        }
    }

    fn placeholder(&self) -> String {
        match &self.config.narration_fallback {
            NarrationFallback::Placeholder(text) => text.clone(),
            NarrationFallback::Propagate => String::new(),
        }
    }
}
