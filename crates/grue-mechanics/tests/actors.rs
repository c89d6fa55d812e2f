//! Once-per-turn actor ticking.

use grue_core::component::{
    CombatantComponent, ComponentSet, DoorComponent, LightComponent, LocationComponent,
};
use grue_core::{
    ActorEntry, ActorKey, Capability, Context, Entity, EntityId, EntityKind, Subject, World,
};
use grue_mechanics::turn::LAMP_DIM_AT;
use grue_mechanics::{
    AttackProfile, CombatProfile, CombatProfiles, OutcomeKind, OutcomeTable, TurnContext,
    tick_actors,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn single(kind: OutcomeKind) -> CombatProfiles {
    let attack = AttackProfile {
        requires_weapon: false,
        base: OutcomeTable::new().with(kind, "The {foe} strikes."),
        armed: OutcomeTable::new(),
        recovering: "recovering".to_string(),
        bare_handed: String::new(),
        helpless: "helpless".to_string(),
        escalation: "escalation".to_string(),
    };
    CombatProfiles::new().with(CombatProfile {
        name: "troll".to_string(),
        wound_duration: 2,
        knockout_turns: 2,
        player_attack: attack.clone(),
        foe_attack: attack,
        wakes: "The {foe} wakes.".to_string(),
    })
}

fn room(world: &mut World, name: &str) -> EntityId {
    world
        .add_entity(
            Entity::new(EntityKind::Location, name).with_components(ComponentSet {
                location: Some(LocationComponent::new()),
                ..Default::default()
            }),
        )
        .unwrap()
}

fn troll_in(world: &mut World, location: EntityId) -> EntityId {
    let troll = world
        .add_entity(
            Entity::new(EntityKind::Creature, "troll")
                .with_capability(Capability::Combatant)
                .with_components(ComponentSet {
                    combatant: Some(CombatantComponent::new("troll")),
                    ..Default::default()
                }),
        )
        .unwrap();
    world.place(troll, location).unwrap();
    troll
}

fn tick(world: &mut World, ctx: &mut Context, profiles: &CombatProfiles) -> grue_mechanics::TickReport {
    let mut rng = StdRng::seed_from_u64(9);
    let mut turn = TurnContext {
        world,
        ctx,
        profiles,
        rng: &mut rng,
    };
    tick_actors(&mut turn).unwrap()
}

#[test]
fn closing_timer_shuts_the_door() {
    let mut world = World::new();
    let living = room(&mut world, "Living Room");
    let door = world
        .add_entity(
            Entity::fixture("trap door")
                .with_capability(Capability::Openable)
                .with_components(ComponentSet {
                    door: Some(DoorComponent {
                        closes_after: Some(2),
                        closing_message: "The trap door crashes shut.".to_string(),
                    }),
                    ..Default::default()
                }),
        )
        .unwrap();
    world.place(door, living).unwrap();
    world.get_mut(door).unwrap().state.open = true;

    let mut ctx = Context::new(living);
    ctx.actors.register(ActorEntry::ClosingTimer {
        door,
        turns_left: 2,
    });
    let profiles = CombatProfiles::standard();

    let first = tick(&mut world, &mut ctx, &profiles);
    assert!(first.messages.is_empty());
    assert!(world.get(door).unwrap().state.open);

    let second = tick(&mut world, &mut ctx, &profiles);
    assert_eq!(second.messages, vec!["The trap door crashes shut.".to_string()]);
    assert!(!world.get(door).unwrap().state.open);
    assert!(ctx.actors.is_empty());
}

#[test]
fn actors_tick_in_registration_order() {
    let mut world = World::new();
    let here = room(&mut world, "Hall");
    let make_door = |world: &mut World, msg: &str| {
        let door = world
            .add_entity(Entity::fixture("door").with_components(ComponentSet {
                door: Some(DoorComponent {
                    closes_after: Some(1),
                    closing_message: msg.to_string(),
                }),
                ..Default::default()
            }))
            .unwrap();
        world.place(door, here).unwrap();
        world.get_mut(door).unwrap().state.open = true;
        door
    };
    let second = make_door(&mut world, "second");
    let first = make_door(&mut world, "first");

    let mut ctx = Context::new(here);
    ctx.actors.register(ActorEntry::ClosingTimer {
        door: first,
        turns_left: 1,
    });
    ctx.actors.register(ActorEntry::ClosingTimer {
        door: second,
        turns_left: 1,
    });
    // Re-registering must not cause a second tick.
    ctx.actors.register(ActorEntry::ClosingTimer {
        door: first,
        turns_left: 1,
    });

    let report = tick(&mut world, &mut ctx, &CombatProfiles::standard());
    assert_eq!(report.messages, vec!["first".to_string(), "second".to_string()]);
}

#[test]
fn foe_leaves_registry_when_player_is_elsewhere() {
    let mut world = World::new();
    let troll_room = room(&mut world, "Troll Room");
    let elsewhere = room(&mut world, "Cellar");
    let troll = troll_in(&mut world, troll_room);

    let mut ctx = Context::new(elsewhere);
    ctx.actors.register(ActorEntry::Foe { foe: troll });
    let report = tick(&mut world, &mut ctx, &single(OutcomeKind::Miss));
    assert!(report.messages.is_empty());
    assert!(!ctx.actors.contains(ActorKey::Foe(troll)));
}

#[test]
fn foe_attacks_player_in_same_room() {
    let mut world = World::new();
    let troll_room = room(&mut world, "Troll Room");
    let troll = troll_in(&mut world, troll_room);

    let mut ctx = Context::new(troll_room);
    ctx.actors.register(ActorEntry::Foe { foe: troll });
    let report = tick(&mut world, &mut ctx, &single(OutcomeKind::Stun));
    assert_eq!(report.messages, vec!["The troll strikes.".to_string()]);
    assert!(ctx.vitals.stunned);
    assert!(ctx.actors.contains(ActorKey::Foe(troll)));
}

#[test]
fn player_death_stops_ticking() {
    let mut world = World::new();
    let start = room(&mut world, "West of House");
    let troll_room = room(&mut world, "Troll Room");
    let troll = troll_in(&mut world, troll_room);
    let door = world
        .add_entity(Entity::fixture("door").with_components(ComponentSet {
            door: Some(DoorComponent {
                closes_after: Some(1),
                closing_message: "shut".to_string(),
            }),
            ..Default::default()
        }))
        .unwrap();
    world.place(door, troll_room).unwrap();
    world.get_mut(door).unwrap().state.open = true;

    let mut ctx = Context::new(start);
    ctx.location = troll_room;
    ctx.actors.register(ActorEntry::Foe { foe: troll });
    ctx.actors.register(ActorEntry::ClosingTimer {
        door,
        turns_left: 1,
    });

    let report = tick(&mut world, &mut ctx, &single(OutcomeKind::Fatal));
    assert!(report.death.is_some());
    assert_eq!(report.messages.len(), 1);
    assert!(world.get(door).unwrap().state.open);
    assert_eq!(ctx.location, start);
}

#[test]
fn knocked_out_foe_wakes_up() {
    let mut world = World::new();
    let troll_room = room(&mut world, "Troll Room");
    let troll = troll_in(&mut world, troll_room);
    world
        .get_mut(troll)
        .unwrap()
        .components
        .combatant
        .as_mut()
        .unwrap()
        .vitals
        .unconscious_turns = Some(2);

    let mut ctx = Context::new(troll_room);
    ctx.actors.register(ActorEntry::Foe { foe: troll });
    ctx.actors.register(ActorEntry::Recovery {
        subject: Subject::Foe(troll),
    });
    let profiles = single(OutcomeKind::Miss);

    let first = tick(&mut world, &mut ctx, &profiles);
    assert!(first.messages.is_empty());
    let second = tick(&mut world, &mut ctx, &profiles);
    assert_eq!(second.messages, vec!["The troll wakes.".to_string()]);
    assert!(!ctx.actors.contains(ActorKey::Recovery(Subject::Foe(troll))));

    let third = tick(&mut world, &mut ctx, &profiles);
    assert_eq!(third.messages, vec!["The troll strikes.".to_string()]);
}

#[test]
fn lamp_dims_then_goes_out() {
    let mut world = World::new();
    let cellar = room(&mut world, "Cellar");
    let lamp = world
        .add_entity(
            Entity::item("lamp")
                .with_capability(Capability::Lightable)
                .with_components(ComponentSet {
                    light: Some(LightComponent {
                        fuel: Some(LAMP_DIM_AT + 1),
                    }),
                    ..Default::default()
                }),
        )
        .unwrap();
    world.get_mut(lamp).unwrap().state.lit = true;
    let mut ctx = Context::new(cellar);
    ctx.add_item(lamp);
    ctx.actors.register(ActorEntry::LampTimer { lamp });
    let profiles = CombatProfiles::standard();

    let first = tick(&mut world, &mut ctx, &profiles);
    assert_eq!(first.messages, vec!["The lamp is getting dim.".to_string()]);

    let mut last = Vec::new();
    for _ in 0..LAMP_DIM_AT {
        last = tick(&mut world, &mut ctx, &profiles).messages;
    }
    assert_eq!(last, vec!["The lamp has gone out.".to_string()]);
    assert!(!world.get(lamp).unwrap().state.lit);
    assert!(!ctx.actors.contains(ActorKey::LampTimer(lamp)));
}

#[test]
fn lamp_timer_stops_when_switched_off() {
    let mut world = World::new();
    let cellar = room(&mut world, "Cellar");
    let lamp = world
        .add_entity(
            Entity::item("lamp")
                .with_capability(Capability::Lightable)
                .with_components(ComponentSet {
                    light: Some(LightComponent { fuel: Some(20) }),
                    ..Default::default()
                }),
        )
        .unwrap();
    let mut ctx = Context::new(cellar);
    ctx.actors.register(ActorEntry::LampTimer { lamp });
    tick(&mut world, &mut ctx, &CombatProfiles::standard());
    assert!(ctx.actors.is_empty());
    let fuel = world.get(lamp).unwrap().components.light.as_ref().unwrap().fuel;
    assert_eq!(fuel, Some(20));
}

#[test]
fn player_wound_heals() {
    let mut world = World::new();
    let here = room(&mut world, "Hall");
    let mut ctx = Context::new(here);
    ctx.vitals.wound_turns = Some(1);
    ctx.actors.register(ActorEntry::Recovery {
        subject: Subject::Player,
    });
    let report = tick(&mut world, &mut ctx, &CombatProfiles::standard());
    assert_eq!(report.messages, vec!["You feel much better.".to_string()]);
    assert!(!ctx.vitals.is_wounded());
    assert!(ctx.actors.is_empty());
}
