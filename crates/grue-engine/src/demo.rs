//! A small sample world around a white house.

use grue_core::component::{
    CombatantComponent, ComponentSet, ContainerComponent, DoorComponent, Exit, LightComponent,
    LocationComponent, ScriptedInteraction, ScriptedPair, WeaponComponent,
};
use grue_core::{Capability, CoreResult, Direction, Entity, EntityId, EntityKind, World};

fn room(name: &str, description: &str, location: LocationComponent) -> Entity {
    Entity::new(EntityKind::Location, name)
        .with_description(description)
        .with_components(ComponentSet {
            location: Some(location),
            ..Default::default()
        })
}

fn container(entity: Entity, container: ContainerComponent) -> Entity {
    let entity = entity
        .with_capability(Capability::Container)
        .with_capability(Capability::Openable);
    let mut components = entity.components.clone();
    components.container = Some(container);
    entity.with_components(components)
}

fn add_in(world: &mut World, entity: Entity, holder: EntityId) -> CoreResult<EntityId> {
    let id = world.add_entity(entity)?;
    world.place(id, holder)?;
    Ok(id)
}

fn link(world: &mut World, from: EntityId, direction: Direction, exit: Exit) -> CoreResult<()> {
    if let Some(location) = world.entity_mut(from)?.components.location.as_mut() {
        location.exits.insert(direction, exit);
    }
    Ok(())
}

/// Build the sample world. The player starts west of the house.
///
/// The trap door under the living room rug stays hidden until the rug is
/// moved. The troll guards the way east and hoards a silver chalice.
pub fn white_house() -> CoreResult<World> {
    let mut world = World::new();

    let west = world.add_entity(room(
        "West of House",
        "You are standing in an open field west of a white house, with a boarded front door.",
        LocationComponent::new().with_mentions(&["house", "white house", "field"]),
    ))?;
    world.entity_mut(west)?.components.interactions = vec![ScriptedInteraction::new(
        &["open", "unlock", "break"],
        &["door", "front door"],
        "The door is boarded and you can't remove the boards.",
    )];
    let kitchen = world.add_entity(room(
        "Kitchen",
        "You are in the kitchen of the white house. A table seems to have been used recently \
         for the preparation of food.",
        LocationComponent::new().with_mentions(&["table"]),
    ))?;
    let living = world.add_entity(room(
        "Living Room",
        "You are in the living room. A large oriental rug lies in the center of the room.",
        LocationComponent::new().with_mentions(&["rug", "oriental rug"]),
    ))?;
    let cellar = world.add_entity(room(
        "Cellar",
        "You are in a dark and damp cellar with a narrow passageway leading north.",
        LocationComponent::new().dark(),
    ))?;
    let troll_room = world.add_entity(room(
        "Troll Room",
        "This is a small room with passages to the east and south. Bloodstains and deep \
         scratches (perhaps made by an axe) mar the walls.",
        LocationComponent::new().with_mentions(&["bloodstains", "scratches"]),
    ))?;
    let bank = world.add_entity(room(
        "Riverbank",
        "You are on the bank of a wide, fast-flowing river.",
        LocationComponent::new().with_mentions(&["river", "water"]),
    ))?;
    world.entity_mut(bank)?.components.pair_interactions = vec![ScriptedPair::new(
        &["fill"],
        &["bottle", "glass bottle"],
        &["water", "river"],
        "You dip the bottle in the river. It comes out full of cold water.",
    )];
    add_in(
        &mut world,
        room(
            "magic boat",
            "The magic boat bobs gently at the water's edge.",
            LocationComponent::new().inside(bank),
        )
        .with_nouns(&["boat"])
        .with_adjectives(&["magic"]),
        bank,
    )?;

    // West of House
    add_in(
        &mut world,
        Entity::new(EntityKind::Person, "hermit")
            .with_description("A wizened hermit leans on a gnarled staff, watching you.")
            .with_nouns(&["old man", "man"]),
        west,
    )?;
    let mailbox = add_in(
        &mut world,
        container(
            Entity::fixture("small mailbox")
                .with_nouns(&["mailbox", "box"])
                .with_adjectives(&["small"]),
            ContainerComponent {
                capacity: 10,
                transparent: false,
            },
        ),
        west,
    )?;
    add_in(
        &mut world,
        Entity::item("leaflet")
            .with_capability(Capability::Readable)
            .with_read_text(
                "WELCOME TO GRUE! Grue is a game of adventure, danger, and low cunning.",
            )
            .with_weight(1),
        mailbox,
    )?;

    // Kitchen
    let sack = add_in(
        &mut world,
        container(
            Entity::item("brown sack")
                .with_nouns(&["sack", "bag"])
                .with_adjectives(&["brown"])
                .with_smell_text("hot peppers")
                .with_weight(2),
            ContainerComponent::default(),
        ),
        kitchen,
    )?;
    add_in(
        &mut world,
        Entity::item("lunch")
            .with_capability(Capability::Edible)
            .with_weight(1),
        sack,
    )?;
    add_in(
        &mut world,
        Entity::item("clove of garlic")
            .with_nouns(&["garlic", "clove"])
            .with_capability(Capability::Edible)
            .with_smell_text("garlic")
            .with_weight(1),
        sack,
    )?;
    add_in(
        &mut world,
        container(
            Entity::item("paper bag")
                .with_nouns(&["bag"])
                .with_adjectives(&["paper"])
                .with_weight(1),
            ContainerComponent::default(),
        ),
        kitchen,
    )?;
    add_in(
        &mut world,
        container(
            Entity::item("glass bottle")
                .with_nouns(&["bottle"])
                .with_adjectives(&["glass"])
                .with_weight(2),
            ContainerComponent {
                capacity: 4,
                transparent: true,
            },
        ),
        kitchen,
    )?;

    // Living Room
    add_in(
        &mut world,
        Entity::item("brass lantern")
            .with_nouns(&["lantern", "lamp"])
            .with_adjectives(&["brass"])
            .with_capability(Capability::Lightable)
            .with_weight(5)
            .with_components(ComponentSet {
                light: Some(LightComponent { fuel: Some(300) }),
                ..Default::default()
            }),
        living,
    )?;
    add_in(
        &mut world,
        Entity::item("elvish sword")
            .with_nouns(&["sword"])
            .with_adjectives(&["elvish"])
            .with_capability(Capability::Weapon)
            .with_description("The sword is of elvish workmanship.")
            .with_weight(10)
            .with_components(ComponentSet {
                weapon: Some(WeaponComponent {
                    glows_near_foes: true,
                }),
                ..Default::default()
            }),
        living,
    )?;
    let case = container(
        Entity::fixture("trophy case").with_nouns(&["case"]),
        ContainerComponent {
            capacity: 100,
            transparent: true,
        },
    );
    add_in(&mut world, case, living)?;
    let trap_door = world.add_entity(
        Entity::fixture("trap door")
            .with_nouns(&["door", "trapdoor"])
            .with_adjectives(&["trap"])
            .with_capability(Capability::Openable)
            .with_components(ComponentSet {
                door: Some(DoorComponent {
                    closes_after: Some(2),
                    closing_message: "The trap door crashes shut.".to_string(),
                }),
                ..Default::default()
            }),
    )?;
    world.entity_mut(living)?.components.interactions = vec![ScriptedInteraction::new(
        &["move", "push", "pull", "look under"],
        &["rug", "oriental rug"],
        "With a great effort, the rug is moved to one side of the room, revealing the dusty \
         cover of a closed trap door.",
    )
    .revealing(trap_door)];

    // Troll Room
    let axe = world.add_entity(
        Entity::item("bloody axe")
            .with_nouns(&["axe"])
            .with_adjectives(&["bloody"])
            .with_capability(Capability::Weapon)
            .with_weight(25),
    )?;
    let chalice = world.add_entity(
        Entity::item("silver chalice")
            .with_nouns(&["chalice", "cup"])
            .with_adjectives(&["silver"])
            .with_weight(10),
    )?;
    let mut troll = CombatantComponent::new("troll");
    troll.weapon = Some(axe);
    troll.treasure = vec![chalice];
    troll.blocks = vec![Direction::East];
    troll.block_message = "The troll fends you off with a menacing gesture.".to_string();
    add_in(
        &mut world,
        Entity::new(EntityKind::Creature, "troll")
            .with_description(
                "A nasty-looking troll, brandishing a bloody axe, blocks all passages out of \
                 the room.",
            )
            .with_capability(Capability::Combatant)
            .with_components(ComponentSet {
                combatant: Some(troll),
                ..Default::default()
            }),
        troll_room,
    )?;

    link(&mut world, west, Direction::East, Exit::to(kitchen))?;
    link(&mut world, kitchen, Direction::West, Exit::to(west))?;
    link(&mut world, kitchen, Direction::North, Exit::to(living))?;
    link(&mut world, living, Direction::South, Exit::to(kitchen))?;
    link(&mut world, living, Direction::Down, Exit::through(cellar, trap_door))?;
    link(&mut world, cellar, Direction::Up, Exit::through(living, trap_door))?;
    link(&mut world, cellar, Direction::North, Exit::to(troll_room))?;
    link(&mut world, troll_room, Direction::South, Exit::to(cellar))?;
    link(&mut world, troll_room, Direction::East, Exit::to(bank))?;
    link(&mut world, bank, Direction::West, Exit::to(troll_room))?;
    tracing::debug!(entities = world.len(), "demo world built");

    Ok(world)
}
