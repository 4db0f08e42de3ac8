//! NPCs with movement and dialogue.

use storyscript_syntax::{Keyword, NodeKind, SyntaxNode};

use super::{block_of, kinds, parse_clean};

const NPCS: &str = r#"npc black_knight {
    name "The Black Knight"
    desc "A dark, glowering presence in a black suit of armor with a longsword."
    state normal
    location room sublevel-1-entrance
    dialogue {
        mad {
            "Have at you!"
            "I'm invincible!"
            "'tis but a scratch."
            "It's just a flesh wound!"
            "Come on, you pansy!"
            "Chicken! Bawk-bawk! Chicken!"
            "Gimme that sword back, or I'll bite your legs off!"
            "I won that sword in the office gift game. Give it back!"
        }
        normal {
            "None shall pass."
            "I move -- for no man."
            "(He stands silently, blocking your path.)"
        }
        happy {
            "None shall pa-- oh, no, you can go."
            "YOU may pass, Candidate; I will be sure to dice anyone who dares to follow."
            "You may pass, but beware and steer clear of Room AA-3B, should it reappear."
            "Behold! (slices an aluminum can and then a tomato, laughing maniacally)"
        }
    }
}

npc gonk_droid {
    name "Gonk Droid"
    desc "A walking battery charger that looks like a trash bin."
    state normal
    location room main-lobby
    movement {
        movement_type route
        rooms (main-lobby, lift-bank-main, lounge)
        timing every_2_turns
    }
    dialogue {
        normal {
            "GONK!"
            "(gonk)"
            "GONK gonk."
            "Gonk... Gonk..."
        }
        happy {
            "(You hear a transformer humming a happy tune.)"
        }
    }
}

npc emh {
    name "Emergency Medical Hologram"
    state custom(want-emitter)
    location nowhere "Offline until the sickbay is powered."
    movement {
        random
        rooms (sickbay, corridor)
        timing(3)
        active false
    }
    dialogue {
        custom(want-emitter) {
            "If only I had a mobile emitter."
        }
    }
}
"#;

fn dialogue_states<'a>(block: &'a SyntaxNode<'a>) -> Vec<&'a SyntaxNode<'a>> {
    block
        .find(NodeKind::NpcDialogue)
        .and_then(|d| d.find(NodeKind::DialogueBlock))
        .map(|d| d.find_all(NodeKind::DialogueState).collect())
        .unwrap_or_default()
}

#[test]
fn dialogue_lines_per_state() {
    let result = parse_clean(NPCS);
    let knight = block_of(&result.root, NodeKind::NpcDef, "black_knight");
    assert_eq!(
        kinds(knight),
        vec![
            NodeKind::NpcName,
            NodeKind::NpcDesc,
            NodeKind::NpcState,
            NodeKind::NpcLocation,
            NodeKind::NpcDialogue,
        ]
    );

    let states: Vec<_> = dialogue_states(knight)
        .into_iter()
        .map(|s| {
            let name = s.identifier().map_or("", |t| t.text);
            (name, s.find_all(NodeKind::String).count())
        })
        .collect();
    assert_eq!(states, vec![("mad", 8), ("normal", 3), ("happy", 4)]);

    let first = dialogue_states(knight)[0]
        .find(NodeKind::String)
        .and_then(SyntaxNode::string_value);
    assert_eq!(first.as_deref(), Some("Have at you!"));
}

#[test]
fn route_movement() {
    let result = parse_clean(NPCS);
    let gonk = block_of(&result.root, NodeKind::NpcDef, "gonk_droid");
    let movement = gonk
        .find(NodeKind::NpcMovement)
        .and_then(|m| m.find(NodeKind::MovementBlock))
        .unwrap();
    assert_eq!(
        kinds(movement),
        vec![
            NodeKind::MovementType,
            NodeKind::MovementRooms,
            NodeKind::MovementTiming,
        ]
    );
    let kind = movement.find(NodeKind::MovementType).unwrap();
    assert!(kind.significant_tokens().any(|t| t.is_keyword(Keyword::Route)));
    let rooms = movement
        .find(NodeKind::MovementRooms)
        .and_then(|r| r.find(NodeKind::RefList))
        .unwrap();
    assert_eq!(rooms.text(NPCS), "main-lobby, lift-bank-main, lounge");
    let timing = movement.find(NodeKind::MovementTiming).unwrap();
    assert_eq!(timing.identifier().map(|t| t.text), Some("every_2_turns"));
}

#[test]
fn random_movement_and_custom_states() {
    let result = parse_clean(NPCS);
    let emh = block_of(&result.root, NodeKind::NpcDef, "emh");

    let state = emh
        .find(NodeKind::NpcState)
        .and_then(|s| s.find(NodeKind::StateRef))
        .unwrap();
    assert_eq!(state.text(NPCS), "custom(want-emitter)");

    let location = emh
        .find(NodeKind::NpcLocation)
        .and_then(|l| l.find(NodeKind::Location))
        .unwrap();
    assert_eq!(location.keyword(), Some(Keyword::Nowhere));
    assert!(location.find(NodeKind::String).is_some());

    let movement = emh
        .find(NodeKind::NpcMovement)
        .and_then(|m| m.find(NodeKind::MovementBlock))
        .unwrap();
    assert_eq!(
        kinds(movement),
        vec![
            NodeKind::MovementType,
            NodeKind::MovementRooms,
            NodeKind::MovementTiming,
            NodeKind::MovementActive,
        ]
    );
    let active = movement
        .find(NodeKind::MovementActive)
        .and_then(|a| a.find(NodeKind::Boolean))
        .and_then(SyntaxNode::keyword);
    assert_eq!(active, Some(Keyword::False));

    let states = dialogue_states(emh);
    assert_eq!(states.len(), 1);
    assert!(states[0].find(NodeKind::StateRef).is_some());
}
