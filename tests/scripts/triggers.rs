//! Triggers: heads, condition lists, `if` blocks and nested actions.

use storyscript_syntax::{NodeKind, SyntaxNode, TokenKind};

use super::{kinds, parse_clean};

const TRIGGERS: &str = r#"trigger "brace text" when always {
    do show "Shiny {curly} braces"
}

trigger "comment braces" when always {
    # { not a block } in comment
    do show "ok"
}

trigger "He said:\n\"hi\"" when always {
    do show "Line1\nLine2"
    do npc says gonk "She replied: \"no\""
}

trigger "note escapes" when always {
  do schedule in 1 note "lineA\nlineB" {
    do show "ok"
  }
}

trigger "Gonk greets the player" only once when enter room main-lobby, has flag met-gonk {
    if has item battery {
        do npc says gonk_droid "GONK!"
        do add flag gonk-charged
    }
    if (missing item battery, flag set gonk-sad) {
        do show "The droid droops."
    }
    do award points 5
}
"#;

const MODIFY: &str = r#"trigger "patch lab" when always {
    do modify room aperture-lab {
        name "Ruined Lab"
        desc "Charred and broken."
        remove exit portal-room
        add exit "through the vault door" -> stargate-room {
            locked,
            required_items (vault-key),
            required_flags (opened-vault),
            barred "You can't go that way yet."
        }
    }
}

trigger "patch emh" when always {
    do modify npc emh {
        name "Emergency Medical Hologram"
        state custom(patched)
        add line "Bedside manner protocols active." to state custom(patched)
        route (sickbay, corridor)
        timing every 5 turns
        active false
        loop false
    }
}
"#;

fn named<'a>(root: &'a SyntaxNode<'a>, name: &str) -> &'a SyntaxNode<'a> {
    root.find_all(NodeKind::Trigger)
        .find(|t| {
            t.find(NodeKind::String)
                .and_then(SyntaxNode::string_value)
                .is_some_and(|n| n == name)
        })
        .unwrap_or_else(|| panic!("no trigger named {name:?}"))
}

fn action_texts<'a>(node: &SyntaxNode<'_>, source: &'a str) -> Vec<&'a str> {
    node.find_all(NodeKind::Action).map(|a| a.text(source)).collect()
}

#[test]
fn braces_inside_strings_and_comments() {
    let result = parse_clean(TRIGGERS);
    let brace = named(&result.root, "brace text");
    assert_eq!(
        action_texts(brace, TRIGGERS),
        vec!["do show \"Shiny {curly} braces\""]
    );

    let comment = named(&result.root, "comment braces");
    assert_eq!(action_texts(comment, TRIGGERS), vec!["do show \"ok\""]);
    let comments: Vec<_> = comment
        .tokens()
        .filter(|t| t.kind == TokenKind::Comment)
        .map(|t| t.text)
        .collect();
    assert_eq!(comments, vec!["# { not a block } in comment"]);
}

#[test]
fn escaped_names_and_arguments() {
    let result = parse_clean(TRIGGERS);
    let trigger = named(&result.root, "He said:\n\"hi\"");
    let actions: Vec<_> = trigger.find_all(NodeKind::Action).collect();
    assert_eq!(actions.len(), 2);
    let show = actions[0]
        .tokens()
        .find(|t| matches!(t.kind, TokenKind::String(_)))
        .unwrap();
    assert_eq!(show.text, "\"Line1\\nLine2\"");
}

#[test]
fn action_with_block() {
    let result = parse_clean(TRIGGERS);
    let trigger = named(&result.root, "note escapes");
    let schedule = trigger.find(NodeKind::Action).unwrap();
    let block = schedule.find(NodeKind::ActionBlock).unwrap();
    assert_eq!(action_texts(block, TRIGGERS), vec!["do show \"ok\""]);
    assert!(schedule.text(TRIGGERS).starts_with("do schedule in 1 note"));
}

#[test]
fn head_conditions_and_if_blocks() {
    let result = parse_clean(TRIGGERS);
    let trigger = named(&result.root, "Gonk greets the player");
    let head: Vec<_> = trigger.significant_tokens().map(|t| t.text).collect();
    assert_eq!(head[..4], ["trigger", "only", "once", "when"]);

    let list = trigger.find(NodeKind::ConditionList).unwrap();
    assert_eq!(kinds(list), vec![NodeKind::Condition, NodeKind::GoalCond]);

    assert_eq!(
        kinds(trigger),
        vec![
            NodeKind::String,
            NodeKind::ConditionList,
            NodeKind::IfBlock,
            NodeKind::IfBlock,
            NodeKind::Action,
        ]
    );

    let ifs: Vec<_> = trigger.find_all(NodeKind::IfBlock).collect();
    assert_eq!(
        action_texts(ifs[0], TRIGGERS),
        vec!["do npc says gonk_droid \"GONK!\"", "do add flag gonk-charged"]
    );
    let group = ifs[1]
        .find(NodeKind::ConditionList)
        .and_then(|l| l.find(NodeKind::ConditionGroup))
        .and_then(|g| g.find(NodeKind::ConditionList))
        .unwrap();
    assert_eq!(kinds(group), vec![NodeKind::GoalCond, NodeKind::Condition]);
}

#[test]
fn modify_actions_nest_blocks() {
    let result = parse_clean(MODIFY);
    let lab = named(&result.root, "patch lab");
    let modify = lab.find(NodeKind::Action).unwrap();
    let patch = modify.find(NodeKind::ActionBlock).unwrap();
    assert_eq!(patch.find_all(NodeKind::Action).count(), 4);

    let add_exit = patch.find_all(NodeKind::Action).last().unwrap();
    let options = add_exit.find(NodeKind::ActionBlock).unwrap();
    assert_eq!(
        action_texts(options, MODIFY),
        vec![
            "locked,",
            "required_items (vault-key),",
            "required_flags (opened-vault),",
            "barred \"You can't go that way yet.\"",
        ]
    );

    let emh = named(&result.root, "patch emh");
    let patch = emh
        .find(NodeKind::Action)
        .and_then(|a| a.find(NodeKind::ActionBlock))
        .unwrap();
    assert_eq!(
        action_texts(patch, MODIFY),
        vec![
            "name \"Emergency Medical Hologram\"",
            "state custom(patched)",
            "add line \"Bedside manner protocols active.\" to state custom(patched)",
            "route (sickbay, corridor)",
            "timing every 5 turns",
            "active false",
            "loop false",
        ]
    );
}
