//! Integration tests for the parser
//!
//! Tests the tree shapes produced for well-formed Storyscript.

use storyscript_syntax::pretty::render_tree;
use storyscript_syntax::visitor::{TreeVisitor, walk_tree};
use storyscript_syntax::{
    Element, Keyword, NodeKind, ParseConfig, SyntaxNode, TokenKind, parse, parse_with_config,
};

fn kinds(node: &SyntaxNode<'_>) -> Vec<NodeKind> {
    node.child_nodes().map(|n| n.kind).collect()
}

fn clean(source: &str) -> storyscript_syntax::ParseResult<'_> {
    let result = parse(source);
    assert!(result.diagnostics.is_empty(), "{:?}", result.diagnostics);
    result
}

// =============================================================================
// Program and Sets
// =============================================================================

#[test]
fn empty_source_is_an_empty_program() {
    let result = clean("");
    assert_eq!(result.root.kind, NodeKind::Program);
    assert!(result.root.children.is_empty());
    assert!(!result.root.has_error);
}

#[test]
fn definitions_in_order() {
    let source = "let set keys = (a)\nroom r {}\nitem i {}\nnpc n {}\nspinner s {}\ngoal g {}\ntrigger when always {}\n";
    let result = clean(source);
    assert_eq!(
        kinds(&result.root),
        vec![
            NodeKind::SetDecl,
            NodeKind::RoomDef,
            NodeKind::ItemDef,
            NodeKind::NpcDef,
            NodeKind::SpinnerDef,
            NodeKind::GoalDef,
            NodeKind::Trigger,
        ]
    );
    assert!(result.root.child_nodes().all(|n| n.kind.is_definition()));
}

#[test]
fn set_list_values_rejoin() {
    let source = "let x = (1, 2, 3)";
    let result = clean(source);
    let list = result
        .root
        .find(NodeKind::SetDecl)
        .and_then(|d| d.find(NodeKind::SetList))
        .unwrap();
    let values: Vec<&str> = list
        .children
        .iter()
        .filter_map(|element| match element {
            Element::Token(token) if token.kind == TokenKind::Comma => None,
            Element::Token(token) => Some(token.text),
            Element::Node(node) => Some(node.text(source)),
        })
        .collect();
    assert_eq!(values.join(", "), "1, 2, 3");
}

#[test]
fn empty_and_trailing_comma_sets_are_clean() {
    clean("let x = ()");
    clean("let x = (a,)");
    clean("let set = (a, b)");
}

#[test]
fn set_values_of_every_shape() {
    let result = clean("let set mixed = (brass-key, 7, \"odd one\", 'single', false)");
    let list = result
        .root
        .find(NodeKind::SetDecl)
        .and_then(|d| d.find(NodeKind::SetList))
        .unwrap();
    assert_eq!(
        kinds(list),
        vec![NodeKind::String, NodeKind::String, NodeKind::Boolean]
    );
    let strings: Vec<_> = list
        .find_all(NodeKind::String)
        .filter_map(SyntaxNode::string_value)
        .collect();
    assert_eq!(strings, vec!["odd one", "single"]);
}

// =============================================================================
// Keyword Scoping
// =============================================================================

#[test]
fn npc_named_room() {
    let result = clean("npc room { location room foyer }");
    assert_eq!(kinds(&result.root), vec![NodeKind::NpcDef]);
    let npc = result.root.find(NodeKind::NpcDef).unwrap();
    assert_eq!(npc.identifier().map(|t| t.text), Some("room"));
    let location = npc
        .find(NodeKind::NpcBlock)
        .and_then(|b| b.find(NodeKind::NpcLocation))
        .and_then(|l| l.find(NodeKind::Location))
        .unwrap();
    assert_eq!(location.keyword(), Some(Keyword::Room));
    assert_eq!(location.identifier().map(|t| t.text), Some("foyer"));
    assert_eq!(
        render_tree(&result.root),
        "(program (npc_def (identifier) (npc_block (npc_location (location (identifier))))))"
    );
}

#[test]
fn keywords_of_other_blocks_are_names() {
    let result = clean("room item {\n  exit npc -> goal\n}");
    let room = result.root.find(NodeKind::RoomDef).unwrap();
    assert_eq!(room.identifier().map(|t| t.text), Some("item"));
    let exit = room
        .find(NodeKind::RoomBlock)
        .and_then(|b| b.find(NodeKind::ExitStmt))
        .unwrap();
    let names: Vec<_> = exit
        .significant_tokens()
        .filter(|t| t.kind == TokenKind::Identifier)
        .map(|t| t.text)
        .collect();
    assert_eq!(names, vec!["npc", "goal"]);
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn block_string_comments_are_stripped() {
    let source = "room a {\n  desc \"\"\"\nHello # not shown\nWorld\n\"\"\"\n}";
    let result = clean(source);
    let desc = result
        .root
        .find(NodeKind::RoomDef)
        .and_then(|r| r.find(NodeKind::RoomBlock))
        .and_then(|b| b.find(NodeKind::RoomDesc))
        .and_then(|d| d.find(NodeKind::String))
        .unwrap();
    assert_eq!(desc.string_value().as_deref(), Some("Hello \nWorld\n"));
}

#[test]
fn description_is_an_alias_of_desc() {
    let result = clean("item a { description \"long\" desc 'short' }");
    let block = result
        .root
        .find(NodeKind::ItemDef)
        .and_then(|i| i.find(NodeKind::ItemBlock))
        .unwrap();
    assert_eq!(kinds(block), vec![NodeKind::ItemDesc, NodeKind::ItemDesc]);
}

#[test]
fn bare_words_stand_for_strings() {
    let result = clean("room a { name Atrium }");
    let name = result
        .root
        .find(NodeKind::RoomDef)
        .and_then(|r| r.find(NodeKind::RoomBlock))
        .and_then(|b| b.find(NodeKind::RoomName))
        .and_then(|n| n.find(NodeKind::String))
        .unwrap();
    assert_eq!(name.string_value().as_deref(), Some("Atrium"));
}

// =============================================================================
// Rooms and Items
// =============================================================================

#[test]
fn room_tree_rendering() {
    let result = clean("room foyer { name \"Foyer\" exit north -> hall }");
    assert_eq!(
        render_tree(&result.root),
        "(program (room_def (identifier) (room_block (room_name (string)) (exit_stmt (identifier) (identifier)))))"
    );
}

#[test]
fn exit_with_quoted_direction_and_options() {
    let source = "room a {\n  exit \"through the vault door\" -> vault { hidden locked barred }\n}";
    let result = clean(source);
    let exit = result
        .root
        .find(NodeKind::RoomDef)
        .and_then(|r| r.find(NodeKind::RoomBlock))
        .and_then(|b| b.find(NodeKind::ExitStmt))
        .unwrap();
    let direction = exit.find(NodeKind::String).and_then(SyntaxNode::string_value);
    assert_eq!(direction.as_deref(), Some("through the vault door"));
    let options = exit.find(NodeKind::ExitBlock).unwrap();
    assert_eq!(
        kinds(options),
        vec![NodeKind::ExitHidden, NodeKind::ExitLocked, NodeKind::ExitBarred]
    );
}

#[test]
fn item_container_forms() {
    let source = "item box {\n  container state closed\n}\nitem safe {\n  container { state: locked }\n}";
    let result = clean(source);
    let items: Vec<_> = result.root.find_all(NodeKind::ItemDef).collect();
    assert_eq!(items.len(), 2);

    let inline = items[0]
        .find(NodeKind::ItemBlock)
        .and_then(|b| b.find(NodeKind::ItemContainer))
        .unwrap();
    assert!(inline.find(NodeKind::ContainerBlock).is_none());
    assert_eq!(inline.significant_tokens().last().map(|t| t.text), Some("closed"));

    let block = items[1]
        .find(NodeKind::ItemBlock)
        .and_then(|b| b.find(NodeKind::ItemContainer))
        .and_then(|c| c.find(NodeKind::ContainerBlock))
        .unwrap();
    let words: Vec<_> = block.significant_tokens().map(|t| t.text).collect();
    assert_eq!(words, vec!["{", "state", ":", "locked", "}"]);
}

#[test]
fn item_locations() {
    for (source, keyword) in [
        ("item a { location room lab }", Keyword::Room),
        ("item a { location npc clerk }", Keyword::Npc),
        ("item a { location chest box }", Keyword::Chest),
        ("item a { location inventory player }", Keyword::Inventory),
        ("item a { location nowhere \"spawned later\" }", Keyword::Nowhere),
        ("item a { location nowhere }", Keyword::Nowhere),
    ] {
        let result = clean(source);
        let location = result
            .root
            .find(NodeKind::ItemDef)
            .and_then(|i| i.find(NodeKind::ItemBlock))
            .and_then(|b| b.find(NodeKind::ItemLocation))
            .and_then(|l| l.find(NodeKind::Location))
            .unwrap();
        assert_eq!(location.keyword(), Some(keyword), "{source}");
    }
}

// =============================================================================
// Triggers and Conditions
// =============================================================================

#[test]
fn trigger_conditions_mix_free_form_and_structured() {
    let source = "trigger \"greet\" only once when enter room lobby, has flag met, has visited room lab, (missing item key) {\n}";
    let result = clean(source);
    let list = result
        .root
        .find(NodeKind::Trigger)
        .and_then(|t| t.find(NodeKind::ConditionList))
        .unwrap();
    assert_eq!(
        kinds(list),
        vec![
            NodeKind::Condition,
            NodeKind::GoalCond,
            NodeKind::GoalCond,
            NodeKind::ConditionGroup,
        ]
    );
    let first = list.find(NodeKind::Condition).unwrap();
    assert_eq!(first.text(source), "enter room lobby");
}

#[test]
fn condition_words_without_structure_stay_free_form() {
    let source = "trigger when flag set lamp-lit, has nothing {\n}";
    let result = clean(source);
    let list = result
        .root
        .find(NodeKind::Trigger)
        .and_then(|t| t.find(NodeKind::ConditionList))
        .unwrap();
    assert_eq!(kinds(list), vec![NodeKind::Condition, NodeKind::Condition]);
}

#[test]
fn trigger_bodies_nest() {
    let source = "trigger when always {\n  if has item battery {\n    do npc says gonk \"GONK!\"\n  }\n  do schedule in 2 {\n    do show \"later\"\n  }\n}";
    let result = clean(source);
    let trigger = result.root.find(NodeKind::Trigger).unwrap();
    assert_eq!(
        kinds(trigger),
        vec![NodeKind::ConditionList, NodeKind::IfBlock, NodeKind::Action]
    );

    let if_block = trigger.find(NodeKind::IfBlock).unwrap();
    let says = if_block.find(NodeKind::Action).unwrap();
    assert_eq!(says.text(source), "do npc says gonk \"GONK!\"");

    let schedule = trigger.find(NodeKind::Action).unwrap();
    let inner = schedule.find(NodeKind::ActionBlock).unwrap();
    assert_eq!(inner.find_all(NodeKind::Action).count(), 1);
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn comments_attach_to_the_open_node() {
    let source = "room a {\n  # note\n  name \"A\"\n}";
    let result = clean(source);
    let block = result
        .root
        .find(NodeKind::RoomDef)
        .and_then(|r| r.find(NodeKind::RoomBlock))
        .unwrap();
    let comments: Vec<_> = block
        .tokens()
        .filter(|t| t.kind == TokenKind::Comment)
        .map(|t| t.text)
        .collect();
    assert_eq!(comments, vec!["# note"]);
}

#[test]
fn comments_can_stay_out_of_the_tree() {
    let source = "# header\nroom a {\n  # note\n}";
    let config = ParseConfig::new().with_keep_comments(false);
    let result = parse_with_config(source, &config);
    assert!(result.diagnostics.is_empty());

    struct Comments(usize);
    impl TreeVisitor for Comments {
        fn visit_token(&mut self, token: &storyscript_syntax::Token<'_>) {
            if token.kind == TokenKind::Comment {
                self.0 += 1;
            }
        }
    }
    let mut comments = Comments(0);
    walk_tree(&mut comments, &result.root);
    assert_eq!(comments.0, 0);

    let in_stream = result
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Comment)
        .count();
    assert_eq!(in_stream, 2);
}

// =============================================================================
// Results
// =============================================================================

#[test]
fn token_stream_reproduces_source() {
    let source = "# rooms\nroom a {\n  name \"A\"   # inline\n}\n\n";
    let result = clean(source);
    let joined: String = result.tokens.iter().map(|t| t.text).collect();
    assert_eq!(joined, source);
    assert!(result.tokens.last().unwrap().is_eof());
}

#[test]
fn into_checked_returns_the_tree() {
    let root = parse("room a { name \"A\" }").into_checked().unwrap();
    assert_eq!(root.kind, NodeKind::Program);
    assert_eq!(root.error_count(), 0);
}

#[test]
fn visitor_sees_definitions() {
    struct Names(Vec<(NodeKind, String)>);
    impl TreeVisitor for Names {
        fn enter_node(&mut self, node: &SyntaxNode<'_>) {
            if node.kind.is_definition() {
                let name = node.identifier().map_or_else(String::new, |t| t.text.to_string());
                self.0.push((node.kind, name));
            }
        }
    }

    let result = clean("room foyer {}\nnpc clerk {}\nspinner rain {}\n");
    let mut names = Names(Vec::new());
    walk_tree(&mut names, &result.root);
    assert_eq!(
        names.0,
        vec![
            (NodeKind::RoomDef, "foyer".to_string()),
            (NodeKind::NpcDef, "clerk".to_string()),
            (NodeKind::SpinnerDef, "rain".to_string()),
        ]
    );
}
