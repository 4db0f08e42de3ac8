//! A complete world file mixing every kind of definition.

use storyscript::runtime::{CliConfig, render_result};
use storyscript::syntax::visitor::{TreeVisitor, walk_tree};
use storyscript::syntax::{NodeKind, SyntaxNode, parse};

use super::{check_invariants, kinds, parse_clean};

const WORLD: &str = r#"# Sublevel one of the research annex.

let set annex-rooms = (main-lobby, sublevel-1-entrance, sickbay)

game {
  title "Research Annex"
  intro "The lift doors close behind you."
  player {
    name "Visitor"
    desc "A visitor with a day pass."
    max_hp 10
    start room main-lobby
  }
  scoring {
    report_title "Annex Report"
    rank 0.5 "Intern" "Read the signs."
  }
}

room main-lobby {
  name "Main Lobby"
  desc """
Marble floors and a reception desk nobody staffs.   # placeholder
"""
  exit down -> sublevel-1-entrance
}

room sublevel-1-entrance {
  name "Sublevel 1 Entrance"
  desc "A narrow landing."
  exit up -> main-lobby
  exit east -> sickbay { locked, required_items(keycard) }
}

item keycard {
  name "Keycard"
  desc "Magnetic stripe, slightly bent."
  portable true
  location npc black_knight
}

npc black_knight {
  name "The Black Knight"
  location room sublevel-1-entrance
  dialogue {
    normal { "None shall pass." }
  }
}

spinner knightMood {
  wedge "The knight glowers."
  wedge "The knight hums."
}

goal get-past-knight {
  name "Get past the knight"
  group required
  done when has visited room sickbay
}

trigger "knight yields" only once when has item keycard, enter room sublevel-1-entrance {
  do npc says black_knight "Fine. Go."
  do unlock exit east
}
"#;

#[derive(Default)]
struct Census {
    definitions: Vec<NodeKind>,
    strings: usize,
    comments: usize,
}

impl TreeVisitor for Census {
    fn enter_node(&mut self, node: &SyntaxNode<'_>) {
        if node.kind.is_definition() {
            self.definitions.push(node.kind);
        }
        if node.kind == NodeKind::String {
            self.strings += 1;
        }
    }

    fn visit_token(&mut self, token: &storyscript::syntax::Token<'_>) {
        if token.kind == storyscript::syntax::TokenKind::Comment {
            self.comments += 1;
        }
    }
}

#[test]
fn every_definition_parses() {
    let result = parse_clean(WORLD);
    assert_eq!(
        kinds(&result.root),
        vec![
            NodeKind::SetDecl,
            NodeKind::GameDef,
            NodeKind::RoomDef,
            NodeKind::RoomDef,
            NodeKind::ItemDef,
            NodeKind::NpcDef,
            NodeKind::SpinnerDef,
            NodeKind::GoalDef,
            NodeKind::Trigger,
        ]
    );

    let mut census = Census::default();
    walk_tree(&mut census, &result.root);
    assert_eq!(census.definitions.len(), 9);
    assert_eq!(census.comments, 1);
    assert_eq!(census.strings, 19);
}

#[test]
fn damage_stays_local() {
    let broken = WORLD
        .replace("portable true", "portable maybe")
        .replace("wedge \"The knight hums.\"", "wedge \"The knight hums.");
    let result = parse(&broken);
    check_invariants(&broken, &result);

    let definitions: Vec<_> = result
        .root
        .child_nodes()
        .filter(|n| n.kind.is_definition())
        .map(|n| n.kind)
        .collect();
    assert_eq!(definitions.len(), 9);

    let damaged: Vec<_> = result
        .root
        .child_nodes()
        .filter(|n| n.has_error)
        .map(|n| n.kind)
        .collect();
    assert_eq!(damaged, vec![NodeKind::ItemDef]);
    assert!(result.diagnostics.len() >= 2);
}

#[test]
fn checker_report() {
    let source = "room a {\n  name \"A\" @@\n}\n";
    let config = CliConfig {
        color: false,
        ..CliConfig::default()
    };
    let output = render_result("annex.story", source, &parse(source), &config);
    assert!(output.contains("--> annex.story:2:12"));
    assert!(output.ends_with("annex.story: 1 error\n"));
}
