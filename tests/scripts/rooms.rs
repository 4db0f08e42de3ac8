//! Rooms with exits, options and overlays.

use storyscript_syntax::{NodeKind, SyntaxNode, TokenKind};

use super::{block_of, kinds, parse_clean};

const PLAZA: &str = r#"room plaza-gate {
  name "Plaza Gate"
  desc "A broad gateway leading into the central plaza."

  exit north -> security-post { locked, barred "Access badge required.", required_flags(clearance-granted, seq maintenance-inspection limit 2), required_items(keycard, access-form) }
  exit south -> shuttle-platform
  exit east -> gallery-corridor { required_items(keycard) }
}

room plaza-hub {
  name "Plaza Hub"
  desc "..."
  visited false

  overlay if npc present vendor, npc in state vendor cheerful {
    text "The vendor beams and offers you a complimentary sample."
  }

  overlay if npc in state guide custom "off-duty" {
    text "The tour guide fidgets, clearly eager for their next assignment."
  }

  overlay if item in room brochure info-kiosk {
    text "A stack of brochures waits patiently on the kiosk."
  }
}
"#;

const MED_BAY: &str = r#"room med-bay {
  name "Med Bay"
  desc "Clinical and spotless."

  overlay if npc emh here {
    normal "The EMH stands with professional detachment, awaiting your symptoms."
    happy "The EMH smiles and hums a bright tune while adjusting the diagnostic displays."
    custom(want-emitter) "The EMH fidgets restlessly, casting longing glances toward the door."
  }
}
"#;

const RIDGE: &str = r#"room high-ridge {
    name "High Isolated Ridge"
    desc """
A small, flat ridge in the midst of a steeply sloped wooded area.   # check wording
Some rough stairs carved into the slope curve upward into the trees.
"""
    exit "down the stairs" -> wooded-slope { hidden }
}
"#;

/// Names given directly in `node`, not in its child nodes.
fn ref_names<'a>(node: &'a SyntaxNode<'a>) -> Vec<&'a str> {
    node.significant_tokens()
        .filter(|t| t.kind == TokenKind::Identifier)
        .map(|t| t.text)
        .collect()
}

#[test]
fn exits_with_options() {
    let result = parse_clean(PLAZA);
    let gate = block_of(&result.root, NodeKind::RoomDef, "plaza-gate");
    assert_eq!(
        kinds(gate),
        vec![
            NodeKind::RoomName,
            NodeKind::RoomDesc,
            NodeKind::ExitStmt,
            NodeKind::ExitStmt,
            NodeKind::ExitStmt,
        ]
    );

    let exits: Vec<_> = gate.find_all(NodeKind::ExitStmt).collect();
    let targets: Vec<_> = exits.iter().map(|e| ref_names(e)).collect();
    assert_eq!(
        targets,
        vec![
            vec!["north", "security-post"],
            vec!["south", "shuttle-platform"],
            vec!["east", "gallery-corridor"],
        ]
    );
    assert!(exits[1].find(NodeKind::ExitBlock).is_none());

    let options = exits[0].find(NodeKind::ExitBlock).unwrap();
    assert_eq!(
        kinds(options),
        vec![
            NodeKind::ExitLocked,
            NodeKind::ExitBarred,
            NodeKind::ExitRequiredFlags,
            NodeKind::ExitRequiredItems,
        ]
    );

    let barred = options
        .find(NodeKind::ExitBarred)
        .and_then(|b| b.find(NodeKind::String))
        .and_then(SyntaxNode::string_value);
    assert_eq!(barred.as_deref(), Some("Access badge required."));

    let flags = options
        .find(NodeKind::ExitRequiredFlags)
        .and_then(|f| f.find(NodeKind::RefList))
        .unwrap();
    assert_eq!(ref_names(flags), vec!["clearance-granted"]);
    let seq = flags.find(NodeKind::SeqFlag).unwrap();
    assert_eq!(seq.text(PLAZA), "seq maintenance-inspection limit 2");

    let items = options
        .find(NodeKind::ExitRequiredItems)
        .and_then(|f| f.find(NodeKind::RefList))
        .unwrap();
    assert_eq!(ref_names(items), vec!["keycard", "access-form"]);
}

#[test]
fn overlays_with_condition_lists() {
    let result = parse_clean(PLAZA);
    let hub = block_of(&result.root, NodeKind::RoomDef, "plaza-hub");
    let overlays: Vec<_> = hub.find_all(NodeKind::OverlayStmt).collect();
    assert_eq!(overlays.len(), 3);
    assert!(hub.find(NodeKind::RoomVisited).is_some());

    let conditions: Vec<Vec<&str>> = overlays
        .iter()
        .map(|o| {
            o.find(NodeKind::ConditionList)
                .map(|l| l.child_nodes().map(|c| c.text(PLAZA)).collect())
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(
        conditions,
        vec![
            vec!["npc present vendor", "npc in state vendor cheerful"],
            vec!["npc in state guide custom \"off-duty\""],
            vec!["item in room brochure info-kiosk"],
        ]
    );

    for overlay in overlays {
        let block = overlay.find(NodeKind::OverlayBlock).unwrap();
        assert_eq!(kinds(block), vec![NodeKind::OverlayText]);
    }
}

#[test]
fn overlay_state_lines() {
    let result = parse_clean(MED_BAY);
    let room = block_of(&result.root, NodeKind::RoomDef, "med-bay");
    let block = room
        .find(NodeKind::OverlayStmt)
        .and_then(|o| o.find(NodeKind::OverlayBlock))
        .unwrap();
    let lines: Vec<_> = block.find_all(NodeKind::OverlayStateText).collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].identifier().map(|t| t.text), Some("normal"));
    assert_eq!(lines[1].identifier().map(|t| t.text), Some("happy"));

    let custom = lines[2].find(NodeKind::StateRef).unwrap();
    assert_eq!(custom.text(MED_BAY), "custom(want-emitter)");
    let text = lines[2].find(NodeKind::String).and_then(SyntaxNode::string_value);
    assert!(text.is_some_and(|t| t.starts_with("The EMH fidgets")));
}

#[test]
fn block_string_description() {
    let result = parse_clean(RIDGE);
    let room = block_of(&result.root, NodeKind::RoomDef, "high-ridge");
    let desc = room
        .find(NodeKind::RoomDesc)
        .and_then(|d| d.find(NodeKind::String))
        .and_then(SyntaxNode::string_value)
        .unwrap();
    assert_eq!(
        desc,
        "A small, flat ridge in the midst of a steeply sloped wooded area.   \nSome rough stairs carved into the slope curve upward into the trees.\n"
    );

    let exit = room.find(NodeKind::ExitStmt).unwrap();
    let direction = exit.find(NodeKind::String).and_then(SyntaxNode::string_value);
    assert_eq!(direction.as_deref(), Some("down the stairs"));
    assert_eq!(
        exit.find(NodeKind::ExitBlock).map(kinds),
        Some(vec![NodeKind::ExitHidden])
    );
}
