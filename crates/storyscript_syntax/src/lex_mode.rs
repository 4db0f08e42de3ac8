//! Scanner entry states.
//!
//! The parser picks a lex mode before each token request. The mode decides
//! which spellings come back as keywords; the token boundaries are the same
//! in every mode.

use crate::keyword::Keyword;
use crate::keyword::Keyword as K;

/// The grammatical context a token is requested in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexMode {
    /// Between top-level definitions.
    TopLevel,
    /// Names and free-form arguments: no keywords.
    Plain,
    /// A value position where `true`/`false` are recognised.
    Value,
    /// Directly after `let`.
    SetHead,
    /// Between `trigger` and `when`.
    TriggerHead,
    /// Start of a statement inside a trigger, `if`, or action block.
    TriggerBody,
    /// Start of a condition.
    Condition,
    /// Inside a structured condition after its leading keyword.
    CondDetail,
    /// Start of a statement inside a room block.
    RoomBody,
    /// Inside an exit option block.
    ExitOptions,
    /// Inside `required_flags(...)` and friends.
    FlagList,
    /// Inside an overlay block.
    OverlayBody,
    /// Start of a statement inside an item block.
    ItemBody,
    /// After `requires`, `visible`, `visibility` or `movability`.
    ItemDetail,
    /// Start of a statement inside a consumable block.
    ConsumableBody,
    /// After `consume_on` or `when_consumed`.
    ConsumableDetail,
    /// After `container`.
    ContainerState,
    /// After `location`.
    Location,
    /// Start of a statement inside an NPC block.
    NpcBody,
    /// An NPC state reference.
    NpcState,
    /// Inside a movement block.
    MovementBody,
    /// Start of a statement inside a spinner block.
    SpinnerBody,
    /// After a wedge's text.
    WedgeTail,
    /// Start of a statement inside a goal block.
    GoalBody,
    /// After `group`.
    GoalGroup,
    /// Start of a statement inside the game block.
    GameBody,
    /// Start of a statement inside the player block.
    PlayerBody,
    /// Start of a statement inside the scoring block.
    ScoringBody,
}

impl LexMode {
    /// Returns the keywords recognised in this mode.
    #[must_use]
    pub const fn keywords(self) -> &'static [Keyword] {
        match self {
            Self::TopLevel => &[
                K::Let,
                K::Trigger,
                K::Room,
                K::Item,
                K::Spinner,
                K::Npc,
                K::Goal,
                K::Game,
            ],
            Self::Plain => &[],
            Self::Value => &[K::True, K::False],
            Self::SetHead => &[K::Set],
            Self::TriggerHead => &[K::Only, K::Once, K::When],
            Self::TriggerBody => &[K::If, K::Do],
            Self::Condition => &[K::Has, K::Missing, K::Reached, K::Goal, K::Flag],
            Self::CondDetail => &[
                K::Flag,
                K::Item,
                K::Room,
                K::Visited,
                K::Done,
                K::Complete,
                K::In,
                K::Progress,
            ],
            Self::RoomBody => &[
                K::Name,
                K::Desc,
                K::Description,
                K::Visited,
                K::Overlay,
                K::Exit,
            ],
            Self::ExitOptions => &[
                K::Hidden,
                K::Locked,
                K::Barred,
                K::RequiredFlags,
                K::RequiredItems,
            ],
            Self::FlagList => &[K::Seq, K::Limit],
            Self::OverlayBody => &[K::Text, K::Custom],
            Self::ItemBody => &[
                K::Name,
                K::Desc,
                K::Description,
                K::Portable,
                K::Text,
                K::Ability,
                K::Container,
                K::Location,
                K::Restricted,
                K::Requires,
                K::Consumable,
                K::Aliases,
                K::Visibility,
                K::Visible,
                K::Movability,
            ],
            Self::ItemDetail => &[
                K::To,
                K::When,
                K::Listed,
                K::Scenery,
                K::Hidden,
                K::Free,
                K::Fixed,
                K::Restricted,
            ],
            Self::ConsumableBody => &[K::UsesLeft, K::ConsumeOn, K::WhenConsumed],
            Self::ConsumableDetail => &[
                K::Ability,
                K::Despawn,
                K::Replace,
                K::Inventory,
                K::Current,
                K::Room,
            ],
            Self::ContainerState => &[K::State, K::Open, K::Closed, K::Locked, K::Restricted],
            Self::Location => &[K::Room, K::Npc, K::Chest, K::Inventory, K::Nowhere],
            Self::NpcBody => &[
                K::Name,
                K::Desc,
                K::Description,
                K::State,
                K::Movement,
                K::Dialogue,
                K::Location,
                K::MaxHp,
            ],
            Self::NpcState => &[K::Custom],
            Self::MovementBody => &[
                K::MovementType,
                K::Random,
                K::Route,
                K::Rooms,
                K::Timing,
                K::Active,
            ],
            Self::SpinnerBody => &[K::Width, K::Wedge],
            Self::WedgeTail => &[K::Width],
            Self::GoalBody => &[
                K::Name,
                K::Desc,
                K::Description,
                K::Group,
                K::Done,
                K::Start,
                K::Fail,
                K::Condition,
            ],
            Self::GoalGroup => &[K::Required, K::Optional, K::StatusEffect],
            Self::GameBody => &[K::Title, K::Intro, K::Player, K::Scoring],
            Self::PlayerBody => &[K::Name, K::Desc, K::Description, K::MaxHp, K::Start],
            Self::ScoringBody => &[K::ReportTitle, K::Rank],
        }
    }

    /// Returns the keyword spelled `text` if this mode recognises it.
    #[must_use]
    pub fn keyword(self, text: &str) -> Option<Keyword> {
        let keyword = Keyword::from_spelling(text)?;
        self.keywords().contains(&keyword).then_some(keyword)
    }
}
