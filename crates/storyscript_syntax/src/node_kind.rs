//! Kinds of syntax tree nodes.

macro_rules! node_kinds {
    ($($variant:ident => $name:literal,)*) => {
        /// The grammatical construct a [`SyntaxNode`](crate::SyntaxNode) represents.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum NodeKind {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        impl NodeKind {
            /// Every node kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant,)*];

            /// Returns the snake_case name used in tree dumps.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => $name,)*
                }
            }
        }
    };
}

node_kinds! {
    Program => "program",
    String => "string",
    Boolean => "boolean",

    SetDecl => "set_decl",
    SetList => "set_list",

    Trigger => "trigger",
    ConditionList => "condition_list",
    ConditionGroup => "condition_group",
    Condition => "condition",
    GoalCond => "goal_cond",
    IfBlock => "if_block",
    Action => "action",
    ActionBlock => "action_block",

    RoomDef => "room_def",
    RoomBlock => "room_block",
    RoomName => "room_name",
    RoomDesc => "room_desc",
    RoomVisited => "room_visited",
    ExitStmt => "exit_stmt",
    ExitBlock => "exit_block",
    ExitHidden => "exit_hidden",
    ExitLocked => "exit_locked",
    ExitBarred => "exit_barred",
    ExitRequiredFlags => "exit_required_flags",
    ExitRequiredItems => "exit_required_items",
    RefList => "ref_list",
    SeqFlag => "seq_flag",
    OverlayStmt => "overlay_stmt",
    OverlayBlock => "overlay_block",
    OverlayText => "overlay_text",
    OverlayStateText => "overlay_state_text",
    StateRef => "state_ref",

    ItemDef => "item_def",
    ItemBlock => "item_block",
    ItemName => "item_name",
    ItemDesc => "item_desc",
    ItemPortable => "item_portable",
    ItemText => "item_text",
    ItemAbility => "item_ability",
    ItemContainer => "item_container",
    ContainerBlock => "container_block",
    ItemLocation => "item_location",
    ItemRestricted => "item_restricted",
    ItemRequires => "item_requires",
    ItemConsumable => "item_consumable",
    ConsumableBlock => "consumable_block",
    ConsumableUses => "consumable_uses",
    ConsumeOn => "consume_on",
    WhenConsumed => "when_consumed",
    ItemAliases => "item_aliases",
    ItemVisibility => "item_visibility",
    ItemVisibleWhen => "item_visible_when",
    ItemMovability => "item_movability",
    Location => "location",

    SpinnerDef => "spinner_def",
    SpinnerBlock => "spinner_block",
    SpinnerWidth => "spinner_width",
    WedgeStmt => "wedge_stmt",

    NpcDef => "npc_def",
    NpcBlock => "npc_block",
    NpcName => "npc_name",
    NpcDesc => "npc_desc",
    NpcState => "npc_state",
    NpcLocation => "npc_location",
    NpcMaxHp => "npc_max_hp",
    NpcMovement => "npc_movement",
    MovementBlock => "movement_block",
    MovementType => "movement_type",
    MovementRooms => "movement_rooms",
    MovementTiming => "movement_timing",
    MovementActive => "movement_active",
    NpcDialogue => "npc_dialogue",
    DialogueBlock => "dialogue_block",
    DialogueState => "dialogue_state",

    GoalDef => "goal_def",
    GoalBlock => "goal_block",
    GoalName => "goal_name",
    GoalDesc => "goal_desc",
    GoalGroup => "goal_group",
    GoalDone => "goal_done",
    GoalStart => "goal_start",
    GoalFail => "goal_fail",
    GoalCondition => "goal_condition",

    GameDef => "game_def",
    GameBlock => "game_block",
    GameTitle => "game_title",
    GameIntro => "game_intro",
    GamePlayer => "game_player",
    PlayerBlock => "player_block",
    PlayerName => "player_name",
    PlayerDesc => "player_desc",
    PlayerMaxHp => "player_max_hp",
    PlayerStart => "player_start",
    GameScoring => "game_scoring",
    ScoringBlock => "scoring_block",
    ScoringTitle => "scoring_title",
    ScoringRank => "scoring_rank",

    Error => "error",
    Missing => "missing",
}

impl NodeKind {
    /// Returns true for the kinds that mark recovery points.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error | Self::Missing)
    }

    /// Returns true for top-level definitions.
    #[must_use]
    pub const fn is_definition(self) -> bool {
        matches!(
            self,
            Self::SetDecl
                | Self::Trigger
                | Self::RoomDef
                | Self::ItemDef
                | Self::SpinnerDef
                | Self::NpcDef
                | Self::GoalDef
                | Self::GameDef
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
