//! Reserved words of the Storyscript language.
//!
//! A keyword is only recognised when the active [`LexMode`](crate::LexMode)
//! expects it; everywhere else the same spelling lexes as an identifier.

macro_rules! keywords {
    ($($variant:ident => $spelling:literal,)*) => {
        /// A reserved word.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $spelling, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant,)*];

            /// Returns the source spelling of this keyword.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Keyword::$variant => $spelling,)*
                }
            }

            /// Looks up a keyword by its exact spelling.
            #[must_use]
            pub fn from_spelling(text: &str) -> Option<Self> {
                match text {
                    $($spelling => Some(Keyword::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

keywords! {
    // Top level
    Let => "let",
    Set => "set",
    Trigger => "trigger",
    Room => "room",
    Item => "item",
    Spinner => "spinner",
    Npc => "npc",
    Goal => "goal",
    Game => "game",

    // Values
    True => "true",
    False => "false",

    // Triggers
    Only => "only",
    Once => "once",
    When => "when",
    If => "if",
    Do => "do",

    // Shared statements
    Name => "name",
    Desc => "desc",
    Description => "description",
    Text => "text",
    Location => "location",
    State => "state",
    Custom => "custom",

    // Rooms
    Visited => "visited",
    Overlay => "overlay",
    Exit => "exit",
    Hidden => "hidden",
    Locked => "locked",
    Barred => "barred",
    RequiredFlags => "required_flags",
    RequiredItems => "required_items",
    Seq => "seq",
    Limit => "limit",

    // Items
    Portable => "portable",
    Ability => "ability",
    Container => "container",
    Restricted => "restricted",
    Open => "open",
    Closed => "closed",
    Chest => "chest",
    Inventory => "inventory",
    Nowhere => "nowhere",
    Requires => "requires",
    To => "to",
    Consumable => "consumable",
    UsesLeft => "uses_left",
    ConsumeOn => "consume_on",
    WhenConsumed => "when_consumed",
    Despawn => "despawn",
    Replace => "replace",
    Current => "current",
    Aliases => "aliases",
    Visibility => "visibility",
    Visible => "visible",
    Listed => "listed",
    Scenery => "scenery",
    Movability => "movability",
    Free => "free",
    Fixed => "fixed",

    // NPCs
    Movement => "movement",
    Dialogue => "dialogue",
    MovementType => "movement_type",
    Random => "random",
    Route => "route",
    Rooms => "rooms",
    Timing => "timing",
    Active => "active",
    MaxHp => "max_hp",

    // Spinners
    Wedge => "wedge",
    Width => "width",

    // Goals
    Group => "group",
    Required => "required",
    Optional => "optional",
    StatusEffect => "status-effect",
    Done => "done",
    Start => "start",
    Fail => "fail",
    Condition => "condition",

    // Game
    Title => "title",
    Intro => "intro",
    Player => "player",
    Scoring => "scoring",
    ReportTitle => "report_title",
    Rank => "rank",

    // Conditions
    Has => "has",
    Flag => "flag",
    Missing => "missing",
    Reached => "reached",
    Complete => "complete",
    In => "in",
    Progress => "progress",
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
