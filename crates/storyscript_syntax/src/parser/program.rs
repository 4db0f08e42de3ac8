//! Top-level definitions and set declarations.

use super::Parser;
use crate::keyword::Keyword;
use crate::lex_mode::LexMode;
use crate::node_kind::NodeKind;
use crate::token::{Token, TokenKind};

impl<'src> Parser<'src> {
    /// `program := definition*`
    pub(crate) fn program(&mut self) {
        loop {
            let token = self.peek(LexMode::TopLevel);
            if token.is_eof() {
                break;
            }
            match token.keyword() {
                Some(Keyword::Let) => self.set_decl(),
                Some(Keyword::Trigger) => self.trigger(),
                Some(Keyword::Room) => self.definition(
                    NodeKind::RoomDef,
                    NodeKind::RoomBlock,
                    LexMode::RoomBody,
                    "a room statement",
                    Self::room_statement,
                ),
                Some(Keyword::Item) => self.definition(
                    NodeKind::ItemDef,
                    NodeKind::ItemBlock,
                    LexMode::ItemBody,
                    "an item statement",
                    Self::item_statement,
                ),
                Some(Keyword::Spinner) => self.definition(
                    NodeKind::SpinnerDef,
                    NodeKind::SpinnerBlock,
                    LexMode::SpinnerBody,
                    "`width` or `wedge`",
                    Self::spinner_statement,
                ),
                Some(Keyword::Npc) => self.definition(
                    NodeKind::NpcDef,
                    NodeKind::NpcBlock,
                    LexMode::NpcBody,
                    "an npc statement",
                    Self::npc_statement,
                ),
                Some(Keyword::Goal) => self.definition(
                    NodeKind::GoalDef,
                    NodeKind::GoalBlock,
                    LexMode::GoalBody,
                    "a goal statement",
                    Self::goal_statement,
                ),
                Some(Keyword::Game) => self.game(),
                _ => self.recover_top_level(),
            }
        }
    }

    /// `game_def := 'game' '{' game_stmt* '}'`
    fn game(&mut self) {
        self.start(NodeKind::GameDef);
        self.bump(LexMode::TopLevel);
        self.block(
            NodeKind::GameBlock,
            LexMode::GameBody,
            "`title`, `intro`, `player` or `scoring`",
            Self::game_statement,
        );
        self.finish();
    }

    fn game_statement(&mut self, token: Token<'src>) -> bool {
        match token.keyword() {
            Some(Keyword::Title) => self.keyword_string(NodeKind::GameTitle, LexMode::GameBody),
            Some(Keyword::Intro) => self.keyword_string(NodeKind::GameIntro, LexMode::GameBody),
            Some(Keyword::Player) => {
                self.start(NodeKind::GamePlayer);
                self.bump(LexMode::GameBody);
                self.block(
                    NodeKind::PlayerBlock,
                    LexMode::PlayerBody,
                    "a player statement",
                    Self::player_statement,
                );
                self.finish();
            }
            Some(Keyword::Scoring) => {
                self.start(NodeKind::GameScoring);
                self.bump(LexMode::GameBody);
                self.block(
                    NodeKind::ScoringBlock,
                    LexMode::ScoringBody,
                    "`report_title` or `rank`",
                    Self::scoring_statement,
                );
                self.finish();
            }
            _ => return false,
        }
        true
    }

    fn player_statement(&mut self, token: Token<'src>) -> bool {
        match token.keyword() {
            Some(Keyword::Name) => self.keyword_string(NodeKind::PlayerName, LexMode::PlayerBody),
            Some(Keyword::Desc | Keyword::Description) => {
                self.keyword_string(NodeKind::PlayerDesc, LexMode::PlayerBody);
            }
            Some(Keyword::MaxHp) => {
                self.start(NodeKind::PlayerMaxHp);
                self.bump(LexMode::PlayerBody);
                self.expect(LexMode::Plain, TokenKind::Number);
                self.finish();
            }
            Some(Keyword::Start) => {
                self.start(NodeKind::PlayerStart);
                self.bump(LexMode::PlayerBody);
                if self.expect_keyword(LexMode::Location, Keyword::Room) {
                    self.expect_identifier();
                }
                self.finish();
            }
            _ => return false,
        }
        true
    }

    /// `scoring_stmt := 'report_title' string | 'rank' number ['.' number] string string`
    fn scoring_statement(&mut self, token: Token<'src>) -> bool {
        match token.keyword() {
            Some(Keyword::ReportTitle) => {
                self.keyword_string(NodeKind::ScoringTitle, LexMode::ScoringBody);
            }
            Some(Keyword::Rank) => {
                self.start(NodeKind::ScoringRank);
                self.bump(LexMode::ScoringBody);
                if self.expect(LexMode::Plain, TokenKind::Number) {
                    if self.eat(LexMode::Plain, TokenKind::Dot) {
                        self.expect(LexMode::Plain, TokenKind::Number);
                    }
                    self.string();
                    self.string();
                }
                self.finish();
            }
            _ => return false,
        }
        true
    }

    /// `<keyword> identifier '{' statement* '}'`
    fn definition(
        &mut self,
        kind: NodeKind,
        block: NodeKind,
        mode: LexMode,
        expected: &str,
        statement: fn(&mut Self, Token<'src>) -> bool,
    ) {
        self.start(kind);
        self.bump(LexMode::TopLevel);
        self.expect_identifier();
        self.block(block, mode, expected, statement);
        self.finish();
    }

    /// `set_decl := 'let' ['set'] identifier '=' '(' set_list ')'`
    ///
    /// `let set = (...)` declares a set named `set`.
    fn set_decl(&mut self) {
        self.start(NodeKind::SetDecl);
        self.bump(LexMode::TopLevel);
        if self.at_keyword(LexMode::SetHead, Keyword::Set)
            && self.peek_second(LexMode::SetHead, LexMode::Plain) != TokenKind::Eq
        {
            self.bump(LexMode::SetHead);
        }
        if self.expect_identifier()
            && self.expect(LexMode::Plain, TokenKind::Eq)
            && self.expect(LexMode::Plain, TokenKind::LParen)
        {
            self.set_list();
            self.expect(LexMode::Value, TokenKind::RParen);
        }
        self.finish();
    }

    /// `set_list := [value (',' value)* [',']]`
    fn set_list(&mut self) {
        self.start(NodeKind::SetList);
        loop {
            let token = self.peek(LexMode::Value);
            match token.kind {
                TokenKind::RParen | TokenKind::Eof => break,
                TokenKind::Comma => {
                    self.bump(LexMode::Value);
                }
                _ if self.at_top_level_start() => break,
                _ if self.value() => {}
                _ => self.skip_token(LexMode::Value, "a value"),
            }
        }
        self.finish();
    }
}
