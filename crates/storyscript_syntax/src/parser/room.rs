//! Room blocks: names, descriptions, exits and overlays.

use super::Parser;
use crate::keyword::Keyword;
use crate::lex_mode::LexMode;
use crate::node_kind::NodeKind;
use crate::token::{Token, TokenKind};

impl<'src> Parser<'src> {
    pub(crate) fn room_statement(&mut self, token: Token<'src>) -> bool {
        match token.keyword() {
            Some(Keyword::Name) => self.keyword_string(NodeKind::RoomName, LexMode::RoomBody),
            Some(Keyword::Desc | Keyword::Description) => {
                self.keyword_string(NodeKind::RoomDesc, LexMode::RoomBody);
            }
            Some(Keyword::Visited) => {
                self.start(NodeKind::RoomVisited);
                self.bump(LexMode::RoomBody);
                self.boolean();
                self.finish();
            }
            Some(Keyword::Exit) => self.exit_stmt(),
            Some(Keyword::Overlay) => self.overlay_stmt(),
            _ => return false,
        }
        true
    }

    /// `<keyword> string`, with the keyword scanned in `mode`.
    pub(crate) fn keyword_string(&mut self, kind: NodeKind, mode: LexMode) {
        self.start(kind);
        self.bump(mode);
        self.string();
        self.finish();
    }

    /// `exit_stmt := 'exit' (identifier | string) '->' identifier [exit_block]`
    fn exit_stmt(&mut self) {
        self.start(NodeKind::ExitStmt);
        self.bump(LexMode::RoomBody);
        match self.peek(LexMode::Plain).kind {
            TokenKind::Identifier => {
                self.bump(LexMode::Plain);
            }
            TokenKind::String(_) => self.string(),
            _ => self.missing("an exit direction"),
        }
        if self.expect(LexMode::Plain, TokenKind::Arrow)
            && self.expect_identifier()
            && self.at(LexMode::ExitOptions, TokenKind::LBrace)
        {
            self.block(
                NodeKind::ExitBlock,
                LexMode::ExitOptions,
                "an exit option",
                Self::exit_option,
            );
        }
        self.finish();
    }

    /// `exit_option := 'hidden' | 'locked' | 'barred' [string]
    /// | 'required_flags' ref_list | 'required_items' ref_list`
    fn exit_option(&mut self, token: Token<'src>) -> bool {
        let kind = match token.keyword() {
            Some(Keyword::Hidden) => NodeKind::ExitHidden,
            Some(Keyword::Locked) => NodeKind::ExitLocked,
            Some(Keyword::Barred) => NodeKind::ExitBarred,
            Some(Keyword::RequiredFlags) => NodeKind::ExitRequiredFlags,
            Some(Keyword::RequiredItems) => NodeKind::ExitRequiredItems,
            _ if token.kind == TokenKind::Comma => {
                self.bump(LexMode::ExitOptions);
                return true;
            }
            _ => return false,
        };
        self.start(kind);
        self.bump(LexMode::ExitOptions);
        match kind {
            NodeKind::ExitBarred => {
                if matches!(self.peek(LexMode::Plain).kind, TokenKind::String(_)) {
                    self.string();
                }
            }
            NodeKind::ExitRequiredFlags | NodeKind::ExitRequiredItems => self.ref_list(),
            _ => {}
        }
        self.finish();
        true
    }

    /// `overlay_stmt := 'overlay' 'if' condition_list overlay_block`
    fn overlay_stmt(&mut self) {
        self.start(NodeKind::OverlayStmt);
        self.bump(LexMode::RoomBody);
        if self.expect_keyword(LexMode::TriggerBody, Keyword::If) {
            self.condition_list();
            self.block(
                NodeKind::OverlayBlock,
                LexMode::OverlayBody,
                "`text` or a state line",
                Self::overlay_entry,
            );
        }
        self.finish();
    }

    /// `overlay_text := 'text' string`
    /// `overlay_state_text := (identifier | state_ref) string`
    fn overlay_entry(&mut self, token: Token<'src>) -> bool {
        match token.kind {
            TokenKind::Keyword(Keyword::Text) => {
                self.keyword_string(NodeKind::OverlayText, LexMode::OverlayBody);
            }
            TokenKind::Keyword(Keyword::Custom) => {
                self.start(NodeKind::OverlayStateText);
                self.state_ref(LexMode::OverlayBody);
                self.string();
                self.finish();
            }
            TokenKind::Identifier => {
                self.start(NodeKind::OverlayStateText);
                self.bump(LexMode::OverlayBody);
                self.string();
                self.finish();
            }
            _ => return false,
        }
        true
    }
}
