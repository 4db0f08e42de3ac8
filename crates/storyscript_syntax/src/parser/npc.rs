//! NPC blocks: state, movement and dialogue.

use super::Parser;
use crate::keyword::Keyword;
use crate::lex_mode::LexMode;
use crate::node_kind::NodeKind;
use crate::token::{Token, TokenKind};

impl<'src> Parser<'src> {
    pub(crate) fn npc_statement(&mut self, token: Token<'src>) -> bool {
        match token.keyword() {
            Some(Keyword::Name) => self.keyword_string(NodeKind::NpcName, LexMode::NpcBody),
            Some(Keyword::Desc | Keyword::Description) => {
                self.keyword_string(NodeKind::NpcDesc, LexMode::NpcBody);
            }
            Some(Keyword::State) => {
                self.start(NodeKind::NpcState);
                self.bump(LexMode::NpcBody);
                self.state(LexMode::NpcState);
                self.finish();
            }
            Some(Keyword::Location) => {
                self.start(NodeKind::NpcLocation);
                self.bump(LexMode::NpcBody);
                self.location();
                self.finish();
            }
            Some(Keyword::MaxHp) => {
                self.start(NodeKind::NpcMaxHp);
                self.bump(LexMode::NpcBody);
                self.expect(LexMode::Plain, TokenKind::Number);
                self.finish();
            }
            Some(Keyword::Movement) => {
                self.start(NodeKind::NpcMovement);
                self.bump(LexMode::NpcBody);
                self.block(
                    NodeKind::MovementBlock,
                    LexMode::MovementBody,
                    "a movement setting",
                    Self::movement_clause,
                );
                self.finish();
            }
            Some(Keyword::Dialogue) => {
                self.start(NodeKind::NpcDialogue);
                self.bump(LexMode::NpcBody);
                self.block(
                    NodeKind::DialogueBlock,
                    LexMode::NpcState,
                    "a dialogue state",
                    Self::dialogue_state,
                );
                self.finish();
            }
            _ => return false,
        }
        true
    }

    /// `movement_clause := movement_type | movement_rooms | movement_timing
    /// | movement_active`
    fn movement_clause(&mut self, token: Token<'src>) -> bool {
        match token.kind {
            TokenKind::Keyword(Keyword::MovementType) => {
                self.start(NodeKind::MovementType);
                self.bump(LexMode::MovementBody);
                let token = self.peek(LexMode::MovementBody);
                if token.is_keyword(Keyword::Random) || token.is_keyword(Keyword::Route) {
                    self.bump(LexMode::MovementBody);
                } else {
                    self.missing("`random` or `route`");
                }
                self.finish();
            }
            TokenKind::Keyword(Keyword::Random) => {
                self.start(NodeKind::MovementType);
                self.bump(LexMode::MovementBody);
                self.finish();
            }
            TokenKind::Keyword(Keyword::Route) => self.route(),
            TokenKind::Keyword(Keyword::Rooms) => {
                self.start(NodeKind::MovementRooms);
                self.bump(LexMode::MovementBody);
                self.ref_list();
                self.finish();
            }
            TokenKind::Keyword(Keyword::Timing) => {
                self.start(NodeKind::MovementTiming);
                self.bump(LexMode::MovementBody);
                if self.eat(LexMode::Plain, TokenKind::LParen) {
                    if !self.value() {
                        self.missing("a value");
                    }
                    self.expect(LexMode::Plain, TokenKind::RParen);
                } else if !self.value() {
                    self.missing("a value");
                }
                self.finish();
            }
            TokenKind::Keyword(Keyword::Active) => {
                self.start(NodeKind::MovementActive);
                self.bump(LexMode::MovementBody);
                let token = self.peek(LexMode::Value);
                if token.is_keyword(Keyword::True) || token.is_keyword(Keyword::False) {
                    self.boolean();
                }
                self.finish();
            }
            TokenKind::Comma => {
                self.bump(LexMode::MovementBody);
            }
            _ => return false,
        }
        true
    }

    /// `'route' ['(' (movement_clause [','])* ')']`
    fn route(&mut self) {
        self.start(NodeKind::MovementType);
        self.bump(LexMode::MovementBody);
        if self.at(LexMode::MovementBody, TokenKind::LParen) && self.enter(LexMode::MovementBody) {
            self.bump(LexMode::MovementBody);
            loop {
                let token = self.peek(LexMode::MovementBody);
                match token.kind {
                    TokenKind::RParen => {
                        self.bump(LexMode::MovementBody);
                        break;
                    }
                    TokenKind::RBrace | TokenKind::Eof => {
                        self.missing("')'");
                        break;
                    }
                    _ if self.at_top_level_start() => {
                        self.missing("')'");
                        break;
                    }
                    _ if self.movement_clause(token) => {}
                    _ => self.skip_token(LexMode::MovementBody, "a movement setting"),
                }
            }
            self.leave();
        }
        self.finish();
    }

    /// `dialogue_state := (identifier | state_ref) '{' string* '}'`
    fn dialogue_state(&mut self, token: Token<'src>) -> bool {
        match token.kind {
            TokenKind::Keyword(Keyword::Custom) => {
                self.start(NodeKind::DialogueState);
                self.state_ref(LexMode::NpcState);
            }
            TokenKind::Identifier => {
                self.start(NodeKind::DialogueState);
                self.bump(LexMode::NpcState);
            }
            _ => return false,
        }
        self.braced(LexMode::Plain, "a string", Self::dialogue_line);
        self.finish();
        true
    }

    fn dialogue_line(&mut self, token: Token<'src>) -> bool {
        if matches!(token.kind, TokenKind::String(_) | TokenKind::Identifier) {
            self.string();
            true
        } else {
            false
        }
    }
}
