//! Values and small clauses shared by several blocks.

use super::Parser;
use crate::keyword::Keyword;
use crate::lex_mode::LexMode;
use crate::node_kind::NodeKind;
use crate::token::TokenKind;

impl<'src> Parser<'src> {
    /// Returns true if a string (quoted or a bare word) comes next.
    ///
    /// A top-level keyword at column 1 is not a bare word.
    pub(crate) fn at_string(&mut self) -> bool {
        match self.peek(LexMode::Plain).kind {
            TokenKind::String(_) => true,
            TokenKind::Identifier => !self.at_top_level_start(),
            _ => false,
        }
    }

    /// `string := quoted-string | identifier`
    pub(crate) fn string(&mut self) {
        if self.at_string() {
            self.start(NodeKind::String);
            self.bump(LexMode::Plain);
            self.finish();
        } else {
            self.missing("string");
        }
    }

    /// `boolean := 'true' | 'false'`
    pub(crate) fn boolean(&mut self) {
        if !self.try_boolean() {
            self.missing("`true` or `false`");
        }
    }

    fn try_boolean(&mut self) -> bool {
        let token = self.peek(LexMode::Value);
        if token.is_keyword(Keyword::True) || token.is_keyword(Keyword::False) {
            self.start(NodeKind::Boolean);
            self.bump(LexMode::Value);
            self.finish();
            true
        } else {
            false
        }
    }

    /// `value := identifier | number | string | boolean`
    ///
    /// Identifiers and numbers stay bare tokens. Returns false, consuming
    /// nothing, if no value comes next.
    pub(crate) fn value(&mut self) -> bool {
        if self.at_top_level_start() {
            return false;
        }
        if self.try_boolean() {
            return true;
        }
        match self.peek(LexMode::Value).kind {
            TokenKind::String(_) => {
                self.start(NodeKind::String);
                self.bump(LexMode::Value);
                self.finish();
                true
            }
            TokenKind::Identifier | TokenKind::Number => {
                self.bump(LexMode::Value);
                true
            }
            _ => false,
        }
    }

    /// `'(' ref_list ')'` where `ref := identifier | seq_flag`.
    ///
    /// Commas between references are optional.
    pub(crate) fn ref_list(&mut self) {
        if !self.expect(LexMode::FlagList, TokenKind::LParen) {
            return;
        }
        self.start(NodeKind::RefList);
        loop {
            let token = self.peek(LexMode::FlagList);
            match token.kind {
                TokenKind::RParen | TokenKind::RBrace | TokenKind::Eof => break,
                _ if self.at_top_level_start() => break,
                TokenKind::Keyword(Keyword::Seq) => self.seq_flag(),
                TokenKind::Identifier | TokenKind::Comma => {
                    self.bump(LexMode::FlagList);
                }
                _ => self.skip_token(LexMode::FlagList, "a name or `seq`"),
            }
        }
        self.finish();
        self.expect(LexMode::FlagList, TokenKind::RParen);
    }

    /// `seq_flag := 'seq' identifier ['limit' number]`
    fn seq_flag(&mut self) {
        self.start(NodeKind::SeqFlag);
        self.bump(LexMode::FlagList);
        self.expect_identifier();
        if self.eat_keyword(LexMode::FlagList, Keyword::Limit) {
            self.expect(LexMode::Plain, TokenKind::Number);
        }
        self.finish();
    }

    /// `state_ref := 'custom' '(' identifier ')'`, with `custom` scanned
    /// in `mode`.
    pub(crate) fn state_ref(&mut self, mode: LexMode) {
        self.start(NodeKind::StateRef);
        self.bump(mode);
        if self.expect(LexMode::Plain, TokenKind::LParen) {
            self.expect_identifier();
            self.expect(LexMode::Plain, TokenKind::RParen);
        }
        self.finish();
    }

    /// A state: `custom(name)` or a bare name. `custom` is scanned in
    /// `mode`.
    pub(crate) fn state(&mut self, mode: LexMode) {
        if self.at_keyword(mode, Keyword::Custom) {
            self.state_ref(mode);
        } else {
            self.expect_identifier();
        }
    }
}
