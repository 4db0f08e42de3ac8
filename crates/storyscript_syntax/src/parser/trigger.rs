//! Triggers, `if` blocks and action lines.

use super::Parser;
use crate::keyword::Keyword;
use crate::lex_mode::LexMode;
use crate::node_kind::NodeKind;
use crate::token::{Token, TokenKind};

const STATEMENT: &str = "an action or `if`";

impl<'src> Parser<'src> {
    /// `trigger := 'trigger' [string] ['only'] ['once'] 'when' condition_list
    /// '{' trigger_stmt* '}'`
    pub(crate) fn trigger(&mut self) {
        self.start(NodeKind::Trigger);
        self.bump(LexMode::TopLevel);

        if matches!(
            self.peek(LexMode::TriggerHead).kind,
            TokenKind::String(_) | TokenKind::Identifier
        ) && !self.at_top_level_start()
        {
            self.start(NodeKind::String);
            self.bump(LexMode::TriggerHead);
            self.finish();
        }
        self.eat_keyword(LexMode::TriggerHead, Keyword::Only);
        self.eat_keyword(LexMode::TriggerHead, Keyword::Once);

        if self.expect_keyword(LexMode::TriggerHead, Keyword::When) {
            self.condition_list();
        }
        self.braced(LexMode::TriggerBody, STATEMENT, Self::trigger_statement);
        self.finish();
    }

    /// `trigger_stmt := if_block | action`
    fn trigger_statement(&mut self, token: Token<'src>) -> bool {
        if token.is_keyword(Keyword::If) {
            self.if_block();
        } else {
            self.action();
        }
        true
    }

    /// `if_block := 'if' condition_list '{' trigger_stmt* '}'`
    fn if_block(&mut self) {
        self.start(NodeKind::IfBlock);
        self.bump(LexMode::TriggerBody);
        self.condition_list();
        if self.at(LexMode::TriggerBody, TokenKind::LBrace) {
            if self.enter(LexMode::TriggerBody) {
                self.block_body(LexMode::TriggerBody, STATEMENT, Self::trigger_statement);
                self.leave();
            }
        } else {
            self.missing("'{'");
        }
        self.finish();
    }

    /// `action := ['do'] arg* [action_block]`
    ///
    /// The arguments run to the end of the line, a `}`, or a `{` opening
    /// the action's block.
    fn action(&mut self) {
        self.start(NodeKind::Action);
        if self.at(LexMode::TriggerBody, TokenKind::LBrace) {
            self.action_block();
            self.finish();
            return;
        }
        self.bump_any(LexMode::TriggerBody);
        loop {
            let token = self.peek(LexMode::Plain);
            match token.kind {
                TokenKind::RBrace | TokenKind::Eof => break,
                TokenKind::LBrace => {
                    self.action_block();
                    break;
                }
                _ if !self.on_same_line(&token) => break,
                _ => {
                    self.bump_any(LexMode::Plain);
                }
            }
        }
        self.finish();
    }

    /// `action_block := '{' trigger_stmt* '}'`
    fn action_block(&mut self) {
        if self.enter(LexMode::TriggerBody) {
            self.start(NodeKind::ActionBlock);
            self.block_body(LexMode::TriggerBody, STATEMENT, Self::trigger_statement);
            self.finish();
            self.leave();
        }
    }
}
