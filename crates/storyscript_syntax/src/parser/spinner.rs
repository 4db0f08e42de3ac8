//! Spinner blocks.

use super::Parser;
use crate::keyword::Keyword;
use crate::lex_mode::LexMode;
use crate::node_kind::NodeKind;
use crate::token::{Token, TokenKind};

impl<'src> Parser<'src> {
    pub(crate) fn spinner_statement(&mut self, token: Token<'src>) -> bool {
        match token.keyword() {
            Some(Keyword::Width) => {
                self.start(NodeKind::SpinnerWidth);
                self.bump(LexMode::SpinnerBody);
                self.expect(LexMode::Plain, TokenKind::Number);
                self.finish();
            }
            Some(Keyword::Wedge) => {
                self.start(NodeKind::WedgeStmt);
                self.bump(LexMode::SpinnerBody);
                self.string();
                let width = self.peek(LexMode::WedgeTail);
                if width.is_keyword(Keyword::Width) && self.on_same_line(&width) {
                    self.bump(LexMode::WedgeTail);
                    self.expect(LexMode::Plain, TokenKind::Number);
                }
                self.finish();
            }
            _ => return false,
        }
        true
    }
}
