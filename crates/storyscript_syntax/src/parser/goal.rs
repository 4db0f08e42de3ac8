//! Goal blocks.

use super::Parser;
use crate::keyword::Keyword;
use crate::lex_mode::LexMode;
use crate::node_kind::NodeKind;
use crate::token::{Token, TokenKind};

impl<'src> Parser<'src> {
    pub(crate) fn goal_statement(&mut self, token: Token<'src>) -> bool {
        match token.keyword() {
            Some(Keyword::Name) => self.keyword_string(NodeKind::GoalName, LexMode::GoalBody),
            Some(Keyword::Desc | Keyword::Description) => {
                self.keyword_string(NodeKind::GoalDesc, LexMode::GoalBody);
            }
            Some(Keyword::Group) => {
                self.start(NodeKind::GoalGroup);
                self.bump(LexMode::GoalBody);
                let group = self.peek(LexMode::GoalGroup);
                if matches!(
                    group.keyword(),
                    Some(Keyword::Required | Keyword::Optional | Keyword::StatusEffect)
                ) {
                    self.bump(LexMode::GoalGroup);
                } else {
                    self.missing("`required`, `optional` or `status-effect`");
                }
                self.finish();
            }
            Some(Keyword::Done) => self.goal_when(NodeKind::GoalDone),
            Some(Keyword::Start) => self.goal_when(NodeKind::GoalStart),
            Some(Keyword::Fail) => self.goal_when(NodeKind::GoalFail),
            Some(Keyword::Condition) => {
                self.start(NodeKind::GoalCondition);
                self.bump(LexMode::GoalBody);
                if self.at(LexMode::Condition, TokenKind::LParen) {
                    self.condition_group();
                } else {
                    self.missing("'('");
                }
                self.finish();
            }
            _ => return false,
        }
        true
    }

    /// `<keyword> 'when' goal_cond`
    fn goal_when(&mut self, kind: NodeKind) {
        self.start(kind);
        self.bump(LexMode::GoalBody);
        if self.expect_keyword(LexMode::TriggerHead, Keyword::When) {
            self.goal_cond();
        }
        self.finish();
    }
}
