//! Condition lists, groups and structured goal conditions.

use super::Parser;
use crate::keyword::Keyword;
use crate::lex_mode::LexMode;
use crate::node_kind::NodeKind;
use crate::token::TokenKind;

impl Parser<'_> {
    /// `condition_list := condition_item ([','] condition_item)*`
    ///
    /// Ends before `{`, `}`, `)` or end of input.
    pub(crate) fn condition_list(&mut self) {
        self.start(NodeKind::ConditionList);
        let mut items = 0usize;
        loop {
            let token = self.peek(LexMode::Condition);
            match token.kind {
                TokenKind::LBrace | TokenKind::RBrace | TokenKind::RParen | TokenKind::Eof => {
                    break;
                }
                TokenKind::Comma => {
                    self.bump(LexMode::Condition);
                }
                _ if self.at_top_level_start() => break,
                TokenKind::LParen => {
                    self.condition_group();
                    items += 1;
                }
                TokenKind::Keyword(_) if self.at_goal_cond() => {
                    self.goal_cond();
                    items += 1;
                }
                _ => {
                    self.condition();
                    items += 1;
                }
            }
        }
        if items == 0 {
            self.missing("a condition");
        }
        self.finish();
    }

    /// Returns true if a well-formed goal condition head comes next.
    ///
    /// Other uses of the leading words, like `flag set lamp-lit`, are
    /// free-form conditions.
    fn at_goal_cond(&mut self) -> bool {
        let head = self.peek(LexMode::Condition).keyword();
        let second = self.peek_second(LexMode::Condition, LexMode::CondDetail);
        let second = match second {
            TokenKind::Keyword(keyword) => Some(keyword),
            _ => None,
        };
        match head {
            Some(Keyword::Has) => matches!(
                second,
                Some(Keyword::Flag | Keyword::Item | Keyword::Visited)
            ),
            Some(Keyword::Missing) => matches!(second, Some(Keyword::Flag | Keyword::Item)),
            Some(Keyword::Reached) => second == Some(Keyword::Room),
            Some(Keyword::Goal) => true,
            Some(Keyword::Flag) => matches!(second, Some(Keyword::Complete | Keyword::In)),
            _ => false,
        }
    }

    /// `condition_group := '(' condition_list ')'`
    pub(crate) fn condition_group(&mut self) {
        if !self.enter(LexMode::Condition) {
            return;
        }
        self.start(NodeKind::ConditionGroup);
        self.bump(LexMode::Condition);
        self.condition_list();
        self.expect(LexMode::Plain, TokenKind::RParen);
        self.finish();
        self.leave();
    }

    /// A free-form condition: a run of tokens up to a separator or bracket.
    fn condition(&mut self) {
        self.start(NodeKind::Condition);
        self.bump_any(LexMode::Condition);
        loop {
            let token = self.peek(LexMode::Plain);
            match token.kind {
                TokenKind::Comma
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::Eof => break,
                _ if self.at_top_level_start() => break,
                _ => {
                    self.bump_any(LexMode::Plain);
                }
            }
        }
        self.finish();
    }

    /// One condition that must end on the line it starts: a group, a goal
    /// condition, or a free-form run of words.
    pub(crate) fn line_condition(&mut self) {
        let token = self.peek(LexMode::Condition);
        if !self.on_same_line(&token) || self.at_top_level_start() {
            self.missing("a condition");
            return;
        }
        match token.kind {
            TokenKind::LParen => self.condition_group(),
            TokenKind::Keyword(_) if self.at_goal_cond() => self.goal_cond(),
            TokenKind::LBrace | TokenKind::RBrace | TokenKind::RParen | TokenKind::Comma => {
                self.missing("a condition");
            }
            _ => {
                self.start(NodeKind::Condition);
                self.bump_any(LexMode::Condition);
                loop {
                    let token = self.peek(LexMode::Plain);
                    if !self.on_same_line(&token)
                        || matches!(
                            token.kind,
                            TokenKind::Comma
                                | TokenKind::LParen
                                | TokenKind::RParen
                                | TokenKind::LBrace
                                | TokenKind::RBrace
                        )
                    {
                        break;
                    }
                    self.bump_any(LexMode::Plain);
                }
                self.finish();
            }
        }
    }

    /// A structured goal condition, introduced by `has`, `missing`,
    /// `reached`, `goal` or `flag`.
    pub(crate) fn goal_cond(&mut self) {
        if !matches!(
            self.peek(LexMode::Condition).keyword(),
            Some(Keyword::Has | Keyword::Missing | Keyword::Reached | Keyword::Goal | Keyword::Flag)
        ) {
            self.missing("a goal condition");
            return;
        }
        self.start(NodeKind::GoalCond);
        let head = self.bump(LexMode::Condition).keyword();
        match head {
            Some(Keyword::Has) => {
                if self.eat_keyword(LexMode::CondDetail, Keyword::Visited) {
                    self.expect_keyword(LexMode::CondDetail, Keyword::Room);
                    self.expect_identifier();
                } else {
                    self.flag_or_item();
                }
            }
            Some(Keyword::Missing) => self.flag_or_item(),
            Some(Keyword::Reached) => {
                if self.expect_keyword(LexMode::CondDetail, Keyword::Room) {
                    self.expect_identifier();
                }
            }
            Some(Keyword::Goal) => {
                if self.eat_keyword(LexMode::CondDetail, Keyword::Complete) {
                    self.expect_identifier();
                } else if self.expect_identifier() {
                    self.goal_status();
                }
            }
            _ => {
                if self.flag_status() {
                    self.expect_identifier();
                }
            }
        }
        self.finish();
    }

    /// `('flag' | 'item') identifier`
    fn flag_or_item(&mut self) {
        let token = self.peek(LexMode::CondDetail);
        if token.is_keyword(Keyword::Flag) || token.is_keyword(Keyword::Item) {
            self.bump(LexMode::CondDetail);
            self.expect_identifier();
        } else {
            self.missing("`flag` or `item`");
        }
    }

    /// `'done' | 'complete' | 'in' 'progress'`
    fn goal_status(&mut self) {
        let token = self.peek(LexMode::CondDetail);
        if token.is_keyword(Keyword::Done) || token.is_keyword(Keyword::Complete) {
            self.bump(LexMode::CondDetail);
        } else if token.is_keyword(Keyword::In) {
            self.bump(LexMode::CondDetail);
            self.expect_keyword(LexMode::CondDetail, Keyword::Progress);
        } else {
            self.missing("`done`, `complete` or `in progress`");
        }
    }

    /// `'complete' | 'in' 'progress'`
    fn flag_status(&mut self) -> bool {
        let token = self.peek(LexMode::CondDetail);
        if token.is_keyword(Keyword::Complete) {
            self.bump(LexMode::CondDetail);
            true
        } else if token.is_keyword(Keyword::In) {
            self.bump(LexMode::CondDetail);
            self.expect_keyword(LexMode::CondDetail, Keyword::Progress)
        } else {
            self.missing("`complete` or `in progress`");
            false
        }
    }
}
