//! Item blocks and location clauses.

use super::Parser;
use crate::keyword::Keyword;
use crate::lex_mode::LexMode;
use crate::node_kind::NodeKind;
use crate::token::{Token, TokenKind};

impl<'src> Parser<'src> {
    pub(crate) fn item_statement(&mut self, token: Token<'src>) -> bool {
        match token.keyword() {
            Some(Keyword::Name) => self.keyword_string(NodeKind::ItemName, LexMode::ItemBody),
            Some(Keyword::Desc | Keyword::Description) => {
                self.keyword_string(NodeKind::ItemDesc, LexMode::ItemBody);
            }
            Some(Keyword::Text) => self.keyword_string(NodeKind::ItemText, LexMode::ItemBody),
            Some(Keyword::Portable) => {
                self.start(NodeKind::ItemPortable);
                self.bump(LexMode::ItemBody);
                self.boolean();
                self.finish();
            }
            Some(Keyword::Ability) => {
                self.start(NodeKind::ItemAbility);
                self.bump(LexMode::ItemBody);
                if self.expect_identifier() {
                    let target = self.peek(LexMode::Plain);
                    if target.kind == TokenKind::Identifier && self.on_same_line(&target) {
                        self.bump(LexMode::Plain);
                    }
                }
                self.finish();
            }
            Some(Keyword::Container) => self.item_container(),
            Some(Keyword::Location) => {
                self.start(NodeKind::ItemLocation);
                self.bump(LexMode::ItemBody);
                self.location();
                self.finish();
            }
            Some(Keyword::Restricted) => {
                self.start(NodeKind::ItemRestricted);
                self.bump(LexMode::ItemBody);
                self.same_line_string();
                self.finish();
            }
            Some(Keyword::Requires) => {
                self.start(NodeKind::ItemRequires);
                self.bump(LexMode::ItemBody);
                if self.expect_identifier() && self.expect_keyword(LexMode::ItemDetail, Keyword::To) {
                    self.expect_identifier();
                }
                self.finish();
            }
            Some(Keyword::Consumable) => {
                self.start(NodeKind::ItemConsumable);
                self.bump(LexMode::ItemBody);
                self.block(
                    NodeKind::ConsumableBlock,
                    LexMode::ConsumableBody,
                    "`uses_left`, `consume_on` or `when_consumed`",
                    Self::consumable_statement,
                );
                self.finish();
            }
            Some(Keyword::Aliases) => self.item_aliases(),
            Some(Keyword::Visibility) => {
                self.start(NodeKind::ItemVisibility);
                self.bump(LexMode::ItemBody);
                let token = self.peek(LexMode::ItemDetail);
                if matches!(
                    token.keyword(),
                    Some(Keyword::Listed | Keyword::Scenery | Keyword::Hidden)
                ) {
                    self.bump(LexMode::ItemDetail);
                } else {
                    self.missing("`listed`, `scenery` or `hidden`");
                }
                self.finish();
            }
            Some(Keyword::Visible) => {
                self.start(NodeKind::ItemVisibleWhen);
                self.bump(LexMode::ItemBody);
                if self.expect_keyword(LexMode::ItemDetail, Keyword::When) {
                    self.line_condition();
                }
                self.finish();
            }
            Some(Keyword::Movability) => self.item_movability(),
            _ => return false,
        }
        true
    }

    /// `item_aliases := 'aliases' string (',' string)*`, all on one line.
    fn item_aliases(&mut self) {
        self.start(NodeKind::ItemAliases);
        self.bump(LexMode::ItemBody);
        let mut aliases = 0usize;
        loop {
            let token = self.peek(LexMode::Plain);
            if !self.on_same_line(&token) {
                break;
            }
            if token.kind == TokenKind::Comma {
                self.bump(LexMode::Plain);
            } else if self.at_string() {
                self.string();
                aliases += 1;
            } else {
                break;
            }
        }
        if aliases == 0 {
            self.missing("string");
        }
        self.finish();
    }

    /// `item_movability := 'movability' ('free' | ('fixed' | 'restricted') string)`
    fn item_movability(&mut self) {
        self.start(NodeKind::ItemMovability);
        self.bump(LexMode::ItemBody);
        match self.peek(LexMode::ItemDetail).keyword() {
            Some(Keyword::Free) => {
                self.bump(LexMode::ItemDetail);
            }
            Some(Keyword::Fixed | Keyword::Restricted) => {
                self.bump(LexMode::ItemDetail);
                self.string();
            }
            _ => self.missing("`free`, `fixed` or `restricted`"),
        }
        self.finish();
    }

    /// `consumable_stmt := 'uses_left' number
    /// | 'consume_on' 'ability' identifier [identifier]
    /// | 'when_consumed' ('despawn' | 'replace' ('inventory' | 'current' 'room') identifier)`
    fn consumable_statement(&mut self, token: Token<'src>) -> bool {
        match token.keyword() {
            Some(Keyword::UsesLeft) => {
                self.start(NodeKind::ConsumableUses);
                self.bump(LexMode::ConsumableBody);
                self.expect(LexMode::Plain, TokenKind::Number);
                self.finish();
            }
            Some(Keyword::ConsumeOn) => {
                self.start(NodeKind::ConsumeOn);
                self.bump(LexMode::ConsumableBody);
                if self.expect_keyword(LexMode::ConsumableDetail, Keyword::Ability)
                    && self.expect_identifier()
                {
                    // The next statement's keyword may share the line.
                    let target = self.peek(LexMode::ConsumableBody);
                    if target.kind == TokenKind::Identifier && self.on_same_line(&target) {
                        self.bump(LexMode::ConsumableBody);
                    }
                }
                self.finish();
            }
            Some(Keyword::WhenConsumed) => {
                self.start(NodeKind::WhenConsumed);
                self.bump(LexMode::ConsumableBody);
                match self.peek(LexMode::ConsumableDetail).keyword() {
                    Some(Keyword::Despawn) => {
                        self.bump(LexMode::ConsumableDetail);
                    }
                    Some(Keyword::Replace) => {
                        self.bump(LexMode::ConsumableDetail);
                        let place = self.peek(LexMode::ConsumableDetail).keyword();
                        let placed = match place {
                            Some(Keyword::Inventory) => {
                                self.bump(LexMode::ConsumableDetail);
                                true
                            }
                            Some(Keyword::Current) => {
                                self.bump(LexMode::ConsumableDetail);
                                self.expect_keyword(LexMode::ConsumableDetail, Keyword::Room)
                            }
                            _ => {
                                self.missing("`inventory` or `current room`");
                                false
                            }
                        };
                        if placed {
                            self.expect_identifier();
                        }
                    }
                    _ => self.missing("`despawn` or `replace`"),
                }
                self.finish();
            }
            _ => return false,
        }
        true
    }

    /// Parses a string only if one starts on the current line.
    fn same_line_string(&mut self) {
        let token = self.peek(LexMode::Plain);
        if self.on_same_line(&token) && self.at_string() {
            self.string();
        }
    }

    /// `item_container := 'container' ('state' [':'] state | container_block)`
    fn item_container(&mut self) {
        self.start(NodeKind::ItemContainer);
        self.bump(LexMode::ItemBody);
        if self.at(LexMode::ContainerState, TokenKind::LBrace) {
            self.block(
                NodeKind::ContainerBlock,
                LexMode::ContainerState,
                "`state`",
                Self::container_statement,
            );
        } else if self.at_keyword(LexMode::ContainerState, Keyword::State) {
            self.container_state();
        } else {
            self.missing("`state` or '{'");
        }
        self.finish();
    }

    fn container_statement(&mut self, token: Token<'src>) -> bool {
        if token.is_keyword(Keyword::State) {
            self.container_state();
            true
        } else {
            false
        }
    }

    /// `'state' [':'] ('open' | 'closed' | 'locked' | 'restricted')`
    fn container_state(&mut self) {
        self.bump(LexMode::ContainerState);
        self.eat(LexMode::ContainerState, TokenKind::Colon);
        let token = self.peek(LexMode::ContainerState);
        if matches!(
            token.keyword(),
            Some(Keyword::Open | Keyword::Closed | Keyword::Locked | Keyword::Restricted)
        ) {
            self.bump(LexMode::ContainerState);
        } else {
            self.missing("`open`, `closed`, `locked` or `restricted`");
        }
    }

    /// `location := ('room' | 'npc' | 'chest' | 'inventory') identifier
    /// | 'nowhere' [string]`
    pub(crate) fn location(&mut self) {
        self.start(NodeKind::Location);
        match self.peek(LexMode::Location).keyword() {
            Some(Keyword::Room | Keyword::Npc | Keyword::Chest | Keyword::Inventory) => {
                self.bump(LexMode::Location);
                self.expect_identifier();
            }
            Some(Keyword::Nowhere) => {
                self.bump(LexMode::Location);
                self.same_line_string();
            }
            _ => self.missing("`room`, `npc`, `chest`, `inventory` or `nowhere`"),
        }
        self.finish();
    }
}
