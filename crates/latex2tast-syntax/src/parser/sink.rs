//! Sink for converting parser events into a Rowan green tree.

use rowan::GreenNodeBuilder;

use crate::lexer::Token;
use crate::parser::event::Event;
use crate::syntax_kind::SyntaxNode;

/// Replays parser events over the consumed tokens.
pub struct Sink<'t, 'input> {
    builder: GreenNodeBuilder<'static>,
    tokens: &'t [Token<'input>],
    cursor: usize,
    events: Vec<Event>,
}

impl<'t, 'input> Sink<'t, 'input> {
    /// `tokens` are the tokens in consumption order, one per `Token` event.
    pub fn new(tokens: &'t [Token<'input>], events: Vec<Event>) -> Self {
        Self {
            builder: GreenNodeBuilder::new(),
            tokens,
            cursor: 0,
            events,
        }
    }

    /// Consume the sink and build the syntax tree.
    pub fn finish(mut self) -> SyntaxNode {
        for event in std::mem::take(&mut self.events) {
            match event {
                Event::Start { kind } => self.builder.start_node(kind.into()),
                Event::Token { kind } => {
                    let text = self.tokens[self.cursor].text;
                    self.cursor += 1;
                    self.builder.token(kind.into(), text);
                }
                Event::Finish => self.builder.finish_node(),
                Event::Placeholder => {}
            }
        }

        SyntaxNode::new_root(self.builder.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex;
    use crate::syntax_kind::SyntaxKind;

    #[test]
    fn sink_builds_nested_tree() {
        let tokens = lex("{x}");
        let events = vec![
            Event::start(SyntaxKind::ROOT),
            Event::start(SyntaxKind::GROUP),
            Event::token(SyntaxKind::L_BRACE),
            Event::token(SyntaxKind::TEXT),
            Event::token(SyntaxKind::R_BRACE),
            Event::Finish,
            Event::Finish,
        ];

        let tree = Sink::new(&tokens, events).finish();

        assert_eq!(tree.kind(), SyntaxKind::ROOT);
        let group = tree.first_child().map(|n| n.kind());
        assert_eq!(group, Some(SyntaxKind::GROUP));
        assert_eq!(tree.text().to_string(), "{x}");
    }

    #[test]
    fn sink_relabels_tokens() {
        let tokens = lex("a b");
        let events = vec![
            Event::start(SyntaxKind::ROOT),
            Event::token(SyntaxKind::VERBATIM_TEXT),
            Event::token(SyntaxKind::WHITESPACE),
            Event::token(SyntaxKind::TEXT),
            Event::Finish,
        ];

        let tree = Sink::new(&tokens, events).finish();
        let first = tree.first_token().map(|t| t.kind());
        assert_eq!(first, Some(SyntaxKind::VERBATIM_TEXT));
    }
}
