//! Typed views over the untyped CST.
//!
//! Each wrapper is a cheap handle around a [`SyntaxNode`] of one kind;
//! `cast` returns `None` for any other kind.

use crate::syntax_kind::{SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

macro_rules! ast_node {
    ($name:ident, $($kind:ident)|+) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(SyntaxNode);

        impl $name {
            pub fn cast(node: SyntaxNode) -> Option<Self> {
                matches!(node.kind(), $(SyntaxKind::$kind)|+).then(|| Self(node))
            }

            pub fn syntax(&self) -> &SyntaxNode {
                &self.0
            }
        }
    };
}

ast_node!(Command, COMMAND);
ast_node!(Group, GROUP | OPTION | INLINE_MATH | DISPLAY_MATH);
ast_node!(Environment, ENVIRONMENT);
ast_node!(Item, ITEM);
ast_node!(Verb, VERB);

impl Command {
    /// `\name`, `\name*` or a control symbol such as `\\`.
    pub fn name_token(&self) -> Option<SyntaxToken> {
        self.0.first_token()
    }

    /// Name without the leading backslash, star kept.
    pub fn name(&self) -> String {
        self.name_token()
            .map(|t| {
                let text = t.text();
                text.strip_prefix('\\').unwrap_or(text).to_string()
            })
            .unwrap_or_default()
    }

    /// Optional and mandatory arguments in source order.
    pub fn arguments(&self) -> impl Iterator<Item = Group> + use<> {
        self.0.children().filter_map(Group::cast)
    }

    /// Mandatory `{..}` arguments only.
    pub fn groups(&self) -> impl Iterator<Item = Group> + use<> {
        self.arguments().filter(|g| !g.is_optional())
    }

    pub fn last_group(&self) -> Option<Group> {
        self.groups().last()
    }

    /// Split the attached arguments into those the command takes and the
    /// groups that merely follow it.
    ///
    /// A command taking `count` mandatory arguments owns every argument up to
    /// and including its `count`-th `{..}` group. A command taking none still
    /// owns leading `[..]` options, as in `\\[2pt]`. `None` means the count is
    /// unknown and every attached argument belongs to the command.
    pub fn split_arguments(&self, count: Option<usize>) -> (Vec<Group>, Vec<Group>) {
        let mut own = Vec::new();
        let mut rest = Vec::new();
        let mut mandatory = 0;
        for argument in self.arguments() {
            let full = count.is_some_and(|count| {
                mandatory == count && (count > 0 || !argument.is_optional())
            });
            if full || !rest.is_empty() {
                rest.push(argument);
                continue;
            }
            if !argument.is_optional() {
                mandatory += 1;
            }
            own.push(argument);
        }
        (own, rest)
    }
}

impl Group {
    pub fn is_optional(&self) -> bool {
        self.0.kind() == SyntaxKind::OPTION
    }

    /// Children between the opening and the closing delimiter.
    pub fn content(&self) -> impl Iterator<Item = SyntaxElement> + use<> {
        let len = self.0.children_with_tokens().count();
        self.0
            .children_with_tokens()
            .skip(1)
            .take(len.saturating_sub(2))
    }

    /// Text of an argument captured literally, such as a URL.
    pub fn literal_text(&self) -> String {
        self.content()
            .filter_map(|e| e.into_token())
            .map(|t| t.text().to_string())
            .collect()
    }
}

impl Environment {
    /// Name given to `\begin`.
    pub fn name(&self) -> String {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::BEGIN)
            .and_then(|begin| {
                begin
                    .children_with_tokens()
                    .filter_map(|e| e.into_token())
                    .find(|t| t.kind() == SyntaxKind::TEXT)
            })
            .map(|t| t.text().to_string())
            .unwrap_or_default()
    }

    /// Arguments following `\begin{name}`.
    pub fn arguments(&self) -> impl Iterator<Item = Group> + use<> {
        self.0.children().filter_map(Group::cast)
    }

    pub fn body(&self) -> Option<SyntaxNode> {
        self.0.children().find(|n| n.kind() == SyntaxKind::ENV_BODY)
    }

    /// Children of the body, empty for an empty body.
    pub fn content(&self) -> impl Iterator<Item = SyntaxElement> + use<> {
        self.body()
            .into_iter()
            .flat_map(|body| body.children_with_tokens())
    }

    /// `\item` entries of a list body.
    pub fn items(&self) -> impl Iterator<Item = Item> + use<> {
        self.body()
            .into_iter()
            .flat_map(|body| body.children())
            .filter_map(Item::cast)
    }
}

impl Item {
    /// `[label]` directly after `\item`.
    pub fn label(&self) -> Option<Group> {
        self.0.children().filter_map(Group::cast).next()
    }

    pub fn content(&self) -> impl Iterator<Item = SyntaxElement> + use<> {
        self.0
            .children()
            .find(|n| n.kind() == SyntaxKind::ITEM_BODY)
            .into_iter()
            .flat_map(|body| body.children_with_tokens())
    }
}

impl Verb {
    /// Payload between the delimiters.
    pub fn payload(&self) -> String {
        let raw = self
            .0
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .find(|t| t.kind() == SyntaxKind::VERBATIM_TEXT)
            .map(|t| t.text().to_string())
            .unwrap_or_default();
        let mut chars = raw.chars();
        chars.next();
        chars.next_back();
        chars.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn first<T>(input: &str, cast: fn(SyntaxNode) -> Option<T>) -> T {
        parse(input)
            .unwrap()
            .descendants()
            .find_map(cast)
            .unwrap()
    }

    #[test]
    fn command_name_and_arguments() {
        let command = first("\\section*[short]{Long title}", Command::cast);
        assert_eq!(command.name(), "section*");
        assert_eq!(command.arguments().count(), 2);
        let last = command.last_group().unwrap();
        assert_eq!(last.syntax().text().to_string(), "{Long title}");
        let content: String = last.content().map(|e| e.to_string()).collect();
        assert_eq!(content, "Long title");
    }

    #[rstest]
    #[case("\\emph{word}{} next", Some(1), 1, 1)]
    #[case("\\textcolor[rgb]{1,0,0}{warm}{x}", Some(2), 3, 1)]
    #[case("\\linebreak[4]{x}", Some(0), 1, 1)]
    #[case("\\LaTeX{}", Some(0), 0, 1)]
    #[case("\\emph{a}[b]{c}", Some(1), 1, 2)]
    #[case("\\newcommand{\\x}[1]{y}", None, 3, 0)]
    fn splits_owned_from_trailing_arguments(
        #[case] input: &str,
        #[case] count: Option<usize>,
        #[case] own: usize,
        #[case] rest: usize,
    ) {
        let command = first(input, Command::cast);
        let (owned, trailing) = command.split_arguments(count);
        assert_eq!((owned.len(), trailing.len()), (own, rest));
    }

    #[test]
    fn control_symbol_command_name() {
        let command = first("a\\\\b", Command::cast);
        assert_eq!(command.name(), "\\");
    }

    #[test]
    fn environment_parts() {
        let env = first("\\begin{tabular}{cc}a&b\\end{tabular}", Environment::cast);
        assert_eq!(env.name(), "tabular");
        assert_eq!(env.arguments().count(), 1);
        let body: String = env.content().map(|e| e.to_string()).collect();
        assert_eq!(body, "a&b");
    }

    #[test]
    fn list_items_and_labels() {
        let env = first(
            "\\begin{description}\\item[A] x\\item y\\end{description}",
            Environment::cast,
        );
        let items: Vec<_> = env.items().collect();
        assert_eq!(items.len(), 2);
        let label = items[0].label().unwrap();
        assert_eq!(label.content().map(|e| e.to_string()).collect::<String>(), "A");
        assert!(items[1].label().is_none());
        let second: String = items[1].content().map(|e| e.to_string()).collect();
        assert_eq!(second, " y");
    }

    #[test]
    fn verb_payload() {
        assert_eq!(first("\\verb+a b+", Verb::cast).payload(), "a b");
    }

    #[test]
    fn literal_url() {
        let command = first("\\url{a%b}", Command::cast);
        assert_eq!(command.last_group().unwrap().literal_text(), "a%b");
    }
}
