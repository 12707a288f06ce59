use crate::types::{Document, ListKind, Node, StyleTag};

pub const RUN_TEXT: &str = "lorem ipsum ";

/// A document of `blocks` repetitions of one paragraph (three runs, one of
/// them bold) followed by a two-item list.
pub fn make_blocks(blocks: usize) -> Document {
    let mut children = Vec::with_capacity(blocks * 2);
    for _ in 0..blocks {
        children.push(Node::paragraph(vec![
            Node::leaf(RUN_TEXT),
            Node::styled(RUN_TEXT, [StyleTag::Bold]),
            Node::leaf(RUN_TEXT),
        ]));
        children.push(Node::list(
            ListKind::Bulleted,
            vec![
                Node::list_item(RUN_TEXT),
                Node::item_group(vec![Node::styled(RUN_TEXT, [StyleTag::Italic])]),
            ],
        ));
    }
    Document::new(Node::root(children))
}

/// A single paragraph of `runs` plain leaves.
pub fn make_flat(runs: usize) -> Document {
    let leaves = (0..runs).map(|_| Node::leaf(RUN_TEXT)).collect();
    Document::new(Node::root(vec![Node::paragraph(leaves)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traverse::leaves;

    #[test]
    fn fixture_sizes() {
        assert_eq!(leaves(make_blocks(3).root()).len(), 15);
        assert_eq!(leaves(make_flat(7).root()).len(), 7);
    }
}
