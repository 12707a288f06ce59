//! The sample document an editor session starts from.

use crate::types::{Document, ListKind, Node, StyleTag};

/// Mixed paragraphs, a bulleted list with a nested item group, and runs
/// carrying nested bold / superscript / italic styling.
pub fn sample_document() -> Document {
    use StyleTag::{Bold, Italic, Superscript};

    Document::new(Node::root(vec![
        Node::paragraph(vec![
            Node::leaf("hi "),
            Node::styled("is bold ", [Bold]),
            Node::leaf("yup"),
        ]),
        Node::list(
            ListKind::Bulleted,
            vec![
                Node::list_item("hi i am child number 1"),
                Node::item_group(vec![
                    Node::leaf("hi "),
                    Node::styled("i am", [Bold]),
                    Node::styled(" an italic text ", [Italic]),
                    Node::styled(
                        " bold, superscript and italic text",
                        [Bold, Superscript, Italic],
                    ),
                    Node::leaf(" child number 2"),
                ]),
                Node::list_item("hi i am child number 3"),
            ],
        ),
        Node::paragraph(vec![Node::leaf("sup")]),
        Node::paragraph(vec![
            Node::leaf("zp1 "),
            Node::styled("bold p2 ", [Bold]),
            Node::leaf("3rdddddd"),
        ]),
    ]))
}
