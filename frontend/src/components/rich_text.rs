use sarvian_common::project::{TextBlock, TextSpan};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq)]
enum Node<'a> {
    Heading(&'static str, &'a [TextSpan]),
    Paragraph(&'a [TextSpan]),
    List { ordered: bool, items: Vec<&'a [TextSpan]> },
}

fn heading_tag(style: &str) -> Option<&'static str> {
    match style {
        "h1" => Some("h1"),
        "h2" => Some("h2"),
        "h3" => Some("h3"),
        "h4" => Some("h4"),
        "blockquote" => Some("blockquote"),
        _ => None,
    }
}

/// Groups consecutive list items into one list and drops non-text blocks.
fn layout(blocks: &[TextBlock]) -> Vec<Node<'_>> {
    let mut nodes: Vec<Node<'_>> = Vec::new();
    for block in blocks.iter().filter(|b| b.kind == "block") {
        if let Some(list) = block.list_item.as_deref() {
            let ordered = list == "number";
            match nodes.last_mut() {
                Some(Node::List { ordered: o, items }) if *o == ordered => {
                    items.push(block.children.as_slice())
                }
                _ => nodes.push(Node::List { ordered, items: vec![block.children.as_slice()] }),
            }
            continue;
        }
        match block.style.as_deref().and_then(heading_tag) {
            Some(tag) => nodes.push(Node::Heading(tag, block.children.as_slice())),
            None => nodes.push(Node::Paragraph(block.children.as_slice())),
        }
    }
    nodes
}

fn render_spans(spans: &[TextSpan]) -> Html {
    spans
        .iter()
        .map(|span| {
            let mut node = html! { {span.text.clone()} };
            if span.marks.iter().any(|m| m == "em") {
                node = html! { <em>{node}</em> };
            }
            if span.marks.iter().any(|m| m == "strong") {
                node = html! { <strong>{node}</strong> };
            }
            node
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct RichTextProps {
    pub blocks: Vec<TextBlock>,
}

#[function_component(RichText)]
pub fn rich_text(props: &RichTextProps) -> Html {
    html! {
        <div class="richtext">
            { for layout(&props.blocks).into_iter().map(|node| match node {
                Node::Heading(tag, spans) => html! {
                    <@{tag}>{ render_spans(spans) }</@>
                },
                Node::Paragraph(spans) => html! { <p>{ render_spans(spans) }</p> },
                Node::List { ordered, items } => {
                    let items: Html = items.into_iter().map(|spans| html! {
                        <li>{ render_spans(spans) }</li>
                    }).collect();
                    if ordered {
                        html! { <ol>{items}</ol> }
                    } else {
                        html! { <ul>{items}</ul> }
                    }
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(style: Option<&str>, list: Option<&str>, text: &str) -> TextBlock {
        TextBlock {
            kind: "block".into(),
            style: style.map(String::from),
            list_item: list.map(String::from),
            children: vec![TextSpan { text: text.into(), marks: vec![] }],
        }
    }

    #[test]
    fn consecutive_list_items_share_one_list() {
        let blocks = vec![
            block(Some("h2"), None, "Scope"),
            block(None, Some("bullet"), "Kitchen"),
            block(None, Some("bullet"), "Baths"),
            block(None, Some("number"), "First"),
            block(Some("normal"), None, "Done."),
        ];
        let nodes = layout(&blocks);
        assert_eq!(nodes.len(), 4);
        assert!(matches!(nodes[0], Node::Heading("h2", _)));
        assert!(matches!(&nodes[1], Node::List { ordered: false, items } if items.len() == 2));
        assert!(matches!(&nodes[2], Node::List { ordered: true, items } if items.len() == 1));
        assert!(matches!(nodes[3], Node::Paragraph(_)));
    }

    #[test]
    fn non_text_blocks_are_skipped() {
        let mut image = block(None, None, "");
        image.kind = "image".into();
        assert!(layout(&[image]).is_empty());
    }
}
