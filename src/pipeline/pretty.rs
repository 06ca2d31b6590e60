//! 2-space printer for JSONC syntax trees
//!
//! Non-empty objects and arrays are laid out one item per line, empty ones stay `{}`
//! and `[]`. Comments keep their place relative to the items: a comment on its own
//! line is printed above the next item, a comment on the same line as an item stays
//! behind it. Blank lines and trailing commas are dropped, and there is no final
//! newline. Literals are printed with their source text.

use std::mem;

use jsonc_parser::cst::{CstNode, CstRootNode, ObjectPropName};

const INDENT: &str = "  ";

/// One value inside a container or at the root, with the comments attached to it
struct Item {
    leading: Vec<String>,
    node: CstNode,
    trailing: Vec<String>,
}

/// Items of a container plus comments after the last one
struct Items {
    items: Vec<Item>,
    dangling: Vec<String>,
}

/// Print the whole document
pub fn print_jsonc(root: &CstRootNode) -> String {
    let Items { items, dangling } = collect_items(root.children());
    let mut out = String::new();

    for item in &items {
        for comment in &item.leading {
            out.push_str(comment);
            out.push('\n');
        }
        write_value(&mut out, &item.node, 0);
        for comment in &item.trailing {
            out.push(' ');
            out.push_str(comment);
        }
    }
    for comment in &dangling {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(comment);
    }

    out
}

fn collect_items(children: Vec<CstNode>) -> Items {
    let mut items: Vec<Item> = Vec::new();
    let mut pending = Vec::new();
    let mut same_line = false;

    for child in children {
        if child.is_newline() {
            same_line = false;
            continue;
        }
        if let Some(comment) = child.as_comment() {
            match items.last_mut() {
                Some(last) if same_line => last.trailing.push(comment.raw_value()),
                _ => pending.push(comment.raw_value()),
            }
            continue;
        }
        if child.is_trivia() || child.is_token() {
            continue;
        }

        let mut leading = mem::take(&mut pending);
        // comments between a key and its value move above the property
        if let Some(prop) = child.as_object_prop() {
            leading.extend(
                prop.children()
                    .iter()
                    .filter_map(|node| node.as_comment())
                    .map(|comment| comment.raw_value()),
            );
        }
        items.push(Item {
            leading,
            node: child,
            trailing: Vec::new(),
        });
        same_line = true;
    }

    Items {
        items,
        dangling: pending,
    }
}

fn write_value(out: &mut String, node: &CstNode, depth: usize) {
    if let Some(object) = node.as_object() {
        write_block(out, ('{', '}'), object.children(), depth);
    } else if let Some(array) = node.as_array() {
        write_block(out, ('[', ']'), array.children(), depth);
    } else if let Some(prop) = node.as_object_prop() {
        match prop.name() {
            Some(ObjectPropName::String(lit)) => out.push_str(&lit.to_string()),
            Some(ObjectPropName::Word(word)) => {
                out.push('"');
                out.push_str(&word.to_string());
                out.push('"');
            }
            None => {}
        }
        out.push_str(": ");
        if let Some(value) = prop.value() {
            write_value(out, &value, depth);
        }
    } else {
        out.push_str(&node.to_string());
    }
}

fn write_block(out: &mut String, (open, close): (char, char), children: Vec<CstNode>, depth: usize) {
    let Items { items, dangling } = collect_items(children);
    out.push(open);
    if items.is_empty() && dangling.is_empty() {
        out.push(close);
        return;
    }

    let inner = INDENT.repeat(depth + 1);
    let last = items.len().saturating_sub(1);
    for (index, item) in items.iter().enumerate() {
        for comment in &item.leading {
            push_line(out, &inner, comment);
        }
        push_line(out, &inner, "");
        write_value(out, &item.node, depth + 1);
        if index < last {
            out.push(',');
        }
        for comment in &item.trailing {
            out.push(' ');
            out.push_str(comment);
        }
    }
    for comment in &dangling {
        push_line(out, &inner, comment);
    }

    push_line(out, &INDENT.repeat(depth), "");
    out.push(close);
}

fn push_line(out: &mut String, indent: &str, text: &str) {
    out.push('\n');
    out.push_str(indent);
    out.push_str(text);
}
