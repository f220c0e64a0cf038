//! Read-only views over the accessibility semantics of an element tree.
//!
//! `snapshot` renders what assistive technology would be told about a tree:
//! one line per element that carries a role, indented by nesting depth,
//! with its ARIA attributes and text. Elements without a role are
//! transparent and their children are listed at the same depth.

use std::fmt::Write;

use crate::element::{aria, find_element, Content, Element, Role};

pub fn snapshot(root: &Element) -> String {
    let mut out = String::new();
    write_node(root, 0, &mut out);
    out
}

fn write_node(element: &Element, depth: usize, out: &mut String) {
    let child_depth = match element.role {
        Some(role) => {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = write!(out, "{:indent$}{} #{}", "", role, element.id, indent = depth * 2);
            for (name, value) in &element.aria {
                let _ = write!(out, " {name}={value:?}");
            }
            match &element.content {
                Content::Text(text) => {
                    let _ = write!(out, " {text:?}");
                }
                Content::TextInput { value, .. } => {
                    let _ = write!(out, " value={value:?}");
                }
                _ => {}
            }
            depth + 1
        }
        None => depth,
    };

    for child in element.child_elements() {
        write_node(child, child_depth, out);
    }
}

/// The element named by `aria-activedescendant` on the element `owner_id`.
pub fn active_descendant<'a>(root: &'a Element, owner_id: &str) -> Option<&'a Element> {
    let owner = find_element(root, owner_id)?;
    let target = owner.get_aria(aria::ACTIVE_DESCENDANT)?;
    find_element(root, target)
}

/// The element named by `aria-controls` on the element `owner_id`.
pub fn controlled<'a>(root: &'a Element, owner_id: &str) -> Option<&'a Element> {
    let owner = find_element(root, owner_id)?;
    let target = owner.get_aria(aria::CONTROLS)?;
    find_element(root, target)
}

/// All elements with `role` in tree order.
pub fn find_by_role(root: &Element, role: Role) -> Vec<&Element> {
    let mut found = Vec::new();
    collect_role(root, role, &mut found);
    found
}

fn collect_role<'a>(element: &'a Element, role: Role, found: &mut Vec<&'a Element>) {
    if element.role == Some(role) {
        found.push(element);
    }
    for child in element.child_elements() {
        collect_role(child, role, found);
    }
}
