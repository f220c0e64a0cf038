pub mod aria;
mod content;
mod node;

pub use aria::Role;
pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs from the root down to (and including) the element with `id`.
///
/// Empty when `id` is not in the tree. Mirrors a composed event path, so a
/// listener can ask whether an event target sits inside a given subtree.
pub fn path_to(root: &Element, id: &str) -> Vec<String> {
    let mut path = Vec::new();
    if collect_path(root, id, &mut path) {
        path.reverse();
    } else {
        path.clear();
    }
    path
}

fn collect_path(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    let found = element.id == id
        || match &element.content {
            Content::Children(children) => children.iter().any(|c| collect_path(c, id, path)),
            _ => false,
        };
    if found {
        path.push(element.id.clone());
    }
    found
}

/// Whether `descendant` is `ancestor` itself or lies somewhere beneath it.
pub fn contains(root: &Element, ancestor: &str, descendant: &str) -> bool {
    find_element(root, ancestor).is_some_and(|a| find_element(a, descendant).is_some())
}
