mod content;
mod node;

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

/// Find the first text element whose content equals `text`.
pub fn find_text<'a>(root: &'a Element, text: &str) -> Option<&'a Element> {
    match &root.content {
        Content::Text(content) if content == text => Some(root),
        Content::Children(children) => children.iter().find_map(|c| find_text(c, text)),
        _ => None,
    }
}
