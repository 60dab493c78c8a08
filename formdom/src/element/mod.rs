mod content;
mod node;
mod selector;

pub use content::Content;
pub use node::Element;
pub use selector::Selector;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs from `root` down to the element with `id`, both ends included.
pub fn path_to(root: &Element, id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if path_recursive(root, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn path_recursive(element: &Element, id: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == id {
        return true;
    }

    for child in element.child_elements() {
        if path_recursive(child, id, path) {
            return true;
        }
    }

    path.pop();
    false
}

/// The element itself or its nearest ancestor matching `selector`.
pub fn closest<'a>(root: &'a Element, id: &str, selector: &Selector) -> Option<&'a Element> {
    let path = path_to(root, id)?;
    path.iter()
        .rev()
        .filter_map(|ancestor| find_element(root, ancestor))
        .find(|el| el.matches(selector))
}

/// Whether `id` is `ancestor` itself or one of its descendants.
pub fn contains(root: &Element, ancestor: &str, id: &str) -> bool {
    find_element(root, ancestor)
        .map(|el| find_element(el, id).is_some())
        .unwrap_or(false)
}

/// First descendant of `scope` (excluding `scope`) matching `selector`, depth-first.
pub fn query<'a>(scope: &'a Element, selector: &Selector) -> Option<&'a Element> {
    for child in scope.child_elements() {
        if child.matches(selector) {
            return Some(child);
        }
        if let Some(found) = query(child, selector) {
            return Some(found);
        }
    }
    None
}

/// All descendants of `scope` (excluding `scope`) matching `selector`, in document order.
pub fn query_all<'a>(scope: &'a Element, selector: &Selector) -> Vec<&'a Element> {
    let mut result = Vec::new();
    query_all_recursive(scope, selector, &mut result);
    result
}

fn query_all_recursive<'a>(element: &'a Element, selector: &Selector, result: &mut Vec<&'a Element>) {
    for child in element.child_elements() {
        if child.matches(selector) {
            result.push(child);
        }
        query_all_recursive(child, selector, result);
    }
}
