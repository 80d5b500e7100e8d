//! Scoped document queries: by data-attribute, by class, by predicate.
//!
//! All queries walk the subtree under a scope node in document order
//! (pre-order depth-first), mirroring `querySelector`/`querySelectorAll`
//! scoped to an element. Widgets locate their parts exclusively through
//! these.

use super::node::{NodeData, NodeId};
use super::tree::Dom;

impl Dom {
    /// Find the first node under `scope` (inclusive) carrying the attribute.
    pub fn query_attr_one(&self, scope: NodeId, name: &str) -> Option<NodeId> {
        self.query_one(scope, |data| data.has_attr(name))
    }

    /// Find all nodes under `scope` (inclusive) carrying the attribute, in
    /// document order.
    pub fn query_attr_all(&self, scope: NodeId, name: &str) -> Vec<NodeId> {
        self.query_all(scope, |data| data.has_attr(name))
    }

    /// Find the first node under `scope` (inclusive) with the given class.
    pub fn query_class_one(&self, scope: NodeId, class: &str) -> Option<NodeId> {
        self.query_one(scope, |data| data.has_class(class))
    }

    /// Find all nodes under `scope` (inclusive) with the given class, in
    /// document order.
    pub fn query_class_all(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.query_all(scope, |data| data.has_class(class))
    }

    /// Find the first node under `scope` matching a predicate.
    ///
    /// The scope node itself is a candidate, like `closest` combined with a
    /// descendant search is in DOM code.
    pub fn query_one(&self, scope: NodeId, predicate: impl Fn(&NodeData) -> bool) -> Option<NodeId> {
        self.walk_depth_first(scope)
            .into_iter()
            .find(|&id| self.get(id).is_some_and(&predicate))
    }

    /// Find all nodes under `scope` matching a predicate, in document order.
    pub fn query_all(&self, scope: NodeId, predicate: impl Fn(&NodeData) -> bool) -> Vec<NodeId> {
        self.walk_depth_first(scope)
            .into_iter()
            .filter(|&id| self.get(id).is_some_and(&predicate))
            .collect()
    }

    /// Walk up from `start` (inclusive) to the first node carrying the
    /// attribute, like `element.closest("[attr]")`.
    pub fn closest_attr(&self, start: NodeId, name: &str) -> Option<NodeId> {
        if !self.contains(start) {
            return None;
        }
        if self.has_attr(start, name) {
            return Some(start);
        }
        self.ancestors(start)
            .into_iter()
            .find(|&id| self.has_attr(id, name))
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use crate::dom::node::NodeData;
    use crate::dom::tree::Dom;

    /// Build a menu-shaped query tree:
    /// ```text
    ///   nav [data-menu]
    ///   ├── button [data-menu-open]
    ///   └── ul [data-menu-list]
    ///       ├── li [data-menu-item] .menu__item--current
    ///       │   └── a [data-menu-link]
    ///       └── li [data-menu-item]
    ///           └── a [data-menu-link]
    /// ```
    fn build_tree() -> Dom {
        let mut dom = Dom::new();
        let root = dom.insert(NodeData::new("nav").with_attr("data-menu", ""));
        let _open = dom.insert_child(root, NodeData::new("button").with_attr("data-menu-open", ""));
        let list = dom.insert_child(root, NodeData::new("ul").with_attr("data-menu-list", ""));
        let item1 = dom.insert_child(
            list,
            NodeData::new("li")
                .with_attr("data-menu-item", "")
                .with_class("menu__item--current"),
        );
        let _link1 = dom.insert_child(item1, NodeData::new("a").with_attr("data-menu-link", ""));
        let item2 = dom.insert_child(list, NodeData::new("li").with_attr("data-menu-item", ""));
        let _link2 = dom.insert_child(item2, NodeData::new("a").with_attr("data-menu-link", ""));
        dom
    }

    fn root_of(dom: &Dom) -> crate::dom::NodeId {
        dom.root().unwrap()
    }

    #[test]
    fn query_attr_one_document_order() {
        let dom = build_tree();
        let root = root_of(&dom);
        let open = dom.query_attr_one(root, "data-menu-open");
        assert!(open.is_some());
        assert_eq!(dom.get(open.unwrap()).unwrap().tag, "button");
    }

    #[test]
    fn query_attr_one_missing() {
        let dom = build_tree();
        let root = root_of(&dom);
        assert!(dom.query_attr_one(root, "data-menu-close").is_none());
    }

    #[test]
    fn query_attr_all_in_order() {
        let dom = build_tree();
        let root = root_of(&dom);
        let items = dom.query_attr_all(root, "data-menu-item");
        assert_eq!(items.len(), 2);
        // Document order: the current item comes first.
        assert!(dom.has_class(items[0], "menu__item--current"));
    }

    #[test]
    fn query_scoped_to_subtree() {
        let dom = build_tree();
        let root = root_of(&dom);
        let items = dom.query_attr_all(root, "data-menu-item");
        // Scoped to the first item, only its own link is found.
        let links = dom.query_attr_all(items[0], "data-menu-link");
        assert_eq!(links.len(), 1);
    }

    #[test]
    fn query_includes_scope_itself() {
        let dom = build_tree();
        let root = root_of(&dom);
        assert_eq!(dom.query_attr_one(root, "data-menu"), Some(root));
    }

    #[test]
    fn query_class_one_and_all() {
        let dom = build_tree();
        let root = root_of(&dom);
        let current = dom.query_class_one(root, "menu__item--current");
        assert!(current.is_some());
        assert_eq!(dom.query_class_all(root, "menu__item--current").len(), 1);
        assert!(dom.query_class_all(root, "nonexistent").is_empty());
    }

    #[test]
    fn closest_attr_walks_up() {
        let dom = build_tree();
        let root = root_of(&dom);
        let link = dom.query_attr_one(root, "data-menu-link").unwrap();
        let item = dom.closest_attr(link, "data-menu-item");
        assert!(item.is_some());
        assert_eq!(dom.get(item.unwrap()).unwrap().tag, "li");
    }

    #[test]
    fn closest_attr_self_match() {
        let dom = build_tree();
        let root = root_of(&dom);
        let item = dom.query_attr_one(root, "data-menu-item").unwrap();
        assert_eq!(dom.closest_attr(item, "data-menu-item"), Some(item));
    }

    #[test]
    fn closest_attr_no_match() {
        let dom = build_tree();
        let root = root_of(&dom);
        let link = dom.query_attr_one(root, "data-menu-link").unwrap();
        assert!(dom.closest_attr(link, "data-menu-mega").is_none());
    }

    #[test]
    fn query_on_stale_scope() {
        let mut dom = Dom::new();
        let id = dom.insert(NodeData::new("div"));
        dom.remove(id);
        assert!(dom.query_attr_one(id, "x").is_none());
        assert!(dom.query_all(id, |_| true).is_empty());
        assert!(dom.closest_attr(id, "x").is_none());
    }
}
