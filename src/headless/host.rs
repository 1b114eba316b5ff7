use std::cell::Cell;
use std::rc::Rc;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::core::AnimationRequest;
use crate::error::{MarqueeError, MarqueeResult};
use crate::platform::MarqueeHost;

use super::KeyframeAnimation;

/// Stable handle to a node in a [`HeadlessHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

#[derive(Debug, Clone)]
struct HeadlessNode {
    label: String,
    width: Option<f64>,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 2]>,
}

/// In-memory node tree with explicit widths.
///
/// Layout is whatever the caller says it is: `set_width` plays the role of a
/// browser reflow, after which the host should forward a resize notification
/// to the controller.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    nodes: IndexMap<NodeId, HeadlessNode>,
    next_id: u32,
    live_animations: Rc<Cell<usize>>,
    started: Vec<(NodeId, AnimationRequest)>,
}

impl HeadlessHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a detached node. `width` of `None` means "not laid out".
    pub fn create_node(&mut self, label: impl Into<String>, width: Option<f64>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(
            id,
            HeadlessNode {
                label: label.into(),
                width,
                parent: None,
                children: SmallVec::new(),
            },
        );
        id
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> MarqueeResult<()> {
        if parent == child {
            return Err(MarqueeError::Host("node cannot contain itself".to_owned()));
        }
        self.node(parent)?;
        let previous = self.node(child)?.parent;
        if let Some(previous) = previous {
            self.unlink(previous, child);
        }
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    pub fn set_width(&mut self, node: NodeId, width: Option<f64>) -> MarqueeResult<()> {
        self.node_mut(node)?.width = width;
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(&node)
            .map(|entry| entry.children.as_slice())
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(&node).and_then(|entry| entry.parent)
    }

    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(&node).map(|entry| entry.label.as_str())
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Animations created through this host and not yet cancelled.
    #[must_use]
    pub fn live_animation_count(&self) -> usize {
        self.live_animations.get()
    }

    /// Every animation request issued so far, oldest first.
    #[must_use]
    pub fn started_animations(&self) -> &[(NodeId, AnimationRequest)] {
        &self.started
    }

    fn node(&self, id: NodeId) -> MarqueeResult<&HeadlessNode> {
        self.nodes
            .get(&id)
            .ok_or_else(|| MarqueeError::Host(format!("unknown node {id:?}")))
    }

    fn node_mut(&mut self, id: NodeId) -> MarqueeResult<&mut HeadlessNode> {
        self.nodes
            .get_mut(&id)
            .ok_or_else(|| MarqueeError::Host(format!("unknown node {id:?}")))
    }

    fn unlink(&mut self, parent: NodeId, child: NodeId) {
        if let Some(entry) = self.nodes.get_mut(&parent) {
            entry.children.retain(|id| *id != child);
        }
        if let Some(entry) = self.nodes.get_mut(&child) {
            entry.parent = None;
        }
    }

    fn deep_clone(&mut self, source: NodeId) -> MarqueeResult<NodeId> {
        let (label, width, children) = {
            let entry = self.node(source)?;
            (entry.label.clone(), entry.width, entry.children.clone())
        };
        let copy = self.create_node(label, width);
        for child in children {
            let child_copy = self.deep_clone(child)?;
            self.node_mut(copy)?.children.push(child_copy);
            self.node_mut(child_copy)?.parent = Some(copy);
        }
        Ok(copy)
    }

    fn drop_subtree(&mut self, root: NodeId) {
        if let Some(entry) = self.nodes.shift_remove(&root) {
            for child in entry.children {
                self.drop_subtree(child);
            }
        }
    }
}

impl MarqueeHost for HeadlessHost {
    type Node = NodeId;
    type Animation = KeyframeAnimation;

    fn measure_width(&self, node: &NodeId) -> Option<f64> {
        self.nodes.get(node).and_then(|entry| entry.width)
    }

    fn clone_after(&mut self, node: &NodeId) -> MarqueeResult<NodeId> {
        let parent = self
            .node(*node)?
            .parent
            .ok_or_else(|| MarqueeError::Host("cannot clone a detached node".to_owned()))?;
        let copy = self.deep_clone(*node)?;
        let siblings = &mut self.node_mut(parent)?.children;
        let index = siblings
            .iter()
            .position(|id| id == node)
            .map_or(siblings.len(), |position| position + 1);
        siblings.insert(index, copy);
        self.node_mut(copy)?.parent = Some(parent);
        Ok(copy)
    }

    fn remove(&mut self, node: &NodeId) -> bool {
        let Some(parent) = self.parent(*node) else {
            return false;
        };
        self.unlink(parent, *node);
        self.drop_subtree(*node);
        true
    }

    fn animate(&mut self, target: &NodeId, request: AnimationRequest) -> KeyframeAnimation {
        self.started.push((*target, request));
        KeyframeAnimation::new(request).with_live_counter(Rc::clone(&self.live_animations))
    }
}
