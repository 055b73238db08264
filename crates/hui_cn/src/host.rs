//! Mount host boundary
//!
//! Overlay components (the drawer) render into a container outside the
//! normal tree. Creating and removing those containers is the host's job;
//! components only ask for one through [`MountHost`].

use hui_core::Element;
use slotmap::{new_key_type, SlotMap};
use tracing::debug;

new_key_type! {
    /// Handle to a mounted overlay container
    pub struct ContainerId;
}

/// The rendering layer as seen by overlay components
pub trait MountHost {
    /// Create an empty container carrying `class`
    fn mount_container(&mut self, class: &str) -> ContainerId;

    /// Replace the contents of a mounted container
    ///
    /// Returns `false` if `id` is not mounted.
    fn render_into(&mut self, id: ContainerId, children: Vec<Element>) -> bool;

    /// Remove a container; returns `false` if it was already gone
    fn unmount_container(&mut self, id: ContainerId) -> bool;

    /// Number of mounted containers
    fn container_count(&self) -> usize;
}

/// In-memory host: containers are plain [`Element`]s
#[derive(Debug, Default)]
pub struct MemoryHost {
    containers: SlotMap<ContainerId, Element>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ContainerId) -> Option<&Element> {
        self.containers.get(id)
    }

    pub fn contains(&self, id: ContainerId) -> bool {
        self.containers.contains_key(id)
    }

    pub fn containers(&self) -> impl Iterator<Item = (ContainerId, &Element)> {
        self.containers.iter()
    }
}

impl MountHost for MemoryHost {
    fn mount_container(&mut self, class: &str) -> ContainerId {
        let id = self.containers.insert(Element::new("div").class(class));
        debug!(?id, "mounted container");
        id
    }

    fn render_into(&mut self, id: ContainerId, children: Vec<Element>) -> bool {
        match self.containers.get_mut(id) {
            Some(container) => {
                container.children = children.into_iter().map(Into::into).collect();
                true
            }
            None => false,
        }
    }

    fn unmount_container(&mut self, id: ContainerId) -> bool {
        let removed = self.containers.remove(id).is_some();
        if removed {
            debug!(?id, "unmounted container");
        }
        removed
    }

    fn container_count(&self) -> usize {
        self.containers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_render_unmount() {
        let mut host = MemoryHost::new();
        let id = host.mount_container("overlay");
        assert_eq!(host.container_count(), 1);

        assert!(host.render_into(id, vec![Element::new("p")]));
        assert_eq!(host.get(id).map(|c| c.children.len()), Some(1));

        assert!(host.unmount_container(id));
        assert!(!host.unmount_container(id));
        assert!(!host.render_into(id, Vec::new()));
        assert_eq!(host.container_count(), 0);
    }
}
