use super::error::StoreError;
use super::traits::ObjectStore;
use crate::core::models::category::{Category, Container};
use std::collections::HashMap;

/// An ordered, in-memory container store.
///
/// Containers keep their insertion order; replacing a container keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    containers: Vec<Container>,
    name_map: HashMap<String, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_containers(containers: Vec<Container>) -> Self {
        let mut store = Self::new();
        for container in containers {
            store.insert(container);
        }
        store
    }

    /// Adds a container, replacing any existing container with the same name.
    pub fn insert(&mut self, container: Container) {
        match self.name_map.get(&container.name) {
            Some(&index) => self.containers[index] = container,
            None => {
                self.name_map
                    .insert(container.name.clone(), self.containers.len());
                self.containers.push(container);
            }
        }
    }

    /// Replaces or adds one category, creating the container if needed.
    pub fn set_object(&mut self, container_name: &str, category: Category) {
        match self.name_map.get(container_name) {
            Some(&index) => self.containers[index].set_category(category),
            None => self.insert(Container::new(container_name).with_category(category)),
        }
    }

    pub fn container(&self, name: &str) -> Option<&Container> {
        self.name_map.get(name).map(|&index| &self.containers[index])
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    pub fn into_containers(self) -> Vec<Container> {
        self.containers
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

impl ObjectStore for MemoryStore {
    fn container_index(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.containers.iter().map(|c| c.name.clone()).collect())
    }

    fn fetch_object(
        &self,
        container_name: &str,
        object_name: &str,
    ) -> Result<Option<Category>, StoreError> {
        Ok(self
            .container(container_name)
            .and_then(|c| c.category(object_name))
            .cloned())
    }
}
