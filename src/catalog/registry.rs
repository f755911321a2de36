use crate::button::Button;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors raised while registering stories.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Story group name must not be empty")]
    EmptyGroupName,

    #[error("Story label in group '{group}' must not be empty")]
    EmptyLabel { group: String },

    #[error("Story '{label}' is already registered in group '{group}'")]
    DuplicateStory { group: String, label: String },
}

/// Zero-argument factory producing a rendered example.
pub type StoryFactory = Box<dyn Fn() -> Button + Send + Sync>;

/// A single named example render.
pub struct Story {
    label: String,
    factory: StoryFactory,
}

impl Story {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn render(&self) -> Button {
        (self.factory)()
    }
}

impl fmt::Debug for Story {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Story").field("label", &self.label).finish()
    }
}

/// Stories sharing a group name, in registration order.
#[derive(Debug)]
pub struct StoryGroup {
    name: String,
    stories: Vec<Story>,
}

impl StoryGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn story(&self, label: &str) -> Option<&Story> {
        self.stories.iter().find(|story| story.label == label)
    }
}

/// A story together with the group it was registered under.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry<'a> {
    pub group: &'a StoryGroup,
    pub story: &'a Story,
}

impl CatalogEntry<'_> {
    /// `Group/Label` path used by listings.
    pub fn path(&self) -> String {
        format!("{}/{}", self.group.name, self.story.label)
    }
}

/// Serializable listing of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogIndex {
    pub groups: Vec<GroupIndex>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupIndex {
    pub name: String,
    pub stories: Vec<String>,
}

/// Caller-owned story registry.
#[derive(Debug, Default)]
pub struct Catalog {
    groups: Vec<StoryGroup>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the group `name`, creating it on first use.
    pub fn stories_of(&mut self, name: &str) -> Result<StoriesOf<'_>, CatalogError> {
        if name.trim().is_empty() {
            return Err(CatalogError::EmptyGroupName);
        }

        let group = match self.groups.iter().position(|group| group.name == name) {
            Some(index) => index,
            None => {
                self.groups.push(StoryGroup {
                    name: name.to_string(),
                    stories: Vec::new(),
                });
                self.groups.len() - 1
            }
        };

        Ok(StoriesOf {
            catalog: self,
            group,
        })
    }

    pub fn groups(&self) -> &[StoryGroup] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&StoryGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    pub fn find(&self, group: &str, label: &str) -> Option<&Story> {
        self.group(group)?.story(label)
    }

    /// All stories, flattened in registration order.
    pub fn entries(&self) -> impl Iterator<Item = CatalogEntry<'_>> {
        self.groups.iter().flat_map(|group| {
            group
                .stories
                .iter()
                .map(move |story| CatalogEntry { group, story })
        })
    }

    pub fn entry(&self, index: usize) -> Option<CatalogEntry<'_>> {
        self.entries().nth(index)
    }

    /// Position of the first story with `label` in [`Catalog::entries`] order.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.entries().position(|entry| entry.story.label == label)
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.stories.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index(&self) -> CatalogIndex {
        CatalogIndex {
            groups: self
                .groups
                .iter()
                .map(|group| GroupIndex {
                    name: group.name.clone(),
                    stories: group.stories.iter().map(|s| s.label.clone()).collect(),
                })
                .collect(),
        }
    }
}

/// Chained registration into one group.
pub struct StoriesOf<'a> {
    catalog: &'a mut Catalog,
    group: usize,
}

impl<'a> StoriesOf<'a> {
    pub fn add<F>(mut self, label: &str, factory: F) -> Result<Self, CatalogError>
    where
        F: Fn() -> Button + Send + Sync + 'static,
    {
        let group = &mut self.catalog.groups[self.group];
        if label.trim().is_empty() {
            return Err(CatalogError::EmptyLabel {
                group: group.name.clone(),
            });
        }
        if group.story(label).is_some() {
            return Err(CatalogError::DuplicateStory {
                group: group.name.clone(),
                label: label.to_string(),
            });
        }

        tracing::debug!(group = %group.name, story = label, "Registered story");
        group.stories.push(Story {
            label: label.to_string(),
            factory: Box::new(factory),
        });
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonProps;

    fn plain() -> Button {
        Button::new(ButtonProps::new("x"))
    }

    #[test]
    fn stories_of_reopens_existing_group() {
        let mut catalog = Catalog::new();
        catalog.stories_of("A").unwrap().add("one", plain).unwrap();
        catalog.stories_of("B").unwrap().add("two", plain).unwrap();
        catalog.stories_of("A").unwrap().add("three", plain).unwrap();

        assert_eq!(catalog.groups().len(), 2);
        let labels: Vec<_> = catalog.entries().map(|e| e.path()).collect();
        assert_eq!(labels, vec!["A/one", "A/three", "B/two"]);
    }

    #[test]
    fn duplicate_label_is_rejected() {
        let mut catalog = Catalog::new();
        let err = catalog
            .stories_of("A")
            .unwrap()
            .add("one", plain)
            .unwrap()
            .add("one", plain)
            .err();

        assert_eq!(
            err,
            Some(CatalogError::DuplicateStory {
                group: "A".to_string(),
                label: "one".to_string(),
            })
        );
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn same_label_allowed_across_groups() {
        let mut catalog = Catalog::new();
        catalog.stories_of("A").unwrap().add("one", plain).unwrap();
        catalog.stories_of("B").unwrap().add("one", plain).unwrap();
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn empty_names_are_rejected() {
        let mut catalog = Catalog::new();
        assert_eq!(
            catalog.stories_of("  ").err(),
            Some(CatalogError::EmptyGroupName)
        );
        let err = catalog.stories_of("A").unwrap().add("", plain).err();
        assert_eq!(
            err,
            Some(CatalogError::EmptyLabel {
                group: "A".to_string()
            })
        );
    }

    #[test]
    fn find_and_position() {
        let mut catalog = Catalog::new();
        catalog
            .stories_of("A")
            .unwrap()
            .add("one", plain)
            .unwrap()
            .add("two", plain)
            .unwrap();

        assert!(catalog.find("A", "two").is_some());
        assert!(catalog.find("A", "three").is_none());
        assert!(catalog.find("B", "one").is_none());
        assert_eq!(catalog.position("two"), Some(1));
        assert_eq!(catalog.position("nope"), None);
        assert!(catalog.entry(2).is_none());
    }

    #[test]
    fn empty_catalog() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.index(), CatalogIndex { groups: vec![] });
    }
}
