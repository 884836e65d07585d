use crate::domain::element::Element;

/// Resolves element ids for a layout.
pub trait ElementLookup {
    fn element(&self, id: &str) -> Option<&Element>;
}

/// Owning, insertion-ordered map of elements keyed by id.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    elements: Vec<Element>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `element`, replacing any element registered under the same id.
    pub fn insert(&mut self, element: Element) -> &mut Element {
        let index = match self.position(element.id()) {
            Some(index) => {
                tracing::debug!("Replacing element \"{}\"", element.id());
                self.elements[index] = element;
                index
            }
            None => {
                self.elements.push(element);
                self.elements.len() - 1
            }
        };
        &mut self.elements[index]
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id() == id)
    }

    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.position(id).map(|index| self.elements.remove(index))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.elements.iter().position(|element| element.id() == id)
    }
}

impl ElementLookup for ElementRegistry {
    fn element(&self, id: &str) -> Option<&Element> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::element::GENERIC;

    #[test]
    fn test_insert_keeps_order() {
        let mut registry = ElementRegistry::new();
        registry.insert(Element::new("a", GENERIC));
        registry.insert(Element::new("b", GENERIC));

        let ids: Vec<&str> = registry.iter().map(Element::id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_insert_replaces_same_id_in_place() {
        let mut registry = ElementRegistry::new();
        registry.insert(Element::new("a", GENERIC));
        registry.insert(Element::new("b", GENERIC));
        registry
            .insert(Element::new("a", GENERIC))
            .config_mut()
            .set("replaced", true);

        let ids: Vec<&str> = registry.iter().map(Element::id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(registry
            .get("a")
            .is_some_and(|element| element.config().get_bool("replaced")));
    }

    #[test]
    fn test_remove() {
        let mut registry = ElementRegistry::new();
        registry.insert(Element::new("a", GENERIC));

        assert!(registry.remove("a").is_some());
        assert!(registry.remove("a").is_none());
        assert!(registry.is_empty());
        assert!(!registry.contains("a"));
    }
}
