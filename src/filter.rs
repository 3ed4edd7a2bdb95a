use crate::models::{Classroom, Course};

/// Entities that can be matched by the list search box.
pub trait Searchable {
    fn search_fields(&self) -> Vec<String>;
}

impl Searchable for Classroom {
    fn search_fields(&self) -> Vec<String> {
        vec![self.name.clone(), self.abbreviation.clone()]
    }
}

impl Searchable for Course {
    fn search_fields(&self) -> Vec<String> {
        let mut fields = vec![self.name.clone()];
        fields.extend(self.description.clone());
        fields.extend(self.professor_name());
        fields
    }
}

/// Case-insensitive substring match over every searchable field. An empty term keeps
/// the whole collection in its original order.
pub fn filter_by_term<'a, T: Searchable>(items: &'a [T], term: &str) -> Vec<&'a T> {
    if term.is_empty() {
        return items.iter().collect();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
