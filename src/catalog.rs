//! Assessment categories shown on the Categories page.

use chrono::NaiveDate;

use crate::theme::parse_rgb;

pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub assessments: u32,
    pub date_created: NaiveDate,
    pub color: String,
}

/// Draft for the "New Category" and edit dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub color: String,
}

impl Default for NewCategory {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            color: DEFAULT_CATEGORY_COLOR.to_string(),
        }
    }
}

impl NewCategory {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            description: category.description.clone(),
            color: category.color.clone(),
        }
    }

    fn color_or_default(&self) -> String {
        if parse_rgb(&self.color).is_some() {
            self.color.trim().to_string()
        } else {
            DEFAULT_CATEGORY_COLOR.to_string()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryList {
    items: Vec<Category>,
}

impl CategoryList {
    pub fn sample() -> Self {
        let rows = [
            (1, "Cybersecurity", 45, (2024, 1, 15), "#3B82F6"),
            (2, "Programming", 78, (2024, 1, 12), "#10B981"),
            (3, "Project Management", 32, (2024, 1, 10), "#F59E0B"),
            (4, "Data Science", 23, (2024, 1, 8), "#EF4444"),
            (5, "Digital Marketing", 19, (2024, 1, 5), "#8B5CF6"),
        ];
        let items = rows
            .into_iter()
            .filter_map(|(id, name, assessments, (y, m, d), color)| {
                Some(Category {
                    id,
                    name: name.to_string(),
                    description: String::new(),
                    assessments,
                    date_created: NaiveDate::from_ymd_opt(y, m, d)?,
                    color: color.to_string(),
                })
            })
            .collect();
        Self { items }
    }

    pub fn items(&self) -> &[Category] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Category> {
        self.items.iter().find(|c| c.id == id)
    }

    /// Appends a category built from the draft. A blank name is ignored and
    /// returns `None`. Ids continue from the largest one in the list, so a
    /// deletion never causes a collision.
    pub fn add(&mut self, draft: &NewCategory, today: NaiveDate) -> Option<u32> {
        let name = draft.name.trim();
        if name.is_empty() {
            log::debug!("Ignoring category with a blank name");
            return None;
        }
        let id = self.items.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        self.items.push(Category {
            id,
            name: name.to_string(),
            description: draft.description.trim().to_string(),
            assessments: 0,
            date_created: today,
            color: draft.color_or_default(),
        });
        log::info!("Created category {id} '{name}'");
        Some(id)
    }

    /// Rewrites name, description and color. A blank name leaves the entry
    /// unchanged.
    pub fn update(&mut self, id: u32, draft: &NewCategory) -> bool {
        let name = draft.name.trim();
        if name.is_empty() {
            return false;
        }
        let color = draft.color_or_default();
        match self.items.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.name = name.to_string();
                category.description = draft.description.trim().to_string();
                category.color = color;
                true
            }
            None => false,
        }
    }

    /// Removes the entry with this id, keeping the rest in order.
    pub fn delete(&mut self, id: u32) -> Option<Category> {
        let index = self.items.iter().position(|c| c.id == id)?;
        let removed = self.items.remove(index);
        log::info!("Deleted category {} '{}'", removed.id, removed.name);
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn draft(name: &str) -> NewCategory {
        NewCategory {
            name: name.to_string(),
            ..NewCategory::default()
        }
    }

    #[test]
    fn test_sample_rows() {
        let list = CategoryList::sample();
        assert_eq!(list.len(), 5);
        assert_eq!(list.items()[1].name, "Programming");
        assert_eq!(list.items()[1].assessments, 78);
    }

    #[test]
    fn test_delete_keeps_order_of_the_rest() {
        let mut list = CategoryList::sample();
        let before: Vec<Category> = list.items().to_vec();

        let removed = list.delete(3).unwrap();
        assert_eq!(removed.name, "Project Management");

        let expected: Vec<Category> = before.into_iter().filter(|c| c.id != 3).collect();
        assert_eq!(list.items(), expected.as_slice());
        assert!(list.delete(3).is_none());
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_new_ids_never_collide_after_delete() {
        let mut list = CategoryList::sample();
        list.delete(2);
        let id = list.add(&draft("Networking"), today()).unwrap();
        assert_eq!(id, 6);

        let mut ids: Vec<u32> = list.items().iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), list.len());
    }

    #[test]
    fn test_add_sets_defaults() {
        let mut list = CategoryList::default();
        let id = list.add(&draft("  Cloud "), today()).unwrap();
        let category = list.get(id).unwrap();
        assert_eq!(id, 1);
        assert_eq!(category.name, "Cloud");
        assert_eq!(category.assessments, 0);
        assert_eq!(category.date_created, today());
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
    }

    #[test]
    fn test_blank_name_is_ignored() {
        let mut list = CategoryList::sample();
        assert_eq!(list.add(&draft("   "), today()), None);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let mut list = CategoryList::default();
        let mut d = draft("Art");
        d.color = "purple".to_string();
        let id = list.add(&d, today()).unwrap();
        assert_eq!(list.get(id).unwrap().color, DEFAULT_CATEGORY_COLOR);
    }

    #[test]
    fn test_update_in_place() {
        let mut list = CategoryList::sample();
        let mut d = NewCategory::from_category(list.get(4).unwrap());
        d.name = "ML & Data".to_string();
        d.color = "#000000".to_string();
        assert!(list.update(4, &d));

        let category = list.get(4).unwrap();
        assert_eq!(category.name, "ML & Data");
        assert_eq!(category.color, "#000000");
        assert_eq!(category.assessments, 23);
        assert!(!list.update(42, &d));
        assert!(!list.update(4, &draft("")));
    }
}
