use crate::models::post::BlogPost;
use crate::models::project::Project;

/// Something a list page can narrow with a search box and a category pill row.
pub trait Filterable {
    /// Fields the free-text query is matched against.
    fn text_fields(&self) -> Vec<&str>;

    /// Whether the item belongs to `category`. Each catalog decides its own
    /// case policy.
    fn in_category(&self, category: &str) -> bool;
}

impl Filterable for BlogPost {
    fn text_fields(&self) -> Vec<&str> {
        vec![self.title, self.excerpt]
    }

    fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

impl Filterable for Project {
    fn text_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title, self.description];
        fields.extend(self.tags.iter().copied());
        fields
    }

    fn in_category(&self, category: &str) -> bool {
        category.eq_ignore_ascii_case("all")
            || self.tags.iter().any(|t| t.to_lowercase() == category.to_lowercase())
    }
}

/// Free-text query plus optional category. Empty strings count as absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListQuery<'a> {
    pub query: Option<&'a str>,
    pub category: Option<&'a str>,
}

impl<'a> ListQuery<'a> {
    pub fn new(query: Option<&'a str>, category: Option<&'a str>) -> Self {
        ListQuery {
            query: query.map(str::trim).filter(|q| !q.is_empty()),
            category: category.filter(|c| !c.is_empty()),
        }
    }
}

/// Items matching both the query and the category, in catalog order.
pub fn filter<'c, T: Filterable>(catalog: &'c [T], list_query: &ListQuery) -> Vec<&'c T> {
    let needle = list_query.query.map(str::to_lowercase);
    catalog
        .iter()
        .filter(|item| match &needle {
            Some(n) => item.text_fields().iter().any(|f| f.to_lowercase().contains(n.as_str())),
            None => true,
        })
        .filter(|item| match list_query.category {
            Some(c) => item.in_category(c),
            None => true,
        })
        .collect()
}

/// Distinct post categories in first-appearance order.
pub fn unique_categories(posts: &[BlogPost]) -> Vec<&'static str> {
    let mut seen: Vec<&'static str> = Vec::new();
    for post in posts {
        if !seen.contains(&post.category) {
            seen.push(post.category);
        }
    }
    seen
}

/// Distinct project tags, lower-cased, in first-appearance order.
pub fn unique_tags(projects: &[Project]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        let lower = tag.to_lowercase();
        if !seen.contains(&lower) {
            seen.push(lower);
        }
    }
    seen
}
