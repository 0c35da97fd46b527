//! Client-side free-text filtering over already-loaded lists.

/// A record that can be matched against a search query.
pub trait Searchable {
    /// `needle` is already lower-cased and non-empty.
    fn matches(&self, needle: &str) -> bool;
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Items matching `query` by case-insensitive substring, in list order.
/// An empty query keeps everything.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VendorMaterial;

    fn names<'a>(items: Vec<&'a VendorMaterial>) -> Vec<&'a str> {
        items.into_iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn matches_material_names_case_insensitively() {
        let materials = vec![
            VendorMaterial::new(1, "Cement", 1, 0.0, 1),
            VendorMaterial::new(2, "Mattress", 1, 0.0, 1),
            VendorMaterial::new(3, "Steel", 2, 0.0, 1),
        ];

        assert_eq!(names(filter(&materials, "mat")), vec!["Mattress"]);
        assert_eq!(names(filter(&materials, "MAT")), vec!["Mattress"]);
        assert_eq!(names(filter(&materials, "e")), vec!["Cement", "Mattress", "Steel"]);
        assert_eq!(names(filter(&materials, "")).len(), 3);
        assert!(filter(&materials, "brick").is_empty());
    }
}
