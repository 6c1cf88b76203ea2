//! Search filter construction for catalog listings.

use mongodb::bson::{doc, Bson, Document};

/// Fields a search term is matched against.
pub const SEARCH_FIELDS: [&str; 3] = ["title", "category", "brand"];

/// Filter for the product listing.
///
/// A term matches any record whose `title`, `category` or `brand` contains it
/// as a case-insensitive substring. The term is always literal; pattern
/// metacharacters are escaped before reaching the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    term: Option<String>,
}

impl ProductFilter {
    /// An absent or empty term matches every record.
    pub fn from_term(term: Option<&str>) -> Self {
        Self {
            term: term.filter(|t| !t.is_empty()).map(str::to_string),
        }
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// Renders the MongoDB filter document.
    pub fn to_document(&self) -> Document {
        let Some(term) = &self.term else {
            return doc! {};
        };

        let pattern = regex::escape(term);
        let clauses: Vec<Bson> = SEARCH_FIELDS
            .iter()
            .map(|field| {
                let mut clause = Document::new();
                clause.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
                Bson::Document(clause)
            })
            .collect();

        doc! { "$or": clauses }
    }

    /// Evaluates the filter against a raw record in memory.
    pub fn matches(&self, record: &Document) -> bool {
        let Some(term) = &self.term else {
            return true;
        };

        let needle = term.to_lowercase();
        SEARCH_FIELDS.iter().any(|field| {
            record
                .get_str(field)
                .map(|value| value.to_lowercase().contains(&needle))
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_term_matches_everything() {
        let filter = ProductFilter::from_term(None);
        assert!(filter.to_document().is_empty());
        assert!(filter.matches(&doc! { "title": "Anything" }));
        assert!(filter.matches(&doc! {}));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let filter = ProductFilter::from_term(Some(""));
        assert_eq!(filter, ProductFilter::default());
        assert!(filter.to_document().is_empty());
    }

    #[test]
    fn test_term_renders_or_over_three_fields() {
        let filter = ProductFilter::from_term(Some("electro"));
        let expected = doc! {
            "$or": [
                { "title": { "$regex": "electro", "$options": "i" } },
                { "category": { "$regex": "electro", "$options": "i" } },
                { "brand": { "$regex": "electro", "$options": "i" } },
            ]
        };
        assert_eq!(filter.to_document(), expected);
    }

    #[test]
    fn test_metacharacters_are_escaped() {
        let filter = ProductFilter::from_term(Some("a.b*(c)"));
        let document = filter.to_document();
        let clauses = document.get_array("$or").unwrap();
        let first = clauses[0].as_document().unwrap();
        let regex = first
            .get_document("title")
            .unwrap()
            .get_str("$regex")
            .unwrap();
        assert_eq!(regex, r"a\.b\*\(c\)");
    }

    #[test]
    fn test_matches_is_case_insensitive_across_fields() {
        let filter = ProductFilter::from_term(Some("electro"));
        assert!(filter.matches(&doc! { "title": "Headphones", "category": "Electronics" }));
        assert!(filter.matches(&doc! { "title": "ELECTROLYTE DRINK" }));
        assert!(filter.matches(&doc! { "title": "Cable", "brand": "ElectroMax" }));
        assert!(!filter.matches(&doc! { "title": "Backpack", "category": "Accessories" }));
    }

    #[test]
    fn test_matches_treats_term_literally() {
        let filter = ProductFilter::from_term(Some("t.e"));
        assert!(!filter.matches(&doc! { "title": "Classic Tee" }));
        assert!(filter.matches(&doc! { "title": "Model t.e" }));
    }
}
