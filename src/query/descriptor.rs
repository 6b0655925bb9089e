use sea_orm::EntityTrait;

use super::filter::SortOrder;

/// How a filter value is compared against its column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStyle {
    /// `column = value`
    Exact,
    /// `column LIKE '%value%'`, value matched as a literal substring
    Contains,
}

/// Type a filter value is bound as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Integer,
    Decimal,
    /// RFC 3339 instant, compared as a UTC timestamp
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterField {
    pub name: &'static str,
    pub style: MatchStyle,
    pub kind: ValueKind,
}

impl FilterField {
    pub const fn exact(name: &'static str) -> Self {
        Self {
            name,
            style: MatchStyle::Exact,
            kind: ValueKind::Text,
        }
    }

    pub const fn contains(name: &'static str) -> Self {
        Self {
            name,
            style: MatchStyle::Contains,
            kind: ValueKind::Text,
        }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self {
            name,
            style: MatchStyle::Exact,
            kind: ValueKind::Integer,
        }
    }

    pub const fn decimal(name: &'static str) -> Self {
        Self {
            name,
            style: MatchStyle::Exact,
            kind: ValueKind::Decimal,
        }
    }

    pub const fn timestamp(name: &'static str) -> Self {
        Self {
            name,
            style: MatchStyle::Exact,
            kind: ValueKind::Timestamp,
        }
    }
}

/// Static table metadata that drives the generic repository.
#[derive(Debug)]
pub struct EntityDescriptor {
    pub table: &'static str,
    pub primary_key: &'static str,
    /// Foreign key to the owning root entity, `None` for roots
    pub parent_key: Option<&'static str>,
    /// Columns accepted as `sortBy`
    pub sort_fields: &'static [&'static str],
    /// Columns accepted as filter keys, in predicate order
    pub filter_fields: &'static [FilterField],
    /// Ordering used when listing the children of one parent
    pub child_order: Option<(&'static str, SortOrder)>,
}

impl EntityDescriptor {
    /// `SELECT` template; predicates are appended after the `WHERE 1=1` marker.
    pub fn base_query(&self) -> String {
        format!("SELECT * FROM {} WHERE 1=1", self.table)
    }

    /// Allow-listed sort column, falling back to the primary key.
    pub fn resolve_sort_field(&self, requested: Option<&str>) -> &'static str {
        requested
            .and_then(|field| self.sort_fields.iter().find(|allowed| **allowed == field))
            .copied()
            .unwrap_or(self.primary_key)
    }

    pub fn filter_field(&self, name: &str) -> Option<&FilterField> {
        self.filter_fields.iter().find(|field| field.name == name)
    }

    pub fn child_ordering(&self) -> (&'static str, SortOrder) {
        self.child_order.unwrap_or((self.primary_key, SortOrder::Asc))
    }
}

/// A sea-orm entity that the catalog repository can serve.
pub trait CatalogEntity: EntityTrait {
    const DESCRIPTOR: &'static EntityDescriptor;

    fn record_id(model: &Self::Model) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDGETS: EntityDescriptor = EntityDescriptor {
        table: "widgets",
        primary_key: "widget_id",
        parent_key: Some("owner_id"),
        sort_fields: &["widget_id", "name", "created_at"],
        filter_fields: &[FilterField::integer("owner_id"), FilterField::contains("name")],
        child_order: None,
    };

    #[test]
    fn test_allow_listed_sort_field_is_kept() {
        assert_eq!(WIDGETS.resolve_sort_field(Some("name")), "name");
        assert_eq!(WIDGETS.resolve_sort_field(Some("created_at")), "created_at");
    }

    #[test]
    fn test_unknown_sort_field_falls_back_to_primary_key() {
        assert_eq!(WIDGETS.resolve_sort_field(None), "widget_id");
        assert_eq!(WIDGETS.resolve_sort_field(Some("NAME")), "widget_id");
        assert_eq!(
            WIDGETS.resolve_sort_field(Some("name; DROP TABLE widgets")),
            "widget_id"
        );
    }

    #[test]
    fn test_child_ordering_defaults_to_primary_key() {
        assert_eq!(WIDGETS.child_ordering(), ("widget_id", SortOrder::Asc));
        assert_eq!(WIDGETS.base_query(), "SELECT * FROM widgets WHERE 1=1");
        assert_eq!(
            WIDGETS.filter_field("name").map(|f| f.style),
            Some(MatchStyle::Contains)
        );
        assert!(WIDGETS.filter_field("secret").is_none());
    }
}
