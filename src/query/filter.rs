use std::collections::BTreeMap;
use std::fmt;

/// Sort direction, normalized from free-form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only a case-insensitive `DESC` sorts descending.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("DESC") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// Field name to value mapping plus a requested sort.
///
/// Empty values count as absent, so a blank query parameter never becomes a
/// predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    fields: BTreeMap<String, String>,
    sort_by: Option<String>,
    sort_order: Option<String>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter on a single field.
    pub fn eq(field: &str, value: impl Into<String>) -> Self {
        Self::new().with(field, Some(value.into()))
    }

    pub fn with(mut self, field: &str, value: Option<String>) -> Self {
        if let Some(value) = value {
            self.fields.insert(field.to_string(), value);
        }
        self
    }

    pub fn sort_by(mut self, field: Option<String>) -> Self {
        self.sort_by = field;
        self
    }

    pub fn sort_order(mut self, order: Option<String>) -> Self {
        self.sort_order = order;
        self
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    pub fn requested_sort_by(&self) -> Option<&str> {
        self.sort_by.as_deref()
    }

    pub fn requested_sort_order(&self) -> SortOrder {
        SortOrder::parse(self.sort_order.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!(SortOrder::parse(Some("DESC")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("desc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("DeSc")), SortOrder::Desc);
        assert_eq!(SortOrder::parse(Some("asc")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("descending")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(Some("")), SortOrder::Asc);
        assert_eq!(SortOrder::parse(None), SortOrder::Asc);
    }

    #[test]
    fn test_blank_values_are_absent() {
        let filter = RecordFilter::new()
            .with("city", Some(String::new()))
            .with("store_name", None)
            .with("producer", Some("Value".to_string()));

        assert_eq!(filter.value("city"), None);
        assert_eq!(filter.value("store_name"), None);
        assert_eq!(filter.value("producer"), Some("Value"));
    }
}
