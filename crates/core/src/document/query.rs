use super::FieldValue;

/// Sort direction for an order-by clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// An equality filter on a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub value: FieldValue,
}

/// A collection query: equality filters, a single order-by, a result limit.
///
/// This mirrors what the external store supports; anything richer has to be
/// done in process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order_by: Option<(String, Direction)>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality filter.
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.filters.push(Filter {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Sets the order-by clause, replacing any previous one.
    pub fn order_by(mut self, field: impl Into<String>, direction: Direction) -> Self {
        self.order_by = Some((field.into(), direction));
        self
    }

    /// Caps the number of returned documents.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns true when this query needs a composite index: an equality
    /// filter combined with an order-by on a different field.
    pub fn needs_composite_index(&self) -> bool {
        match &self.order_by {
            Some((order_field, _)) => self.filters.iter().any(|f| &f.field != order_field),
            None => false,
        }
    }

    /// Human-readable description used in missing-index errors.
    pub fn describe(&self, collection: &str) -> String {
        let mut parts = Vec::new();
        for filter in &self.filters {
            parts.push(format!("{} == ?", filter.field));
        }
        if let Some((field, direction)) = &self.order_by {
            let dir = match direction {
                Direction::Ascending => "asc",
                Direction::Descending => "desc",
            };
            parts.push(format!("order by {field} {dir}"));
        }
        format!("{collection}: {}", parts.join(", "))
    }
}
