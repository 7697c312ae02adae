/// Sort direction of one indexed field. Serialized as `1` / `-1` in the
/// crawl tooling's legacy wire shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub fn legacy(self) -> i32 {
        match self {
            Direction::Asc => 1,
            Direction::Desc => -1,
        }
    }

    pub(crate) fn sql(self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }
}

/// An ordered field-to-direction mapping plus constraint options. Field order
/// is significant: it defines compound-index semantics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexDef {
    pub fields: Vec<(String, Direction)>,
    pub unique: bool,
}

impl IndexDef {
    /// Index over a single field.
    pub fn single(field: &str, direction: Direction) -> Self {
        Self {
            fields: vec![(field.to_string(), direction)],
            unique: false,
        }
    }

    /// Compound index over several fields, in the given order.
    pub fn compound<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, Direction)>,
        S: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(field, direction)| (field.into(), direction))
                .collect(),
            unique: false,
        }
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Deterministic engine-level name, `full_name_1` style. The storage
    /// backend prefixes it with the collection name since index namespaces
    /// are per-database, not per-table.
    pub fn name(&self) -> String {
        self.fields
            .iter()
            .map(|(field, direction)| format!("{}_{}", field, direction.legacy()))
            .collect::<Vec<_>>()
            .join("_")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field_name_encodes_direction() {
        assert_eq!(IndexDef::single("full_name", Direction::Asc).name(), "full_name_1");
        assert_eq!(
            IndexDef::single("creation_date", Direction::Desc).name(),
            "creation_date_-1"
        );
    }

    #[test]
    fn compound_name_preserves_field_order() {
        let index = IndexDef::compound([
            ("score", Direction::Desc),
            ("creation_date", Direction::Asc),
        ]);
        assert_eq!(index.name(), "score_-1_creation_date_1");
    }

    #[test]
    fn unique_marks_options_only() {
        let plain = IndexDef::single("question_id", Direction::Asc);
        let unique = plain.clone().unique();
        assert!(!plain.unique);
        assert!(unique.unique);
        assert_eq!(plain.name(), unique.name());
    }
}
