//! Display ordering for the listings table.

use std::fmt;

use crate::models::{DisplayRow, Field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_descending(self) -> bool {
        matches!(self, SortDirection::Descending)
    }

    /// Arrow shown next to the sorted column header.
    pub fn marker(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

/// Rows as the table shows them. Sorting reorders only these rows; the record
/// store is never touched.
#[derive(Debug, Default)]
pub struct TableProjector {
    rows: Vec<DisplayRow>,
    /// Per column: whether the next header activation sorts descending.
    next_descending: [bool; 5],
    last_sort: Option<(Field, SortDirection)>,
}

impl TableProjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row after the current last row, regardless of any earlier sort.
    pub fn append(&mut self, row: DisplayRow) {
        self.rows.push(row);
    }

    /// Reorder rows by plain string comparison of `field`'s column. The sort is
    /// stable, so rows with equal keys keep their relative order.
    pub fn sort_by(&mut self, field: Field, descending: bool) {
        let column = field.index();
        self.rows.sort_by(|a, b| {
            let ordering = a[column].cmp(&b[column]);
            if descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.last_sort = Some((field, direction));
    }

    /// Header click: ascending the first time a column is activated, then
    /// alternating on every further activation of that same column.
    pub fn activate_header(&mut self, field: Field) -> SortDirection {
        let descending = self.next_descending[field.index()];
        self.sort_by(field, descending);
        self.next_descending[field.index()] = !descending;
        if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most recent sort applied, used for the header indicator.
    pub fn last_sort(&self) -> Option<(Field, SortDirection)> {
        self.last_sort
    }

    /// Sort direction to display for `field`, if it is the sorted column.
    pub fn sort_marker(&self, field: Field) -> Option<SortDirection> {
        match self.last_sort {
            Some((sorted, direction)) if sorted == field => Some(direction),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: [&str; 5]) -> DisplayRow {
        values.map(String::from)
    }

    fn column(table: &TableProjector, field: Field) -> Vec<String> {
        table
            .rows()
            .iter()
            .map(|row| row[field.index()].clone())
            .collect()
    }

    fn sample() -> TableProjector {
        let mut table = TableProjector::new();
        table.append(row(["House", "120", "Elm St", "250000", "Jane"]));
        table.append(row(["Apartment", "50", "Main St", "100000", "John"]));
        table.append(row(["Cottage", "75", "Oak Ave", "90000", "Ann"]));
        table
    }

    #[test]
    fn sort_is_lexicographic_not_numeric() {
        let mut table = sample();
        table.sort_by(Field::Price, false);
        assert_eq!(column(&table, Field::Price), ["100000", "250000", "90000"]);
        table.sort_by(Field::Area, false);
        assert_eq!(column(&table, Field::Area), ["120", "50", "75"]);
    }

    #[test]
    fn header_toggles_per_column() {
        let mut table = sample();
        let first = table.activate_header(Field::ObjectType);
        assert_eq!(first, SortDirection::Ascending);
        assert_eq!(
            column(&table, Field::ObjectType),
            ["Apartment", "Cottage", "House"]
        );
        let second = table.activate_header(Field::ObjectType);
        assert_eq!(second, SortDirection::Descending);
        assert_eq!(
            column(&table, Field::ObjectType),
            ["House", "Cottage", "Apartment"]
        );

        // Another column starts ascending and leaves the first toggle intact.
        let other = table.activate_header(Field::ClientFullName);
        assert_eq!(other, SortDirection::Ascending);
        let third = table.activate_header(Field::ObjectType);
        assert_eq!(third, SortDirection::Ascending);
    }

    #[test]
    fn append_lands_at_end_after_sort() {
        let mut table = sample();
        table.sort_by(Field::ObjectType, true);
        table.append(row(["Barn", "10", "Farm Rd", "5", "Bob"]));
        assert_eq!(
            column(&table, Field::ObjectType),
            ["House", "Cottage", "Apartment", "Barn"]
        );
    }

    #[test]
    fn equal_keys_keep_relative_order() {
        let mut table = TableProjector::new();
        table.append(row(["Flat", "1", "", "", "first"]));
        table.append(row(["Flat", "2", "", "", "second"]));
        table.sort_by(Field::ObjectType, false);
        assert_eq!(column(&table, Field::ClientFullName), ["first", "second"]);
    }

    #[test]
    fn marker_tracks_last_sort_only() {
        let mut table = sample();
        assert_eq!(table.sort_marker(Field::Area), None);
        table.activate_header(Field::Area);
        assert_eq!(table.sort_marker(Field::Area), Some(SortDirection::Ascending));
        table.activate_header(Field::Price);
        assert_eq!(table.sort_marker(Field::Area), None);
        assert_eq!(
            table.last_sort(),
            Some((Field::Price, SortDirection::Ascending))
        );
    }

    #[test]
    fn sorting_empty_table_is_a_noop() {
        let mut table = TableProjector::new();
        table.sort_by(Field::Address, true);
        assert!(table.is_empty());
    }
}
