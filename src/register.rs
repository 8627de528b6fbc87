//! Application state and the user-action handlers that mutate it. Nothing in
//! here knows about the terminal; the UI turns key presses into [`Command`]s
//! and reacts to the returned [`Outcome`].

use std::path::Path;

use tracing::debug;

use crate::db::load_properties;
use crate::error::{DatabaseError, ValidationError};
use crate::models::{Field, FormValues, PropertyRecord};
use crate::store::RecordStore;
use crate::table::{SortDirection, TableProjector};

/// User actions the register knows how to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The "Add" action with the current form contents.
    Submit(FormValues),
    /// A column header was activated.
    ActivateHeader(Field),
}

/// What a successfully handled command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A record was stored; the form should be cleared.
    Added(PropertyRecord),
    Sorted {
        field: Field,
        direction: SortDirection,
    },
}

/// The record store together with the table view that mirrors it.
#[derive(Debug, Default)]
pub struct Register {
    store: RecordStore,
    table: TableProjector,
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the register from the database at `path`. Either every row is
    /// appended or, on error, none are.
    pub fn load(&mut self, path: &Path) -> Result<usize, DatabaseError> {
        let records = load_properties(path)?;
        let count = records.len();
        for record in records {
            self.insert(record);
        }
        Ok(count)
    }

    /// Route a user action to its handler.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, ValidationError> {
        match command {
            Command::Submit(values) => self.submit(values).map(Outcome::Added),
            Command::ActivateHeader(field) => {
                let direction = self.table.activate_header(field);
                debug!(%field, %direction, "sorted table");
                Ok(Outcome::Sorted { field, direction })
            }
        }
    }

    /// Validate the form values and append the resulting record to both the
    /// store and the end of the table.
    pub fn submit(&mut self, values: FormValues) -> Result<PropertyRecord, ValidationError> {
        if let Some(field) = values.first_empty() {
            debug!(%field, "rejected submission with empty field");
            return Err(ValidationError::MissingField { field });
        }

        let record = values.into_record();
        self.insert(record.clone());
        debug!(total = self.store.len(), "added listing");
        Ok(record)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn table(&self) -> &TableProjector {
        &self.table
    }

    fn insert(&mut self, record: PropertyRecord) {
        self.table.append(record.to_row());
        self.store.append(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(items: [&str; 5]) -> FormValues {
        FormValues::new(items.map(String::from))
    }

    #[test]
    fn submit_appends_to_store_and_table() {
        let mut register = Register::new();
        register
            .submit(values(["Flat", "40", "Pine St", "1", "Ann"]))
            .unwrap();
        let record = register
            .submit(values(["House", "120", "Elm St", "250000", "Jane Smith"]))
            .unwrap();

        assert_eq!(register.store().len(), 2);
        assert_eq!(register.store().last(), Some(&record));
        assert_eq!(
            register.table().rows().last().unwrap(),
            &["House", "120", "Elm St", "250000", "Jane Smith"].map(String::from)
        );
    }

    #[test]
    fn empty_field_is_rejected_without_side_effects() {
        let mut register = Register::new();
        let err = register
            .submit(values(["House", "120", "", "250000", ""]))
            .unwrap_err();
        assert_eq!(err, ValidationError::MissingField { field: Field::Address });
        assert!(register.store().is_empty());
        assert!(register.table().is_empty());
    }

    #[test]
    fn dispatch_routes_header_activation() {
        let mut register = Register::new();
        register.submit(values(["B", "1", "x", "1", "c"])).unwrap();
        register.submit(values(["A", "2", "y", "2", "d"])).unwrap();

        let outcome = register
            .dispatch(Command::ActivateHeader(Field::ObjectType))
            .unwrap();
        assert_eq!(
            outcome,
            Outcome::Sorted {
                field: Field::ObjectType,
                direction: SortDirection::Ascending,
            }
        );
        assert_eq!(register.table().rows()[0][0], "A");
        // Sorting the view leaves the store in entry order.
        assert_eq!(register.store().records()[0].object_type, "B");
    }

    #[test]
    fn dispatch_submit_reports_added_record() {
        let mut register = Register::new();
        let outcome = register
            .dispatch(Command::Submit(values(["Lot", "900", "Hill Rd", "5", "Max"])))
            .unwrap();
        match outcome {
            Outcome::Added(record) => assert_eq!(record.client_full_name, "Max"),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
