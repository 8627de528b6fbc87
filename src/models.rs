//! Domain types shared by the loader, the in-memory store, and the TUI. A
//! listing is nothing more than five strings; nothing here parses areas or
//! prices, so whatever the user typed (or the database held) is what gets
//! shown back.

use std::fmt;

/// The fixed, ordered set of listing fields. The order drives the form layout,
/// the table columns, and the tuple order of display rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ObjectType,
    Area,
    Address,
    Price,
    ClientFullName,
}

impl Field {
    /// Every field in canonical order.
    pub const ALL: [Field; 5] = [
        Field::ObjectType,
        Field::Area,
        Field::Address,
        Field::Price,
        Field::ClientFullName,
    ];

    /// Human-facing label used for both the form and the column header.
    pub fn label(self) -> &'static str {
        match self {
            Field::ObjectType => "Object type",
            Field::Area => "Area",
            Field::Address => "Address",
            Field::Price => "Price",
            Field::ClientFullName => "Client full name",
        }
    }

    /// Position of the field within [`Field::ALL`].
    pub fn index(self) -> usize {
        match self {
            Field::ObjectType => 0,
            Field::Area => 1,
            Field::Address => 2,
            Field::Price => 3,
            Field::ClientFullName => 4,
        }
    }

    /// Field after this one, wrapping around to the first.
    pub fn next(self) -> Field {
        Field::ALL[(self.index() + 1) % Field::ALL.len()]
    }

    /// Field before this one, wrapping around to the last.
    pub fn prev(self) -> Field {
        let len = Field::ALL.len();
        Field::ALL[(self.index() + len - 1) % len]
    }
}

impl Default for Field {
    fn default() -> Self {
        Field::ObjectType
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the table: a record's values in [`Field::ALL`] order.
pub type DisplayRow = [String; 5];

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single real-estate listing.
pub struct PropertyRecord {
    pub object_type: String,
    pub area: String,
    pub address: String,
    pub price: String,
    pub client_full_name: String,
}

impl PropertyRecord {
    /// Borrow the value stored under `field`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::ObjectType => &self.object_type,
            Field::Area => &self.area,
            Field::Address => &self.address,
            Field::Price => &self.price,
            Field::ClientFullName => &self.client_full_name,
        }
    }

    /// Copy the record into the tuple shape the table renders.
    pub fn to_row(&self) -> DisplayRow {
        Field::ALL.map(|field| self.get(field).to_string())
    }
}

/// Raw text gathered from the form, one entry per field. Values are kept
/// verbatim; validation happens in the register, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: [String; 5],
}

impl FormValues {
    pub fn new(values: [String; 5]) -> Self {
        Self { values }
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set<S: Into<String>>(&mut self, field: Field, value: S) {
        self.values[field.index()] = value.into();
    }

    /// First field, in canonical order, whose value is empty.
    pub fn first_empty(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|field| self.get(*field).is_empty())
    }

    pub(crate) fn into_record(self) -> PropertyRecord {
        let [object_type, area, address, price, client_full_name] = self.values;
        PropertyRecord {
            object_type,
            area,
            address,
            price,
            client_full_name,
        }
    }
}
