use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone)]
pub struct ColumnName {
    pub name: String,
}

impl ColumnName {
    pub fn from(arg: &str) -> Self {
        ColumnName {
            name: arg.to_owned(),
        }
    }
}

/// The only type distinction the cast needs: the catalog reports each column
/// as either numeric or character data.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
pub enum ColumnKind {
    Numeric,
    Textual,
}

/// Column metadata as reported by the catalog. Read-only input, never
/// created or mutated by this crate.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ColumnDescriptor {
    pub name: ColumnName,
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    pub fn new(name: &str, kind: ColumnKind) -> Self {
        ColumnDescriptor {
            name: ColumnName::from(name),
            kind,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }
}
