use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableName {
    pub name: String,
    /// the library/schema the table lives in, when qualified
    pub schema: Option<String>,
}

impl TableName {
    /// create a table name, splitting a `schema.table` qualifier when present
    pub fn from(arg: &str) -> Self {
        if arg.contains('.') {
            let splinters = arg.split('.').collect::<Vec<&str>>();
            assert!(splinters.len() == 2, "There should only be 2 parts");
            let schema = splinters[0].to_owned();
            let table = splinters[1].to_owned();
            TableName {
                schema: Some(schema),
                name: table,
            }
        } else {
            TableName {
                schema: None,
                name: arg.to_owned(),
            }
        }
    }

    pub fn name(&self) -> String {
        self.name.to_owned()
    }

    /// return the long name of the table using schema.table_name
    pub fn complete_name(&self) -> String {
        match self.schema {
            Some(ref schema) => format!("{}.{}", schema, self.name),
            None => self.name.to_owned(),
        }
    }

    /// the derived table the casting statement materializes, in the same schema
    pub fn casted(&self) -> TableName {
        TableName {
            name: format!("{}_casted", self.name),
            schema: self.schema.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn qualified_name_splits_on_the_dot() {
        let table = TableName::from("work.x");
        assert_eq!(table.name, "x");
        assert_eq!(table.schema, Some("work".to_string()));
        assert_eq!(table.complete_name(), "work.x");
    }

    #[test]
    fn bare_name_has_no_schema() {
        let table = TableName::from("actor");
        assert_eq!(table.schema, None);
        assert_eq!(table.complete_name(), "actor");
    }

    #[test]
    fn casted_keeps_the_schema() {
        let table = TableName::from("work.x");
        let casted = table.casted();
        assert_eq!(casted.complete_name(), "work.x_casted");
    }

    #[test]
    fn casted_suffixes_the_bare_name() {
        assert_eq!(TableName::from("x").casted().name(), "x_casted");
    }
}
