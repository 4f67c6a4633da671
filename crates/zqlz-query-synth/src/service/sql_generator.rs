//! SQL text generation
//!
//! One template per SQL operation. Identifiers and free-text fragments are
//! substituted as given; blank inputs become `/* ... */` placeholders so the
//! statement skeleton is always complete.

use std::borrow::Cow;

use zqlz_core::QueryDialect;

use super::fragments::{is_blank, or_placeholder};
use crate::models::{
    AlterAction, AlterTable, CreateFunction, CreateIndex, CreateTrigger, CreateView, Cte,
    CustomQuery, Field, MergeTable, PivotTable, SQL_AUTO_INCREMENT_TYPE, SqlOperation,
    TableFromQuery, TableTarget, UpdateTable, WindowFunction,
};

const DIALECT: QueryDialect = QueryDialect::Sql;

/// SQL generator for operation specs
///
/// Stateless: every method is an associated function over the operation and the
/// column list for the current call.
pub struct SqlGenerator;

impl SqlGenerator {
    /// Render the statement(s) for a SQL operation
    pub fn render(operation: &SqlOperation, columns: &[Field]) -> String {
        match operation {
            SqlOperation::CreateTable(p) => Self::generate_create_table(p, columns),
            SqlOperation::CreateTableAs(p) => Self::generate_create_table_as(p),
            SqlOperation::DeleteTable(p) => Self::generate_drop_table(p),
            SqlOperation::AlterTable(p) => Self::generate_alter_table(p, columns),
            SqlOperation::CreateIndex(p) => Self::generate_create_index(p),
            SqlOperation::CreateView(p) => Self::generate_create_view(p),
            SqlOperation::CreateFunction(p) => Self::generate_create_function(p),
            SqlOperation::CreateTrigger(p) => Self::generate_create_trigger(p),
            SqlOperation::WindowFunction(p) => Self::generate_window_function(p, columns),
            SqlOperation::UpdateTable(p) => Self::generate_update(p, columns),
            SqlOperation::PivotTable(p) => Self::generate_pivot(p, columns),
            SqlOperation::MergeTable(p) => Self::generate_merge(p, columns),
            SqlOperation::TempTable(p) => Self::generate_temp_table(p, columns),
            SqlOperation::ClearTable(p) => Self::generate_truncate(p),
            SqlOperation::Cte(p) => Self::generate_cte(p),
            SqlOperation::Query(p) => Self::generate_custom(p),
        }
    }

    fn table(name: &str) -> Cow<'_, str> {
        or_placeholder(DIALECT, name, "table name")
    }

    fn column_name(column: &Field) -> Cow<'_, str> {
        or_placeholder(DIALECT, &column.name, "column name")
    }

    /// Quote text as a SQL string literal
    fn sql_quote(value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    /// Column definition used by CREATE TABLE and ADD COLUMN.
    ///
    /// Flags contribute a token only when set. An auto-increment column
    /// always renders as `SERIAL` and never carries a DEFAULT.
    pub fn column_definition(column: &Field) -> String {
        let flag = |set: bool, token: &'static str| Cow::Borrowed(if set { token } else { "" });

        let data_type = if column.is_auto_increment {
            Cow::Borrowed(SQL_AUTO_INCREMENT_TYPE)
        } else {
            or_placeholder(DIALECT, &column.data_type, "data type")
        };
        let default = if column.has_default() && !column.is_auto_increment {
            Cow::Owned(format!("DEFAULT {}", column.default_value))
        } else {
            Cow::Borrowed("")
        };

        let parts = [
            Self::column_name(column),
            data_type,
            flag(column.required, "NOT NULL"),
            flag(column.is_primary_key, "PRIMARY KEY"),
            flag(column.unique && !column.is_primary_key, "UNIQUE"),
            default,
        ];

        parts
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Indented, comma-separated column block for table bodies
    fn column_block(columns: &[Field], render: impl Fn(&Field) -> String) -> String {
        if columns.is_empty() {
            return format!("  {}", DIALECT.placeholder("column definitions"));
        }
        columns
            .iter()
            .map(|column| format!("  {}", render(column)))
            .collect::<Vec<_>>()
            .join(",\n")
    }

    /// Comma-separated list built from the column names
    fn name_list(columns: &[Field], render: impl Fn(&str) -> String, empty_label: &str) -> String {
        if columns.is_empty() {
            return DIALECT.placeholder(empty_label);
        }
        columns
            .iter()
            .map(|column| render(Self::column_name(column).as_ref()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn generate_create_table(params: &TableTarget, columns: &[Field]) -> String {
        format!(
            "CREATE TABLE {} (\n{}\n);",
            Self::table(&params.table_name),
            Self::column_block(columns, Self::column_definition)
        )
    }

    pub fn generate_temp_table(params: &TableTarget, columns: &[Field]) -> String {
        format!(
            "CREATE TEMPORARY TABLE {} (\n{}\n);",
            Self::table(&params.table_name),
            Self::column_block(columns, Self::column_definition)
        )
    }

    pub fn generate_create_table_as(params: &TableFromQuery) -> String {
        format!(
            "CREATE TABLE {} AS ({});",
            Self::table(&params.table_name),
            or_placeholder(DIALECT, &params.source_query, "source query")
        )
    }

    pub fn generate_drop_table(params: &TableTarget) -> String {
        format!("DROP TABLE {};", Self::table(&params.table_name))
    }

    pub fn generate_truncate(params: &TableTarget) -> String {
        format!("TRUNCATE TABLE {};", Self::table(&params.table_name))
    }

    /// Dispatch on the ALTER TABLE sub-operation
    pub fn generate_alter_table(params: &AlterTable, columns: &[Field]) -> String {
        let table = Self::table(&params.table_name);

        match &params.action {
            AlterAction::AddColumn => {
                if columns.is_empty() {
                    return format!(
                        "ALTER TABLE {}\nADD COLUMN {};",
                        table,
                        DIALECT.placeholder("column definition")
                    );
                }
                columns
                    .iter()
                    .map(|column| {
                        format!(
                            "ALTER TABLE {}\nADD COLUMN {};",
                            table,
                            Self::column_definition(column)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n\n")
            }
            AlterAction::ModifyColumn => {
                if columns.is_empty() {
                    return format!(
                        "ALTER TABLE {}\nALTER COLUMN {} TYPE {};",
                        table,
                        DIALECT.placeholder("column name"),
                        DIALECT.placeholder("data type")
                    );
                }
                columns
                    .iter()
                    .map(|column| Self::modify_column(&table, column))
                    .collect::<Vec<_>>()
                    .join("\n\n")
            }
            AlterAction::RenameColumn {
                old_column_name,
                new_column_name,
            } => format!(
                "ALTER TABLE {} RENAME COLUMN {} TO {};",
                table,
                or_placeholder(DIALECT, old_column_name, "old column name"),
                or_placeholder(DIALECT, new_column_name, "new column name")
            ),
            AlterAction::DropColumn => {
                let column = columns
                    .first()
                    .map(Self::column_name)
                    .unwrap_or_else(|| Cow::Owned(DIALECT.placeholder("column name")));
                format!("ALTER TABLE {} DROP COLUMN IF EXISTS {};", table, column)
            }
            AlterAction::AddConstraint {
                constraint_name,
                constraint_definition,
            } => format!(
                "ALTER TABLE {} ADD CONSTRAINT {} {};",
                table,
                or_placeholder(DIALECT, constraint_name, "constraint name"),
                or_placeholder(DIALECT, constraint_definition, "constraint definition")
            ),
            AlterAction::DropConstraint { constraint_name } => format!(
                "ALTER TABLE {} DROP CONSTRAINT IF EXISTS {};",
                table,
                or_placeholder(DIALECT, constraint_name, "constraint name")
            ),
            AlterAction::RenameTable { new_table_name } => format!(
                "ALTER TABLE {} RENAME TO {};",
                table,
                or_placeholder(DIALECT, new_table_name, "new table name")
            ),
            AlterAction::Unselected => DIALECT.line_comment("Select an alter operation"),
        }
    }

    /// ALTER COLUMN clauses for one column: type, then NOT NULL and DEFAULT when set.
    ///
    /// The declared type is kept even for auto-increment columns, but their
    /// default is never set.
    fn modify_column(table: &str, column: &Field) -> String {
        let name = Self::column_name(column);
        let mut stmt = format!(
            "ALTER TABLE {}\nALTER COLUMN {} TYPE {}",
            table,
            name,
            or_placeholder(DIALECT, &column.data_type, "data type")
        );
        if column.required {
            stmt.push_str(&format!(",\nALTER COLUMN {} SET NOT NULL", name));
        }
        if column.has_default() && !column.is_auto_increment {
            stmt.push_str(&format!(
                ",\nALTER COLUMN {} SET DEFAULT {}",
                name, column.default_value
            ));
        }
        stmt.push(';');
        stmt
    }

    pub fn generate_create_index(params: &CreateIndex) -> String {
        let index_name = if is_blank(&params.table_name) {
            DIALECT.placeholder("index name")
        } else {
            format!("{}_idx", params.table_name)
        };
        format!(
            "CREATE INDEX {}\nON {} USING {}\n({});",
            index_name,
            Self::table(&params.table_name),
            params.method,
            or_placeholder(DIALECT, &params.index_columns, "index columns")
        )
    }

    pub fn generate_create_view(params: &CreateView) -> String {
        format!(
            "CREATE OR REPLACE VIEW {} AS\n{};",
            or_placeholder(DIALECT, &params.view_name, "view name"),
            or_placeholder(DIALECT, &params.source_query, "view query")
        )
    }

    /// PL/pgSQL trigger function wrapped around the body
    pub fn generate_create_function(params: &CreateFunction) -> String {
        let body = if is_blank(&params.function_body) {
            format!("  {}", DIALECT.placeholder("function body"))
        } else {
            params.function_body.clone()
        };
        format!(
            "CREATE OR REPLACE FUNCTION {}()\nRETURNS TRIGGER AS $$\nBEGIN\n{}\n  RETURN NEW;\nEND;\n$$ LANGUAGE plpgsql;",
            or_placeholder(DIALECT, &params.function_name, "function name"),
            body
        )
    }

    pub fn generate_create_trigger(params: &CreateTrigger) -> String {
        format!(
            "CREATE TRIGGER {}\n{}\nON {}\nFOR EACH ROW\nEXECUTE FUNCTION {}();",
            or_placeholder(DIALECT, &params.trigger_name, "trigger name"),
            params.event,
            Self::table(&params.table_name),
            or_placeholder(DIALECT, &params.function_name, "function name")
        )
    }

    /// Window query; the first two columns supply PARTITION BY and ORDER BY
    pub fn generate_window_function(params: &WindowFunction, columns: &[Field]) -> String {
        let select = if columns.is_empty() {
            "SELECT".to_string()
        } else {
            format!(
                "SELECT {},",
                Self::name_list(columns, |name| name.to_string(), "columns")
            )
        };
        let column_or = |index: usize, fallback: &'static str| -> String {
            columns
                .get(index)
                .filter(|column| !is_blank(&column.name))
                .map(|column| column.name.clone())
                .unwrap_or_else(|| fallback.to_string())
        };
        let filter = if is_blank(&params.where_clause) {
            String::new()
        } else {
            format!("\nWHERE {}", params.where_clause)
        };

        format!(
            "{}\n  {} OVER (\n    PARTITION BY {}\n    ORDER BY {}\n  ) as window_result\nFROM {}{};",
            select,
            or_placeholder(DIALECT, &params.aggregate_function, "aggregate function"),
            column_or(0, "partition_column"),
            column_or(1, "order_column"),
            Self::table(&params.table_name),
            filter
        )
    }

    /// UPDATE; without an explicit SET clause each column is set to its default.
    /// Auto-increment columns get a value placeholder instead.
    pub fn generate_update(params: &UpdateTable, columns: &[Field]) -> String {
        let assignments = if !is_blank(&params.set_clause) {
            params.set_clause.clone()
        } else if columns.is_empty() {
            DIALECT.placeholder("column = value")
        } else {
            columns
                .iter()
                .map(|column| {
                    let value = if column.has_default() && !column.is_auto_increment {
                        column.default_value.clone()
                    } else {
                        DIALECT.placeholder("value")
                    };
                    format!("{} = {}", Self::column_name(column), value)
                })
                .collect::<Vec<_>>()
                .join(", ")
        };

        format!(
            "UPDATE {}\nSET {}\nWHERE {};",
            Self::table(&params.table_name),
            assignments,
            or_placeholder(DIALECT, &params.where_clause, "condition")
        )
    }

    /// Crosstab-style pivot; the columns describe the output record
    pub fn generate_pivot(params: &PivotTable, columns: &[Field]) -> String {
        let table = Self::table(&params.table_name);
        let source = or_placeholder(DIALECT, &params.source_query, "source query");
        let categories = format!(
            "SELECT DISTINCT {} FROM {} ORDER BY 1",
            or_placeholder(DIALECT, &params.pivot_columns, "pivot columns"),
            table
        );
        let record = Self::column_block(columns, |column| {
            format!(
                "{} {}",
                Self::column_name(column),
                or_placeholder(DIALECT, &column.data_type, "data type")
            )
        });

        format!(
            "SELECT *\nFROM {} (\n  {},\n  {}\n) AS ct (\n{}\n);",
            table,
            Self::sql_quote(&source),
            Self::sql_quote(&categories),
            record
        )
    }

    pub fn generate_merge(params: &MergeTable, columns: &[Field]) -> String {
        let assignments = Self::name_list(
            columns,
            |name| format!("{} = source.{}", name, name),
            "column assignments",
        );
        let insert_columns = Self::name_list(columns, |name| name.to_string(), "columns");
        let values = Self::name_list(columns, |name| format!("source.{}", name), "values");

        format!(
            "MERGE INTO {} AS target\nUSING {} AS source\nON {}\nWHEN MATCHED THEN\n  UPDATE SET {}\nWHEN NOT MATCHED THEN\n  INSERT ({})\n  VALUES ({});",
            Self::table(&params.table_name),
            or_placeholder(DIALECT, &params.source_query, "source query"),
            or_placeholder(DIALECT, &params.merge_condition, "merge condition"),
            assignments,
            insert_columns,
            values
        )
    }

    /// `WITH cte_<table> AS (...) <main query>;`
    pub fn generate_cte(params: &Cte) -> String {
        let name = if is_blank(&params.table_name) {
            DIALECT.placeholder("cte name")
        } else {
            format!("cte_{}", params.table_name)
        };
        format!(
            "WITH {} AS (\n  {}\n)\n{};",
            name,
            or_placeholder(DIALECT, &params.cte_query, "cte query"),
            or_placeholder(DIALECT, &params.main_query, "main query")
        )
    }

    /// Custom query text is passed through unchanged
    pub fn generate_custom(params: &CustomQuery) -> String {
        if is_blank(&params.custom_query) {
            DIALECT.line_comment("Enter your custom SQL query here")
        } else {
            params.custom_query.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IndexMethod, TriggerEvent};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn column(name: &str, data_type: &str) -> Field {
        Field::named(DIALECT, name).with_type(DIALECT, data_type)
    }

    fn users_columns() -> Vec<Field> {
        vec![
            column("id", "INT").required().primary_key().auto_increment(),
            column("email", "VARCHAR(255)").required(),
        ]
    }

    #[test]
    fn test_generate_create_table() {
        let sql = SqlGenerator::generate_create_table(&TableTarget::new("users"), &users_columns());

        assert_eq!(
            sql,
            indoc! {"
                CREATE TABLE users (
                  id SERIAL NOT NULL PRIMARY KEY,
                  email VARCHAR(255) NOT NULL DEFAULT ''
                );"}
        );
    }

    #[test]
    fn test_auto_increment_suppresses_type_and_default() {
        let id = column("id", "BIGINT").auto_increment().with_default("42");
        assert_eq!(id.default_value, "42");
        assert_eq!(SqlGenerator::column_definition(&id), "id SERIAL");
    }

    #[test]
    fn test_column_definition_flags() {
        let plain = column("note", "TEXT").with_default("");
        assert_eq!(SqlGenerator::column_definition(&plain), "note TEXT");

        let unique = column("slug", "TEXT").unique().with_default("");
        assert_eq!(SqlGenerator::column_definition(&unique), "slug TEXT UNIQUE");

        // UNIQUE is implied by PRIMARY KEY
        let pk = column("code", "UUID").primary_key().unique();
        assert_eq!(
            SqlGenerator::column_definition(&pk),
            "code UUID PRIMARY KEY DEFAULT gen_random_uuid()"
        );

        let unnamed = Field::new(DIALECT);
        assert_eq!(
            SqlGenerator::column_definition(&unnamed),
            "/* column name */ VARCHAR(255) DEFAULT ''"
        );
    }

    #[test]
    fn test_create_table_without_columns() {
        let sql = SqlGenerator::generate_create_table(&TableTarget::default(), &[]);
        assert_eq!(
            sql,
            "CREATE TABLE /* table name */ (\n  /* column definitions */\n);"
        );
    }

    #[test]
    fn test_temp_table() {
        let sql = SqlGenerator::generate_temp_table(
            &TableTarget::new("staging"),
            &[column("payload", "JSONB")],
        );
        assert_eq!(
            sql,
            "CREATE TEMPORARY TABLE staging (\n  payload JSONB DEFAULT '{}'\n);"
        );
    }

    #[test]
    fn test_simple_table_statements() {
        let target = TableTarget::new("logs");
        assert_eq!(SqlGenerator::generate_drop_table(&target), "DROP TABLE logs;");
        assert_eq!(SqlGenerator::generate_truncate(&target), "TRUNCATE TABLE logs;");
        assert_eq!(
            SqlGenerator::generate_create_table_as(&TableFromQuery {
                table_name: "active_users".to_string(),
                source_query: "SELECT * FROM users WHERE active".to_string(),
            }),
            "CREATE TABLE active_users AS (SELECT * FROM users WHERE active);"
        );
        assert_eq!(
            SqlGenerator::generate_create_table_as(&TableFromQuery::default()),
            "CREATE TABLE /* table name */ AS (/* source query */);"
        );
    }

    fn alter(table: &str, action: AlterAction) -> AlterTable {
        AlterTable {
            table_name: table.to_string(),
            action,
        }
    }

    #[test]
    fn test_alter_rename_column() {
        let sql = SqlGenerator::generate_alter_table(
            &alter(
                "orders",
                AlterAction::RenameColumn {
                    old_column_name: "qty".to_string(),
                    new_column_name: "quantity".to_string(),
                },
            ),
            &[],
        );
        assert_eq!(sql, "ALTER TABLE orders RENAME COLUMN qty TO quantity;");
    }

    #[test]
    fn test_alter_add_column_per_column() {
        let sql = SqlGenerator::generate_alter_table(
            &alter("users", AlterAction::AddColumn),
            &[column("age", "INT").required(), column("bio", "TEXT")],
        );
        assert_eq!(
            sql,
            indoc! {"
                ALTER TABLE users
                ADD COLUMN age INT NOT NULL DEFAULT 0;

                ALTER TABLE users
                ADD COLUMN bio TEXT DEFAULT '';"}
        );
    }

    #[test]
    fn test_alter_modify_column() {
        let sql = SqlGenerator::generate_alter_table(
            &alter("users", AlterAction::ModifyColumn),
            &[column("score", "DECIMAL(10,2)").required()],
        );
        assert_eq!(
            sql,
            indoc! {"
                ALTER TABLE users
                ALTER COLUMN score TYPE DECIMAL(10,2),
                ALTER COLUMN score SET NOT NULL,
                ALTER COLUMN score SET DEFAULT 0.00;"}
        );
        assert!(!sql.contains("${"));
    }

    #[test]
    fn test_alter_modify_auto_increment_column_keeps_sequence_default() {
        let sql = SqlGenerator::generate_alter_table(
            &alter("t", AlterAction::ModifyColumn),
            &[column("id", "INT").auto_increment()],
        );
        assert_eq!(sql, "ALTER TABLE t\nALTER COLUMN id TYPE INT;");
        assert!(!sql.contains("DEFAULT"));
    }

    #[test]
    fn test_alter_with_empty_columns() {
        assert_eq!(
            SqlGenerator::generate_alter_table(&alter("t", AlterAction::AddColumn), &[]),
            "ALTER TABLE t\nADD COLUMN /* column definition */;"
        );
        assert_eq!(
            SqlGenerator::generate_alter_table(&alter("t", AlterAction::ModifyColumn), &[]),
            "ALTER TABLE t\nALTER COLUMN /* column name */ TYPE /* data type */;"
        );
        assert_eq!(
            SqlGenerator::generate_alter_table(&alter("t", AlterAction::DropColumn), &[]),
            "ALTER TABLE t DROP COLUMN IF EXISTS /* column name */;"
        );
    }

    #[test]
    fn test_alter_drop_column_uses_first_column() {
        let sql = SqlGenerator::generate_alter_table(
            &alter("t", AlterAction::DropColumn),
            &[column("legacy", "TEXT"), column("other", "TEXT")],
        );
        assert_eq!(sql, "ALTER TABLE t DROP COLUMN IF EXISTS legacy;");
    }

    #[test]
    fn test_alter_constraints_and_rename_table() {
        let add = SqlGenerator::generate_alter_table(
            &alter(
                "orders",
                AlterAction::AddConstraint {
                    constraint_name: "qty_positive".to_string(),
                    constraint_definition: "CHECK (quantity > 0)".to_string(),
                },
            ),
            &[],
        );
        assert_eq!(
            add,
            "ALTER TABLE orders ADD CONSTRAINT qty_positive CHECK (quantity > 0);"
        );

        let drop = SqlGenerator::generate_alter_table(
            &alter(
                "orders",
                AlterAction::DropConstraint {
                    constraint_name: "qty_positive".to_string(),
                },
            ),
            &[],
        );
        assert_eq!(drop, "ALTER TABLE orders DROP CONSTRAINT IF EXISTS qty_positive;");

        let rename = SqlGenerator::generate_alter_table(
            &alter(
                "orders",
                AlterAction::RenameTable {
                    new_table_name: "purchases".to_string(),
                },
            ),
            &[],
        );
        assert_eq!(rename, "ALTER TABLE orders RENAME TO purchases;");
    }

    #[test]
    fn test_alter_unselected() {
        let sql = SqlGenerator::generate_alter_table(&alter("t", AlterAction::Unselected), &[]);
        assert_eq!(sql, "-- Select an alter operation");
    }

    #[test]
    fn test_create_index() {
        let sql = SqlGenerator::generate_create_index(&CreateIndex {
            table_name: "orders".to_string(),
            method: IndexMethod::Gin,
            index_columns: "tags".to_string(),
        });
        assert_eq!(sql, "CREATE INDEX orders_idx\nON orders USING gin\n(tags);");

        let empty = SqlGenerator::generate_create_index(&CreateIndex::default());
        assert_eq!(
            empty,
            "CREATE INDEX /* index name */\nON /* table name */ USING btree\n(/* index columns */);"
        );
    }

    #[test]
    fn test_create_view() {
        let sql = SqlGenerator::generate_create_view(&CreateView {
            view_name: "recent_orders".to_string(),
            source_query: "SELECT * FROM orders WHERE created_at > now() - interval '7 days'"
                .to_string(),
        });
        assert_eq!(
            sql,
            "CREATE OR REPLACE VIEW recent_orders AS\nSELECT * FROM orders WHERE created_at > now() - interval '7 days';"
        );
    }

    #[test]
    fn test_create_function() {
        let sql = SqlGenerator::generate_create_function(&CreateFunction {
            function_name: "touch_updated_at".to_string(),
            function_body: "  NEW.updated_at = now();".to_string(),
        });
        assert_eq!(
            sql,
            indoc! {"
                CREATE OR REPLACE FUNCTION touch_updated_at()
                RETURNS TRIGGER AS $$
                BEGIN
                  NEW.updated_at = now();
                  RETURN NEW;
                END;
                $$ LANGUAGE plpgsql;"}
        );

        let empty = SqlGenerator::generate_create_function(&CreateFunction::default());
        assert!(empty.contains("FUNCTION /* function name */()"));
        assert!(empty.contains("BEGIN\n  /* function body */\n  RETURN NEW;"));
    }

    #[test]
    fn test_create_trigger() {
        let sql = SqlGenerator::generate_create_trigger(&CreateTrigger {
            trigger_name: "orders_touch".to_string(),
            table_name: "orders".to_string(),
            event: TriggerEvent::BeforeUpdate,
            function_name: "touch_updated_at".to_string(),
        });
        assert_eq!(
            sql,
            indoc! {"
                CREATE TRIGGER orders_touch
                BEFORE UPDATE
                ON orders
                FOR EACH ROW
                EXECUTE FUNCTION touch_updated_at();"}
        );
    }

    #[test]
    fn test_window_function() {
        let sql = SqlGenerator::generate_window_function(
            &WindowFunction {
                table_name: "sales".to_string(),
                aggregate_function: "SUM(amount)".to_string(),
                where_clause: "amount > 1000".to_string(),
            },
            &[column("region", "TEXT"), column("sold_at", "DATE")],
        );
        assert_eq!(
            sql,
            indoc! {"
                SELECT region, sold_at,
                  SUM(amount) OVER (
                    PARTITION BY region
                    ORDER BY sold_at
                  ) as window_result
                FROM sales
                WHERE amount > 1000;"}
        );
    }

    #[test]
    fn test_window_function_fallbacks() {
        let sql = SqlGenerator::generate_window_function(
            &WindowFunction {
                table_name: "sales".to_string(),
                ..Default::default()
            },
            &[],
        );
        assert_eq!(
            sql,
            indoc! {"
                SELECT
                  /* aggregate function */ OVER (
                    PARTITION BY partition_column
                    ORDER BY order_column
                  ) as window_result
                FROM sales;"}
        );
    }

    #[test]
    fn test_update() {
        let explicit = SqlGenerator::generate_update(
            &UpdateTable {
                table_name: "users".to_string(),
                set_clause: "active = false".to_string(),
                where_clause: "last_login < now() - interval '1 year'".to_string(),
            },
            &[],
        );
        assert_eq!(
            explicit,
            "UPDATE users\nSET active = false\nWHERE last_login < now() - interval '1 year';"
        );

        let derived = SqlGenerator::generate_update(
            &UpdateTable {
                table_name: "users".to_string(),
                ..Default::default()
            },
            &[column("active", "BOOLEAN"), column("tag", "REGEXP_LIKE")],
        );
        assert_eq!(
            derived,
            "UPDATE users\nSET active = false, tag = /* value */\nWHERE /* condition */;"
        );
    }

    #[test]
    fn test_update_never_assigns_auto_increment_default() {
        let sql = SqlGenerator::generate_update(
            &UpdateTable::default(),
            &[column("id", "INT").auto_increment(), column("score", "INT")],
        );
        assert_eq!(
            sql,
            "UPDATE /* table name */\nSET id = /* value */, score = 0\nWHERE /* condition */;"
        );
    }

    #[test]
    fn test_pivot() {
        let sql = SqlGenerator::generate_pivot(
            &PivotTable {
                table_name: "sales".to_string(),
                source_query: "SELECT region, quarter, total FROM sales WHERE kind = 'retail'"
                    .to_string(),
                pivot_columns: "quarter".to_string(),
            },
            &[column("region", "TEXT"), column("q1", "INT")],
        );
        assert_eq!(
            sql,
            indoc! {"
                SELECT *
                FROM sales (
                  'SELECT region, quarter, total FROM sales WHERE kind = ''retail''',
                  'SELECT DISTINCT quarter FROM sales ORDER BY 1'
                ) AS ct (
                  region TEXT,
                  q1 INT
                );"}
        );
    }

    #[test]
    fn test_merge() {
        let sql = SqlGenerator::generate_merge(
            &MergeTable {
                table_name: "customers".to_string(),
                source_query: "staging_customers".to_string(),
                merge_condition: "target.id = source.id".to_string(),
            },
            &[column("id", "INT"), column("email", "TEXT")],
        );
        assert_eq!(
            sql,
            indoc! {"
                MERGE INTO customers AS target
                USING staging_customers AS source
                ON target.id = source.id
                WHEN MATCHED THEN
                  UPDATE SET id = source.id, email = source.email
                WHEN NOT MATCHED THEN
                  INSERT (id, email)
                  VALUES (source.id, source.email);"}
        );
    }

    #[test]
    fn test_merge_without_columns() {
        let sql = SqlGenerator::generate_merge(&MergeTable::default(), &[]);
        assert!(sql.contains("UPDATE SET /* column assignments */"));
        assert!(sql.contains("INSERT (/* columns */)"));
        assert!(sql.contains("VALUES (/* values */);"));
    }

    #[test]
    fn test_cte() {
        let sql = SqlGenerator::generate_cte(&Cte {
            table_name: "orders".to_string(),
            cte_query: "SELECT * FROM orders WHERE total > 100".to_string(),
            main_query: "SELECT count(*) FROM cte_orders".to_string(),
        });
        assert_eq!(
            sql,
            indoc! {"
                WITH cte_orders AS (
                  SELECT * FROM orders WHERE total > 100
                )
                SELECT count(*) FROM cte_orders;"}
        );

        let empty = SqlGenerator::generate_cte(&Cte::default());
        assert_eq!(
            empty,
            "WITH /* cte name */ AS (\n  /* cte query */\n)\n/* main query */;"
        );
    }

    #[test]
    fn test_custom_query_is_identity() {
        let text = "SELECT 1;\n-- trailing comment\n";
        assert_eq!(SqlGenerator::generate_custom(&CustomQuery::new(text)), text);
        assert_eq!(
            SqlGenerator::generate_custom(&CustomQuery::default()),
            "-- Enter your custom SQL query here"
        );
    }
}
