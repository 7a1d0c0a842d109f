// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schema parity between the `SQLite` and `MySQL` migration sets.
//!
//! Both sets are applied to empty databases and introspected into the same
//! shape: per table, each column's type class and nullability plus the set of
//! foreign keys. Type names are folded into classes first, since the two
//! engines spell the same storage differently.

use std::collections::{BTreeMap, BTreeSet};

use color_eyre::{eyre::Context, Result};
use diesel::sql_types::{Integer, Text};
use diesel::{Connection, MysqlConnection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

const SQLITE_MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");
const MYSQL_MIGRATIONS: EmbeddedMigrations =
    embed_migrations!("../crates/persistence/migrations_mysql");

/// Table name to table shape.
pub type Schema = BTreeMap<String, TableShape>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableShape {
    pub columns: BTreeMap<String, ColumnShape>,
    pub foreign_keys: BTreeSet<ForeignKey>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnShape {
    pub type_class: TypeClass,
    pub nullable: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeClass {
    Integer,
    Real,
    Text,
    Blob,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ForeignKey {
    pub column: String,
    pub target_table: String,
    pub target_column: String,
}

impl TypeClass {
    /// Folds a declared `SQLite` type using its affinity rules.
    pub fn from_sqlite(declared: &str) -> Self {
        let upper = declared.to_uppercase();
        if upper.contains("INT") {
            Self::Integer
        } else if upper.contains("REAL") || upper.contains("FLOA") || upper.contains("DOUB") {
            Self::Real
        } else if upper.contains("BLOB") {
            Self::Blob
        } else {
            Self::Text
        }
    }

    /// Folds an `information_schema.columns.data_type` value.
    pub fn from_mysql(data_type: &str) -> Self {
        match data_type.to_uppercase().as_str() {
            "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => Self::Integer,
            "DECIMAL" | "NUMERIC" | "FLOAT" | "DOUBLE" | "REAL" => Self::Real,
            "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => {
                Self::Blob
            }
            _ => Self::Text,
        }
    }
}

/// Applies the `SQLite` migrations to an in-memory database and introspects it.
pub fn migrated_sqlite_schema() -> Result<Schema> {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    #[derive(QueryableByName)]
    struct ColumnRow {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    #[derive(QueryableByName)]
    struct ForeignKeyRow {
        #[diesel(sql_type = Text)]
        table: String,
        #[diesel(sql_type = Text)]
        from: String,
        #[diesel(sql_type = Text)]
        to: String,
    }

    let mut conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;
    conn.run_pending_migrations(SQLITE_MIGRATIONS)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to apply SQLite migrations: {e}"))?;
    tracing::info!("SQLite migrations applied");

    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT name FROM sqlite_master WHERE type = 'table' \
         AND name NOT LIKE 'sqlite_%' AND name != '__diesel_schema_migrations'",
    )
    .load(&mut conn)
    .wrap_err("Failed to list SQLite tables")?;

    let mut schema = Schema::new();
    for table in tables {
        let mut shape = TableShape::default();

        let columns: Vec<ColumnRow> = diesel::sql_query(format!("PRAGMA table_info({})", table.name))
            .load(&mut conn)
            .wrap_err_with(|| format!("Failed to read columns of {}", table.name))?;
        for column in columns {
            // INTEGER PRIMARY KEY is an implicit NOT NULL rowid alias
            let nullable: bool = column.notnull == 0 && column.pk == 0;
            shape.columns.insert(
                column.name,
                ColumnShape {
                    type_class: TypeClass::from_sqlite(&column.r#type),
                    nullable,
                },
            );
        }

        let foreign_keys: Vec<ForeignKeyRow> =
            diesel::sql_query(format!("PRAGMA foreign_key_list({})", table.name))
                .load(&mut conn)
                .wrap_err_with(|| format!("Failed to read foreign keys of {}", table.name))?;
        shape.foreign_keys = foreign_keys
            .into_iter()
            .map(|fk| ForeignKey {
                column: fk.from,
                target_table: fk.table,
                target_column: fk.to,
            })
            .collect();

        schema.insert(table.name, shape);
    }

    Ok(schema)
}

/// Applies the `MySQL` migrations to `database` and introspects it.
pub fn migrated_mysql_schema(database_url: &str, database: &str) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct ColumnRow {
        #[diesel(sql_type = Text)]
        table_name: String,
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = Text)]
        data_type: String,
        #[diesel(sql_type = Text)]
        is_nullable: String,
    }

    #[derive(QueryableByName)]
    #[allow(clippy::struct_field_names)]
    struct ForeignKeyRow {
        #[diesel(sql_type = Text)]
        table_name: String,
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = Text)]
        referenced_table_name: String,
        #[diesel(sql_type = Text)]
        referenced_column_name: String,
    }

    let mut conn =
        MysqlConnection::establish(database_url).wrap_err("Failed to connect to MariaDB")?;
    conn.run_pending_migrations(MYSQL_MIGRATIONS)
        .map_err(|e| color_eyre::eyre::eyre!("Failed to apply MySQL migrations: {e}"))?;
    tracing::info!("MySQL migrations applied");

    let columns: Vec<ColumnRow> = diesel::sql_query(
        "SELECT table_name, column_name, data_type, is_nullable \
         FROM information_schema.columns \
         WHERE table_schema = ? AND table_name != '__diesel_schema_migrations'",
    )
    .bind::<Text, _>(database)
    .load(&mut conn)
    .wrap_err("Failed to read MySQL columns")?;

    let mut schema = Schema::new();
    for column in columns {
        schema.entry(column.table_name).or_default().columns.insert(
            column.column_name,
            ColumnShape {
                type_class: TypeClass::from_mysql(&column.data_type),
                nullable: column.is_nullable == "YES",
            },
        );
    }

    let foreign_keys: Vec<ForeignKeyRow> = diesel::sql_query(
        "SELECT table_name, column_name, referenced_table_name, referenced_column_name \
         FROM information_schema.key_column_usage \
         WHERE table_schema = ? AND referenced_table_name IS NOT NULL",
    )
    .bind::<Text, _>(database)
    .load(&mut conn)
    .wrap_err("Failed to read MySQL foreign keys")?;

    for fk in foreign_keys {
        schema
            .entry(fk.table_name)
            .or_default()
            .foreign_keys
            .insert(ForeignKey {
                column: fk.column_name,
                target_table: fk.referenced_table_name,
                target_column: fk.referenced_column_name,
            });
    }

    Ok(schema)
}

/// Lists every difference between the two schemas, one line each.
pub fn diff_schemas(sqlite: &Schema, mysql: &Schema) -> Vec<String> {
    let mut mismatches: Vec<String> = Vec::new();

    for name in sqlite.keys().filter(|name| !mysql.contains_key(*name)) {
        mismatches.push(format!("  - table '{name}' only exists in SQLite"));
    }
    for name in mysql.keys().filter(|name| !sqlite.contains_key(*name)) {
        mismatches.push(format!("  - table '{name}' only exists in MySQL"));
    }

    for (name, lite) in sqlite {
        let Some(my) = mysql.get(name) else {
            continue;
        };

        for (column, lite_col) in &lite.columns {
            match my.columns.get(column) {
                None => mismatches.push(format!("  - {name}.{column} only exists in SQLite")),
                Some(my_col) if my_col.type_class != lite_col.type_class => {
                    mismatches.push(format!(
                        "  - {name}.{column} is {:?} in SQLite but {:?} in MySQL",
                        lite_col.type_class, my_col.type_class
                    ));
                }
                Some(my_col) if my_col.nullable != lite_col.nullable => {
                    mismatches.push(format!(
                        "  - {name}.{column} nullable is {} in SQLite but {} in MySQL",
                        lite_col.nullable, my_col.nullable
                    ));
                }
                Some(_) => {}
            }
        }
        for column in my.columns.keys().filter(|c| !lite.columns.contains_key(*c)) {
            mismatches.push(format!("  - {name}.{column} only exists in MySQL"));
        }

        for fk in lite.foreign_keys.symmetric_difference(&my.foreign_keys) {
            let side: &str = if lite.foreign_keys.contains(fk) {
                "SQLite"
            } else {
                "MySQL"
            };
            mismatches.push(format!(
                "  - {name}.{} -> {}.{} only exists in {side}",
                fk.column, fk.target_table, fk.target_column
            ));
        }
    }

    mismatches
}
