//! Rendering for `--output`: tabled tables, serde JSON/YAML, and a
//! plain mode that prints one key per line for scripting.

use std::io::{self, IsTerminal, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;

/// Table row and plain-mode key for a value that appears in lists.
pub trait Listed: serde::Serialize {
    type Row: Tabled;

    fn row(&self) -> Self::Row;

    /// What `--output plain` prints, one per line.
    fn key(&self) -> String;
}

pub fn render_list<T: Listed>(format: OutputFormat, items: &[&T]) -> String {
    match format {
        OutputFormat::Table => {
            let rows: Vec<T::Row> = items.iter().map(|item| item.row()).collect();
            table(&rows)
        }
        OutputFormat::Json => json(items, false),
        OutputFormat::JsonCompact => json(items, true),
        OutputFormat::Yaml => yaml(items),
        OutputFormat::Plain => items
            .iter()
            .map(|item| item.key())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Single-value rendering. The table and plain forms are built lazily so
/// JSON and YAML modes never pay for them.
pub fn render_one<T: serde::Serialize>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce() -> String,
    key: impl FnOnce() -> String,
) -> String {
    match format {
        OutputFormat::Table => table(),
        OutputFormat::Json => json(value, false),
        OutputFormat::JsonCompact => json(value, true),
        OutputFormat::Yaml => yaml(value),
        OutputFormat::Plain => key(),
    }
}

/// Write to stdout. A closed pipe is not an error worth reporting.
pub fn emit(rendered: &str) {
    if rendered.is_empty() {
        return;
    }
    let _ = writeln!(io::stdout().lock(), "{rendered}");
}

/// Whether the stderr summary lines may use color. `--no-color`, a piped
/// stderr, or the NO_COLOR convention each switch it off.
pub fn should_color(no_color: bool) -> bool {
    !no_color && io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err()
}

fn table<R: Tabled>(rows: &[R]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

fn json<T: serde::Serialize + ?Sized>(value: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.expect("value serializes")
}

fn yaml<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_yaml::to_string(value).expect("value serializes")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::*;

    #[derive(Serialize)]
    struct Item {
        id: String,
        n: u32,
    }

    #[derive(Tabled)]
    struct ItemRow {
        #[tabled(rename = "ID")]
        id: String,
    }

    impl Listed for Item {
        type Row = ItemRow;

        fn row(&self) -> ItemRow {
            ItemRow {
                id: self.id.clone(),
            }
        }

        fn key(&self) -> String {
            self.id.clone()
        }
    }

    #[test]
    fn plain_lists_one_key_per_line() {
        let a = Item {
            id: "a".into(),
            n: 1,
        };
        let b = Item {
            id: "b".into(),
            n: 2,
        };
        let out = render_list(OutputFormat::Plain, &[&a, &b]);
        assert_eq!(out, "a\nb");
    }

    #[test]
    fn compact_json_serializes_the_value_itself() {
        let item = Item {
            id: "a".into(),
            n: 7,
        };
        let out = render_one(
            OutputFormat::JsonCompact,
            &item,
            || unreachable!(),
            || unreachable!(),
        );
        assert_eq!(out, r#"{"id":"a","n":7}"#);
    }

    #[test]
    fn table_mode_defers_to_the_caller() {
        let item = Item {
            id: "a".into(),
            n: 7,
        };
        let out = render_one(
            OutputFormat::Table,
            &item,
            || "detail block".to_owned(),
            || unreachable!(),
        );
        assert_eq!(out, "detail block");
    }
}
