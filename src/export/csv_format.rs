//! `;`-delimited CSV rendering for export record sets.

use std::borrow::Cow;
use std::collections::HashSet;

use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};
use serde_json::Value;

use super::{ExportError, Record};

/// Field delimiter of exported CSV files.
pub const DELIMITER: char = ';';

/// Which columns an export writes, and in what order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Columns {
    /// The keys of the first record, in its key order. Keys missing from a
    /// later record become empty fields; keys only a later record has are
    /// left out.
    #[default]
    FirstRecord,
    /// Every key of every record, in order of first appearance.
    Union,
    /// Exactly these columns.
    Explicit(Vec<String>),
}

impl Columns {
    /// Resolves the header row for `records`.
    pub fn resolve(&self, records: &[Record]) -> Vec<String> {
        match self {
            Columns::FirstRecord => records
                .first()
                .map(|record| record.keys().cloned().collect())
                .unwrap_or_default(),
            Columns::Union => {
                let mut seen = HashSet::new();
                let mut columns = Vec::new();
                for key in records.iter().flat_map(|record| record.keys()) {
                    if seen.insert(key.as_str()) {
                        columns.push(key.clone());
                    }
                }
                columns
            }
            Columns::Explicit(names) => names.clone(),
        }
    }
}

/// Renders the header row and one row per record, each ending in `\n`.
///
/// String fields containing the delimiter are wrapped in double quotes,
/// with no further escaping. Everything else is written as is.
pub fn render_csv(records: &[Record], columns: &Columns) -> Result<String, ExportError> {
    let columns = columns.resolve(records);

    if columns.is_empty() {
        // Nothing to delimit: one empty line for the header and each record
        return Ok("\n".repeat(records.len() + 1));
    }

    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER as u8)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let header: Vec<Cow<'_, str>> = columns.iter().map(|c| Cow::Borrowed(c.as_str())).collect();
    write_row(&mut writer, &header)?;
    for record in records {
        let fields: Vec<_> = columns
            .iter()
            .map(|column| render_field(record.get(column)))
            .collect();
        write_row(&mut writer, &fields)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

fn write_row(writer: &mut Writer<Vec<u8>>, fields: &[Cow<'_, str>]) -> Result<(), ExportError> {
    // The writer frames a lone empty field as `""`; the row must stay blank
    if let [only] = fields {
        if only.is_empty() {
            writer.flush().map_err(csv::Error::from)?;
            writer.get_mut().push(b'\n');
            return Ok(());
        }
    }

    writer.write_record(fields.iter().map(|field| field.as_bytes()))?;
    Ok(())
}

/// Renders one field value.
pub fn render_field(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) if s.contains(DELIMITER) => Cow::Owned(format!("\"{s}\"")),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(Value::Bool(b)) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Some(Value::Number(n)) => Cow::Owned(match n.as_f64() {
            Some(f) if !n.is_i64() && !n.is_u64() => format_float(f),
            _ => n.to_string(),
        }),
        Some(other) => Cow::Owned(other.to_string()),
    }
}

/// Prints a float the way a browser's `String(number)` does: plain decimal
/// for magnitudes in `[1e-6, 1e21)`, shortest exponent form otherwise, and
/// `0` for both zeros. Integral values print without a fractional part.
fn format_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }

    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_header_follows_first_record_key_order() {
        let rows = records(json!([
            {"matricula": "2021001", "nome": "Ana", "debito": 8.0},
            {"matricula": "2021002", "nome": "Bruno", "debito": 0}
        ]));

        let csv = render_csv(&rows, &Columns::FirstRecord).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("matricula;nome;debito"));
        assert_eq!(lines.next(), Some("2021001;Ana;8"));
        assert_eq!(lines.next(), Some("2021002;Bruno;0"));
        assert_eq!(lines.next(), None);
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn test_only_strings_with_delimiter_are_quoted() {
        let rows = records(json!([
            {"refeicao": "Almoço; Jantar", "obs": "sem \"aspas\"", "valor": 3.5}
        ]));

        let csv = render_csv(&rows, &Columns::FirstRecord).unwrap();
        assert_eq!(
            csv.lines().nth(1),
            Some("\"Almoço; Jantar\";sem \"aspas\";3.5")
        );
    }

    #[test]
    fn test_missing_and_null_fields_are_empty() {
        let rows = records(json!([
            {"a": 1, "b": null},
            {"a": 2}
        ]));

        let csv = render_csv(&rows, &Columns::FirstRecord).unwrap();
        assert_eq!(csv, "a;b\n1;\n2;\n");
    }

    #[test]
    fn test_first_record_ignores_extra_keys() {
        let rows = records(json!([
            {"a": 1},
            {"a": 2, "b": 3}
        ]));

        let csv = render_csv(&rows, &Columns::FirstRecord).unwrap();
        assert_eq!(csv, "a\n1\n2\n");
    }

    #[test]
    fn test_union_columns_in_first_appearance_order() {
        let rows = records(json!([
            {"a": 1, "c": 2},
            {"b": 3, "a": 4}
        ]));

        assert_eq!(Columns::Union.resolve(&rows), ["a", "c", "b"]);
        let csv = render_csv(&rows, &Columns::Union).unwrap();
        assert_eq!(csv, "a;c;b\n1;2;\n4;;3\n");
    }

    #[test]
    fn test_explicit_columns() {
        let rows = records(json!([{"a": 1, "b": 2}]));

        let columns = Columns::Explicit(vec!["b".to_string(), "z".to_string()]);
        let csv = render_csv(&rows, &columns).unwrap();
        assert_eq!(csv, "b;z\n2;\n");
    }

    #[test]
    fn test_booleans_and_nested_values() {
        assert_eq!(render_field(Some(&json!(true))), "true");
        assert_eq!(render_field(Some(&json!([1, 2]))), "[1,2]");
        assert_eq!(render_field(Some(&json!(-4))), "-4");
        assert_eq!(render_field(Some(&json!(0.1))), "0.1");
    }

    #[test]
    fn test_single_column_empty_fields_stay_blank() {
        let rows = records(json!([{"a": null}, {"a": ""}]));
        let csv = render_csv(&rows, &Columns::FirstRecord).unwrap();
        assert_eq!(csv, "a\n\n\n");

        let rows = records(json!([{"a": null}, {"a": ""}, {"a": "x"}]));
        let csv = render_csv(&rows, &Columns::FirstRecord).unwrap();
        assert_eq!(csv, "a\n\n\nx\n");
    }

    #[test]
    fn test_explicit_single_missing_column_is_blank() {
        let rows = records(json!([{"a": 1}]));
        let csv = render_csv(&rows, &Columns::Explicit(vec!["z".to_string()])).unwrap();
        assert_eq!(csv, "z\n\n");
    }

    #[test]
    fn test_multi_column_empty_fields_keep_delimiters() {
        let rows = records(json!([{"a": null, "b": ""}]));
        let csv = render_csv(&rows, &Columns::FirstRecord).unwrap();
        assert_eq!(csv, "a;b\n;\n");
    }

    #[test]
    fn test_floats_print_like_browser_numbers() {
        assert_eq!(render_field(Some(&json!(8.0))), "8");
        assert_eq!(render_field(Some(&json!(1e21))), "1e+21");
        assert_eq!(render_field(Some(&json!(2.5e22))), "2.5e+22");
        assert_eq!(render_field(Some(&json!(1e20))), "100000000000000000000");
        assert_eq!(render_field(Some(&json!(1e-7))), "1e-7");
        assert_eq!(render_field(Some(&json!(1.5e-7))), "1.5e-7");
        assert_eq!(render_field(Some(&json!(0.000001))), "0.000001");
        assert_eq!(render_field(Some(&json!(-0.0))), "0");
    }

    #[test]
    fn test_record_without_keys() {
        let rows = records(json!([{}, {}]));
        let csv = render_csv(&rows, &Columns::FirstRecord).unwrap();
        assert_eq!(csv, "\n\n\n");
    }
}
