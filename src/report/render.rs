use crate::object::TestGen;
use crate::report::variant::{Field, OutputFormat, ReportVariant};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode report line: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Int(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Int(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: FieldValue,
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

fn field_value(obj: &TestGen, field: Field) -> FieldValue {
    match field {
        Field::Name => FieldValue::Text(obj.myname().to_string()),
        Field::Id => FieldValue::Int(obj.id()),
        Field::Input1S => FieldValue::Int(obj.input1_s()),
        Field::TestInt => FieldValue::Int(obj.test_int()),
        Field::SleepMsec => FieldValue::Int(obj.sleep_msec().as_millis() as i64),
    }
}

/// Reads the variant's fields from the object, in output order.
pub fn render(obj: &TestGen, variant: ReportVariant) -> Vec<ReportLine> {
    variant
        .fields()
        .iter()
        .map(|&field| ReportLine {
            label: field.label(),
            value: field_value(obj, field),
        })
        .collect()
}

pub fn write_report<W: Write>(
    out: &mut W,
    obj: &TestGen,
    variant: ReportVariant,
    format: OutputFormat,
) -> Result<(), ReportError> {
    for line in render(obj, variant) {
        match format {
            OutputFormat::Text => writeln!(out, "{}", line)?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&line)?)?,
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_format() {
        let line = ReportLine {
            label: "Name",
            value: FieldValue::Text("TestProc1".to_string()),
        };
        assert_eq!(line.to_string(), "Name: TestProc1");

        let line = ReportLine {
            label: "ID",
            value: FieldValue::Int(-1),
        };
        assert_eq!(line.to_string(), "ID: -1");
    }

    #[test]
    fn test_json_line() {
        let line = ReportLine {
            label: "TestInt",
            value: FieldValue::Int(100),
        };
        assert_eq!(
            serde_json::to_string(&line).unwrap(),
            r#"{"label":"TestInt","value":100}"#
        );
    }
}
