use crate::{ExportError, Milestone};

/// Header row of the CSV export, in [`Milestone`] field order.
pub const CSV_HEADERS: [&str; 7] = [
    "id",
    "number",
    "title",
    "planned_month",
    "actual_month",
    "progress_percent",
    "category",
];

/// Encodes `milestones` as UTF-8 CSV, one row per milestone in the given
/// order. Fields holding commas, quotes or line breaks are quoted, and a
/// missing actual month is an empty field.
///
/// The header row is written even when there are no milestones.
pub fn encode_csv(milestones: &[Milestone]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADERS)?;
    for milestone in milestones {
        writer.serialize(milestone)?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    tracing::debug!(
        rows = milestones.len(),
        bytes = bytes.len(),
        "encoded milestone csv"
    );
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_for_empty_input() {
        let csv = encode_csv(&[]).unwrap();
        assert_eq!(
            csv.trim_end(),
            "id,number,title,planned_month,actual_month,progress_percent,category"
        );
    }

    #[test]
    fn missing_actual_month_is_empty_field() {
        let csv = encode_csv(&[Milestone::new(1, "Bombas", 13, "Otros")]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "1,1,Bombas,13,,0,Otros");
    }

    #[test]
    fn quotes_fields_with_separators() {
        let milestone = Milestone::new(35, "Puertas piso P 2, P3 y closet", 12, "Estructura")
            .with_actual_month(12)
            .with_progress(100);
        let csv = encode_csv(&[milestone]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, r#"35,35,"Puertas piso P 2, P3 y closet",12,12,100,Estructura"#);
    }

    #[test]
    fn escapes_embedded_quotes() {
        let csv = encode_csv(&[Milestone::new(1, r#"Viga "I""#, 8, "Otros")]).unwrap();
        assert!(csv.contains(r#""Viga ""I""""#));
    }

    #[test]
    fn keeps_accented_text() {
        let csv = encode_csv(&[Milestone::new(2, "Construcción de cimentación", 2, "Excavación y Cimentación")])
            .unwrap();
        assert!(csv.contains("Construcción de cimentación"));
        assert!(csv.contains("Excavación y Cimentación"));
    }
}
