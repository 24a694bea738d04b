use std::path::Path;

use endo_measure_core::FinalizedRecord;

/// One export row as ordered `(column, value)` pairs.
///
/// Column order is fixed: the identification prefix, then one column per
/// observation, then `<Site>_X`/`<Site>_Y` per site in registry order.
#[derive(Clone, Debug)]
pub struct MeasurementRow {
    columns: Vec<(String, String)>,
}

impl MeasurementRow {
    pub fn from_record(record: &FinalizedRecord, source_image: &Path) -> Self {
        let mut columns = vec![
            ("File".to_owned(), source_image.display().to_string()),
            ("Timestamp".to_owned(), record.timestamp.clone()),
            ("Operator".to_owned(), record.operator.clone()),
            ("Quadrant".to_owned(), record.quadrant.number().to_string()),
            ("Tooth".to_owned(), record.tooth.as_str().to_owned()),
            ("Root".to_owned(), record.root.as_str().to_owned()),
            ("Comments".to_owned(), record.comments.clone()),
        ];

        for (name, value) in &record.observations {
            columns.push((name.clone(), value.clone()));
        }

        for (name, point) in &record.sites {
            columns.push((format!("{name}_X"), format_coord(point.x)));
            columns.push((format!("{name}_Y"), format_coord(point.y)));
        }

        Self { columns }
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    /// Header line for a fresh file, matching this row's columns.
    pub fn header_line(&self, separator: char) -> String {
        join_fields(self.columns.iter().map(|(c, _)| c.as_str()), separator)
    }

    pub fn data_line(&self, separator: char) -> String {
        join_fields(self.columns.iter().map(|(_, v)| v.as_str()), separator)
    }
}

fn join_fields<'a>(fields: impl Iterator<Item = &'a str>, separator: char) -> String {
    fields
        .map(|f| sanitize_field(f, separator))
        .collect::<Vec<_>>()
        .join(&separator.to_string())
}

/// Keep one record on one line: the separator and line breaks embedded in
/// free-text fields (comments, operator names) become spaces.
fn sanitize_field(field: &str, separator: char) -> String {
    field
        .chars()
        .map(|c| if c == separator || c == '\n' || c == '\r' { ' ' } else { c })
        .collect()
}

fn format_coord(value: f32) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use endo_measure_core::{ImageType, Quadrant, RootName, Tooth};
    use nalgebra::Point2;
    use std::path::PathBuf;

    fn record() -> FinalizedRecord {
        FinalizedRecord {
            operator: "GT".to_owned(),
            quadrant: Quadrant::UpperLeft,
            tooth: Tooth::FirstMolar,
            root: RootName::MesioBuccal,
            image_type: ImageType::Preop,
            timestamp: "2026-08-06 09:30:00".to_owned(),
            observations: vec![("PAI".to_owned(), "1".to_owned())],
            sites: vec![
                ("Apex".to_owned(), Point2::new(10.0, 20.0)),
                ("CEJ M".to_owned(), Point2::new(33.5, 71.25)),
            ],
            comments: String::new(),
        }
    }

    #[test]
    fn columns_follow_the_fixed_order() {
        let row = MeasurementRow::from_record(&record(), &PathBuf::from("/data/img.png"));
        let header = row.header_line(';');
        assert_eq!(
            header,
            "File;Timestamp;Operator;Quadrant;Tooth;Root;Comments;PAI;Apex_X;Apex_Y;CEJ M_X;CEJ M_Y"
        );
    }

    #[test]
    fn data_line_carries_coordinates_and_observations() {
        let row = MeasurementRow::from_record(&record(), &PathBuf::from("/data/img.png"));
        let data = row.data_line(';');
        assert_eq!(
            data,
            "/data/img.png;2026-08-06 09:30:00;GT;2;6;MB;;1;10;20;33.5;71.25"
        );
    }

    #[test]
    fn separator_in_comments_does_not_split_the_row() {
        let mut rec = record();
        rec.comments = "distal; canal\ncalcified".to_owned();
        let row = MeasurementRow::from_record(&rec, &PathBuf::from("img.png"));
        let data = row.data_line(';');
        assert_eq!(data.lines().count(), 1);
        assert!(data.contains("distal  canal calcified"));
    }
}
