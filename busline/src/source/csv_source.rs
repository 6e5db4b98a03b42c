use std::path::Path;

use crate::app::BuslineAppError;

/// reads line keywords from the first column of a header-less CSV file.
/// rows with an empty first column are ignored.
pub fn read_line_names_csv<P: AsRef<Path>>(file: P) -> Result<Vec<String>, BuslineAppError> {
    let path = file.as_ref();
    let filename = path.to_str().unwrap_or_default().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| BuslineAppError::LineSourceError(format!("failure reading '{filename}': {e}")))?;
    let mut names = vec![];
    for (idx, row) in reader.records().enumerate() {
        let record = row.map_err(|e| {
            BuslineAppError::LineSourceError(format!("failure reading '{filename}' row {idx}: {e}"))
        })?;
        match record.get(0) {
            Some(name) if !name.is_empty() => names.push(name.to_string()),
            _ => log::debug!("skipping empty row {idx} in '{filename}'"),
        }
    }
    log::info!("read {} line names from '{filename}'", names.len());
    Ok(names)
}

#[cfg(test)]
mod test {
    use super::read_line_names_csv;

    #[test]
    fn test_first_column_without_header() {
        let dir = std::env::temp_dir().join(format!("busline-csv-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("lines.csv");
        std::fs::write(&file, "1路,ignored\n2路\n\n 快速公交1线 ,x\n").unwrap();
        let names = read_line_names_csv(&file).unwrap();
        assert_eq!(names, vec!["1路", "2路", "快速公交1线"]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file() {
        assert!(read_line_names_csv("/nonexistent/busline/lines.csv").is_err());
    }
}
