use crate::shared::error::AppError;

/// An uploaded tabular file decoded into a header row plus ordered records.
///
/// Fields are addressed by column name, case-insensitively; callers resolve a
/// column index once with [`Table::require_column`] and read records through
/// it. Parsing is strict: every record must match the header's arity.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Vec<String>>,
}

impl Table {
    /// Decode `bytes` as UTF-8 CSV. The first row is the header.
    pub fn parse_csv(bytes: &[u8]) -> Result<Table, AppError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| AppError::Parse(format!("upload is not valid UTF-8: {e}")))?;
        // Strip UTF-8 BOM if present
        let text = text.trim_start_matches('\u{FEFF}');

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| AppError::Parse(format!("failed to read CSV header: {e}")))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.iter().all(|h| h.is_empty()) {
            return Err(AppError::Parse("missing header row".into()));
        }

        let mut records = Vec::new();
        for result in reader.records() {
            let record =
                result.map_err(|e| AppError::Parse(format!("malformed CSV record: {e}")))?;
            records.push(record.iter().map(|v| v.to_string()).collect());
        }

        Ok(Table { headers, records })
    }

    /// Resolve a column index by name (case-insensitive), failing with a
    /// named mapping error when the upload lacks it.
    pub fn require_column(&self, name: &str) -> Result<usize, AppError> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| AppError::Mapping(format!("required column '{name}' is missing")))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_header_and_records() {
        let table = Table::parse_csv(b"id,name,price\nRM1,Pigment,10.5\nRM2,Carrier,3\n").unwrap();
        assert_eq!(table.headers(), ["id", "name", "price"]);
        assert_eq!(table.records().len(), 2);
        assert_eq!(table.records()[1], ["RM2", "Carrier", "3"]);
    }

    #[test]
    fn test_strips_utf8_bom() {
        let table = Table::parse_csv("\u{FEFF}id,price\nRM1,2\n".as_bytes()).unwrap();
        assert_eq!(table.headers()[0], "id");
    }

    #[test]
    fn test_rejects_invalid_utf8() {
        let err = Table::parse_csv(&[0x69, 0x64, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_rejects_ragged_record() {
        let err = Table::parse_csv(b"id,name,price\nRM1,Pigment\n").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_rejects_empty_upload() {
        let err = Table::parse_csv(b"").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn test_require_column_is_case_insensitive() {
        let table = Table::parse_csv(b"RawMaterialId,Price\nRM1,2\n").unwrap();
        assert_eq!(table.require_column("rawmaterialid").unwrap(), 0);
        let err = table.require_column("rawmaterialprice").unwrap_err();
        assert!(matches!(err, AppError::Mapping(_)));
    }
}
