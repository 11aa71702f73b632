use super::domain::AssessmentInput;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum AssessmentImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for AssessmentImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentImportError::Io(err) => {
                write!(f, "failed to read questionnaire export: {}", err)
            }
            AssessmentImportError::Csv(err) => {
                write!(f, "invalid questionnaire CSV data: {}", err)
            }
        }
    }
}

impl std::error::Error for AssessmentImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssessmentImportError::Io(err) => Some(err),
            AssessmentImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for AssessmentImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for AssessmentImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads answer sets from a questionnaire CSV export whose headers use the wire names.
pub struct AssessmentCsvImporter;

impl AssessmentCsvImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<AssessmentInput>, AssessmentImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<AssessmentInput>, AssessmentImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut inputs = Vec::new();
        for record in csv_reader.deserialize::<AssessmentInput>() {
            inputs.push(record?);
        }

        tracing::debug!(rows = inputs.len(), "imported questionnaire rows");
        Ok(inputs)
    }
}
