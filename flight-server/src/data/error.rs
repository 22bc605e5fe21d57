//! Dataset loading error types.

/// Errors reading the flat record files at startup.
///
/// Individual unusable rows are not errors (the datasets are known to be
/// messy); these cover an unreadable file or record stream.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The file could not be opened or the record stream was unreadable.
    #[error("failed to read {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

impl DataError {
    pub(crate) fn csv(path: &std::path::Path, source: csv::Error) -> Self {
        DataError::Csv {
            path: path.display().to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_the_file() {
        let err = super::super::load_airports("/no/such/file.dat").unwrap_err();
        let DataError::Csv { path, .. } = &err;
        assert_eq!(path, "/no/such/file.dat");
        assert!(err.to_string().contains("/no/such/file.dat"));
    }
}
