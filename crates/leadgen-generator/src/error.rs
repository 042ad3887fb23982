use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid generation request: {0}")]
    InvalidRequest(String),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write workbook: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("failed to read workbook: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("workbook {path} has no worksheets")]
    EmptyWorkbook { path: String },
}
