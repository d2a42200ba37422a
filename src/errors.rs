use fractic_server_error::define_client_error;

// IO-related.
define_client_error!(ReadError, "Error reading file.");
define_client_error!(
    UnsupportedFormat,
    "Unsupported record file '{path}'. Expected a .json or .csv file.",
    { path: &str }
);

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidJson, "Invalid JSON record window.");
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(
    MissingColumn,
    "CSV record window is missing required column '{column}'.",
    { column: &str }
);
define_client_error!(
    InvalidLineNumber,
    "Invalid line number: '{value}'. Line numbers must be positive integers.",
    { value: &str }
);

