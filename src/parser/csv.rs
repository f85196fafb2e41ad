//! Loader for comma-delimited table files

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Column, Table};

/// Load a headered CSV file into a Table. Cell values are kept verbatim;
/// trimming happens only where keys are compared.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => {
            return Err(Error::FileRead {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    read_csv(BufReader::new(file), path)
}

/// Load a headered CSV from a string (useful for testing)
pub fn load_csv_str(content: &str, source_name: impl AsRef<Path>) -> Result<Table> {
    read_csv(content.as_bytes(), source_name.as_ref())
}

fn read_csv<R: Read>(reader: R, path: &Path) -> Result<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?
        .clone();

    let columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| Column::new(name.to_string(), i))
        .collect();

    if columns.is_empty() {
        return Err(Error::Decode {
            path: path.to_path_buf(),
            message: "no header row found".to_string(),
        });
    }

    let mut table = Table::new(columns, path);

    for (line_num, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;

        let cells: Vec<String> = record.iter().map(str::to_string).collect();
        table.push_row(cells, line_num + 2); // +2 for 1-indexing and header
    }

    Ok(table)
}
