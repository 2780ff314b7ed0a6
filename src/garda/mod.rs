use encoding_rs::WINDOWS_1252;
use encoding_rs_io::DecodeReaderBytesBuilder;
use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, Read},
};
use thiserror::Error;

mod config;
pub mod models;
pub use config::*;
pub use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

/// Reads the two Garda exports row by row.
#[derive(Default)]
pub struct GardaReader {
    config: Config,
}

impl GardaReader {
    pub fn new(config: self::Config) -> Self {
        Self { config }
    }

    /// Stream the coordinate table: name, latitude, longitude, no header
    /// row.
    pub fn stream_locations<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, GardaLocationRow)),
    {
        let file = open_source(&self.config.locations_path)?;
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(file);
        stream_rows(reader, f)
    }

    /// Stream the attribute table. The export is ISO-8859-1 encoded, so the
    /// bytes are decoded before they reach the csv reader. Station names
    /// carry fadas that would otherwise come out mangled.
    pub fn stream_stations<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, GardaStationRow)),
    {
        let file = open_source(&self.config.stations_path)?;
        // The Encoding Standard folds the iso-8859-1 label into windows-1252.
        let decoder = DecodeReaderBytesBuilder::new()
            .encoding(Some(WINDOWS_1252))
            .build(file);
        let reader = csv::Reader::from_reader(decoder);
        stream_rows(reader, f)
    }
}

fn open_source(path: &str) -> Result<File, self::Error> {
    match File::open(path) {
        Ok(file) => Ok(file),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(self::Error::FileNotFound(path.to_string()))
        }
        Err(err) => Err(err.into()),
    }
}

fn stream_rows<R, T, F>(mut reader: csv::Reader<R>, mut f: F) -> Result<(), self::Error>
where
    R: Read,
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    for (i, result) in reader.deserialize().enumerate() {
        let row: T = result?;
        f((i, row));
    }
    Ok(())
}
