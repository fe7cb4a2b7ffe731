use std::{fmt::Display, io::Error as IOError};
use serde_json::Error as JsonError;

pub type ChartResult<T=()> = Result<T, ChartError>;

#[derive(Debug)]
pub enum ChartError {
    IO(IOError),
    Serde(JsonError),
    String(String),
}
impl Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::IO(e) => write!(f, "{}", e),
            Self::Serde(e) => write!(f, "{:?}", e),
            Self::String(e) => write!(f, "{:?}", e),
        }
    }
}
impl std::error::Error for ChartError {}

impl From<JsonError> for ChartError {
    fn from(e: JsonError) -> Self {Self::Serde(e)}
}
impl From<IOError> for ChartError {
    fn from(e: IOError) -> Self {Self::IO(e)}
}
impl From<String> for ChartError {
    fn from(e: String) -> Self {Self::String(e)}
}
impl From<&str> for ChartError {
    fn from(e: &str) -> Self {Self::String(e.to_owned())}
}
