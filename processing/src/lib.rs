pub mod error;
pub mod executable_utils;
pub mod importer;
pub mod model;
pub mod scorers;
pub mod storage;
