pub mod key_import;

pub use key_import::{ImportResult, ImportStrategy, KeyImportService, KeyringController};
