mod draft;

pub use draft::{RecordDraft, RecordField};
