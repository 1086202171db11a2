pub mod field;
pub mod form;
pub mod job;

pub use field::FieldBuffer;
pub use form::{Form, FormField};
pub use job::{JobId, JobKind, JobSeq, JobState, Jobs};
