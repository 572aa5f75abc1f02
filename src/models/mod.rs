pub mod key_phrase;
pub mod question;
pub mod result;

pub use key_phrase::KeyPhrase;
pub use question::{QuestionCategory, QuestionKind, QuestionRecord};
pub use result::{GenerationResponse, GenerationResult, KEY_PHRASES_KEY};
