mod store;

pub use store::{save_quiz, JsonFileStore, MemoryStore, QuizStore, StoreError, DEFAULT_STORE_PATH};
