use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonebookError {
    #[error("Incorrect phone number")]
    InvalidPhone(String),

    #[error("Insufficient parameters")]
    ArgumentCount { expected: usize, got: usize },

    #[error("Not found")]
    MissingArgument,

    #[error("No such name found")]
    NameNotFound(String),

    #[error("Contact {0} already exists")]
    DuplicateName(String),

    #[error("Phone {phone} is already recorded for {name}")]
    DuplicatePhone { name: String, phone: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PhonebookError>;
