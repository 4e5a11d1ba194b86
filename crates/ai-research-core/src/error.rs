use async_openai::{error::OpenAIError, types::RunStatus};
use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
    // -- Config
    NoOpenAIApiKeyInEnv,

    // -- Runs
    RunEnded(RunStatus),

    // -- Messages
    NoMessageFoundInMessages,
    NoMessageInMessageObjectContent,
    MessageImageNotSupported,

    // -- Externals
    #[from]
    OpenAI(OpenAIError),
    #[from]
    SimpleFs(simple_fs::Error),
    #[from]
    TomlDe(toml::de::Error),
}

// region:       -- Error Boilerplate

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}

// endregion:    -- Error Boilerplate
