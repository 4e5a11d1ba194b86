use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
    // -- Externals
    #[from]
    Core(ai_research_core::Error),
}

// region:       -- Error Boilerplate

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        match self {
            Error::Core(err) => write!(fmt, "{err}"),
        }
    }
}

impl std::error::Error for Error {}

// endregion:    -- Error Boilerplate
