use libloading::Error as LibloadingError;

#[derive(Debug)]
pub enum Error {
    LibraryLoading(LibloadingError),
    MissingEntryPoint(&'static str),
}

impl ::std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LibraryLoading(e) => write!(f, "Library loading error: {:?}", e),
            Self::MissingEntryPoint(name) => write!(f, "The vulkan loader does not expose {name}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LibraryLoading(e) => Some(e),
            Self::MissingEntryPoint(_) => None,
        }
    }
}
