mod helpers;
pub use helpers::*;

mod entry;
pub use entry::Entry;

mod instance;
pub use instance::Instance;

mod ext;
pub use ext::*;
