//! Eclipse CDT project handling
//!
//! Provides the extraction pipeline behind the provider:
//! - Discovery of `.cproject` files ([`Locator`])
//! - XPath extraction of build settings ([`xpath`])
//! - Assembly of build/clean task descriptors ([`Assembler`])

pub mod assemble;
pub mod env;
pub mod fs;
pub mod locate;
pub mod matchers;
pub mod task;
pub mod xpath;

pub use assemble::{parse_configuration, Assembler};
pub use env::Environment;
pub use fs::{FileSystem, OsFileSystem};
pub use locate::{Locator, PROJECT_FILE};
pub use task::{ProjectConfiguration, TaskDescriptor, TaskRole, CLEAN_TARGET, DEFAULT_TARGET};
pub use xpath::{ExtractionOutcome, XPathField};
