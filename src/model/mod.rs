pub mod digest;
pub mod package_db;
pub mod report;

pub use digest::{Algorithm, Digest, DigestError};
pub use package_db::{parse_package_db, SourceType};
pub use report::{
    Contents, Distribution, Environment, EnvironmentList, IndexReport, NormalizedVersion, Package,
    Repository,
};
