pub mod document;
pub mod field;
pub mod package_id;
pub mod package_info;
pub mod package_node;

pub use document::SbomDocument;
pub use field::Field;
pub use package_id::PackageId;
pub use package_info::PackageInfo;
pub use package_node::{PackageMap, PackageNode};
