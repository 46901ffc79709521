/// Data Transfer Objects for application layer
///
/// DTOs carry requests into the use cases and the views they return,
/// keeping the CLI adapter independent of the domain internals.
mod info_view;
mod init_request;
mod package_listing;

pub use info_view::InfoView;
pub use init_request::InitRequest;
pub use package_listing::PackageListing;
