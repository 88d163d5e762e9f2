pub mod address_family;
pub mod droplet;
pub mod ip_version;
pub mod tag_predicate;

pub use address_family::AddressFamily;
pub use droplet::{Droplet, NetworkAttachment, Networks};
pub use ip_version::IpVersion;
pub use tag_predicate::TagPredicate;
