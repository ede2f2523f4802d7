//! REST API endpoint implementations.
//!
//! Each function issues exactly one HTTP request through [`send_request`]
//! and maps the response into a model type. Authentication headers are
//! installed on the `reqwest::Client` by the builders, so endpoints only
//! deal with paths, query strings and bodies.

mod folders;
mod hosts;
mod netbox;
mod request;
pub mod url_encoding;

pub use folders::{create_folder, get_folder};
pub use hosts::{create_host, delete_host, get_host, move_host, update_host_ip};
pub use netbox::{get_device, get_region, get_site};
pub use request::send_request;
pub use url_encoding::encode_path_segment;
