//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitehead.toml`:
//!
//! | Module       | TOML Section          | Purpose                          |
//! |--------------|-----------------------|----------------------------------|
//! | `site`       | `[site]`              | Metadata projected into `<head>` |
//! | `data`       | `[data]`              | Icon and tutorial data sources   |
//! | `structured` | `[structured_data]`   | Optional JSON-LD script          |

mod data;
mod site;
mod structured;

pub use data::DataConfig;
pub use site::SiteConfig;
pub use structured::StructuredDataConfig;
