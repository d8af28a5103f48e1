//! # NextProp Models
//!
//! Domain models and DTOs for the NextProp API.
//!
//! Upstream payloads are loosely typed, so most models keep the fields the
//! API reasons about as typed members and carry everything else through
//! untouched in a flattened `extra` map.
//!
//! # Modules
//!
//! - [`contacts`]: CRM contacts and display-name normalization
//! - [`properties`]: Listing search parameters, listings and their reshaping
//! - [`leads`]: Lead creation payloads
//!
//! # Example
//!
//! ```ignore
//! use nextprop_models::contacts::Contact;
//!
//! let contact = Contact {
//!     first_name: Some("Ada".into()),
//!     last_name: Some("Lovelace".into()),
//!     ..Default::default()
//! };
//! assert_eq!(contact.display_name().as_deref(), Some("Ada Lovelace"));
//! ```

pub mod contacts;
pub mod leads;
pub mod properties;

// Re-export commonly used types at crate root for convenience
pub use contacts::{Contact, ContactsPage, ContactsQuery};
pub use leads::{CreateLeadDto, LEAD_SOURCE, LEAD_TYPE};
pub use properties::{
    DEFAULT_IMAGE_URL, DEFAULT_LISTINGS_API, DEFAULT_SEARCH_PROMPT, Property, PropertyAddress,
    PropertyContact, PropertySearchParams, format_price,
};
