pub mod consent;

pub use consent::{ConsentChoice, UpdateConsentRequest};
