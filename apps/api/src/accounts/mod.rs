// Account registry: sign-up and sign-in by email. There is no password model;
// an account is just an identity that interview sessions hang off.

pub mod handlers;
pub mod registry;
