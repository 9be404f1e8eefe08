// Job API: upload → store raw → extract → store structured, and retrieval.
// Model calls go through extraction; storage goes through store::JobStore.

pub mod handlers;
pub mod models;
pub mod service;
