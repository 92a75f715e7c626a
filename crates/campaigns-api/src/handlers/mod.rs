//! API endpoint handlers

pub mod campaigns;
