/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
/// High level payment gateway client
pub mod client;
/// Service traits
pub mod interfaces;
/// Domain models for the payment operations
pub mod models;
/// Service implementations
pub mod services;
