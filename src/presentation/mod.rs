/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Wire-format models for the payment gateway API.
//!
//! Each raw struct mirrors the exact JSON shape the gateway exchanges, with
//! explicit field-by-field conversions to and from the domain models. Two
//! payloads (card tokenization and customer attachment) mix camelCase and
//! snake_case field names within the same object; this is the gateway's
//! contract and is reproduced exactly, never normalized.

/// Card tokenization wire models
pub mod card;
/// PIX dynamic QR-code wire models
pub mod pix;
/// Transaction lifecycle wire models
pub mod transaction;
