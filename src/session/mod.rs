/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
/// Authentication manager and session state
pub mod auth;
/// Wire models for the authenticate endpoint
pub mod response;
