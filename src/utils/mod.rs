/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
/// Environment variable helpers
pub mod config;
/// Logging setup
pub mod logger;
