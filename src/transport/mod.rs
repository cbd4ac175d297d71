/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
/// HTTP client with bearer-token attachment and single-retry on 401
pub mod http_client;
