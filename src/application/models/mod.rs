/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
/// Card tokenization models
pub mod card;
/// PIX dynamic QR-code models
pub mod pix;
/// Transaction lifecycle models
pub mod transaction;
