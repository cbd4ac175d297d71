/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/
/// Payment service implementation
pub mod payment_service;

pub use crate::application::interfaces::payment::PaymentService;
