mod email;
mod greatmail_client;

pub use email::Email;
pub use greatmail_client::{EmailClient, GREATMAIL_SEND_URL};
