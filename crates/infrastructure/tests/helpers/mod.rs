pub mod dns_server_mock;

pub use dns_server_mock::{mx_record, reply_to, tlsa_record, txt_record, txt_record_bytes, MockDnsServer};
