pub mod mock_exchanger;

pub use mock_exchanger::{resolver, MockDnsExchanger};
