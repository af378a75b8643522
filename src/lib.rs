#![doc(html_root_url = "https://docs.rs/shamir-recover/0.1.0")]

pub const MIN_BASE: u32 = 2;

mod radix;
pub use radix::decode_radix;

mod interpolate;

mod shamir_error;
pub use shamir_error::ShamirError;

mod recover;
pub use recover::{DecodedShare, Share, recover_secret};

mod testcase;
pub use testcase::{RecordError, TestCase, process_file, recover_record};
