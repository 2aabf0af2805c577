#![allow(missing_docs)]

mod id666;
pub(crate) mod util;
mod xid6;
