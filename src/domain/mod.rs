//! Domain records mirroring the hosted service's collections

mod document;
mod ledger;
mod notice;
mod tenant;
mod work;

pub use document::TenantDocument;
pub use ledger::{Expense, RentPayment};
pub use notice::{Notice, NoticeStatus};
pub use tenant::Tenant;
pub use work::{WorkDetail, WorkStatus};
