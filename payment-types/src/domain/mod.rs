//! Domain models for the payment core.

pub mod event;
pub mod money;
pub mod order;

pub use event::{EventId, PaymentEvent, PaymentStatus, TransactionType};
pub use money::{Currency, Money};
pub use order::{OrderContext, OrderId, PaymentInstrument, ProviderId, RequestId};
