//! `kasbuku-session` — the adapter layer between submitted forms and the
//! domain.
//!
//! Pages own their state (sheets plus, for HPP, the stock ledger) for
//! exactly one session; dropping a page is the reset. Handlers validate
//! field presence, parse leniently, mutate state only on valid input,
//! and report the outcome as an [`Alert`] for the UI to flash.

pub mod alert;
pub mod forms;
pub mod page;

pub use alert::Alert;
pub use forms::{ExpenseForm, HppEntryForm, HppForm, RevenueForm};
pub use page::{
    EndingRow, ExpensePage, HppPage, HppSection, OpeningRow, PurchaseRow, RevenuePage,
};
