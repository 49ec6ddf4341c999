//! Placeholder data for the dashboard.
//!
//! Static fixture records used to populate a fresh database for demos and
//! manual testing. The collections are read-only; the `dashboard` crate's
//! seeder inserts them.
//!
//! # Example
//!
//! ```rust
//! use placeholder_data::{CUSTOMERS, INVOICES};
//!
//! let first = &INVOICES[0];
//! assert!(CUSTOMERS.iter().any(|c| c.id == first.customer_id));
//! ```

pub mod records;

pub use records::{Customer, Invoice, InvoiceStatus, Revenue, User};

use time::macros::date;
use uuid::uuid;

const EVIL_RABBIT: uuid::Uuid = uuid!("d6e15727-9fe1-4961-8c5b-ea44a9bd81aa");
const DELBA_DE_OLIVEIRA: uuid::Uuid = uuid!("3958dc9e-712f-4377-85e9-fec4b6a6442a");
const LEE_ROBINSON: uuid::Uuid = uuid!("3958dc9e-742f-4377-85e9-fec4b6a6442a");
const MICHAEL_NOVOTNY: uuid::Uuid = uuid!("76d65c26-f784-44a2-ac19-586678f7c2f2");
const AMY_BURNS: uuid::Uuid = uuid!("cc27c14a-0acf-4f4a-a6c9-d45682c144b9");
const BALAZS_ORBAN: uuid::Uuid = uuid!("13d07535-c59e-4157-a011-f8d2ef4e0cbb");

pub static USERS: &[User] = &[User {
    id: uuid!("410544b2-4001-4271-9855-fec4b6a6442a"),
    name: "User",
    email: "user@nextmail.com",
    password: "123456",
}];

pub static CUSTOMERS: &[Customer] = &[
    Customer {
        id: EVIL_RABBIT,
        name: "Evil Rabbit",
        email: "evil@rabbit.com",
        image_url: "/customers/evil-rabbit.png",
    },
    Customer {
        id: DELBA_DE_OLIVEIRA,
        name: "Delba de Oliveira",
        email: "delba@oliveira.com",
        image_url: "/customers/delba-de-oliveira.png",
    },
    Customer {
        id: LEE_ROBINSON,
        name: "Lee Robinson",
        email: "lee@robinson.com",
        image_url: "/customers/lee-robinson.png",
    },
    Customer {
        id: MICHAEL_NOVOTNY,
        name: "Michael Novotny",
        email: "michael@novotny.com",
        image_url: "/customers/michael-novotny.png",
    },
    Customer {
        id: AMY_BURNS,
        name: "Amy Burns",
        email: "amy@burns.com",
        image_url: "/customers/amy-burns.png",
    },
    Customer {
        id: BALAZS_ORBAN,
        name: "Balazs Orban",
        email: "balazs@orban.com",
        image_url: "/customers/balazs-orban.png",
    },
];

pub static INVOICES: &[Invoice] = &[
    Invoice {
        customer_id: EVIL_RABBIT,
        amount: 15795,
        status: InvoiceStatus::Pending,
        date: date!(2022 - 12 - 06),
    },
    Invoice {
        customer_id: DELBA_DE_OLIVEIRA,
        amount: 20348,
        status: InvoiceStatus::Pending,
        date: date!(2022 - 11 - 14),
    },
    Invoice {
        customer_id: AMY_BURNS,
        amount: 3040,
        status: InvoiceStatus::Paid,
        date: date!(2022 - 10 - 29),
    },
    Invoice {
        customer_id: MICHAEL_NOVOTNY,
        amount: 44800,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 09 - 10),
    },
    Invoice {
        customer_id: BALAZS_ORBAN,
        amount: 34577,
        status: InvoiceStatus::Pending,
        date: date!(2023 - 08 - 05),
    },
    Invoice {
        customer_id: LEE_ROBINSON,
        amount: 54246,
        status: InvoiceStatus::Pending,
        date: date!(2023 - 07 - 16),
    },
    Invoice {
        customer_id: EVIL_RABBIT,
        amount: 666,
        status: InvoiceStatus::Pending,
        date: date!(2023 - 06 - 27),
    },
    Invoice {
        customer_id: MICHAEL_NOVOTNY,
        amount: 32545,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 06 - 09),
    },
    Invoice {
        customer_id: AMY_BURNS,
        amount: 1250,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 06 - 17),
    },
    Invoice {
        customer_id: BALAZS_ORBAN,
        amount: 8546,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 06 - 07),
    },
    Invoice {
        customer_id: DELBA_DE_OLIVEIRA,
        amount: 500,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 08 - 19),
    },
    Invoice {
        customer_id: BALAZS_ORBAN,
        amount: 8945,
        status: InvoiceStatus::Paid,
        date: date!(2023 - 06 - 03),
    },
    Invoice {
        customer_id: LEE_ROBINSON,
        amount: 1000,
        status: InvoiceStatus::Paid,
        date: date!(2022 - 06 - 05),
    },
];

pub static REVENUE: &[Revenue] = &[
    Revenue { month: "Jan", revenue: 2000 },
    Revenue { month: "Feb", revenue: 1800 },
    Revenue { month: "Mar", revenue: 2200 },
    Revenue { month: "Apr", revenue: 2500 },
    Revenue { month: "May", revenue: 2300 },
    Revenue { month: "Jun", revenue: 3200 },
    Revenue { month: "Jul", revenue: 3500 },
    Revenue { month: "Aug", revenue: 3700 },
    Revenue { month: "Sep", revenue: 2500 },
    Revenue { month: "Oct", revenue: 2800 },
    Revenue { month: "Nov", revenue: 3000 },
    Revenue { month: "Dec", revenue: 4800 },
];
