//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Invoices billed to customers.
    invoices (id) {
        id -> Uuid,
        /// Opaque customer reference.
        #[max_length = 255]
        customer_id -> Varchar,
        /// Minor units; always positive.
        amount -> Int8,
        /// `pending` or `paid`.
        #[max_length = 16]
        status -> Varchar,
        date -> Date,
    }
}

diesel::table! {
    /// Registered accounts. `email` is unique.
    users (id) {
        id -> Uuid,
        #[max_length = 255]
        name -> Varchar,
        #[max_length = 255]
        email -> Varchar,
        /// Argon2 PHC string, never the raw password.
        password -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(invoices, users);
